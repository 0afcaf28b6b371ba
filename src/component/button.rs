//! Button widget

use serde::Serialize;
use std::borrow::Cow;

use super::{text, ComponentBase, PropertyValue, Widget};
use crate::style::{ButtonVariant, Size, BUTTON_BASE};

/// A clickable button
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Button {
    #[serde(flatten)]
    base: ComponentBase,
    text: String,
    /// Variant name as set by the caller: primary, secondary, danger, success, warning
    #[serde(rename = "buttonType")]
    variant: String,
    /// Size name as set by the caller: sm, md, lg
    size: String,
    disabled: bool,
    on_click: Option<String>,
}

impl Button {
    /// Create a primary, medium button
    pub fn new(text: impl Into<String>) -> Self {
        let mut button = Self {
            base: ComponentBase::new("button"),
            text: text.into(),
            variant: ButtonVariant::default().as_str().to_string(),
            size: Size::default().as_str().to_string(),
            disabled: false,
            on_click: None,
        };
        button.base.add_class(BUTTON_BASE);
        button.apply_variant();
        button.apply_size();
        button
    }

    /// Change the variant and append its classes
    pub fn with_variant(mut self, variant: impl Into<String>) -> Self {
        self.variant = variant.into();
        self.apply_variant();
        self
    }

    /// Change the size and append its classes
    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = size.into();
        self.apply_size();
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Name the script function invoked on click
    pub fn with_on_click(mut self, callback: impl Into<String>) -> Self {
        self.on_click = Some(callback.into());
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn variant(&self) -> &str {
        &self.variant
    }

    pub fn size(&self) -> &str {
        &self.size
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn on_click(&self) -> Option<&str> {
        self.on_click.as_deref()
    }

    fn apply_variant(&mut self) {
        let classes = ButtonVariant::from_str(&self.variant).classes();
        self.base.add_class(classes);
    }

    fn apply_size(&mut self) {
        let classes = Size::from_str(&self.size).button_classes();
        self.base.add_class(classes);
    }

    pub(super) fn property(&self, name: &str) -> Option<PropertyValue<'_>> {
        match name {
            "text" => Some(PropertyValue::Text(Cow::Borrowed(&self.text))),
            "buttonType" => Some(PropertyValue::Text(Cow::Borrowed(&self.variant))),
            "size" => Some(PropertyValue::Text(Cow::Borrowed(&self.size))),
            "disabled" => Some(PropertyValue::Bool(self.disabled)),
            "onClick" => text(&self.on_click),
            _ => None,
        }
    }
}

impl Widget for Button {
    fn base(&self) -> &ComponentBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ComponentBase {
        &mut self.base
    }
}
