//! Text input widget

use serde::Serialize;
use std::borrow::Cow;

use super::{text, ComponentBase, PropertyValue, Widget};
use crate::style::{InputType, Size, FIELD_BASE};

/// A single-line form input
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Input {
    #[serde(flatten)]
    base: ComponentBase,
    /// text, password, email, number, tel, url
    input_type: String,
    placeholder: Option<String>,
    value: Option<String>,
    readonly: bool,
    disabled: bool,
    required: bool,
    size: String,
    on_input: Option<String>,
    on_focus: Option<String>,
    on_blur: Option<String>,
}

impl Input {
    /// Create a medium text input with a placeholder
    pub fn new(placeholder: impl Into<String>) -> Self {
        let mut input = Self {
            base: ComponentBase::new("input"),
            input_type: InputType::default().as_str().to_string(),
            placeholder: Some(placeholder.into()),
            value: None,
            readonly: false,
            disabled: false,
            required: false,
            size: Size::default().as_str().to_string(),
            on_input: None,
            on_focus: None,
            on_blur: None,
        };
        input.base.add_class(FIELD_BASE);
        input.apply_size();
        input
    }

    /// Set the HTML input type. Does not touch the class list.
    pub fn with_input_type(mut self, input_type: impl Into<String>) -> Self {
        self.input_type = input_type.into();
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_readonly(mut self, readonly: bool) -> Self {
        self.readonly = readonly;
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Change the size and append its classes
    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = size.into();
        self.apply_size();
        self
    }

    pub fn with_on_input(mut self, callback: impl Into<String>) -> Self {
        self.on_input = Some(callback.into());
        self
    }

    pub fn with_on_focus(mut self, callback: impl Into<String>) -> Self {
        self.on_focus = Some(callback.into());
        self
    }

    pub fn with_on_blur(mut self, callback: impl Into<String>) -> Self {
        self.on_blur = Some(callback.into());
        self
    }

    pub fn input_type(&self) -> &str {
        &self.input_type
    }

    pub fn placeholder(&self) -> Option<&str> {
        self.placeholder.as_deref()
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn is_readonly(&self) -> bool {
        self.readonly
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn size(&self) -> &str {
        &self.size
    }

    pub fn on_input(&self) -> Option<&str> {
        self.on_input.as_deref()
    }

    pub fn on_focus(&self) -> Option<&str> {
        self.on_focus.as_deref()
    }

    pub fn on_blur(&self) -> Option<&str> {
        self.on_blur.as_deref()
    }

    fn apply_size(&mut self) {
        let classes = Size::from_str(&self.size).field_classes();
        self.base.add_class(classes);
    }

    pub(super) fn property(&self, name: &str) -> Option<PropertyValue<'_>> {
        match name {
            "inputType" => Some(PropertyValue::Text(Cow::Borrowed(&self.input_type))),
            "placeholder" => text(&self.placeholder),
            "value" => text(&self.value),
            "readonly" => Some(PropertyValue::Bool(self.readonly)),
            "disabled" => Some(PropertyValue::Bool(self.disabled)),
            "required" => Some(PropertyValue::Bool(self.required)),
            "size" => Some(PropertyValue::Text(Cow::Borrowed(&self.size))),
            "onInput" => text(&self.on_input),
            "onFocus" => text(&self.on_focus),
            "onBlur" => text(&self.on_blur),
            _ => None,
        }
    }
}

impl Widget for Input {
    fn base(&self) -> &ComponentBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ComponentBase {
        &mut self.base
    }
}
