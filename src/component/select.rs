//! Dropdown select widget

use serde::Serialize;
use std::borrow::Cow;

use super::{text, ComponentBase, PropertyValue, Widget};
use crate::style::{Size, FIELD_BASE};

/// One entry of a select
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub disabled: bool,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: false,
        }
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// A dropdown with a leading placeholder entry
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Select {
    #[serde(flatten)]
    base: ComponentBase,
    options: Vec<SelectOption>,
    /// Currently selected option value
    value: Option<String>,
    placeholder: Option<String>,
    disabled: bool,
    required: bool,
    size: String,
    on_change: Option<String>,
}

impl Select {
    /// Create an empty, medium select with a placeholder
    pub fn new(placeholder: impl Into<String>) -> Self {
        let mut select = Self {
            base: ComponentBase::new("select"),
            options: Vec::new(),
            value: None,
            placeholder: Some(placeholder.into()),
            disabled: false,
            required: false,
            size: Size::default().as_str().to_string(),
            on_change: None,
        };
        select.base.add_class(FIELD_BASE);
        select.apply_size();
        select
    }

    /// Append an option
    pub fn with_option(mut self, value: impl Into<String>, label: impl Into<String>) -> Self {
        self.options.push(SelectOption::new(value, label));
        self
    }

    /// Append several prepared options
    pub fn with_options(mut self, options: impl IntoIterator<Item = SelectOption>) -> Self {
        self.options.extend(options);
        self
    }

    /// Mark the option with this value as selected
    pub fn with_selected(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
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

    pub fn with_on_change(mut self, callback: impl Into<String>) -> Self {
        self.on_change = Some(callback.into());
        self
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    pub fn selected(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn placeholder(&self) -> Option<&str> {
        self.placeholder.as_deref()
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

    pub fn on_change(&self) -> Option<&str> {
        self.on_change.as_deref()
    }

    fn apply_size(&mut self) {
        let classes = Size::from_str(&self.size).field_classes();
        self.base.add_class(classes);
    }

    pub(super) fn property(&self, name: &str) -> Option<PropertyValue<'_>> {
        match name {
            "options" => Some(PropertyValue::Options(&self.options)),
            "value" => text(&self.value),
            "placeholder" => text(&self.placeholder),
            "disabled" => Some(PropertyValue::Bool(self.disabled)),
            "required" => Some(PropertyValue::Bool(self.required)),
            "size" => Some(PropertyValue::Text(Cow::Borrowed(&self.size))),
            "onChange" => text(&self.on_change),
            _ => None,
        }
    }
}

impl Widget for Select {
    fn base(&self) -> &ComponentBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ComponentBase {
        &mut self.base
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_keep_order() {
        let select = Select::new("Pick")
            .with_option("a", "Alpha")
            .with_options([SelectOption::new("b", "Beta").with_disabled(true)])
            .with_option("c", "Gamma");

        let values: Vec<&str> = select.options().iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, ["a", "b", "c"]);
        assert!(select.options()[1].disabled);
    }

    #[test]
    fn test_hydration_fields() {
        let select = Select::new("Pick")
            .with_option("a", "Alpha")
            .with_selected("a")
            .with_on_change("changed");
        let json = serde_json::to_value(&select).unwrap();
        assert_eq!(json["type"], "select");
        assert_eq!(json["value"], "a");
        assert_eq!(json["placeholder"], "Pick");
        assert_eq!(
            json["options"],
            serde_json::json!([{"value": "a", "label": "Alpha", "disabled": false}])
        );
        assert_eq!(json["onChange"], "changed");
        assert_eq!(json["size"], "md");
    }
}
