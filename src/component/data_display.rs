//! Read-only value display widget

use serde::Serialize;
use std::borrow::Cow;
use std::fmt;

use super::{text, ComponentBase, PropertyValue, Widget};
use crate::format::format_value;
use crate::style::DisplayStyle;

/// A displayed value, tagged by the type it was built from
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DataValue {
    Str(String),
    Int(i32),
    Long(i64),
    Double(f64),
    Bool(bool),
}

impl DataValue {
    pub fn data_type(&self) -> DataType {
        match self {
            DataValue::Str(_) => DataType::String,
            DataValue::Int(_) => DataType::Int,
            DataValue::Long(_) => DataType::Long,
            DataValue::Double(_) => DataType::Double,
            DataValue::Bool(_) => DataType::Boolean,
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            DataValue::Int(_) | DataValue::Long(_) | DataValue::Double(_)
        )
    }
}

/// Plain string form: integers in decimal, doubles always with a fraction
/// or exponent (`3.0`, `12.5`, `1.0E10`), booleans as `true`/`false`
impl fmt::Display for DataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataValue::Str(s) => f.write_str(s),
            DataValue::Int(n) => write!(f, "{}", n),
            DataValue::Long(n) => write!(f, "{}", n),
            DataValue::Double(d) => f.write_str(&plain_double(*d)),
            DataValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

fn plain_double(d: f64) -> String {
    if d.is_nan() {
        return "NaN".to_string();
    }
    if d.is_infinite() {
        return if d > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let magnitude = d.abs();
    if magnitude != 0.0 && !(1e-3..1e7).contains(&magnitude) {
        // Scientific notation: 1.0E10, 2.5E-4
        let sci = format!("{:e}", d);
        let (mantissa, exponent) = sci.split_once('e').unwrap_or((&sci, "0"));
        if mantissa.contains('.') {
            format!("{}E{}", mantissa, exponent)
        } else {
            format!("{}.0E{}", mantissa, exponent)
        }
    } else if d.fract() == 0.0 {
        format!("{:.1}", d)
    } else {
        d.to_string()
    }
}

impl From<&str> for DataValue {
    fn from(v: &str) -> Self {
        DataValue::Str(v.to_string())
    }
}

impl From<String> for DataValue {
    fn from(v: String) -> Self {
        DataValue::Str(v)
    }
}

impl From<i32> for DataValue {
    fn from(v: i32) -> Self {
        DataValue::Int(v)
    }
}

impl From<i64> for DataValue {
    fn from(v: i64) -> Self {
        DataValue::Long(v)
    }
}

impl From<f64> for DataValue {
    fn from(v: f64) -> Self {
        DataValue::Double(v)
    }
}

/// Widened to a double; there is no separate single-precision type
impl From<f32> for DataValue {
    fn from(v: f32) -> Self {
        DataValue::Double(v.into())
    }
}

impl From<bool> for DataValue {
    fn from(v: bool) -> Self {
        DataValue::Bool(v)
    }
}

/// Type tag inferred from the value at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    String,
    Int,
    Long,
    Double,
    Boolean,
}

impl DataType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataType::String => "string",
            DataType::Int => "int",
            DataType::Long => "long",
            DataType::Double => "double",
            DataType::Boolean => "boolean",
        }
    }
}

/// A labelled or bare value shown as text, badge, card or table
#[derive(Debug, Clone)]
pub struct DataDisplay {
    base: ComponentBase,
    value: DataValue,
    data_type: DataType,
    format: Option<String>,
    label: Option<String>,
    show_label: bool,
    /// text, badge, card, table
    display_style: String,
}

impl DataDisplay {
    /// Display a bare value in text style
    pub fn new(value: impl Into<DataValue>) -> Self {
        let value = value.into();
        let mut display = Self {
            base: ComponentBase::new("dataDisplay"),
            data_type: value.data_type(),
            value,
            format: None,
            label: None,
            show_label: false,
            display_style: DisplayStyle::default().as_str().to_string(),
        };
        display.apply_display_style();
        display
    }

    /// Display a value with a visible label
    pub fn labeled(label: impl Into<String>, value: impl Into<DataValue>) -> Self {
        let mut display = Self::new(value);
        display.label = Some(label.into());
        display.show_label = true;
        display
    }

    /// Change the display style and append its container classes
    pub fn with_display_style(mut self, style: impl Into<String>) -> Self {
        self.display_style = style.into();
        self.apply_display_style();
        self
    }

    /// Set a printf-style template (e.g. `%.2f`) applied to numeric values
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_show_label(mut self, show: bool) -> Self {
        self.show_label = show;
        self
    }

    pub fn value(&self) -> &DataValue {
        &self.value
    }

    pub fn data_type(&self) -> DataType {
        self.data_type
    }

    pub fn format(&self) -> Option<&str> {
        self.format.as_deref()
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn shows_label(&self) -> bool {
        self.show_label
    }

    pub fn display_style(&self) -> &str {
        &self.display_style
    }

    /// The value's display text.
    ///
    /// Numeric values go through the format template when one is set; a
    /// template that does not fit the value falls back to the plain form.
    pub fn formatted_value(&self) -> String {
        match &self.format {
            Some(template) if !template.is_empty() && self.value.is_numeric() => {
                match format_value(template, &self.value) {
                    Ok(formatted) => formatted,
                    Err(e) => {
                        tracing::debug!(
                            "Format {:?} not applicable to {}: {}",
                            template,
                            self.value,
                            e
                        );
                        self.value.to_string()
                    }
                }
            }
            _ => self.value.to_string(),
        }
    }

    fn apply_display_style(&mut self) {
        if let Some(classes) = DisplayStyle::from_str(&self.display_style).container_classes() {
            self.base.add_class(classes);
        }
    }

    pub(super) fn property(&self, name: &str) -> Option<PropertyValue<'_>> {
        match name {
            "value" => Some(PropertyValue::Data(&self.value)),
            "dataType" => Some(PropertyValue::Text(Cow::Borrowed(self.data_type.as_str()))),
            "format" => text(&self.format),
            "label" => text(&self.label),
            "showLabel" => Some(PropertyValue::Bool(self.show_label)),
            "displayStyle" => Some(PropertyValue::Text(Cow::Borrowed(&self.display_style))),
            "formattedValue" => Some(PropertyValue::Text(Cow::Owned(self.formatted_value()))),
            _ => None,
        }
    }
}

impl Widget for DataDisplay {
    fn base(&self) -> &ComponentBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ComponentBase {
        &mut self.base
    }
}

/// Hydration view: the stored fields plus the formatted value
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DataDisplayJson<'a> {
    #[serde(flatten)]
    base: &'a ComponentBase,
    value: &'a DataValue,
    data_type: DataType,
    format: Option<&'a str>,
    label: Option<&'a str>,
    show_label: bool,
    display_style: &'a str,
    formatted_value: String,
}

impl Serialize for DataDisplay {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        DataDisplayJson {
            base: &self.base,
            value: &self.value,
            data_type: self.data_type,
            format: self.format.as_deref(),
            label: self.label.as_deref(),
            show_label: self.show_label,
            display_style: &self.display_style,
            formatted_value: self.formatted_value(),
        }
        .serialize(serializer)
    }
}
