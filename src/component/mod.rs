// Component module - Widget descriptors rendered into the page
//
// Every widget carries a ComponentBase (id, type, classes, visibility, inline
// style, update callback) plus its kind-specific fields. The Component enum is
// the closed set of kinds the renderer dispatches on; Custom carries opaque
// descriptors the renderer does not know how to draw.
//
// Class lists are append-only: styling a widget appends the classes the policy
// derives for the new option and never removes what an earlier call added.

mod button;
mod data_display;
mod input;
mod select;

pub use button::Button;
pub use data_display::{DataDisplay, DataType, DataValue};
pub use input::Input;
pub use select::{Select, SelectOption};

use chrono::Utc;
use serde::{Serialize, Serializer};
use std::borrow::Cow;
use std::sync::atomic::{AtomicU64, Ordering};

// ─────────────────────────────────────────────────────────────────────────────
// Ids
// ─────────────────────────────────────────────────────────────────────────────

/// Generate a component id: `<type>_<unix-millis>_<counter>`
///
/// The counter is process-wide, so ids stay unique even when many components
/// are built within the same millisecond.
fn generate_id(type_name: &str) -> String {
    static COUNTER: AtomicU64 = AtomicU64::new(0);

    let count = COUNTER.fetch_add(1, Ordering::SeqCst);
    format!(
        "{}_{}_{}",
        type_name.to_lowercase(),
        Utc::now().timestamp_millis(),
        count
    )
}

// ─────────────────────────────────────────────────────────────────────────────
// Base attributes
// ─────────────────────────────────────────────────────────────────────────────

/// Attributes shared by every component
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentBase {
    id: String,
    #[serde(rename = "type")]
    type_name: String,
    #[serde(rename = "className", serialize_with = "serialize_class_list")]
    class_list: Vec<String>,
    style: Option<String>,
    visible: bool,
    on_update: Option<String>,
}

impl ComponentBase {
    /// Create a base for the given type name with a fresh id
    pub fn new(type_name: impl Into<String>) -> Self {
        let type_name = type_name.into();
        Self {
            id: generate_id(&type_name),
            type_name,
            class_list: Vec::new(),
            style: None,
            visible: true,
            on_update: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// JSON type name ("button", "input", "select", "dataDisplay", ...)
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Accumulated class tokens in the order they were added
    pub fn class_list(&self) -> &[String] {
        &self.class_list
    }

    /// Class tokens joined by spaces, `None` when nothing was added
    pub fn class_name(&self) -> Option<String> {
        if self.class_list.is_empty() {
            None
        } else {
            Some(self.class_list.join(" "))
        }
    }

    pub fn style(&self) -> Option<&str> {
        self.style.as_deref()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn on_update(&self) -> Option<&str> {
        self.on_update.as_deref()
    }

    /// Append every whitespace-separated token of `classes`.
    /// Duplicates are kept.
    pub fn add_class(&mut self, classes: &str) {
        self.class_list
            .extend(classes.split_whitespace().map(str::to_string));
    }

    /// Whether any accumulated token contains `needle` (e.g. "bg-")
    pub(crate) fn has_class_containing(&self, needle: &str) -> bool {
        self.class_list.iter().any(|c| c.contains(needle))
    }

    fn property(&self, name: &str) -> Option<PropertyValue<'_>> {
        match name {
            "id" => Some(PropertyValue::Text(Cow::Borrowed(&self.id))),
            "type" => Some(PropertyValue::Text(Cow::Borrowed(&self.type_name))),
            "className" => self.class_name().map(|c| PropertyValue::Text(Cow::Owned(c))),
            "style" => text(&self.style),
            "visible" => Some(PropertyValue::Bool(self.visible)),
            "onUpdate" => text(&self.on_update),
            _ => None,
        }
    }
}

fn serialize_class_list<S: Serializer>(classes: &[String], s: S) -> Result<S::Ok, S::Error> {
    if classes.is_empty() {
        s.serialize_none()
    } else {
        s.serialize_str(&classes.join(" "))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Property lookup
// ─────────────────────────────────────────────────────────────────────────────

/// A component attribute looked up by its JSON name
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue<'a> {
    Text(Cow<'a, str>),
    Bool(bool),
    Data(&'a DataValue),
    Options(&'a [SelectOption]),
}

impl PropertyValue<'_> {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropertyValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

/// Present optional strings as a property, absent ones as `None`
pub(crate) fn text(value: &Option<String>) -> Option<PropertyValue<'_>> {
    value
        .as_deref()
        .map(|s| PropertyValue::Text(Cow::Borrowed(s)))
}

// ─────────────────────────────────────────────────────────────────────────────
// Widget trait
// ─────────────────────────────────────────────────────────────────────────────

/// Builder methods shared by every widget kind
pub trait Widget: Sized {
    fn base(&self) -> &ComponentBase;
    fn base_mut(&mut self) -> &mut ComponentBase;

    /// Append classes to the widget's class list
    fn with_class(mut self, classes: &str) -> Self {
        self.base_mut().add_class(classes);
        self
    }

    /// Show or hide the widget. Hidden widgets are still rendered and hydrated.
    fn with_visible(mut self, visible: bool) -> Self {
        self.base_mut().visible = visible;
        self
    }

    /// Set an inline style
    fn with_style(mut self, style: impl Into<String>) -> Self {
        self.base_mut().style = Some(style.into());
        self
    }

    /// Name the script function called when the widget's state is updated
    fn with_on_update(mut self, callback: impl Into<String>) -> Self {
        self.base_mut().on_update = Some(callback.into());
        self
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Custom components
// ─────────────────────────────────────────────────────────────────────────────

/// JSON keys written by ComponentBase
const BASE_FIELDS: &[&str] = &["id", "type", "className", "style", "visible", "onUpdate"];

/// Opaque component of a kind the renderer does not draw.
///
/// Rendered as an HTML comment placeholder; its fields still go into the
/// hydration JSON.
#[derive(Debug, Clone, Serialize)]
pub struct Custom {
    #[serde(flatten)]
    base: ComponentBase,
    #[serde(flatten)]
    fields: serde_json::Map<String, serde_json::Value>,
}

impl Custom {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            base: ComponentBase::new(type_name),
            fields: serde_json::Map::new(),
        }
    }

    /// Attach an extra hydration field.
    ///
    /// Names the base attributes serialize under are ignored, so the
    /// hydrated `id` always matches the rendered one.
    pub fn with_field(mut self, name: impl Into<String>, value: serde_json::Value) -> Self {
        let name = name.into();
        if BASE_FIELDS.contains(&name.as_str()) {
            tracing::debug!(field = %name, "ignoring custom field that shadows a base attribute");
            return self;
        }
        self.fields.insert(name, value);
        self
    }

    pub fn fields(&self) -> &serde_json::Map<String, serde_json::Value> {
        &self.fields
    }
}

impl Widget for Custom {
    fn base(&self) -> &ComponentBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ComponentBase {
        &mut self.base
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Component
// ─────────────────────────────────────────────────────────────────────────────

/// Any widget a page can hold
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Component {
    Button(Button),
    Input(Input),
    Select(Select),
    DataDisplay(DataDisplay),
    Custom(Custom),
}

impl Component {
    pub fn base(&self) -> &ComponentBase {
        match self {
            Component::Button(c) => c.base(),
            Component::Input(c) => c.base(),
            Component::Select(c) => c.base(),
            Component::DataDisplay(c) => c.base(),
            Component::Custom(c) => c.base(),
        }
    }

    pub fn id(&self) -> &str {
        self.base().id()
    }

    /// Look up an attribute by its JSON name.
    ///
    /// Returns `None` for unknown names and unset optional fields; callers
    /// substitute their own default.
    pub fn property(&self, name: &str) -> Option<PropertyValue<'_>> {
        if let Some(value) = self.base().property(name) {
            return Some(value);
        }
        match self {
            Component::Button(c) => c.property(name),
            Component::Input(c) => c.property(name),
            Component::Select(c) => c.property(name),
            Component::DataDisplay(c) => c.property(name),
            Component::Custom(c) => c.fields.get(name).and_then(|v| match v {
                serde_json::Value::String(s) => Some(PropertyValue::Text(Cow::Borrowed(s))),
                serde_json::Value::Bool(b) => Some(PropertyValue::Bool(*b)),
                _ => None,
            }),
        }
    }
}

impl From<Button> for Component {
    fn from(c: Button) -> Self {
        Component::Button(c)
    }
}

impl From<Input> for Component {
    fn from(c: Input) -> Self {
        Component::Input(c)
    }
}

impl From<Select> for Component {
    fn from(c: Select) -> Self {
        Component::Select(c)
    }
}

impl From<DataDisplay> for Component {
    fn from(c: DataDisplay) -> Self {
        Component::DataDisplay(c)
    }
}

impl From<Custom> for Component {
    fn from(c: Custom) -> Self {
        Component::Custom(c)
    }
}
