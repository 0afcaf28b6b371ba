//! Class-list policy
//!
//! Maps enumerated style options to the Tailwind utility classes a widget
//! accumulates. Every option parses from a free-form string; anything
//! unrecognised lands on the documented default branch instead of failing.

use crate::component::DataValue;

// ─────────────────────────────────────────────────────────────────────────────
// Base class strings
// ─────────────────────────────────────────────────────────────────────────────

/// Classes every button starts with
pub const BUTTON_BASE: &str = "px-4 py-2 rounded-md font-medium transition-colors duration-200";

/// Classes every input and select starts with
pub const FIELD_BASE: &str = "w-full px-3 py-2 border border-gray-300 rounded-md shadow-sm focus:outline-none focus:ring-2 focus:ring-blue-500 focus:border-blue-500";

/// Shared prefix of every badge
pub const BADGE_BASE: &str = "inline-flex items-center px-2.5 py-0.5 rounded-full text-xs font-medium";

/// Card container classes (construction time and render-time fallback)
pub const CARD_CLASSES: &str =
    "bg-white dark:bg-gray-800 shadow rounded-lg p-4 border border-gray-200 dark:border-gray-700";

/// Appended at render time when a button carries no background utility
pub const BUTTON_FALLBACK: &str = "bg-blue-500 hover:bg-blue-600 dark:bg-blue-600 dark:hover:bg-blue-700 text-white font-medium py-2 px-4 rounded-lg transition-colors duration-200";

/// Appended at render time when an input carries no border utility
pub const INPUT_FALLBACK: &str = "w-full px-3 py-2 border border-gray-300 dark:border-gray-600 rounded-md shadow-sm placeholder-gray-400 dark:placeholder-gray-500 focus:outline-none focus:ring-blue-500 focus:border-blue-500 bg-white dark:bg-gray-700 text-gray-900 dark:text-white disabled:bg-gray-100 dark:disabled:bg-gray-800 disabled:text-gray-500 dark:disabled:text-gray-400 transition-colors duration-200";

/// Appended at render time when a select carries no border utility
pub const SELECT_FALLBACK: &str = "w-full px-3 py-2 border border-gray-300 dark:border-gray-600 rounded-md shadow-sm focus:outline-none focus:ring-blue-500 focus:border-blue-500 bg-white dark:bg-gray-700 text-gray-900 dark:text-white disabled:bg-gray-100 dark:disabled:bg-gray-800 disabled:text-gray-500 dark:disabled:text-gray-400 transition-colors duration-200";

// ─────────────────────────────────────────────────────────────────────────────
// Button variant
// ─────────────────────────────────────────────────────────────────────────────

/// Button color variant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Danger,
    Success,
    Warning,
}

impl ButtonVariant {
    /// Parse a variant name, falling back to primary
    pub fn from_str(s: &str) -> Self {
        match s {
            "primary" => Self::Primary,
            "secondary" => Self::Secondary,
            "danger" => Self::Danger,
            "success" => Self::Success,
            "warning" => Self::Warning,
            _ => Self::Primary,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Danger => "danger",
            Self::Success => "success",
            Self::Warning => "warning",
        }
    }

    pub fn classes(&self) -> &'static str {
        match self {
            Self::Primary => "bg-blue-500 hover:bg-blue-600 text-white",
            Self::Secondary => "bg-gray-500 hover:bg-gray-600 text-white",
            Self::Danger => "bg-red-500 hover:bg-red-600 text-white",
            Self::Success => "bg-green-500 hover:bg-green-600 text-white",
            Self::Warning => "bg-yellow-500 hover:bg-yellow-600 text-white",
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Size
// ─────────────────────────────────────────────────────────────────────────────

/// Widget size shared by buttons, inputs and selects
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Size {
    Small,
    #[default]
    Medium,
    Large,
}

impl Size {
    /// Parse a size name ("sm", "md", "lg"), falling back to medium
    pub fn from_str(s: &str) -> Self {
        match s {
            "sm" => Self::Small,
            "lg" => Self::Large,
            _ => Self::Medium,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Small => "sm",
            Self::Medium => "md",
            Self::Large => "lg",
        }
    }

    /// Size classes for buttons
    pub fn button_classes(&self) -> &'static str {
        match self {
            Self::Small => "px-2 py-1 text-sm",
            Self::Medium => "px-4 py-2",
            Self::Large => "px-6 py-3 text-lg",
        }
    }

    /// Size classes for inputs and selects
    pub fn field_classes(&self) -> &'static str {
        match self {
            Self::Small => "px-2 py-1 text-sm",
            Self::Medium => "px-3 py-2",
            Self::Large => "px-4 py-3 text-lg",
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Input type
// ─────────────────────────────────────────────────────────────────────────────

/// HTML input type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputType {
    #[default]
    Text,
    Password,
    Email,
    Number,
    Tel,
    Url,
}

impl InputType {
    /// Parse an input type, falling back to text
    pub fn from_str(s: &str) -> Self {
        match s {
            "text" => Self::Text,
            "password" => Self::Password,
            "email" => Self::Email,
            "number" => Self::Number,
            "tel" => Self::Tel,
            "url" => Self::Url,
            _ => Self::Text,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Password => "password",
            Self::Email => "email",
            Self::Number => "number",
            Self::Tel => "tel",
            Self::Url => "url",
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Display style
// ─────────────────────────────────────────────────────────────────────────────

/// How a DataDisplay presents its value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DisplayStyle {
    #[default]
    Text,
    Badge,
    Card,
    Table,
}

impl DisplayStyle {
    /// Parse a display style, falling back to text
    pub fn from_str(s: &str) -> Self {
        match s {
            "badge" => Self::Badge,
            "card" => Self::Card,
            "table" => Self::Table,
            _ => Self::Text,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Badge => "badge",
            Self::Card => "card",
            Self::Table => "table",
        }
    }

    /// Container classes applied when the style is set.
    ///
    /// Badges get nothing here: their classes depend on the value and are
    /// computed at render time by [`badge_classes`].
    pub fn container_classes(&self) -> Option<&'static str> {
        match self {
            Self::Badge => None,
            Self::Card => Some(CARD_CLASSES),
            Self::Table => Some("border-collapse border border-gray-300 dark:border-gray-600"),
            Self::Text => Some("text-gray-900 dark:text-white"),
        }
    }
}

/// Badge classes for a value: blue for numbers, green/red for booleans,
/// gray for everything else
pub fn badge_classes(value: &DataValue) -> String {
    let color = match value {
        DataValue::Int(_) | DataValue::Long(_) | DataValue::Double(_) => "bg-blue-100 text-blue-800",
        DataValue::Bool(true) => "bg-green-100 text-green-800",
        DataValue::Bool(false) => "bg-red-100 text-red-800",
        DataValue::Str(_) => "bg-gray-100 text-gray-800",
    };
    format!("{} {}", BADGE_BASE, color)
}

// ─────────────────────────────────────────────────────────────────────────────
// Theme
// ─────────────────────────────────────────────────────────────────────────────

/// Page color theme
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
    /// Follow the browser's `prefers-color-scheme`
    Auto,
}

impl Theme {
    /// Parse a theme name, falling back to light
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "dark" => Self::Dark,
            "auto" => Self::Auto,
            _ => Self::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Auto => "auto",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_variant_is_primary() {
        for name in ["purple", "", "PRIMARY", "info"] {
            let variant = ButtonVariant::from_str(name);
            assert_eq!(variant, ButtonVariant::Primary);
            assert_eq!(variant.classes(), ButtonVariant::Primary.classes());
        }
    }

    #[test]
    fn test_variant_colors() {
        assert!(ButtonVariant::from_str("danger").classes().contains("bg-red-500"));
        assert!(ButtonVariant::from_str("success").classes().contains("bg-green-500"));
        assert!(ButtonVariant::from_str("warning").classes().contains("bg-yellow-500"));
        assert!(ButtonVariant::from_str("secondary").classes().contains("bg-gray-500"));
    }

    #[test]
    fn test_size_fallback() {
        assert_eq!(Size::from_str("xl"), Size::Medium);
        assert_eq!(Size::from_str("sm").button_classes(), "px-2 py-1 text-sm");
        assert_eq!(Size::from_str("lg").field_classes(), "px-4 py-3 text-lg");
        assert_eq!(Size::Medium.field_classes(), "px-3 py-2");
    }

    #[test]
    fn test_display_style_containers() {
        assert_eq!(DisplayStyle::from_str("badge").container_classes(), None);
        assert_eq!(DisplayStyle::from_str("card").container_classes(), Some(CARD_CLASSES));
        assert_eq!(
            DisplayStyle::from_str("fancy").container_classes(),
            Some("text-gray-900 dark:text-white")
        );
    }

    #[test]
    fn test_badge_classes_by_type() {
        assert!(badge_classes(&DataValue::Bool(true)).contains("bg-green-100"));
        assert!(badge_classes(&DataValue::Bool(false)).contains("bg-red-100"));
        assert!(badge_classes(&DataValue::Int(1)).contains("bg-blue-100"));
        assert!(badge_classes(&DataValue::Long(1)).contains("bg-blue-100"));
        assert!(badge_classes(&DataValue::Double(1.5)).contains("bg-blue-100"));
        assert!(badge_classes(&DataValue::Str("x".into())).contains("bg-gray-100"));
        assert!(badge_classes(&DataValue::Int(1)).starts_with(BADGE_BASE));
    }

    #[test]
    fn test_theme_parsing() {
        assert_eq!(Theme::from_str("Dark"), Theme::Dark);
        assert_eq!(Theme::from_str("auto"), Theme::Auto);
        assert_eq!(Theme::from_str("solarized"), Theme::Light);
    }
}
