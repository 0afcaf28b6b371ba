//! HTML escaping and attribute helpers

use crate::component::ComponentBase;

/// Escape text for element content and double-quoted attribute values
pub fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Make JSON safe to embed inside a `<script>` element.
///
/// `</` becomes `<\/`, which JavaScript string literals read back as `</`
/// but HTML parsers do not treat as a closing tag.
pub fn escape_script_json(json: &str) -> String {
    json.replace("</", "<\\/")
}

/// ` name="value"` with the value escaped
pub fn attr(name: &str, value: &str) -> String {
    format!(" {}=\"{}\"", name, escape(value))
}

/// ` name` when `on` is set
pub fn flag(name: &str, on: bool) -> String {
    if on {
        format!(" {}", name)
    } else {
        String::new()
    }
}

/// ` handler="callback()"` when a callback is named
pub fn handler(event: &str, callback: Option<&str>) -> String {
    match callback {
        Some(name) => attr(event, &format!("{}()", name)),
        None => String::new(),
    }
}

/// The component's inline style attribute.
///
/// Hidden components get `display: none;`, appended to any inline style
/// they already carry.
pub fn style_attr(base: &ComponentBase) -> String {
    let inline = base.style().map(str::trim).filter(|s| !s.is_empty());
    match (inline, base.is_visible()) {
        (None, true) => String::new(),
        (Some(style), true) => attr("style", style),
        (None, false) => attr("style", "display: none;"),
        (Some(style), false) => attr(
            "style",
            &format!("{}; display: none;", style.trim_end_matches(';')),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::{Button, Widget};

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#x27;Jerry&#x27;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_escape_script_json() {
        assert_eq!(
            escape_script_json(r#"["</script><script>alert(1)</script>"]"#),
            r#"["<\/script><script>alert(1)<\/script>"]"#
        );
    }

    #[test]
    fn test_style_attr_combinations() {
        let shown = Button::new("a");
        assert_eq!(style_attr(shown.base()), "");

        let styled = Button::new("a").with_style("color: red;");
        assert_eq!(style_attr(styled.base()), r#" style="color: red;""#);

        let hidden = Button::new("a").with_visible(false);
        assert_eq!(style_attr(hidden.base()), r#" style="display: none;""#);

        let both = Button::new("a").with_style("color: red;").with_visible(false);
        assert_eq!(
            style_attr(both.base()),
            r#" style="color: red; display: none;""#
        );
    }

    #[test]
    fn test_handler() {
        assert_eq!(handler("onclick", Some("go")), r#" onclick="go()""#);
        assert_eq!(handler("onclick", None), "");
    }
}
