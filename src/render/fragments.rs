//! Per-kind HTML fragments
//!
//! Each renderer emits one element, indented to sit inside the page's
//! component container. Caller-supplied text is escaped; class strings come
//! from the policy and are written as-is.

use super::html::{attr, escape, flag, handler, style_attr};
use crate::component::{Button, Component, DataDisplay, Input, Select, Widget};
use crate::style::{
    badge_classes, DisplayStyle, InputType, BUTTON_FALLBACK, CARD_CLASSES, INPUT_FALLBACK,
    SELECT_FALLBACK,
};

const OPTION_CLASSES: &str = "bg-white dark:bg-gray-700 text-gray-900 dark:text-white";
const BADGE_LABEL_CLASSES: &str = "text-sm font-medium text-gray-700 dark:text-gray-300";
const LABEL_CLASSES: &str = "block text-sm font-medium text-gray-700 dark:text-gray-300 mb-1";
const VALUE_CLASSES: &str = "text-gray-900 dark:text-white";

/// Render one component; kinds without a renderer become a comment
pub fn render_component(component: &Component) -> String {
    match component {
        Component::Button(c) => render_button(c),
        Component::Input(c) => render_input(c),
        Component::Select(c) => render_select(c),
        Component::DataDisplay(c) => render_data_display(c),
        Component::Custom(c) => {
            tracing::debug!("No renderer for component type {:?}", c.base().type_name());
            format!(
                "        <!-- unknown component type: {} -->\n",
                comment_text(c.base().type_name())
            )
        }
    }
}

/// Text that cannot end or nest an HTML comment: escaped, with no `--` left
fn comment_text(text: &str) -> String {
    let mut text = escape(text);
    while text.contains("--") {
        text = text.replace("--", "- -");
    }
    text
}

/// Class string, with `fallback` appended when no token contains `needle`
fn classes_with_fallback<W: Widget>(widget: &W, needle: &str, fallback: &str) -> String {
    let base = widget.base();
    let classes = base.class_name().unwrap_or_default();
    if base.has_class_containing(needle) {
        classes
    } else if classes.is_empty() {
        fallback.to_string()
    } else {
        format!("{} {}", classes, fallback)
    }
}

fn render_button(button: &Button) -> String {
    let base = button.base();
    format!(
        "        <button{}{}{}{}{}>{}</button>\n",
        attr("id", base.id()),
        attr("class", &classes_with_fallback(button, "bg-", BUTTON_FALLBACK)),
        handler("onclick", button.on_click()),
        flag("disabled", button.is_disabled()),
        style_attr(base),
        escape(button.text()),
    )
}

fn render_input(input: &Input) -> String {
    let base = input.base();
    format!(
        "        <input{}{}{}{}{}{}{}{}{}{}{}{}>\n",
        attr("id", base.id()),
        attr("type", InputType::from_str(input.input_type()).as_str()),
        attr("class", &classes_with_fallback(input, "border", INPUT_FALLBACK)),
        attr("placeholder", input.placeholder().unwrap_or_default()),
        attr("value", input.value().unwrap_or_default()),
        handler("oninput", input.on_input()),
        handler("onfocus", input.on_focus()),
        handler("onblur", input.on_blur()),
        flag("readonly", input.is_readonly()),
        flag("disabled", input.is_disabled()),
        flag("required", input.is_required()),
        style_attr(base),
    )
}

fn render_select(select: &Select) -> String {
    let base = select.base();
    let selected = select.selected();
    let has_selection = select
        .options()
        .iter()
        .any(|o| Some(o.value.as_str()) == selected);

    let mut html = format!(
        "        <select{}{}{}{}{}{}>\n",
        attr("id", base.id()),
        attr("class", &classes_with_fallback(select, "border", SELECT_FALLBACK)),
        flag("disabled", select.is_disabled()),
        flag("required", select.is_required()),
        handler("onchange", select.on_change()),
        style_attr(base),
    );

    // Placeholder entry is preselected only when nothing else is
    html.push_str(&format!(
        "            <option value=\"\" disabled{}{}>{}</option>\n",
        flag("selected", !has_selection),
        attr("class", OPTION_CLASSES),
        escape(select.placeholder().unwrap_or_default()),
    ));

    for option in select.options() {
        html.push_str(&format!(
            "            <option{}{}{}{}>{}</option>\n",
            attr("value", &option.value),
            flag("selected", Some(option.value.as_str()) == selected),
            flag("disabled", option.disabled),
            attr("class", OPTION_CLASSES),
            escape(&option.label),
        ));
    }

    html.push_str("        </select>\n");
    html
}

fn render_data_display(display: &DataDisplay) -> String {
    let base = display.base();
    let value = escape(&display.formatted_value());
    let label = display
        .label()
        .filter(|l| display.shows_label() && !l.is_empty())
        .map(escape);

    match DisplayStyle::from_str(display.display_style()) {
        DisplayStyle::Badge => {
            let badge = badge_classes(display.value());
            match label {
                Some(label) => format!(
                    "        <div{}{}{}>\n            <span{}>{}</span>\n            <span{}>{}</span>\n        </div>\n",
                    attr("id", base.id()),
                    attr("class", "flex items-center space-x-2"),
                    style_attr(base),
                    attr("class", BADGE_LABEL_CLASSES),
                    label,
                    attr("class", &badge),
                    value,
                ),
                None => format!(
                    "        <span{}{}{}>{}</span>\n",
                    attr("id", base.id()),
                    attr("class", &badge),
                    style_attr(base),
                    value,
                ),
            }
        }
        style => {
            let container = if style == DisplayStyle::Card {
                classes_with_fallback(display, "bg-", CARD_CLASSES)
            } else {
                base.class_name().unwrap_or_default()
            };

            let mut html = format!(
                "        <div{}{}{}>\n",
                attr("id", base.id()),
                attr("class", &container),
                style_attr(base),
            );
            match label {
                Some(label) => {
                    html.push_str(&format!(
                        "            <label{}>{}</label>\n",
                        attr("class", LABEL_CLASSES),
                        label
                    ));
                    html.push_str("            <div class=\"mt-1\">\n");
                    html.push_str(&format!(
                        "                <span{}>{}</span>\n",
                        attr("class", VALUE_CLASSES),
                        value
                    ));
                    html.push_str("            </div>\n");
                }
                None => {
                    html.push_str(&format!(
                        "            <span{}>{}</span>\n",
                        attr("class", VALUE_CLASSES),
                        value
                    ));
                }
            }
            html.push_str("        </div>\n");
            html
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::{Custom, SelectOption};

    fn class_attr(html: &str) -> &str {
        let start = html.find("class=\"").map(|i| i + 7).unwrap_or(0);
        let end = html[start..].find('"').map(|i| start + i).unwrap_or(html.len());
        &html[start..end]
    }

    #[test]
    fn test_button_fragment() {
        let button = Button::new("Go").with_variant("danger").with_size("sm");
        let html = render_component(&button.into());

        assert!(html.trim_start().starts_with("<button id=\"button_"));
        let classes = class_attr(&html);
        assert!(classes.contains("bg-red-500"));
        assert!(classes.contains("text-sm"));
        assert!(html.trim_end().ends_with(">Go</button>"));
        assert!(!html.contains("onclick"));
        assert!(!html.contains("style="));
    }

    #[test]
    fn test_button_fallback_only_without_background() {
        // Policy always adds a background, so no fallback
        let html = render_component(&Button::new("a").into());
        assert!(!html.contains("dark:bg-blue-600"));

        let mut custom = Button::new("a");
        custom.base_mut().add_class("shadow");
        assert!(render_component(&custom.into()).contains("shadow"));
    }

    #[test]
    fn test_button_escapes_text_and_binds_click() {
        let button = Button::new("<b>Save</b>").with_on_click("save");
        let html = render_component(&button.into());
        assert!(html.contains("&lt;b&gt;Save&lt;/b&gt;"));
        assert!(html.contains(r#" onclick="save()""#));
    }

    #[test]
    fn test_input_fragment() {
        let input = Input::new("Email")
            .with_input_type("email")
            .with_value("a@b.c")
            .with_required(true)
            .with_readonly(true)
            .with_on_input("changed");
        let html = render_component(&input.into());

        assert!(html.contains(r#" type="email""#));
        assert!(html.contains(r#" placeholder="Email""#));
        assert!(html.contains(r#" value="a@b.c""#));
        assert!(html.contains(r#" oninput="changed()""#));
        assert!(html.contains(" readonly"));
        assert!(html.contains(" required"));
        assert!(!html.contains(" disabled"));
    }

    #[test]
    fn test_input_unknown_type_renders_text() {
        let input = Input::new("x").with_input_type("hologram");
        let html = render_component(&input.into());
        assert!(html.contains(r#" type="text""#));
    }

    #[test]
    fn test_select_option_count_and_order() {
        let select = Select::new("Choose")
            .with_option("a", "Alpha")
            .with_option("b", "Beta");
        let html = render_component(&select.into());

        assert_eq!(html.matches("<option").count(), 3);
        let placeholder = html.find("Choose").unwrap();
        let alpha = html.find("Alpha").unwrap();
        let beta = html.find("Beta").unwrap();
        assert!(placeholder < alpha && alpha < beta);
        // Nothing selected: the placeholder is
        assert!(html.contains(r#"<option value="" disabled selected"#));
    }

    #[test]
    fn test_select_marks_selection_and_disabled_options() {
        let select = Select::new("Choose")
            .with_option("a", "Alpha")
            .with_options([SelectOption::new("b", "Beta").with_disabled(true)])
            .with_selected("a");
        let html = render_component(&select.into());

        assert!(html.contains(r#"<option value="a" selected"#));
        assert!(html.contains(r#"<option value="b" disabled"#));
        assert!(!html.contains(r#"<option value="" disabled selected"#));
    }

    #[test]
    fn test_card_with_label() {
        let display = DataDisplay::labeled("Balance", 12.5)
            .with_format("%.1f")
            .with_display_style("card");
        let html = render_component(&display.into());

        assert!(html.trim_start().starts_with("<div id=\"datadisplay_"));
        assert!(class_attr(&html).contains("shadow rounded-lg p-4"));
        assert!(html.contains(">Balance</label>"));
        assert!(html.contains(">12.5</span>"));
    }

    #[test]
    fn test_text_without_label() {
        let html = render_component(&DataDisplay::new("hello").into());
        assert!(!html.contains("<label"));
        assert!(html.contains(">hello</span>"));
        assert!(html.trim_end().ends_with("</div>"));
    }

    #[test]
    fn test_badge_colors() {
        let cases: [(DataDisplay, &str); 4] = [
            (DataDisplay::new(true), "bg-green-100"),
            (DataDisplay::new(false), "bg-red-100"),
            (DataDisplay::new(7_i64), "bg-blue-100"),
            (DataDisplay::new("n/a"), "bg-gray-100"),
        ];
        for (display, expected) in cases {
            let html = render_component(&display.with_display_style("badge").into());
            assert!(html.trim_start().starts_with("<span"), "{}", html);
            assert!(html.contains(expected), "expected {} in {}", expected, html);
        }
    }

    #[test]
    fn test_labeled_badge_wraps_in_div() {
        let display = DataDisplay::labeled("Active", true).with_display_style("badge");
        let html = render_component(&display.into());
        assert!(html.trim_start().starts_with("<div id=\"datadisplay_"));
        assert!(html.contains(r#"class="flex items-center space-x-2""#));
        assert!(html.contains(">Active</span>"));
        assert!(html.contains("bg-green-100"));
    }

    #[test]
    fn test_hidden_components_stay_in_markup() {
        let fragments = [
            render_component(&Button::new("a").with_visible(false).into()),
            render_component(&Input::new("a").with_visible(false).into()),
            render_component(&Select::new("a").with_visible(false).into()),
            render_component(
                &DataDisplay::new(1)
                    .with_display_style("badge")
                    .with_visible(false)
                    .into(),
            ),
            render_component(&DataDisplay::new(1).with_visible(false).into()),
        ];
        for html in fragments {
            assert!(html.contains(r#"style="display: none;""#), "{}", html);
        }
    }

    #[test]
    fn test_custom_kind_is_placeholder() {
        let html = render_component(&Custom::new("chart").into());
        assert_eq!(html, "        <!-- unknown component type: chart -->\n");
    }

    #[test]
    fn test_custom_kind_name_cannot_close_comment() {
        for name in ["x--->INJECTED<b>", "a----b", "--!>", "-"] {
            let html = render_component(&Custom::new(name).into());
            let body = html
                .trim()
                .strip_prefix("<!--")
                .and_then(|rest| rest.strip_suffix("-->"))
                .unwrap();
            assert!(!body.contains("--"), "{:?} rendered as {:?}", name, html);
            assert!(!body.contains('<') && !body.contains('>'));
        }

        let html = render_component(&Custom::new("x--->INJECTED<b>").into());
        assert_eq!(
            html,
            "        <!-- unknown component type: x- - -&gt;INJECTED&lt;b&gt; -->\n"
        );
    }
}
