// Render module - Page assembly
//
// A Page owns its components, named script callbacks, theme and custom
// assets. Rendering is a pure function of that state: it never fails and
// never mutates the page, so the same page always yields the same document.
//
// Document layout:
//   head (tailwind, dark overrides, custom css)
//   -> header bar (title + theme toggle)
//   -> component fragments, in insertion order
//   -> script (theme logic, hydration json, client runtime, callbacks,
//      custom script, bootstrap)

mod assets;
mod fragments;
pub mod html;

pub use fragments::render_component;

use crate::component::Component;
use crate::style::Theme;

pub const DEFAULT_TITLE: &str = "Tailpage";

/// A renderable page of components
#[derive(Debug, Clone)]
pub struct Page {
    title: String,
    components: Vec<Component>,
    /// (name, body) in first-insertion order
    callbacks: Vec<(String, String)>,
    theme: Theme,
    custom_styles: String,
    custom_scripts: String,
}

impl Default for Page {
    fn default() -> Self {
        Self::new(DEFAULT_TITLE)
    }
}

impl Page {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            components: Vec::new(),
            callbacks: Vec::new(),
            theme: Theme::default(),
            custom_styles: String::new(),
            custom_scripts: String::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Append a component; render order is insertion order
    pub fn with_component(mut self, component: impl Into<Component>) -> Self {
        self.components.push(component.into());
        self
    }

    /// Register a named script callback.
    ///
    /// The body is emitted verbatim into the page script, unescaped. Adding
    /// a name that already exists replaces its body in place.
    pub fn with_callback(mut self, name: impl Into<String>, code: impl Into<String>) -> Self {
        let name = name.into();
        let code = code.into();
        match self.callbacks.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = code,
            None => self.callbacks.push((name, code)),
        }
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Extra CSS, placed in its own `<style>` element in the head
    pub fn with_styles(mut self, css: impl Into<String>) -> Self {
        self.custom_styles = css.into();
        self
    }

    /// Extra script, placed after the callbacks
    pub fn with_scripts(mut self, js: impl Into<String>) -> Self {
        self.custom_scripts = js.into();
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn callbacks(&self) -> &[(String, String)] {
        &self.callbacks
    }

    pub fn callback(&self, name: &str) -> Option<&str> {
        self.callbacks
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, code)| code.as_str())
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Serialize the component list as embedded in the page script
    pub fn hydration_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.components)
    }

    /// Render the full HTML document
    pub fn render(&self) -> String {
        self.render_with(|_| self.hydration_json().map_err(Into::into))
    }

    /// Render with a caller-supplied hydration serializer.
    ///
    /// A serializer error is logged and the page embeds an empty component
    /// list instead.
    pub fn render_with<F>(&self, hydrate: F) -> String
    where
        F: Fn(&[Component]) -> anyhow::Result<String>,
    {
        let mut out = String::with_capacity(16 * 1024);

        self.render_head(&mut out);

        out.push_str(assets::BODY_OPEN);
        out.push_str("    <div class=\"container mx-auto px-4 py-8\">\n");
        out.push_str("        <div class=\"flex justify-between items-center mb-8\">\n");
        out.push_str(&format!(
            "            <h1 class=\"text-3xl font-bold text-gray-900 dark:text-white\">{}</h1>\n",
            html::escape(&self.title)
        ));
        out.push_str(assets::THEME_TOGGLE);
        out.push_str("        </div>\n");

        out.push_str("        <div id=\"components\" class=\"space-y-4 dark:text-white\">\n");
        for component in &self.components {
            out.push_str(&render_component(component));
        }
        out.push_str("        </div>\n");
        out.push_str("    </div>\n");

        let json = match hydrate(&self.components) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!("Failed to serialize components for hydration: {}", e);
                "[]".to_string()
            }
        };

        out.push_str("    <script>\n");
        out.push_str(&format!(
            "        const defaultTheme = '{}';\n",
            self.theme.as_str()
        ));
        out.push_str(assets::THEME_SCRIPT);
        out.push_str(&format!(
            "        const components = {};\n\n",
            html::escape_script_json(&json)
        ));
        out.push_str(assets::CLIENT_RUNTIME);

        for (name, code) in &self.callbacks {
            out.push_str(&format!("        // {}\n", name));
            out.push_str(code);
            out.push_str("\n\n");
        }

        if !self.custom_scripts.is_empty() {
            out.push_str(&self.custom_scripts);
            out.push_str("\n\n");
        }

        out.push_str(assets::BOOTSTRAP);
        out.push_str("    </script>\n");
        out.push_str("</body>\n");
        out.push_str("</html>\n");
        out
    }

    fn render_head(&self, out: &mut String) {
        out.push_str("<!DOCTYPE html>\n");
        out.push_str("<html lang=\"en\">\n");
        out.push_str("<head>\n");
        out.push_str("    <meta charset=\"UTF-8\">\n");
        out.push_str(
            "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
        );
        out.push_str(&format!("    <title>{}</title>\n", html::escape(&self.title)));
        out.push_str(assets::TAILWIND_HEAD);
        out.push_str(assets::DARK_OVERRIDES);
        if !self.custom_styles.is_empty() {
            out.push_str("    <style>\n");
            out.push_str(&self.custom_styles);
            out.push_str("\n    </style>\n");
        }
        out.push_str("</head>\n");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::{Button, Custom, DataDisplay, Input, Select, Widget};

    /// Pull the embedded hydration array back out of a document
    fn embedded_json(html: &str) -> serde_json::Value {
        let start = html.find("const components = ").unwrap() + "const components = ".len();
        let end = start + html[start..].find(";\n").unwrap();
        serde_json::from_str(&html[start..end].replace("<\\/", "</")).unwrap()
    }

    #[test]
    fn test_button_scenario() {
        let page = Page::new("Demo")
            .with_component(Button::new("Go").with_variant("danger").with_size("sm"));
        let html = page.render();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Demo</title>"));
        assert!(html.contains(">Demo</h1>"));
        assert!(html.contains("bg-red-500"));
        assert!(html.contains("px-2 py-1 text-sm"));
        assert!(html.contains(">Go</button>"));

        let json = embedded_json(&html);
        let components = json.as_array().unwrap();
        assert_eq!(components.len(), 1);
        assert_eq!(components[0]["type"], "button");
        assert_eq!(components[0]["buttonType"], "danger");
        assert_eq!(components[0]["size"], "sm");
    }

    #[test]
    fn test_select_scenario() {
        let page = Page::default().with_component(
            Select::new("Pick one")
                .with_option("1", "One")
                .with_option("2", "Two")
                .with_option("3", "Three"),
        );
        let html = page.render();
        assert_eq!(html.matches("<option").count(), 4);

        let json = embedded_json(&html);
        assert_eq!(json[0]["options"].as_array().unwrap().len(), 3);
        assert_eq!(json[0]["options"][2]["label"], "Three");
    }

    #[test]
    fn test_balance_card_scenario() {
        let page = Page::default().with_component(
            DataDisplay::labeled("Balance", 12.5)
                .with_format("%.2f")
                .with_display_style("card"),
        );
        let html = page.render();
        assert!(html.contains(">Balance</label>"));
        assert!(html.contains(">12.50</span>"));
        assert!(html.contains("shadow rounded-lg p-4"));

        let json = embedded_json(&html);
        assert_eq!(json[0]["value"], 12.5);
        assert_eq!(json[0]["dataType"], "double");
        assert_eq!(json[0]["formattedValue"], "12.50");
    }

    #[test]
    fn test_render_is_idempotent() {
        let page = Page::new("Same")
            .with_component(Button::new("a"))
            .with_component(Input::new("b"))
            .with_callback("f", "function f() {}");
        assert_eq!(page.render(), page.render());
    }

    #[test]
    fn test_hydration_round_trip() {
        let page = Page::default()
            .with_component(
                Button::new("x")
                    .with_class("mb-4")
                    .with_style("color: red;")
                    .with_visible(false),
            )
            .with_component(Input::new("name").with_class("w-1/2").with_style("margin: 0"))
            .with_component(
                Select::new("pick")
                    .with_option("a", "A")
                    .with_class("mt-2")
                    .with_visible(false),
            )
            .with_component(
                DataDisplay::labeled("Total", 3)
                    .with_display_style("card")
                    .with_class("p-8")
                    .with_style("opacity: 0.5;"),
            );
        let html = page.render();
        let json = embedded_json(&html);
        let hydrated = json.as_array().unwrap();
        assert_eq!(hydrated.len(), page.components().len());

        let expected_styles = [
            r#"style="color: red; display: none;""#,
            r#"style="margin: 0""#,
            r#"style="display: none;""#,
            r#"style="opacity: 0.5;""#,
        ];

        for ((component, entry), style) in page.components().iter().zip(hydrated).zip(expected_styles)
        {
            let base = component.base();
            assert_eq!(entry["id"], base.id());
            assert_eq!(entry["className"].as_str(), base.class_name().as_deref());
            assert_eq!(entry["visible"], base.is_visible());
            assert_eq!(entry["style"].as_str(), base.style());

            // The element carrying the id shows the same classes and style
            let start = html.find(&format!(r#"id="{}""#, base.id())).unwrap();
            let tag = &html[start..start + html[start..].find('>').unwrap()];
            let classes = entry["className"].as_str().unwrap();
            assert!(tag.contains(&format!(r#"class="{}"#, classes)), "{}", tag);
            assert!(tag.contains(style), "{}", tag);
        }
    }

    #[test]
    fn test_hidden_component_is_rendered_and_hydrated() {
        let page = Page::default().with_component(Input::new("secret").with_visible(false));
        let html = page.render();
        assert!(html.contains(r#"placeholder="secret""#));
        assert!(html.contains(r#"style="display: none;""#));
        assert_eq!(embedded_json(&html).as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_callbacks_keep_insertion_order() {
        let page = Page::default()
            .with_callback("first", "function first() { return 1; }")
            .with_callback("second", "function second() {}")
            .with_callback("first", "function first() { return 2; }");

        assert_eq!(page.callbacks().len(), 2);
        assert_eq!(page.callbacks()[0].0, "first");
        assert_eq!(page.callback("first"), Some("function first() { return 2; }"));

        let html = page.render();
        let first = html.find("return 2;").unwrap();
        let second = html.find("function second()").unwrap();
        assert!(first < second);
        assert!(!html.contains("return 1;"));
    }

    #[test]
    fn test_script_order() {
        let page = Page::default()
            .with_theme(Theme::Dark)
            .with_callback("cb", "function cb() {}")
            .with_scripts("console.log('custom');")
            .with_styles(".x { color: red; }");
        let html = page.render();

        assert!(html.contains("const defaultTheme = 'dark';"));
        assert!(html.contains(".x { color: red; }"));
        let positions: Vec<usize> = [
            "const defaultTheme",
            "const components",
            "function sendUpdate",
            "function cb()",
            "console.log('custom');",
            "DOMContentLoaded",
        ]
        .iter()
        .map(|needle| html.find(needle).unwrap())
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{:?}", positions);
    }

    #[test]
    fn test_custom_component_placeholder_and_json() {
        let page = Page::default()
            .with_component(Custom::new("chart").with_field("series", serde_json::json!([1, 2])));
        let html = page.render();
        assert!(html.contains("<!-- unknown component type: chart -->"));

        let json = embedded_json(&html);
        assert_eq!(json[0]["type"], "chart");
        assert_eq!(json[0]["series"], serde_json::json!([1, 2]));
    }

    #[test]
    fn test_hydration_failure_embeds_empty_list() {
        let page = Page::default().with_component(Button::new("a"));
        let html = page.render_with(|_| Err(anyhow::anyhow!("boom")));
        assert!(html.contains("const components = [];"));
        // Markup is unaffected
        assert!(html.contains(">a</button>"));
    }

    #[test]
    fn test_script_breakout_is_escaped() {
        let page = Page::new("x").with_component(Button::new("</script><script>alert(1)"));
        let html = page.render();
        assert!(!html.contains("</script><script>alert(1)"));
        assert_eq!(
            embedded_json(&html)[0]["text"],
            "</script><script>alert(1)"
        );
    }

    #[test]
    fn test_empty_page() {
        let html = Page::default().render();
        assert!(html.contains("<title>Tailpage</title>"));
        assert!(html.contains("const components = [];"));
        assert!(html.trim_end().ends_with("</html>"));
    }
}
