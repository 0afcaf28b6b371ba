// Demo page: one of every widget kind, wired to the update endpoint
//
// Each control's callback posts its state to /update via the client
// runtime's sendUpdate, so the server log shows the round trip.
//
// Run with: cargo run --release (or `tailpage render` for the HTML only)

use crate::component::{Button, DataDisplay, Input, Select, Widget};
use crate::config::Config;
use crate::render::Page;

pub const DEMO_TITLE: &str = "Tailpage Component Demo";

/// Build the demo page with the default title and theme
pub fn example_page() -> Page {
    let button = Button::new("Click me")
        .with_variant("primary")
        .with_size("lg")
        .with_on_click("handleButtonClick")
        .with_class("mb-4");

    let input = Input::new("Enter some text")
        .with_input_type("text")
        .with_size("md")
        .with_on_input("handleInputChange")
        .with_class("mb-4");

    let select = Select::new("Choose an option")
        .with_size("md")
        .with_on_change("handleSelectChange")
        .with_class("mb-4")
        .with_option("option1", "Option 1")
        .with_option("option2", "Option 2")
        .with_option("option3", "Option 3");

    // Callbacks address the generated ids
    let on_click = format!(
        "function handleButtonClick() {{\n    console.log('Button clicked!');\n    sendUpdate('{id}', {{action: 'click'}});\n}}",
        id = button.base().id()
    );
    let on_input = format!(
        "function handleInputChange() {{\n    const input = document.getElementById('{id}');\n    sendUpdate('{id}', {{value: input.value}});\n}}",
        id = input.base().id()
    );
    let on_change = format!(
        "function handleSelectChange() {{\n    const select = document.getElementById('{id}');\n    sendUpdate('{id}', {{value: select.value}});\n}}",
        id = select.base().id()
    );

    Page::new(DEMO_TITLE)
        .with_callback("handleButtonClick", on_click)
        .with_callback("handleInputChange", on_input)
        .with_callback("handleSelectChange", on_change)
        .with_component(button)
        .with_component(input)
        .with_component(select)
        .with_component(
            DataDisplay::labeled("User ID", 12345)
                .with_display_style("badge")
                .with_class("mb-4"),
        )
        .with_component(
            DataDisplay::labeled("Username", "Alice")
                .with_display_style("text")
                .with_class("mb-4"),
        )
        .with_component(
            DataDisplay::labeled("Balance", 1234.56)
                .with_display_style("card")
                .with_format("%.2f")
                .with_class("mb-4"),
        )
        .with_component(
            DataDisplay::labeled("Active", true)
                .with_display_style("badge")
                .with_class("mb-4"),
        )
}

/// The page the server should host for a configuration, if any
pub fn configured_page(config: &Config) -> Option<Page> {
    if !config.demo {
        return None;
    }
    Some(customized(example_page(), config))
}

/// Apply the configured title and theme to a page
pub fn customized(page: Page, config: &Config) -> Page {
    let page = page.with_theme(config.default_theme);
    match &config.title {
        Some(title) => page.with_title(title.clone()),
        None => page,
    }
}
