// Tailpage - Server-side Tailwind component rendering
//
// Widgets are plain data holders that accumulate Tailwind utility classes as
// they are styled. A Page walks its widgets in order and concatenates them into
// a single HTML document with a theme toggle and a small hydration runtime.
//
// Architecture:
// - component: widget descriptors (Button, Input, Select, DataDisplay)
// - style: class-list policy mapping style options to class tokens
// - format: printf-style formatting for DataDisplay values
// - render: Page and the HTML document renderer
// - server (axum): demo server serving the page and accepting updates
// - config / logging / cli / startup / demo: the binary's ambient stack

pub mod cli;
pub mod component;
pub mod config;
pub mod demo;
pub mod format;
pub mod logging;
pub mod render;
pub mod server;
pub mod startup;
pub mod style;

pub use component::{
    Button, Component, ComponentBase, Custom, DataDisplay, DataType, DataValue, Input,
    PropertyValue, Select, SelectOption, Widget,
};
pub use render::Page;
pub use style::Theme;
