// Startup module - displays banner and serving status
//
// The same information goes to stdout (colored) and to the log, so a
// headless run with file logging still records what was served where.

use crate::config::{Config, VERSION};
use crate::render::Page;

/// ANSI color codes for terminal output
mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const MAGENTA: &str = "\x1b[35m";
}

/// One-line summary of what `/` serves
fn page_summary(page: Option<&Page>) -> String {
    match page {
        Some(page) => format!(
            "{:?} ({} component{})",
            page.title(),
            page.components().len(),
            if page.components().len() == 1 { "" } else { "s" }
        ),
        None => "placeholder (demo disabled)".to_string(),
    }
}

/// Print the startup banner
pub fn print_startup(config: &Config, page: Option<&Page>) {
    use colors::*;

    println!();
    println!("  {BOLD}{CYAN}tailpage{RESET} {DIM}v{VERSION}{RESET}");
    println!("  {DIM}Tailwind component pages over HTTP{RESET}");
    println!();

    match Config::config_path() {
        Some(path) if path.exists() => {
            println!("  {DIM}Config:{RESET} {GREEN}✓{RESET} {}", path.display())
        }
        _ => println!("  {DIM}Config:{RESET} {DIM}(using defaults){RESET}"),
    }

    let summary = page_summary(page);
    if page.is_some() {
        println!("  {DIM}Page:{RESET}   {GREEN}✓{RESET} {}", summary);
    } else {
        println!("  {DIM}Page:{RESET}   {YELLOW}○{RESET} {DIM}{}{RESET}", summary);
    }
    println!(
        "  {DIM}Theme:{RESET}  {}",
        config.default_theme.as_str()
    );
    println!();

    println!(
        "  {MAGENTA}▸{RESET} Serving on {BOLD}http://{}{RESET}",
        config.bind_addr
    );
    println!();
}

/// Write the same startup status to the log
pub fn log_startup(config: &Config, page: Option<&Page>) {
    tracing::info!("tailpage v{}", VERSION);
    tracing::info!("Config: {}", Config::source_description());
    tracing::info!("Page: {}", page_summary(page));
    tracing::info!("Theme: {}", config.default_theme.as_str());
    tracing::info!("▸ Listening on {}", config.bind_addr);
}
