// CLI module - command-line argument parsing and handlers
//
// Without a subcommand the binary runs the page server. Subcommands:
// - render [--out FILE]: Write the demo page HTML to stdout or a file
// - config --show: Display effective configuration
// - config --path: Show config file path
// - config --reset: Regenerate config file with defaults

use crate::config::{Config, ConfigError, VERSION};
use crate::demo;
use clap::{Parser, Subcommand};
use std::io::Write;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// tailpage - Tailwind component pages over HTTP
#[derive(Parser)]
#[command(name = "tailpage")]
#[command(version = VERSION)]
#[command(about = "Render Tailwind component pages and serve them over HTTP", long_about = None)]
pub struct Cli {
    /// Override the bind address (e.g. 0.0.0.0:8080)
    #[arg(long, global = true)]
    pub bind: Option<SocketAddr>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the demo page without starting the server
    Render {
        /// Write the HTML to this file instead of stdout
        #[arg(long, short)]
        out: Option<PathBuf>,
    },

    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },
}

/// Handle a subcommand. Returns true if one was handled (exit after).
pub fn handle_command(cli: &Cli) -> bool {
    match &cli.command {
        Some(Commands::Render { out }) => {
            handle_render(out.as_deref());
            true
        }
        Some(Commands::Config { show, reset, path }) => {
            if *path {
                handle_config_path();
            } else if *show {
                handle_config_show();
            } else if *reset {
                handle_config_reset();
            } else {
                println!("Usage: tailpage config [--show|--reset|--path]");
                println!();
                println!("Options:");
                println!("  --show    Display effective configuration");
                println!("  --reset   Reset config file to defaults");
                println!("  --path    Show config file path");
            }
            true
        }
        None => false, // No subcommand, run the server
    }
}

/// Load config or exit with the boxed error
pub fn load_config_or_exit() -> Config {
    match Config::load() {
        Ok(config) => config,
        Err(e) => exit_with(&e),
    }
}

fn exit_with(e: &ConfigError) -> ! {
    e.report();
    std::process::exit(1);
}

fn handle_render(out: Option<&Path>) {
    let config = load_config_or_exit();
    let html = demo::customized(demo::example_page(), &config).render();

    match out {
        Some(path) => {
            if let Err(e) = std::fs::write(path, &html) {
                eprintln!("Error writing {}: {}", path.display(), e);
                std::process::exit(1);
            }
            eprintln!("HTML written to {}", path.display());
        }
        None => print!("{}", html),
    }
}

fn handle_config_path() {
    match Config::config_path() {
        Some(path) => println!("{}", path.display()),
        None => {
            eprintln!("Error: Could not determine config path");
            std::process::exit(1);
        }
    }
}

fn handle_config_show() {
    let config = load_config_or_exit();

    println!("# Effective configuration (env > file > defaults)");
    println!();
    print!("{}", config.to_toml());
    println!();
    println!("# Source: {}", Config::source_description());
}

fn handle_config_reset() {
    let Some(path) = Config::config_path() else {
        eprintln!("Error: Could not determine config path");
        std::process::exit(1);
    };

    // Confirm if file exists
    if path.exists() {
        eprint!(
            "Config file exists at {}. Overwrite? [y/N] ",
            path.display()
        );
        let _ = std::io::stderr().flush();

        let mut input = String::new();
        if std::io::stdin().read_line(&mut input).is_err()
            || !input.trim().eq_ignore_ascii_case("y")
        {
            println!("Aborted.");
            return;
        }
    }

    if let Some(parent) = path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            eprintln!("Error creating directory: {}", e);
            std::process::exit(1);
        }
    }

    // Write the default config (using Config's single source of truth)
    if let Err(e) = std::fs::write(&path, Config::default().to_toml()) {
        eprintln!("Error writing config: {}", e);
        std::process::exit(1);
    }

    println!("Config reset to defaults: {}", path.display());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_runs_server() {
        let cli = Cli::try_parse_from(["tailpage", "--bind", "0.0.0.0:9090"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.bind, Some("0.0.0.0:9090".parse().unwrap()));
    }

    #[test]
    fn test_render_subcommand() {
        let cli = Cli::try_parse_from(["tailpage", "render", "--out", "page.html"]).unwrap();
        match cli.command {
            Some(Commands::Render { out }) => assert_eq!(out, Some(PathBuf::from("page.html"))),
            _ => panic!("expected render"),
        }
    }

    #[test]
    fn test_config_flags() {
        let cli = Cli::try_parse_from(["tailpage", "config", "--show"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Config { show: true, reset: false, path: false })
        ));
    }

    #[test]
    fn test_invalid_bind_is_rejected() {
        assert!(Cli::try_parse_from(["tailpage", "--bind", "nowhere"]).is_err());
    }
}
