// tailpage - Tailwind component pages over HTTP
//
// Builds a page of widget descriptors, renders it to a self-contained HTML
// document and serves it, collecting the client's component updates.
//
// Startup order:
// - CLI subcommands (render, config) run and exit first
// - Config: env > ~/.config/tailpage/config.toml > defaults
// - Logging: stdout plus optional rolling JSON files
// - Page server (axum) until Ctrl+C, then graceful shutdown

use anyhow::Result;
use clap::Parser;
use tailpage::cli::{self, Cli};
use tailpage::config::Config;
use tailpage::server::{self, ServerState};
use tailpage::{demo, logging, startup};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle CLI commands first; if one ran, exit early
    if cli::handle_command(&cli) {
        return Ok(());
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    let mut config = cli::load_config_or_exit();
    if let Some(bind) = cli.bind {
        config.bind_addr = bind;
    }

    // The guard must be kept alive for the duration of the program to ensure logs flush
    let _file_guard = logging::init(&config.logging);

    let page = demo::configured_page(&config);

    startup::print_startup(&config, page.as_ref());
    startup::log_startup(&config, page.as_ref());

    let state = ServerState::new(page);

    // Oneshot channel: Ctrl+C signals the server to stop accepting connections
    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();

    let bind_addr = config.bind_addr;
    let mut server_handle =
        tokio::spawn(async move { server::start_server(bind_addr, state, shutdown_rx).await });

    // Run until Ctrl+C, or until the server stops on its own (e.g. bind failure)
    let server_stopped = tokio::select! {
        result = tokio::signal::ctrl_c() => {
            result?;
            false
        }
        result = &mut server_handle => {
            result??;
            true
        }
    };

    if !server_stopped {
        tracing::info!("Shutting down...");

        // If the send fails, the server has already shut down (which is fine)
        let _ = shutdown_tx.send(());
        server_handle.await??;
    }

    tracing::info!("Shutdown complete");
    Ok(())
}
