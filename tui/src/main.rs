//! life-tui Entry Point
//!
//! Launches the Game of Life in the current terminal.
//!
//! Usage:
//!   life-tui
//!
//! Settings are read from `~/.config/life-tui/config.toml` and `LIFE_TUI_*`
//! environment variables; see the `config` module. Set `RUST_LOG` to see logs
//! on stderr.

use std::io;
use std::process::ExitCode;

use crossterm::event::EventStream;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use life_tui::surface::TerminalSession;
use life_tui::{config, App};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Set up logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = match config::load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error initializing app: {e}");
            return ExitCode::from(1);
        }
    };
    tracing::debug!(source = %config.source(), "Configuration resolved");

    // Check if we have a TTY before attempting initialization
    use std::io::IsTerminal;

    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        eprintln!("Error initializing app: life-tui requires a terminal (TTY)");
        return ExitCode::from(1);
    }

    let mut session = match TerminalSession::start() {
        Ok(session) => session,
        Err(e) => {
            eprintln!("Error initializing app: {e:#}");
            return ExitCode::from(1);
        }
    };

    let mut app = App::new(&config);
    let result = app.run(session.terminal_mut(), EventStream::new()).await;

    // Restore terminal before reporting
    drop(session);

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error running app: {e:#}");
            ExitCode::from(1)
        }
    }
}
