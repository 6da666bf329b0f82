//! lintprefs CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use lintprefs::cli::{Cli, CommandDispatcher, Commands};
use lintprefs::config::settings_path;
use lintprefs::ui::{create_ui, OutputMode};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("lintprefs=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("lintprefs=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Whether we are running under a CI system.
fn is_ci() -> bool {
    std::env::var_os("CI").is_some()
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("lintprefs starting with args: {:?}", cli);

    let output_mode = OutputMode::from_flags(cli.verbose, cli.quiet);

    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    // Only `edit` asks questions; everything else stays scriptable.
    let is_interactive = matches!(cli.command, Some(Commands::Edit(_))) && !is_ci();
    let mut ui = create_ui(is_interactive, output_mode);

    let path = settings_path(cli.config.as_deref());
    tracing::debug!("Using settings file {}", path.display());
    let dispatcher = CommandDispatcher::new(path);

    match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
