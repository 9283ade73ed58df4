//! Assistant settings CLI - Application entry point
//!
//! Loads the environment-specific settings once and dispatches to the
//! selected command.

mod args;
mod commands;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use args::{Cli, Commands};
use assistant_settings::SettingsLoader;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing (verbose mode sets debug level)
    init_tracing(cli.verbose);

    let mut loader = SettingsLoader::new();
    if let Some(base_dir) = cli.base_dir {
        loader = loader.with_base_dir(base_dir);
    }

    // Execute command
    let result = match cli.command {
        Commands::Show(args) => commands::show::execute(args, &loader),
        Commands::Check => commands::check::execute(&loader),
        Commands::Envs => {
            commands::envs::execute();
            Ok(())
        }
    };

    // Handle errors
    if let Err(e) = result {
        tracing::error!(code = e.code(), "Command failed: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing subscriber
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string())
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
