//! Sift CLI - validate files and extract their text.

use clap::Parser;
use sift_cli::commands::{self, ProcessArgs};
use sift_cli::{Cli, Command, Config, Formatter};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Log to stderr; `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

async fn run(cli: Cli) -> sift_cli::Result<i32> {
    let config_path = Config::resolve_path(cli.config.as_deref())?;
    let mut config = Config::load_from(&config_path)?;

    // Command-line flags override the file
    if let Some(strategy) = cli.strategy {
        config.extractor.strategy = strategy.into();
    }
    if cli.extended_types {
        config.validation.extended_types = true;
    }
    if cli.instant {
        config.processor.tick_interval_ms = 0;
    }

    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Some(Command::Config(args)) => {
            commands::execute_config(args, &config, &config_path, &formatter).await?;
            Ok(0)
        }
        None => {
            let args = ProcessArgs { files: cli.files };
            commands::execute_process(args, &config, &formatter).await
        }
    }
}
