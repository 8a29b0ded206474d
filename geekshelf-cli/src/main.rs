//! geekshelf CLI
//!
//! Command-line front end for the BoardGameGeek catalogue client.

mod cli_types;
mod commands;
mod error;
mod spinner;

use clap::Parser;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use geekshelf_client::{BggClient, CancelToken, ClientConfig};

use cli_types::{Cli, Commands};
pub(crate) use error::CliError;

/// Print an empty output line.
pub(crate) fn log_blank() {
    log::info!("");
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.quiet, cli.verbose);

    if let Err(e) = run(cli) {
        log::error!("{} {}", "Error:".if_supports_color(Stderr, |t| t.red()), e);
        std::process::exit(1);
    }
}

/// Plain messages on stdout for normal runs, timestamps and library debug
/// output with `--verbose`. `RUST_LOG` still wins when set.
fn init_logging(quiet: bool, verbose: bool) {
    let level = if quiet {
        log::LevelFilter::Warn
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level)
        .filter_module(
            "geekshelf_client",
            if verbose {
                log::LevelFilter::Debug
            } else {
                log::LevelFilter::Warn
            },
        )
        .target(env_logger::Target::Stdout)
        .parse_default_env();

    if verbose {
        builder.format_timestamp_millis();
    } else {
        builder.format(|buf, record| {
            use std::io::Write;
            match record.level() {
                log::Level::Info => writeln!(buf, "{}", record.args()),
                level => writeln!(buf, "{}: {}", level, record.args()),
            }
        });
    }
    builder.init();
}

fn run(cli: Cli) -> Result<(), CliError> {
    if let Commands::Config { action } = &cli.command {
        return commands::config::run_config(action);
    }

    let config = ClientConfig::load()?.with_overrides(cli.host, cli.token, cli.username, None);
    let client = BggClient::new(config.clone())?;

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::runtime(format!("Failed to create tokio runtime: {e}")))?;
    let cancel = CancelToken::new();

    rt.block_on(async {
        let on_interrupt = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                log::warn!("Interrupted, cancelling");
                on_interrupt.cancel();
            }
        });

        commands::dispatch(&client, &config, &cancel, cli.command, cli.quiet).await
    })
}
