use std::io::{self, BufRead};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use keycalc::cli::Cli;
use keycalc::config::Config;
use keycalc::session::Session;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "warn";

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref());

    init_tracing(
        config
            .as_ref()
            .ok()
            .and_then(|config| config.log_level.as_deref()),
    );

    match config.and_then(|config| run(&cli, &config)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}

/// Log to stderr so stdout only carries display strings.
fn init_tracing(config_level: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config_level.unwrap_or(DEFAULT_LOG_FILTER)))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: &Cli, config: &Config) -> Result<()> {
    let mut session = Session::new(config.key_map()?);

    match &cli.keys {
        Some(keys) => {
            let display = session
                .feed(keys, |event, display| {
                    if cli.trace {
                        println!("{:<14}{}", event.to_string(), display);
                    }
                })
                .context("Calculation failed")?;
            println!("{}", display);
        }
        None => interactive(&mut session)?,
    }

    Ok(())
}

/// Read keys line by line and print the display after each line.
fn interactive(session: &mut Session) -> Result<()> {
    tracing::debug!("reading keys from stdin");

    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read from stdin")?;
        if matches!(line.trim(), "q" | "quit") {
            break;
        }

        let display = session
            .feed(&line, |_, _| {})
            .context("Calculation failed")?;
        println!("{}", display);
    }

    Ok(())
}
