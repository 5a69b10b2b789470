//! CLI entrypoint for fallible-flow
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use flow_application::{ComposeRecordsUseCase, NoProgress, ProgressNotifier};
use flow_domain::OutputFormat;
use flow_infrastructure::{ConfigLoader, FileConfig, SampleAnimalSource, SampleMachineSource};
use flow_presentation::{Cli, ConsoleFormatter, ProgressReporter, SimpleProgress};
use std::io::IsTerminal;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let _log_guard = init_logging(&cli)?;

    info!("Starting fallible-flow");

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = load_config(&cli)?;
    debug!("Effective config: {:?}", config);

    let format = cli
        .output
        .map(OutputFormat::from)
        .or(config.output.format)
        .unwrap_or_default();

    if cli.no_color || !config.output.color {
        colored::control::set_override(false);
    }

    // === Dependency Injection ===
    let animals = Arc::new(SampleAnimalSource::from_config(&config.animal));
    let machines = Arc::new(SampleMachineSource::from_config(&config.machine));
    let use_case = ComposeRecordsUseCase::new(animals, machines);

    let progress: Arc<dyn ProgressNotifier> = if cli.quiet || format == OutputFormat::Json {
        Arc::new(NoProgress)
    } else if std::io::stderr().is_terminal() {
        Arc::new(ProgressReporter::new())
    } else {
        Arc::new(SimpleProgress)
    };

    let outcome = use_case.execute_with_progress(progress).await;
    let output = ConsoleFormatter::format(&outcome, format);

    // A failed lookup is a reported outcome, not a process failure
    match (&outcome, format) {
        (Err(_), OutputFormat::Text) => eprintln!("{}", output),
        _ => println!("{}", output),
    }

    Ok(())
}

/// Initialize logging based on verbosity level
///
/// Logs go to stderr so stdout only carries the outcome. With `--log-file`
/// the same events are also written to that file.
fn init_logging(cli: &Cli) -> Result<Option<WorkerGuard>> {
    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let (file_layer, guard) = match &cli.log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            let (writer, guard) = tracing_appender::non_blocking(file);
            let layer = fmt::layer().with_writer(writer).with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    Ok(guard)
}

/// Resolve configuration from files, environment, and CLI overrides
fn load_config(cli: &Cli) -> Result<FileConfig> {
    let loaded = if cli.no_config {
        ConfigLoader::load_without_files()
    } else {
        ConfigLoader::load(cli.config.as_ref())
    };
    let mut config = loaded.map_err(|e| anyhow!("Failed to load configuration: {}", e))?;

    if let Some(message) = &cli.fail_animal {
        config.animal.fail_with = Some(message.clone());
    }
    if let Some(message) = &cli.fail_machine {
        config.machine.fail_with = Some(message.clone());
    }

    config.validate().context("Invalid configuration")?;
    Ok(config)
}
