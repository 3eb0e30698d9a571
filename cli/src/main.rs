//! CLI entrypoint for question-finder
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use qfinder_application::{
    LoadProgressNotifier, LoadQuestionsUseCase, NoProgress, SearchQuestionsUseCase,
};
use qfinder_domain::OutputFormat;
use qfinder_infrastructure::{ConfigLoader, FileConfig, LocationSource};
use qfinder_presentation::{
    BrowseRepl, Cli, ConsoleFormatter, LoadProgressReporter, OutputFormatter, ReplConfig,
    SimpleProgress, set_color_enabled,
};
use std::io::IsTerminal;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Keep the guard alive so buffered log lines are flushed on exit
    let _log_guard = init_logging(cli.verbose, cli.log_file.as_deref())?;

    info!("Starting question-finder");

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        let mut config = load_config(&cli)?;
        config.override_source(cli.source.as_deref());
        println!();
        println!("Effective configuration:");
        println!("{}", config.to_toml());
        return Ok(ExitCode::SUCCESS);
    }

    let mut config = load_config(&cli)?;
    config.override_source(cli.source.as_deref());
    config.validate().context("Invalid configuration")?;

    set_color_enabled(config.output.color_enabled(cli.no_color));

    // === Dependency Injection ===
    let bank = match LocationSource::open(&config.source.location, config.source.max_bytes) {
        Ok(source) => {
            let use_case = LoadQuestionsUseCase::new(Arc::new(source));
            let progress: Box<dyn LoadProgressNotifier> = if cli.quiet {
                Box::new(NoProgress)
            } else if std::io::stderr().is_terminal() {
                Box::new(LoadProgressReporter::new())
            } else {
                // No spinner when stderr is redirected
                Box::new(SimpleProgress)
            };
            use_case.execute_with_progress(progress.as_ref()).await
        }
        Err(e) => Err(e),
    };

    let bank = match bank {
        Ok(bank) => Arc::new(bank),
        Err(e) => {
            eprintln!("{}", ConsoleFormatter::format_load_error(&e));
            return Ok(ExitCode::FAILURE);
        }
    };

    let filter_config = config.filter_config().context("Invalid [filters] section")?;
    let search = SearchQuestionsUseCase::new(bank, filter_config);

    if cli.facets {
        print!("{}", ConsoleFormatter::format_facets(search.facet_index()));
        return Ok(ExitCode::SUCCESS);
    }

    let format = config.output.resolve_format(cli.output.map(Into::into));
    let criteria = cli.criteria();
    debug!("Output format: {}, criteria: {}", format, criteria);

    if cli.interactive {
        let repl_config = ReplConfig::default().with_history_file(config.repl.history_file);
        let mut repl = BrowseRepl::new(search, repl_config)
            .with_format(format)
            .with_criteria(criteria);
        repl.run()?;
        return Ok(ExitCode::SUCCESS);
    }

    let output = search.execute(&criteria);
    print!("{}", ConsoleFormatter.render(&output, format));
    if format == OutputFormat::Json {
        println!();
    }

    Ok(ExitCode::SUCCESS)
}

/// Load configuration files unless `--no-config` was given
fn load_config(cli: &Cli) -> Result<FileConfig> {
    if cli.no_config {
        return Ok(ConfigLoader::load_defaults());
    }
    ConfigLoader::load(cli.config.as_ref())
        .map_err(|e| anyhow::anyhow!("{}", e))
        .context("Failed to load configuration")
}

/// Initialize logging based on verbosity level
///
/// Logs go to stderr so they never mix with results on stdout, or to
/// `log_file` when one is given.
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let Some(path) = log_file else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    };

    let file_name = path
        .file_name()
        .with_context(|| format!("Log file path has no file name: {}", path.display()))?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Could not create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();

    Ok(Some(guard))
}
