mod input;
mod output;

use anyhow::Context;
use clap::Parser;
use impact_core::config::{Config, WarnLevel};
use impact_core::diag::DiagnosticLog;
use impact_core::registry::PatternRegistry;
use impact_core::Assessor;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(
    name = "impact-radius",
    about = "Score a task description for risk, complexity, and scope, and recommend how many agents it warrants",
    version
)]
struct Cli {
    /// Task description (read from stdin when omitted)
    task: Option<String>,

    /// Output as compact JSON (default)
    #[arg(long, short = 'j', conflicts_with = "pretty")]
    json: bool,

    /// Output a human-readable report instead of JSON
    #[arg(long, short = 'p')]
    pretty: bool,

    /// Verbose diagnostics on stderr and in the trace file
    #[arg(long, short = 'd')]
    debug: bool,

    /// Print the assessment time to stderr
    #[arg(long)]
    performance: bool,

    /// Config file (default: ~/.config/impact-radius/config.yaml)
    #[arg(long, env = "IMPACT_RADIUS_CONFIG")]
    config: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    // RUST_LOG wins unless --debug asks for everything
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) if !cli.debug => filter,
        _ => tracing_subscriber::EnvFilter::default().add_directive(default_level.into()),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::resolve(cli.config.as_deref()).context("failed to load config")?;

    let log = config
        .log
        .enabled
        .then(|| DiagnosticLog::new(config.log_path(), cli.debug));
    if let Some(log) = &log {
        tracing::debug!(path = %log.path().display(), "diagnostic trace file");
    }

    for w in config.validate() {
        let message = format!("config: {}", w.message);
        match w.level {
            WarnLevel::Error => tracing::error!("{message}"),
            WarnLevel::Warning => tracing::warn!("{message}"),
        }
        if let Some(log) = &log {
            match w.level {
                WarnLevel::Error => log.error(&message),
                WarnLevel::Warning => log.warn(&message),
            }
        }
    }

    let task = input::task_description(cli.task.as_deref())?;

    let started = Instant::now();
    let registry = PatternRegistry::builtin();
    let mut assessor = Assessor::new(registry);
    if let Some(log) = &log {
        assessor = assessor.with_log(log);
    }
    let result = assessor.assess(&task)?;
    let elapsed = started.elapsed();

    tracing::debug!(
        radius = result.scores.impact_radius.value(),
        strategy = %result.agent_strategy.strategy,
        "assessment complete"
    );

    let pretty = cli.pretty || (config.output.pretty && !cli.json);
    if pretty {
        output::print_report(&result);
    } else {
        output::print_json(&result)?;
    }

    if cli.performance {
        let ms = elapsed.as_secs_f64() * 1000.0;
        eprintln!("assessment completed in {ms:.3}ms");
        if let Some(log) = &log {
            log.info(&format!("assessment completed in {ms:.3}ms"));
        }
    }
    Ok(())
}
