//! CLI entrypoint for Dekho Pakistan
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use dekho_application::{
    AskQuestionUseCase, BehaviorConfig, GeneratePlanInput, GeneratePlanUseCase, NoProgress,
    RequestProgress, SearchHotelsUseCase, SendPlanEmailUseCase,
};
use dekho_domain::OutputFormat;
use dekho_infrastructure::{ConfigLoader, FileConfig, HttpTravelGateway};
use dekho_presentation::{ChatRepl, Cli, Command, ConsoleFormatter, ReplConfig, SpinnerProgress};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let _log_guard = init_logging(&cli)?;

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // === Configuration ===
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?
    };
    apply_backend_overrides(&cli, &mut config);
    config.validate()?;

    let settings = Settings::resolve(&cli, &config);
    if !settings.color {
        colored::control::set_override(false);
    }
    info!("Using backend {}", settings.base_url);

    // === Dependency Injection ===
    let gateway = Arc::new(
        HttpTravelGateway::with_timeout(&settings.base_url, settings.timeout)
            .context("Failed to create backend client")?,
    );
    let formatter = ConsoleFormatter::new(settings.format);
    let progress: Box<dyn RequestProgress> = if settings.show_progress {
        Box::new(SpinnerProgress::new())
    } else {
        Box::new(NoProgress)
    };

    let result = match cli.command.clone().unwrap_or(Command::Chat) {
        Command::Chat => {
            let repl_config = ReplConfig {
                show_progress: settings.show_progress,
                history_file: config.repl.history_file.as_deref().map(expand_home),
            };
            let mut repl = ChatRepl::new(gateway, settings.behavior)
                .with_formatter(formatter)
                .with_config(repl_config);
            repl.run().await?;
            return Ok(());
        }
        Command::Ask { question } => {
            let question = Command::question_text(&question);
            AskQuestionUseCase::new(gateway)
                .with_config(settings.behavior)
                .execute_with_progress(&question, progress.as_ref())
                .await
                .map(|output| formatter.answer(&output))
                .map_err(anyhow::Error::from)
        }
        Command::Hotels { city, rating } => SearchHotelsUseCase::new(gateway)
            .with_config(settings.behavior)
            .execute_with_progress(&city, &rating, progress.as_ref())
            .await
            .map(|output| formatter.hotels(&output))
            .map_err(anyhow::Error::from),
        Command::Plan {
            people,
            budget,
            days,
            interests,
            email,
        } => {
            if email.as_deref().is_some_and(|e| e.trim().is_empty()) {
                bail!("--email needs an address");
            }
            let input = GeneratePlanInput::new(people, budget, days).with_interests(interests);
            run_plan(gateway, &settings, &formatter, progress.as_ref(), input, email).await
        }
    };

    match result {
        Ok(output) => {
            println!("{}", output);
            Ok(())
        }
        Err(e) => {
            error!("{:#}", e);
            Err(e)
        }
    }
}

/// Generate a plan and, when an address is given, email it
async fn run_plan(
    gateway: Arc<HttpTravelGateway>,
    settings: &Settings,
    formatter: &ConsoleFormatter,
    progress: &dyn RequestProgress,
    input: GeneratePlanInput,
    email: Option<String>,
) -> Result<String> {
    let plan = GeneratePlanUseCase::new(gateway.clone())
        .with_config(settings.behavior)
        .execute_with_progress(input, progress)
        .await?;
    let mut output = formatter.plan(&plan);

    if let Some(address) = email {
        let sent = SendPlanEmailUseCase::new(gateway)
            .execute_with_progress(&address, &plan.fragment, progress)
            .await?;
        output.push('\n');
        output.push_str(&formatter.email(&sent));
    }

    Ok(output)
}

/// Put `--base-url` and `--timeout` into the config so validation sees them
fn apply_backend_overrides(cli: &Cli, config: &mut FileConfig) {
    if let Some(base_url) = &cli.base_url {
        config.backend.base_url = base_url.clone();
    }
    if let Some(timeout) = cli.timeout {
        config.backend.timeout_seconds = Some(timeout);
    }
}

/// Effective settings after applying CLI overrides to the loaded config
struct Settings {
    base_url: String,
    timeout: Option<Duration>,
    format: OutputFormat,
    color: bool,
    show_progress: bool,
    behavior: BehaviorConfig,
}

impl Settings {
    fn resolve(cli: &Cli, config: &FileConfig) -> Self {
        let escape = cli.escape_html || config.output.escape_html;
        Self {
            base_url: cli
                .base_url
                .clone()
                .unwrap_or_else(|| config.backend.base_url.clone()),
            timeout: cli
                .timeout
                .map(Duration::from_secs)
                .or_else(|| config.backend.timeout()),
            format: cli
                .output
                .map(OutputFormat::from)
                .or(config.output.format)
                .unwrap_or_default(),
            color: !cli.no_color && config.output.color,
            show_progress: !cli.quiet && config.repl.show_progress,
            behavior: BehaviorConfig::from_escape_flag(escape),
        }
    }
}

/// Initialize logging based on verbosity level, optionally teeing to a file
fn init_logging(cli: &Cli) -> Result<Option<WorkerGuard>> {
    let level = match (cli.quiet, cli.verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = EnvFilter::new(level);

    let Some(path) = &cli.log_file else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    };

    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let Some(file_name) = path.file_name() else {
        bail!("Invalid log file path: {}", path.display());
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

/// Expand a leading `~/` to the home directory
fn expand_home(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}
