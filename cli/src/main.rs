//! CLI entrypoint for image-studio
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::path::Path;
use std::sync::Arc;
use studio_application::{
    ActionOutcome, NoProgress, RequestDispatcher, SessionController, SessionParams,
    SubmissionProgress, TurnAction, TurnActionHandler,
};
use studio_domain::ImageModel;
use studio_infrastructure::{
    AttachmentLoader, ConfigLoader, FileConfig, HttpGenerationGateway, HttpImageDownloader,
    JsonlTurnLogger, SystemClipboard,
};
use studio_presentation::{Cli, ConsoleFormatter, ProgressReporter, StudioRepl};
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("Failed to load configuration")?
    };

    let _log_guard = init_logging(cli.verbose, config.logging.file_path().as_deref());
    info!("Starting image-studio");

    match config.check() {
        Ok(warnings) => {
            for issue in &warnings {
                eprintln!("{}", ConsoleFormatter::format_config_issue(issue));
            }
        }
        Err(err) => {
            for issue in &err.0 {
                eprintln!("{}", ConsoleFormatter::format_config_issue(issue));
            }
            return Err(err.into());
        }
    }

    // === Dependency Injection ===
    let params = session_params(&cli, &config)?;
    let controller = Arc::new(build_controller(&config, &params)?);
    if let Some(index) = cli.base_image {
        controller
            .select_base_image(index)
            .context("Invalid --base-image")?;
    }

    let actions = TurnActionHandler::new(
        controller.clone(),
        Arc::new(HttpImageDownloader::new()),
        Arc::new(SystemClipboard::new()),
        params.save_dir.clone(),
    );

    // Interactive mode
    if cli.interactive {
        let repl = StudioRepl::new(controller, actions, Arc::new(AttachmentLoader))
            .with_progress(!cli.quiet);
        repl.run().await?;
        return Ok(());
    }

    // One-shot mode - a prompt or an image is required
    if cli.prompt.is_none() && cli.attach.is_none() {
        bail!("A prompt or --attach is required. Use --interactive for interactive mode.");
    }

    if let Some(location) = &cli.attach {
        let attachment = AttachmentLoader::load(location)?;
        controller.stage_attachment(attachment);
    }
    controller.set_draft(cli.prompt.clone().unwrap_or_default());

    let reporter = ProgressReporter::new();
    let progress: &dyn SubmissionProgress = if cli.quiet { &NoProgress } else { &reporter };

    let report = controller.submit(progress).await?;
    println!("{}", ConsoleFormatter::format_report(&report));

    if !report.resolved() {
        bail!("No image was produced");
    }

    if cli.save
        && let ActionOutcome::Saved(path) = actions.handle(TurnAction::SaveImage(report.turn)).await?
    {
        println!("Saved to {}", path.display());
    }

    Ok(())
}

/// Initialize tracing: stderr always, plus a log file when configured.
///
/// `RUST_LOG` takes precedence over the `-v` count.
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    let (file_layer, guard) = match log_file {
        Some(path) => {
            let directory = path.parent().unwrap_or_else(|| Path::new("."));
            let file_name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "image-studio.log".to_string());
            let appender = tracing_appender::rolling::never(directory, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_ansi(false).with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(file_layer)
        .init();

    guard
}

/// Config file selections, overridden by command-line flags
fn session_params(cli: &Cli, config: &FileConfig) -> Result<SessionParams> {
    let mut params = config.session_params();
    if let Some(model) = &cli.model {
        let model: ImageModel = model.parse().context("Invalid --model")?;
        params = params.with_model(model);
    }
    if let Some(dir) = &cli.save_dir {
        params = params.with_save_dir(dir);
    }
    Ok(params)
}

fn build_controller(config: &FileConfig, params: &SessionParams) -> Result<SessionController> {
    let endpoint = config.service.endpoint();
    let gateway = match &config.service.user_agent {
        Some(agent) => HttpGenerationGateway::with_user_agent(endpoint, agent)?,
        None => HttpGenerationGateway::new(endpoint),
    };
    info!("Generation endpoint: {}", gateway.endpoint());

    let dispatcher = RequestDispatcher::new(Arc::new(gateway)).with_catalog(config.catalog());
    let mut controller = SessionController::new(dispatcher, params);

    if let Some(path) = config.logging.transcript_path() {
        match JsonlTurnLogger::open(&path) {
            Some(logger) => {
                info!("Writing session transcript to {}", path.display());
                controller = controller.with_event_logger(Arc::new(logger));
            }
            None => eprintln!("Warning: could not open transcript {}", path.display()),
        }
    }

    Ok(controller)
}
