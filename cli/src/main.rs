//! CLI entrypoint for askdesk
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, bail};
use askdesk_application::SubmitQuestionUseCase;
use askdesk_application::ports::fault::FaultLog;
use askdesk_application::ports::ui::UiNotifier;
use askdesk_domain::QuestionRequest;
use askdesk_infrastructure::{ConfigLoader, HttpQaGateway, JsonlExchangeLogger, TracingFaultLog};
use askdesk_presentation::{AnswerFormatter, AskRepl, Cli, ConsoleUi, ErrorBoundary, OutputFormat};
use clap::Parser;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("Starting askdesk");

    // Show config file locations and exit
    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(ExitCode::SUCCESS);
    }

    // Load configuration
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())?
    };

    for warning in config.validate() {
        warn!("{}", warning);
    }

    // Flags beat config
    let base_url = cli
        .server
        .clone()
        .unwrap_or_else(|| config.service.base_url.clone());
    let show_progress = config.repl.show_progress && !cli.quiet;

    // === Dependency Injection ===
    let ui = Arc::new(ConsoleUi::new());
    let faults: Arc<dyn FaultLog> = Arc::new(TracingFaultLog);
    let gateway = Arc::new(HttpQaGateway::new(&base_url, ui.clone()));

    let mut use_case = SubmitQuestionUseCase::new(gateway);
    if let Some(path) = &config.logging.exchange_log
        && let Some(logger) = JsonlExchangeLogger::new(path)
    {
        info!("Logging exchanges to {}", logger.path().display());
        use_case = use_case.with_exchange_logger(Arc::new(logger));
    }

    let boundary = ErrorBoundary::new(faults.clone());

    // Chat mode
    if cli.chat {
        let mut repl = AskRepl::new(use_case, ui.clone(), faults.clone())
            .with_progress(show_progress)
            .with_history_file(config.repl.history_file.clone().map(Into::into))
            .with_service_url(&base_url);

        return Ok(match boundary.run("chat session", repl.run()).await {
            Some(()) => ExitCode::SUCCESS,
            None => ExitCode::FAILURE,
        });
    }

    // Single question mode: question is required
    let question = match cli.question {
        Some(q) => q,
        None => bail!("Question is required. Use --chat for interactive mode."),
    };

    let Some(request) = QuestionRequest::try_new(question) else {
        bail!("Question must not be empty.");
    };

    if show_progress {
        ui.set_loading(true);
    }

    let result = boundary
        .run("one-shot question", use_case.execute(request))
        .await;

    if show_progress {
        ui.set_loading(false);
    }

    match result {
        Some(Some(answer)) => {
            let output = match cli.output {
                OutputFormat::Full => AnswerFormatter::format(&answer),
                OutputFormat::Answer => AnswerFormatter::format_answer_only(&answer),
                OutputFormat::Json => AnswerFormatter::format_json(&answer),
            };
            println!("{}", output);
            Ok(ExitCode::SUCCESS)
        }
        Some(None) => {
            println!("{}", AnswerFormatter::format_empty());
            Ok(ExitCode::SUCCESS)
        }
        // The failure is already recorded; reflect it in the exit status
        None => Ok(ExitCode::FAILURE),
    }
}
