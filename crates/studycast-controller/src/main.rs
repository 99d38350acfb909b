/*
[INPUT]:  CLI arguments, source document or text, OS interrupt signals
[OUTPUT]: One generation run with live progress and printed results
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags, startup flow, or cancellation handling
*/

use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use tokio::sync::mpsc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use studycast_adapter::{
    ClientConfig, DocumentSource, LlmProvider, ProcessRequest, StudycastClient, TtsProvider,
    DEFAULT_DURATION_MINUTES, DEFAULT_STYLE,
};
use studycast_controller::{status_line, TaskController, TaskEvent};

#[derive(Parser, Debug)]
#[command(name = "studycast", version, about = "StudyCast generation client")]
struct Cli {
    #[arg(long = "base-url", value_name = "URL", default_value = "http://127.0.0.1:8000")]
    base_url: String,
    /// Source document to upload (PDF or plain text file)
    #[arg(long = "file", value_name = "PATH")]
    file: Option<PathBuf>,
    /// Raw text to process instead of (or alongside) a document
    #[arg(long = "text", value_name = "TEXT")]
    text: Option<String>,
    #[arg(long = "duration", value_name = "MINUTES", default_value_t = DEFAULT_DURATION_MINUTES)]
    duration: u32,
    #[arg(long = "style", value_name = "STYLE", default_value = DEFAULT_STYLE)]
    style: String,
    /// LLM provider (openai | ollama); backend default when omitted
    #[arg(long = "llm-provider", value_name = "PROVIDER")]
    llm_provider: Option<String>,
    /// Model name; the backend picks automatically when omitted
    #[arg(long = "llm-model", value_name = "MODEL")]
    llm_model: Option<String>,
    /// TTS provider (openai | local | none); backend default when omitted
    #[arg(long = "tts-provider", value_name = "PROVIDER")]
    tts_provider: Option<String>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    let client = StudycastClient::with_config_and_base_url(ClientConfig::default(), &args.base_url)
        .context("build backend client")?;

    client
        .health()
        .await
        .with_context(|| format!("backend not reachable at {}", args.base_url))?;

    match client.fetch_config().await {
        Ok(config) => {
            info!(
                llm_default = ?config.llm.default_provider,
                ollama_models = config.llm.ollama_models.len(),
                tts_default = ?config.tts.default_provider,
                "backend configuration loaded"
            );
        }
        Err(err) => warn!(error = %err, "could not load backend configuration"),
    }

    let request = build_request(&args).await?;

    let (events_tx, mut events_rx) = mpsc::unbounded_channel();
    let controller = TaskController::new(client, events_tx);
    setup_cancel_handler(controller.clone());

    println!("Sending content to backend…");
    let task_id = match controller.submit(request).await {
        Ok(task_id) => task_id,
        Err(err) => bail!("{err}"),
    };
    info!(%task_id, "job submitted");

    while let Some(event) = events_rx.recv().await {
        match event {
            TaskEvent::Progress {
                stage,
                queue_position,
                ..
            } => {
                println!("{}", status_line(stage, queue_position));
            }
            TaskEvent::Completed { result, .. } => {
                print_result(&result, &args.base_url);
                return Ok(());
            }
            TaskEvent::Failed { message, .. } => {
                bail!("Backend error: {message}");
            }
            TaskEvent::Cancelled { .. } => {
                println!("Generation cancelled.");
                return Ok(());
            }
        }
    }

    Err(anyhow!("event channel closed before a terminal event"))
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}

async fn build_request(args: &Cli) -> Result<ProcessRequest> {
    let document = match &args.file {
        Some(path) => Some(load_document(path).await?),
        None => None,
    };

    Ok(ProcessRequest {
        document,
        text: args.text.clone().unwrap_or_default(),
        duration_minutes: args.duration,
        style: args.style.clone(),
        llm_provider: args
            .llm_provider
            .as_deref()
            .map(parse_llm_provider)
            .transpose()?,
        llm_model: args.llm_model.clone(),
        tts_provider: args
            .tts_provider
            .as_deref()
            .map(parse_tts_provider)
            .transpose()?,
    })
}

async fn load_document(path: &Path) -> Result<DocumentSource> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("read document {}", path.display()))?;
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .context("document path has no usable file name")?
        .to_string();
    Ok(DocumentSource { file_name, bytes })
}

fn parse_llm_provider(raw: &str) -> Result<LlmProvider> {
    match raw {
        "openai" => Ok(LlmProvider::Openai),
        "ollama" => Ok(LlmProvider::Ollama),
        other => bail!("unknown LLM provider: {other}"),
    }
}

fn parse_tts_provider(raw: &str) -> Result<TtsProvider> {
    match raw {
        "openai" => Ok(TtsProvider::Openai),
        "local" => Ok(TtsProvider::Local),
        "none" => Ok(TtsProvider::Disabled),
        other => bail!("unknown TTS provider: {other}"),
    }
}

fn setup_cancel_handler(controller: TaskController) {
    tokio::spawn(async move {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!(error = %err, "failed to install SIGINT handler");
            return;
        }
        info!("received SIGINT");
        controller.cancel().await;
    });
}

fn print_result(result: &studycast_adapter::GenerationResult, base_url: &str) {
    println!("\nDone. Script and flashcards are ready.\n");

    println!("== Summary ==");
    if result.summary.is_empty() {
        println!("(No summary received.)");
    } else {
        println!("{}", result.summary);
    }

    println!("\n== Podcast script ==");
    if result.script.is_empty() {
        println!("(No script received.)");
    } else {
        println!("{}", result.script);
    }

    println!("\n== Flashcards ==");
    if result.flashcards.is_empty() {
        println!("No flashcards generated.");
    } else {
        for (index, card) in result.flashcards.iter().enumerate() {
            println!("Q{}: {}", index + 1, card.question);
            println!("    {}", card.answer);
        }
    }

    match &result.audio_url {
        Some(path) => println!("\nAudio: {}{path}", base_url.trim_end_matches('/')),
        None => println!("\nNo audio generated (TTS disabled or failed)."),
    }
}
