//! Contract analysis CLI
//!
//! Analyzes one `.pdf`, `.docx` or `.txt` contract and prints the results view or the
//! JSON record. Logs go to stderr.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use contract_cli::{analyze_file, render_report, write_report};
use contract_narrative::{NarrativeAssistant, NarrativeError};
use contract_types::ContractType;
use document_source::DocumentType;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "contract-cli")]
#[command(version, about = "Rule-based contract risk analysis")]
struct Args {
    /// Contract file (.pdf, .docx or .txt)
    file: PathBuf,

    /// Decode as this type instead of trusting the extension (pdf, docx, txt)
    #[arg(long = "type")]
    document_type: Option<DocumentType>,

    /// Contract type label, e.g. "Service Agreement"; classified automatically when omitted
    #[arg(long)]
    contract_type: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Also write the JSON record to this file or directory
    #[arg(short, long)]
    export: Option<PathBuf>,

    /// Ask the language model for a plain-language summary (needs GEMINI_API_KEY)
    #[arg(long)]
    summarize: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    contract_analyzer::validate_catalog().context("built-in pattern catalog is invalid")?;

    let document_type = args
        .document_type
        .unwrap_or_else(|| DocumentType::from_path(&args.file));
    let declared = args.contract_type.as_deref().map(ContractType::from_label);

    let assistant = if args.summarize {
        match NarrativeAssistant::from_env() {
            Ok(assistant) => Some(assistant),
            Err(NarrativeError::MissingApiKey) => {
                tracing::warn!("GEMINI_API_KEY is not set; using rule-based analysis only");
                None
            }
            Err(err) => return Err(err).context("failed to set up the narrative assistant"),
        }
    } else {
        None
    };

    tracing::info!(file = %args.file.display(), %document_type, "analyzing contract");
    let report = analyze_file(&args.file, document_type, declared, assistant.as_ref()).await;

    match args.format {
        OutputFormat::Text => print!("{}", render_report(&report)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    if let Some(target) = &args.export {
        let path = write_report(target, &report)?;
        eprintln!("Exported analysis to {}", path.display());
    }

    Ok(())
}
