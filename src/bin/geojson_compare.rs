//! GeoJSON Comparison CLI
//!
//! Validates, analyzes and compares GeoJSON documents from files, stdin (`-`)
//! or the built-in samples (`sample:1`, `sample:2`).

use clap::{Parser, Subcommand};
use geojson_compare::{render, CompareConfig, DocumentSource, OutputFormat};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "geojson-compare")]
#[command(about = "Validate, analyze and compare GeoJSON documents")]
struct Cli {
    /// Config file to load (optional)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Output format (overrides config)
    #[arg(short, long, global = true, value_enum)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check documents against the GeoJSON structural rules
    Validate {
        /// Documents to validate
        #[arg(required = true)]
        docs: Vec<DocumentSource>,
    },

    /// Summarize one document's geometry and properties
    Analyze {
        doc: DocumentSource,
    },

    /// Report structural differences between two documents
    Compare {
        first: DocumentSource,
        second: DocumentSource,
    },

    /// Run the full validate/analyze/compare pipeline
    Report {
        first: Option<DocumentSource>,
        second: Option<DocumentSource>,
    },

    /// Show or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration
    Show,

    /// Initialize a new config file
    Init {
        /// Output path
        #[arg(short, long, default_value = "geojson-compare.toml")]
        output: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

/// Print a report as text or as a timestamped JSON envelope
fn emit<T: Serialize>(
    format: OutputFormat,
    report: &T,
    text: impl FnOnce() -> String,
) -> Result<(), Box<dyn std::error::Error>> {
    let envelope = || {
        serde_json::json!({
            "generated_at": chrono::Utc::now().to_rfc3339(),
            "report": report,
        })
    };

    match format {
        OutputFormat::Text => print!("{}", text()),
        OutputFormat::Pretty => println!("{}", serde_json::to_string_pretty(&envelope())?),
        OutputFormat::Compact => println!("{}", serde_json::to_string(&envelope())?),
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = CompareConfig::load_from(cli.config.as_deref())?;
    let format = cli.format.unwrap_or(config.output.format);

    match cli.command {
        Commands::Validate { docs } => {
            let pipeline = config.pipeline()?;
            let mut results = Vec::with_capacity(docs.len());

            for source in &docs {
                let doc = source.load()?;
                results.push((source.to_string(), pipeline.validator().validate(&doc)));
            }

            let all_valid = results.iter().all(|(_, r)| r.valid);
            let report: Vec<_> = results
                .iter()
                .map(|(name, r)| serde_json::json!({"source": name, "valid": r.valid, "message": r.message}))
                .collect();

            emit(format, &report, || {
                results
                    .iter()
                    .map(|(name, r)| format!("{} - {}\n", name, render::validation(r)))
                    .collect()
            })?;

            if !all_valid {
                std::process::exit(1);
            }
        }

        Commands::Analyze { doc } => {
            let pipeline = config.pipeline()?;
            let value = doc.load()?;
            let report = pipeline.inspect(&value);
            emit(format, &report, || render::document(&doc.to_string(), &report))?;
        }

        Commands::Compare { first, second } => {
            let (a, b) = (first.load()?, second.load()?);
            let report = geojson_compare::compare(&a, &b);
            emit(format, &report, || render::comparison(&report))?;
        }

        Commands::Report { first, second } => {
            let pipeline = config.pipeline()?;
            let a = first.as_ref().map(DocumentSource::load).transpose()?;
            let b = second.as_ref().map(DocumentSource::load).transpose()?;

            if a.is_none() && b.is_none() {
                return Err("no documents supplied; pass a path, '-' or sample:1/sample:2".into());
            }

            let report = pipeline.run(a.as_ref(), b.as_ref());
            emit(format, &report, || render::pair(&report))?;
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                println!("📋 geojson-compare configuration\n");
                println!("Validation:");
                println!("  Strict member types: {}", config.validation.strict_member_types);
                println!("\nOutput:");
                println!("  Format: {:?}", config.output.format);
            }
            ConfigAction::Init { output } => {
                CompareConfig::default().save(&output)?;
                println!("✅ Created config file: {}", output);
            }
        },
    }

    Ok(())
}
