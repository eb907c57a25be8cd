/*!
 * Assist CLI - Command Interpreter Frontend
 *
 * Command-line access to the assist_core interpreter: classify a command,
 * extract a date/time, rank autocomplete suggestions, or answer a question.
 * Emits structured JSON with --json for integration with other tooling.
 */

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDateTime};
use clap::{Parser, Subcommand};

use assist_core::intent::IntentClassifier;
use assist_core::qa::QuestionAnswerer;
use assist_core::suggestions::SuggestionCatalog;
use assist_core::temporal::{extract_date_time, parse_date_time};

#[derive(Parser)]
#[command(name = "assist_cli")]
#[command(about = "Assist Core - Natural Language Command Interpreter", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a command into an intent
    Classify {
        /// The free-text command
        command: String,

        /// Emit a JSON object instead of the bare intent tag
        #[arg(short, long)]
        json: bool,
    },

    /// Extract a date/time implied by free text
    Extract {
        /// The free text to scan
        text: String,

        /// Reference time, e.g. 2024-01-01T10:00:00 (default: local now)
        #[arg(short, long)]
        now: Option<String>,

        /// Use the exhaustive deadline parser (durations, calendar dates)
        #[arg(short, long)]
        deep: bool,

        /// Emit a JSON object instead of the bare timestamp
        #[arg(short, long)]
        json: bool,
    },

    /// Rank autocomplete suggestions for partial input
    Suggest {
        /// Partial command text (empty shows the default set)
        #[arg(default_value = "")]
        partial: String,

        /// Maximum number of suggestions
        #[arg(short, long, default_value_t = 3)]
        limit: usize,

        /// Load the catalog from a YAML file instead of built-ins
        #[arg(short, long)]
        catalog: Option<PathBuf>,

        /// Emit a JSON array instead of one suggestion per line
        #[arg(short, long)]
        json: bool,
    },

    /// Answer a question from the built-in knowledge base
    Answer {
        /// The question text
        question: String,

        /// Reference time for time/date questions (default: local now)
        #[arg(short, long)]
        now: Option<String>,
    },

    /// Show version information
    Version,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Classify { command, json } => classify(&command, json),
        Commands::Extract {
            text,
            now,
            deep,
            json,
        } => extract(&text, now.as_deref(), deep, json),
        Commands::Suggest {
            partial,
            limit,
            catalog,
            json,
        } => suggest(&partial, limit, catalog, json),
        Commands::Answer { question, now } => answer(&question, now.as_deref()),
        Commands::Version => {
            println!("assist_cli v{}", env!("CARGO_PKG_VERSION"));
            println!("Assist Core Command Interpreter");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn classify(command: &str, json: bool) -> Result<()> {
    let classifier = IntentClassifier::new();
    let intent = classifier.classify(command);

    if json {
        let event = serde_json::json!({
            "type": "classification",
            "command": command,
            "intent": intent,
        });
        println!("{}", event);
    } else {
        println!("{}", intent);
    }

    Ok(())
}

fn extract(text: &str, now: Option<&str>, deep: bool, json: bool) -> Result<()> {
    let now = resolve_now(now)?;
    let extracted = if deep {
        parse_date_time(text, now)
    } else {
        extract_date_time(text, now)
    };

    if json {
        let event = serde_json::json!({
            "type": "temporal",
            "text": text,
            "now": now.format("%Y-%m-%dT%H:%M:%S").to_string(),
            "extracted": extracted.map(|t| t.format("%Y-%m-%dT%H:%M:%S").to_string()),
        });
        println!("{}", event);
    } else {
        match extracted {
            Some(t) => println!("{}", t.format("%Y-%m-%dT%H:%M:%S")),
            None => println!("no date found"),
        }
    }

    Ok(())
}

fn suggest(partial: &str, limit: usize, catalog_path: Option<PathBuf>, json: bool) -> Result<()> {
    let mut catalog = SuggestionCatalog::new();
    if let Some(path) = catalog_path {
        catalog
            .load_from_yaml(&path)
            .with_context(|| format!("loading catalog from {}", path.display()))?;
    }

    let suggestions = catalog.suggest(partial, limit);

    if json {
        let event = serde_json::json!({
            "type": "suggestions",
            "partial": partial,
            "suggestions": suggestions,
        });
        println!("{}", event);
    } else {
        for suggestion in suggestions {
            println!("{}", suggestion);
        }
    }

    Ok(())
}

fn answer(question: &str, now: Option<&str>) -> Result<()> {
    let now = resolve_now(now)?;
    let qa = QuestionAnswerer::new();
    println!("{}", qa.answer(question, now));
    Ok(())
}

/// Parse an explicit reference time, or fall back to the local clock
fn resolve_now(arg: Option<&str>) -> Result<NaiveDateTime> {
    match arg {
        Some(s) => parse_timestamp(s).with_context(|| format!("invalid timestamp '{}'", s)),
        None => Ok(Local::now().naive_local()),
    }
}

fn parse_timestamp(s: &str) -> Result<NaiveDateTime> {
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"] {
        if let Ok(t) = NaiveDateTime::parse_from_str(s, format) {
            return Ok(t);
        }
    }
    anyhow::bail!("expected YYYY-MM-DDTHH:MM[:SS]")
}
