//! edgarcheck CLI binary.
//!
//! Validates SEC EDGAR filing URLs from the command line.

mod integration;
mod logging;
mod settings;

use clap::{Parser, Subcommand};
use edgarcheck::data::edgar::EdgarClient;
use edgarcheck::message::render;
use edgarcheck::{FilingUrlValidator, ValidationResult};
use integration::form_session::Renderer;
use integration::watch::watch;
use serde_json::json;
use std::path::PathBuf;
use std::process;
use tokio::io::BufReader;

#[derive(Parser)]
#[command(name = "edgarcheck")]
#[command(about = "Validate SEC EDGAR 10-K/10-Q filing URLs", long_about = None)]
#[command(version)]
struct Cli {
    /// Config file (TOML); defaults to <config dir>/edgarcheck/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Debug logging to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate one filing URL
    Validate {
        /// Filing URL (direct archive or inline viewer form)
        url: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,

        /// Do not cross-check the accession number segment
        #[arg(long)]
        lenient: bool,
    },

    /// Validate `FIELD URL` lines from stdin as they arrive
    Watch {
        /// Field to register (repeatable)
        #[arg(long = "field", required = true)]
        fields: Vec<String>,

        /// Do not cross-check the accession number segment
        #[arg(long)]
        lenient: bool,
    },
}

#[tokio::main]
async fn main() {
    match run().await {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

async fn run() -> Result<i32, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let config = settings::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Validate { url, json, lenient } => {
            let config = settings::apply_overrides(config, lenient);
            let validator = FilingUrlValidator::from_config(&config)?;
            validate_one(&validator, &url, json).await
        }
        Commands::Watch { fields, lenient } => {
            let config = settings::apply_overrides(config, lenient);
            let validator = FilingUrlValidator::from_config(&config)?;
            let stdin = BufReader::new(tokio::io::stdin());
            watch(&validator, &fields, stdin, stdout_renderer).await?;
            Ok(0)
        }
    }
}

/// Print feedback for one URL. Exit code 1 when the URL is rejected.
async fn validate_one(
    validator: &FilingUrlValidator<EdgarClient>,
    url: &str,
    as_json: bool,
) -> Result<i32, Box<dyn std::error::Error>> {
    let url = url.trim();
    if url.is_empty() {
        return Ok(0);
    }

    let result = validator.validate(url).await;
    let message = render(&result, validator.rules());

    if as_json {
        let reason = result.reason();
        let output = json!({
            "url": url,
            "valid": result.is_valid(),
            "reason": reason.map(|r| r.code()),
            "detail": reason.and_then(|r| r.detail()),
            "message": message,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", message);
    }

    Ok(match result {
        ValidationResult::Valid => 0,
        ValidationResult::Invalid(_) => 1,
    })
}

fn stdout_renderer(field: &str) -> Renderer {
    let field = field.to_string();
    Box::new(move |text: &str| println!("{}: {}", field, text))
}
