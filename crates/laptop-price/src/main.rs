//! laptop-price CLI
//!
//! Normalizes laptop listings from the command line, one JSON record or a
//! whole CSV dataset at a time.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use laptop_features::{normalize_with_diagnostics, RawSpecRecord, FEATURE_COLUMNS};
use laptop_price::{
    normalize_csv, write_features_csv, BatchOptions, OutputFormat, PriceConfig, PriceError,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "laptop-price", version, about = "Normalize laptop specs into model features")]
struct Cli {
    /// Config file (TOML or JSON); defaults to <config dir>/laptop-price/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format for single records: json, json-pretty or csv
    #[arg(long, global = true)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Normalize one JSON raw record
    Normalize {
        /// JSON file to read; stdin when omitted
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Also print values dropped from the feature record
        #[arg(long)]
        diagnostics: bool,
    },
    /// Normalize a CSV dataset into a feature CSV
    Batch {
        /// CSV with the dataset columns (Company, TypeName, ...)
        input: PathBuf,

        /// Output CSV; stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Fail on the first rejected row
        #[arg(long)]
        stop_on_error: bool,

        /// Do not write the column header
        #[arg(long)]
        no_header: bool,
    },
    /// Print the feature columns in model-input order
    Columns,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut config = PriceConfig::load_or_default(cli.config.as_deref())?;
    if let Some(format) = cli.format {
        config.output.format = format;
    }

    // RUST_LOG wins over the configured filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Command::Normalize { input, diagnostics } => {
            run_normalize(&config, input, diagnostics)?
        }
        Command::Batch {
            input,
            output,
            stop_on_error,
            no_header,
        } => {
            let mut batch = config.batch.clone();
            batch.stop_on_error |= stop_on_error;
            batch.write_header &= !no_header;
            run_batch(&batch, input, output)?
        }
        Command::Columns => {
            for column in FEATURE_COLUMNS {
                println!("{}", column);
            }
        }
    }

    Ok(())
}

fn run_normalize(
    config: &PriceConfig,
    input: Option<PathBuf>,
    diagnostics: bool,
) -> Result<(), PriceError> {
    let mut json = String::new();
    match &input {
        Some(path) => {
            File::open(path)?.read_to_string(&mut json)?;
        }
        None => {
            io::stdin().read_to_string(&mut json)?;
        }
    }

    let raw: RawSpecRecord = serde_json::from_str(&json)?;
    let (record, extra) = normalize_with_diagnostics(&raw)?;
    tracing::debug!(?extra, "Normalized record");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match config.output.format {
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(&record)?)?,
        OutputFormat::JsonPretty => writeln!(out, "{}", serde_json::to_string_pretty(&record)?)?,
        OutputFormat::Csv => {
            write_features_csv(&mut out, std::slice::from_ref(&record), config.batch.write_header)?
        }
    }

    if diagnostics {
        eprintln!("{}", serde_json::to_string(&extra)?);
    }
    Ok(())
}

fn run_batch(
    batch: &laptop_price::BatchConfig,
    input: PathBuf,
    output: Option<PathBuf>,
) -> Result<(), PriceError> {
    let reader = BufReader::new(File::open(&input)?);
    let report = normalize_csv(reader, &BatchOptions::from(batch))?;

    match output {
        Some(path) => {
            let writer = BufWriter::new(File::create(&path)?);
            write_features_csv(writer, &report.records, batch.write_header)?;
            tracing::info!("Wrote {} rows to {}", report.records.len(), path.display());
        }
        None => {
            let stdout = io::stdout();
            write_features_csv(stdout.lock(), &report.records, batch.write_header)?;
        }
    }

    if !report.rejected.is_empty() {
        eprintln!(
            "{} of {} rows rejected:",
            report.rejected.len(),
            report.total_rows()
        );
        for row in &report.rejected {
            eprintln!("  line {}: {}", row.line, row.error);
        }
    }
    Ok(())
}
