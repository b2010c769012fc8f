use std::path::PathBuf;

use clap::Parser;

use factual_accuracy::extractors::ner::NerExtractor;
use factual_accuracy::models::config::AppConfig;
use factual_accuracy::processing::embedding::{SimilarityScorer, load_text_embedding};
use factual_accuracy::processing::report::{Reporter, sample_table};
use factual_accuracy::repository::table::CsvTable;

/// Check generated text against ground truth by comparing named entities.
#[derive(Parser, Debug)]
#[command(version)]
struct Cli {
    /// Table with `Ground_Truth` and `Output` columns.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Where to write the report.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// YAML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Evaluate the built-in sample rows when the input table is missing.
    #[arg(long)]
    sample: bool,
}

fn main() {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let cli = Cli::parse();

    let config = match AppConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    let delimiter = match config.delimiter_byte() {
        Ok(delimiter) => delimiter,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };

    let input = cli
        .input
        .or_else(|| config.input_path.as_ref().map(PathBuf::from))
        .unwrap_or_default();
    let output = cli
        .output
        .unwrap_or_else(|| PathBuf::from(&config.output_path));
    let table = CsvTable::new(input, output).with_delimiter(delimiter);

    let embedder = match load_text_embedding(
        &config.embedding_model,
        config.show_download_progress,
    ) {
        Ok(embedder) => embedder,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };
    let mut reporter = Reporter::new(NerExtractor::stacked(), SimilarityScorer::new(embedder));

    let outcome = match reporter.run(&table) {
        Ok(Some(summary)) => Ok(summary),
        Ok(None) if cli.sample => {
            log::info!("Using sample data as the input table was not found");
            reporter.run_table(sample_table(), &table)
        }
        Ok(None) => {
            log::error!("Nothing to evaluate, exiting");
            std::process::exit(1);
        }
        Err(e) => Err(e),
    };

    match outcome {
        Ok(_) => log::info!("Report written to {}", table.output_path().display()),
        Err(e) => {
            log::error!("Factual accuracy report failed: {e}");
            std::process::exit(1);
        }
    }
}
