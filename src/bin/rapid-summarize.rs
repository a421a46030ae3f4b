use anyhow::{Context, Result};
use clap::Parser;
use rapid_summarizer::{summarize_lossy, Summarizer, SummarizerConfig};
use std::io::Read;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "rapid-summarize")]
#[command(version, about = "Extractive TextRank summarizer", long_about = None)]
struct Cli {
    /// Input file (default: stdin)
    file: Option<PathBuf>,

    /// JSON configuration file; flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Maximum words in the summary
    #[arg(short, long)]
    budget: Option<usize>,

    /// Truncate the input to this many words before summarizing
    #[arg(long)]
    max_input_words: Option<usize>,

    /// Inputs shorter than this many words are echoed back
    #[arg(long)]
    min_words: Option<usize>,

    /// PageRank damping factor (0.0-1.0)
    #[arg(short, long)]
    damping: Option<f64>,

    /// PageRank convergence tolerance (L1 change between iterations)
    #[arg(long)]
    tolerance: Option<f64>,

    /// Maximum PageRank iterations
    #[arg(long)]
    max_iterations: Option<usize>,

    /// Keep stopwords in the similarity vectors
    #[arg(long)]
    keep_stopwords: bool,

    /// Stopword language (en, de, fr, es, ...)
    #[arg(short, long)]
    language: Option<String>,

    /// Never fail: degrade to a truncated input prefix on error
    #[arg(long, conflicts_with = "json")]
    lossy: bool,

    /// Print the full summary record as JSON
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn summarizer_config(&self) -> Result<SummarizerConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let raw = std::fs::read_to_string(path)
                    .with_context(|| format!("reading config {}", path.display()))?;
                SummarizerConfig::from_json_str(&raw)
                    .with_context(|| format!("parsing config {}", path.display()))?
            }
            None => SummarizerConfig::default(),
        };

        if let Some(budget) = self.budget {
            config.word_budget = budget;
        }
        if let Some(words) = self.max_input_words {
            config.truncate_input_words = words;
        }
        if let Some(words) = self.min_words {
            config.min_words_for_summarization = words;
        }
        if let Some(damping) = self.damping {
            config.damping = damping;
        }
        if let Some(tolerance) = self.tolerance {
            config.convergence_threshold = tolerance;
        }
        if let Some(iterations) = self.max_iterations {
            config.max_iterations = iterations;
        }
        if self.keep_stopwords {
            config.filter_stopwords = false;
        }
        if let Some(language) = &self.language {
            config.language = language.clone();
        }

        Ok(config)
    }

    fn read_input(&self) -> Result<Vec<u8>> {
        match &self.file {
            Some(path) => {
                std::fs::read(path).with_context(|| format!("reading {}", path.display()))
            }
            None => {
                let mut buf = Vec::new();
                std::io::stdin()
                    .read_to_end(&mut buf)
                    .context("reading stdin")?;
                Ok(buf)
            }
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.summarizer_config()?;
    let input = cli.read_input()?;

    if cli.lossy {
        let text = String::from_utf8_lossy(&input);
        println!("{}", summarize_lossy(&text, &config));
        return Ok(());
    }

    let summarizer = Summarizer::new(config)?;
    let summary = summarizer.summarize_bytes(&input)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{}", summary.text);
    }

    Ok(())
}
