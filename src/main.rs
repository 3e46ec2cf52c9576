use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use spanprep::commands::{run_extract, run_fetch, run_split, FetchParams};
use spanprep::{ArticleFetcher, HttpAnnotator, RuleSegmenter, DEFAULT_MAX_SENTENCES};

const DEFAULT_BASE_URL: &str = "https://content.guardianapis.com/search";

#[derive(Parser)]
#[command(name = "spanprep", version, about = "Corpus preparation for a span-categorization model")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch articles from the content API and chunk them into a corpus
    Fetch {
        /// Content API key
        #[arg(long, env = "GUARDIAN_API_KEY", hide_env_values = true)]
        api_key: String,

        /// Content API search endpoint
        #[arg(long, default_value = DEFAULT_BASE_URL)]
        base_url: String,

        /// Section to pull articles from
        #[arg(long, default_value = "environment")]
        section: String,

        /// Articles per page
        #[arg(long, default_value_t = 200)]
        page_size: u32,

        /// Number of pages to fetch
        #[arg(long, default_value_t = 3)]
        max_pages: u32,

        /// Maximum sentences per chunk
        #[arg(long, default_value_t = DEFAULT_MAX_SENTENCES)]
        max_sentences: usize,

        /// Records reserved for the sample file
        #[arg(long, default_value_t = 200)]
        sample_size: usize,

        /// Seed for the corpus shuffle
        #[arg(long, default_value_t = 45)]
        seed: u64,

        /// Directory for the output JSONL files
        #[arg(long, default_value = "assets/raw")]
        out_dir: PathBuf,
    },

    /// Split a labelled corpus into train and eval sets
    Split {
        /// Labelled JSONL file to split
        labelled: PathBuf,

        /// Fraction of accepted examples reserved for evaluation
        #[arg(long, default_value_t = 0.2)]
        eval_split: f64,

        /// Seed for the split shuffle
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },

    /// Extract and normalize span predictions for every chunk
    Extract {
        /// Chunked articles JSONL file
        articles: PathBuf,

        /// Output path for the normalized predictions
        #[arg(long, default_value = "assets/labelled/predicted_spans.jsonl")]
        output: PathBuf,

        /// Model server endpoint
        #[arg(long, default_value = "http://localhost:8000")]
        endpoint: String,
    },
}

fn main() -> Result<()> {
    // .env is optional; environment wins when both are set
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Fetch {
            api_key,
            base_url,
            section,
            page_size,
            max_pages,
            max_sentences,
            sample_size,
            seed,
            out_dir,
        } => {
            let fetcher = ArticleFetcher::new(base_url, api_key, section, page_size);
            let params = FetchParams {
                max_pages,
                max_sentences,
                sample_size,
                shuffle_seed: seed,
                out_dir,
            };
            run_fetch(&fetcher, &RuleSegmenter::new(), &params)
        }
        Command::Split {
            labelled,
            eval_split,
            seed,
        } => run_split(&labelled, eval_split, seed),
        Command::Extract {
            articles,
            output,
            endpoint,
        } => {
            let annotator = HttpAnnotator::new(endpoint);
            run_extract(&annotator, &articles, &output)
        }
    }
}
