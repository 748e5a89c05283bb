use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;

use topictag::config::Config;
use topictag::pinecone::control::ControlPlaneClient;
use topictag::pipeline::process_document;
use topictag::topics::extractor::TfIdfExtractor;
use topictag::topics::preprocess;
use topictag::topics::traits::TopicExtractor;

/// Topictag: extract latent topics from a document and write them as
/// metadata onto the matching record in a Pinecone index.
#[derive(Parser)]
#[command(name = "topictag", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ensure the configured Pinecone index exists
    Init,

    /// Extract and display topics for a document, without touching the index
    Topics {
        /// Path to a plain-text document, or `-` for stdin
        file: PathBuf,

        /// How many topics to infer
        #[arg(long, default_value = "3")]
        num_topics: usize,

        /// How many words per topic
        #[arg(long, default_value = "3")]
        words: usize,
    },

    /// Extract topics and write them onto a record's metadata
    Tag {
        /// Record id in the index (e.g. doc_123)
        id: String,

        /// Path to a plain-text document, or `-` for stdin
        file: PathBuf,

        /// How many topics to infer
        #[arg(long, default_value = "3")]
        num_topics: usize,

        /// How many words per topic
        #[arg(long, default_value = "3")]
        words: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("topictag=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init => {
            let config = Config::load()?;
            config.require_api_key()?;

            let control =
                ControlPlaneClient::new(&config.control_plane_url, &config.pinecone_api_key)?;
            let created = control.ensure_index(&config.create_index_request()).await?;

            if created {
                println!(
                    "Created index {} ({}d, {})",
                    config.index_name.bold(),
                    config.dimension,
                    config.metric
                );
            } else {
                println!("Index ready: {}", config.index_name.bold());
            }
        }

        Commands::Topics {
            file,
            num_topics,
            words,
        } => {
            let text = read_document(&file)?;
            let extractor = TfIdfExtractor {
                num_topics,
                words_per_topic: words,
                ..Default::default()
            };

            let segments = preprocess::segment_document(&text);
            let topic_set = extractor.extract(&segments)?;
            topic_set.display();
        }

        Commands::Tag {
            id,
            file,
            num_topics,
            words,
        } => {
            let config = Config::load()?;
            config.require_api_key()?;

            let text = read_document(&file)?;
            let extractor = TfIdfExtractor {
                num_topics,
                words_per_topic: words,
                ..Default::default()
            };

            let topic_set = process_document(&config, &extractor, &id, &text).await?;
            topic_set.display();

            println!(
                "{}",
                format!("Updated metadata for {id} in {}", config.index_name).green()
            );
        }
    }

    Ok(())
}

/// Read the document text from a file path, or stdin for `-`.
fn read_document(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read document from stdin")?;
        Ok(text)
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read document from {}", path.display()))
    }
}
