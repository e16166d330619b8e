use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use lindex::{InvertedIndex, LineCorpus, Session};
use tracing::info;

#[derive(Parser)]
#[command(name = "lindex")]
#[command(about = "In-memory line-oriented text search", long_about = None)]
struct Args {
    /// Text file to index, one record per line
    file: PathBuf,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();

    info!("Starting lindex v{}", lindex::VERSION);

    // A load failure is fatal: there is nothing to index.
    let corpus = LineCorpus::load(&args.file)?;
    let index = InvertedIndex::build(&corpus);

    info!("Loaded {} lines from {}", corpus.len(), args.file.display());
    info!("Indexed {} distinct terms", index.term_count());

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(&corpus, &index, stdin.lock(), stdout.lock());
    session.run()?;

    Ok(())
}
