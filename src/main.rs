use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use bigrams::corpus::{CorpusFileLoader, CorpusGzFileLoader};
use bigrams::{report, BigramMiner, DEFAULT_BUCKETS};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the corpus file
    #[arg(default_value = "shakespeare.txt")]
    path: PathBuf,

    /// Number of hash buckets for the bigram table
    #[arg(long, default_value_t = DEFAULT_BUCKETS)]
    buckets: usize,

    /// Read the corpus through a gzip decoder
    #[arg(long)]
    gzip: bool,

    /// Report only the first K ranked bigrams
    #[arg(long, value_name = "K")]
    top: Option<usize>,

    /// Emit the ranking as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Log table statistics to stderr
    #[arg(short, long)]
    verbose: bool,
}

/// Initialize the tracing subscriber on stderr, leaving stdout to the report.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let start = Instant::now();

    let mut miner = BigramMiner::with_buckets(args.buckets);
    if args.gzip {
        miner.mine(&CorpusGzFileLoader::new(&args.path))?;
    } else {
        miner.mine(&CorpusFileLoader::new(&args.path))?;
    }

    tracing::info!(
        pairs = miner.pairs_seen(),
        distinct = miner.distinct(),
        "mined {}",
        args.path.display()
    );
    tracing::debug!(
        buckets = miner.table().num_buckets(),
        occupied = miner.table().occupied_buckets(),
        longest = miner.table().longest_bucket(),
        "bucket occupancy"
    );

    let ranking = miner.into_ranking();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let records = ranking.iter().take(args.top.unwrap_or(usize::MAX));
    if args.json {
        report::write_json(&mut out, records)?;
    } else {
        report::write_text(&mut out, records)?;
    }
    out.flush()?;

    tracing::info!(elapsed_ms = start.elapsed().as_millis() as u64, "done");
    Ok(())
}
