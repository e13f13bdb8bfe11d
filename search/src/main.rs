use anyhow::Result;
use clap::{ArgGroup, Parser};
use retrieval::{RetrievalIndex, DEFAULT_RELEVANCE_THRESHOLD, DEFAULT_TOP_K};
use search::run_query;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "search")]
#[command(about = "Query a TF-IDF corpus index from the command line", long_about = None)]
#[command(group(ArgGroup::new("source").required(true).args(["corpus", "corpus_dir"])))]
struct Args {
    /// Free-text query
    query: String,
    /// Marker-delimited corpus file
    #[arg(long)]
    corpus: Option<String>,
    /// Directory of .txt documents, one document per file
    #[arg(long)]
    corpus_dir: Option<String>,
    /// Maximum number of passages to return
    #[arg(short, long, default_value_t = DEFAULT_TOP_K)]
    k: usize,
    /// Minimum cosine similarity a passage must exceed
    #[arg(long, default_value_t = DEFAULT_RELEVANCE_THRESHOLD)]
    threshold: f32,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Args::parse();

    let index = match (&args.corpus, &args.corpus_dir) {
        (Some(file), _) => RetrievalIndex::from_corpus_file(file),
        (None, Some(dir)) => RetrievalIndex::from_corpus_dir(dir),
        // clap's source group guarantees one of the two is present.
        (None, None) => unreachable!("clap enforces a corpus source"),
    };

    let response = run_query(&index, &args.query, args.k, args.threshold)?;
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
