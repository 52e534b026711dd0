use std::{io, path::PathBuf};

use clap::Parser;
use little_search_engine::{
    error::Result,
    loader::make_index,
    search::{SearchEngine, SearchResult, DEFAULT_LIMIT},
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File listing the documents to index, or a directory of documents
    #[arg(long, default_value = "docs.txt")]
    docs: PathBuf,

    /// File of noise words excluded from the index
    #[arg(long, default_value = "noisewords.txt")]
    noise_words: PathBuf,

    /// Maximum number of documents per query
    #[arg(short, long, default_value_t = DEFAULT_LIMIT)]
    limit: usize,

    /// Print results as JSON
    #[arg(long, default_value = "false")]
    json: bool,

    /// Run a single query and exit
    #[arg(short, long, num_args = 2, value_names = ["KW1", "KW2"])]
    query: Option<Vec<String>>,
}

fn print_result(result: &SearchResult, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(result)?);
    } else if result.documents.is_empty() {
        println!("No matches");
    } else {
        for document in &result.documents {
            println!("{document}");
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("little_search_engine=info")),
        )
        .init();

    let args = Args::parse();

    let engine = SearchEngine::new(make_index(&args.docs, &args.noise_words)?);

    if let Some([kw1, kw2]) = args.query.as_deref() {
        let result = SearchResult::new(kw1, kw2, engine.top_matches(kw1, kw2, args.limit));
        return print_result(&result, args.json);
    }

    let mut buffer = String::new();

    println!("Enter two keywords (or 'exit'):");

    loop {
        buffer.clear();
        if io::stdin().read_line(&mut buffer)? == 0 || buffer.trim() == "exit" {
            break;
        }

        let mut words = buffer.split_whitespace();
        let Some(kw1) = words.next() else {
            continue;
        };
        let kw2 = words.next().unwrap_or(kw1);

        let start = std::time::Instant::now();
        let result = SearchResult::new(kw1, kw2, engine.top_matches(kw1, kw2, args.limit));
        tracing::debug!(elapsed = ?start.elapsed(), "query answered");

        print_result(&result, args.json)?;
    }

    Ok(())
}
