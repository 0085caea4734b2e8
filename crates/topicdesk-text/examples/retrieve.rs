use std::env;
use std::path::PathBuf;

use topicdesk_core::corpus::CorpusLoader;
use topicdesk_core::traits::DocumentRetriever;
use topicdesk_text::TfidfRetriever;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <query> [corpus_dir]", args[0]);
        std::process::exit(1);
    }
    let corpus_dir = args.get(2).map(PathBuf::from).unwrap_or_else(|| PathBuf::from("data"));
    let documents = CorpusLoader::new().load_dir(&corpus_dir)?;
    let retriever = TfidfRetriever::from_documents(documents, 4)?;
    for (i, hit) in retriever.rank(&args[1], retriever.n_results())?.iter().enumerate() {
        println!("{}. score={:.4}  source={}", i + 1, hit.score, hit.source);
    }
    Ok(())
}
