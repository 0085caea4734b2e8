use std::env;
use std::path::Path;

use topicdesk_cli::{init_tracing, load_coordinator};
use topicdesk_core::config::Config;

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} \"<query>\" [corpus_dir]", args[0]);
        eprintln!("Example: {} 'how are deductions applied?' ./data", args[0]);
        std::process::exit(1);
    }
    let query = &args[1];
    let config = Config::load().map_err(|e| { eprintln!("Error loading config: {}", e); e })?;
    let coordinator = load_coordinator(&config, Path::new("."), args.get(2).map(String::as_str))?;

    let scores = coordinator.topic_scores(query);
    let agent = coordinator.route(query);
    println!("Query: {}", query);
    for (description, score) in coordinator.descriptions().iter().zip(scores) {
        println!("  topic '{}': {:.4}", description, score);
    }
    println!("Routed to: {} ({})", agent.name(), agent.topic());
    println!("Answer: {}", agent.answer(query)?);
    Ok(())
}
