use std::env;
use std::path::Path;

use topicdesk_cli::{format_exchange, init_tracing, load_coordinator, DEMO_QUERIES};
use topicdesk_core::config::Config;

fn main() -> anyhow::Result<()> {
    init_tracing();
    let config = Config::load().map_err(|e| { eprintln!("Error loading config: {}", e); e })?;
    let dir_override = env::args().nth(1);
    let coordinator = load_coordinator(&config, Path::new("."), dir_override.as_deref())?;
    for query in DEMO_QUERIES {
        let answer = coordinator.ask(query)?;
        println!("{}", format_exchange(query, &answer));
    }
    Ok(())
}
