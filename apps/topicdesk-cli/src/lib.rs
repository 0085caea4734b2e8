//! Shared setup for the topicdesk binaries: logging, config-driven system
//! construction and transcript formatting.

use std::path::{Path, PathBuf};

use anyhow::Context;
use topicdesk_agents::{build_system, Coordinator, SystemSettings};
use topicdesk_core::config::{resolve_with_base, Config};
use topicdesk_core::corpus::{ChunkingConfig, CorpusLoader};

pub const DEMO_QUERIES: [&str; 2] = ["How do I calculate annual salary?", "What is included in my insurance policy?"];

pub const RULE_WIDTH: usize = 60;

/// Logs go to stderr so stdout stays a clean transcript. `RUST_LOG` overrides the `warn` default.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init();
}

/// `dir_override` wins over `data.corpus_dir`; relative paths resolve against `base`.
pub fn corpus_dir(config: &Config, base: &Path, dir_override: Option<&str>) -> anyhow::Result<PathBuf> {
    let dir = match dir_override {
        Some(d) => d.to_string(),
        None => config.get_or("data.corpus_dir", "data".to_string())?,
    };
    Ok(resolve_with_base(base, dir))
}

pub fn corpus_loader(config: &Config) -> anyhow::Result<CorpusLoader> {
    match config.get_or::<Option<usize>>("corpus.chunk_max_words", None)? {
        None => Ok(CorpusLoader::new()),
        Some(max_words) => {
            let overlap_words = config.get_or("corpus.chunk_overlap_words", ChunkingConfig::default().overlap_words.min(max_words.saturating_sub(1)))?;
            CorpusLoader::with_chunking(ChunkingConfig { max_words, overlap_words })
        }
    }
}

pub fn system_settings(config: &Config) -> anyhow::Result<SystemSettings> {
    let defaults = SystemSettings::default();
    let n_results = config.get_or("retriever.n_results", defaults.n_results)?;
    let topics = config
        .get_or::<Option<Vec<String>>>("routing.topics", None)?
        .map(|t| <[String; 2]>::try_from(t).map_err(|t| anyhow::anyhow!("routing.topics needs two entries, got {}", t.len())))
        .transpose()?;
    Ok(SystemSettings { n_results, topics })
}

/// Load the corpus and build the coordinator the way both binaries do.
pub fn load_coordinator(config: &Config, base: &Path, dir_override: Option<&str>) -> anyhow::Result<Coordinator> {
    let dir = corpus_dir(config, base, dir_override)?;
    let documents = corpus_loader(config)?.load_dir(&dir).with_context(|| format!("loading corpus from {}", dir.display()))?;
    tracing::info!(documents = documents.len(), dir = %dir.display(), "building coordinator");
    let coordinator = build_system(documents, &system_settings(config)?)?;
    Ok(coordinator)
}

pub fn format_exchange(query: &str, answer: &str) -> String {
    format!("{}\nUser: {}\nBot: {}", "=".repeat(RULE_WIDTH), query, answer)
}
