use std::fs;

use tempfile::TempDir;
use topicdesk_cli::{corpus_dir, corpus_loader, format_exchange, load_coordinator, system_settings, DEMO_QUERIES};
use topicdesk_core::config::Config;

fn write_corpus(dir: &std::path::Path) {
    fs::create_dir_all(dir).unwrap();
    fs::write(dir.join("salary.txt"), "Annual salary is the monthly salary times twelve, minus deductions.").unwrap();
    fs::write(dir.join("insurance.txt"), "The insurance policy includes room rent and doctor fees.").unwrap();
}

#[test]
fn demo_transcript_from_configured_corpus() {
    let tmp = TempDir::new().unwrap();
    write_corpus(&tmp.path().join("corpus"));
    fs::write(tmp.path().join("config.toml"), "[data]\ncorpus_dir = \"corpus\"\n").unwrap();

    let config = Config::load_in(tmp.path()).expect("config");
    let coordinator = load_coordinator(&config, tmp.path(), None).expect("coordinator");
    let transcript: Vec<String> = DEMO_QUERIES
        .iter()
        .map(|q| format_exchange(q, &coordinator.ask(q).expect("ask")))
        .collect();

    assert_eq!(
        transcript[0],
        format!("{}\nUser: How do I calculate annual salary?\nBot: Your annual salary is monthly salary × 12, minus deductions.", "=".repeat(60))
    );
    assert!(transcript[1].contains("Bot: Your insurance policy includes room rent (up to limit)"));
}

#[test]
fn override_dir_beats_config() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("config.toml"), "[data]\ncorpus_dir = \"configured\"\n").unwrap();
    let config = Config::load_in(tmp.path()).expect("config");
    assert_eq!(corpus_dir(&config, tmp.path(), None).unwrap(), tmp.path().join("configured"));
    assert_eq!(corpus_dir(&config, tmp.path(), Some("other")).unwrap(), tmp.path().join("other"));
}

#[test]
fn missing_corpus_dir_is_an_error() {
    let tmp = TempDir::new().unwrap();
    let config = Config::load_in(tmp.path()).expect("config");
    assert!(load_coordinator(&config, tmp.path(), Some("absent")).is_err());
}

#[test]
fn settings_and_chunking_from_config() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("config.toml"),
        "[retriever]\nn_results = 2\n\n[routing]\ntopics = [\"pay salary\", \"health insurance\"]\n\n[corpus]\nchunk_max_words = 5\nchunk_overlap_words = 1\n",
    )
    .unwrap();
    let config = Config::load_in(tmp.path()).expect("config");

    let settings = system_settings(&config).expect("settings");
    assert_eq!(settings.n_results, 2);
    assert_eq!(settings.topics, Some(["pay salary".to_string(), "health insurance".to_string()]));

    let corpus = tmp.path().join("corpus");
    fs::create_dir(&corpus).unwrap();
    fs::write(corpus.join("long.txt"), "one two three four five six seven eight").unwrap();
    let docs = corpus_loader(&config).expect("loader").load_dir(&corpus).expect("load");
    assert_eq!(docs.len(), 2);
    assert_eq!(docs[1].content, "five six seven eight");
}
