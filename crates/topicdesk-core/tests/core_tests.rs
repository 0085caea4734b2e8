use std::fs;
use std::path::Path;
use tempfile::TempDir;

use topicdesk_core::config::{resolve_with_base, Config};
use topicdesk_core::corpus::{ChunkingConfig, CorpusLoader};
use topicdesk_core::error::Error;

#[test]
fn load_dir_one_document_per_file_in_name_order() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path();
    fs::write(dir.join("b_insurance.txt"), "Insurance covers doctor fees.\n").unwrap();
    fs::write(dir.join("a_salary.txt"), "  Annual salary is paid monthly.  ").unwrap();
    fs::write(dir.join("notes.md"), "ignored").unwrap();

    let docs = CorpusLoader::new().load_dir(dir).expect("load");

    assert_eq!(docs.len(), 2, "only .txt files are loaded");
    assert_eq!(docs[0].source, "a_salary.txt");
    assert_eq!(docs[0].content, "Annual salary is paid monthly.", "content is trimmed");
    assert_eq!(docs[1].source, "b_insurance.txt");
    assert!(docs.iter().all(|d| d.chunk_index == 0));
}

#[test]
fn load_dir_skips_nested_directories() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path();
    fs::create_dir(dir.join("nested")).unwrap();
    fs::write(dir.join("nested/deep.txt"), "hidden").unwrap();
    fs::write(dir.join("top.txt"), "visible").unwrap();

    let docs = CorpusLoader::new().load_dir(dir).expect("load");
    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0].source, "top.txt");
}

#[test]
fn load_dir_empty_and_missing() {
    let tmp = TempDir::new().unwrap();
    let docs = CorpusLoader::new().load_dir(tmp.path()).expect("empty dir is fine");
    assert!(docs.is_empty());

    let missing = tmp.path().join("nope");
    let err = CorpusLoader::new().load_dir(&missing).unwrap_err();
    match err.downcast_ref::<Error>() {
        Some(Error::NotFound(what)) => assert!(what.contains("nope"), "{what}"),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn chunking_splits_long_paragraphs_with_overlap() {
    let tmp = TempDir::new().unwrap();
    let words: Vec<String> = (0..25).map(|i| format!("w{i}")).collect();
    let text = format!("short intro\n\n{}", words.join(" "));
    fs::write(tmp.path().join("long.txt"), text).unwrap();

    let loader = CorpusLoader::with_chunking(ChunkingConfig { max_words: 10, overlap_words: 2 }).expect("loader");
    let docs = loader.load_dir(tmp.path()).expect("load");

    // intro, then windows starting at 0, 8, 16
    assert_eq!(docs.len(), 4);
    assert_eq!(docs[0].content, "short intro");
    assert!(docs[1].content.starts_with("w0 "));
    assert!(docs[2].content.starts_with("w8 "), "window overlaps the previous by two words");
    assert!(docs[3].content.ends_with("w24"));
    let idx: Vec<usize> = docs.iter().map(|d| d.chunk_index).collect();
    assert_eq!(idx, vec![0, 1, 2, 3]);
}

#[test]
fn chunking_rejects_overlap_not_smaller_than_window() {
    assert!(CorpusLoader::with_chunking(ChunkingConfig { max_words: 5, overlap_words: 5 }).is_err());
    assert!(CorpusLoader::with_chunking(ChunkingConfig { max_words: 0, overlap_words: 0 }).is_err());
}

#[test]
fn config_reads_toml_and_falls_back_to_defaults() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("config.toml"),
        "[data]\ncorpus_dir = \"corpus\"\n\n[retriever]\nn_results = 3\n",
    )
    .unwrap();

    let config = Config::load_in(tmp.path()).expect("config");
    let dir: String = config.get("data.corpus_dir").expect("corpus_dir");
    assert_eq!(dir, "corpus");
    assert_eq!(config.get_or::<usize>("retriever.n_results", 4).unwrap(), 3);
    assert_eq!(config.get_or::<usize>("corpus.chunk_max_words", 7).unwrap(), 7);
}

#[test]
fn config_rejects_wrong_topic_count() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("config.toml"), "[routing]\ntopics = [\"only one\"]\n").unwrap();
    assert!(Config::load_in(tmp.path()).is_err());
}

#[test]
fn resolve_with_base_keeps_absolute_paths() {
    let base = Path::new("/srv/app");
    assert_eq!(resolve_with_base(base, "data"), Path::new("/srv/app/data"));
    assert_eq!(resolve_with_base(base, "/var/corpus"), Path::new("/var/corpus"));
}
