use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Error;
use crate::types::Document;

/// Word-window chunking for long paragraphs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkingConfig {
    pub max_words: usize,
    pub overlap_words: usize,
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self { max_words: 100, overlap_words: 20 }
    }
}

/// Turns a directory of `.txt` files into an ordered corpus.
///
/// Without chunking every file is one `Document`. With chunking each
/// blank-line separated paragraph becomes a document, and paragraphs longer
/// than `max_words` are split into overlapping windows.
#[derive(Debug, Default)]
pub struct CorpusLoader {
    chunking: Option<ChunkingConfig>,
}

impl CorpusLoader {
    pub fn new() -> Self { Self::default() }

    pub fn with_chunking(chunking: ChunkingConfig) -> Result<Self> {
        if chunking.max_words == 0 {
            anyhow::bail!("chunk max_words must be at least 1");
        }
        if chunking.overlap_words >= chunking.max_words {
            anyhow::bail!(
                "chunk overlap ({}) must be smaller than max_words ({})",
                chunking.overlap_words,
                chunking.max_words
            );
        }
        Ok(Self { chunking: Some(chunking) })
    }

    pub fn load_dir(&self, data_dir: &Path) -> Result<Vec<Document>> {
        if !data_dir.is_dir() {
            return Err(Error::NotFound(format!("corpus directory {}", data_dir.display())).into());
        }
        let files = self.list_txt_files(data_dir);
        if files.is_empty() {
            tracing::warn!("No .txt files found under {}", data_dir.display());
            return Ok(vec![]);
        }
        let mut documents = Vec::new();
        for file_path in &files {
            let content = self.read_file_content(file_path)?;
            let source = file_name(file_path);
            match &self.chunking {
                None => documents.push(Document::new(content.trim(), source)),
                Some(cfg) => documents.extend(chunk_content(&content, &source, cfg)),
            }
        }
        tracing::info!("Loaded {} files into {} documents from {}", files.len(), documents.len(), data_dir.display());
        Ok(documents)
    }

    fn read_file_content(&self, file_path: &Path) -> Result<String> {
        match fs::read_to_string(file_path) {
            Ok(content) => Ok(content),
            Err(_) => {
                let bytes = fs::read(file_path).with_context(|| format!("reading {}", file_path.display()))?;
                Ok(String::from_utf8_lossy(&bytes).to_string())
            }
        }
    }

    fn list_txt_files(&self, root: &Path) -> Vec<PathBuf> {
        let mut txt_files = Vec::new();
        for entry in walkdir::WalkDir::new(root).max_depth(1).into_iter().filter_map(|e| e.ok()).filter(|e| e.file_type().is_file()) {
            let path = entry.path(); if path.extension().and_then(|s| s.to_str()) == Some("txt") { txt_files.push(path.to_path_buf()); }
        }
        txt_files.sort(); txt_files
    }
}

fn file_name(path: &Path) -> String {
    path.file_name().map(|n| n.to_string_lossy().to_string()).unwrap_or_default()
}

fn chunk_content(content: &str, source: &str, cfg: &ChunkingConfig) -> Vec<Document> {
    let mut pieces = Vec::new();
    for paragraph in content.split("\n\n") {
        let paragraph = paragraph.trim(); if paragraph.is_empty() { continue; }
        let words: Vec<&str> = paragraph.split_whitespace().collect();
        if words.len() <= cfg.max_words {
            pieces.push(paragraph.to_string());
            continue;
        }
        let mut start = 0;
        while start < words.len() {
            let end = (start + cfg.max_words).min(words.len());
            pieces.push(words[start..end].join(" "));
            if end >= words.len() { break; }
            start = end - cfg.overlap_words;
        }
    }
    pieces
        .into_iter()
        .enumerate()
        .map(|(chunk_index, text)| Document { content: text, source: source.to_string(), chunk_index })
        .collect()
}
