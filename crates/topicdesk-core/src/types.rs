//! Domain types shared by the retriever and the agents.

use serde::{Deserialize, Serialize};

/// One unit of retrievable text.
///
/// - `content`: the text payload
/// - `source`: file name the text was loaded from
/// - `chunk_index`: position within the source file when chunking is on, else 0
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub content: String,
    pub source: String,
    #[serde(default)]
    pub chunk_index: usize,
}

impl Document {
    pub fn new(content: impl Into<String>, source: impl Into<String>) -> Self {
        Self { content: content.into(), source: source.into(), chunk_index: 0 }
    }
}

/// A scored reference into the retriever's corpus.
///
/// `position` is the document's index in load order. `score` is the cosine
/// similarity to the query; higher is better.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHit {
    pub position: usize,
    pub source: String,
    pub score: f32,
}
