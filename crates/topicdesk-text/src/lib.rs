//! topicdesk-text
//!
//! TF-IDF vector space over a small in-memory corpus. Tokenization reuses
//! tantivy's analyzer pipeline; ranking is plain cosine similarity.

pub mod analyzer;
pub mod tfidf;
pub mod retriever;

pub use analyzer::Analyzer;
pub use retriever::TfidfRetriever;
pub use tfidf::{cosine_similarity, SparseVector, TfidfVectorizer};
