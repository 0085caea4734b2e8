use std::sync::Arc;

use regex::{Regex, RegexBuilder};
use topicdesk_core::error::{Error, Result};
use topicdesk_core::traits::DocumentRetriever;

use crate::topic::Topic;

/// Returned when neither a canned answer nor a retrieved document is available.
pub const UNKNOWN_ANSWER: &str = "I don't know.";

/// A topic-scoped answerer over a shared retriever.
pub struct RagAgent {
    name: String,
    topic: Topic,
    retriever: Arc<dyn DocumentRetriever>,
    canned: Vec<(Regex, &'static str)>,
}

impl RagAgent {
    pub fn new(name: impl Into<String>, topic: Topic, retriever: Arc<dyn DocumentRetriever>) -> Result<Self> {
        let canned = topic
            .canned_answers()
            .iter()
            .map(|c| {
                RegexBuilder::new(c.pattern)
                    .case_insensitive(true)
                    .build()
                    .map(|re| (re, c.answer))
                    .map_err(|e| Error::InvalidConfig(format!("bad pattern for {topic}: {e}")))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { name: name.into(), topic, retriever, canned })
    }

    pub fn name(&self) -> &str { &self.name }

    pub fn topic(&self) -> Topic { self.topic }

    /// True when the lower-cased query contains any of the topic's keywords.
    pub fn can_handle(&self, query: &str) -> bool {
        let q = query.to_lowercase();
        self.topic.keywords().iter().any(|k| q.contains(k))
    }

    /// Canned answer, else the top retrieved document, else `UNKNOWN_ANSWER`.
    pub fn answer(&self, query: &str) -> Result<String> {
        if let Some((_, answer)) = self.canned.iter().find(|(re, _)| re.is_match(query)) {
            tracing::debug!(agent = %self.name, "canned answer");
            return Ok((*answer).to_string());
        }
        let docs = self.retriever.retrieve(query, 1)?;
        match docs.first() {
            Some(doc) => {
                tracing::debug!(agent = %self.name, source = %doc.source, "answering from retrieved document");
                Ok(doc.content.clone())
            }
            None => Ok(UNKNOWN_ANSWER.to_string()),
        }
    }
}

impl std::fmt::Debug for RagAgent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RagAgent").field("name", &self.name).field("topic", &self.topic).finish_non_exhaustive()
    }
}
