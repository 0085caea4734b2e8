use topicdesk_core::error::{Error, Result};
use topicdesk_text::{cosine_similarity, SparseVector, TfidfVectorizer};

use crate::agent::RagAgent;

/// Routes each query to one of two agents.
///
/// Routing scores the query against one description per agent in a vector
/// space fitted only over those descriptions. The first agent wins ties. If
/// the winner's keyword gate rejects the query the other agent takes it; there
/// is no second swap, so an answer is always produced.
#[derive(Debug)]
pub struct Coordinator {
    agents: [RagAgent; 2],
    descriptions: [String; 2],
    vectorizer: TfidfVectorizer,
    topic_vectors: Vec<SparseVector>,
}

impl Coordinator {
    pub fn new(first: RagAgent, second: RagAgent, descriptions: [String; 2]) -> Result<Self> {
        if descriptions.iter().any(|d| d.trim().is_empty()) {
            return Err(Error::InvalidConfig("topic descriptions must not be empty".into()));
        }
        let mut vectorizer = TfidfVectorizer::new();
        let topic_vectors = vectorizer.fit_transform(&descriptions);
        Ok(Self { agents: [first, second], descriptions, vectorizer, topic_vectors })
    }

    /// Builds with each agent's default topic description.
    pub fn with_default_topics(first: RagAgent, second: RagAgent) -> Result<Self> {
        let descriptions = [first.topic().default_description().to_string(), second.topic().default_description().to_string()];
        Self::new(first, second, descriptions)
    }

    pub fn agents(&self) -> &[RagAgent; 2] { &self.agents }

    pub fn descriptions(&self) -> &[String; 2] { &self.descriptions }

    /// Cosine similarity of `query` against each topic description, in agent order.
    pub fn topic_scores(&self, query: &str) -> [f32; 2] {
        let q = self.vectorizer.transform(query);
        [cosine_similarity(&q, &self.topic_vectors[0]), cosine_similarity(&q, &self.topic_vectors[1])]
    }

    pub fn route(&self, query: &str) -> &RagAgent {
        let scores = self.topic_scores(query);
        let chosen = if scores[0] >= scores[1] { 0 } else { 1 };
        let picked = if self.agents[chosen].can_handle(query) { chosen } else { 1 - chosen };
        tracing::debug!(?scores, chosen = %self.agents[chosen].name(), routed = %self.agents[picked].name(), "routed query");
        &self.agents[picked]
    }

    pub fn ask(&self, query: &str) -> Result<String> {
        self.route(query).answer(query)
    }
}
