//! Topic agents and the two-way coordinator that routes between them.

pub mod agent;
pub mod coordinator;
pub mod topic;

use std::sync::Arc;

use topicdesk_core::error::Result;
use topicdesk_core::types::Document;
use topicdesk_text::TfidfRetriever;

pub use agent::{RagAgent, UNKNOWN_ANSWER};
pub use coordinator::Coordinator;
pub use topic::{CannedAnswer, Topic};

/// Knobs for `build_system`; defaults match the stock salary/insurance setup.
#[derive(Debug, Clone)]
pub struct SystemSettings {
    pub n_results: usize,
    pub topics: Option<[String; 2]>,
}

impl Default for SystemSettings {
    fn default() -> Self { Self { n_results: topicdesk_text::retriever::DEFAULT_N_RESULTS, topics: None } }
}

/// Fit one retriever over `documents` and put a salary and an insurance agent behind a coordinator.
pub fn build_system(documents: Vec<Document>, settings: &SystemSettings) -> Result<Coordinator> {
    let retriever = Arc::new(TfidfRetriever::from_documents(documents, settings.n_results)?);
    let salary = RagAgent::new("Salary Agent", Topic::Salary, retriever.clone())?;
    let insurance = RagAgent::new("Insurance Agent", Topic::Insurance, retriever)?;
    match &settings.topics {
        Some(topics) => Coordinator::new(salary, insurance, topics.clone()),
        None => Coordinator::with_default_topics(salary, insurance),
    }
}
