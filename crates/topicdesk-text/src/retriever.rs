use topicdesk_core::error::{Error, Result};
use topicdesk_core::traits::DocumentRetriever;
use topicdesk_core::types::{Document, SearchHit};

use crate::tfidf::{cosine_similarity, SparseVector, TfidfVectorizer};

pub const DEFAULT_N_RESULTS: usize = 4;

/// Fitted corpus: documents and their vectors, row `i` belongs to document `i`.
#[derive(Debug)]
struct FittedCorpus {
	documents: Vec<Document>,
	vectors: Vec<SparseVector>,
}

/// Ranks an in-memory corpus by TF-IDF cosine similarity.
#[derive(Debug)]
pub struct TfidfRetriever {
	vectorizer: TfidfVectorizer,
	fitted: Option<FittedCorpus>,
	n_results: usize,
}

impl Default for TfidfRetriever {
	fn default() -> Self { Self { vectorizer: TfidfVectorizer::new(), fitted: None, n_results: DEFAULT_N_RESULTS } }
}

impl TfidfRetriever {
	pub fn new(n_results: usize) -> Result<Self> {
		if n_results == 0 { return Err(Error::InvalidArgument("n_results must be at least 1".into())); }
		Ok(Self { n_results, ..Self::default() })
	}

	/// Build and fit in one step.
	pub fn from_documents(documents: Vec<Document>, n_results: usize) -> Result<Self> {
		let mut retriever = Self::new(n_results)?;
		retriever.fit(documents)?;
		Ok(retriever)
	}

	pub fn n_results(&self) -> usize { self.n_results }

	pub fn is_fitted(&self) -> bool { self.fitted.is_some() }

	/// Top `n_results` documents for `query`.
	pub fn get_relevant_documents(&self, query: &str) -> Result<Vec<&Document>> {
		self.retrieve(query, self.n_results)
	}

	fn fitted(&self) -> Result<&FittedCorpus> { self.fitted.as_ref().ok_or(Error::NotFitted) }
}

impl DocumentRetriever for TfidfRetriever {
	fn fit(&mut self, documents: Vec<Document>) -> Result<()> {
		let texts: Vec<&str> = documents.iter().map(|d| d.content.as_str()).collect();
		let vectors = self.vectorizer.fit_transform(&texts);
		tracing::debug!(documents = documents.len(), vocabulary = self.vectorizer.vocabulary_len(), "retriever fitted");
		self.fitted = Some(FittedCorpus { documents, vectors });
		Ok(())
	}

	fn rank(&self, query: &str, k: usize) -> Result<Vec<SearchHit>> {
		if k == 0 { return Err(Error::InvalidArgument("k must be at least 1".into())); }
		let fitted = self.fitted()?;
		let q = self.vectorizer.transform(query);
		let mut scored: Vec<(usize, f32)> = fitted.vectors.iter().enumerate().map(|(i, v)| (i, cosine_similarity(&q, v))).collect();
		// sort_by is stable: equal scores keep corpus order
		scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
		scored.truncate(k);
		Ok(scored
			.into_iter()
			.map(|(position, score)| SearchHit { position, source: fitted.documents[position].source.clone(), score })
			.collect())
	}

	fn documents(&self) -> Result<&[Document]> { Ok(&self.fitted()?.documents) }
}
