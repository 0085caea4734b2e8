use crate::error::Result;
use crate::types::{Document, SearchHit};

/// A fitted ranking over an ordered corpus.
///
/// `fit` replaces the corpus and rebuilds every vector; `rank` and `retrieve`
/// fail with `Error::NotFitted` until it has run once. A `k` of zero is
/// rejected with `Error::InvalidArgument` before the fitted state is checked.
pub trait DocumentRetriever: Send + Sync {
    fn fit(&mut self, documents: Vec<Document>) -> Result<()>;
    fn rank(&self, query: &str, k: usize) -> Result<Vec<SearchHit>>;
    fn documents(&self) -> Result<&[Document]>;

    fn retrieve(&self, query: &str, k: usize) -> Result<Vec<&Document>> {
        let docs = self.documents()?;
        Ok(self.rank(query, k)?.into_iter().map(|h| &docs[h.position]).collect())
    }
}
