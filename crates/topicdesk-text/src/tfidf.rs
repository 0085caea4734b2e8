//! Smoothed TF-IDF weighting with L2-normalized sparse rows.
//!
//! `idf(t) = ln((1 + n) / (1 + df(t))) + 1`, term frequency is the raw count.
//! Terms outside the fitted vocabulary are ignored at transform time.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::analyzer::Analyzer;

/// Sparse vector as `(column, weight)` pairs sorted by column.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    entries: Vec<(usize, f32)>,
}

impl SparseVector {
    pub fn entries(&self) -> &[(usize, f32)] { &self.entries }

    pub fn is_zero(&self) -> bool { self.entries.is_empty() }

    pub fn norm(&self) -> f32 {
        self.entries.iter().map(|(_, w)| w * w).sum::<f32>().sqrt()
    }

    pub fn dot(&self, other: &SparseVector) -> f32 {
        let (mut i, mut j, mut sum) = (0, 0, 0.0f32);
        while i < self.entries.len() && j < other.entries.len() {
            let (ci, wi) = self.entries[i];
            let (cj, wj) = other.entries[j];
            match ci.cmp(&cj) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => { sum += wi * wj; i += 1; j += 1; }
            }
        }
        sum
    }

    fn l2_normalized(mut self) -> Self {
        let norm = self.norm();
        if norm > 0.0 { for (_, w) in &mut self.entries { *w /= norm; } }
        self
    }
}

/// Cosine of the angle between `a` and `b`; 0 when either is the zero vector.
pub fn cosine_similarity(a: &SparseVector, b: &SparseVector) -> f32 {
    let denom = a.norm() * b.norm();
    if denom == 0.0 { return 0.0; }
    (a.dot(b) / denom).clamp(0.0, 1.0)
}

#[derive(Debug, Clone, Default)]
pub struct TfidfVectorizer {
    analyzer: Analyzer,
    vocabulary: HashMap<String, usize>,
    idf: Vec<f32>,
}

impl TfidfVectorizer {
    pub fn new() -> Self { Self::default() }

    pub fn vocabulary_len(&self) -> usize { self.vocabulary.len() }

    pub fn fit<S: AsRef<str>>(&mut self, texts: &[S]) {
        let analyzed: Vec<Vec<String>> = texts.iter().map(|t| self.analyzer.tokenize(t.as_ref())).collect();
        let mut document_frequency: BTreeMap<&str, usize> = BTreeMap::new();
        for tokens in &analyzed {
            let unique: BTreeSet<&str> = tokens.iter().map(String::as_str).collect();
            for term in unique { *document_frequency.entry(term).or_insert(0) += 1; }
        }
        let n = texts.len() as f32;
        // BTreeMap iteration gives alphabetical column order.
        self.vocabulary = document_frequency.keys().enumerate().map(|(col, term)| ((*term).to_string(), col)).collect();
        self.idf = document_frequency.values().map(|&df| ((1.0 + n) / (1.0 + df as f32)).ln() + 1.0).collect();
        tracing::debug!(documents = texts.len(), vocabulary = self.vocabulary.len(), "fitted tf-idf vocabulary");
    }

    pub fn transform(&self, text: &str) -> SparseVector {
        let mut counts: BTreeMap<usize, f32> = BTreeMap::new();
        for token in self.analyzer.tokenize(text) {
            if let Some(&col) = self.vocabulary.get(&token) { *counts.entry(col).or_insert(0.0) += 1.0; }
        }
        let entries = counts.into_iter().map(|(col, tf)| (col, tf * self.idf[col])).collect();
        SparseVector { entries }.l2_normalized()
    }

    pub fn fit_transform<S: AsRef<str>>(&mut self, texts: &[S]) -> Vec<SparseVector> {
        self.fit(texts);
        texts.iter().map(|t| self.transform(t.as_ref())).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idf_favours_rare_terms() {
        let mut v = TfidfVectorizer::new();
        let rows = v.fit_transform(&["salary payroll", "salary insurance"]);
        assert_eq!(v.vocabulary_len(), 3);
        // "salary" appears in both rows, so the rarer term carries more weight
        let row = rows[0].entries();
        let salary = row.iter().find(|(c, _)| *c == v.vocabulary["salary"]).map(|e| e.1).unwrap();
        let payroll = row.iter().find(|(c, _)| *c == v.vocabulary["payroll"]).map(|e| e.1).unwrap();
        assert!(payroll > salary);
        assert!((rows[0].norm() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn unknown_terms_give_zero_vector() {
        let mut v = TfidfVectorizer::new();
        v.fit(&["insurance policy coverage"]);
        let q = v.transform("weather today");
        assert!(q.is_zero());
        assert_eq!(cosine_similarity(&q, &v.transform("insurance")), 0.0);
    }

    #[test]
    fn cosine_of_identical_text_is_one() {
        let mut v = TfidfVectorizer::new();
        v.fit(&["monthly salary deductions", "doctor fees"]);
        let a = v.transform("monthly salary deductions");
        assert!((cosine_similarity(&a, &a) - 1.0).abs() < 1e-5);
    }
}
