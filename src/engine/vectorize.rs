// TF-IDF vectorization: vocabulary learning and term weighting.
//
// Two stages, fit then transform. `fit` learns the vocabulary and document
// frequencies from a corpus; `transform` weights a document's term counts by
// inverse document frequency. Fitting queries and catalog texts together
// puts both sides in one shared vector space, which is what makes their
// cosine scores comparable at all.
//
// IDF uses the smoothed form ln((1 + N) / (1 + df)) + 1, so a term present
// in every document still carries a small positive weight instead of
// vanishing from the space.

use std::collections::{BTreeMap, HashMap, HashSet};

use anyhow::Result;
use stop_words::{get, LANGUAGE};

/// Sparse TF-IDF document vector, keyed by vocabulary index.
///
/// A BTreeMap rather than a HashMap: iteration order is fixed, so float
/// summations downstream are bit-for-bit reproducible across runs.
pub type TermVector = BTreeMap<usize, f64>;

/// Split text into lowercase tokens.
///
/// A token is a run of alphanumeric characters (underscores count) at least
/// two characters long. Punctuation and single letters are dropped.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric() && c != '_')
        .filter(|t| t.chars().count() >= 2)
        .map(str::to_string)
        .collect()
}

/// TF-IDF vectorizer with stop-word filtering.
pub struct TfidfVectorizer {
    stop_words: HashSet<String>,
    /// Term to vocabulary index, assigned in first-seen corpus order
    vocabulary: HashMap<String, usize>,
    /// Inverse document frequency per vocabulary index
    idf: Vec<f64>,
}

impl TfidfVectorizer {
    /// Build a vectorizer with the standard English stop word list.
    pub fn english() -> Self {
        let stop_words: Vec<String> = get(LANGUAGE::English);
        Self {
            stop_words: stop_words.into_iter().collect(),
            vocabulary: HashMap::new(),
            idf: Vec::new(),
        }
    }

    /// Learn the vocabulary and document frequencies from a corpus.
    ///
    /// Refitting replaces any previously learned state.
    pub fn fit(&mut self, corpus: &[String]) -> Result<()> {
        if corpus.is_empty() {
            anyhow::bail!("Cannot fit a vocabulary on an empty corpus");
        }

        // Built from scratch so a refit cannot inherit stale indices
        let mut vocabulary: HashMap<String, usize> = HashMap::new();
        let mut doc_freq: Vec<u32> = Vec::new();
        for doc in corpus {
            let mut seen_in_doc = HashSet::new();
            for token in self.filtered_tokens(doc) {
                let next_index = vocabulary.len();
                let index = *vocabulary.entry(token).or_insert(next_index);
                if index == doc_freq.len() {
                    doc_freq.push(0);
                }
                if seen_in_doc.insert(index) {
                    doc_freq[index] += 1;
                }
            }
        }

        let n_docs = corpus.len() as f64;
        self.idf = doc_freq
            .iter()
            .map(|&df| ((1.0 + n_docs) / (1.0 + df as f64)).ln() + 1.0)
            .collect();
        self.vocabulary = vocabulary;

        Ok(())
    }

    /// Weight one document against the fitted vocabulary.
    ///
    /// TF is the raw in-document count. Terms outside the vocabulary are
    /// ignored, so transforming unseen text never panics.
    pub fn transform(&self, text: &str) -> TermVector {
        let mut vector = TermVector::new();
        for token in self.filtered_tokens(text) {
            if let Some(&index) = self.vocabulary.get(&token) {
                *vector.entry(index).or_insert(0.0) += 1.0;
            }
        }
        for (index, weight) in vector.iter_mut() {
            *weight *= self.idf[*index];
        }
        vector
    }

    /// Fit on the corpus, then transform every document in it.
    pub fn fit_transform(&mut self, corpus: &[String]) -> Result<Vec<TermVector>> {
        self.fit(corpus)?;
        Ok(corpus.iter().map(|doc| self.transform(doc)).collect())
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    fn filtered_tokens(&self, text: &str) -> Vec<String> {
        tokenize(text)
            .into_iter()
            .filter(|t| !self.stop_words.contains(t))
            .collect()
    }
}
