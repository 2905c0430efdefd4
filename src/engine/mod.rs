// Similarity engine: scores the catalog against enrolled course names.
//
// The corpus is the query names followed by the catalog's combined texts,
// fitted together so both sides share one vector space. Rows [0, Q) are the
// query vectors and rows [Q, Q+C) the catalog vectors; the partition point
// is always queries.len().

pub mod similarity;
pub mod vectorize;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::catalog::CatalogEntry;
use similarity::{similarity_matrix, top_k};
use vectorize::TfidfVectorizer;

/// How many recommendations to keep per query unless configured otherwise.
pub const DEFAULT_TOP_K: usize = 5;

/// A single recommended course with its catalog metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    /// 1-based position within the query's list
    pub rank: usize,
    pub course_name: String,
    pub university: String,
    pub difficulty: String,
    pub rating: f64,
    pub skills: String,
    pub url: String,
    /// Cosine similarity against the query (0.0 to 1.0)
    pub score: f64,
}

/// Recommendations for one enrolled course, best first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryRecommendations {
    pub query: String,
    pub recommendations: Vec<Recommendation>,
}

/// The full result of one run: one entry per query, in query order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationSet {
    pub queries: Vec<QueryRecommendations>,
}

impl RecommendationSet {
    pub fn is_empty(&self) -> bool {
        self.queries.is_empty()
    }

    /// Total recommendations across all queries.
    pub fn total_recommendations(&self) -> usize {
        self.queries.iter().map(|q| q.recommendations.len()).sum()
    }
}

/// Score every query against the whole catalog and keep the best `limit`.
///
/// An empty catalog is an error: there is nothing to recommend from. An
/// empty query list is not: it yields an empty set, the caller decides what
/// to tell the user.
pub fn recommend(
    queries: &[String],
    catalog: &[CatalogEntry],
    limit: usize,
) -> Result<RecommendationSet> {
    if catalog.is_empty() {
        anyhow::bail!("Catalog has no rows, nothing to recommend from");
    }

    if queries.is_empty() {
        return Ok(RecommendationSet {
            queries: Vec::new(),
        });
    }

    // Queries first, catalog after
    let mut corpus: Vec<String> = queries.to_vec();
    corpus.extend(catalog.iter().map(CatalogEntry::combined_text));

    let mut vectorizer = TfidfVectorizer::english();
    let vectors = vectorizer.fit_transform(&corpus)?;
    let (query_vectors, catalog_vectors) = vectors.split_at(queries.len());

    for (query, vector) in queries.iter().zip(query_vectors) {
        if vector.is_empty() {
            // Stop-word-only or unmatched text: it scores 0.0 against
            // everything but still gets a (useless) recommendation block
            debug!(query = %query, "Query has no usable terms");
        }
    }

    info!(
        queries = queries.len(),
        catalog = catalog.len(),
        vocabulary = vectorizer.vocabulary_size(),
        "Scoring catalog"
    );

    let matrix = similarity_matrix(query_vectors, catalog_vectors);

    let per_query = queries
        .iter()
        .zip(&matrix)
        .map(|(query, scores)| {
            let recommendations = top_k(scores, limit)
                .into_iter()
                .enumerate()
                .map(|(position, index)| {
                    let entry = &catalog[index];
                    Recommendation {
                        rank: position + 1,
                        course_name: entry.name.clone(),
                        university: entry.university.clone(),
                        difficulty: entry.difficulty.clone(),
                        rating: entry.rating,
                        skills: entry.skills.clone(),
                        url: entry.url.clone(),
                        score: scores[index],
                    }
                })
                .collect();
            QueryRecommendations {
                query: query.clone(),
                recommendations,
            }
        })
        .collect();

    Ok(RecommendationSet { queries: per_query })
}
