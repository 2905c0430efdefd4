// Cosine similarity over sparse TF-IDF vectors.
//
//   similarity = dot(a, b) / (|a| * |b|)
//
// A zero vector (a query made entirely of stop words, say) gets a similarity
// of 0.0 rather than NaN, so it ranks last without poisoning the sort.

use std::cmp::Ordering;

use super::vectorize::TermVector;

/// Cosine similarity between two sparse vectors, in [0.0, 1.0].
pub fn cosine_similarity(a: &TermVector, b: &TermVector) -> f64 {
    // Only indices present in both vectors contribute to the dot product,
    // so walk the smaller one and probe the larger.
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };

    let mut dot = 0.0;
    for (index, weight) in small {
        if let Some(other) = large.get(index) {
            dot += weight * other;
        }
    }

    let norm_a = norm(a);
    let norm_b = norm(b);
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    // Clamp: rounding can push a perfect match a hair above 1.0
    (dot / (norm_a * norm_b)).clamp(0.0, 1.0)
}

fn norm(vector: &TermVector) -> f64 {
    vector.values().map(|w| w * w).sum::<f64>().sqrt()
}

/// Compute the full query-by-catalog similarity matrix.
///
/// Row i holds query i's score against every catalog entry, in catalog order.
pub fn similarity_matrix(queries: &[TermVector], catalog: &[TermVector]) -> Vec<Vec<f64>> {
    queries
        .iter()
        .map(|q| catalog.iter().map(|c| cosine_similarity(q, c)).collect())
        .collect()
}

/// Indices of the `k` highest scores, best first.
///
/// Equal scores break by ascending index, so two identical catalog entries
/// always come back in catalog order.
pub fn top_k(scores: &[f64], k: usize) -> Vec<usize> {
    let mut indexed: Vec<(usize, f64)> = scores.iter().copied().enumerate().collect();
    indexed.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(Ordering::Equal)
            .then(a.0.cmp(&b.0))
    });
    indexed.truncate(k);
    indexed.into_iter().map(|(index, _)| index).collect()
}
