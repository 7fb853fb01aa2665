//! Pluggable string-similarity strategy for skill comparison.
//!
//! Default: normalized Levenshtein similarity above 0.7. A stemming- or
//! synonym-aware strategy can replace it without touching the scorers.

/// Default similarity threshold for `EditDistanceSimilarity`.
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.7;

pub trait SimilarityStrategy: Send + Sync {
    /// True when `a` and `b` name the same skill closely enough.
    fn is_similar(&self, a: &str, b: &str) -> bool;
}

/// Normalized edit-distance similarity (1.0 = identical), compared case-insensitively.
#[derive(Debug, Clone, Copy)]
pub struct EditDistanceSimilarity {
    pub threshold: f64,
}

impl Default for EditDistanceSimilarity {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_SIMILARITY_THRESHOLD,
        }
    }
}

impl EditDistanceSimilarity {
    pub fn score(a: &str, b: &str) -> f64 {
        strsim::normalized_levenshtein(&a.trim().to_lowercase(), &b.trim().to_lowercase())
    }
}

impl SimilarityStrategy for EditDistanceSimilarity {
    fn is_similar(&self, a: &str, b: &str) -> bool {
        if a.trim().is_empty() || b.trim().is_empty() {
            return false;
        }
        Self::score(a, b) > self.threshold
    }
}
