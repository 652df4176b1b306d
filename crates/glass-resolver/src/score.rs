//! Tiered similarity scoring.
//!
//! Scores live in [0, 1]. Tiers are tried in priority order and the first
//! applicable rule wins: exact equality (1.0), substring containment
//! (scaled into `[substring_floor, 1.0)`), then edit distance. Substring
//! containment outranks raw edit distance so a short partial query such as
//! `"tab"` resolves against `"TabsGlass"` instead of being penalized for
//! every character it did not type.

use crate::distance::levenshtein;
use crate::normalize::{normalize_component_name, normalize_query};

/// Tunable thresholds for scoring and match selection.
#[derive(Debug, Clone, Copy)]
pub struct ResolverConfig {
    /// Minimum score for a candidate to appear in ranked results at all.
    pub min_score: f64,
    /// Minimum score for unattended resolution; below this the caller is
    /// expected to present a disambiguation list instead.
    pub confident_score: f64,
    /// Lower bound of the substring tier. Containment scores scale from
    /// here up towards (but never reaching) 1.0 as the query covers more
    /// of the candidate.
    pub substring_floor: f64,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            min_score: 0.3,
            confident_score: 0.8,
            substring_floor: 0.7,
        }
    }
}

impl ResolverConfig {
    #[must_use]
    pub fn with_min_score(mut self, score: f64) -> Self {
        self.min_score = score;
        self
    }

    #[must_use]
    pub fn with_confident_score(mut self, score: f64) -> Self {
        self.confident_score = score;
        self
    }

    #[must_use]
    pub fn with_substring_floor(mut self, floor: f64) -> Self {
        self.substring_floor = floor;
        self
    }
}

/// Score a raw query against a raw candidate name.
///
/// Both sides are normalized before comparison, so
/// `match_score("button-glass", "ButtonGlass", ..)` is an exact match.
/// Either side normalizing to empty scores 0.0.
pub fn match_score(query: &str, candidate: &str, config: &ResolverConfig) -> f64 {
    score_normalized(
        &normalize_query(query),
        &normalize_component_name(candidate),
        config,
    )
}

/// Score pre-normalized strings. Hot path for ranking, where the query is
/// normalized once and compared against every catalog representation.
pub(crate) fn score_normalized(query: &str, candidate: &str, config: &ResolverConfig) -> f64 {
    if query.is_empty() || candidate.is_empty() {
        return 0.0;
    }
    if query == candidate {
        return 1.0;
    }
    let query_len = query.chars().count();
    let candidate_len = candidate.chars().count();
    if candidate.contains(query) {
        let coverage = query_len as f64 / candidate_len as f64;
        return config.substring_floor + (1.0 - config.substring_floor) * coverage;
    }
    let distance = levenshtein(query, candidate);
    let longest = query_len.max(candidate_len);
    (1.0 - distance as f64 / longest as f64).max(0.0)
}
