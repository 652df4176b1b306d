use std::fmt;

use serde::{Deserialize, Serialize};

/// How a query matched a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    /// Normalized equality with the canonical component name.
    Exact,
    /// Normalized equality with one of the entry's aliases.
    Alias,
    /// Substring or edit-distance scored.
    Fuzzy,
}

impl MatchKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchKind::Exact => "exact",
            MatchKind::Alias => "alias",
            MatchKind::Fuzzy => "fuzzy",
        }
    }
}

impl fmt::Display for MatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Qualitative confidence bucket attached to a match for downstream UX
/// decisions (auto-resolve vs. disambiguation prompt).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceTier {
    Low,
    Medium,
    High,
}

impl ConfidenceTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfidenceTier::High => "high",
            ConfidenceTier::Medium => "medium",
            ConfidenceTier::Low => "low",
        }
    }
}

impl fmt::Display for ConfidenceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A scored resolution result. Constructed per query, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentMatch {
    /// The matched canonical component name.
    pub name: String,
    /// Similarity score in [0, 1]; exact and alias matches score 1.0.
    pub score: f64,
    pub kind: MatchKind,
    pub tier: ConfidenceTier,
}
