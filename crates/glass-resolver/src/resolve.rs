//! Ranked matching against the component catalog.

use tracing::debug;

use glass_model::{ComponentEntry, ComponentMatch, ConfidenceTier, MatchKind};

use crate::normalize::{normalize_component_name, normalize_query};
use crate::score::{ResolverConfig, score_normalized};

/// Rank every catalog entry against the query.
///
/// Each entry is scored on its canonical name and every alias; the
/// best-scoring representation wins, with the canonical name preferred on
/// ties. Candidates below `config.min_score` are dropped. The result is
/// ordered by descending score; equal scores keep catalog order. An empty
/// (or separator-only) query yields an empty result.
pub fn fuzzy_match(
    query: &str,
    entries: &[ComponentEntry],
    config: &ResolverConfig,
) -> Vec<ComponentMatch> {
    let normalized = normalize_query(query);
    if normalized.is_empty() {
        return Vec::new();
    }

    let mut matches = Vec::new();
    for entry in entries {
        let Some((score, kind)) = best_representation(&normalized, entry, config) else {
            continue;
        };
        if score < config.min_score {
            continue;
        }
        matches.push(ComponentMatch {
            name: entry.name.clone(),
            score,
            kind,
            tier: tier_for(kind, score, config),
        });
    }
    // Stable sort keeps catalog order for equal scores.
    matches.sort_by(|a, b| b.score.total_cmp(&a.score));
    debug!(
        query,
        candidate_count = entries.len(),
        match_count = matches.len(),
        "fuzzy match complete"
    );
    matches
}

/// Resolve a query to a single component when the evidence is strong.
///
/// Returns the top-ranked match only if it clears `config.confident_score`;
/// callers fall back to the full [`fuzzy_match`] ranking otherwise.
pub fn find_best_match(
    query: &str,
    entries: &[ComponentEntry],
    config: &ResolverConfig,
) -> Option<ComponentMatch> {
    fuzzy_match(query, entries, config)
        .into_iter()
        .next()
        .filter(|best| best.score >= config.confident_score)
}

/// Returns true if the query produces at least one ranked match.
pub fn has_match(query: &str, entries: &[ComponentEntry], config: &ResolverConfig) -> bool {
    !fuzzy_match(query, entries, config).is_empty()
}

/// Score the canonical name and every alias, keeping the best.
///
/// The canonical name is scored first and only strictly better alias scores
/// replace it. Kind reflects how the winning representation matched:
/// normalized equality with the canonical name is `Exact`, with an alias is
/// `Alias`, anything else is `Fuzzy`.
fn best_representation(
    normalized_query: &str,
    entry: &ComponentEntry,
    config: &ResolverConfig,
) -> Option<(f64, MatchKind)> {
    let canonical = normalize_component_name(&entry.name);
    let mut best_score = score_normalized(normalized_query, &canonical, config);
    let mut kind = if normalized_query == canonical {
        MatchKind::Exact
    } else {
        MatchKind::Fuzzy
    };

    for alias in &entry.aliases {
        let alias_normalized = normalize_component_name(alias);
        let alias_score = score_normalized(normalized_query, &alias_normalized, config);
        if alias_score > best_score {
            best_score = alias_score;
            kind = if normalized_query == alias_normalized {
                MatchKind::Alias
            } else {
                MatchKind::Fuzzy
            };
        }
    }

    (best_score > 0.0).then_some((best_score, kind))
}

fn tier_for(kind: MatchKind, score: f64, config: &ResolverConfig) -> ConfidenceTier {
    match kind {
        MatchKind::Exact | MatchKind::Alias => ConfidenceTier::High,
        MatchKind::Fuzzy if score >= config.confident_score => ConfidenceTier::Medium,
        MatchKind::Fuzzy => ConfidenceTier::Low,
    }
}
