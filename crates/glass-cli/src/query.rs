//! Command logic over an injected catalog.
//!
//! Kept free of I/O and argument parsing so integration tests can drive it
//! with synthetic catalogs; the binary loads the registry and renders the
//! returned values.

use serde::Serialize;
use tracing::{debug, info};

use glass_model::{ComponentEntry, ComponentMatch};
use glass_resolver::{ResolverConfig, find_best_match, fuzzy_match};

/// Result of resolving an `info` query against the catalog.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "outcome", rename_all = "lowercase")]
pub enum InfoOutcome {
    /// The query resolved to a single component with high confidence.
    Resolved {
        component: ComponentEntry,
        matched: ComponentMatch,
    },
    /// No confident match; `suggestions` holds the ranked alternatives
    /// (possibly empty, when nothing in the catalog comes close).
    Suggestions { suggestions: Vec<ComponentMatch> },
}

impl InfoOutcome {
    pub fn is_resolved(&self) -> bool {
        matches!(self, InfoOutcome::Resolved { .. })
    }
}

/// Components to show for `list`, optionally filtered by category.
pub fn list_components(catalog: &[ComponentEntry], category: Option<&str>) -> Vec<ComponentEntry> {
    let components: Vec<ComponentEntry> = match category {
        Some(category) => catalog
            .iter()
            .filter(|entry| entry.in_category(category))
            .cloned()
            .collect(),
        None => catalog.to_vec(),
    };
    debug!(
        total = catalog.len(),
        listed = components.len(),
        "listed components"
    );
    components
}

/// Resolve an `info` query: auto-resolve on a confident match, otherwise
/// fall back to the ranked suggestion list.
pub fn resolve_info(
    catalog: &[ComponentEntry],
    query: &str,
    config: &ResolverConfig,
) -> InfoOutcome {
    if let Some(matched) = find_best_match(query, catalog, config)
        && let Some(component) = catalog.iter().find(|entry| entry.name == matched.name)
    {
        info!(
            query,
            component = %matched.name,
            kind = %matched.kind,
            score = matched.score,
            "resolved component"
        );
        return InfoOutcome::Resolved {
            component: component.clone(),
            matched,
        };
    }
    let suggestions = fuzzy_match(query, catalog, config);
    info!(
        query,
        suggestion_count = suggestions.len(),
        "no confident match"
    );
    InfoOutcome::Suggestions { suggestions }
}

/// Ranked matches for `search`, truncated to `limit` when given.
pub fn search_components(
    catalog: &[ComponentEntry],
    query: &str,
    limit: Option<usize>,
    config: &ResolverConfig,
) -> Vec<ComponentMatch> {
    let mut matches = fuzzy_match(query, catalog, config);
    if let Some(limit) = limit {
        matches.truncate(limit);
    }
    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<ComponentEntry> {
        vec![
            ComponentEntry::new("ButtonGlass", "buttons").with_aliases(["btn"]),
            ComponentEntry::new("AlertGlass", "alerts").with_aliases(["toast"]),
            ComponentEntry::new("CardGlass", "cards"),
        ]
    }

    #[test]
    fn list_without_filter_returns_catalog_order() {
        let listed = list_components(&catalog(), None);
        let names: Vec<&str> = listed.iter().map(|entry| entry.name.as_str()).collect();
        assert_eq!(names, vec!["ButtonGlass", "AlertGlass", "CardGlass"]);
    }

    #[test]
    fn list_filters_by_category_case_insensitively() {
        let listed = list_components(&catalog(), Some("ALERTS"));
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].name, "AlertGlass");
    }

    #[test]
    fn info_resolves_confident_query() {
        let outcome = resolve_info(&catalog(), "button-glass", &ResolverConfig::default());
        match outcome {
            InfoOutcome::Resolved { component, matched } => {
                assert_eq!(component.name, "ButtonGlass");
                assert_eq!(matched.score, 1.0);
            }
            InfoOutcome::Suggestions { .. } => panic!("expected resolution"),
        }
    }

    #[test]
    fn info_falls_back_to_suggestions() {
        // "crd" is close to CardGlass but below the confident threshold.
        let outcome = resolve_info(&catalog(), "crd", &ResolverConfig::default());
        match outcome {
            InfoOutcome::Suggestions { suggestions } => {
                assert!(!suggestions.is_empty());
                assert_eq!(suggestions[0].name, "CardGlass");
            }
            InfoOutcome::Resolved { .. } => panic!("expected suggestions"),
        }
    }

    #[test]
    fn search_respects_limit() {
        let matches = search_components(&catalog(), "glass", Some(1), &ResolverConfig::default());
        assert!(matches.len() <= 1);
    }
}
