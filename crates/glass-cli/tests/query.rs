//! Integration tests for the command logic over synthetic catalogs.

use glass_cli::query::{InfoOutcome, list_components, resolve_info, search_components};
use glass_model::{ComponentEntry, MatchKind};
use glass_resolver::ResolverConfig;

fn catalog() -> Vec<ComponentEntry> {
    vec![
        ComponentEntry::new("ButtonGlass", "buttons")
            .with_description("Frosted-glass action button")
            .with_aliases(["btn", "button"]),
        ComponentEntry::new("IconButtonGlass", "buttons").with_aliases(["icon-btn"]),
        ComponentEntry::new("AlertGlass", "alerts").with_aliases(["toast"]),
        ComponentEntry::new("CardGlass", "cards"),
        ComponentEntry::new("ModalGlass", "overlay").with_aliases(["dialog"]),
    ]
}

#[test]
fn list_preserves_catalog_order_and_contents() {
    let listed = list_components(&catalog(), None);
    assert_eq!(listed.len(), 5);
    assert_eq!(listed[0].name, "ButtonGlass");
    assert_eq!(listed[4].name, "ModalGlass");
}

#[test]
fn list_category_filter_narrows_results() {
    let listed = list_components(&catalog(), Some("buttons"));
    let names: Vec<&str> = listed.iter().map(|entry| entry.name.as_str()).collect();
    assert_eq!(names, vec!["ButtonGlass", "IconButtonGlass"]);
}

#[test]
fn list_unknown_category_is_empty_not_an_error() {
    assert!(list_components(&catalog(), Some("nonexistent")).is_empty());
}

#[test]
fn info_auto_resolves_alias_queries() {
    let outcome = resolve_info(&catalog(), "dialog", &ResolverConfig::default());
    match outcome {
        InfoOutcome::Resolved { component, matched } => {
            assert_eq!(component.name, "ModalGlass");
            assert_eq!(matched.kind, MatchKind::Alias);
        }
        InfoOutcome::Suggestions { .. } => panic!("expected resolution"),
    }
}

#[test]
fn info_suggests_on_garbled_queries() {
    // Transposed "alert" scores 0.6: suggestible, not confident.
    let outcome = resolve_info(&catalog(), "alret", &ResolverConfig::default());
    match outcome {
        InfoOutcome::Suggestions { suggestions } => {
            assert!(suggestions.iter().any(|m| m.name == "AlertGlass"));
        }
        InfoOutcome::Resolved { component, .. } => {
            panic!("unexpected resolution to {}", component.name)
        }
    }
}

#[test]
fn info_reports_empty_suggestions_for_hopeless_queries() {
    let outcome = resolve_info(&catalog(), "zzzzzzzzzz", &ResolverConfig::default());
    match outcome {
        InfoOutcome::Suggestions { suggestions } => assert!(suggestions.is_empty()),
        InfoOutcome::Resolved { .. } => panic!("expected suggestions"),
    }
}

#[test]
fn info_outcome_serializes_for_json_output() {
    let outcome = resolve_info(&catalog(), "button", &ResolverConfig::default());
    let json = serde_json::to_string(&outcome).expect("serialize outcome");
    assert!(json.contains(r#""outcome":"resolved""#));
    assert!(json.contains(r#""name":"ButtonGlass""#));
}

#[test]
fn search_ranks_and_limits() {
    let all = search_components(&catalog(), "button", None, &ResolverConfig::default());
    assert!(all.len() >= 2);
    assert_eq!(all[0].name, "ButtonGlass");

    let limited = search_components(&catalog(), "button", Some(1), &ResolverConfig::default());
    assert_eq!(limited.len(), 1);
    assert_eq!(limited[0].name, "ButtonGlass");
}

#[test]
fn search_empty_query_returns_nothing() {
    assert!(search_components(&catalog(), "", None, &ResolverConfig::default()).is_empty());
}
