//! Property tests for the resolver's algebraic guarantees.

use proptest::prelude::*;

use glass_model::ComponentEntry;
use glass_resolver::{
    ResolverConfig, fuzzy_match, has_match, levenshtein, match_score, normalize_query,
};

fn token() -> impl Strategy<Value = String> {
    "[a-z0-9]{0,12}"
}

fn raw_input() -> impl Strategy<Value = String> {
    "[ -~]{0,16}"
}

fn sample_catalog() -> Vec<ComponentEntry> {
    vec![
        ComponentEntry::new("ButtonGlass", "buttons").with_aliases(["btn", "button"]),
        ComponentEntry::new("AlertGlass", "alerts").with_aliases(["notification"]),
        ComponentEntry::new("TabsGlass", "navigation"),
        ComponentEntry::new("CardGlass", "cards"),
        ComponentEntry::new("AvatarGlass", "display"),
    ]
}

proptest! {
    #[test]
    fn distance_to_self_is_zero(a in token()) {
        prop_assert_eq!(levenshtein(&a, &a), 0);
    }

    #[test]
    fn distance_is_symmetric(a in token(), b in token()) {
        prop_assert_eq!(levenshtein(&a, &b), levenshtein(&b, &a));
    }

    #[test]
    fn distance_satisfies_triangle_inequality(a in token(), b in token(), c in token()) {
        let direct = levenshtein(&a, &c);
        let via = levenshtein(&a, &b) + levenshtein(&b, &c);
        prop_assert!(direct <= via);
    }

    #[test]
    fn distance_is_bounded_by_longer_input(a in token(), b in token()) {
        let longest = a.chars().count().max(b.chars().count());
        prop_assert!(levenshtein(&a, &b) <= longest);
    }

    #[test]
    fn score_stays_in_unit_interval(query in raw_input(), candidate in raw_input()) {
        let score = match_score(&query, &candidate, &ResolverConfig::default());
        prop_assert!((0.0..=1.0).contains(&score));
    }

    #[test]
    fn identical_alphanumeric_inputs_score_one(a in "[a-z0-9]{1,12}") {
        // Alphanumeric input survives normalization, so self-comparison is exact.
        prop_assert!(!normalize_query(&a).is_empty());
        prop_assert_eq!(match_score(&a, &a, &ResolverConfig::default()), 1.0);
    }

    #[test]
    fn has_match_agrees_with_fuzzy_match(query in raw_input()) {
        let catalog = sample_catalog();
        let config = ResolverConfig::default();
        let matches = fuzzy_match(&query, &catalog, &config);
        prop_assert_eq!(has_match(&query, &catalog, &config), !matches.is_empty());
    }

    #[test]
    fn ranking_is_sorted_and_thresholded(query in raw_input()) {
        let catalog = sample_catalog();
        let config = ResolverConfig::default();
        let matches = fuzzy_match(&query, &catalog, &config);
        for result in &matches {
            prop_assert!(result.score >= config.min_score);
            prop_assert!(result.score <= 1.0);
        }
        for pair in matches.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
    }
}
