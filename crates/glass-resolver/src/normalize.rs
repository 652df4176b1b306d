//! Query and component-name normalization.
//!
//! Queries and catalog names pass through the identical transformation so
//! comparison is symmetric: lowercase, separators stripped, the `Glass`
//! naming suffix removed. `"button-glass"`, `"ButtonGlass"`, and `"button"`
//! all normalize to `"button"`.

/// Suffix shared by the library's canonical component names.
const NAME_SUFFIX: &str = "glass";

/// Normalize free-form user input for comparison.
///
/// Lowercases, drops every non-alphanumeric character (hyphens, underscores,
/// spaces, punctuation), then strips a trailing `glass` unless that would
/// leave the token empty. An empty input normalizes to an empty string,
/// which callers treat as no-match.
pub fn normalize_query(input: &str) -> String {
    let mut token: String = input
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect();
    if token.len() > NAME_SUFFIX.len() && token.ends_with(NAME_SUFFIX) {
        token.truncate(token.len() - NAME_SUFFIX.len());
    }
    token
}

/// Normalize a catalog entry name or alias.
///
/// Same rules as [`normalize_query`]; a separate entry point keeps the two
/// sides of the comparison explicit at call sites.
pub fn normalize_component_name(name: &str) -> String {
    normalize_query(name)
}
