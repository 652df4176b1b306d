use anyhow::{Context, Result};
use tracing::debug;

use glass_catalog::load_default_catalog;
use glass_cli::query::{InfoOutcome, list_components, resolve_info, search_components};
use glass_model::ComponentEntry;
use glass_resolver::ResolverConfig;

use crate::cli::{InfoArgs, ListArgs, SearchArgs};
use crate::render::{print_component_details, print_component_table, print_suggestions};

pub fn run_list(args: &ListArgs) -> Result<()> {
    let catalog = load_catalog()?;
    let components = list_components(&catalog, args.category.as_deref());
    if args.json {
        println!("{}", serde_json::to_string_pretty(&components)?);
    } else {
        print_component_table(&components);
    }
    Ok(())
}

/// Returns true when the query resolved to a component.
pub fn run_info(args: &InfoArgs) -> Result<bool> {
    let catalog = load_catalog()?;
    let outcome = resolve_info(&catalog, &args.name, &ResolverConfig::default());
    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(outcome.is_resolved());
    }
    match &outcome {
        InfoOutcome::Resolved { component, matched } => {
            print_component_details(component, matched);
        }
        InfoOutcome::Suggestions { suggestions } if !suggestions.is_empty() => {
            eprintln!("no exact match for '{}', did you mean:", args.name);
            print_suggestions(suggestions);
        }
        InfoOutcome::Suggestions { .. } => {
            eprintln!("no component matches '{}'", args.name);
        }
    }
    Ok(outcome.is_resolved())
}

/// Returns true when at least one match cleared the inclusion threshold.
pub fn run_search(args: &SearchArgs) -> Result<bool> {
    let catalog = load_catalog()?;
    let matches = search_components(
        &catalog,
        &args.query,
        args.limit,
        &ResolverConfig::default(),
    );
    if args.json {
        println!("{}", serde_json::to_string_pretty(&matches)?);
        return Ok(!matches.is_empty());
    }
    if matches.is_empty() {
        eprintln!("no component matches '{}'", args.query);
        return Ok(false);
    }
    print_suggestions(&matches);
    Ok(true)
}

fn load_catalog() -> Result<Vec<ComponentEntry>> {
    let catalog = load_default_catalog().context("load component registry")?;
    debug!(component_count = catalog.len(), "registry loaded");
    Ok(catalog)
}
