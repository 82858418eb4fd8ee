//! Command implementations
//!
//! Per-call failures (unknown component, missing schema, ...) print the
//! structured error payload on stdout and exit with status 1.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::{json, Map, Value};
use std::process::ExitCode;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

use compendium_core::validator::TokenValidator;
use compendium_core::{
    codegen, validate_tokens as scan_tokens, Catalog, ComponentFilter, ComponentRecord,
    RegistryError, SearchHit,
};

/// Table row for component listings
#[derive(Tabled)]
struct ComponentRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Complexity")]
    complexity: String,
    #[tabled(rename = "Version")]
    version: String,
    #[tabled(rename = "Schema")]
    schema: &'static str,
    #[tabled(rename = "Docs")]
    docs: &'static str,
    #[tabled(rename = "Tests")]
    tests: &'static str,
    #[tabled(rename = "Tags")]
    tags: String,
}

impl From<&ComponentRecord> for ComponentRow {
    fn from(record: &ComponentRecord) -> Self {
        Self {
            name: record.name.clone(),
            category: record.category.to_string(),
            complexity: record.complexity.to_string(),
            version: record.version.clone(),
            schema: mark(record.has_schema()),
            docs: mark(record.has_documentation()),
            tests: mark(record.has_tests),
            tags: record.tags.join(", "),
        }
    }
}

/// Table row for search results
#[derive(Tabled)]
struct SearchRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Matched On")]
    relevance: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Description")]
    description: String,
}

impl From<&SearchHit<'_>> for SearchRow {
    fn from(hit: &SearchHit<'_>) -> Self {
        let description = &hit.record.description;
        let description = if description.chars().count() > 50 {
            format!("{}...", description.chars().take(47).collect::<String>())
        } else {
            description.clone()
        };

        Self {
            name: hit.record.name.clone(),
            relevance: hit.relevance.as_str().to_string(),
            category: hit.record.category.to_string(),
            description,
        }
    }
}

/// Table row for styling rules
#[derive(Tabled, Serialize)]
#[serde(rename_all = "camelCase")]
struct RuleRow {
    #[tabled(rename = "Rule")]
    rule_id: &'static str,
    #[tabled(rename = "Description")]
    description: &'static str,
}

fn mark(present: bool) -> &'static str {
    if present {
        "yes"
    } else {
        "-"
    }
}

fn render_table<R: Tabled>(rows: &[R]) -> String {
    Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()))
        .to_string()
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<ExitCode> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(ExitCode::SUCCESS)
}

/// Print a per-call error as data
fn report(err: RegistryError) -> Result<ExitCode> {
    tracing::debug!(error = %err, "Request failed");
    println!("{}", serde_json::to_string_pretty(&err.to_payload())?);
    Ok(ExitCode::FAILURE)
}

fn parse_props(raw: &str) -> Result<Map<String, Value>> {
    serde_json::from_str(raw).context("--props must be a JSON object")
}

pub fn list(catalog: &Catalog, filter: &ComponentFilter, json_output: bool) -> Result<ExitCode> {
    list_records(catalog.filter(filter), json_output)
}

pub fn list_records(records: Vec<&ComponentRecord>, json_output: bool) -> Result<ExitCode> {
    if json_output {
        return print_json(&records);
    }

    if records.is_empty() {
        println!("No components found.");
        return Ok(ExitCode::SUCCESS);
    }

    let rows: Vec<ComponentRow> = records.into_iter().map(ComponentRow::from).collect();
    println!("{}", render_table(&rows));
    Ok(ExitCode::SUCCESS)
}

pub fn search(catalog: &Catalog, query: &str, json_output: bool) -> Result<ExitCode> {
    let hits = match catalog.search(query) {
        Ok(hits) => hits,
        Err(e) => return report(e),
    };

    if json_output {
        return print_json(&hits);
    }

    if hits.is_empty() {
        println!("No components match '{query}'.");
        return Ok(ExitCode::SUCCESS);
    }

    println!("Found {} component(s):\n", hits.len());
    let rows: Vec<SearchRow> = hits.iter().map(SearchRow::from).collect();
    println!("{}", render_table(&rows));
    Ok(ExitCode::SUCCESS)
}

pub fn show(catalog: &Catalog, name: &str) -> Result<ExitCode> {
    match catalog.lookup(name) {
        Ok(record) => print_json(record),
        Err(e) => report(e),
    }
}

pub fn schema(catalog: &Catalog, name: &str) -> Result<ExitCode> {
    match catalog.schema(name) {
        Ok(schema) => print_json(&schema),
        Err(e) => report(e),
    }
}

pub fn docs(catalog: &Catalog, name: &str) -> Result<ExitCode> {
    match catalog.documentation(name) {
        Ok(text) => {
            print!("{text}");
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => report(e),
    }
}

pub fn validate_props(catalog: &Catalog, name: &str, raw_props: &str) -> Result<ExitCode> {
    let props = parse_props(raw_props)?;

    match catalog.validate_component_props(name, &props) {
        Ok(result) => {
            print_json(&result)?;
            Ok(if result.valid {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Err(e) => report(e),
    }
}

pub fn validate_tokens(classes: &str) -> Result<ExitCode> {
    let result = scan_tokens(classes);
    print_json(&result)?;
    Ok(if result.valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

pub fn token_rules(json_output: bool) -> Result<ExitCode> {
    let validator = TokenValidator::new();
    let rows: Vec<RuleRow> = validator
        .rules()
        .map(|rule| RuleRow {
            rule_id: rule.rule_id(),
            description: rule.description(),
        })
        .collect();

    if json_output {
        return print_json(&rows);
    }

    println!("{}", render_table(&rows));
    Ok(ExitCode::SUCCESS)
}

pub fn import(catalog: &Catalog, name: &str, types: bool) -> Result<ExitCode> {
    let record = match catalog.lookup(name) {
        Ok(record) => record,
        Err(e) => return report(e),
    };

    println!("{}", codegen::import_statement(record, catalog.imports()));
    if types {
        println!("{}", codegen::type_import_statement(record, catalog.imports()));
    }

    Ok(ExitCode::SUCCESS)
}

pub fn usage(
    catalog: &Catalog,
    name: &str,
    raw_props: &str,
    children: Option<&str>,
) -> Result<ExitCode> {
    let props = parse_props(raw_props)?;

    match catalog.usage_text(name, &props, children) {
        Ok(text) => {
            println!("{text}");
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => report(e),
    }
}

pub fn alternatives(catalog: &Catalog, name: &str) -> Result<ExitCode> {
    match catalog.alternatives(name) {
        Ok(names) => print_json(&json!({ "component": name, "alternatives": names })),
        Err(e) => report(e),
    }
}

pub fn deps(catalog: &Catalog, name: &str) -> Result<ExitCode> {
    let view = match catalog.dependencies(name) {
        Ok(view) => view,
        Err(e) => return report(e),
    };
    let dependents = match catalog.dependents(name) {
        Ok(records) => records,
        Err(e) => return report(e),
    };

    let resolved: Vec<&str> = view.resolved.iter().map(|r| r.name.as_str()).collect();
    let dependents: Vec<&str> = dependents.iter().map(|r| r.name.as_str()).collect();

    print_json(&json!({
        "component": view.component,
        "internal": view.internal,
        "external": view.external,
        "components": resolved,
        "dangling": view.dangling,
        "dependents": dependents,
    }))
}

pub fn stats(catalog: &Catalog, json_output: bool) -> Result<ExitCode> {
    let stats = catalog.stats();

    if json_output {
        return print_json(&stats);
    }

    println!("Components:         {}", stats.total);
    for (category, count) in &stats.by_category {
        println!("  {:<18}{}", format!("{category}:"), count);
    }
    println!("With schema:        {}", stats.with_schema);
    println!("With documentation: {}", stats.with_documentation);
    println!("With tests:         {}", stats.with_tests);
    println!("With storybook:     {}", stats.with_storybook_entry);
    for (state, count) in &stats.by_migration_state {
        println!("Migration {:<9}{}", format!("{state}:"), count);
    }

    Ok(ExitCode::SUCCESS)
}
