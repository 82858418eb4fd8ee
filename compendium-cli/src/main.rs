//! Compendium - component registry lookup and validation from the command line
//!
//! Thin front end: every command calls into `compendium_core` and prints the
//! result. Logs go to stderr so stdout stays machine-readable.

use anyhow::Result;
use clap::{Args, Parser, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use compendium_core::{Catalog, Category, CompendiumConfig, Complexity, ComponentFilter};

mod commands;

/// Log levels
#[derive(Debug, Clone, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[derive(Parser, Debug)]
#[clap(
    name = "compendium",
    about = "Look up, search and validate UI components in a component catalog",
    version
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,

    /// Configuration file (defaults to ./compendium.yaml, then the user config dir)
    #[clap(long, global = true)]
    config: Option<PathBuf>,

    /// Set log level
    #[clap(long, default_value = "warn", global = true)]
    log_level: LogLevel,

    /// Emit logs as JSON
    #[clap(long, global = true)]
    log_json: bool,
}

/// Filter flags shared by `list`
#[derive(Args, Debug, Default)]
struct FilterArgs {
    /// Only this category (atom, molecule, organism, template, pattern)
    #[clap(long, value_parser = parse_category)]
    category: Option<Category>,

    /// Match components carrying any of these tags (repeatable)
    #[clap(long = "tag")]
    tags: Vec<String>,

    /// Only this complexity (simple, moderate, complex)
    #[clap(long, value_parser = parse_complexity)]
    complexity: Option<Complexity>,

    /// Require (true) or exclude (false) components with a schema
    #[clap(long)]
    has_schema: Option<bool>,

    /// Require (true) or exclude (false) components with documentation
    #[clap(long)]
    has_docs: Option<bool>,

    /// Require (true) or exclude (false) components with tests
    #[clap(long)]
    has_tests: Option<bool>,
}

impl From<FilterArgs> for ComponentFilter {
    fn from(args: FilterArgs) -> Self {
        ComponentFilter {
            category: args.category,
            tags: args.tags,
            complexity: args.complexity,
            has_schema: args.has_schema,
            has_documentation: args.has_docs,
            has_tests: args.has_tests,
        }
    }
}

#[derive(Parser, Debug)]
enum Command {
    /// List components matching all given filters
    List {
        #[clap(flatten)]
        filter: FilterArgs,

        /// Output results as JSON
        #[clap(long)]
        json: bool,
    },

    /// List atoms
    Atoms {
        #[clap(long)]
        json: bool,
    },

    /// List molecules
    Molecules {
        #[clap(long)]
        json: bool,
    },

    /// List organisms
    Organisms {
        #[clap(long)]
        json: bool,
    },

    /// Search names, tags and descriptions
    Search {
        query: String,

        #[clap(long)]
        json: bool,
    },

    /// Show a component's full record
    Show { name: String },

    /// Print a component's schema
    Schema { name: String },

    /// Print a component's documentation
    Docs { name: String },

    /// Validate props (a JSON object) against a component's schema
    ValidateProps {
        name: String,

        #[clap(long, default_value = "{}")]
        props: String,
    },

    /// Check a class string for hard-coded colors and arbitrary values
    ValidateTokens { classes: String },

    /// List the styling rules `validate-tokens` applies
    TokenRules {
        #[clap(long)]
        json: bool,
    },

    /// Print the import statement for a component
    Import {
        name: String,

        /// Also print the `<Name>Props` type import
        #[clap(long)]
        types: bool,
    },

    /// Print a usage snippet for a component
    Usage {
        name: String,

        /// Props as a JSON object; keys render in the given order
        #[clap(long, default_value = "{}")]
        props: String,

        /// Children text; renders an open/close tag pair
        #[clap(long)]
        children: Option<String>,
    },

    /// Suggest components sharing tags with this one
    Alternatives { name: String },

    /// Show dependencies and dependents of a component
    Deps { name: String },

    /// Summary counts over the catalog
    Stats {
        #[clap(long)]
        json: bool,
    },
}

fn parse_category(value: &str) -> Result<Category, String> {
    Category::parse(value).ok_or_else(|| {
        format!(
            "invalid category '{}'. Valid values: {}",
            value,
            Category::ALLOWED.join(", ")
        )
    })
}

fn parse_complexity(value: &str) -> Result<Complexity, String> {
    Complexity::parse(value).ok_or_else(|| {
        format!(
            "invalid complexity '{}'. Valid values: {}",
            value,
            Complexity::ALLOWED.join(", ")
        )
    })
}

/// Initialize tracing; output MUST go to stderr
fn initialize_tracing(log_level: &LogLevel, json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.to_filter_directive()));

    if json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    initialize_tracing(&cli.log_level, cli.log_json);

    // Token checks never need a catalog
    match &cli.command {
        Command::ValidateTokens { classes } => return commands::validate_tokens(classes),
        Command::TokenRules { json } => return commands::token_rules(*json),
        _ => {}
    }

    let config = CompendiumConfig::discover(cli.config.as_deref())?;
    debug!(catalog = %config.catalog.display(), "Loading catalog");
    let catalog = Catalog::from_config(&config)?;

    run(&catalog, cli.command)
}

fn run(catalog: &Catalog, command: Command) -> Result<ExitCode> {
    match command {
        Command::List { filter, json } => commands::list(catalog, &filter.into(), json),
        Command::Atoms { json } => commands::list_records(catalog.atoms(), json),
        Command::Molecules { json } => commands::list_records(catalog.molecules(), json),
        Command::Organisms { json } => commands::list_records(catalog.organisms(), json),
        Command::Search { query, json } => commands::search(catalog, &query, json),
        Command::Show { name } => commands::show(catalog, &name),
        Command::Schema { name } => commands::schema(catalog, &name),
        Command::Docs { name } => commands::docs(catalog, &name),
        Command::ValidateProps { name, props } => commands::validate_props(catalog, &name, &props),
        Command::ValidateTokens { classes } => commands::validate_tokens(&classes),
        Command::TokenRules { json } => commands::token_rules(json),
        Command::Import { name, types } => commands::import(catalog, &name, types),
        Command::Usage {
            name,
            props,
            children,
        } => commands::usage(catalog, &name, &props, children.as_deref()),
        Command::Alternatives { name } => commands::alternatives(catalog, &name),
        Command::Deps { name } => commands::deps(catalog, &name),
        Command::Stats { json } => commands::stats(catalog, json),
    }
}
