use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::{Path, PathBuf};
use std::process;
use tracing_subscriber::EnvFilter;

use facetkit_core::*;

mod errors;
mod ui;

/// Facet settings toolkit - inspect facet configuration and order facet values
///
/// Examples:
///   # List configured facets, grouped by type
///   facetkit facets settings.json
///
///   # Show a single facet or template
///   facetkit facet settings.json categories
///   facetkit template settings.json shop
///
///   # Term depths for a taxonomy
///   facetkit depths terms.json --taxonomy category
///
///   # Nest pre-sorted facet values under their parents
///   facetkit sort values.json
///
///   # Render a facet with selected values
///   facetkit render settings.json categories values.json --select categories=espresso
#[derive(Parser, Debug)]
#[command(name = "facetkit")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Show debug logging (or set RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List all facets grouped by type, validating the settings file
    Facets {
        #[arg(value_name = "SETTINGS")]
        settings: PathBuf,
    },

    /// Print one facet's settings as JSON
    Facet {
        #[arg(value_name = "SETTINGS")]
        settings: PathBuf,
        name: String,
    },

    /// Print one template's settings as JSON
    Template {
        #[arg(value_name = "SETTINGS")]
        settings: PathBuf,
        name: String,
    },

    /// Check whether any facet has a setting with the given value
    Exists {
        #[arg(value_name = "SETTINGS")]
        settings: PathBuf,
        setting: String,
        /// Compared as JSON when it parses as JSON, otherwise as a string
        value: String,
    },

    /// List the terms of a taxonomy
    Terms {
        #[arg(value_name = "TERMS")]
        terms: PathBuf,
        #[arg(short, long)]
        taxonomy: String,
    },

    /// Show parent and depth for every term of a taxonomy
    Depths {
        #[arg(value_name = "TERMS")]
        terms: PathBuf,
        #[arg(short, long)]
        taxonomy: String,
        /// Print JSON instead of an indented tree
        #[arg(long)]
        json: bool,
    },

    /// Move child facet values directly below their parents
    Sort {
        #[arg(value_name = "VALUES")]
        values: PathBuf,
        /// Pre-sort by depth and this order first ("count" or "name")
        #[arg(short, long, value_name = "ORDER")]
        orderby: Option<FacetOrder>,
        /// Print JSON instead of an indented list
        #[arg(long)]
        json: bool,
    },

    /// Render a configured facet with its values
    Render {
        #[arg(value_name = "SETTINGS")]
        settings: PathBuf,
        facet: String,
        #[arg(value_name = "VALUES")]
        values: PathBuf,
        /// Selected value (format: facet_name=value, can be specified multiple times)
        #[arg(short, long = "select", value_name = "NAME=VALUE")]
        selections: Vec<String>,
    },

    /// Escape a JSON document's strings for SQL
    Sanitize {
        /// JSON document to escape
        input: String,
    },

    /// Print the hostname of a home URL
    Host { url: String },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli.command) {
        let (title, details) = errors::map_error(&err);
        eprintln!("{} {}\n\n{}", "error:".red().bold(), title.bold(), details);
        process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Facets { settings } => {
            let settings = load(&settings)?;
            let registry = FacetTypeRegistry::with_builtins();

            if let Err(errors) = validate_settings(&settings, &registry) {
                eprintln!("{}\n", "Settings validation failed:".yellow());
                for (i, error) in errors.iter().enumerate() {
                    eprintln!("  {}. {}", i + 1, error);
                }
                eprintln!();
            }

            println!("# Facets\n");
            println!("**Total:** {}\n", settings.facets().len());
            print!("{}", ui::format_facet_groups(settings.facets()));
            println!("# Templates\n");
            for template in settings.templates() {
                println!("- **{}**", template.name);
            }
        }

        Command::Facet { settings, name } => {
            let settings = load(&settings)?;
            let facet = settings
                .facet_by_name(&name)
                .ok_or_else(|| anyhow!("facet '{}' not found", name))?;
            println!("{}", serde_json::to_string_pretty(facet)?);
        }

        Command::Template { settings, name } => {
            let settings = load(&settings)?;
            let template = settings
                .template_by_name(&name)
                .ok_or_else(|| anyhow!("template '{}' not found", name))?;
            println!("{}", serde_json::to_string_pretty(template)?);
        }

        Command::Exists {
            settings,
            setting,
            value,
        } => {
            let settings = load(&settings)?;
            let value = serde_json::from_str(&value).unwrap_or(serde_json::Value::String(value));
            let exists = facet_setting_exists(&setting, &value, settings.facets());
            println!("{}", exists);
            if !exists {
                process::exit(2);
            }
        }

        Command::Terms { terms, taxonomy } => {
            let source = JsonTermSource::load(&terms)
                .with_context(|| format!("loading terms from '{}'", terms.display()))?;
            let names = taxonomy_terms(&source.terms(&taxonomy)?);
            println!("{}", ui::format_terms(&names));
        }

        Command::Depths {
            terms,
            taxonomy,
            json,
        } => {
            let source = JsonTermSource::load(&terms)
                .with_context(|| format!("loading terms from '{}'", terms.display()))?;
            let terms = source.terms(&taxonomy)?;
            let depths = term_depths(&terms);

            if json {
                println!("{}", serde_json::to_string_pretty(&depths)?);
            } else {
                println!("{}", ui::format_depths(&depths, &taxonomy_terms(&terms)));
            }
        }

        Command::Sort {
            values,
            orderby,
            json,
        } => {
            let mut rows = load_values(&values)
                .with_context(|| format!("loading values from '{}'", values.display()))?;
            if let Some(order) = orderby {
                sort_facet_values(&mut rows, order);
            }
            let sorted = sort_taxonomy_values(rows)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&sorted)?);
            } else {
                println!("{}", ui::format_values(&sorted));
            }
        }

        Command::Render {
            settings,
            facet,
            values,
            selections,
        } => {
            let settings = load(&settings)?;
            let facet = settings
                .facet_by_name(&facet)
                .ok_or_else(|| anyhow!("facet '{}' not found", facet))?;

            for selection in &selections {
                if !selection.contains('=') {
                    eprintln!(
                        "Warning: Invalid selection format '{}'. Expected 'name=value'",
                        selection
                    );
                }
            }
            let selections = parse_selections(&selections);

            let registry = FacetTypeRegistry::with_builtins();
            let facet_type = registry.type_for(facet)?;
            let rows = load_values(&values)
                .with_context(|| format!("loading values from '{}'", values.display()))?;
            let prepared = facet_type.prepare_values(facet, rows)?;

            println!(
                "{}",
                facet_type.render(facet, &prepared, selected_for(&selections, &facet.name))
            );
        }

        Command::Sanitize { input } => {
            let value: serde_json::Value =
                serde_json::from_str(&input).context("input is not valid JSON")?;
            println!("{}", sanitize(&value));
        }

        Command::Host { url } => match http_host(&url) {
            Some(host) => println!("{}", host),
            None => bail!("'{}' has no hostname", url),
        },
    }

    Ok(())
}

fn load(path: &Path) -> Result<Settings> {
    let raw = std::fs::read_to_string(path).map_err(|source| FacetError::Io {
        path: path.display().to_string(),
        source,
    })?;

    // Schema problems are reported but do not stop lookups on usable entries
    if let Ok(blob) = serde_json::from_str::<serde_json::Value>(&raw) {
        if let Err(errors) = validate_against_schema(&settings_schema(), &blob) {
            for error in errors {
                tracing::warn!(path = %path.display(), "{}", error);
            }
        }
    }

    SettingsLoader::new()
        .load_str(&raw)
        .with_context(|| format!("loading settings from '{}'", path.display()))
}
