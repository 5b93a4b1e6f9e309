//! Command-line surface.
//!
//! Every non-server command resolves to a JSON value printed on stdout, so
//! output can be piped straight into `jq`.

use crate::server::{self, AppState};
use anyhow::Context;
use clap::{Parser, Subcommand};
use formfinder_core::{
    config::Config, search, Catalog, DateRange, SearchFilters, SortBy, SourceType,
};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, Parser)]
#[command(name = "formfinder", about = "Search and browse a form catalog")]
pub struct Cli {
    /// Write debug logs to /tmp/formfinder-debug.log (tail -f to inspect).
    #[arg(long)]
    pub debug: bool,

    /// Config file to use instead of ~/.config/formfinder/config.toml.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Catalog JSON document; overrides `[catalog] path`.
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Free-text search with optional filters.
    Search {
        /// Query terms; any matching term selects a form.
        query: Vec<String>,
        /// Restrict to a category id (repeatable).
        #[arg(long = "category")]
        categories: Vec<String>,
        /// Restrict to a source type (repeatable).
        #[arg(long = "source")]
        sources: Vec<SourceType>,
        /// any | week | month | year
        #[arg(long, default_value = "any")]
        date_range: String,
        /// relevance | popularity | date | downloads
        #[arg(long = "sort", default_value = "relevance")]
        sort_by: String,
        #[arg(long, default_value_t = 1)]
        page: usize,
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Most downloaded forms.
    Popular {
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Every form in a category.
    Category { id: String },
    /// Forms sharing a category with the given form.
    Related {
        id: String,
        #[arg(long)]
        limit: Option<usize>,
    },
    /// One form, by id or slug.
    Show { id: String },
    /// List categories.
    Categories {
        /// Only featured categories.
        #[arg(long)]
        featured: bool,
    },
    /// Search-as-you-type suggestions.
    Suggest {
        query: Vec<String>,
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Serve the JSON HTTP API.
    Serve {
        /// Overrides `[server] bind`.
        #[arg(long)]
        bind: Option<String>,
    },
}

/// Load configuration and catalog, then execute the command.
pub fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "config unavailable, using defaults");
            Config::defaults()
        }),
    };
    let catalog = load_catalog(cli.catalog.or_else(|| config.catalog.path()))?;

    match cli.command {
        Command::Serve { bind } => {
            let addr = bind.unwrap_or_else(|| config.server.bind.clone());
            let state = Arc::new(AppState {
                catalog: Arc::new(catalog),
                search: config.search,
            });
            tokio::runtime::Runtime::new()?.block_on(server::serve(state, &addr))
        }
        command => {
            let value = render(&catalog, &config, &command)?;
            println!("{}", serde_json::to_string_pretty(&value)?);
            Ok(())
        }
    }
}

fn load_catalog(path: Option<PathBuf>) -> anyhow::Result<Catalog> {
    match path {
        Some(path) => Catalog::from_path(&path)
            .with_context(|| format!("loading catalog from {}", path.display())),
        None => Ok(Catalog::demo()),
    }
}

/// Evaluate a non-server command to its JSON output.
pub fn render(
    catalog: &Catalog,
    config: &Config,
    command: &Command,
) -> anyhow::Result<serde_json::Value> {
    let limits = &config.search;
    let value = match command {
        Command::Search {
            query,
            categories,
            sources,
            date_range,
            sort_by,
            page,
            limit,
        } => {
            let filters = SearchFilters {
                categories: categories.clone(),
                sources: sources.clone(),
                date_range: DateRange::parse_lenient(date_range),
                sort_by: SortBy::parse_lenient(sort_by),
            };
            let limit = limits.page_size(*limit);
            serde_json::to_value(search::search(catalog, &query.join(" "), &filters, *page, limit))?
        }
        Command::Popular { limit } => {
            let limit = limit.unwrap_or(limits.popular_limit);
            serde_json::to_value(search::popular_forms(catalog, limit))?
        }
        Command::Category { id } => serde_json::to_value(search::forms_by_category(catalog, id))?,
        Command::Related { id, limit } => {
            let limit = limit.unwrap_or(limits.related_limit);
            serde_json::to_value(search::related_forms(catalog, id, limit))?
        }
        Command::Show { id } => {
            let form = catalog
                .form(id)
                .or_else(|| catalog.form_by_slug(id))
                .with_context(|| format!("no form with id or slug {id:?}"))?;
            serde_json::json!({
                "form": form,
                "categories": catalog.categories_of(form),
                "related": search::related_forms(catalog, &form.id, limits.related_limit),
            })
        }
        Command::Categories { featured: true } => {
            serde_json::to_value(catalog.featured_categories(limits.featured_limit))?
        }
        Command::Categories { featured: false } => serde_json::to_value(catalog.categories())?,
        Command::Suggest { query, limit } => {
            let limit = limit.unwrap_or(limits.suggestion_limit);
            serde_json::to_value(search::suggest(catalog, &query.join(" "), limit))?
        }
        Command::Serve { .. } => anyhow::bail!("serve does not produce a JSON value"),
    };
    Ok(value)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
