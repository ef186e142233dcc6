//! CLI command implementations
//!
//! Every command follows the same startup order:
//! 1. Configuration load
//! 2. Catalog load (validated; failure is fatal)
//! 3. Command work
//!
//! Logging and metrics live here, around the pure query engine.

use std::path::Path;

use serde_json::{json, Value};

use crate::catalog::{Catalog, RecordView};
use crate::executor::QueryExecutor;
use crate::media::EmbedResolver;
use crate::observability::{log_event_with_fields, Event, MetricsRegistry};
use crate::query::{QueryRequest, SortKey};

use super::args::{Command, FilterArgs};
use super::config::Config;
use super::errors::{CliError, CliResult};
use super::io::{
    error_envelope, ok_envelope, read_lines, write_error, write_response, write_value,
};

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Query { config, filters } => query(config.as_deref(), &filters),
        Command::Serve { config } => serve(config.as_deref()),
        Command::Embed { config, id } => embed(config.as_deref(), &id),
        Command::Catalog { config } => catalog(config.as_deref()),
    }
}

/// A loaded catalog plus the settings that shape each query
pub struct Session {
    catalog: Catalog,
    default_sort: SortKey,
    log_queries: bool,
    metrics: MetricsRegistry,
}

impl Session {
    /// Loads config and catalog
    pub fn open(config_path: Option<&Path>) -> CliResult<Self> {
        let config = Config::load_optional(config_path)?;
        if let Some(path) = config_path {
            let path = path.display().to_string();
            log_event_with_fields(Event::ConfigLoaded, &[("path", path.as_str())]);
        }

        let catalog = match config.load_catalog() {
            Ok(catalog) => catalog,
            Err(e) => {
                log_event_with_fields(Event::CatalogLoadFailed, &[("error", e.message())]);
                return Err(e);
            }
        };

        let records = catalog.len().to_string();
        let source = config.catalog_path.as_deref().unwrap_or("<sample>");
        log_event_with_fields(
            Event::CatalogLoaded,
            &[("records", records.as_str()), ("source", source)],
        );

        Ok(Self::new(catalog, config.sort_key()?, config.log_queries))
    }

    pub fn new(catalog: Catalog, default_sort: SortKey, log_queries: bool) -> Self {
        Self {
            catalog,
            default_sort,
            log_queries,
            metrics: MetricsRegistry::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn metrics(&self) -> &MetricsRegistry {
        &self.metrics
    }

    /// Resolves and executes one request, returning the response data.
    pub fn handle(&self, request: &QueryRequest) -> Value {
        let resolved = request.resolve(self.default_sort);

        if resolved.is_degraded() {
            self.metrics.increment_degraded();
            let detail = resolved
                .degradations
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ");
            log_event_with_fields(Event::QueryDegraded, &[("fallbacks", detail.as_str())]);
        }

        let query = &resolved.query;
        let result = QueryExecutor::new(self.catalog.records()).execute(query);
        self.metrics
            .record_query(result.scanned_count, result.returned_count);

        if self.log_queries {
            let returned = result.returned_count.to_string();
            let scanned = result.scanned_count.to_string();
            log_event_with_fields(
                Event::QueryExecuted,
                &[
                    ("returned", returned.as_str()),
                    ("scanned", scanned.as_str()),
                    ("sort", query.sort.as_str()),
                ],
            );
        }

        json!({
            "count": result.returned_count,
            "active_filters": query.active_filter_count(),
            "sort": query.sort.label(),
            "degraded": resolved
                .degradations
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>(),
            "records": result.records.iter().map(|r| RecordView::new(r)).collect::<Vec<_>>(),
        })
    }

    /// Looks up a record and resolves its player embed.
    ///
    /// `embed_url` is null when the media URL carries no video id; callers
    /// then open `media_url` directly.
    pub fn embed(&self, id: &str) -> CliResult<Value> {
        let record = self
            .catalog
            .get(id)
            .ok_or_else(|| CliError::record_not_found(id))?;

        let resolver = EmbedResolver::new()?;
        let embed = resolver.resolve(&record.media_url);

        if let Some(embed) = &embed {
            log_event_with_fields(
                Event::EmbedResolved,
                &[("id", id), ("video_id", embed.video_id.as_str())],
            );
        }

        Ok(json!({
            "id": record.id,
            "title": record.title,
            "creator": record.creator,
            "media_url": record.media_url,
            "embed_url": embed.map(|e| e.embed_url),
        }))
    }

    /// Handles one raw request line; malformed JSON yields an error envelope.
    pub fn handle_line(&self, line: &str) -> Value {
        match serde_json::from_str::<QueryRequest>(line) {
            Ok(request) => ok_envelope(self.handle(&request)),
            Err(e) => {
                let err = CliError::from(e);
                error_envelope(err.code_str(), err.message())
            }
        }
    }
}

/// One-shot query from command-line flags
pub fn query(config_path: Option<&Path>, filters: &FilterArgs) -> CliResult<()> {
    let session = Session::open(config_path)?;
    write_response(session.handle(&filters.to_request()))
}

/// Line-oriented serving loop over stdin/stdout
pub fn serve(config_path: Option<&Path>) -> CliResult<()> {
    let session = Session::open(config_path)?;
    log_event_with_fields(Event::ServeStart, &[]);

    for line in read_lines() {
        match line {
            Ok(line) => {
                let response = session.handle_line(&line);
                write_value(&response)?;
            }
            Err(e) => {
                // stdin failure ends the loop
                write_error(e.code_str(), e.message())?;
                break;
            }
        }
    }

    let fields = session.metrics().snapshot().fields();
    let borrowed: Vec<(&str, &str)> = fields.iter().map(|(k, v)| (*k, v.as_str())).collect();
    log_event_with_fields(Event::ServeComplete, &borrowed);

    Ok(())
}

/// Resolves the embed URL for a record
pub fn embed(config_path: Option<&Path>, id: &str) -> CliResult<()> {
    let session = Session::open(config_path)?;
    write_response(session.embed(id)?)
}

/// Prints every catalog record in catalog order
pub fn catalog(config_path: Option<&Path>) -> CliResult<()> {
    let session = Session::open(config_path)?;
    write_response(json!({
        "count": session.catalog().len(),
        "records": session
            .catalog()
            .iter()
            .map(RecordView::new)
            .collect::<Vec<_>>(),
    }))
}
