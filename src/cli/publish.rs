//! Publish command - send one Harvest or Transaction-Insert request

use crate::cli::CliReport;
use crate::cli::prompt::fill_form;
use crate::cli::style::Stylize;
use anstream::println;
use csw_publish::catalog::{CatalogService, DEFAULT_TIMEOUT_SECS, HttpCatalogService};
use csw_publish::config::{DEFAULT_RESOURCE_TYPE, FileConfig};
use csw_publish::error::{Error, Result};
use csw_publish::publish::{NoopReport, ReportCallback, build_request_body, execute_publish};
use csw_publish::types::{PublishForm, PublishMode};
use std::path::Path;
use std::time::Duration;
use tracing::debug;

/// Options for the publish command
#[derive(Debug, Clone, Default)]
pub struct PublishOptions<'a> {
    /// Publish type; inferred from the payload flags when absent
    pub publish_type: Option<&'a str>,
    /// Resource type URI for harvest requests
    pub resource_type: Option<&'a str>,
    /// URI of the resource to harvest
    pub source: Option<&'a str>,
    /// Catalog endpoint URL (overrides the config file)
    pub endpoint: Option<&'a str>,
    /// Metadata record XML file, "-" for stdin
    pub record_file: Option<&'a Path>,
    /// Request timeout in seconds
    pub timeout_secs: Option<u64>,
    /// Print the request body without sending it
    pub dry_run: bool,
    /// Fire-and-forget: send without reporting the catalog outcome
    pub quiet: bool,
    /// Print the request body before sending
    pub verbose: bool,
    /// Prompt for missing fields instead of rejecting them
    pub interactive: bool,
}

/// Run the publish command
pub async fn run_publish(options: PublishOptions<'_>) -> Result<()> {
    let config = FileConfig::load()?;
    let mut form = resolve_form(&options, &config)?;

    if options.interactive {
        form = fill_form(form)?;
    }
    validate_form(&form)?;

    if options.dry_run {
        println!("{}", build_request_body(&form));
        return Ok(());
    }

    let timeout = options
        .timeout_secs
        .or(config.timeout_secs)
        .unwrap_or(DEFAULT_TIMEOUT_SECS);
    let catalog = HttpCatalogService::new(&form.endpoint, Duration::from_secs(timeout))?;

    if options.verbose {
        println!("{} {}", "Publishing to".muted(), catalog.endpoint().accent());
    }

    let report: Box<dyn ReportCallback> = if options.quiet {
        Box::new(NoopReport)
    } else if options.verbose {
        Box::new(CliReport::verbose())
    } else {
        Box::new(CliReport::compact())
    };

    let outcome = execute_publish(&form, &catalog, report.as_ref()).await?;

    if options.quiet {
        debug!(success = outcome.is_success(), "catalog outcome received");
    }

    Ok(())
}

/// Run the default interactive mode
pub async fn run_interactive(endpoint: Option<&str>) -> Result<()> {
    run_publish(PublishOptions {
        endpoint,
        interactive: true,
        ..PublishOptions::default()
    })
    .await
}

/// Merge command flags with config-file defaults into a form.
///
/// When no publish type is given it is inferred from the payload flags: a
/// record file means a direct insert, a source means a harvest.
fn resolve_form(options: &PublishOptions<'_>, config: &FileConfig) -> Result<PublishForm> {
    let publish_type = options.publish_type.map_or_else(
        || {
            if options.record_file.is_some() {
                "Layer".to_string()
            } else if options.source.is_some() {
                "Service".to_string()
            } else {
                String::new()
            }
        },
        ToString::to_string,
    );

    let record_xml = match options.record_file {
        Some(path) => read_record(path)?,
        None => String::new(),
    };

    let mut form = PublishForm {
        publish_type,
        resource_type: options
            .resource_type
            .map(ToString::to_string)
            .or_else(|| config.resource_type.clone())
            .unwrap_or_default(),
        source: options.source.unwrap_or_default().to_string(),
        endpoint: options
            .endpoint
            .map(ToString::to_string)
            .or_else(|| config.endpoint.clone())
            .unwrap_or_default(),
        record_xml,
    };

    // Harvest requests fall back to the Dublin Core resource type; the
    // interactive path offers the same default at the prompt instead
    if !options.interactive
        && form.mode() == PublishMode::Harvest
        && !form.publish_type.is_empty()
        && form.resource_type.is_empty()
    {
        form.resource_type = DEFAULT_RESOURCE_TYPE.to_string();
    }

    Ok(form)
}

/// Read the metadata record from a file, or stdin for "-"
fn read_record(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        Ok(std::io::read_to_string(std::io::stdin())?)
    } else {
        Ok(std::fs::read_to_string(path)?)
    }
}

fn validate_form(form: &PublishForm) -> Result<()> {
    if form.publish_type.is_empty() {
        return Err(Error::InvalidArgument(
            "no publish type given; pass --publish-type, --source or --xml".to_string(),
        ));
    }
    if form.endpoint.is_empty() {
        return Err(Error::InvalidArgument(
            "no catalog endpoint given; pass --url or set `endpoint` in the config file"
                .to_string(),
        ));
    }
    match form.mode() {
        PublishMode::Insert if form.record_xml.is_empty() => Err(Error::InvalidArgument(
            "publish type 'Layer' inserts a metadata record; pass --xml".to_string(),
        )),
        PublishMode::Harvest if form.source.is_empty() => Err(Error::InvalidArgument(format!(
            "publish type '{}' harvests by reference; pass --source",
            form.publish_type
        ))),
        _ => Ok(()),
    }
}
