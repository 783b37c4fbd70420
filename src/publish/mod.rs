//! Publish flow
//!
//! One handler for both publish variants:
//! 1. Build - produce the request body for the form's mode
//! 2. Send - one POST through the catalog seam
//! 3. Interpret - service exception or transaction totals
//!
//! Errors are terminal for the single request; there is no retry and no
//! deduplication of concurrent invocations.

mod report;

pub use report::{NoopReport, ReportCallback};

use crate::catalog::CatalogService;
use crate::error::Result;
use crate::request::{build_harvest_request, build_insert_request};
use crate::response::interpret_response;
use crate::types::{PublishForm, PublishMode, PublishOutcome};
use tracing::debug;

/// Build the request body for the form's selected mode.
///
/// Exactly one of the two envelopes is produced: `"Layer"` publish types
/// insert the record fragment, every other value harvests by reference.
#[must_use]
pub fn build_request_body(form: &PublishForm) -> String {
    match form.mode() {
        PublishMode::Insert => build_insert_request(&form.record_xml),
        PublishMode::Harvest => build_harvest_request(&form.resource_type, &form.source),
    }
}

/// Run one publish action: build, send, interpret, report.
///
/// The outcome (including a catalog-reported exception) is returned as
/// `Ok`; transport failures and unparseable responses surface as `Err`
/// after the callback's error hook ran, so interfaces can restore their
/// idle state on every path.
pub async fn execute_publish(
    form: &PublishForm,
    catalog: &dyn CatalogService,
    report: &dyn ReportCallback,
) -> Result<PublishOutcome> {
    let mode = form.mode();
    let body = build_request_body(form);
    debug!(?mode, bytes = body.len(), "built publish request");
    report.on_request_built(mode, &body).await;

    let response = match catalog.send_request(&body).await {
        Ok(text) => text,
        Err(err) => {
            report.on_error(&err).await;
            return Err(err);
        }
    };

    let outcome = match interpret_response(&response) {
        Ok(outcome) => outcome,
        Err(err) => {
            report.on_error(&err).await;
            return Err(err);
        }
    };

    debug!(success = outcome.is_success(), "interpreted catalog response");
    report.on_outcome(&outcome).await;
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(publish_type: &str) -> PublishForm {
        PublishForm {
            publish_type: publish_type.to_string(),
            resource_type: "http://www.opengis.net/wms".to_string(),
            source: "http://example.com/ows".to_string(),
            endpoint: "http://example.com/csw".to_string(),
            record_xml: "<csw:Record/>".to_string(),
        }
    }

    #[test]
    fn test_layer_builds_insert_body() {
        let body = build_request_body(&form("Layer"));
        assert!(body.starts_with("<Transaction"));
        assert!(body.contains("<Insert><csw:Record/></Insert>"));
        assert!(!body.contains("<Harvest"));
    }

    #[test]
    fn test_service_builds_harvest_body() {
        let body = build_request_body(&form("Service"));
        assert!(body.starts_with("<Harvest"));
        assert!(body.contains("<Source>http://example.com/ows</Source>"));
        assert!(body.contains("<ResourceType>http://www.opengis.net/wms</ResourceType>"));
        assert!(!body.contains("<Transaction"));
    }

    #[test]
    fn test_unknown_type_builds_harvest_body() {
        let body = build_request_body(&form("Map"));
        assert!(body.starts_with("<Harvest"));
    }
}
