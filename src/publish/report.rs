//! Report callback trait for interface-agnostic outcome delivery
//!
//! The two original delivery styles, fire-and-report and fire-and-forget,
//! are one code path parameterized by the callback: a reporting
//! implementation renders the outcome, [`NoopReport`] discards it.

use crate::error::Error;
use crate::types::{PublishMode, PublishOutcome};
use async_trait::async_trait;

/// Report callback trait
///
/// Implement this to observe a publish action as it runs.
/// - CLI implementations can drive a spinner and print the outcome panel
/// - embedding services can forward the hooks elsewhere
#[async_trait]
pub trait ReportCallback: Send + Sync {
    /// Called with the built request body before it is sent
    async fn on_request_built(&self, mode: PublishMode, body: &str);

    /// Called once the catalog answered and the response was interpreted
    async fn on_outcome(&self, outcome: &PublishOutcome);

    /// Called when the request fails before an outcome exists (transport
    /// failure or an unparseable response body)
    async fn on_error(&self, error: &Error);
}

/// No-op report callback for fire-and-forget delivery and tests
pub struct NoopReport;

#[async_trait]
impl ReportCallback for NoopReport {
    async fn on_request_built(&self, _mode: PublishMode, _body: &str) {}
    async fn on_outcome(&self, _outcome: &PublishOutcome) {}
    async fn on_error(&self, _error: &Error) {}
}
