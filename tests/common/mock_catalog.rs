//! Test doubles for the catalog seam and the report callback

#![allow(dead_code)]

use async_trait::async_trait;
use csw_publish::catalog::CatalogService;
use csw_publish::error::{Error, Result};
use csw_publish::publish::ReportCallback;
use csw_publish::types::{PublishMode, PublishOutcome};
use std::sync::Mutex;

enum Reply {
    Body(String),
    TransportFailure,
}

/// Catalog double that records request bodies and replays a canned reply
pub struct MockCatalogService {
    endpoint: String,
    reply: Reply,
    /// Request bodies received, in order
    pub sent: Mutex<Vec<String>>,
}

impl MockCatalogService {
    /// Reply to every request with the given body
    pub fn replying(body: &str) -> Self {
        Self {
            endpoint: "http://catalog.test/csw".to_string(),
            reply: Reply::Body(body.to_string()),
            sent: Mutex::new(Vec::new()),
        }
    }

    /// Fail every request at the transport level
    pub fn failing() -> Self {
        Self {
            endpoint: "http://catalog.test/csw".to_string(),
            reply: Reply::TransportFailure,
            sent: Mutex::new(Vec::new()),
        }
    }

    /// Bodies received so far
    pub fn sent_bodies(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl CatalogService for MockCatalogService {
    async fn send_request(&self, body: &str) -> Result<String> {
        self.sent.lock().unwrap().push(body.to_string());
        match &self.reply {
            Reply::Body(text) => Ok(text.clone()),
            Reply::TransportFailure => Err(Error::Status(503)),
        }
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Report callback double that records the hooks it saw, in order
#[derive(Default)]
pub struct RecordingReport {
    events: Mutex<Vec<String>>,
}

impl RecordingReport {
    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReportCallback for RecordingReport {
    async fn on_request_built(&self, mode: PublishMode, _body: &str) {
        self.events.lock().unwrap().push(format!("built:{mode:?}"));
    }

    async fn on_outcome(&self, outcome: &PublishOutcome) {
        let kind = if outcome.is_success() {
            "success"
        } else {
            "exception"
        };
        self.events.lock().unwrap().push(format!("outcome:{kind}"));
    }

    async fn on_error(&self, _error: &Error) {
        self.events.lock().unwrap().push("error".to_string());
    }
}
