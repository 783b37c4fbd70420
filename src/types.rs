//! Core types shared across the library

/// How a resource reaches the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishMode {
    /// Direct metadata insert via a CSW Transaction
    Insert,
    /// Harvest-by-reference: the catalog pulls and indexes the resource itself
    Harvest,
}

impl PublishMode {
    /// Map a publish-type form value to a mode.
    ///
    /// The exact literal `"Layer"` selects a direct insert; every other
    /// value selects a harvest.
    #[must_use]
    pub fn from_type(publish_type: &str) -> Self {
        if publish_type == "Layer" {
            Self::Insert
        } else {
            Self::Harvest
        }
    }
}

/// The field values read at the moment of a publish action.
///
/// Lives for one handler invocation; nothing is retained afterwards.
#[derive(Debug, Clone, Default)]
pub struct PublishForm {
    /// Publish-type discriminator ("Layer" inserts, anything else harvests)
    pub publish_type: String,
    /// Catalog resource type to harvest (harvest branch only)
    pub resource_type: String,
    /// URI of the external resource to harvest (harvest branch only)
    pub source: String,
    /// Catalog service endpoint to POST to
    pub endpoint: String,
    /// Pre-built metadata XML record (insert branch only)
    pub record_xml: String,
}

impl PublishForm {
    /// The mode selected by this form's publish type
    #[must_use]
    pub fn mode(&self) -> PublishMode {
        PublishMode::from_type(&self.publish_type)
    }
}

/// Inserted/updated/deleted counter texts from a `TransactionResponse`.
///
/// Counters the catalog omits stay empty rather than defaulting to zero,
/// so the rendered summary distinguishes "0" from "not reported".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionTotals {
    /// Text of `csw:totalInserted`
    pub inserted: String,
    /// Text of `csw:totalUpdated`
    pub updated: String,
    /// Text of `csw:totalDeleted`
    pub deleted: String,
}

impl std::fmt::Display for TransactionTotals {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "inserted: {} updated: {} deleted: {}",
            self.inserted, self.updated, self.deleted
        )
    }
}

/// Catalog-level outcome of one publish request.
///
/// A service exception is a completed HTTP exchange whose body reports an
/// error, so it is an outcome here rather than an [`Error`].
///
/// [`Error`]: crate::error::Error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishOutcome {
    /// The catalog accepted the request and reported transaction totals
    Success(TransactionTotals),
    /// The catalog reported an exception with the contained text
    ServiceException(String),
}

impl PublishOutcome {
    /// Whether the catalog accepted the request
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}
