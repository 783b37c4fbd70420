//! csw-publish - CSW catalog publishing client
//!
//! Builds CSW 2.0.2 `Harvest` and `Transaction`/`Insert` request bodies
//! from a [`types::PublishForm`], delivers them to a catalog endpoint
//! through the [`catalog::CatalogService`] seam, and interprets the XML
//! response into a [`types::PublishOutcome`].

pub mod catalog;
pub mod config;
pub mod error;
pub mod publish;
pub mod request;
pub mod response;
pub mod types;
