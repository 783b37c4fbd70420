//! CSW request body construction
//!
//! Pure builders for the two request envelopes the client emits. Both are
//! deterministic and total over string inputs; neither performs schema
//! validation.

use quick_xml::escape::escape;

/// Namespace shared by both CSW 2.0.2 request envelopes
pub const CSW_NAMESPACE: &str = "http://www.opengis.net/cat/csw/2.0.2";

/// Build a CSW 2.0.2 `Harvest` request body.
///
/// Wraps the two inputs in the fixed envelope, `Source` first, then
/// `ResourceType`. Text content is XML-escaped before insertion, so a
/// source URI containing `&` still yields well-formed XML.
#[must_use]
pub fn build_harvest_request(resource_type: &str, source: &str) -> String {
    format!(
        "<Harvest service=\"CSW\" version=\"2.0.2\" xmlns=\"{CSW_NAMESPACE}\">\
         <Source>{}</Source>\
         <ResourceType>{}</ResourceType>\
         </Harvest>",
        escape(source),
        escape(resource_type),
    )
}

/// Build a CSW 2.0.2 `Transaction`/`Insert` request body.
///
/// The supplied fragment is a pre-built metadata record and is inserted
/// byte-for-byte between the `Insert` tags. Its well-formedness is the
/// caller's responsibility.
#[must_use]
pub fn build_insert_request(record_xml: &str) -> String {
    format!(
        "<Transaction service=\"CSW\" version=\"2.0.2\" xmlns=\"{CSW_NAMESPACE}\">\
         <Insert>{record_xml}</Insert>\
         </Transaction>"
    )
}
