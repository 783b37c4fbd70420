//! Canned CSW payloads and form builders shared across tests

#![allow(dead_code)]

use csw_publish::types::PublishForm;

/// A `TransactionResponse` reporting 3 inserts and 1 delete
pub const TRANSACTION_SUCCESS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<csw:TransactionResponse xmlns:csw="http://www.opengis.net/cat/csw/2.0.2" version="2.0.2">
  <csw:TransactionSummary>
    <csw:totalInserted>3</csw:totalInserted>
    <csw:totalUpdated>0</csw:totalUpdated>
    <csw:totalDeleted>1</csw:totalDeleted>
  </csw:TransactionSummary>
</csw:TransactionResponse>"#;

/// A `HarvestResponse` wrapping a single-insert transaction summary
pub const HARVEST_SUCCESS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<csw:HarvestResponse xmlns:csw="http://www.opengis.net/cat/csw/2.0.2">
  <csw:TransactionResponse>
    <csw:TransactionSummary>
      <csw:totalInserted>1</csw:totalInserted>
      <csw:totalUpdated>0</csw:totalUpdated>
      <csw:totalDeleted>0</csw:totalDeleted>
    </csw:TransactionSummary>
  </csw:TransactionResponse>
</csw:HarvestResponse>"#;

/// An `ows:ExceptionReport` with a single exception text
pub const EXCEPTION_REPORT: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<ows:ExceptionReport xmlns:ows="http://www.opengis.net/ows" version="1.2.0">
  <ows:Exception exceptionCode="NoApplicableCode">
    <ows:ExceptionText>bad query</ows:ExceptionText>
  </ows:Exception>
</ows:ExceptionReport>"#;

/// A minimal Dublin Core metadata record fragment
pub const SAMPLE_RECORD: &str = r#"<csw:Record xmlns:csw="http://www.opengis.net/cat/csw/2.0.2" xmlns:dc="http://purl.org/dc/elements/1.1/"><dc:identifier>airports-osm</dc:identifier><dc:title>Airports (OSM)</dc:title></csw:Record>"#;

/// Form for a direct metadata insert
pub fn layer_form(endpoint: &str) -> PublishForm {
    PublishForm {
        publish_type: "Layer".to_string(),
        endpoint: endpoint.to_string(),
        record_xml: SAMPLE_RECORD.to_string(),
        ..PublishForm::default()
    }
}

/// Form for a harvest-by-reference publish
pub fn service_form(endpoint: &str) -> PublishForm {
    PublishForm {
        publish_type: "Service".to_string(),
        resource_type: "http://www.opengis.net/wms".to_string(),
        source: "http://example.com/ows?service=WMS".to_string(),
        endpoint: endpoint.to_string(),
        ..PublishForm::default()
    }
}
