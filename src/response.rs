//! CSW response interpretation
//!
//! Scans a catalog response body for an exception indicator and the
//! transaction totals. Element names are matched by local name, so both
//! `ows:`- and `csw:`-prefixed vocabularies are recognized regardless of
//! the prefix the server chose.

use crate::error::{Error, Result};
use crate::types::{PublishOutcome, TransactionTotals};
use quick_xml::Reader;
use quick_xml::events::Event;

/// Element whose text is currently being collected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Exception,
    Inserted,
    Updated,
    Deleted,
}

impl Slot {
    fn from_local_name(name: &[u8]) -> Option<Self> {
        match name {
            b"ExceptionText" => Some(Self::Exception),
            b"totalInserted" => Some(Self::Inserted),
            b"totalUpdated" => Some(Self::Updated),
            b"totalDeleted" => Some(Self::Deleted),
            _ => None,
        }
    }
}

/// Interpret a catalog response body.
///
/// A non-empty `ows:ExceptionText` marks the outcome as a service
/// exception carrying that text. Otherwise the three totals are read from
/// the `csw:total*` elements, defaulting to empty when absent.
pub fn interpret_response(xml: &str) -> Result<PublishOutcome> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut buf = Vec::new();
    let mut totals = TransactionTotals::default();
    let mut exception = String::new();
    let mut slot: Option<Slot> = None;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                slot = Slot::from_local_name(e.local_name().as_ref());
            }
            Ok(Event::Text(t)) => {
                if let Some(active) = slot {
                    let text = t
                        .unescape()
                        .map_err(|e| Error::XmlParse(e.to_string()))?;
                    let target = match active {
                        Slot::Exception => &mut exception,
                        Slot::Inserted => &mut totals.inserted,
                        Slot::Updated => &mut totals.updated,
                        Slot::Deleted => &mut totals.deleted,
                    };
                    target.push_str(&text);
                }
            }
            Ok(Event::End(_)) => {
                slot = None;
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(Error::XmlParse(e.to_string())),
            _ => {}
        }
        buf.clear();
    }

    if exception.is_empty() {
        Ok(PublishOutcome::Success(totals))
    } else {
        Ok(PublishOutcome::ServiceException(exception))
    }
}
