//! Interactive form fill
//!
//! Prompting starts at the first field, in a fixed order, whose value is
//! still missing, and only asks for fields the selected publish mode
//! actually uses.

use csw_publish::config::DEFAULT_RESOURCE_TYPE;
use csw_publish::error::{Error, Result};
use csw_publish::types::{PublishForm, PublishMode};
use dialoguer::{Input, Select};

/// Publish types offered by the interactive selector
const PUBLISH_TYPES: [&str; 2] = ["Layer", "Service"];

/// Form fields in prompt order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    /// The publish-type discriminator
    PublishType,
    /// The catalog endpoint URL
    Endpoint,
    /// The harvest source URI
    Source,
    /// The harvest resource type
    ResourceType,
    /// The metadata record to insert
    RecordXml,
}

/// First field in prompt order that still needs a value for the form's
/// mode, or `None` when the form is complete.
#[must_use]
pub fn first_missing_field(form: &PublishForm) -> Option<FormField> {
    if form.publish_type.is_empty() {
        return Some(FormField::PublishType);
    }
    if form.endpoint.is_empty() {
        return Some(FormField::Endpoint);
    }
    match form.mode() {
        PublishMode::Harvest => {
            if form.source.is_empty() {
                return Some(FormField::Source);
            }
            if form.resource_type.is_empty() {
                return Some(FormField::ResourceType);
            }
        }
        PublishMode::Insert => {
            if form.record_xml.is_empty() {
                return Some(FormField::RecordXml);
            }
        }
    }
    None
}

/// Prompt for every missing field until the form is complete
pub fn fill_form(mut form: PublishForm) -> Result<PublishForm> {
    while let Some(field) = first_missing_field(&form) {
        match field {
            FormField::PublishType => {
                let idx = Select::new()
                    .with_prompt("Publish type")
                    .items(&PUBLISH_TYPES)
                    .default(0)
                    .interact()
                    .map_err(|e| Error::Internal(format!("failed to read selection: {e}")))?;
                form.publish_type = PUBLISH_TYPES[idx].to_string();
            }
            FormField::Endpoint => {
                form.endpoint = text_prompt("Catalog endpoint URL", None)?;
            }
            FormField::Source => {
                form.source = text_prompt("Source URI", None)?;
            }
            FormField::ResourceType => {
                form.resource_type = text_prompt("Resource type", Some(DEFAULT_RESOURCE_TYPE))?;
            }
            FormField::RecordXml => {
                let path = text_prompt("Metadata record file", None)?;
                form.record_xml = std::fs::read_to_string(path.trim())?;
            }
        }
    }
    Ok(form)
}

fn text_prompt(label: &str, default: Option<&str>) -> Result<String> {
    let mut input = Input::<String>::new().with_prompt(label);
    if let Some(value) = default {
        input = input.default(value.to_string());
    }
    input
        .interact_text()
        .map_err(|e| Error::Internal(format!("failed to read input: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_order_starts_at_publish_type() {
        let form = PublishForm::default();
        assert_eq!(first_missing_field(&form), Some(FormField::PublishType));
    }

    #[test]
    fn test_insert_form_needs_record_only() {
        let form = PublishForm {
            publish_type: "Layer".to_string(),
            endpoint: "http://example.com/csw".to_string(),
            ..PublishForm::default()
        };
        assert_eq!(first_missing_field(&form), Some(FormField::RecordXml));
    }

    #[test]
    fn test_harvest_form_needs_source_then_resource_type() {
        let mut form = PublishForm {
            publish_type: "Service".to_string(),
            endpoint: "http://example.com/csw".to_string(),
            ..PublishForm::default()
        };
        assert_eq!(first_missing_field(&form), Some(FormField::Source));

        form.source = "http://example.com/ows".to_string();
        assert_eq!(first_missing_field(&form), Some(FormField::ResourceType));

        form.resource_type = DEFAULT_RESOURCE_TYPE.to_string();
        assert_eq!(first_missing_field(&form), None);
    }

    #[test]
    fn test_complete_insert_form_has_no_missing_field() {
        let form = PublishForm {
            publish_type: "Layer".to_string(),
            endpoint: "http://example.com/csw".to_string(),
            record_xml: "<csw:Record/>".to_string(),
            ..PublishForm::default()
        };
        assert_eq!(first_missing_field(&form), None);
    }
}
