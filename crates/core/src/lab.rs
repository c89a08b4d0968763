//! Laboratory transfer record.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::CoreError;
use crate::types::DbId;
use crate::validation::{self, not_blank};

/// A laboratory as it crosses the API boundary.
///
/// Required fields are modelled as `Option` so a missing value surfaces as a
/// `required` validation issue instead of a deserialization failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LabRecord {
    #[validate(required(message = "id is required"))]
    pub id: Option<DbId>,

    #[validate(required(message = "name is required"), custom(function = "not_blank"))]
    pub name: Option<String>,

    #[validate(required(message = "code is required"), custom(function = "not_blank"))]
    pub code: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl LabRecord {
    /// Run the declared rules, mapping failure to [`CoreError::Validation`].
    pub fn validate_record(&self) -> Result<(), CoreError> {
        validation::check(self).map_err(CoreError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> LabRecord {
        LabRecord {
            id: Some(7),
            name: Some("Electronics Lab".into()),
            code: Some("EL-01".into()),
            image_url: None,
        }
    }

    #[test]
    fn complete_record_is_valid() {
        assert!(valid().validate_record().is_ok());
    }

    #[test]
    fn image_url_is_optional() {
        let lab = LabRecord {
            image_url: Some("https://cdn.example.com/el.png".into()),
            ..valid()
        };
        assert!(lab.validate_record().is_ok());
    }

    #[test]
    fn missing_id_is_flagged() {
        let lab = LabRecord { id: None, ..valid() };
        let report = validation::check(&lab).unwrap_err();
        assert_eq!(report.fields(), vec!["id"]);
        assert!(report.has_issue("id", "required"));
    }

    #[test]
    fn missing_name_is_flagged() {
        let lab = LabRecord { name: None, ..valid() };
        assert!(validation::check(&lab).unwrap_err().has_issue("name", "required"));
    }

    #[test]
    fn missing_code_is_flagged() {
        let lab = LabRecord { code: None, ..valid() };
        assert!(validation::check(&lab).unwrap_err().has_issue("code", "required"));
    }

    #[test]
    fn blank_name_is_flagged() {
        let lab = LabRecord {
            name: Some("  ".into()),
            ..valid()
        };
        let report = validation::check(&lab).unwrap_err();
        assert!(report.has_issue("name", "blank"));
        assert_eq!(report.issues()[0].message, "must not be blank");
    }

    #[test]
    fn empty_record_reports_every_required_field() {
        let report = validation::check(&LabRecord::default()).unwrap_err();
        assert_eq!(report.fields(), vec!["code", "id", "name"]);
    }

    #[test]
    fn deserializes_camel_case_and_tolerates_missing_fields() {
        let lab: LabRecord =
            serde_json::from_str(r#"{"name":"Chem","imageUrl":"https://x/y.png"}"#).unwrap();
        assert_eq!(lab.name.as_deref(), Some("Chem"));
        assert_eq!(lab.image_url.as_deref(), Some("https://x/y.png"));
        assert!(lab.id.is_none());
        assert!(lab.validate_record().is_err());
    }
}
