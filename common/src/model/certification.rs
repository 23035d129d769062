use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::account::AccountRef;
use crate::sanitize::blank_to_none;

/// A stored certification entry linked to one employee.
///
/// `account_id`, `cert_type`, `cert_name` and `cert_date` are always present on a
/// stored record. Optional fields are `None` (JSON `null`), never an empty string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    pub id: String,
    pub account_id: String,
    pub entry_date: Option<NaiveDate>,
    pub cert_type: String,
    pub cert_name: String,
    pub cert_date: NaiveDate,
    pub file_id: Option<String>,
    pub notes: Option<String>,
    /// Employee display fields, filled by listing queries that join `accounts`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account: Option<AccountRef>,
}

impl Certification {
    pub fn employee_name(&self) -> Option<&str> {
        self.account.as_ref().and_then(|a| a.full_name.as_deref())
    }

    pub fn employee_nik(&self) -> Option<&str> {
        self.account.as_ref().and_then(|a| a.internal_nik.as_deref())
    }
}

/// Input for `create`, also the working copy held by the edit form.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CertificationDraft {
    pub account_id: Option<String>,
    pub entry_date: Option<NaiveDate>,
    pub cert_type: Option<String>,
    pub cert_name: Option<String>,
    pub cert_date: Option<NaiveDate>,
    pub file_id: Option<String>,
    pub notes: Option<String>,
}

impl CertificationDraft {
    /// Replaces every empty-string field with `None`. Other values are kept as-is.
    pub fn sanitize(self) -> Self {
        Self {
            account_id: blank_to_none(self.account_id),
            entry_date: self.entry_date,
            cert_type: blank_to_none(self.cert_type),
            cert_name: blank_to_none(self.cert_name),
            cert_date: self.cert_date,
            file_id: blank_to_none(self.file_id),
            notes: blank_to_none(self.notes),
        }
    }

    /// Names of the required fields that are still missing.
    pub fn missing_required(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.account_id.is_none() {
            missing.push("account_id");
        }
        if self.cert_type.is_none() {
            missing.push("cert_type");
        }
        if self.cert_name.is_none() {
            missing.push("cert_name");
        }
        if self.cert_date.is_none() {
            missing.push("cert_date");
        }
        missing
    }
}

impl From<&Certification> for CertificationDraft {
    fn from(record: &Certification) -> Self {
        Self {
            account_id: Some(record.account_id.clone()),
            entry_date: record.entry_date,
            cert_type: Some(record.cert_type.clone()),
            cert_name: Some(record.cert_name.clone()),
            cert_date: Some(record.cert_date),
            file_id: record.file_id.clone(),
            notes: record.notes.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_turns_empty_strings_into_none() {
        let draft = CertificationDraft {
            account_id: Some("acc-1".into()),
            cert_type: Some(String::new()),
            cert_name: Some("First Aid".into()),
            file_id: Some(String::new()),
            notes: None,
            ..Default::default()
        }
        .sanitize();

        assert_eq!(draft.account_id.as_deref(), Some("acc-1"));
        assert_eq!(draft.cert_type, None);
        assert_eq!(draft.cert_name.as_deref(), Some("First Aid"));
        assert_eq!(draft.file_id, None);
        assert_eq!(draft.notes, None);
    }

    #[test]
    fn sanitize_keeps_whitespace_values_untouched() {
        let draft = CertificationDraft {
            notes: Some("  see attachment ".into()),
            ..Default::default()
        }
        .sanitize();
        assert_eq!(draft.notes.as_deref(), Some("  see attachment "));
    }

    #[test]
    fn sanitized_draft_serializes_missing_fields_as_null() {
        let draft = CertificationDraft {
            cert_name: Some(String::new()),
            ..Default::default()
        }
        .sanitize();
        let json = serde_json::to_value(&draft).unwrap();
        assert!(json["cert_name"].is_null());
        assert!(json["notes"].is_null());
        assert!(json["file_id"].is_null());
    }

    #[test]
    fn missing_required_lists_every_absent_field() {
        let draft = CertificationDraft {
            cert_name: Some("Forklift".into()),
            ..Default::default()
        };
        assert_eq!(
            draft.missing_required(),
            vec!["account_id", "cert_type", "cert_date"]
        );
    }
}
