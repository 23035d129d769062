use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::certification::CertificationDraft;
use crate::spreadsheet::extract_drive_file_id;

/// One parsed spreadsheet row, held only while the import preview is open.
///
/// Carries the certification fields plus the employee display fields from the
/// template, so the preview can show who each row belongs to.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ImportRow {
    pub account_id: Option<String>,
    pub nik: Option<String>,
    pub full_name: Option<String>,
    pub cert_type: Option<String>,
    pub cert_name: Option<String>,
    pub cert_date: Option<NaiveDate>,
    pub notes: Option<String>,
    pub drive_link: Option<String>,
    pub is_valid: bool,
}

impl ImportRow {
    /// Recomputes `is_valid`: employee, category, title and a resolved date must
    /// all be present.
    pub fn validated(mut self) -> Self {
        self.is_valid = has_text(&self.account_id)
            && has_text(&self.cert_type)
            && has_text(&self.cert_name)
            && self.cert_date.is_some();
        self
    }

    /// Builds the create payload for this row. The drive reference comes from the
    /// optional link column.
    pub fn to_draft(&self, entry_date: NaiveDate) -> CertificationDraft {
        CertificationDraft {
            account_id: self.account_id.clone(),
            entry_date: Some(entry_date),
            cert_type: self.cert_type.clone(),
            cert_name: self.cert_name.clone(),
            cert_date: self.cert_date,
            file_id: self.drive_link.as_deref().and_then(extract_drive_file_id),
            notes: self.notes.clone(),
        }
    }
}

fn has_text(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.is_empty())
}

/// Result of committing an import batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportOutcome {
    /// Valid rows considered for commit.
    pub submitted: usize,
    pub created: usize,
    pub failure: Option<ImportFailure>,
}

/// The row that stopped a commit. `row_index` is the position in the submitted
/// row list (including invalid rows).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportFailure {
    pub row_index: usize,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_row() -> ImportRow {
        ImportRow {
            account_id: Some("acc-7".into()),
            nik: Some("NIK-007".into()),
            full_name: Some("Dewi Lestari".into()),
            cert_type: Some("Safety".into()),
            cert_name: Some("K3 Umum".into()),
            cert_date: NaiveDate::from_ymd_opt(2024, 3, 1),
            ..Default::default()
        }
    }

    #[test]
    fn complete_row_is_valid() {
        assert!(complete_row().validated().is_valid);
    }

    #[test]
    fn row_missing_category_is_invalid() {
        let row = ImportRow {
            cert_type: None,
            ..complete_row()
        };
        assert!(!row.validated().is_valid);

        let row = ImportRow {
            cert_type: Some(String::new()),
            ..complete_row()
        };
        assert!(!row.validated().is_valid);
    }

    #[test]
    fn row_without_resolved_date_is_invalid() {
        let row = ImportRow {
            cert_date: None,
            ..complete_row()
        };
        assert!(!row.validated().is_valid);
    }

    #[test]
    fn display_fields_do_not_affect_validity() {
        let row = ImportRow {
            nik: None,
            full_name: None,
            ..complete_row()
        };
        assert!(row.validated().is_valid);
    }

    #[test]
    fn draft_takes_drive_id_from_link_and_given_entry_date() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
        let row = ImportRow {
            drive_link: Some(
                "https://drive.google.com/file/d/1AbCdEfGhIjKlMnOpQrStUvWxYz1234567/view".into(),
            ),
            notes: Some("renewed".into()),
            ..complete_row()
        };

        let draft = row.to_draft(today);
        assert_eq!(draft.entry_date, Some(today));
        assert_eq!(
            draft.file_id.as_deref(),
            Some("1AbCdEfGhIjKlMnOpQrStUvWxYz1234567")
        );
        assert_eq!(draft.notes.as_deref(), Some("renewed"));
    }
}
