//! Working copy held by the single-record edit form.

use chrono::NaiveDate;
use serde_json::{Map, Value};

use crate::model::certification::{Certification, CertificationDraft};
use crate::sanitize::{sanitize_payload, UPDATABLE_FIELDS};

#[derive(Debug, Clone, PartialEq)]
pub enum FormMode {
    Create,
    Edit { id: String },
}

/// What the form does on submit once the draft passes its check.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    Create(CertificationDraft),
    Update { id: String, changes: Map<String, Value> },
}

#[derive(Debug, Clone, PartialEq)]
pub struct EditForm {
    mode: FormMode,
    pub draft: CertificationDraft,
}

impl EditForm {
    pub fn create() -> Self {
        Self {
            mode: FormMode::Create,
            draft: CertificationDraft::default(),
        }
    }

    pub fn edit(record: &Certification) -> Self {
        Self {
            mode: FormMode::Edit {
                id: record.id.clone(),
            },
            draft: CertificationDraft::from(record),
        }
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, FormMode::Edit { .. })
    }

    pub fn set_cert_date(&mut self, raw: &str) {
        self.draft.cert_date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok();
    }

    /// Only the employee is checked here; everything else is left to the service.
    pub fn submission(&self) -> Result<Submission, String> {
        if self
            .draft
            .account_id
            .as_deref()
            .map_or(true, |id| id.trim().is_empty())
        {
            return Err("Please select an employee".to_string());
        }

        match &self.mode {
            FormMode::Create => Ok(Submission::Create(self.draft.clone().sanitize())),
            FormMode::Edit { id } => {
                let mut changes = match serde_json::to_value(&self.draft) {
                    Ok(Value::Object(map)) => map,
                    _ => Map::new(),
                };
                changes.retain(|key, _| UPDATABLE_FIELDS.contains(&key.as_str()));
                Ok(Submission::Update {
                    id: id.clone(),
                    changes: sanitize_payload(changes),
                })
            }
        }
    }
}
