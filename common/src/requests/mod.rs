use serde::{Deserialize, Serialize};

use crate::model::import::ImportRow;

/// Request payload for the import commit endpoint.
/// Carries every previewed row; invalid ones are skipped server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitImportRequest {
    pub rows: Vec<ImportRow>,
}

/// Response of the drive upload endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadedFile {
    pub file_id: String,
}

/// Response of the drive URL lookup endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileUrl {
    pub url: String,
}
