//! File storage behind certification attachments.
//!
//! Records only keep an opaque drive reference. `DriveStorage` resolves that
//! reference to a viewable URL; `LocalDrive` keeps uploads on disk and falls back to
//! an external viewer link for ids that came from imported share links.

use crate::error::ServiceError;
use common::spreadsheet::is_drive_file_id;
use log::info;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub trait DriveStorage: Send + Sync {
    /// Stores `bytes` and returns the new file id.
    fn upload(&self, file_name: &str, bytes: &[u8]) -> Result<String, ServiceError>;

    /// URL under which the file can be opened.
    fn file_url(&self, file_id: &str) -> Result<String, ServiceError>;

    /// The locally stored file, if this storage holds it.
    fn local_file(&self, file_id: &str) -> Result<Option<LocalFile>, ServiceError>;
}

/// A stored upload plus the name it was uploaded under, used for its content type.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalFile {
    pub path: PathBuf,
    pub file_name: String,
}

/// Uploads live at `<root>/<id>`; the original file name sits next to it in
/// `<root>/<id>.name`.
pub struct LocalDrive {
    root: PathBuf,
    link_template: String,
}

impl LocalDrive {
    pub fn new(root: impl Into<PathBuf>, link_template: impl Into<String>) -> Result<Self, ServiceError> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self {
            root,
            link_template: link_template.into(),
        })
    }

    fn content_path(&self, file_id: &str) -> PathBuf {
        self.root.join(file_id)
    }

    fn name_path(&self, file_id: &str) -> PathBuf {
        self.root.join(format!("{}.name", file_id))
    }
}

/// Last path component of the client-supplied name, if any.
fn base_name(file_name: &str) -> Option<&str> {
    Path::new(file_name)
        .file_name()
        .and_then(|n| n.to_str())
        .map(str::trim)
        .filter(|n| !n.is_empty())
}

fn check_id(file_id: &str) -> Result<(), ServiceError> {
    if is_drive_file_id(file_id) {
        Ok(())
    } else {
        Err(ServiceError::Validation(format!("invalid file id: {}", file_id)))
    }
}

impl DriveStorage for LocalDrive {
    fn upload(&self, file_name: &str, bytes: &[u8]) -> Result<String, ServiceError> {
        if bytes.is_empty() {
            return Err(ServiceError::Validation("uploaded file is empty".to_string()));
        }
        // Content hash doubles as the id: 32 hex chars fit the drive id pattern.
        let file_id = format!("{:x}", md5::compute(bytes));
        fs::write(self.content_path(&file_id), bytes)?;
        if let Some(name) = base_name(file_name) {
            fs::write(self.name_path(&file_id), name)?;
        }
        info!("Stored drive file {} ({} bytes)", file_id, bytes.len());
        Ok(file_id)
    }

    fn file_url(&self, file_id: &str) -> Result<String, ServiceError> {
        check_id(file_id)?;
        if self.content_path(file_id).is_file() {
            Ok(format!("/api/drive/files/{}", file_id))
        } else {
            Ok(self.link_template.replace("{id}", file_id))
        }
    }

    fn local_file(&self, file_id: &str) -> Result<Option<LocalFile>, ServiceError> {
        check_id(file_id)?;
        let path = self.content_path(file_id);
        if !path.is_file() {
            return Ok(None);
        }
        let file_name = match fs::read_to_string(self.name_path(file_id)) {
            Ok(name) => name,
            Err(e) if e.kind() == ErrorKind::NotFound => file_id.to_string(),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(LocalFile { path, file_name }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEMPLATE: &str = "https://drive.google.com/file/d/{id}/view";

    #[test]
    fn upload_names_file_after_content_hash() {
        let dir = tempfile::tempdir().unwrap();
        let drive = LocalDrive::new(dir.path(), TEMPLATE).unwrap();

        let id = drive.upload("scans/certificate.PDF", b"%PDF-1.4 test").unwrap();
        assert_eq!(id, format!("{:x}", md5::compute(b"%PDF-1.4 test")));
        assert_eq!(
            drive.local_file(&id).unwrap(),
            Some(LocalFile {
                path: dir.path().join(&id),
                file_name: "certificate.PDF".into(),
            })
        );
        assert_eq!(drive.file_url(&id).unwrap(), format!("/api/drive/files/{}", id));
    }

    #[test]
    fn unknown_ids_resolve_to_external_viewer() {
        let dir = tempfile::tempdir().unwrap();
        let drive = LocalDrive::new(dir.path(), TEMPLATE).unwrap();
        assert_eq!(
            drive.file_url("1AbCdEfGhIjKlMnOpQrStUvWxYz1234567").unwrap(),
            "https://drive.google.com/file/d/1AbCdEfGhIjKlMnOpQrStUvWxYz1234567/view"
        );
    }

    #[test]
    fn rejects_ids_that_are_not_drive_ids() {
        let dir = tempfile::tempdir().unwrap();
        let drive = LocalDrive::new(dir.path(), TEMPLATE).unwrap();
        assert!(matches!(
            drive.local_file("../secret"),
            Err(ServiceError::Validation(_))
        ));
    }

    #[test]
    fn empty_upload_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let drive = LocalDrive::new(dir.path(), TEMPLATE).unwrap();
        assert!(drive.upload("empty.pdf", b"").is_err());
    }

    #[test]
    fn lookup_ignores_unrelated_files_in_the_drive() {
        let dir = tempfile::tempdir().unwrap();
        let drive = LocalDrive::new(dir.path(), TEMPLATE).unwrap();
        let id = drive.upload("", b"no name given").unwrap();
        let other = format!("{:x}", md5::compute(b"someone else"));
        fs::write(dir.path().join(format!("{}.pdf", other)), b"someone else").unwrap();

        let found = drive.local_file(&id).unwrap().unwrap();
        assert_eq!(found.file_name, id);
        assert_eq!(drive.local_file(&other).unwrap(), None);
    }
}
