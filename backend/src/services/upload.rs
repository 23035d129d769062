use crate::error::ServiceError;
use actix_multipart::Multipart;
use futures_util::StreamExt;

/// The `file` part of a multipart upload, fully buffered.
pub struct FilePart {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Reads the first multipart field named `file`, refusing anything larger than
/// `max_bytes`. Other fields are skipped.
pub async fn read_file_part(
    mut payload: Multipart,
    max_bytes: usize,
) -> Result<FilePart, ServiceError> {
    while let Some(item) = payload.next().await {
        let mut field = item?;
        let field_name = field
            .content_disposition()
            .and_then(|cd| cd.get_name().map(|n| n.to_string()));
        if field_name.as_deref() != Some("file") {
            continue;
        }

        let file_name = field
            .content_disposition()
            .and_then(|cd| cd.get_filename().map(|f| f.to_string()))
            .unwrap_or_default();

        let mut bytes = Vec::new();
        while let Some(chunk) = field.next().await {
            let chunk = chunk?;
            if bytes.len() + chunk.len() > max_bytes {
                return Err(ServiceError::Validation(format!(
                    "file exceeds the {} byte upload limit",
                    max_bytes
                )));
            }
            bytes.extend_from_slice(&chunk);
        }
        return Ok(FilePart { file_name, bytes });
    }
    Err(ServiceError::Validation("missing file field".to_string()))
}
