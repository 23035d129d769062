//! Thin async client for the certification service.
//!
//! Every call resolves to `Result<_, String>`: the error is the text the user sees
//! in the blocking alert, either the service's response body or a transport error.

use common::model::account::Account;
use common::model::certification::{Certification, CertificationDraft};
use common::model::import::{ImportOutcome, ImportRow};
use common::requests::{CommitImportRequest, FileUrl, UploadedFile};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, File, FormData, HtmlAnchorElement, Url};

const CERTIFICATIONS: &str = "/api/certifications";
const IMPORT: &str = "/api/certifications/import";
const DRIVE: &str = "/api/drive";

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    let response = check(response).await?;
    response.json::<T>().await.map_err(|e| e.to_string())
}

async fn check(response: Response) -> Result<Response, String> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    match response.text().await {
        Ok(body) if !body.is_empty() => Err(body),
        _ => Err(format!("Request failed with status {}", status)),
    }
}

fn file_form(file: &File) -> Result<FormData, String> {
    let form = FormData::new().map_err(|_| "Could not prepare the upload".to_string())?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|_| "Could not prepare the upload".to_string())?;
    Ok(form)
}

pub async fn list_certifications() -> Result<Vec<Certification>, String> {
    let response = Request::get(CERTIFICATIONS)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_json(response).await
}

pub async fn list_accounts() -> Result<Vec<Account>, String> {
    let response = Request::get("/api/accounts")
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_json(response).await
}

pub async fn list_types() -> Result<Vec<String>, String> {
    let response = Request::get(&format!("{}/types", CERTIFICATIONS))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_json(response).await
}

pub async fn create_certification(draft: &CertificationDraft) -> Result<Certification, String> {
    let response = Request::post(CERTIFICATIONS)
        .json(draft)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_json(response).await
}

pub async fn update_certification(
    id: &str,
    changes: &Map<String, Value>,
) -> Result<Certification, String> {
    let response = Request::patch(&format!("{}/{}", CERTIFICATIONS, id))
        .json(changes)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_json(response).await
}

pub async fn delete_certification(id: &str) -> Result<(), String> {
    let response = Request::delete(&format!("{}/{}", CERTIFICATIONS, id))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    check(response).await.map(|_| ())
}

pub async fn upload_file(file: &File) -> Result<String, String> {
    let response = Request::post(&format!("{}/upload", DRIVE))
        .body(file_form(file)?)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_json::<UploadedFile>(response)
        .await
        .map(|uploaded| uploaded.file_id)
}

pub async fn file_url(file_id: &str) -> Result<String, String> {
    let response = Request::get(&format!("{}/url/{}", DRIVE, file_id))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_json::<FileUrl>(response).await.map(|found| found.url)
}

/// Fetches the pre-filled workbook and hands it to the browser as a download.
pub async fn download_template(file_name: &str) -> Result<(), String> {
    let response = Request::get(&format!("{}/template", IMPORT))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    let bytes = check(response)
        .await?
        .binary()
        .await
        .map_err(|e| e.to_string())?;
    save_bytes(&bytes, file_name)
}

pub async fn parse_import(file: &File) -> Result<Vec<ImportRow>, String> {
    let response = Request::post(&format!("{}/parse", IMPORT))
        .body(file_form(file)?)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_json(response).await
}

pub async fn commit_import(rows: Vec<ImportRow>) -> Result<ImportOutcome, String> {
    let response = Request::post(&format!("{}/commit", IMPORT))
        .json(&CommitImportRequest { rows })
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_json(response).await
}

fn save_bytes(bytes: &[u8], file_name: &str) -> Result<(), String> {
    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes));
    let options = BlobPropertyBag::new();
    options.set_type(
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    );
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(|_| "Could not build the download".to_string())?;
    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|_| "Could not build the download".to_string())?;

    let anchor = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.create_element("a").ok())
        .and_then(|e| e.dyn_into::<HtmlAnchorElement>().ok())
        .ok_or_else(|| "Could not start the download".to_string())?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();
    let _ = Url::revoke_object_url(&url);
    Ok(())
}
