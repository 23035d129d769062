//! Update function for the certification list view.
//!
//! Remote calls run in `spawn_local` and report back through messages. Failures
//! end in a blocking alert and leave the list untouched.

use gloo_console::error;
use serde_json::{Map, Value};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::helpers::{alert, confirm, show_toast};

use super::messages::Msg;
use super::state::{CertificationListView, Overlay};

pub fn update(
    component: &mut CertificationListView,
    ctx: &Context<CertificationListView>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::Load => {
            component.loading = true;
            let link = ctx.link().clone();
            spawn_local(async move {
                match api::list_certifications().await {
                    Ok(records) => link.send_message(Msg::Loaded(records)),
                    Err(e) => link.send_message(Msg::LoadFailed(e)),
                }
            });
            true
        }
        Msg::Loaded(records) => {
            component.list = common::ui::list::CertificationList::new(records);
            component.loading = false;
            true
        }
        Msg::LoadFailed(message) => {
            component.loading = false;
            error!("certification list load failed:", message.clone());
            alert(&format!("Could not load certifications: {}", message));
            true
        }
        Msg::SetQuery(query) => {
            component.query = query;
            true
        }
        Msg::OpenCreate => {
            component.overlay = Overlay::Form(None);
            true
        }
        Msg::OpenEdit(record) => {
            component.overlay = Overlay::Form(Some(record));
            true
        }
        Msg::OpenImport => {
            component.overlay = Overlay::Import;
            true
        }
        Msg::CloseOverlay => {
            component.overlay = Overlay::None;
            true
        }
        Msg::Saved(record) => {
            component.list.upsert(record);
            component.overlay = Overlay::None;
            show_toast("Certification saved.");
            true
        }
        Msg::ImportFinished { created_any } => {
            component.overlay = Overlay::None;
            if created_any {
                ctx.link().send_message(Msg::Load);
            }
            true
        }
        Msg::Delete(id) => {
            if !confirm("Delete this certification? This cannot be undone.") {
                return false;
            }
            let link = ctx.link().clone();
            spawn_local(async move {
                match api::delete_certification(&id).await {
                    Ok(()) => link.send_message(Msg::Deleted(id)),
                    Err(e) => link.send_message(Msg::ActionFailed(format!(
                        "Could not delete the certification: {}",
                        e
                    ))),
                }
            });
            false
        }
        Msg::Deleted(id) => component.list.remove(&id),
        Msg::AttachFile { id, file } => {
            component.uploading = Some(id.clone());
            let link = ctx.link().clone();
            spawn_local(async move {
                let file_id = match api::upload_file(&file).await {
                    Ok(file_id) => file_id,
                    Err(e) => {
                        link.send_message(Msg::ActionFailed(format!("Upload failed: {}", e)));
                        return;
                    }
                };
                let mut changes = Map::new();
                changes.insert("file_id".to_string(), Value::String(file_id));
                match api::update_certification(&id, &changes).await {
                    Ok(record) => link.send_message(Msg::Attached(record)),
                    Err(e) => link.send_message(Msg::ActionFailed(format!(
                        "The file was uploaded but could not be linked: {}",
                        e
                    ))),
                }
            });
            true
        }
        Msg::Attached(record) => {
            component.uploading = None;
            component.list.upsert(record);
            show_toast("File attached.");
            true
        }
        Msg::ViewFile(file_id) => {
            let link = ctx.link().clone();
            spawn_local(async move {
                match api::file_url(&file_id).await {
                    Ok(url) => {
                        if let Some(window) = web_sys::window() {
                            let _ = window.open_with_url_and_target(&url, "_blank");
                        }
                    }
                    Err(e) => link.send_message(Msg::ActionFailed(format!(
                        "Could not open the file: {}",
                        e
                    ))),
                }
            });
            false
        }
        Msg::ActionFailed(message) => {
            component.uploading = None;
            error!(message.clone());
            alert(&message);
            true
        }
    }
}
