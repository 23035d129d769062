//! Update function for the edit form.

use common::sanitize::blank_to_none;
use common::ui::form::Submission;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::helpers::alert;

use super::messages::Msg;
use super::state::CertificationForm;

/// Delay before a blurred type field closes its dropdown, so a click on a
/// suggestion still lands.
const DISMISS_DELAY_MS: u32 = 150;

pub fn update(component: &mut CertificationForm, ctx: &Context<CertificationForm>, msg: Msg) -> bool {
    match msg {
        Msg::AccountsLoaded(accounts) => {
            component.accounts = accounts;
            true
        }
        Msg::TypesLoaded(types) => {
            component.suggestions.set_known(types);
            true
        }
        Msg::LoadFailed(message) => {
            alert(&format!("Could not load form data: {}", message));
            false
        }
        Msg::SetAccount(id) => {
            component.form.draft.account_id = blank_to_none(Some(id));
            true
        }
        Msg::SetType(value) => {
            component.form.draft.cert_type = Some(value);
            component.suggestions.open();
            true
        }
        Msg::TypeFocused => {
            component.suggestions.open();
            true
        }
        Msg::TypeBlurred => {
            let link = ctx.link().clone();
            spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(DISMISS_DELAY_MS).await;
                link.send_message(Msg::DismissSuggestions);
            });
            false
        }
        Msg::DismissSuggestions => {
            let was_open = component.suggestions.is_open();
            component.suggestions.dismiss();
            was_open
        }
        Msg::PickType(value) => {
            component.form.draft.cert_type = Some(component.suggestions.select(&value));
            true
        }
        Msg::SetName(value) => {
            component.form.draft.cert_name = Some(value);
            true
        }
        Msg::SetCertDate(value) => {
            component.form.set_cert_date(&value);
            true
        }
        Msg::SetNotes(value) => {
            component.form.draft.notes = Some(value);
            true
        }
        Msg::FileSelected(file) => {
            component.uploading = true;
            let link = ctx.link().clone();
            spawn_local(async move {
                match api::upload_file(&file).await {
                    Ok(file_id) => link.send_message(Msg::FileUploaded(file_id)),
                    Err(e) => link.send_message(Msg::UploadFailed(e)),
                }
            });
            true
        }
        Msg::FileUploaded(file_id) => {
            component.uploading = false;
            component.form.draft.file_id = Some(file_id);
            true
        }
        Msg::UploadFailed(message) => {
            component.uploading = false;
            alert(&format!("Upload failed: {}", message));
            true
        }
        Msg::ClearFile => {
            component.form.draft.file_id = None;
            true
        }
        Msg::Submit => {
            if component.saving || component.uploading {
                return false;
            }
            let submission = match component.form.submission() {
                Ok(submission) => submission,
                Err(warning) => {
                    alert(&warning);
                    return false;
                }
            };

            component.saving = true;
            let link = ctx.link().clone();
            spawn_local(async move {
                let saved = match submission {
                    Submission::Create(draft) => api::create_certification(&draft).await,
                    Submission::Update { id, changes } => {
                        api::update_certification(&id, &changes).await
                    }
                };
                match saved {
                    Ok(record) => link.send_message(Msg::Saved(record)),
                    Err(e) => link.send_message(Msg::SaveFailed(e)),
                }
            });
            true
        }
        Msg::Saved(record) => {
            component.saving = false;
            ctx.props().on_saved.emit(record);
            false
        }
        Msg::SaveFailed(message) => {
            component.saving = false;
            alert(&format!("Could not save the certification: {}", message));
            true
        }
    }
}
