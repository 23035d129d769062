//! Update function for the import wizard. Step changes go through
//! `ImportWizard`, which ignores transitions that do not apply to the current
//! step.

use common::spreadsheet::template_file_name;
use gloo_console::log;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::helpers::{alert, confirm, format_count, show_toast, today};

use super::messages::Msg;
use super::state::ImportWizardView;

pub fn update(component: &mut ImportWizardView, ctx: &Context<ImportWizardView>, msg: Msg) -> bool {
    match msg {
        Msg::DownloadTemplate => {
            component.busy = true;
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = api::download_template(&template_file_name(today())).await;
                link.send_message(Msg::TemplateDownloaded(result));
            });
            true
        }
        Msg::TemplateDownloaded(result) => {
            component.busy = false;
            if let Err(e) = result {
                alert(&format!("Could not generate the template: {}", e));
            }
            true
        }
        Msg::FileSelected(file) => {
            component.busy = true;
            let link = ctx.link().clone();
            spawn_local(async move {
                link.send_message(Msg::Parsed(api::parse_import(&file).await));
            });
            true
        }
        Msg::Parsed(result) => {
            component.busy = false;
            match result {
                Ok(rows) => component.wizard.parse_succeeded(rows),
                Err(e) => {
                    alert(&format!("Could not read the spreadsheet: {}", e));
                    component.wizard.parse_failed(e);
                }
            }
            true
        }
        Msg::ReplaceFile => {
            component.wizard.replace_file();
            true
        }
        Msg::Confirm => {
            let valid = component.wizard.valid_count();
            if component.busy || valid == 0 {
                return false;
            }
            if !confirm(&format!("Import {} certification(s)?", format_count(valid))) {
                return false;
            }

            component.busy = true;
            let rows = component.wizard.rows().to_vec();
            let link = ctx.link().clone();
            spawn_local(async move {
                link.send_message(Msg::Committed(api::commit_import(rows).await));
            });
            true
        }
        Msg::Committed(result) => {
            component.busy = false;
            match result {
                Ok(outcome) => {
                    log!(format!(
                        "import committed {} of {} rows",
                        outcome.created, outcome.submitted
                    ));
                    component.created_any |= outcome.created > 0;
                    match outcome.failure {
                        None => {
                            component.wizard.commit_succeeded();
                            show_toast(&format!(
                                "Imported {} certification(s).",
                                format_count(outcome.created)
                            ));
                            ctx.props().on_finished.emit(true);
                        }
                        Some(failure) => {
                            alert(&format!(
                                "Import stopped at row {}: {}. {} of {} valid row(s) were created; the preview now starts at the failed row.",
                                failure.row_index + 1,
                                failure.message,
                                outcome.created,
                                outcome.submitted
                            ));
                            component.wizard.commit_stopped_at(failure.row_index);
                        }
                    }
                }
                Err(e) => alert(&format!("Import failed: {}", e)),
            }
            true
        }
        Msg::Close => {
            component.wizard.close();
            ctx.props().on_finished.emit(component.created_any);
            false
        }
    }
}
