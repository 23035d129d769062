//! Wizard layout: the upload step and the preview table, inside a wide sheet.

use common::model::import::ImportRow;
use common::ui::wizard::WizardStep;
use web_sys::Event;
use yew::html::Scope;
use yew::prelude::*;

use crate::components::sheet::Sheet;
use crate::helpers::{format_count, format_date, take_selected_file};

use super::messages::Msg;
use super::state::ImportWizardView;

pub fn view(component: &ImportWizardView, ctx: &Context<ImportWizardView>) -> Html {
    let link = ctx.link();
    let body = match component.wizard.step() {
        WizardStep::AwaitingFile { error } => build_upload_step(component, error.as_deref(), link),
        WizardStep::Previewing { rows } => build_preview_step(component, rows, link),
        WizardStep::Closed => html! {},
    };

    html! {
        <Sheet title="Import certifications" wide=true on_close={link.callback(|_| Msg::Close)}>
            { body }
        </Sheet>
    }
}

fn build_upload_step(
    component: &ImportWizardView,
    error: Option<&str>,
    link: &Scope<ImportWizardView>,
) -> Html {
    let onchange = link.batch_callback(|e: Event| take_selected_file(&e).map(Msg::FileSelected));

    html! {
        <div class="wizard-step">
            <p>
                {"1. Download the template. It lists every employee; fill in one row per certification."}
            </p>
            <button class="btn" disabled={component.busy} onclick={link.callback(|_| Msg::DownloadTemplate)}>
                <i class="material-icons">{"download"}</i>
                {" Download template"}
            </button>
            <p>{"2. Upload the completed file (.xlsx, .xls, .ods or .csv)."}</p>
            <input type="file" accept=".xlsx,.xls,.ods,.csv" disabled={component.busy} {onchange} />
            if component.busy {
                <p class="wizard-status">{"Working..."}</p>
            }
            if let Some(error) = error {
                <p class="wizard-error">{ error }</p>
            }
        </div>
    }
}

fn build_preview_step(
    component: &ImportWizardView,
    rows: &[ImportRow],
    link: &Scope<ImportWizardView>,
) -> Html {
    let valid = component.wizard.valid_count();

    html! {
        <div class="wizard-step">
            <p class="wizard-status">
                { format!("{} of {} row(s) ready to import.", format_count(valid), format_count(rows.len())) }
            </p>
            <div class="preview-scroll">
                <table class="records-table">
                    <thead>
                        <tr>
                            <th>{"#"}</th>
                            <th>{"Status"}</th>
                            <th>{"Employee"}</th>
                            <th>{"NIK"}</th>
                            <th>{"Type"}</th>
                            <th>{"Certification"}</th>
                            <th>{"Cert Date"}</th>
                            <th>{"Notes"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for rows.iter().enumerate().map(|(index, row)| build_preview_row(index, row)) }
                    </tbody>
                </table>
            </div>
            <div class="form-actions">
                <button class="btn" disabled={component.busy} onclick={link.callback(|_| Msg::ReplaceFile)}>
                    {"Replace file"}
                </button>
                <button class="btn primary" disabled={component.busy || valid == 0} onclick={link.callback(|_| Msg::Confirm)}>
                    { if component.busy { "Importing...".to_string() } else { format!("Import {}", format_count(valid)) } }
                </button>
            </div>
        </div>
    }
}

fn build_preview_row(index: usize, row: &ImportRow) -> Html {
    let (class, status) = if row.is_valid {
        ("row-valid", "Ready")
    } else {
        ("row-invalid", "Incomplete")
    };
    let text = |value: &Option<String>| value.clone().unwrap_or_else(|| "-".to_string());

    html! {
        <tr class={class}>
            <td>{ index + 1 }</td>
            <td>{ status }</td>
            <td>{ text(&row.full_name) }</td>
            <td>{ text(&row.nik) }</td>
            <td>{ text(&row.cert_type) }</td>
            <td>{ text(&row.cert_name) }</td>
            <td>{ format_date(row.cert_date) }</td>
            <td>{ text(&row.notes) }</td>
        </tr>
    }
}
