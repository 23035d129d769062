//! View rendering for the certification list: toolbar with search, two summary
//! cards, the records table and whichever modal sheet is open.

use common::model::certification::Certification;
use web_sys::{Event, InputEvent};
use yew::html::Scope;
use yew::prelude::*;

use crate::components::certifications::form::CertificationForm;
use crate::components::certifications::import::ImportWizardView;
use crate::components::sheet::Sheet;
use crate::helpers::{format_count, format_date, input_value, take_selected_file, today};

use super::messages::Msg;
use super::state::{CertificationListView, Overlay};

pub fn view(component: &CertificationListView, ctx: &Context<CertificationListView>) -> Html {
    let link = ctx.link();

    html! {
        <div class="certifications-root">
            { build_toolbar(component, link) }
            { build_summary(component) }
            { build_table(component, link) }
            { build_overlay(component, link) }
        </div>
    }
}

fn build_toolbar(component: &CertificationListView, link: &Scope<CertificationListView>) -> Html {
    let oninput = link.callback(|e: InputEvent| Msg::SetQuery(input_value(&e)));

    html! {
        <div class="list-toolbar">
            <h1>{"Employee Certifications"}</h1>
            <input
                type="search"
                class="search-input"
                placeholder="Search by name, NIK, certification or type"
                value={component.query.clone()}
                {oninput}
            />
            <button class="icon-btn" title="Import from spreadsheet" onclick={link.callback(|_| Msg::OpenImport)}>
                <i class="material-icons">{"upload_file"}</i>
                <span class="icon-label">{"Import"}</span>
            </button>
            <button class="icon-btn primary" title="Add certification" onclick={link.callback(|_| Msg::OpenCreate)}>
                <i class="material-icons">{"add"}</i>
                <span class="icon-label">{"Add"}</span>
            </button>
        </div>
    }
}

fn build_summary(component: &CertificationListView) -> Html {
    let summary = component.list.summary(today());

    html! {
        <div class="summary-cards">
            <div class="summary-card">
                <span class="summary-label">{"Total records"}</span>
                <span class="summary-value">{ format_count(summary.total) }</span>
            </div>
            <div class="summary-card">
                <span class="summary-label">{"Entered this month"}</span>
                <span class="summary-value">{ format_count(summary.this_month) }</span>
            </div>
        </div>
    }
}

fn build_table(component: &CertificationListView, link: &Scope<CertificationListView>) -> Html {
    if component.loading && component.list.is_empty() {
        return html! { <p class="list-status">{"Loading certifications..."}</p> };
    }

    let rows = component.list.filtered(&component.query);
    if rows.is_empty() {
        let message = if component.list.is_empty() {
            "No certifications recorded yet."
        } else {
            "No certifications match the search."
        };
        return html! { <p class="list-status">{ message }</p> };
    }

    html! {
        <table class="records-table">
            <thead>
                <tr>
                    <th>{"Employee"}</th>
                    <th>{"NIK"}</th>
                    <th>{"Type"}</th>
                    <th>{"Certification"}</th>
                    <th>{"Cert Date"}</th>
                    <th>{"Entered"}</th>
                    <th>{"Notes"}</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                { for rows.into_iter().map(|record| build_row(component, record, link)) }
            </tbody>
        </table>
    }
}

fn build_row(
    component: &CertificationListView,
    record: &Certification,
    link: &Scope<CertificationListView>,
) -> Html {
    let edit = {
        let record = record.clone();
        link.callback(move |_| Msg::OpenEdit(record.clone()))
    };
    let delete = {
        let id = record.id.clone();
        link.callback(move |_| Msg::Delete(id.clone()))
    };

    html! {
        <tr key={record.id.clone()}>
            <td>{ record.employee_name().unwrap_or("-") }</td>
            <td>{ record.employee_nik().unwrap_or("-") }</td>
            <td><span class="type-chip">{ record.cert_type.clone() }</span></td>
            <td>{ record.cert_name.clone() }</td>
            <td>{ format_date(Some(record.cert_date)) }</td>
            <td>{ format_date(record.entry_date) }</td>
            <td class="notes">{ record.notes.clone().unwrap_or_default() }</td>
            <td class="row-actions">
                { build_file_action(component, record, link) }
                <button class="icon-btn" title="Edit" onclick={edit}>
                    <i class="material-icons">{"edit"}</i>
                </button>
                <button class="icon-btn danger" title="Delete" onclick={delete}>
                    <i class="material-icons">{"delete"}</i>
                </button>
            </td>
        </tr>
    }
}

/// "View" when the record has a file, otherwise a hidden picker behind "Attach".
fn build_file_action(
    component: &CertificationListView,
    record: &Certification,
    link: &Scope<CertificationListView>,
) -> Html {
    if let Some(file_id) = &record.file_id {
        let file_id = file_id.clone();
        return html! {
            <button class="icon-btn" title="View file" onclick={link.callback(move |_| Msg::ViewFile(file_id.clone()))}>
                <i class="material-icons">{"visibility"}</i>
            </button>
        };
    }

    if component.uploading.as_deref() == Some(record.id.as_str()) {
        return html! { <span class="icon-btn busy" title="Uploading">{"..."}</span> };
    }

    let id = record.id.clone();
    let onchange = link.batch_callback(move |e: Event| {
        take_selected_file(&e).map(|file| Msg::AttachFile { id: id.clone(), file })
    });

    html! {
        <label class="icon-btn" title="Attach file">
            <i class="material-icons">{"attach_file"}</i>
            <input type="file" style="display: none;" {onchange} />
        </label>
    }
}

fn build_overlay(component: &CertificationListView, link: &Scope<CertificationListView>) -> Html {
    let on_close = link.callback(|_| Msg::CloseOverlay);

    match &component.overlay {
        Overlay::None => html! {},
        Overlay::Form(record) => {
            let title = if record.is_some() {
                "Edit certification"
            } else {
                "Add certification"
            };
            html! {
                <Sheet title={title} on_close={on_close.clone()}>
                    <CertificationForm
                        record={record.clone()}
                        on_saved={link.callback(Msg::Saved)}
                        on_cancel={on_close}
                    />
                </Sheet>
            }
        }
        Overlay::Import => html! {
            <ImportWizardView
                on_finished={link.callback(|created_any| Msg::ImportFinished { created_any })}
            />
        },
    }
}
