//! Form layout: employee picker, type field with live suggestions, name, date,
//! notes and the attachment picker.

use web_sys::{Event, FocusEvent, InputEvent, MouseEvent, SubmitEvent};
use yew::html::Scope;
use yew::prelude::*;

use crate::helpers::{input_value, take_selected_file};

use super::messages::Msg;
use super::state::CertificationForm;

pub fn view(component: &CertificationForm, ctx: &Context<CertificationForm>) -> Html {
    let link = ctx.link();
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });
    let on_cancel = ctx.props().on_cancel.reform(|_: MouseEvent| ());
    let submit_label = if component.saving {
        "Saving..."
    } else if component.form.is_editing() {
        "Update"
    } else {
        "Save"
    };

    html! {
        <form class="certification-form" {onsubmit}>
            { build_employee_field(component, link) }
            { build_type_field(component, link) }
            <label class="field">
                <span>{"Certification name"}</span>
                <input
                    type="text"
                    value={component.form.draft.cert_name.clone().unwrap_or_default()}
                    oninput={link.callback(|e: InputEvent| Msg::SetName(input_value(&e)))}
                />
            </label>
            <label class="field">
                <span>{"Certification date"}</span>
                <input
                    type="date"
                    value={component.form.draft.cert_date.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default()}
                    onchange={link.callback(|e: Event| Msg::SetCertDate(input_value(&e)))}
                />
            </label>
            <label class="field">
                <span>{"Notes"}</span>
                <textarea
                    rows="3"
                    value={component.form.draft.notes.clone().unwrap_or_default()}
                    oninput={link.callback(|e: InputEvent| Msg::SetNotes(input_value(&e)))}
                />
            </label>
            { build_file_field(component, link) }
            <div class="form-actions">
                <button type="button" class="btn" onclick={on_cancel}>{"Cancel"}</button>
                <button type="submit" class="btn primary" disabled={component.saving || component.uploading}>
                    { submit_label }
                </button>
            </div>
        </form>
    }
}

fn build_employee_field(component: &CertificationForm, link: &Scope<CertificationForm>) -> Html {
    let selected = component.form.draft.account_id.clone().unwrap_or_default();

    html! {
        <label class="field">
            <span>{"Employee"}</span>
            <select onchange={link.callback(|e: Event| Msg::SetAccount(input_value(&e)))}>
                <option value="" selected={selected.is_empty()}>{"Select an employee"}</option>
                { for component.accounts.iter().map(|account| {
                    let label = match &account.internal_nik {
                        Some(nik) => format!("{} ({})", account.full_name, nik),
                        None => account.full_name.clone(),
                    };
                    html! {
                        <option value={account.id.clone()} selected={account.id == selected}>
                            { label }
                        </option>
                    }
                }) }
            </select>
        </label>
    }
}

fn build_type_field(component: &CertificationForm, link: &Scope<CertificationForm>) -> Html {
    let current = component.form.draft.cert_type.clone().unwrap_or_default();
    let matches = component.suggestions.matches(&current);

    html! {
        <label class="field suggest-field">
            <span>{"Type"}</span>
            <input
                type="text"
                autocomplete="off"
                value={current.clone()}
                oninput={link.callback(|e: InputEvent| Msg::SetType(input_value(&e)))}
                onfocus={link.callback(|_: FocusEvent| Msg::TypeFocused)}
                onblur={link.callback(|_: FocusEvent| Msg::TypeBlurred)}
            />
            if component.suggestions.is_open() && !matches.is_empty() {
                <ul class="suggestions">
                    { for matches.into_iter().map(|known| {
                        let value = known.to_string();
                        // mousedown fires before the input's blur
                        let onmousedown = link.callback(move |e: MouseEvent| {
                            e.prevent_default();
                            Msg::PickType(value.clone())
                        });
                        html! { <li {onmousedown}>{ known }</li> }
                    }) }
                </ul>
            }
        </label>
    }
}

fn build_file_field(component: &CertificationForm, link: &Scope<CertificationForm>) -> Html {
    let status = if component.uploading {
        html! { <span class="file-status">{"Uploading..."}</span> }
    } else if let Some(file_id) = &component.form.draft.file_id {
        html! {
            <span class="file-status">
                {"Attached: "}<code>{ file_id.clone() }</code>
                <button type="button" class="icon-btn" title="Remove attachment" onclick={link.callback(|_| Msg::ClearFile)}>
                    <i class="material-icons">{"close"}</i>
                </button>
            </span>
        }
    } else {
        html! {}
    };
    let onchange = link.batch_callback(|e: Event| take_selected_file(&e).map(Msg::FileSelected));

    html! {
        <div class="field">
            <span>{"Certificate file"}</span>
            <input type="file" disabled={component.uploading} {onchange} />
            { status }
        </div>
    }
}
