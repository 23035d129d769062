//! Browser utilities shared by the certification views.
//!
//! - **Blocking notifications**: every failed action ends in `alert`, and
//!   destructive ones ask `confirm` first.
//! - **Toasts**: short non-blocking confirmations after a successful save.
//! - **Dates and numbers**: today's local date and grouped counts for the
//!   summary cards.
//! - **File inputs**: pulling the selected `File` out of a change event.

use chrono::NaiveDate;
use num_format::{Locale, ToFormattedString};
use wasm_bindgen::JsCast;
use web_sys::{Event, File, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

const TOAST_MS: u32 = 3000;

/// Shows a blocking alert. Used for every error surfaced to the user.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Asks the user to confirm; a missing window counts as "no".
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Shows `message` in a `.toast` element at the bottom of the page for three
/// seconds. Styling lives in `index.html`.
pub fn show_toast(message: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) else {
        return;
    };
    toast.set_class_name("toast");
    toast.set_text_content(Some(message));
    if body.append_child(&toast).is_err() {
        return;
    }
    wasm_bindgen_futures::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(TOAST_MS).await;
        toast.remove();
    });
}

/// Today's date in the browser's local time zone.
pub fn today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() + 1,
        now.get_date(),
    )
    .unwrap_or_default()
}

pub fn format_count(count: usize) -> String {
    (count as u64).to_formatted_string(&Locale::en)
}

/// Takes the first file picked in an `<input type="file">` and clears the input
/// so picking the same file again still fires `change`.
pub fn take_selected_file(event: &Event) -> Option<File> {
    let input = event.target()?.dyn_into::<HtmlInputElement>().ok()?;
    let file = input.files()?.get(0);
    input.set_value("");
    file
}

/// Current value of the input, select or textarea that fired `event`.
pub fn input_value(event: &Event) -> String {
    let Some(target) = event.target() else {
        return String::new();
    };
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(select) = target.dyn_ref::<HtmlSelectElement>() {
        select.value()
    } else if let Some(area) = target.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

pub fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "-".to_string())
}
