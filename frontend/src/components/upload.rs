//! Workbook upload form.
//!
//! Holds the pending file selection and hands it to the caller on submit.
//! Whether a selection is acceptable is decided by the upload flow, not here.

use leptos::*;
use web_sys::{Event, File, HtmlInputElement, SubmitEvent};

use crate::config::ACCEPTED_EXTENSIONS;

#[component]
pub fn UploadForm(
    /// Receives the current selection on submit
    on_upload: Callback<Option<Vec<File>>>,
    /// Blocks submission while an upload is in flight
    #[prop(into)]
    disabled: Signal<bool>,
) -> impl IntoView {
    let (selected, set_selected) = create_signal(None::<Vec<File>>);

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        let files = input.files().map(|list| {
            (0..list.length())
                .filter_map(|i| list.get(i))
                .collect::<Vec<File>>()
        });
        log::debug!(
            "📎 Selected {} file(s)",
            files.as_ref().map(Vec::len).unwrap_or(0)
        );
        set_selected.set(files);
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        on_upload.call(selected.get());
    };

    let label = move || {
        selected.with(|files| {
            let names: Vec<String> = files
                .iter()
                .flatten()
                .map(|file| file.name())
                .collect();
            selection_label(&names)
        })
    };

    let selected_count = move || selected.with(|files| files.as_ref().map(Vec::len).unwrap_or(0));

    view! {
        <form class="upload-form" on:submit=on_submit>
            <label for="file-upload" class="custom-file-upload">
                {label}
            </label>
            <input
                id="file-upload"
                type="file"
                accept=ACCEPTED_EXTENSIONS
                on:change=on_file_change
            />
            <button
                type="submit"
                disabled=move || !submit_enabled(selected_count(), disabled.get())
            >
                {move || submit_text(disabled.get())}
            </button>
        </form>
    }
}

/// Picker label: the first selected file's name, or a prompt.
pub fn selection_label(names: &[String]) -> String {
    names
        .first()
        .cloned()
        .unwrap_or_else(|| "Choose Excel File".to_string())
}

pub fn submit_enabled(selected: usize, disabled: bool) -> bool {
    selected > 0 && !disabled
}

pub fn submit_text(disabled: bool) -> &'static str {
    if disabled {
        "Processing..."
    } else {
        "Upload & Process"
    }
}
