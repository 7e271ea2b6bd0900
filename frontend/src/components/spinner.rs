//! Busy indicator shown while the backend processes a workbook.

use leptos::*;

use crate::config::PROCESSING_HINT;

#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div class="spinner-section">
            <div class="spinner"></div>
            <p class="spinner-hint">{PROCESSING_HINT}</p>
        </div>
    }
}
