//! Results panel: summary message, mock geolocation samples and downloads.

use leptos::*;

use crate::results::ResultsView;
use crate::types::ResultsPayload;

#[component]
pub fn ResultsDisplay(results: ResultsPayload) -> impl IntoView {
    let ResultsView {
        excel_link,
        word_link,
        base_message,
        mock_mode,
        samples,
    } = ResultsView::derive(&results);

    let message = (!base_message.is_empty()).then(|| view! { <p>{base_message}</p> });

    let mock_panel = mock_mode.then(|| {
        view! {
            <div class="fake-addresses">
                <strong>"Fake addresses detected - coordinates assigned according to city"</strong>
                <p></p>
                <strong>"5 sample fake Addresses:"</strong>
                <ul>
                    {samples
                        .into_iter()
                        .map(|sample| view! { <li>{sample.to_string()}</li> })
                        .collect_view()}
                </ul>
            </div>
        }
    });

    view! {
        <div class="results-container">
            <h3>"✅ Success!"</h3>
            <div class="results-content">
                <div class="results-message">
                    {message}
                    {mock_panel}
                </div>
                <div class="download-links">
                    <a href=excel_link class="download-button excel" download="">
                        "Download Excel"
                    </a>
                    <a href=word_link class="download-button word" download="">
                        "Download Report"
                    </a>
                </div>
            </div>
        </div>
    }
}
