//! Customer Data Processing Pipeline - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend that uploads a customer workbook to the
//! processing backend and links to the generated Excel and Word reports.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent (owns UploadState)                              │
//! │  ├── Hero (title, instructions)                              │
//! │  ├── UploadForm                                              │
//! │  ├── Spinner (while uploading)                               │
//! │  └── error banner or ResultsDisplay                          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Upload state, API payloads and errors
//! - [`results`] - Pure display model for a processed upload
//! - [`components`] - UI components
//! - [`services`] - Backend communication and the upload flow

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use web_sys::File;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod results;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // State
    UploadState,
    // API
    ResultsPayload, CoordinateEntry, ErrorPayload,
    // Errors
    AppError, AppResult,
};

// Display model
pub use results::{AddressSample, ResultsView, SampleCoordinates};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Install console logging and mount the application.
pub fn run() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 Customer Data Processing Pipeline - Starting Leptos App");

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_TITLE/>
        <Router>
            <Routes>
                <Route path="/" view=MainContent/>
            </Routes>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    // Single source of truth for the upload flow
    let (state, set_state) = create_signal(UploadState::Idle);

    let on_upload = Callback::new(move |files: Option<Vec<File>>| {
        spawn_local(async move {
            let transport = BrowserTransport::default();
            handle_upload(&transport, files, |next| set_state.set(next)).await;
        });
    });

    let uploading = Signal::derive(move || state.with(UploadState::is_uploading));

    let outcome = move || {
        state.with(|current| {
            if let Some(message) = current.error_message() {
                view! {
                    <div class="error-message">{message.to_string()}</div>
                }
                .into_view()
            } else if let Some(results) = current.results() {
                view! {
                    <ResultsDisplay results=results.clone()/>
                }
                .into_view()
            } else {
                ().into_view()
            }
        })
    };

    view! {
        <div class="container">
            <Hero/>

            <main>
                <UploadForm on_upload=on_upload disabled=uploading/>

                <Show
                    when=move || uploading.get()
                    fallback=|| view! { }
                >
                    <Spinner/>
                </Show>

                {outcome}
            </main>
        </div>
    }
}
