//! Hero section component

use leptos::*;

use crate::config::{APP_SUBTITLE, APP_TITLE};

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <header class="hero">
            <h1>{APP_TITLE}</h1>
            <p class="subtitle">{APP_SUBTITLE}</p>
        </header>
    }
}
