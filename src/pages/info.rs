//! Public informational pages.

use leptos::prelude::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="info-page">
            <h1>"About"</h1>
            <a href="/">"Back"</a>
        </div>
    }
}

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <div class="info-page">
            <h1>"Contact"</h1>
            <a href="/">"Back"</a>
        </div>
    }
}
