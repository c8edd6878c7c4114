//! Authenticated landing page.
//!
//! Only mounted behind `RequireSession`, so a user is present on entry.
//! Logging out flips the session, which makes the guard redirect to `/login`.

use leptos::prelude::*;

use crate::net::gateway::AuthGateway;
use crate::state::session::SessionStore;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let gateway = expect_context::<AuthGateway>();
    let state = session.state();

    if let Some(user) = session.current() {
        log::info!("home: current user {}", user.full_name);
    }

    let full_name = move || state.with(|s| s.user().map(|u| u.full_name.clone()).unwrap_or_default());
    let email = move || state.with(|s| s.user().map(|u| u.email.clone()).unwrap_or_default());

    view! {
        <div class="home-page">
            <nav class="home-nav">
                <a href="/">"Home"</a>
                <a href="/about">"About"</a>
                <a href="/contact">"Contact"</a>
            </nav>
            <h1>"Welcome, " {full_name}</h1>
            <p class="home-email">{email}</p>
            <button class="logout-button" on:click=move |_| gateway.logout()>
                "Log out"
            </button>
        </div>
    }
}
