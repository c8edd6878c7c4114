//! Login page: email + password form backed by `LoginForm`.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::gateway::{AuthError, AuthGateway};
use crate::state::login_form::{LoginForm, SubmitBlocked};
use crate::util::auth::Destination;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Validation stopped the submission before any request.
    Blocked(SubmitBlocked),
    Failed(AuthError),
    Navigate(Destination),
}

/// Run the login action against `form`: validate, call the gateway, record
/// the result. Navigation is left to the caller.
pub async fn run_login(form: RwSignal<LoginForm>, gateway: AuthGateway) -> LoginOutcome {
    let begun = form.try_update(LoginForm::begin_submit).unwrap_or(Err(SubmitBlocked::InFlight));
    let credentials = match begun {
        Ok(credentials) => credentials,
        Err(blocked) => return LoginOutcome::Blocked(blocked),
    };

    let result = gateway.login(&credentials).await;
    let next = form.try_update(|f| f.finish_submit(&result)).flatten();
    match (result, next) {
        (Ok(_), Some(destination)) => LoginOutcome::Navigate(destination),
        (Ok(_), None) => LoginOutcome::Failed(AuthError::Superseded),
        (Err(e), _) => LoginOutcome::Failed(e),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let gateway = expect_context::<AuthGateway>();
    let form = RwSignal::new(LoginForm::new());
    let navigate = use_navigate();

    let canceller = gateway.canceller();
    on_cleanup(move || canceller.cancel());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let gateway = gateway.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            if let LoginOutcome::Navigate(destination) = run_login(form, gateway).await {
                navigate(destination.path(), NavigateOptions::default());
            }
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Sign in"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || form.with(|f| f.email.value().to_owned())
                        on:input=move |ev| form.update(|f| f.email.set_value(event_target_value(&ev)))
                    />
                    <Show when=move || !form.with(|f| f.email.message().is_empty())>
                        <p class="login-error">{move || form.with(|f| f.email.message())}</p>
                    </Show>
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || form.with(|f| f.password.value().to_owned())
                        on:input=move |ev| form.update(|f| f.password.set_value(event_target_value(&ev)))
                    />
                    <Show when=move || !form.with(|f| f.password.message().is_empty())>
                        <p class="login-error">{move || form.with(|f| f.password.message())}</p>
                    </Show>
                    <button class="login-button" type="submit" disabled=move || form.with(LoginForm::busy)>
                        "Log in"
                    </button>
                </form>
                <Show when=move || !form.with(|f| f.error_login().is_empty())>
                    <p class="login-message">{move || form.with(|f| f.error_login().to_owned())}</p>
                </Show>
            </div>
        </div>
    }
}
