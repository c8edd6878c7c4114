//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::config::ApiConfig;
use crate::net::api::HttpUserApi;
use crate::net::gateway::AuthGateway;
use crate::pages::{
    home::HomePage,
    info::{AboutPage, ContactPage},
    login::LoginPage,
};
use crate::state::session::SessionStore;
use crate::util::auth::{Destination, RequireSession};

/// Root application component.
///
/// Owns the session store and gateway and hands them to pages via context.
#[component]
pub fn App(config: ApiConfig) -> impl IntoView {
    provide_meta_context();

    let session = SessionStore::new();
    let gateway = AuthGateway::new(Arc::new(HttpUserApi::new(&config)), session);
    provide_context(session);
    provide_context(gateway);

    view! {
        <Title text="Session Gate"/>

        <Router>
            <Routes fallback=|| view! { <Redirect path=Destination::Home.path()/> }>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("about") view=AboutPage/>
                <Route path=StaticSegment("contact") view=ContactPage/>
                <Route
                    path=StaticSegment("")
                    view=|| view! {
                        <RequireSession destination=Destination::Home>
                            <HomePage/>
                        </RequireSession>
                    }
                />
            </Routes>
        </Router>
    }
}
