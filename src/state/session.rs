//! Session store: the single holder of the authenticated user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided once through Leptos context by `App`. The auth gateway is the only
//! writer; route guards and user-aware pages read it, either reactively via
//! [`SessionStore::state`] or through explicit [`SessionStore::subscribe`]
//! callbacks.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;

use leptos::prelude::*;

use crate::net::types::User;

/// Either no user or exactly one user.
///
/// The user is private so "authenticated" can only be derived, never set
/// independently of the user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    user: Option<User>,
}

impl SessionState {
    #[must_use]
    pub fn anonymous() -> Self {
        Self { user: None }
    }

    #[must_use]
    pub fn authenticated(user: User) -> Self {
        Self { user: Some(user) }
    }

    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Handle returned by [`SessionStore::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Arc<dyn Fn(&SessionState) + Send + Sync>;

#[derive(Default)]
struct Listeners {
    next_id: u64,
    entries: Vec<(SubscriptionId, Listener)>,
}

/// Reactive container for the current [`SessionState`].
///
/// `Copy` so it can be captured by event handlers and effects the same way a
/// bare `RwSignal` is.
#[derive(Clone, Copy)]
pub struct SessionStore {
    state: RwSignal<SessionState>,
    listeners: StoredValue<Listeners>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore").field("state", &self.snapshot()).finish_non_exhaustive()
    }
}

impl SessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(SessionState::anonymous()),
            listeners: StoredValue::new(Listeners::default()),
        }
    }

    /// Replace the session with `user` and notify subscribers.
    pub fn set_user(&self, user: User) {
        log::debug!("session: user {} signed in", user.id);
        self.state.set(SessionState::authenticated(user));
        self.notify();
    }

    /// Drop the current user. No-op (and no notification) when already
    /// anonymous.
    pub fn clear(&self) {
        if !self.is_authenticated() {
            return;
        }
        log::debug!("session: cleared");
        self.state.set(SessionState::anonymous());
        self.notify();
    }

    /// Current user, read without tracking.
    #[must_use]
    pub fn current(&self) -> Option<User> {
        self.state.with_untracked(|s| s.user.clone())
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.state.with_untracked(SessionState::is_authenticated)
    }

    #[must_use]
    pub fn snapshot(&self) -> SessionState {
        self.state.get_untracked()
    }

    /// Tracked, read-only view for components and effects.
    #[must_use]
    pub fn state(&self) -> Signal<SessionState> {
        self.state.read_only().into()
    }

    /// Tracked authentication flag derived from [`Self::state`].
    #[must_use]
    pub fn authenticated(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(SessionState::is_authenticated))
    }

    /// Register `listener` to run after every observable change, in
    /// registration order.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&SessionState) + Send + Sync + 'static,
    {
        let mut id = SubscriptionId(0);
        self.listeners.update_value(|l| {
            id = SubscriptionId(l.next_id);
            l.next_id += 1;
            l.entries.push((id, Arc::new(listener)));
        });
        id
    }

    /// Remove a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut removed = false;
        self.listeners.update_value(|l| {
            let before = l.entries.len();
            l.entries.retain(|(entry_id, _)| *entry_id != id);
            removed = l.entries.len() != before;
        });
        removed
    }

    fn notify(&self) {
        // Snapshot first so listeners may subscribe/unsubscribe re-entrantly.
        let listeners: Vec<Listener> =
            self.listeners.with_value(|l| l.entries.iter().map(|(_, f)| Arc::clone(f)).collect());
        let state = self.snapshot();
        for listener in listeners {
            listener(&state);
        }
    }
}
