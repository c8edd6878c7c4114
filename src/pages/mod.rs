//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration; protected pages are wrapped in
//! `util::auth::RequireSession` by the router rather than checking auth
//! themselves.

pub mod home;
pub mod info;
pub mod login;
