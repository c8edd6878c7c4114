//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` is the app-wide authentication state provided through context;
//! `login_form` is page-local state owned by the login page.

pub mod login_form;
pub mod session;
