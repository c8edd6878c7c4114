//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls, `gateway` turns login responses into session
//! updates, and `types` defines the wire schema.

pub mod api;
pub mod gateway;
pub mod types;
