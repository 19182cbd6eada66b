//! `orderdesk-session` — sign-in state for the dashboard.
//!
//! A session here is a stored role flag, nothing else. Credentials are
//! checked for presence only; there is no user store and no token.

pub mod session;

pub use session::{Credentials, Role, SessionStore};
