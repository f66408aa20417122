//! cursor-login library
//!
//! Browser-based login against Cursor: PKCE pair and session id generation,
//! the deep link, a single auth poll, cookie formatting and config patching.
//!
//! # Disclaimer
//!
//! This tool is not affiliated with or endorsed by Anysphere, Inc. (Cursor).
//! It only talks to the login endpoints a Cursor client uses for your own
//! account.

pub mod commands;
pub mod config;
pub mod cursor;
pub mod error;

pub use error::LoginError;
