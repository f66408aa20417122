//! Cursor login building blocks

pub mod auth_poll;
pub mod browser;
pub mod config_patch;
pub mod deep_link;
pub mod pkce;
pub mod session_id;
pub mod token;

// Re-exports for library consumers
pub use auth_poll::{AuthPoller, HttpPoller};
pub use browser::{system_opener, UrlOpener};
pub use config_patch::{patch_configs, PatchOutcome};
pub use pkce::{generate_pkce_pair, PkcePair};
pub use session_id::generate_session_id;
pub use token::{format_token, AuthResponse};
