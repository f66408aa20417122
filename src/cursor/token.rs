//! Auth poll response and the session cookie built from it

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::Deserialize;

/// Body returned by the auth poll endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    #[serde(default)]
    pub access_token: String,

    /// Usually `<provider>|<user id>`
    #[serde(default)]
    pub auth_id: String,
}

/// Separator between user id and access token in the cookie
const USER_TOKEN_SEPARATOR: &str = "::";

/// Build the `WorkosCursorSessionToken` value
///
/// Returns an empty string when there is no access token. When the auth id
/// carries a user id after a `|`, the result is `<userId>%3A%3A<accessToken>`.
pub fn format_token(auth: &AuthResponse) -> String {
    if auth.access_token.is_empty() {
        return String::new();
    }

    match auth.auth_id.split('|').nth(1) {
        Some(user_id) => format!(
            "{}{}{}",
            user_id,
            utf8_percent_encode(USER_TOKEN_SEPARATOR, NON_ALPHANUMERIC),
            auth.access_token
        ),
        None => auth.access_token.clone(),
    }
}
