//! Browser login URL

/// Build the deep link that starts the login in the browser
///
/// `login_url` is the site base, e.g. `https://www.cursor.com`.
pub fn login_deep_link(login_url: &str, challenge: &str, session_id: &str) -> String {
    format!(
        "{}/loginDeepControl?challenge={}&uuid={}&mode=login",
        login_url.trim_end_matches('/'),
        challenge,
        session_id
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_LOGIN_URL;

    #[test]
    fn test_deep_link_format() {
        let url = login_deep_link(
            DEFAULT_LOGIN_URL,
            "E9Melhoa2OwvFrEMTJguCHaoeK1t8URWbuGJSstw-cM",
            "00000000-0000-4000-8000-000000000000",
        );
        assert_eq!(
            url,
            "https://www.cursor.com/loginDeepControl?challenge=E9Melhoa2OwvFrEMTJguCHaoeK1t8URWbuGJSstw-cM&uuid=00000000-0000-4000-8000-000000000000&mode=login"
        );
    }

    #[test]
    fn test_deep_link_parses_with_expected_query() {
        let link = login_deep_link("https://www.cursor.com/", "abc_-", "id");
        let url = url::Url::parse(&link).unwrap();
        assert_eq!(url.path(), "/loginDeepControl");
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("challenge".to_string(), "abc_-".to_string()),
                ("uuid".to_string(), "id".to_string()),
                ("mode".to_string(), "login".to_string()),
            ]
        );
    }
}
