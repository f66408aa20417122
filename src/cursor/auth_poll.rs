//! One-shot query of the auth poll endpoint

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use reqwest::StatusCode;
use url::Url;

use super::token::AuthResponse;
use crate::config::LoginSettings;
use crate::error::LoginError;

/// Fetches the auth response for a finished browser login
pub trait AuthPoller {
    fn poll(&self, session_id: &str, verifier: &str) -> Result<AuthResponse, LoginError>;
}

/// Poller talking to the real endpoint over HTTPS
#[derive(Debug)]
pub struct HttpPoller {
    client: Client,
    poll_url: Url,
    timeout: Duration,
}

impl HttpPoller {
    pub fn new(poll_url: &str, user_agent: &str, timeout: Duration) -> Result<Self, LoginError> {
        let poll_url = Url::parse(poll_url)?;
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            poll_url,
            timeout,
        })
    }

    pub fn from_settings(settings: &LoginSettings) -> Result<Self, LoginError> {
        Self::new(&settings.poll_url, &settings.user_agent, settings.timeout)
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Poll URL with `uuid` and `verifier` query parameters
    pub fn request_url(&self, session_id: &str, verifier: &str) -> Url {
        let mut url = self.poll_url.clone();
        url.query_pairs_mut()
            .append_pair("uuid", session_id)
            .append_pair("verifier", verifier);
        url
    }
}

impl AuthPoller for HttpPoller {
    fn poll(&self, session_id: &str, verifier: &str) -> Result<AuthResponse, LoginError> {
        tracing::debug!(endpoint = %self.poll_url, "querying auth poll");

        let response = self
            .client
            .get(self.request_url(session_id, verifier))
            .header(ACCEPT, "*/*")
            .send()?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(LoginError::PollStatus {
                status: status.as_u16(),
            });
        }

        let body = response.text()?;
        let auth: AuthResponse = serde_json::from_str(&body)?;
        tracing::debug!(
            has_token = !auth.access_token.is_empty(),
            "auth poll answered"
        );
        Ok(auth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CURSOR_USER_AGENT;
    use mockito::Matcher;
    use std::io::Read;
    use std::net::TcpListener;
    use std::thread;

    const SESSION_ID: &str = "0d1e2f30-4a5b-4c6d-8e7f-8091a2b3c4d5";
    const VERIFIER: &str = "dBjftJeZ4CVP-mB92K1uVt8WnBBjDlXvTBvmSvgjmqY";

    fn poller_for(server: &mockito::Server) -> HttpPoller {
        HttpPoller::new(
            &format!("{}/auth/poll", server.url()),
            CURSOR_USER_AGENT,
            Duration::from_secs(5),
        )
        .unwrap()
    }

    fn query() -> Matcher {
        Matcher::AllOf(vec![
            Matcher::UrlEncoded("uuid".into(), SESSION_ID.into()),
            Matcher::UrlEncoded("verifier".into(), VERIFIER.into()),
        ])
    }

    #[test]
    fn test_request_url_carries_query() {
        let poller = HttpPoller::new(
            "https://api2.cursor.sh/auth/poll",
            CURSOR_USER_AGENT,
            Duration::from_secs(5),
        )
        .unwrap();
        assert_eq!(
            poller.request_url("id", "ver_-").as_str(),
            "https://api2.cursor.sh/auth/poll?uuid=id&verifier=ver_-"
        );
    }

    #[test]
    fn test_invalid_poll_url() {
        let err = HttpPoller::new("not a url", CURSOR_USER_AGENT, Duration::from_secs(5))
            .unwrap_err();
        assert!(matches!(err, LoginError::InvalidPollUrl(_)));
    }

    #[test]
    fn test_poll_success() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/auth/poll")
            .match_query(query())
            .match_header("user-agent", CURSOR_USER_AGENT)
            .match_header("accept", "*/*")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"accessToken":"abc","authId":"auth0|user_42"}"#)
            .create();

        let auth = poller_for(&server).poll(SESSION_ID, VERIFIER).unwrap();

        mock.assert();
        assert_eq!(auth.access_token, "abc");
        assert_eq!(auth.auth_id, "auth0|user_42");
    }

    #[test]
    fn test_poll_non_200() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/auth/poll")
            .match_query(Matcher::Any)
            .with_status(404)
            .create();

        let err = poller_for(&server).poll(SESSION_ID, VERIFIER).unwrap_err();

        mock.assert();
        assert!(matches!(err, LoginError::PollStatus { status: 404 }));
    }

    #[test]
    fn test_poll_malformed_json() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/auth/poll")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("<html>not json</html>")
            .create();

        let err = poller_for(&server).poll(SESSION_ID, VERIFIER).unwrap_err();

        mock.assert();
        assert!(matches!(err, LoginError::MalformedResponse(_)));
    }

    #[test]
    fn test_poll_connection_refused() {
        let poller = HttpPoller::new(
            "http://127.0.0.1:1/auth/poll",
            CURSOR_USER_AGENT,
            Duration::from_secs(1),
        )
        .unwrap();
        let err = poller.poll(SESSION_ID, VERIFIER).unwrap_err();
        assert!(matches!(err, LoginError::Http(_)));
    }

    #[test]
    fn test_from_settings_keeps_timeout() {
        let settings = LoginSettings {
            timeout: Duration::from_millis(750),
            ..LoginSettings::default()
        };
        let poller = HttpPoller::from_settings(&settings).unwrap();
        assert_eq!(poller.timeout(), Duration::from_millis(750));
        assert_eq!(poller.poll_url.as_str(), "https://api2.cursor.sh/auth/poll");
    }

    #[test]
    fn test_poll_timeout() {
        // Accepts the connection and reads the request, but never answers
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let server = thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut buf = [0u8; 1024];
                let _ = stream.read(&mut buf);
                thread::sleep(Duration::from_secs(2));
            }
        });

        let poller = HttpPoller::new(
            &format!("http://{}/auth/poll", addr),
            CURSOR_USER_AGENT,
            Duration::from_millis(200),
        )
        .unwrap();
        let err = poller.poll(SESSION_ID, VERIFIER).unwrap_err();

        match err {
            LoginError::Http(e) => assert!(e.is_timeout(), "expected timeout, got {e}"),
            other => panic!("expected Http timeout, got {other:?}"),
        }
        server.join().unwrap();
    }
}
