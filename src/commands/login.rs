//! Login command - Obtain a Cursor session token through the browser
//!
//! Stages run strictly in order, once each:
//! generate PKCE + session id -> open deep link -> wait for the operator ->
//! poll -> format token -> patch config files.

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use std::io::{self, BufRead, Write};

use crate::config::LoginSettings;
use crate::cursor::config_patch::{self, PatchOutcome};
use crate::cursor::{browser, deep_link, pkce, session_id, token};
use crate::cursor::{AuthPoller, HttpPoller, PkcePair, UrlOpener};
use crate::error::LoginError;

/// Everything needed to start and finish one login attempt
#[derive(Debug, Clone)]
pub struct LoginRequest {
    pub pkce: PkcePair,
    pub session_id: String,
    pub deep_link: String,
}

/// Result of a successful login
#[derive(Debug)]
pub struct LoginOutcome {
    /// Value for the `WorkosCursorSessionToken` cookie
    pub token: String,
    pub patches: Vec<PatchOutcome>,
}

/// Source of the operator's "I have logged in" signal
pub trait Confirmation {
    fn wait_for_confirmation(&mut self) -> Result<(), LoginError>;
}

/// Blocks until a line is read; no timeout
#[derive(Debug)]
pub struct LineConfirmation<R> {
    reader: R,
}

impl<R: BufRead> LineConfirmation<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> Confirmation for LineConfirmation<R> {
    fn wait_for_confirmation(&mut self) -> Result<(), LoginError> {
        println!("Press Enter to continue...");
        io::stdout().flush().map_err(LoginError::Confirmation)?;

        let mut input = String::new();
        self.reader
            .read_line(&mut input)
            .map_err(LoginError::Confirmation)?;
        Ok(())
    }
}

/// Confirmation read from the terminal
pub fn stdin_confirmation() -> LineConfirmation<io::StdinLock<'static>> {
    LineConfirmation::new(io::stdin().lock())
}

/// Generate the PKCE pair and session id, and build the deep link
pub fn prepare(settings: &LoginSettings) -> LoginRequest {
    let pkce = pkce::generate_pkce_pair();
    let session_id = session_id::generate_session_id();
    let deep_link = deep_link::login_deep_link(&settings.login_url, &pkce.challenge, &session_id);

    tracing::debug!(session_id = %session_id, "prepared login request");

    LoginRequest {
        pkce,
        session_id,
        deep_link,
    }
}

/// Try to open the deep link; failure only prints a hint
pub fn launch_browser(opener: &dyn UrlOpener, url: &str) -> bool {
    match opener.open(url) {
        Ok(()) => true,
        Err(e) => {
            tracing::debug!(error = %e, "browser launch failed");
            eprintln!(
                "{} Could not open browser automatically ({}). Please copy and paste the URL into your browser.",
                "Warning:".yellow(),
                e
            );
            false
        }
    }
}

/// Poll once and turn the response into the cookie value
pub fn fetch_token(poller: &dyn AuthPoller, request: &LoginRequest) -> Result<String, LoginError> {
    let auth = poller.poll(&request.session_id, &request.pkce.verifier)?;

    if auth.access_token.is_empty() {
        return Err(LoginError::MissingAccessToken);
    }

    let token = token::format_token(&auth);
    if token.is_empty() {
        return Err(LoginError::EmptyToken);
    }

    Ok(token)
}

/// Run the whole flow against the given collaborators
pub fn run(
    settings: &LoginSettings,
    opener: &dyn UrlOpener,
    confirmation: &mut dyn Confirmation,
    poller: &dyn AuthPoller,
) -> Result<LoginOutcome, LoginError> {
    let request = prepare(settings);

    println!("{}", "=== Cursor Login ===".green());
    println!("Please open the following URL in your browser to login:");
    println!("{}", request.deep_link.cyan());

    if settings.open_browser {
        launch_browser(opener, &request.deep_link);
    }

    println!("\nWaiting for login... Press Enter after you've logged in to save cookies.");
    confirmation.wait_for_confirmation()?;

    println!("Checking login status...");
    let token = fetch_token(poller, &request)?;

    println!("{}", "Login successful!".green());
    println!("Your Cursor cookie (WorkosCursorSessionToken):");
    println!("{}", token);

    let patches = config_patch::patch_configs(&settings.config_paths, &token);
    report_patches(&patches);

    Ok(LoginOutcome { token, patches })
}

fn report_patches(patches: &[PatchOutcome]) {
    for patch in patches {
        match patch {
            PatchOutcome::Updated(path) => {
                println!("{} {}", "Updated token in".green(), path.display());
            }
            PatchOutcome::Unchanged(path) => {
                tracing::debug!(path = %path.display(), "no placeholder found");
            }
            PatchOutcome::Missing(path) => {
                tracing::debug!(path = %path.display(), "config file not present");
            }
            PatchOutcome::Failed(e) => {
                eprintln!("{} {}", "Warning:".yellow(), e);
            }
        }
    }
}

/// Execute the login command with the real browser, terminal and endpoint
pub fn execute(settings: &LoginSettings) -> Result<LoginOutcome> {
    let poller = HttpPoller::from_settings(settings).context("Failed to set up auth poll client")?;
    let opener = browser::system_opener();
    let mut confirmation = stdin_confirmation();

    run(settings, opener.as_ref(), &mut confirmation, &poller).context("login failed")
}
