//! Endpoints, client identity and config file locations

use std::path::PathBuf;
use std::time::Duration;

/// Base of the browser login page
pub const DEFAULT_LOGIN_URL: &str = "https://www.cursor.com";

/// Endpoint queried once the operator has finished logging in
pub const DEFAULT_POLL_URL: &str = "https://api2.cursor.sh/auth/poll";

/// User agent of the Cursor desktop client
pub const CURSOR_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Cursor/0.48.6 Chrome/132.0.6834.210 Electron/34.3.4 Safari/537.36";

pub const POLL_TIMEOUT: Duration = Duration::from_secs(5);

/// Config files checked for a token placeholder, relative to the working directory
pub const DEFAULT_CONFIG_PATHS: [&str; 2] = ["./config.yaml", "./config/config.yaml"];

/// Settings for a single login attempt
#[derive(Debug, Clone)]
pub struct LoginSettings {
    pub login_url: String,
    pub poll_url: String,
    pub user_agent: String,
    pub timeout: Duration,
    /// Files to patch with the new token
    pub config_paths: Vec<PathBuf>,
    /// Launch the default browser on the deep link
    pub open_browser: bool,
}

impl Default for LoginSettings {
    fn default() -> Self {
        Self {
            login_url: DEFAULT_LOGIN_URL.to_string(),
            poll_url: DEFAULT_POLL_URL.to_string(),
            user_agent: CURSOR_USER_AGENT.to_string(),
            timeout: POLL_TIMEOUT,
            config_paths: default_config_paths(),
            open_browser: true,
        }
    }
}

pub fn default_config_paths() -> Vec<PathBuf> {
    DEFAULT_CONFIG_PATHS.iter().map(PathBuf::from).collect()
}
