//! Opening the deep link in the platform default browser

use std::process::{Command, Stdio};

use crate::error::LoginError;

/// Something that can hand a URL to the user's browser
pub trait UrlOpener: std::fmt::Debug {
    fn open(&self, url: &str) -> Result<(), LoginError>;
}

/// `rundll32 url.dll,FileProtocolHandler <url>`
#[derive(Debug, Default)]
pub struct WindowsOpener;

/// `open <url>`
#[derive(Debug, Default)]
pub struct MacOpener;

/// `xdg-open <url>`
#[derive(Debug, Default)]
pub struct LinuxOpener;

/// Platforms without a known opener
#[derive(Debug)]
pub struct UnsupportedOpener {
    pub os: &'static str,
}

impl WindowsOpener {
    pub fn command_for(&self, url: &str) -> Command {
        let mut command = Command::new("rundll32");
        command.args(["url.dll,FileProtocolHandler", url]);
        command
    }
}

impl MacOpener {
    pub fn command_for(&self, url: &str) -> Command {
        let mut command = Command::new("open");
        command.arg(url);
        command
    }
}

impl LinuxOpener {
    pub fn command_for(&self, url: &str) -> Command {
        let mut command = Command::new("xdg-open");
        command.arg(url);
        command
    }
}

impl UrlOpener for WindowsOpener {
    fn open(&self, url: &str) -> Result<(), LoginError> {
        spawn_detached(&mut self.command_for(url))
    }
}

impl UrlOpener for MacOpener {
    fn open(&self, url: &str) -> Result<(), LoginError> {
        spawn_detached(&mut self.command_for(url))
    }
}

impl UrlOpener for LinuxOpener {
    fn open(&self, url: &str) -> Result<(), LoginError> {
        spawn_detached(&mut self.command_for(url))
    }
}

impl UrlOpener for UnsupportedOpener {
    fn open(&self, _url: &str) -> Result<(), LoginError> {
        Err(LoginError::UnsupportedPlatform { os: self.os })
    }
}

/// Pick the opener for an OS name as reported by `std::env::consts::OS`
pub fn opener_for_os(os: &'static str) -> Box<dyn UrlOpener> {
    match os {
        "windows" => Box::new(WindowsOpener),
        "macos" => Box::new(MacOpener),
        "linux" => Box::new(LinuxOpener),
        other => Box::new(UnsupportedOpener { os: other }),
    }
}

/// Opener for the platform this binary runs on
pub fn system_opener() -> Box<dyn UrlOpener> {
    opener_for_os(std::env::consts::OS)
}

// The child is not waited on; the browser outlives this process.
fn spawn_detached(command: &mut Command) -> Result<(), LoginError> {
    tracing::debug!(program = ?command.get_program(), "launching browser");
    command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_| ())
        .map_err(LoginError::BrowserLaunch)
}
