//! cursor-login: obtain a Cursor session token and write it into config.yaml
//!
//! This tool is not affiliated with or endorsed by Anysphere, Inc. (Cursor).

use anyhow::Result;
use clap::Parser;
use owo_colors::OwoColorize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use cursor_login::commands;
use cursor_login::config::{self, LoginSettings};

#[derive(Parser)]
#[command(name = "cursor-login")]
#[command(about = "Log into Cursor and save the session token", long_about = None)]
#[command(version)]
struct Cli {
    /// Config file to patch with the token (repeatable; defaults to
    /// ./config.yaml and ./config/config.yaml)
    #[arg(long = "config", value_name = "PATH")]
    config_paths: Vec<PathBuf>,

    /// Print the login URL without launching a browser
    #[arg(long)]
    no_browser: bool,

    /// Base URL of the browser login page
    #[arg(long, env = "CURSOR_LOGIN_URL", default_value = config::DEFAULT_LOGIN_URL)]
    login_url: String,

    /// Auth poll endpoint
    #[arg(long, env = "CURSOR_POLL_URL", default_value = config::DEFAULT_POLL_URL)]
    poll_url: String,

    /// Show debug diagnostics on stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn into_settings(self) -> LoginSettings {
        let config_paths = if self.config_paths.is_empty() {
            config::default_config_paths()
        } else {
            self.config_paths
        };

        LoginSettings {
            login_url: self.login_url,
            poll_url: self.poll_url,
            config_paths,
            open_browser: !self.no_browser,
            ..LoginSettings::default()
        }
    }
}

/// Default filter; `--verbose` only raises this crate's own diagnostics
fn log_filter(verbose: bool) -> &'static str {
    if verbose {
        "cursor_login=debug,warn"
    } else {
        "warn"
    }
}

fn init_tracing(verbose: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_filter(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    println!("{}", "=== Cursor Login Tool ===".green());

    let settings = cli.into_settings();
    let outcome = commands::login::execute(&settings)?;

    println!("\nLogin successful! You can now use the adapter with Cursor.");
    println!("Your token has been saved to config.yaml (if it exists).");
    println!("\nTo use this token in API requests, include it in the Authorization header:");
    println!("Authorization: {}", outcome.token);

    Ok(())
}
