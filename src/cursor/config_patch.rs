//! Token substitution in the adapter's config.yaml
//!
//! The config is treated as plain text: only the quoted placeholder cookie
//! values are replaced, everything else is left byte-for-byte intact. Files
//! need not be valid UTF-8.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::LoginError;

/// Placeholder cookie lines shipped in sample configs
pub const COOKIE_PLACEHOLDERS: [&str; 2] = [
    r#"cookie: "YOUR_CURSOR_TOKEN_HERE""#,
    r#"cookie: "your_cursor_session_token_here""#,
];

/// What happened to one config file
#[derive(Debug)]
pub enum PatchOutcome {
    /// Placeholder replaced and file rewritten
    Updated(PathBuf),
    /// File exists but has no placeholder; not rewritten
    Unchanged(PathBuf),
    Missing(PathBuf),
    Failed(LoginError),
}

/// Replace every placeholder cookie in `content` with `token`
pub fn replace_placeholders(content: &[u8], token: &str) -> Vec<u8> {
    let cookie = format!(r#"cookie: "{}""#, token);
    COOKIE_PLACEHOLDERS
        .iter()
        .fold(content.to_vec(), |acc, placeholder| {
            replace_bytes(&acc, placeholder.as_bytes(), cookie.as_bytes())
        })
}

/// Non-overlapping, left-to-right replacement of `from` with `to`
fn replace_bytes(haystack: &[u8], from: &[u8], to: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(haystack.len());
    let mut rest = haystack;

    while let Some(pos) = rest.windows(from.len()).position(|w| w == from) {
        out.extend_from_slice(&rest[..pos]);
        out.extend_from_slice(to);
        rest = &rest[pos + from.len()..];
    }
    out.extend_from_slice(rest);
    out
}

/// Patch a single file, skipping it if it does not exist
pub fn patch_config_file<P: AsRef<Path>>(path: P, token: &str) -> Result<PatchOutcome, LoginError> {
    let path = path.as_ref();

    if !path.exists() {
        return Ok(PatchOutcome::Missing(path.to_path_buf()));
    }

    let content = fs::read(path).map_err(|source| LoginError::ConfigPatch {
        path: path.to_path_buf(),
        source,
    })?;

    let patched = replace_placeholders(&content, token);
    if patched == content {
        return Ok(PatchOutcome::Unchanged(path.to_path_buf()));
    }

    fs::write(path, patched).map_err(|source| LoginError::ConfigPatch {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(PatchOutcome::Updated(path.to_path_buf()))
}

/// Patch every path; failures are collected per path, never propagated
pub fn patch_configs(paths: &[PathBuf], token: &str) -> Vec<PatchOutcome> {
    paths
        .iter()
        .map(|path| patch_config_file(path, token).unwrap_or_else(PatchOutcome::Failed))
        .collect()
}
