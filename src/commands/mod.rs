//! CLI commands

pub mod login;
