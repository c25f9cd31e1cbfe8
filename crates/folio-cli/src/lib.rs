//! Command-line front end for Folio.
//!
//! # Modules
//!
//! - [`cli`]: Argument and command definitions
//! - [`config`]: [`FolioConfig`] loading from file, environment and defaults
//! - [`config_handlers`]: `folio config` subcommands
//! - [`handlers`]: `folio resolve`, `check` and `schemas`
//! - [`app`]: [`FolioCli`], logging setup and dispatch

#![doc = include_str!("../README.md")]

pub mod app;
pub mod cli;
pub mod config;
pub mod config_handlers;
pub mod handlers;

pub use app::FolioCli;
pub use cli::{CliArgs, Command, ConfigAction, ConfigCommand};
pub use config::{ContentConfig, FolioConfig, ResolveConfig};
