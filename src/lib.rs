//! Local WordPress development environment scaffolder.
//!
//! Collects a project name, WordPress version, port and plugin list, then
//! writes a Docker Compose setup (`.env`, `docker-compose.yml`, a plugin
//! installer script and two tuning files) into a target directory.
//!
//! The public API is organised into layers:
//!
//! - **[`config`]**: merge flags, prompts and defaults into an [`config::EnvironmentConfig`]
//! - **[`templates`]**: render the output files from that configuration
//! - **[`resources`]**: idempotent `check + apply` primitives (directories, files, permissions)
//! - **[`tasks`]**: named pipeline steps wired to resources
//! - **[`commands`]**: the top-level run state machine
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod exec;
pub mod logging;
pub mod resources;
pub mod tasks;
pub mod templates;
