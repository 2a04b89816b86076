//! safe-clean: remove untracked files from a Git working tree
//!
//! The core is [`clean::CleanOperation`], which takes the untracked listing
//! from a [`clean::StatusSource`], filters it by an optional path set and
//! deletes through a [`clean::Remover`] unless running as a dry run.

pub mod clean;
pub mod cli;
pub mod config;
pub mod error;
pub mod git_status;
pub mod init;
pub mod logging;
pub mod path_checker;
pub mod remover;
