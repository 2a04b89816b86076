//! The clean operation
//!
//! Removes untracked files from a working tree, optionally restricted to a
//! set of paths and optionally simulated (dry run).

use crate::error::CleanError;
use std::collections::{BTreeSet, HashSet};
use std::io;

/// Source of the untracked-path listing for a working tree.
///
/// Paths are working-tree-relative and `/`-separated. Classification
/// (tracked, ignored, untracked) is entirely the implementor's concern.
pub trait StatusSource {
    fn untracked(&self) -> io::Result<Vec<String>>;
}

/// Deletion primitive for a single working-tree-relative path.
pub trait Remover {
    fn remove(&self, relative: &str) -> io::Result<()>;
}

impl<T: StatusSource + ?Sized> StatusSource for &T {
    fn untracked(&self) -> io::Result<Vec<String>> {
        (**self).untracked()
    }
}

impl<T: Remover + ?Sized> Remover for &T {
    fn remove(&self, relative: &str) -> io::Result<()> {
        (**self).remove(relative)
    }
}

/// Options recognised by [`CleanOperation`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanOptions {
    /// Only these paths are affected. Empty means every untracked path.
    pub paths: HashSet<String>,
    /// Report what would be removed without touching the filesystem.
    pub dry_run: bool,
}

impl CleanOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the path restriction (not additive).
    pub fn with_paths<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.paths = paths.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Whether `path` passes the restriction
    pub fn selects(&self, path: &str) -> bool {
        self.paths.is_empty() || self.paths.contains(path)
    }
}

/// Clean operation bound to a status source and a deletion primitive
///
/// Holds no state besides its options, so `execute` may be called any number
/// of times; each call re-queries the status source.
pub struct CleanOperation<S, R> {
    status: S,
    remover: R,
    options: CleanOptions,
}

impl<S: StatusSource, R: Remover> CleanOperation<S, R> {
    pub fn new(status: S, remover: R, options: CleanOptions) -> Self {
        Self {
            status,
            remover,
            options,
        }
    }

    /// Remove (or, in dry-run mode, list) the selected untracked files
    ///
    /// # Returns
    /// * `Ok(BTreeSet<String>)` - affected paths, sorted
    /// * `Err(CleanError::OperationFailure)` - status query or deletion failed;
    ///   deletions already performed are kept
    pub fn execute(&self) -> Result<BTreeSet<String>, CleanError> {
        let untracked = self.status.untracked().map_err(|e| {
            tracing::warn!(error = %e, "failed to read working tree status");
            CleanError::operation_failure(e)
        })?;

        let mut files = BTreeSet::new();
        for path in untracked {
            if !self.options.selects(&path) {
                continue;
            }

            if !self.options.dry_run {
                if let Err(e) = self.remover.remove(&path) {
                    tracing::warn!(path = %path, error = %e, removed = files.len(), "clean aborted");
                    return Err(CleanError::OperationFailure {
                        message: format!("failed to remove '{}': {}", path, e),
                        source: e,
                    });
                }
            }

            tracing::debug!(path = %path, dry_run = self.options.dry_run, "cleaned");
            files.insert(path);
        }

        tracing::info!(
            count = files.len(),
            dry_run = self.options.dry_run,
            "clean finished"
        );
        Ok(files)
    }
}
