//! Git status for safe-clean
//!
//! Locates the repository for a working directory and lists untracked files.

use crate::clean::StatusSource;
use crate::error::CleanError;
use git2::{ErrorCode, Repository, Status, StatusOptions};
use std::io;
use std::path::Path;

/// Git ステータス取得器
pub struct GitStatus {
    repo: Repository,
}

impl GitStatus {
    /// `start` を含む Git リポジトリを探して開く
    ///
    /// # Returns
    /// * `Ok(GitStatus)` - 作業ツリーを持つリポジトリ
    /// * `Err(CleanError::NotARepository)` - リポジトリなし
    /// * `Err(CleanError::NoWorkTree)` - bare リポジトリ
    pub fn discover(start: &Path) -> Result<Self, CleanError> {
        let repo = Repository::discover(start).map_err(|e| match e.code() {
            ErrorCode::NotFound => CleanError::NotARepository(start.to_path_buf()),
            _ => CleanError::Git(e),
        })?;

        if repo.is_bare() || repo.workdir().is_none() {
            return Err(CleanError::NoWorkTree);
        }

        tracing::debug!(
            workdir = %repo.workdir().map(|p| p.display().to_string()).unwrap_or_default(),
            "opened repository"
        );
        Ok(Self { repo })
    }

    /// 作業ツリーのルート
    pub fn workdir(&self) -> &Path {
        // discover() で bare リポジトリは除外済み
        self.repo.workdir().unwrap_or_else(|| self.repo.path())
    }

    fn list_untracked(&self) -> Result<Vec<String>, git2::Error> {
        let mut opts = StatusOptions::new();
        opts.include_untracked(true);
        opts.recurse_untracked_dirs(true);
        opts.include_ignored(false);
        opts.exclude_submodules(true);

        let statuses = self.repo.statuses(Some(&mut opts))?;
        let mut untracked = Vec::new();
        for entry in statuses.iter() {
            // WT_NEW はインデックスにエントリがないことを示す（INDEX_DELETED と併存しうる）
            if !entry.status().contains(Status::WT_NEW) {
                continue;
            }
            match entry.path() {
                Some(path) => untracked.push(path.to_string()),
                None => {
                    // 非 UTF-8 パスは文字列で扱えないため対象外
                    tracing::warn!(
                        path = %String::from_utf8_lossy(entry.path_bytes()),
                        "skipping untracked path that is not valid UTF-8"
                    );
                }
            }
        }

        Ok(untracked)
    }
}

impl StatusSource for GitStatus {
    fn untracked(&self) -> io::Result<Vec<String>> {
        self.list_untracked()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))
    }
}
