//! File deletion confined to a working tree

use crate::clean::Remover;
use crate::path_checker::PathChecker;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// 作業ツリー内のファイルを削除する Remover
pub struct WorkTreeRemover {
    root: PathBuf,
}

impl WorkTreeRemover {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl Remover for WorkTreeRemover {
    /// 作業ツリー相対パスを解決して削除
    ///
    /// ディレクトリや存在しないパスは `fs::remove_file` の I/O エラーになる。
    fn remove(&self, relative: &str) -> io::Result<()> {
        let target = PathChecker::verify_containment(&self.root, Path::new(relative))
            .map_err(|e| io::Error::new(io::ErrorKind::PermissionDenied, e.to_string()))?;

        fs::remove_file(&target)?;
        tracing::trace!(path = %target.display(), "removed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_remove_file() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir(root.join("b")).unwrap();
        fs::write(root.join("b/c.tmp"), "tmp").unwrap();

        let remover = WorkTreeRemover::new(root);
        remover.remove("b/c.tmp").unwrap();

        assert!(!root.join("b/c.tmp").exists());
        assert!(root.join("b").exists(), "parent directory is kept");
    }

    #[test]
    fn test_remove_missing_file_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let remover = WorkTreeRemover::new(temp_dir.path());

        let err = remover.remove("gone.txt").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_remove_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir(root.join("dir")).unwrap();
        fs::write(root.join("dir/keep.txt"), "keep").unwrap();

        let remover = WorkTreeRemover::new(root);
        assert!(remover.remove("dir").is_err());
        assert!(root.join("dir/keep.txt").exists());
    }

    #[test]
    fn test_remove_outside_root_is_refused() {
        let outside = TempDir::new().unwrap();
        let victim = outside.path().join("victim.txt");
        fs::write(&victim, "keep").unwrap();

        let temp_dir = TempDir::new().unwrap();
        let remover = WorkTreeRemover::new(temp_dir.path());

        let err = remover.remove(victim.to_str().unwrap()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::PermissionDenied);
        assert!(victim.exists());

        let err = remover.remove("../escape.txt").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::PermissionDenied);
    }
}
