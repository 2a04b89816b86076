//! Path validation for safe-clean
//!
//! Normalizes paths, verifies working-tree containment, and converts
//! command-line paths into working-tree-relative strings.

use crate::error::CleanError;
use path_clean::PathClean;
use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

/// パス検証器
pub struct PathChecker;

impl PathChecker {
    /// パスが作業ツリー内にあることを検証
    ///
    /// # Arguments
    /// * `root` - 作業ツリーの絶対パス
    /// * `target_path` - 検証対象のパス（相対または絶対）
    ///
    /// # Returns
    /// * `Ok(PathBuf)` - 正規化された絶対パス
    /// * `Err(CleanError::OutsideWorkTree)` - 作業ツリー外へのアクセス
    pub fn verify_containment(root: &Path, target_path: &Path) -> Result<PathBuf, CleanError> {
        // 字句的に正規化（.. を解決）
        let cleaned_path = Self::to_absolute(root, target_path).clean();
        let cleaned_root = root.clean();

        if !Self::is_contained(&cleaned_root, &cleaned_path) {
            return Err(CleanError::OutsideWorkTree {
                path: target_path.to_path_buf(),
                root: root.to_path_buf(),
            });
        }

        Ok(cleaned_path)
    }

    /// コマンドライン引数を作業ツリー相対の `/` 区切り文字列に変換
    ///
    /// 作業ツリーのルート自体を指す場合は空文字列を返す。
    pub fn repo_relative(workdir: &Path, cwd: &Path, arg: &Path) -> Result<String, CleanError> {
        let root = Self::try_canonicalize(&workdir.clean());
        let base = Self::try_canonicalize(&cwd.clean());
        let absolute = Self::to_absolute(&base, arg).clean();

        let relative = absolute
            .strip_prefix(&root)
            .map_err(|_| CleanError::OutsideWorkTree {
                path: arg.to_path_buf(),
                root: workdir.to_path_buf(),
            })?;

        Ok(Self::to_slash(relative))
    }

    /// コマンドライン引数からパス制限を作る
    ///
    /// 作業ツリーのルートを指す引数が含まれる場合は制限なし（空集合）。
    pub fn restriction(
        workdir: &Path,
        cwd: &Path,
        args: &[PathBuf],
    ) -> Result<HashSet<String>, CleanError> {
        let mut paths = HashSet::new();
        for arg in args {
            let relative = Self::repo_relative(workdir, cwd, arg)?;
            if relative.is_empty() {
                return Ok(HashSet::new());
            }
            paths.insert(relative);
        }
        Ok(paths)
    }

    /// 相対パスを絶対パスに変換
    fn to_absolute(base: &Path, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            base.join(path)
        }
    }

    /// 可能であれば canonicalize、失敗時は元のパスを返す
    fn try_canonicalize(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
    }

    /// パスがルート内に含まれているかチェック
    fn is_contained(root: &Path, path: &Path) -> bool {
        path.starts_with(root)
    }

    /// Git 形式（`/` 区切り）に変換
    fn to_slash(path: &Path) -> String {
        path.components()
            .filter_map(|c| match c {
                Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("/")
    }
}
