//! Error types for safe-clean
//!
//! Defines CleanError and its exit codes.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// safe-clean のエラー型
#[derive(Debug, Error)]
pub enum CleanError {
    // clean 処理の失敗（Exit 1）
    /// ステータス取得または削除中の I/O エラー
    #[error("{message}")]
    OperationFailure {
        message: String,
        #[source]
        source: io::Error,
    },

    // リポジトリ解決エラー（Exit 1）
    /// Git リポジトリが見つからない
    #[error("not a git repository (or any of the parent directories): {}", .0.display())]
    NotARepository(PathBuf),
    /// bare リポジトリ（作業ツリーなし）
    #[error("this operation must be run in a work tree")]
    NoWorkTree,

    // 拒否（Exit 2）
    /// 作業ツリー外のパス指定
    #[error("'{}' is outside the work tree at '{}'", .path.display(), .root.display())]
    OutsideWorkTree { path: PathBuf, root: PathBuf },
    /// require_force 有効時に -f / -n がない
    #[error("require_force is enabled and neither -n nor -f given; refusing to clean")]
    ForceRequired,

    // システムエラー（Exit 1）
    /// I/O エラー
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// Git 操作エラー
    #[error("Git error: {0}")]
    Git(#[from] git2::Error),
}

impl CleanError {
    /// 下位の I/O エラーを OperationFailure で包む
    pub fn operation_failure(source: io::Error) -> Self {
        Self::OperationFailure {
            message: source.to_string(),
            source,
        }
    }

    /// 終了コードを取得
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::OutsideWorkTree { .. } | Self::ForceRequired => 2,
            _ => 1,
        }
    }

    /// 利用者向けのエラーメッセージ
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}
