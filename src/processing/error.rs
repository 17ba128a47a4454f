// 並列処理専用のカスタムエラー型定義

use thiserror::Error;

/// 並列処理固有のエラー型
#[derive(Error, Debug)]
pub enum ProcessingError {
    #[error("設定エラー: {message}")]
    ConfigurationError { message: String },

    #[error("入力ファイル読み込みエラー: {path} - {source}")]
    InputLoadError {
        path: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("ロゴ読み込みエラー: {path} - {source}")]
    LogoLoadError {
        path: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("永続化エラー: {source}")]
    PersistenceError {
        #[source]
        source: anyhow::Error,
    },

    #[error("タスクエラー: {source}")]
    TaskError {
        #[source]
        source: tokio::task::JoinError,
    },
}

impl ProcessingError {
    /// 設定エラーの作成
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::ConfigurationError {
            message: message.into(),
        }
    }

    /// 入力ファイル読み込みエラーの作成
    pub fn input_load(path: impl Into<String>, source: anyhow::Error) -> Self {
        Self::InputLoadError {
            path: path.into(),
            source,
        }
    }

    /// ロゴ読み込みエラーの作成
    pub fn logo_load(path: impl Into<String>, source: anyhow::Error) -> Self {
        Self::LogoLoadError {
            path: path.into(),
            source,
        }
    }

    /// 永続化エラーの作成
    pub fn persistence(source: anyhow::Error) -> Self {
        Self::PersistenceError { source }
    }

    /// タスクエラーの作成
    pub fn task(source: tokio::task::JoinError) -> Self {
        Self::TaskError { source }
    }

    /// 処理開始前に中断すべきエラーかどうか
    pub fn is_fatal(&self) -> bool {
        match self {
            Self::ConfigurationError { .. }
            | Self::InputLoadError { .. }
            | Self::LogoLoadError { .. } => true,
            Self::PersistenceError { .. } | Self::TaskError { .. } => false,
        }
    }
}

/// 並列処理の結果型
pub type ProcessingResult<T> = std::result::Result<T, ProcessingError>;
