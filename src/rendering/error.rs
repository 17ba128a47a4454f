// ラベル生成タスク単位のエラー型

use crate::processing::types::FailureKind;
use crate::qr_encoder::EncodeError;
use std::path::Path;
use thiserror::Error;

/// 1行分のラベル生成で発生するエラー
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("QRエンコードエラー: {line} - {source}")]
    Encode {
        line: String,
        #[source]
        source: EncodeError,
    },

    #[error("画像書き込みエラー: {path} - {source}")]
    Write {
        path: String,
        #[source]
        source: anyhow::Error,
    },
}

impl RenderError {
    /// エンコードエラーの作成
    pub fn encode(line: impl Into<String>, source: EncodeError) -> Self {
        Self::Encode {
            line: line.into(),
            source,
        }
    }

    /// 書き込みエラーの作成
    pub fn write(path: &Path, source: anyhow::Error) -> Self {
        Self::Write {
            path: path.display().to_string(),
            source,
        }
    }

    /// 集計用のエラー種別
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Encode {
                source: EncodeError::CapacityExceeded { .. },
                ..
            } => FailureKind::CapacityExceeded,
            Self::Encode { .. } => FailureKind::Encode,
            Self::Write { .. } => FailureKind::Write,
        }
    }
}
