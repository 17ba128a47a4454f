// 並列処理のデータ構造定義

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// タスク失敗の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// ペイロードがQRコードの容量を超えた
    CapacityExceeded,
    /// その他のエンコード失敗
    Encode,
    /// 画像ファイルの書き込み失敗
    Write,
    /// タスクがパニックした
    Panicked,
}

/// 1行分の処理結果
#[derive(Debug, Clone, PartialEq)]
pub enum TaskOutcome {
    Success {
        line: String,
        output_path: PathBuf,
        qr_width: usize,
        elapsed_ms: u64,
    },
    Failure {
        line: String,
        kind: FailureKind,
        error: String,
    },
}

impl TaskOutcome {
    pub fn line(&self) -> &str {
        match self {
            Self::Success { line, .. } | Self::Failure { line, .. } => line,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

/// 失敗した行の記録
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailedLine {
    pub line: String,
    pub kind: FailureKind,
    pub error: String,
}

/// バッチ全体の処理結果サマリー
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchSummary {
    pub total_lines: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub cohorts: usize,
    pub concurrency: usize,
    pub failures: Vec<FailedLine>,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub total_processing_time_ms: u64,
}

impl BatchSummary {
    /// 処理済み（成功・失敗を問わない）行数
    pub fn processed(&self) -> usize {
        self.succeeded + self.failed
    }

    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}
