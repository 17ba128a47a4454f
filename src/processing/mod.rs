// 並列処理システムのモジュール
// 機能別フォルダ構造によるアーキテクチャ

// コアモジュール
pub mod error; // エラー型
pub mod types; // データ構造定義

// 機能モジュール (抽象化レベル別)
pub mod config; // 設定管理
pub mod persistence; // サマリー永続化
pub mod processor; // 行単位のタスク処理
pub mod reporting; // 進捗報告・監視

// 実装モジュール
pub mod engine;
pub mod implementations;
pub mod parallel_execution;

#[cfg(test)]
pub mod tests;

// 公開API - 各機能から再エクスポート
pub use config::ProcessingConfig;
pub use engine::LabelEngine;
pub use error::{ProcessingError, ProcessingResult};
pub use implementations::{
    ConsoleProgressReporter, DefaultProcessingConfig, JsonSummaryPersistence, NoOpProgressReporter,
};
#[cfg(test)]
pub use implementations::MemorySummaryPersistence;
pub use parallel_execution::{BatchScheduler, ProgressTracker};
pub use persistence::SummaryPersistence;
pub use processor::LineProcessor;
pub use reporting::ProgressReporter;
pub use types::*;
