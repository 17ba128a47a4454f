// 基本具象実装
// 設定・進捗報告・サマリー永続化の実装群

use super::{BatchSummary, ProcessingConfig, ProgressReporter, SummaryPersistence};
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
#[cfg(test)]
use std::sync::{Arc, Mutex};

/// デフォルト設定実装
#[derive(Debug, Clone)]
pub struct DefaultProcessingConfig {
    max_concurrent: usize,
    enable_progress: bool,
}

impl DefaultProcessingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_concurrent(mut self, max_concurrent: usize) -> Self {
        self.max_concurrent = max_concurrent;
        self
    }

    pub fn with_progress_reporting(mut self, enable: bool) -> Self {
        self.enable_progress = enable;
        self
    }
}

impl Default for DefaultProcessingConfig {
    fn default() -> Self {
        Self {
            max_concurrent: 1,
            enable_progress: true,
        }
    }
}

impl ProcessingConfig for DefaultProcessingConfig {
    fn max_concurrent_tasks(&self) -> usize {
        self.max_concurrent
    }

    fn enable_progress_reporting(&self) -> bool {
        self.enable_progress
    }
}

/// 進捗行: 右寄せ3桁のパーセントと、その数だけの `#`
pub fn format_progress_line(percentage: u32) -> String {
    format!("{percentage:3}% {}", "#".repeat(percentage as usize))
}

/// 完了メッセージ
pub fn format_completion_line(total_processed: usize) -> String {
    format!("Finished {total_processed} QRCode.")
}

/// コンソール出力による進捗報告実装
#[derive(Debug, Default, Clone)]
pub struct ConsoleProgressReporter {
    quiet: bool,
}

impl ConsoleProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quiet() -> Self {
        Self { quiet: true }
    }
}

#[async_trait]
impl ProgressReporter for ConsoleProgressReporter {
    async fn report_started(&self, total_lines: usize, concurrency: usize) {
        tracing::info!(total_lines, concurrency, "starting QR label generation");
    }

    async fn report_progress(&self, percentage: u32, _completed: usize, _total: usize) {
        if !self.quiet {
            println!("{}", format_progress_line(percentage));
        }
    }

    async fn report_error(&self, line: &str, error: &str) {
        if !self.quiet {
            eprintln!("Failed to generate QRCode for {line:?}: {error}");
        }
    }

    async fn report_completed(&self, total_processed: usize, total_errors: usize) {
        if !self.quiet {
            println!("{}", format_completion_line(total_processed));
            if total_errors > 0 {
                println!("Failed {total_errors} QRCode.");
            }
        }
    }
}

/// 何もしない進捗報告実装（テスト・ベンチマーク用）
#[derive(Debug, Default, Clone)]
pub struct NoOpProgressReporter;

impl NoOpProgressReporter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProgressReporter for NoOpProgressReporter {
    async fn report_started(&self, _total_lines: usize, _concurrency: usize) {
        // 何もしない
    }

    async fn report_progress(&self, _percentage: u32, _completed: usize, _total: usize) {
        // 何もしない
    }

    async fn report_error(&self, _line: &str, _error: &str) {
        // 何もしない
    }

    async fn report_completed(&self, _total_processed: usize, _total_errors: usize) {
        // 何もしない
    }
}

/// サマリーをJSONファイルに書き出す永続化実装
#[derive(Debug, Clone)]
pub struct JsonSummaryPersistence {
    output_path: PathBuf,
}

impl JsonSummaryPersistence {
    pub fn new(output_path: impl AsRef<Path>) -> Self {
        Self {
            output_path: output_path.as_ref().to_path_buf(),
        }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }
}

#[async_trait]
impl SummaryPersistence for JsonSummaryPersistence {
    async fn store_summary(&self, summary: &BatchSummary) -> Result<()> {
        let json = serde_json::to_vec_pretty(summary).context("Failed to serialize summary")?;
        tokio::fs::write(&self.output_path, json)
            .await
            .with_context(|| format!("Failed to write summary: {}", self.output_path.display()))
    }
}

/// メモリ内保存の永続化実装（テスト用）
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct MemorySummaryPersistence {
    stored: Arc<Mutex<Vec<BatchSummary>>>,
}

#[cfg(test)]
impl MemorySummaryPersistence {
    pub fn new() -> Self {
        Self::default()
    }

    /// テスト用：保存されたサマリーを取得
    pub fn get_stored_data(&self) -> Vec<BatchSummary> {
        self.stored
            .lock()
            .map(|stored| stored.clone())
            .unwrap_or_default()
    }
}

#[cfg(test)]
#[async_trait]
impl SummaryPersistence for MemorySummaryPersistence {
    async fn store_summary(&self, summary: &BatchSummary) -> Result<()> {
        self.stored
            .lock()
            .map_err(|_| anyhow::anyhow!("summary store lock poisoned"))?
            .push(summary.clone());
        Ok(())
    }
}
