// BatchScheduler - コホート単位の並列実行
//
// 入力行を並列数ごとのコホートに分け、コホート内の全タスクが終わるまで
// 次のコホートを開始しない（スライディングウィンドウではない）。

use super::progress::ProgressTracker;
use crate::processing::error::{ProcessingError, ProcessingResult};
use crate::processing::types::{BatchSummary, FailedLine, FailureKind, TaskOutcome};
use crate::processing::{LineProcessor, ProcessingConfig, ProgressReporter};
use chrono::Utc;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::time::Instant;
use tokio::task::JoinSet;

/// 依存性注入によるバッチスケジューラー
pub struct BatchScheduler<P, C, R> {
    processor: Arc<P>,
    config: C,
    reporter: Arc<R>,
}

impl<P, C, R> BatchScheduler<P, C, R>
where
    P: LineProcessor,
    C: ProcessingConfig,
    R: ProgressReporter,
{
    /// コンストラクタインジェクション
    pub fn new(processor: Arc<P>, config: C, reporter: Arc<R>) -> Self {
        Self {
            processor,
            config,
            reporter,
        }
    }

    /// 全行を処理してサマリーを返す
    ///
    /// タスク単位の失敗は集計されるだけで、残りの行の処理は続く。
    pub async fn run(&self, lines: Vec<String>) -> ProcessingResult<BatchSummary> {
        let concurrency = self.config.max_concurrent_tasks();
        if concurrency == 0 {
            return Err(ProcessingError::configuration(
                "並列タスク数は1以上である必要があります",
            ));
        }

        let started_at = Utc::now();
        let start_time = Instant::now();
        let total_lines = lines.len();

        self.reporter.report_started(total_lines, concurrency).await;

        let mut tracker = ProgressTracker::new(total_lines);
        let mut succeeded = 0usize;
        let mut failures = Vec::new();
        let mut cohorts = 0usize;

        let mut remaining = lines.into_iter();
        loop {
            let cohort: Vec<String> = remaining.by_ref().take(concurrency).collect();
            if cohort.is_empty() {
                break;
            }
            cohorts += 1;
            tracing::debug!(cohort = cohorts, size = cohort.len(), "starting cohort");

            for outcome in self.run_cohort(cohort).await? {
                match outcome {
                    TaskOutcome::Success { .. } => succeeded += 1,
                    TaskOutcome::Failure { line, kind, error } => {
                        self.reporter.report_error(&line, &error).await;
                        failures.push(FailedLine { line, kind, error });
                    }
                }
            }

            let processed = succeeded + failures.len();
            if self.config.enable_progress_reporting() {
                if let Some(percentage) = tracker.advance(processed) {
                    self.reporter
                        .report_progress(percentage, processed, total_lines)
                        .await;
                }
            }
        }

        let failed = failures.len();
        self.reporter
            .report_completed(succeeded + failed, failed)
            .await;

        let summary = BatchSummary {
            total_lines,
            succeeded,
            failed,
            cohorts,
            concurrency,
            failures,
            started_at,
            finished_at: Utc::now(),
            total_processing_time_ms: start_time.elapsed().as_millis() as u64,
        };
        tracing::info!(
            total = summary.total_lines,
            succeeded = summary.succeeded,
            failed = summary.failed,
            cohorts = summary.cohorts,
            elapsed_ms = summary.total_processing_time_ms,
            "batch finished"
        );

        Ok(summary)
    }

    /// 1コホート分のタスクを起動し、全て終わるまで待つ（バリア）
    ///
    /// 結果は入力順に並べ直して返す。
    async fn run_cohort(&self, cohort: Vec<String>) -> ProcessingResult<Vec<TaskOutcome>> {
        let mut tasks = JoinSet::new();

        for (index, line) in cohort.into_iter().enumerate() {
            let processor = Arc::clone(&self.processor);
            tasks.spawn_blocking(move || (index, process_guarded(processor.as_ref(), line)));
        }

        let mut outcomes = Vec::with_capacity(tasks.len());
        while let Some(joined) = tasks.join_next().await {
            let (index, outcome) = joined.map_err(ProcessingError::task)?;
            outcomes.push((index, outcome));
        }

        outcomes.sort_by_key(|(index, _)| *index);
        Ok(outcomes.into_iter().map(|(_, outcome)| outcome).collect())
    }
}

/// パニックを行単位の失敗として扱う
fn process_guarded<P: LineProcessor>(processor: &P, line: String) -> TaskOutcome {
    match panic::catch_unwind(AssertUnwindSafe(|| processor.process_line(&line))) {
        Ok(outcome) => outcome,
        Err(payload) => {
            let message = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            tracing::warn!(line = %line, panic = %message, "task panicked");
            TaskOutcome::Failure {
                line,
                kind: FailureKind::Panicked,
                error: format!("task panicked: {message}"),
            }
        }
    }
}
