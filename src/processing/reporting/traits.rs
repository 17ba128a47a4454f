// 進捗報告のトレイト定義

/// 進捗報告を抽象化するトレイト
#[async_trait::async_trait]
pub trait ProgressReporter: Send + Sync {
    /// 処理開始時の報告
    async fn report_started(&self, total_lines: usize, concurrency: usize);

    /// 進捗率が変化したときの報告（コホート完了ごとに呼ばれる）
    async fn report_progress(&self, percentage: u32, completed: usize, total: usize);

    /// タスク失敗時の報告
    async fn report_error(&self, line: &str, error: &str);

    /// 処理完了時の報告
    async fn report_completed(&self, total_processed: usize, total_errors: usize);
}
