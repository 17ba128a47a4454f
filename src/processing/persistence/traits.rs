// データ永続化のトレイト定義

use crate::processing::types::BatchSummary;

/// バッチ処理サマリーの永続化を抽象化するトレイト
#[async_trait::async_trait]
pub trait SummaryPersistence: Send + Sync {
    /// サマリーを保存
    async fn store_summary(&self, summary: &BatchSummary) -> anyhow::Result<()>;
}
