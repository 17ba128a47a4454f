// 処理結果サマリーの永続化
//
// 実装は implementations.rs の JsonSummaryPersistence / MemorySummaryPersistence。

pub mod traits;

// 公開API
pub use traits::*;
