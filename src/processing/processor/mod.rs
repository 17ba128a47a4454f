// 行単位のタスク処理
//
// スケジューラーは LineProcessor だけを知っていればよい。
// 本番実装は engine.rs の LabelEngine。

pub mod traits;


// 公開API
pub use traits::*;

// テストモック（テスト時のみ）
#[cfg(test)]
pub use test_mocks::*;
