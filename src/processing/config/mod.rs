// 並列処理の設定管理
//
// このモジュールは設定管理機能を提供する。
// 実装は implementations.rs の DefaultProcessingConfig。

pub mod traits;


// 公開API
pub use traits::*;

// テストモック（テスト時のみ）
#[cfg(test)]
pub use test_mocks::*;
