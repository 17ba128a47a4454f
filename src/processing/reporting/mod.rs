// 進捗報告と監視機能
//
// このモジュールは進捗報告機能を提供する。
// 実装は implementations.rs の ConsoleProgressReporter / NoOpProgressReporter。

pub mod traits;


// 公開API
pub use traits::*;

// テストモック（テスト時のみ）
#[cfg(test)]
pub use test_mocks::*;
