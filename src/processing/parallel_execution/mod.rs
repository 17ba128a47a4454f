// 並列実行機能
// コホート単位のバリア同期による並列処理とオーケストレーション

pub mod progress;
pub mod scheduler;

// 公開API
pub use progress::ProgressTracker;
pub use scheduler::BatchScheduler;
