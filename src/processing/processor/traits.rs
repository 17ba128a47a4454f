// 行処理のトレイト定義

use crate::processing::types::TaskOutcome;

/// 入力1行を処理するタスクを抽象化するトレイト
///
/// ブロッキングスレッドプール上で呼ばれる。失敗は `TaskOutcome::Failure` で返し、
/// バッチ全体は止めない。
pub trait LineProcessor: Send + Sync + 'static {
    fn process_line(&self, line: &str) -> TaskOutcome;
}

impl<P: LineProcessor + ?Sized> LineProcessor for Box<P> {
    fn process_line(&self, line: &str) -> TaskOutcome {
        self.as_ref().process_line(line)
    }
}
