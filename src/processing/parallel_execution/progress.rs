// 進捗率の計算

/// 処理済み件数から進捗率を求め、変化したときだけ値を返す
#[derive(Debug, Clone)]
pub struct ProgressTracker {
    total: usize,
    last_reported: u32,
}

impl ProgressTracker {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            last_reported: 0,
        }
    }

    /// `floor(processed * 100 / total)`
    pub fn percentage(&self, processed: usize) -> u32 {
        if self.total == 0 {
            return 100;
        }
        let processed = processed.min(self.total) as u64;
        (processed * 100 / self.total as u64) as u32
    }

    /// 前回報告した値から変化していれば新しい進捗率を返す
    pub fn advance(&mut self, processed: usize) -> Option<u32> {
        let percentage = self.percentage(processed);
        if percentage == self.last_reported {
            return None;
        }
        self.last_reported = percentage;
        Some(percentage)
    }
}
