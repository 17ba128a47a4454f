// 入力テキストファイルの読み込み

use anyhow::{Context, Result};
use std::path::Path;

/// 1行あたりの最大バイト数（これを超える行は切り詰める）
pub const MAX_LINE_BYTES: usize = 1023;

/// 入力ファイルを行のリストに変換するローダー
pub struct InputLoader;

impl InputLoader {
    /// ファイルを読み込み、空行を除いた行を出現順に返す
    ///
    /// 不正なUTF-8は置換文字に変換し、`\r\n` の `\r` は取り除く。
    pub async fn load_lines(path: &Path) -> Result<Vec<String>> {
        let bytes = tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read input file: {}", path.display()))?;

        let lines = Self::parse_lines(&String::from_utf8_lossy(&bytes));
        tracing::debug!(path = %path.display(), lines = lines.len(), "input loaded");
        Ok(lines)
    }

    /// テキストを行に分割する
    pub fn parse_lines(content: &str) -> Vec<String> {
        content
            .lines()
            .filter(|line| !line.is_empty())
            .map(|line| truncate_line(line).to_string())
            .collect()
    }
}

/// 文字境界を保ったまま MAX_LINE_BYTES 以下に切り詰める
fn truncate_line(line: &str) -> &str {
    if line.len() <= MAX_LINE_BYTES {
        return line;
    }

    let mut end = MAX_LINE_BYTES;
    while !line.is_char_boundary(end) {
        end -= 1;
    }
    tracing::warn!(
        original_bytes = line.len(),
        kept_bytes = end,
        "input line truncated"
    );
    &line[..end]
}
