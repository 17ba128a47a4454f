use anyhow::Result;
use image::RgbImage;
use mockall::automock;
use std::path::PathBuf;

pub mod local;

/// 出力ファイル名に使えない文字
const FORBIDDEN_CHARS: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// 入力行を出力ファイル名（拡張子なし）に変換する
///
/// パス区切りや予約文字、制御文字は `_` に置き換える。
/// 同名になった場合は後から書いたものが上書きする。
/// 長さは切り詰めないため、長い行はファイルシステムの名前長制限で書き込みに失敗しうる。
pub fn sanitize_file_stem(line: &str) -> String {
    let stem: String = line
        .chars()
        .map(|c| {
            if FORBIDDEN_CHARS.contains(&c) || c.is_control() {
                '_'
            } else {
                c
            }
        })
        .collect();

    match stem.as_str() {
        "" | "." | ".." => "_".to_string(),
        _ => stem,
    }
}

/// 生成画像の保存先バックエンドのトレイト
///
/// レンダリングと同じブロッキングスレッドから呼ばれるため同期API。
#[automock]
pub trait StorageBackend: Send + Sync {
    /// 入力行に対応する出力パスを返す
    fn output_path(&self, line: &str) -> PathBuf;

    /// 画像をPNGとして書き込み、書き込んだパスを返す
    fn write_png(&self, line: &str, image: &RgbImage) -> Result<PathBuf>;
}

impl StorageBackend for Box<dyn StorageBackend> {
    fn output_path(&self, line: &str) -> PathBuf {
        self.as_ref().output_path(line)
    }

    fn write_png(&self, line: &str, image: &RgbImage) -> Result<PathBuf> {
        self.as_ref().write_png(line, image)
    }
}
