use super::{sanitize_file_stem, StorageBackend};
use anyhow::{Context, Result};
use image::{ImageFormat, RgbImage};
use std::path::{Path, PathBuf};

/// ローカルファイルシステム用のストレージバックエンド
#[derive(Clone, Debug)]
pub struct LocalStorageBackend {
    root: PathBuf,
}

impl Default for LocalStorageBackend {
    fn default() -> Self {
        Self::new(".")
    }
}

impl LocalStorageBackend {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// 出力ディレクトリ
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// 出力ディレクトリがなければ作成
    pub fn ensure_root(&self) -> Result<()> {
        std::fs::create_dir_all(&self.root)
            .with_context(|| format!("Failed to create output directory: {}", self.root.display()))
    }
}

impl StorageBackend for LocalStorageBackend {
    fn output_path(&self, line: &str) -> PathBuf {
        self.root.join(format!("{}.png", sanitize_file_stem(line)))
    }

    fn write_png(&self, line: &str, image: &RgbImage) -> Result<PathBuf> {
        let path = self.output_path(line);
        image
            .save_with_format(&path, ImageFormat::Png)
            .with_context(|| format!("Failed to write PNG: {}", path.display()))?;
        Ok(path)
    }
}
