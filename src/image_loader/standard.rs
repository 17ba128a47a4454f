use super::{ImageLoaderBackend, LoadResult};
use crate::rendering::layout::LOGO_SIZE;
use anyhow::{Context, Result};
use async_trait::async_trait;
use image::imageops::FilterType;
use image::{DynamicImage, RgbImage};
use std::path::Path;
use std::time::Instant;

/// 標準的な画像ローダー実装
///
/// 透過チャンネルは捨ててRGB8で保持する。
#[derive(Clone, Debug)]
pub struct StandardImageLoader {
    target_dimensions: Option<(u32, u32)>,
}

impl Default for StandardImageLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl StandardImageLoader {
    /// リサイズなしの画像ローダーを作成
    pub fn new() -> Self {
        Self {
            target_dimensions: None,
        }
    }

    /// 読み込み後に指定サイズへ強制リサイズする画像ローダーを作成
    pub fn with_exact_dimensions(width: u32, height: u32) -> Self {
        Self {
            target_dimensions: Some((width, height)),
        }
    }

    /// ロゴ用（LOGO_SIZE x LOGO_SIZE）の画像ローダーを作成
    pub fn for_logo() -> Self {
        Self::with_exact_dimensions(LOGO_SIZE, LOGO_SIZE)
    }

    /// 必要に応じて画像をリサイズ（アスペクト比は保持しない）
    fn resize_if_needed(&self, image: RgbImage) -> (RgbImage, bool) {
        match self.target_dimensions {
            Some((width, height)) if image.dimensions() != (width, height) => {
                let resized = image::imageops::resize(&image, width, height, FilterType::Triangle);
                (resized, true)
            }
            _ => (image, false),
        }
    }

    fn finish(&self, image: DynamicImage, start_time: Instant) -> LoadResult {
        let image = image.to_rgb8();
        let original_dimensions = image.dimensions();
        let (final_image, was_resized) = self.resize_if_needed(image);
        let load_time_ms = start_time.elapsed().as_millis() as u64;

        LoadResult {
            image: final_image,
            original_dimensions,
            was_resized,
            load_time_ms,
        }
    }
}

#[async_trait]
impl ImageLoaderBackend for StandardImageLoader {
    async fn load_from_bytes(&self, data: &[u8]) -> Result<LoadResult> {
        let start_time = Instant::now();

        let image = tokio::task::spawn_blocking({
            let data = data.to_vec();
            move || image::load_from_memory(&data)
        })
        .await
        .context("Failed to spawn blocking task for image loading")?
        .context("Failed to load image from memory")?;

        Ok(self.finish(image, start_time))
    }

    async fn load_from_path(&self, path: &Path) -> Result<LoadResult> {
        let data = tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read image file: {}", path.display()))?;

        // 形式は拡張子ではなく内容から判定する
        self.load_from_bytes(&data)
            .await
            .with_context(|| format!("Failed to load image from path: {}", path.display()))
    }

    fn strategy_name(&self) -> &'static str {
        if self.target_dimensions.is_some() {
            "Standard with exact resize"
        } else {
            "Standard"
        }
    }
}
