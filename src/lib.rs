pub mod cli;
pub mod image_loader;
pub mod input_loader;
pub mod logging;
pub mod processing;
pub mod qr_encoder;
pub mod rendering;
pub mod storage;

use image::RgbImage;
use input_loader::InputLoader;
use processing::{
    BatchScheduler, BatchSummary, LabelEngine, ProcessingConfig, ProcessingError,
    ProcessingResult, ProgressReporter,
};
use rendering::LabelRenderer;
use std::path::Path;
use std::sync::Arc;

// DIコンテナの役割を果たすジェネリックなApp構造体
// 依存関係を直接所有し、run で処理エンジンへ移譲する
pub struct App<L, E, S>
where
    L: image_loader::ImageLoaderBackend,
    E: qr_encoder::QrEncoderBackend,
    S: storage::StorageBackend,
{
    pub loader: L,
    pub encoder: E,
    pub storage: S,
}

impl<L, E, S> App<L, E, S>
where
    L: image_loader::ImageLoaderBackend,
    E: qr_encoder::QrEncoderBackend + 'static,
    S: storage::StorageBackend + 'static,
{
    /// 新しいAppインスタンスを作成（コンストラクタインジェクション）
    pub fn new(loader: L, encoder: E, storage: S) -> Self {
        Self {
            loader,
            encoder,
            storage,
        }
    }

    /// ロゴ画像を読み込む
    pub async fn load_logo(&self, logo_path: &Path) -> ProcessingResult<RgbImage> {
        let loaded = self
            .loader
            .load_from_path(logo_path)
            .await
            .map_err(|e| ProcessingError::logo_load(logo_path.display().to_string(), e))?;

        if loaded.was_resized {
            tracing::debug!(
                original = ?loaded.original_dimensions,
                resized = ?loaded.image.dimensions(),
                "logo resized"
            );
        }
        Ok(loaded.image)
    }

    /// ロゴと入力ファイルを読み込み、全行のラベルを生成する
    ///
    /// ロゴ・入力ファイルの読み込み失敗は処理開始前のエラーとして返す。
    pub async fn run<C, R>(
        self,
        input_file: &Path,
        logo_path: &Path,
        config: C,
        reporter: R,
    ) -> ProcessingResult<BatchSummary>
    where
        C: ProcessingConfig,
        R: ProgressReporter,
    {
        let logo = self.load_logo(logo_path).await?;

        let lines = InputLoader::load_lines(input_file)
            .await
            .map_err(|e| ProcessingError::input_load(input_file.display().to_string(), e))?;

        let renderer = LabelRenderer::new(self.encoder, logo)
            .map_err(|e| ProcessingError::configuration(format!("{e:#}")))?;
        let engine = LabelEngine::new(renderer, self.storage);

        let scheduler = BatchScheduler::new(Arc::new(engine), config, Arc::new(reporter));
        scheduler.run(lines).await
    }
}
