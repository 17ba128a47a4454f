// コア処理エンジン実装
// LabelEngine - 依存性注入による1行単位のラベル生成

use super::processor::LineProcessor;
use super::types::TaskOutcome;
use crate::qr_encoder::QrEncoderBackend;
use crate::rendering::{LabelRenderer, RenderError};
use crate::storage::StorageBackend;
use std::time::Instant;

/// レンダラーと保存先を束ねた行処理エンジン
pub struct LabelEngine<E, S> {
    renderer: LabelRenderer<E>,
    storage: S,
}

impl<E, S> LabelEngine<E, S>
where
    E: QrEncoderBackend + 'static,
    S: StorageBackend + 'static,
{
    /// コンストラクタインジェクション
    pub fn new(renderer: LabelRenderer<E>, storage: S) -> Self {
        Self { renderer, storage }
    }

    /// 1行分の生成と書き込み
    fn generate(&self, line: &str) -> Result<(std::path::PathBuf, usize), RenderError> {
        let label = self.renderer.render(line)?;
        let qr_width = label.layout.modules() as usize;

        let path = self
            .storage
            .write_png(line, &label.image)
            .map_err(|e| RenderError::write(&self.storage.output_path(line), e))?;

        Ok((path, qr_width))
    }
}

impl<E, S> LineProcessor for LabelEngine<E, S>
where
    E: QrEncoderBackend + 'static,
    S: StorageBackend + 'static,
{
    fn process_line(&self, line: &str) -> TaskOutcome {
        let start_time = Instant::now();

        match self.generate(line) {
            Ok((output_path, qr_width)) => {
                let elapsed_ms = start_time.elapsed().as_millis() as u64;
                tracing::debug!(
                    line,
                    path = %output_path.display(),
                    qr_width,
                    elapsed_ms,
                    "label written"
                );
                TaskOutcome::Success {
                    line: line.to_string(),
                    output_path,
                    qr_width,
                    elapsed_ms,
                }
            }
            Err(error) => {
                tracing::warn!(line, error = %error, "label generation failed");
                TaskOutcome::Failure {
                    line: line.to_string(),
                    kind: error.kind(),
                    error: format!("{error:#}"),
                }
            }
        }
    }
}
