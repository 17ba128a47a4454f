// ラベル付きQRコード画像のレンダリング
//
// 入力行 → URL → QR行列 → キャンバス（モジュール描画・ロゴ合成・キャプション）

pub mod caption;
pub mod error;
pub mod layout;

pub use caption::CaptionFont;
pub use error::RenderError;
pub use layout::CanvasLayout;

use crate::qr_encoder::{QrEncoderBackend, QrMatrix};
use anyhow::{Context, Result};
use image::{Rgb, RgbImage};
use layout::SCALE;

/// QRコードに埋め込むURLの接頭辞
pub const BASE_URL: &str = "http://csgyn.com/t/?qr=";

const DARK: Rgb<u8> = Rgb([0, 0, 0]);
const LIGHT: Rgb<u8> = Rgb([255, 255, 255]);

/// レンダリング済みのラベル画像
#[derive(Debug, Clone)]
pub struct RenderedLabel {
    pub image: RgbImage,
    pub layout: CanvasLayout,
    pub qr_version: i16,
}

/// 入力行をQRエンコード結果とロゴ・キャプション付きの画像に変換するレンダラー
///
/// ロゴとフォントは構築後は読み取り専用なので、`Arc` で複数スレッドから共有できる。
pub struct LabelRenderer<E> {
    encoder: E,
    logo: RgbImage,
    caption_font: CaptionFont,
}

impl<E> LabelRenderer<E>
where
    E: QrEncoderBackend,
{
    /// コンストラクタインジェクション
    pub fn new(encoder: E, logo: RgbImage) -> Result<Self> {
        let caption_font = CaptionFont::bundled().context("Failed to load bundled caption font")?;
        Ok(Self {
            encoder,
            logo,
            caption_font,
        })
    }

    /// 入力行からQRコードに埋め込む文字列を作る（エスケープしない）
    pub fn payload_for(line: &str) -> String {
        format!("{BASE_URL}{line}")
    }

    /// 1行分のラベル画像をメモリ上に生成
    pub fn render(&self, line: &str) -> Result<RenderedLabel, RenderError> {
        let payload = Self::payload_for(line);
        let matrix = self
            .encoder
            .encode(payload.as_bytes())
            .map_err(|e| RenderError::encode(line, e))?;

        let layout = CanvasLayout::for_modules(matrix.width());
        let mut canvas = RgbImage::from_pixel(layout.width(), layout.height(), LIGHT);

        paint_modules(&mut canvas, &matrix, &layout);
        self.composite_logo(&mut canvas, &layout);
        self.caption_font.draw(&mut canvas, &layout, line);

        Ok(RenderedLabel {
            image: canvas,
            layout,
            qr_version: matrix.version(),
        })
    }

    fn composite_logo(&self, canvas: &mut RgbImage, layout: &CanvasLayout) {
        let (x, y) = layout.logo_origin(self.logo.width());
        image::imageops::replace(canvas, &self.logo, x, y);
    }
}

/// 各モジュールをSCALE x SCALEのブロックとして塗る（明モジュールも白で塗る）
fn paint_modules(canvas: &mut RgbImage, matrix: &QrMatrix, layout: &CanvasLayout) {
    let modules = matrix.width() as u32;
    for y in 0..modules {
        for x in 0..modules {
            let color = if matrix.is_dark(x as usize, y as usize) {
                DARK
            } else {
                LIGHT
            };
            let (origin_x, origin_y) = layout.module_origin(x, y);
            for py in origin_y..origin_y + SCALE {
                for px in origin_x..origin_x + SCALE {
                    canvas.put_pixel(px, py, color);
                }
            }
        }
    }
}
