// キャプション（入力行テキスト）の計測と描画

use super::layout::CanvasLayout;
use ab_glyph::{Font, FontRef, InvalidFont, PxScale, ScaleFont};
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_text_mut, text_size};

/// 同梱のキャプション用フォント
const CAPTION_FONT_BYTES: &[u8] = include_bytes!("../../assets/DejaVuSerif-Italic.ttf");

/// キャプションのピクセルスケール
pub const CAPTION_SCALE: f32 = 48.0;
/// 線の太さ（ピクセル）
pub const STROKE_WIDTH: u32 = 5;

const STROKE_RADIUS: i32 = (STROKE_WIDTH / 2) as i32;
const CAPTION_COLOR: Rgb<u8> = Rgb([0, 0, 0]);

/// キャプション描画に使うフォント
#[derive(Clone, Debug)]
pub struct CaptionFont {
    font: FontRef<'static>,
    scale: PxScale,
}

impl CaptionFont {
    /// 同梱フォントを読み込む
    pub fn bundled() -> Result<Self, InvalidFont> {
        Ok(Self {
            font: FontRef::try_from_slice(CAPTION_FONT_BYTES)?,
            scale: PxScale::from(CAPTION_SCALE),
        })
    }

    /// 線の太さを含めたテキストの幅と高さ
    pub fn measure(&self, text: &str) -> (u32, u32) {
        let (width, height) = text_size(self.scale, &self.font, text);
        if width == 0 && height == 0 {
            return (0, 0);
        }
        (width + STROKE_WIDTH - 1, height + STROKE_WIDTH - 1)
    }

    /// テキストを水平中央、下端付近にベースラインを合わせて描く
    pub fn draw(&self, canvas: &mut RgbImage, layout: &CanvasLayout, text: &str) {
        let (text_width, text_height) = self.measure(text);
        if text_width == 0 {
            return;
        }

        let ascent = self.font.as_scaled(self.scale).ascent().round() as i32;
        let left = layout.caption_left(text_width) + STROKE_RADIUS;
        let top = layout.caption_baseline(text_height) - ascent;

        // 半径STROKE_RADIUSの円内の各オフセットに重ね描きして太線にする
        for dy in -STROKE_RADIUS..=STROKE_RADIUS {
            for dx in -STROKE_RADIUS..=STROKE_RADIUS {
                if dx * dx + dy * dy > STROKE_RADIUS * STROKE_RADIUS {
                    continue;
                }
                draw_text_mut(
                    canvas,
                    CAPTION_COLOR,
                    left + dx,
                    top + dy,
                    self.scale,
                    &self.font,
                    text,
                );
            }
        }
    }
}
