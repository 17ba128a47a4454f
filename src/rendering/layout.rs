// キャンバスの寸法と各要素の配置計算

/// 1モジュールあたりのピクセル数
pub const SCALE: u32 = 25;
/// QRコード周囲の余白（ピクセル）
pub const SPACING: u32 = 25;
/// キャプション用に下へ追加する高さ（ピクセル）
pub const CAPTION_HEIGHT: u32 = 75;
/// ロゴの一辺（ピクセル）
pub const LOGO_SIZE: u32 = 200;

/// 一辺 `modules` モジュールのQRコードを描くキャンバスの配置情報
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasLayout {
    modules: u32,
    width: u32,
    height: u32,
}

impl CanvasLayout {
    pub fn for_modules(modules: usize) -> Self {
        let modules = modules as u32;
        let width = 2 * SPACING + modules * SCALE;
        Self {
            modules,
            width,
            height: width + CAPTION_HEIGHT,
        }
    }

    pub fn modules(&self) -> u32 {
        self.modules
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// モジュール `(x, y)` のブロック左上のピクセル座標
    pub fn module_origin(&self, x: u32, y: u32) -> (u32, u32) {
        (SPACING + x * SCALE, SPACING + y * SCALE)
    }

    /// ロゴ左上のピクセル座標
    ///
    /// 縦方向にも横方向と同じオフセットを使うので、ロゴはキャンバス全体ではなく
    /// 上部の正方形（QRコード領域）の中央に来る。
    pub fn logo_origin(&self, logo_width: u32) -> (i64, i64) {
        let offset = (i64::from(self.width) - i64::from(logo_width)) / 2;
        (offset, offset)
    }

    /// 高さ `text_height` のキャプションのベースラインのY座標
    pub fn caption_baseline(&self, text_height: u32) -> i32 {
        self.height as i32 - (text_height / 2) as i32
    }

    /// 幅 `text_width` のキャプションを中央寄せしたときの左端X座標
    pub fn caption_left(&self, text_width: u32) -> i32 {
        (self.width as i32 - text_width as i32) / 2
    }
}
