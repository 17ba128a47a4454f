use thiserror::Error;

pub mod standard;

/// QRコードのモジュール行列
///
/// 行優先で格納し、モジュール `(x, y)` は `y * width + x` に位置する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrMatrix {
    width: usize,
    modules: Vec<bool>,
    version: i16,
}

impl QrMatrix {
    /// 行列を作成（`modules.len()` は `width * width` である必要がある）
    pub fn new(width: usize, modules: Vec<bool>, version: i16) -> Option<Self> {
        if width == 0 || modules.len() != width * width {
            return None;
        }
        Some(Self {
            width,
            modules,
            version,
        })
    }

    /// 一辺のモジュール数
    pub fn width(&self) -> usize {
        self.width
    }

    /// 使用されたQRバージョン（1〜40）
    pub fn version(&self) -> i16 {
        self.version
    }

    /// モジュールが暗（黒）かどうか
    pub fn is_dark(&self, x: usize, y: usize) -> bool {
        self.modules[y * self.width + x]
    }
}

/// エンコード失敗の種類
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    #[error("ペイロードが大きすぎます: {payload_len}バイトはバージョン{max_version}の容量を超えています")]
    CapacityExceeded { payload_len: usize, max_version: i16 },

    #[error("QRエンコーダーエラー: {0}")]
    Encoder(#[from] qrcode::types::QrError),
}

/// QRエンコードバックエンドのトレイト
///
/// ブロッキングスレッド上で呼ばれるため同期API。
pub trait QrEncoderBackend: Send + Sync {
    /// ペイロードをQR行列へエンコード
    fn encode(&self, payload: &[u8]) -> Result<QrMatrix, EncodeError>;

    /// エンコード戦略の名前を取得
    fn strategy_name(&self) -> &'static str;
}
