use super::{EncodeError, QrEncoderBackend, QrMatrix};
use qrcode::bits::Bits;
use qrcode::types::QrError;
use qrcode::{Color, EcLevel, QrCode, Version};

/// QRバージョンの下限
pub const MIN_VERSION: i16 = 1;
/// QRバージョンの上限
pub const MAX_VERSION: i16 = 40;

/// 8ビットバイトモード・誤り訂正レベルQの標準エンコーダー
///
/// 指定範囲のバージョンを小さい順に試し、最初に収まったものを採用する。
#[derive(Clone, Debug)]
pub struct StandardQrEncoder {
    ec_level: EcLevel,
    min_version: i16,
    max_version: i16,
}

impl Default for StandardQrEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl StandardQrEncoder {
    pub fn new() -> Self {
        Self {
            ec_level: EcLevel::Q,
            min_version: MIN_VERSION,
            max_version: MAX_VERSION,
        }
    }

    /// バージョン範囲を制限したエンコーダーを作成
    pub fn with_version_range(min_version: i16, max_version: i16) -> Self {
        let min_version = min_version.clamp(MIN_VERSION, MAX_VERSION);
        let max_version = max_version.clamp(min_version, MAX_VERSION);
        Self {
            min_version,
            max_version,
            ..Self::new()
        }
    }

    fn try_version(&self, payload: &[u8], version: i16) -> Result<QrCode, QrError> {
        let mut bits = Bits::new(Version::Normal(version));
        bits.push_byte_data(payload)?;
        bits.push_terminator(self.ec_level)?;
        QrCode::with_bits(bits, self.ec_level)
    }
}

impl QrEncoderBackend for StandardQrEncoder {
    fn encode(&self, payload: &[u8]) -> Result<QrMatrix, EncodeError> {
        for version in self.min_version..=self.max_version {
            match self.try_version(payload, version) {
                Ok(code) => {
                    let width = code.width();
                    let modules = code
                        .into_colors()
                        .into_iter()
                        .map(|color| color == Color::Dark)
                        .collect();
                    // with_bits は width*width 個のモジュールを返す
                    return QrMatrix::new(width, modules, version)
                        .ok_or(EncodeError::Encoder(QrError::InvalidVersion));
                }
                Err(QrError::DataTooLong) => continue,
                Err(other) => return Err(EncodeError::Encoder(other)),
            }
        }

        Err(EncodeError::CapacityExceeded {
            payload_len: payload.len(),
            max_version: self.max_version,
        })
    }

    fn strategy_name(&self) -> &'static str {
        "Byte mode / EC level Q"
    }
}
