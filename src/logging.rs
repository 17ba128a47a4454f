// ログ出力の初期化
//
// 進捗表示は stdout、診断ログは stderr に分ける。

use tracing_subscriber::EnvFilter;

/// デフォルトのフィルタ指定
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "warn,qr_label=debug"
    } else {
        "warn"
    }
}

/// stderr へのフォーマット済みログを初期化する
///
/// `RUST_LOG` が設定されていればそちらを優先する。
/// 二重初期化（テストなど）はエラーにせず無視する。
pub fn init_logging(verbose: bool) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
