use clap::error::ErrorKind;
use clap::Parser;
use qr_label::cli::{execute_generate, Cli, GenerateConfig};
use qr_label::logging::init_logging;

/// 引数エラー・入力/ロゴ読み込み失敗時の終了コード
const EXIT_FATAL: i32 = -1;
/// 処理は完了したがサマリーの書き込みなどに失敗した場合の終了コード
const EXIT_INCOMPLETE: i32 = 1;

#[tokio::main]
async fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) => {
            let code = match error.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => EXIT_FATAL,
            };
            let _ = error.print();
            std::process::exit(code);
        }
    };

    init_logging(cli.verbose);

    if let Err(error) = execute_generate(GenerateConfig::from(cli)).await {
        tracing::error!(error = %error, "qr_label failed");
        eprintln!("Error: {error}");
        let code = if error.is_fatal() {
            EXIT_FATAL
        } else {
            EXIT_INCOMPLETE
        };
        std::process::exit(code);
    }
}
