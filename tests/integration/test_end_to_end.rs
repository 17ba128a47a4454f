// エンドツーエンド統合テスト
use async_trait::async_trait;
use image::{Rgb, RgbImage};
use qr_label::{
    cli::commands::generate::{execute_generate, GenerateConfig},
    image_loader::standard::StandardImageLoader,
    processing::{DefaultProcessingConfig, NoOpProgressReporter, ProgressReporter},
    qr_encoder::{standard::StandardQrEncoder, QrEncoderBackend},
    rendering::{
        layout::{CanvasLayout, LOGO_SIZE},
        BASE_URL,
    },
    storage::local::LocalStorageBackend,
    App,
};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

const LOGO_COLOR: Rgb<u8> = Rgb([30, 120, 200]);

/// テスト環境をセットアップ：ロゴと入力ファイルを作成
fn setup(base_dir: &Path, content: &str) -> (PathBuf, PathBuf) {
    let logo = base_dir.join("logo.png");
    RgbImage::from_pixel(LOGO_SIZE, LOGO_SIZE, LOGO_COLOR)
        .save(&logo)
        .unwrap();
    let input = base_dir.join("input.txt");
    fs::write(&input, content).unwrap();
    (input, logo)
}

fn app(output_dir: &Path) -> App<StandardImageLoader, StandardQrEncoder, LocalStorageBackend> {
    App::new(
        StandardImageLoader::for_logo(),
        StandardQrEncoder::new(),
        LocalStorageBackend::new(output_dir),
    )
}

/// 進捗率を記録する報告実装
#[derive(Clone, Default)]
struct RecordingReporter {
    percentages: Arc<Mutex<Vec<u32>>>,
}

#[async_trait]
impl ProgressReporter for RecordingReporter {
    async fn report_started(&self, _total_lines: usize, _concurrency: usize) {}

    async fn report_progress(&self, percentage: u32, _completed: usize, _total: usize) {
        self.percentages.lock().unwrap().push(percentage);
    }

    async fn report_error(&self, _line: &str, _error: &str) {}

    async fn report_completed(&self, _total_processed: usize, _total_errors: usize) {}
}

/// 保存されたPNGを標準的なQRデコーダーで読み、BASE_URL + line と一致するか
fn assert_png_decodes_to(path: &Path, line: &str) {
    let image = image::open(path).unwrap().to_luma8();
    let matrix = StandardQrEncoder::new()
        .encode(format!("{BASE_URL}{line}").as_bytes())
        .unwrap();
    let layout = CanvasLayout::for_modules(matrix.width());
    assert_eq!(image.dimensions(), (layout.width(), layout.height()));

    let mut prepared = rqrr::PreparedImage::prepare_from_greyscale(
        image.width() as usize,
        image.height() as usize,
        |x, y| image.get_pixel(x as u32, y as u32)[0],
    );
    let grids = prepared.detect_grids();
    assert_eq!(grids.len(), 1, "{line}: expected exactly one QR code");
    let (_, content) = grids[0].decode().unwrap();
    assert_eq!(content, format!("{BASE_URL}{line}"));

    // ロゴはQR領域の中心に合成される
    let rgb = image::open(path).unwrap().to_rgb8();
    let center = layout.width() / 2;
    assert_eq!(*rgb.get_pixel(center, center), LOGO_COLOR);
}

#[tokio::test]
async fn test_abc_xyz_scenario() {
    let temp_dir = TempDir::new().unwrap();
    let (input, logo) = setup(temp_dir.path(), "abc\nxyz\n");
    let reporter = RecordingReporter::default();

    let summary = app(temp_dir.path())
        .run(
            &input,
            &logo,
            DefaultProcessingConfig::new().with_max_concurrent(2),
            reporter.clone(),
        )
        .await
        .unwrap();

    assert_eq!(summary.total_lines, 2);
    assert_eq!(summary.succeeded, 2);
    assert_eq!(summary.cohorts, 1);
    assert_eq!(*reporter.percentages.lock().unwrap(), vec![100]);

    assert_png_decodes_to(&temp_dir.path().join("abc.png"), "abc");
    assert_png_decodes_to(&temp_dir.path().join("xyz.png"), "xyz");
}

#[tokio::test]
async fn test_blank_lines_are_skipped() {
    let temp_dir = TempDir::new().unwrap();
    let output_dir = temp_dir.path().join("out");
    fs::create_dir_all(&output_dir).unwrap();
    let (input, logo) = setup(temp_dir.path(), "\n\nfirst\n\n\nsecond\n\n");

    let summary = app(&output_dir)
        .run(&input, &logo, DefaultProcessingConfig::new(), NoOpProgressReporter::new())
        .await
        .unwrap();

    assert_eq!(summary.total_lines, 2);
    let mut written: Vec<String> = fs::read_dir(&output_dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    written.sort();
    assert_eq!(written, vec!["first.png", "second.png"]);
}

#[tokio::test]
async fn test_cohorts_and_progress_for_many_lines() {
    let temp_dir = TempDir::new().unwrap();
    let content: String = (0..7).map(|i| format!("item-{i}\n")).collect();
    let (input, logo) = setup(temp_dir.path(), &content);
    let reporter = RecordingReporter::default();

    let summary = app(temp_dir.path())
        .run(
            &input,
            &logo,
            DefaultProcessingConfig::new().with_max_concurrent(3),
            reporter.clone(),
        )
        .await
        .unwrap();

    // ceil(7 / 3) = 3 コホート、3/7=42%, 6/7=85%, 7/7=100%
    assert_eq!(summary.cohorts, 3);
    assert_eq!(summary.succeeded, 7);
    assert_eq!(*reporter.percentages.lock().unwrap(), vec![42, 85, 100]);
    for i in 0..7 {
        assert!(temp_dir.path().join(format!("item-{i}.png")).exists());
    }
}

#[tokio::test]
async fn test_rerun_produces_identical_files() {
    let temp_dir = TempDir::new().unwrap();
    let (input, logo) = setup(temp_dir.path(), "repeat\n");
    let output = temp_dir.path().join("repeat.png");

    app(temp_dir.path())
        .run(&input, &logo, DefaultProcessingConfig::new(), NoOpProgressReporter::new())
        .await
        .unwrap();
    let first = fs::read(&output).unwrap();

    app(temp_dir.path())
        .run(
            &input,
            &logo,
            DefaultProcessingConfig::new().with_max_concurrent(4),
            NoOpProgressReporter::new(),
        )
        .await
        .unwrap();
    let second = fs::read(&output).unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_generate_command_with_summary() {
    let temp_dir = TempDir::new().unwrap();
    let (input, logo) = setup(temp_dir.path(), "abc\nxyz\nabc\n");
    let output_dir = temp_dir.path().join("labels");
    let summary_path = temp_dir.path().join("summary.json");

    let summary = execute_generate(GenerateConfig {
        input_file: input,
        thread_count: 2,
        logo,
        output_dir: output_dir.clone(),
        summary: Some(summary_path.clone()),
        quiet: true,
    })
    .await
    .unwrap();

    // 同名の行は上書きされる
    assert_eq!(summary.succeeded, 3);
    assert_eq!(fs::read_dir(&output_dir).unwrap().count(), 2);

    let json: Value = serde_json::from_str(&fs::read_to_string(summary_path).unwrap()).unwrap();
    assert_eq!(json["total_lines"], 3);
    assert_eq!(json["cohorts"], 2);
    assert_eq!(json["concurrency"], 2);
    assert_eq!(json["failures"].as_array().unwrap().len(), 0);
}
