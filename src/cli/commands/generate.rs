use crate::cli::Cli;
use crate::image_loader::standard::StandardImageLoader;
use crate::processing::{
    BatchSummary, ConsoleProgressReporter, DefaultProcessingConfig, JsonSummaryPersistence,
    ProcessingError, ProcessingResult, SummaryPersistence,
};
use crate::qr_encoder::standard::StandardQrEncoder;
use crate::storage::local::LocalStorageBackend;
use crate::App;
use std::path::PathBuf;

/// Configuration struct for generate command
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    pub input_file: PathBuf,
    pub thread_count: usize,
    pub logo: PathBuf,
    pub output_dir: PathBuf,
    pub summary: Option<PathBuf>,
    pub quiet: bool,
}

impl From<Cli> for GenerateConfig {
    fn from(cli: Cli) -> Self {
        Self {
            input_file: cli.input_file,
            thread_count: cli.thread_count,
            logo: cli.logo,
            output_dir: cli.output_dir,
            summary: cli.summary,
            quiet: cli.quiet,
        }
    }
}

/// Render a labeled QR code for every line of the input file
pub async fn execute_generate(config: GenerateConfig) -> ProcessingResult<BatchSummary> {
    if config.thread_count == 0 {
        return Err(ProcessingError::configuration(
            "THREAD_COUNT は1以上である必要があります",
        ));
    }

    let storage = LocalStorageBackend::new(&config.output_dir);
    storage
        .ensure_root()
        .map_err(|e| ProcessingError::configuration(format!("{e:#}")))?;

    let app = App::new(
        StandardImageLoader::for_logo(),
        StandardQrEncoder::new(),
        storage,
    );

    let processing_config = DefaultProcessingConfig::new()
        .with_max_concurrent(config.thread_count)
        .with_progress_reporting(!config.quiet);
    let reporter = if config.quiet {
        ConsoleProgressReporter::quiet()
    } else {
        ConsoleProgressReporter::new()
    };

    let summary = app
        .run(&config.input_file, &config.logo, processing_config, reporter)
        .await?;

    if let Some(summary_path) = &config.summary {
        JsonSummaryPersistence::new(summary_path)
            .store_summary(&summary)
            .await
            .map_err(ProcessingError::persistence)?;
        tracing::info!(path = %summary_path.display(), "summary written");
    }

    Ok(summary)
}
