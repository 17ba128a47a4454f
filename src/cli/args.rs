use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "qr_label")]
#[command(about = "Generate labeled QR code images for every line of a text file")]
#[command(version)]
pub struct Cli {
    /// Text file with one label per line (blank lines are skipped)
    pub input_file: PathBuf,

    /// Number of labels rendered concurrently in each cohort
    #[arg(default_value_t = 1)]
    pub thread_count: usize,

    /// Logo image composited onto the center of every QR code
    #[arg(short, long, default_value = "logo.png")]
    pub logo: PathBuf,

    /// Directory the PNG files are written to
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Write a JSON summary of the run to this file
    #[arg(short, long)]
    pub summary: Option<PathBuf>,

    /// Suppress progress and completion output
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}
