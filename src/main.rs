//! sobel-edge - write the Sobel edge map of an image file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use image::DynamicImage;
use log::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "sobel-edge")]
#[command(version, about = "Render the Sobel edge magnitude of an image")]
struct Cli {
    /// Input image (any format the image crate can decode)
    input: PathBuf,

    /// Output path [default: <input stem>_processed.jpg next to the input]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Number of worker threads (0 = auto)
    #[arg(short = 'j', long, default_value = "0")]
    threads: usize,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// `photo.png` becomes `photo_processed.jpg` in the same directory.
fn default_output(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(format!("{}_processed.jpg", stem))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("failed to configure thread pool")?;
    }

    let source = image::open(&cli.input)
        .with_context(|| format!("failed to read image: {}", cli.input.display()))?;
    debug!(
        "decoded {}: {}x{} {:?}",
        cli.input.display(),
        source.width(),
        source.height(),
        source.color()
    );

    let edges = sobel_edge::sobel_dynamic(&source)
        .with_context(|| format!("edge detection failed for {}", cli.input.display()))?;

    let output = cli.output.unwrap_or_else(|| default_output(&cli.input));
    // JPEG has no alpha channel and the filter output is always opaque.
    DynamicImage::ImageRgba8(edges)
        .to_rgb8()
        .save(&output)
        .with_context(|| format!("failed to write image: {}", output.display()))?;

    info!("saved edge map to {}", output.display());
    println!("{}", output.display());
    Ok(())
}
