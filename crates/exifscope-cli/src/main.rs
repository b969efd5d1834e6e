//! exifscope - analyze the metadata of a local image.
//!
//! Prints manipulation warnings followed by the EXIF tags as JSON.

use anyhow::Context;
use clap::Parser;
use exifscope_cli::{
    init_tracing, normalize_input_path, prompt_for_path, render_report, EMPTY_PATH_MESSAGE,
};
use exifscope_processing::{analyze_image_path, ContainerDecoder};
use std::path::Path;

#[derive(Parser)]
#[command(name = "exifscope", about = "Image metadata analyzer")]
struct Cli {
    /// Image to analyze; prompted for when omitted
    path: Option<String>,
    /// Print the whole analysis record instead of the EXIF tags only
    #[arg(long)]
    full: bool,
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let path = match cli.path {
        Some(raw) => normalize_input_path(&raw),
        None => prompt_for_path(&mut std::io::stdin().lock(), &mut std::io::stdout())?,
    };
    if path.is_empty() {
        println!("{}", EMPTY_PATH_MESSAGE);
        return Ok(());
    }

    tracing::debug!(path = %path, full = cli.full, "Analyzing image");
    let record = analyze_image_path(&ContainerDecoder, Path::new(&path))
        .with_context(|| format!("Failed to analyze {}", path))?;

    println!("{}", render_report(&record, cli.full)?);
    Ok(())
}
