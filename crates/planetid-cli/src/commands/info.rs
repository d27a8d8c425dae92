use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use planetid_core::consts::{ANALYSIS_WORKING_SIZE, BLOB_WORKING_SIZE};

#[derive(Args)]
pub struct InfoArgs {
    /// Input image file
    pub file: PathBuf,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let img = image::open(&args.file)
        .with_context(|| format!("Failed to decode {}", args.file.display()))?;

    println!("File:          {}", args.file.display());
    println!("Dimensions:    {}x{}", img.width(), img.height());
    println!("Color type:    {:?}", img.color());
    println!(
        "Working sizes: {}x{} (blob search), {}x{} (analysis)",
        BLOB_WORKING_SIZE, BLOB_WORKING_SIZE, ANALYSIS_WORKING_SIZE, ANALYSIS_WORKING_SIZE
    );

    Ok(())
}
