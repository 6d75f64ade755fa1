use image::codecs::webp::WebPEncoder;
use image::ExtendedColorType;
use std::error::Error;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::{display_name, find_pngs, webp_sibling};

#[derive(Debug, Default, PartialEq)]
pub struct Summary {
    pub converted: usize,
    pub failed: usize,
}

/// Convert every `.png` in `dir` to a `.webp` sibling with the same base
/// name, overwriting any file already at the target path. A file that fails
/// to convert is reported and skipped; it never aborts the batch.
pub fn run(dir: &Path) -> Result<Summary, Box<dyn Error>> {
    println!("Looking for .png files in: {}", dir.display());

    let pngs = find_pngs(dir)?;

    if pngs.is_empty() {
        println!("No .png files found to convert.");
        return Ok(Summary::default());
    }

    println!("Found {} .png files. Starting conversion...", pngs.len());

    let mut summary = Summary::default();

    for png in &pngs {
        let webp = webp_sibling(png);

        match encode_webp(png, &webp) {
            Ok(()) => {
                println!("Converted: {} -> {}", display_name(png), display_name(&webp));
                summary.converted += 1;
            }
            Err(err) => {
                eprintln!("Failed to convert {}: {err}", display_name(png));
                summary.failed += 1;
            }
        }
    }

    println!();
    println!(
        "Conversion finished. {} converted, {} failed.",
        summary.converted, summary.failed
    );

    Ok(summary)
}

fn encode_webp(png: &Path, webp: &Path) -> Result<(), Box<dyn Error>> {
    let img = image::open(png)?.to_rgba8();
    let (width, height) = img.dimensions();

    let file = File::create(webp)?;
    let writer = BufWriter::new(file);

    let encoder = WebPEncoder::new_lossless(writer);
    encoder.encode(&img, width, height, ExtendedColorType::Rgba8)?;

    Ok(())
}
