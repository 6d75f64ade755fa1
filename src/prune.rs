use std::error::Error;
use std::fs;
use std::path::Path;

use crate::{display_name, find_pngs, webp_sibling};

#[derive(Debug, Default, PartialEq)]
pub struct Summary {
    pub deleted: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Delete every `.png` in `dir` whose `.webp` sibling already exists. The
/// check is purely name-based: the sibling's content is never inspected.
/// Files without a sibling are reported as skipped and left alone.
pub fn run(dir: &Path) -> Result<Summary, Box<dyn Error>> {
    println!("Looking for .png files to delete in: {}", dir.display());

    let pngs = find_pngs(dir)?;

    if pngs.is_empty() {
        println!("No .png files found to delete.");
        return Ok(Summary::default());
    }

    println!("Found {} .png files. Checking and deleting...", pngs.len());

    let mut summary = Summary::default();

    for png in &pngs {
        let webp = webp_sibling(png);

        if webp.exists() {
            match fs::remove_file(png) {
                Ok(()) => {
                    println!("Deleted: {}", display_name(png));
                    summary.deleted += 1;
                }
                Err(err) => {
                    eprintln!("Failed to delete {}: {err}", display_name(png));
                    summary.failed += 1;
                }
            }
        } else {
            println!(
                "Skipped: no {} found for {}",
                display_name(&webp),
                display_name(png)
            );
            summary.skipped += 1;
        }
    }

    println!();
    println!(
        "Deletion finished. {} deleted, {} skipped.",
        summary.deleted, summary.skipped
    );

    Ok(summary)
}
