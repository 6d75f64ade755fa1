use globwalk::{GlobError, GlobWalker};
use std::borrow::Cow;
use std::error::Error;
use std::path::{Path, PathBuf};

pub mod convert;
pub mod prune;
pub mod uploads;

const PATTERNS: [&str; 1] = ["*.png"];

fn build_glob_walker(path: &Path, patterns: &[&str]) -> Result<GlobWalker, GlobError> {
    globwalk::GlobWalkerBuilder::from_patterns(path, patterns)
        .max_depth(1)
        .case_insensitive(true)
        .build()
}

/// Collect the `.png` candidates in `dir`. The scan is flat (no recursion)
/// and matches the extension case-insensitively; anything that is not a
/// regular file is ignored.
pub fn find_pngs(dir: &Path) -> Result<Vec<PathBuf>, Box<dyn Error>> {
    let walker = build_glob_walker(dir, &PATTERNS)?;

    let pngs = walker
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.path().to_path_buf())
        .collect();

    Ok(pngs)
}

/// Derive the `.webp` sibling name: replace the final extension, keep the
/// rest of the name exactly. `a.b.PNG` becomes `a.b.webp`.
pub fn webp_sibling(png: &Path) -> PathBuf {
    png.with_extension("webp")
}

pub(crate) fn display_name(path: &Path) -> Cow<'_, str> {
    match path.file_name() {
        Some(name) => name.to_string_lossy(),
        None => path.to_string_lossy(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::fs::{self, File};
    use tempfile::TempDir;

    fn touch(dir: &TempDir, names: impl IntoIterator<Item = impl AsRef<str>>) {
        for name in names {
            File::create(dir.path().join(name.as_ref())).expect("Failed to create a test file");
        }
    }

    #[test]
    fn sibling_replaces_png_suffix() {
        assert_eq!(
            webp_sibling(Path::new("/uploads/photo.png")),
            PathBuf::from("/uploads/photo.webp")
        );
    }

    #[test]
    fn sibling_preserves_inner_dots() {
        assert_eq!(
            webp_sibling(Path::new("/uploads/camiseta.v2.png")),
            PathBuf::from("/uploads/camiseta.v2.webp")
        );
    }

    #[test]
    fn sibling_from_uppercase_extension() {
        assert_eq!(
            webp_sibling(Path::new("/uploads/LOGO.PNG")),
            PathBuf::from("/uploads/LOGO.webp")
        );
    }

    #[test]
    fn find_matches_extension_case_insensitively() {
        let dir = TempDir::new().expect("Failed to create temporary folder");

        touch(&dir, ["a.png", "b.PNG", "c.webp", "d.txt"]);

        let found: HashSet<PathBuf> = find_pngs(dir.path())
            .expect("Expected scan to succeed")
            .into_iter()
            .collect();
        let expected: HashSet<PathBuf> = ["a.png", "b.PNG"]
            .into_iter()
            .map(|name| dir.path().join(name))
            .collect();

        assert_eq!(found, expected, "Expected only the .png files");
    }

    #[test]
    fn find_ignores_non_file_matches() {
        let dir = TempDir::new().expect("Failed to create temporary folder");

        fs::create_dir(dir.path().join("folder.png")).expect("Failed to create a test folder");
        fs::create_dir(dir.path().join("nested")).expect("Failed to create a test folder");
        touch(&dir, ["a.png"]);
        File::create(dir.path().join("nested").join("deep.png"))
            .expect("Failed to create a test file");

        let found = find_pngs(dir.path()).expect("Expected scan to succeed");

        assert_eq!(
            found,
            vec![dir.path().join("a.png")],
            "Expected directories and nested files to be skipped"
        );
    }

    #[test]
    fn find_empty_directory() {
        let dir = TempDir::new().expect("Failed to create temporary folder");

        let found = find_pngs(dir.path()).expect("Expected scan to succeed");

        assert!(found.is_empty(), "Expected no candidates in an empty folder");
    }

    #[test]
    fn globwalker_invalid_patterns() {
        let dir = TempDir::new().expect("Failed to create temporary folder");
        let invalid_patterns = ["\\", ""];

        let walker = build_glob_walker(dir.path(), &invalid_patterns);

        assert!(
            walker.is_err(),
            "Expected an error for invalid search patterns"
        );
    }

    #[test]
    fn globwalker_valid_patterns() {
        let dir = TempDir::new().expect("Failed to create temporary folder");

        let walker = build_glob_walker(dir.path(), &PATTERNS);

        assert!(walker.is_ok(), "Expected OK for valid search patterns");
    }
}
