/*
 * path_resolver.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Image lookup along the TeX search path.
//!
//! Pandoc does not consult `TEXINPUTS` when it embeds images, so the filter
//! resolves image paths itself, whatever the output format.

use std::path::Path;

/// Split a search path into directories.
///
/// `;` separates entries everywhere; `:` does too except on Windows, where
/// it is part of drive letters. Empty entries (such as the trailing one in
/// TeX's `dir:` convention) are skipped.
pub fn search_dirs(search_path: &str, windows: bool) -> Vec<&str> {
    search_path
        .split(|c: char| c == ';' || (!windows && c == ':'))
        .filter(|dir| !dir.is_empty())
        .collect()
}

/// Find `filename`, first as given, then under each search directory with
/// its full relative path, then under each directory by base name alone.
///
/// Returns `filename` unchanged when nothing matches.
pub fn resolve(filename: &str, search_path: Option<&str>) -> String {
    if Path::new(filename).is_file() {
        return filename.to_string();
    }
    let Some(search_path) = search_path else {
        return filename.to_string();
    };
    let dirs = search_dirs(search_path, cfg!(windows));

    for dir in &dirs {
        let attempt = Path::new(dir).join(filename);
        if attempt.is_file() {
            return attempt.to_string_lossy().into_owned();
        }
    }

    if let Some(base) = Path::new(filename).file_name() {
        for dir in &dirs {
            let attempt = Path::new(dir).join(base);
            if attempt.is_file() {
                return attempt.to_string_lossy().into_owned();
            }
        }
    }

    filename.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_search_dirs_unix() {
        assert_eq!(
            search_dirs("images:shared;more::", false),
            vec!["images", "shared", "more"]
        );
    }

    #[test]
    fn test_search_dirs_windows_keeps_drive_letters() {
        assert_eq!(
            search_dirs("C:\\slides\\images;D:\\shared;", true),
            vec!["C:\\slides\\images", "D:\\shared"]
        );
    }

    #[test]
    fn test_resolve_full_relative_path_first() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("images");
        fs::create_dir(&nested).unwrap();
        fs::write(nested.join("logo.png"), b"png").unwrap();
        fs::write(dir.path().join("logo.png"), b"png").unwrap();

        let search = dir.path().to_string_lossy().into_owned();
        let resolved = resolve("images/logo.png", Some(&search));
        assert_eq!(resolved, nested.join("logo.png").to_string_lossy());
    }

    #[test]
    fn test_resolve_by_base_name() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("chart.pdf"), b"pdf").unwrap();

        let search = format!("/nonexistent-beamer-dir:{}", dir.path().display());
        let resolved = resolve("figures/chart.pdf", Some(&search));
        assert_eq!(resolved, dir.path().join("chart.pdf").to_string_lossy());
    }

    #[test]
    fn test_resolve_existing_file_is_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("here.png");
        fs::write(&file, b"png").unwrap();
        let other = tempfile::tempdir().unwrap();
        fs::write(other.path().join("here.png"), b"png").unwrap();

        let name = file.to_string_lossy().into_owned();
        let search = other.path().to_string_lossy().into_owned();
        assert_eq!(resolve(&name, Some(&search)), name);
    }

    #[test]
    fn test_unresolved_returns_original() {
        assert_eq!(
            resolve("missing/nowhere.png", Some("/nonexistent-beamer-dir")),
            "missing/nowhere.png"
        );
        assert_eq!(resolve("missing/nowhere.png", None), "missing/nowhere.png");
    }
}
