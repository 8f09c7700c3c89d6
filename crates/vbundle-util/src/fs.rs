use std::path::{Path, PathBuf};

/// File extensions recognised as bundle definitions.
pub const DEFINITION_EXTENSIONS: &[&str] = &["json", "yaml", "yml"];

/// Walk up from `start` looking for a file named `filename`.
/// Returns the path to the directory containing the file, or `None`.
pub fn find_ancestor_with(start: &Path, filename: &str) -> Option<PathBuf> {
    let mut current = start;
    loop {
        let candidate = current.join(filename);
        if candidate.is_file() {
            return Some(current.to_path_buf());
        }
        current = current.parent()?;
    }
}

/// Whether `path` carries one of the [`DEFINITION_EXTENSIONS`].
pub fn is_definition_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| {
            DEFINITION_EXTENSIONS
                .iter()
                .any(|known| e.eq_ignore_ascii_case(known))
        })
        .unwrap_or(false)
}

/// Expand a list of files and directories into definition files.
///
/// Files are kept as given regardless of extension. Directories are scanned
/// one level deep and only definition files are taken, sorted by file name
/// so the resulting bundle order is reproducible.
pub fn collect_definition_files(paths: &[PathBuf]) -> std::io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            let mut found: Vec<PathBuf> = std::fs::read_dir(path)?
                .filter_map(|entry| entry.ok())
                .map(|entry| entry.path())
                .filter(|p| p.is_file())
                .filter(|p| {
                    let keep = is_definition_file(p);
                    if !keep {
                        tracing::debug!("Skipping non-definition file {}", p.display());
                    }
                    keep
                })
                .collect();
            found.sort();
            files.extend(found);
        } else if path.is_file() {
            files.push(path.clone());
        } else {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("{} does not exist", path.display()),
            ));
        }
    }
    Ok(files)
}
