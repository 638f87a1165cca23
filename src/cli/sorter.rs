//! Sorts a folder's files into per-extension subdirectories.

use std::fs;
use std::io;
use std::path::Path;
use walkdir::WalkDir;

use crate::ports::DirSorter;

/// Bucket for files with no extension.
const NO_EXTENSION: &str = "other";

pub struct FsSorter;

impl DirSorter for FsSorter {
    /// Moves every file directly inside `folder` into a subdirectory named
    /// after its lowercased extension. Subdirectories and their contents are
    /// left alone.
    fn sort(&self, folder: &Path) -> io::Result<String> {
        if !folder.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} is not a directory", folder.display()),
            ));
        }

        let mut moved = 0usize;
        for entry in WalkDir::new(folder).min_depth(1).max_depth(1) {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }

            let bucket = entry
                .path()
                .extension()
                .and_then(|e| e.to_str())
                .map(str::to_lowercase)
                .unwrap_or_else(|| NO_EXTENSION.to_string());

            let target_dir = folder.join(&bucket);
            fs::create_dir_all(&target_dir)?;
            fs::rename(entry.path(), target_dir.join(entry.file_name()))?;
            moved += 1;
        }

        Ok(format!("Sorted {moved} file(s) in {}", folder.display()))
    }
}
