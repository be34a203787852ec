//! Document discovery for paths given on the command line.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Expands files and directories into the list of documents to outline.
///
/// Directories are walked recursively; hidden entries are skipped. Files given
/// explicitly are kept only when their extension matches.
///
/// # Errors
///
/// Returns an error if a directory cannot be read.
pub fn find_documents(paths: Vec<PathBuf>, extensions: &[String]) -> io::Result<Vec<PathBuf>> {
    let mut documents = Vec::new();
    for path in paths {
        collect(&path, extensions, &mut documents)?;
    }
    documents.sort();
    documents.dedup();
    Ok(documents)
}

fn collect(path: &Path, extensions: &[String], out: &mut Vec<PathBuf>) -> io::Result<()> {
    if path.is_dir() {
        for entry in fs::read_dir(path)? {
            let entry = entry?;
            if entry.file_name().to_string_lossy().starts_with('.') {
                continue;
            }
            collect(&entry.path(), extensions, out)?;
        }
    } else if matches_extension(path, extensions) {
        out.push(path.to_path_buf());
    }
    Ok(())
}

fn matches_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|want| want.eq_ignore_ascii_case(ext)))
}
