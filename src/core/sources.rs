use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::core::error::GenerateError;

/// The documents taking part in one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSet {
    /// Matched files, sorted by file name.
    pub files: Vec<PathBuf>,
}

/// Resolve the source documents.
///
/// With `source_file`, that file inside `source_dir` is the only document.
/// Otherwise every regular file directly inside `source_dir` whose name
/// contains `.json` is used.
pub fn resolve_sources(
    source_dir: &Path,
    source_file: Option<&Path>,
) -> Result<SourceSet, GenerateError> {
    if !source_dir.exists() {
        return Err(GenerateError::SourcePathMissing(source_dir.to_path_buf()));
    }

    if let Some(file) = source_file {
        let path = source_dir.join(file);
        if !path.is_file() {
            return Err(GenerateError::SourceFileMissing(path));
        }
        return Ok(SourceSet { files: vec![path] });
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(source_dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|err| {
            let path = err
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| source_dir.to_path_buf());
            let source = err
                .into_io_error()
                .unwrap_or_else(|| std::io::Error::other("filesystem loop detected"));
            GenerateError::io(path, source)
        })?;

        if entry.file_type().is_file() && entry.file_name().to_string_lossy().contains(".json") {
            files.push(entry.into_path());
        }
    }

    if files.is_empty() {
        return Err(GenerateError::EmptySourceSet(source_dir.to_path_buf()));
    }

    Ok(SourceSet { files })
}
