//! The generation pipeline.
//!
//! sources -> documents (parsed in parallel) -> flatten -> emit -> write.
//! Every fatal condition is detected by [`generate`], before
//! [`Generation::write`] touches any output file.

use std::{
    ffi::OsString,
    fmt, fs,
    path::{Path, PathBuf},
};

use rayon::prelude::*;

use crate::config::Config;
use crate::core::{
    document::{DocumentError, LocaleDocument, document_name},
    emit::{build_table, render_keys, render_table},
    error::GenerateError,
    flatten::{Collision, FlattenOptions, flatten, find_collisions, invalid_identifiers},
    sources::resolve_sources,
};

/// A generated file waiting to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub path: PathBuf,
    pub content: String,
}

impl GeneratedFile {
    /// Hidden sibling the content is written to before it replaces `path`.
    fn staging_path(&self) -> PathBuf {
        let mut name = OsString::from(".");
        name.push(self.path.file_name().unwrap_or_default());
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    /// Write the content next to the target, creating parent directories.
    fn stage(&self) -> Result<PathBuf, GenerateError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| GenerateError::io(parent, e))?;
        }
        let staged = self.staging_path();
        if let Err(e) = fs::write(&staged, &self.content) {
            let _ = fs::remove_file(&staged);
            return Err(GenerateError::io(&staged, e));
        }
        Ok(staged)
    }

    fn commit(&self, staged: &Path) -> Result<(), GenerateError> {
        fs::rename(staged, &self.path).map_err(|e| GenerateError::io(&self.path, e))
    }
}

/// Non-fatal problems found while generating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateWarning {
    /// A secondary document was left out of the locale table.
    SkippedDocument { path: PathBuf, error: String },
    /// Two keys share a symbol; the constants file won't compile.
    Collision(Collision),
    /// A symbol that isn't a valid Rust identifier.
    InvalidIdentifier { symbol: String, key: String },
}

impl fmt::Display for GenerateWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateWarning::SkippedDocument { path, error } => {
                write!(f, "skipped '{}': {}", path.display(), error)
            }
            GenerateWarning::Collision(collision) => write!(
                f,
                "symbol '{}' is generated by several keys: {}",
                collision.symbol,
                collision.keys.join(", ")
            ),
            GenerateWarning::InvalidIdentifier { symbol, key } => write!(
                f,
                "symbol '{}' (key \"{}\") is not a valid Rust identifier",
                symbol, key
            ),
        }
    }
}

/// Per-document details for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentSummary {
    pub name: String,
    pub path: PathBuf,
    pub key_count: usize,
}

/// Result of a successful generation run, not yet written to disk.
#[derive(Debug)]
pub struct Generation {
    pub keys: GeneratedFile,
    pub messages: GeneratedFile,
    /// Name of the document the constants were derived from.
    pub reference: String,
    /// Number of generated constants.
    pub constant_count: usize,
    /// Documents included in the locale table.
    pub documents: Vec<DocumentSummary>,
    pub warnings: Vec<GenerateWarning>,
}

impl Generation {
    /// Write both files.
    ///
    /// Both contents are staged before either target is replaced, so a
    /// failed write leaves the previous pair of outputs in place.
    pub fn write(&self) -> Result<(), GenerateError> {
        let files = [&self.keys, &self.messages];

        let mut staged = Vec::with_capacity(files.len());
        for file in files {
            match file.stage() {
                Ok(path) => staged.push(path),
                Err(err) => {
                    for path in &staged {
                        let _ = fs::remove_file(path);
                    }
                    return Err(err);
                }
            }
        }

        for (file, path) in files.iter().zip(&staged) {
            file.commit(path)?;
        }
        Ok(())
    }
}

/// Run generation with every relative path in `config` resolved against
/// `root`.
pub fn generate(root: &Path, config: &Config) -> Result<Generation, GenerateError> {
    let source_dir = root.join(&config.source_dir);
    let sources = resolve_sources(&source_dir, config.source_file.as_deref().map(Path::new))?;

    let loaded: Vec<(PathBuf, Result<LocaleDocument, DocumentError>)> = sources
        .files
        .par_iter()
        .map(|path| (path.clone(), LocaleDocument::load(path, config.max_depth)))
        .collect();

    let reference_index = match &config.reference_locale {
        Some(locale) => loaded
            .iter()
            .position(|(path, _)| document_name(path) == *locale)
            .ok_or_else(|| GenerateError::ReferenceLocaleMissing(locale.clone()))?,
        None => 0,
    };

    let mut warnings = Vec::new();
    let mut documents = Vec::new();
    let mut summaries: Vec<DocumentSummary> = Vec::new();
    let mut reference = None;

    for (index, (path, result)) in loaded.into_iter().enumerate() {
        match result {
            Ok(document) => {
                if let Some(first) = summaries
                    .iter()
                    .find(|summary| summary.name == document.name)
                {
                    warnings.push(GenerateWarning::SkippedDocument {
                        error: format!(
                            "document name '{}' is already used by '{}'",
                            document.name,
                            first.path.display()
                        ),
                        path,
                    });
                    continue;
                }
                if index == reference_index {
                    reference = Some(documents.len());
                }
                summaries.push(DocumentSummary {
                    name: document.name.clone(),
                    path,
                    key_count: document.key_count(),
                });
                documents.push(document);
            }
            Err(source) if index == reference_index => {
                return Err(GenerateError::MalformedDocument { path, source });
            }
            Err(err) => warnings.push(GenerateWarning::SkippedDocument {
                path,
                error: err.to_string(),
            }),
        }
    }

    // The reference document loaded successfully, otherwise we returned above.
    let reference = &documents[reference.unwrap_or_default()];

    let entries = flatten(
        reference,
        FlattenOptions {
            skip_branch_keys: config.skip_branch_keys,
        },
    );

    let collisions = find_collisions(&entries);
    let invalid: Vec<_> = invalid_identifiers(&entries);

    if config.strict {
        if !collisions.is_empty() {
            return Err(GenerateError::SymbolicNameCollision(collisions));
        }
        if !invalid.is_empty() {
            return Err(GenerateError::InvalidIdentifier(
                invalid.iter().map(|e| e.key.clone()).collect(),
            ));
        }
    }

    warnings.extend(collisions.into_iter().map(GenerateWarning::Collision));
    warnings.extend(
        invalid
            .into_iter()
            .map(|entry| GenerateWarning::InvalidIdentifier {
                symbol: entry.symbol.clone(),
                key: entry.key.clone(),
            }),
    );

    let output_dir = root.join(&config.output_dir);
    let table = build_table(&documents);

    Ok(Generation {
        keys: GeneratedFile {
            path: output_dir.join(&config.keys_file),
            content: render_keys(&entries),
        },
        messages: GeneratedFile {
            path: output_dir.join(&config.messages_file),
            content: render_table(&table, &config.runtime_path),
        },
        reference: reference.name.clone(),
        constant_count: entries.len(),
        documents: summaries,
        warnings,
    })
}
