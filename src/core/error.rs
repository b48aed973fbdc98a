use std::{io, path::PathBuf};

use thiserror::Error;

use crate::core::document::DocumentError;
use crate::core::flatten::Collision;

/// Fatal generation errors. Nothing is written when one of these occurs.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("Source path '{}' does not exist.\nHint: Check the 'sourceDir' setting or --source-dir.", .0.display())]
    SourcePathMissing(PathBuf),

    #[error("Source file '{}' does not exist.", .0.display())]
    SourceFileMissing(PathBuf),

    #[error("Source folder '{}' does not contain any JSON files.", .0.display())]
    EmptySourceSet(PathBuf),

    #[error("Failed to load '{}': {source}", path.display())]
    MalformedDocument {
        path: PathBuf,
        #[source]
        source: DocumentError,
    },

    #[error("Reference locale '{0}' not found among the source files.")]
    ReferenceLocaleMissing(String),

    #[error("{} symbolic name collision(s): {}", .0.len(), describe_collisions(.0))]
    SymbolicNameCollision(Vec<Collision>),

    #[error("Key(s) not usable as Rust identifiers: {}", .0.join(", "))]
    InvalidIdentifier(Vec<String>),

    #[error("Failed to access '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl GenerateError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

fn describe_collisions(collisions: &[Collision]) -> String {
    collisions
        .iter()
        .map(|c| format!("{} <- {}", c.symbol, c.keys.join(", ")))
        .collect::<Vec<_>>()
        .join("; ")
}
