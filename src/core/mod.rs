//! Core generation engine.
//!
//! ## Module Structure
//!
//! - `sources`: Resolve which JSON files take part in a run
//! - `document`: Typed locale document tree parsed from JSON
//! - `flatten`: Key flattening into `(symbol, dotted key)` entries
//! - `emit`: Rendering of the constants and message table files
//! - `generate`: The pipeline tying the steps together
//! - `error`: Fatal generation errors

pub mod document;
pub mod emit;
pub mod error;
pub mod flatten;
pub mod generate;
pub mod sources;

pub use document::{DocumentError, LocaleDocument, LocaleNode};
pub use error::GenerateError;
pub use flatten::{Collision, FlatEntry, FlattenOptions, flatten};
pub use generate::{GeneratedFile, Generation, GenerateWarning, generate};
