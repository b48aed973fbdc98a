//! Glotgen - typed locale keys for Rust from JSON dictionaries
//!
//! Glotgen is a CLI tool and library that reads JSON localization files,
//! flattens their nested keys into dotted identifiers and generates two Rust
//! source files: a `LocaleKeys` struct of key constants and a message table
//! implementing [`runtime::TranslationProvider`].
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Flattening, rendering and the generation pipeline
//! - `runtime`: Lookup trait used by the generated message table
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod runtime;
pub mod utils;
