//! Rendering of the generated Rust files.
//!
//! - `keys`: the `LocaleKeys` constants file
//! - `table`: the embedded per-locale message table

pub mod keys;
pub mod table;

pub use keys::render_keys;
pub use table::{LocaleTable, build_table, render_table};

/// First line of every generated file.
pub const GENERATED_HEADER: &str = "// @generated by glotgen. Do not edit by hand.";
