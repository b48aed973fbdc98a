//! Key flattening.
//!
//! Turns a nested locale document into an ordered list of
//! `(symbol, dotted key)` pairs. Every object key at every depth yields one
//! entry, and the entries of a branch's children always come before the
//! entry of the branch itself:
//!
//! ```text
//! {"app": {"name": "X"}}  ->  app_name = "app.name"
//!                             app      = "app"
//! ```

use indexmap::IndexMap;

use crate::core::document::{LocaleDocument, LocaleNode};
use crate::utils::is_valid_identifier;

/// A single generated constant: its symbolic name and the dotted lookup key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatEntry {
    pub symbol: String,
    pub key: String,
}

impl FlatEntry {
    pub fn new(symbol: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            key: key.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlattenOptions {
    /// Don't emit entries for intermediate objects, only for leaves.
    pub skip_branch_keys: bool,
}

/// Two or more dotted keys that map to the same symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision {
    pub symbol: String,
    pub keys: Vec<String>,
}

/// Flatten the reference document into constant entries.
pub fn flatten(document: &LocaleDocument, options: FlattenOptions) -> Vec<FlatEntry> {
    resolve(&document.entries, None)
        .into_iter()
        .filter(|(_, node)| !(options.skip_branch_keys && matches!(node, LocaleNode::Object(_))))
        .map(|(entry, _)| entry)
        .collect()
}

/// Walk `entries` depth-first, resolving children before their parent.
///
/// Every key is returned together with the node it names so callers can
/// decide how to treat branches and leaves.
pub fn resolve<'a>(
    entries: &'a [(String, LocaleNode)],
    parent: Option<&str>,
) -> Vec<(FlatEntry, &'a LocaleNode)> {
    entries.iter().fold(Vec::new(), |mut acc, (key, node)| {
        let dotted = dotted_key(parent, key);
        if let LocaleNode::Object(children) = node {
            acc.extend(resolve(children, Some(dotted.as_str())));
        }
        acc.push((FlatEntry::new(symbol_name(parent, key), dotted), node));
        acc
    })
}

fn dotted_key(parent: Option<&str>, key: &str) -> String {
    match parent {
        Some(parent) => format!("{}.{}", parent, key),
        None => key.to_string(),
    }
}

/// Symbol for `key` below `parent`: the parent path with `.` replaced by `_`,
/// then `_` and the key itself. Top-level keys are used unchanged.
pub fn symbol_name(parent: Option<&str>, key: &str) -> String {
    match parent {
        Some(parent) => format!("{}_{}", parent.replace('.', "_"), key),
        None => key.to_string(),
    }
}

/// Find symbols produced by more than one dotted key, in first-seen order.
pub fn find_collisions(entries: &[FlatEntry]) -> Vec<Collision> {
    let mut by_symbol: IndexMap<&str, Vec<&str>> = IndexMap::new();
    for entry in entries {
        by_symbol
            .entry(entry.symbol.as_str())
            .or_default()
            .push(entry.key.as_str());
    }

    by_symbol
        .into_iter()
        .filter(|(_, keys)| keys.len() > 1)
        .map(|(symbol, keys)| Collision {
            symbol: symbol.to_string(),
            keys: keys.into_iter().map(String::from).collect(),
        })
        .collect()
}

/// Entries whose symbol can't be used as a Rust identifier.
pub fn invalid_identifiers(entries: &[FlatEntry]) -> Vec<&FlatEntry> {
    entries
        .iter()
        .filter(|entry| !is_valid_identifier(&entry.symbol))
        .collect()
}
