use std::{fs, io, path::Path};

use serde_json::{Map, Value};
use thiserror::Error;

/// Default limit for object nesting inside a locale document.
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Reasons a file cannot be turned into a [`LocaleDocument`].
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("failed to read file: {0}")]
    Read(#[from] io::Error),

    #[error("invalid JSON: {0}")]
    Syntax(#[from] serde_json::Error),

    #[error("root must be a JSON object, found {0}")]
    NotAnObject(&'static str),

    #[error("objects are nested deeper than the maximum depth of {0}")]
    TooDeep(usize),
}

/// A node of a locale document.
///
/// Objects keep the key order delivered by the parser. Everything that is not
/// an object (strings, numbers, booleans, null and arrays) is a scalar leaf.
#[derive(Debug, Clone, PartialEq)]
pub enum LocaleNode {
    Object(Vec<(String, LocaleNode)>),
    Scalar(Value),
}

impl LocaleNode {
    /// Rebuild the JSON value this node was converted from.
    pub fn to_json(&self) -> Value {
        match self {
            LocaleNode::Object(entries) => Value::Object(
                entries
                    .iter()
                    .map(|(key, node)| (key.clone(), node.to_json()))
                    .collect(),
            ),
            LocaleNode::Scalar(value) => value.clone(),
        }
    }

    /// String form used in the generated locale table.
    ///
    /// Strings are used verbatim. Other scalars and whole branches are
    /// rendered as compact JSON, e.g. `3`, `true` or `{"ok":"OK"}`.
    pub fn display_value(&self) -> String {
        match self {
            LocaleNode::Scalar(Value::String(s)) => s.clone(),
            LocaleNode::Scalar(value) => value.to_string(),
            LocaleNode::Object(_) => self.to_json().to_string(),
        }
    }
}

/// A parsed locale dictionary whose root is guaranteed to be an object.
#[derive(Debug, Clone, PartialEq)]
pub struct LocaleDocument {
    /// Document name, e.g. `en` for `en.json`.
    pub name: String,
    pub entries: Vec<(String, LocaleNode)>,
}

impl LocaleDocument {
    pub fn from_json(
        name: impl Into<String>,
        value: Value,
        max_depth: usize,
    ) -> Result<Self, DocumentError> {
        match value {
            Value::Object(map) => Ok(Self {
                name: name.into(),
                entries: convert_object(map, 1, max_depth)?,
            }),
            other => Err(DocumentError::NotAnObject(json_type_name(&other))),
        }
    }

    pub fn parse(
        name: impl Into<String>,
        content: &str,
        max_depth: usize,
    ) -> Result<Self, DocumentError> {
        let value: Value = serde_json::from_str(content)?;
        Self::from_json(name, value, max_depth)
    }

    /// Read and parse a document, naming it after its file.
    pub fn load(path: &Path, max_depth: usize) -> Result<Self, DocumentError> {
        let content = fs::read_to_string(path)?;
        Self::parse(document_name(path), &content, max_depth)
    }

    /// Total number of keys at every depth.
    pub fn key_count(&self) -> usize {
        fn count(entries: &[(String, LocaleNode)]) -> usize {
            entries
                .iter()
                .map(|(_, node)| match node {
                    LocaleNode::Object(children) => 1 + count(children),
                    LocaleNode::Scalar(_) => 1,
                })
                .sum()
        }
        count(&self.entries)
    }
}

fn convert_object(
    map: Map<String, Value>,
    depth: usize,
    max_depth: usize,
) -> Result<Vec<(String, LocaleNode)>, DocumentError> {
    if depth > max_depth {
        return Err(DocumentError::TooDeep(max_depth));
    }

    map.into_iter()
        .map(|(key, value)| {
            let node = match value {
                Value::Object(child) => {
                    LocaleNode::Object(convert_object(child, depth + 1, max_depth)?)
                }
                other => LocaleNode::Scalar(other),
            };
            Ok((key, node))
        })
        .collect()
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Derives the document name from a file path.
///
/// Examples:
/// - "en.json" -> "en"
/// - "/path/to/messages/zh-CN.json" -> "zh-CN"
/// - "en.json~" -> "en.json~"
///
/// Only a trailing `.json` is stripped, so a backup such as `en.json~`
/// never shares a name with the `en.json` it was copied from.
pub fn document_name(path: &Path) -> String {
    let file_name = path
        .file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();

    match file_name.strip_suffix(".json") {
        Some(stem) => stem.to_string(),
        None => file_name,
    }
}
