use indexmap::IndexMap;

use super::GENERATED_HEADER;
use crate::core::document::LocaleDocument;
use crate::core::flatten::resolve;
use crate::utils::rust_string_literal;

/// Name of the generated static holding every locale's messages.
pub const LOCALES_STATIC_NAME: &str = "LOCALES";

/// Name of the generated provider type.
pub const PROVIDER_TYPE_NAME: &str = "CodegenLoader";

/// Document name -> (symbol -> value), both in insertion order.
pub type LocaleTable = IndexMap<String, IndexMap<String, String>>;

/// Collect every key of every document, branches included.
///
/// Documents sharing a name are merged into one entry; later values win.
pub fn build_table(documents: &[LocaleDocument]) -> LocaleTable {
    documents.iter().fold(LocaleTable::new(), |mut table, document| {
        let messages = table.entry(document.name.clone()).or_default();
        for (entry, node) in resolve(&document.entries, None) {
            messages.insert(entry.symbol, node.display_value());
        }
        table
    })
}

/// Render the messages file.
///
/// `runtime_path` is the module path the generated code imports
/// `Messages` and `TranslationProvider` from.
pub fn render_table(table: &LocaleTable, runtime_path: &str) -> String {
    let locales: Vec<String> = table
        .iter()
        .map(|(name, messages)| render_locale(name, messages))
        .collect();

    format!(
        "{header}\n\
         \n\
         use {runtime}::{{Messages, TranslationProvider}};\n\
         \n\
         pub static {locales_name}: &[(&str, Messages)] = &[\n\
         {locales}];\n\
         \n\
         pub struct {provider};\n\
         \n\
         impl TranslationProvider for {provider} {{\n\
         \x20   fn locales(&self) -> &'static [(&'static str, Messages)] {{\n\
         \x20       {locales_name}\n\
         \x20   }}\n\
         }}\n",
        header = GENERATED_HEADER,
        runtime = runtime_path,
        locales_name = LOCALES_STATIC_NAME,
        locales = locales.concat(),
        provider = PROVIDER_TYPE_NAME,
    )
}

fn render_locale(name: &str, messages: &IndexMap<String, String>) -> String {
    if messages.is_empty() {
        return format!("    ({}, &[]),\n", rust_string_literal(name));
    }

    let lines: String = messages
        .iter()
        .map(|(key, value)| {
            format!(
                "        ({}, {}),\n",
                rust_string_literal(key),
                rust_string_literal(value)
            )
        })
        .collect();

    format!("    ({}, &[\n{}    ]),\n", rust_string_literal(name), lines)
}
