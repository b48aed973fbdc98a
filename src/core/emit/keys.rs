use super::GENERATED_HEADER;
use crate::core::flatten::FlatEntry;
use crate::utils::{render_identifier, rust_string_literal};

/// Name of the struct holding the key constants.
pub const KEYS_TYPE_NAME: &str = "LocaleKeys";

/// Render the constants file, one associated constant per entry.
pub fn render_keys(entries: &[FlatEntry]) -> String {
    let declarations: Vec<String> = entries
        .iter()
        .map(|entry| {
            format!(
                "    pub const {}: &'static str = {};\n",
                render_identifier(&entry.symbol),
                rust_string_literal(&entry.key)
            )
        })
        .collect();

    format!(
        "{header}\n\
         \n\
         pub struct {name};\n\
         \n\
         #[allow(dead_code, non_upper_case_globals)]\n\
         impl {name} {{\n\
         {body}}}\n",
        header = GENERATED_HEADER,
        name = KEYS_TYPE_NAME,
        body = declarations.concat(),
    )
}
