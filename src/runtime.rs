//! Runtime support for generated message tables.
//!
//! The messages file written by `glotgen generate` declares a static table of
//! every locale and a `CodegenLoader` type implementing [`TranslationProvider`]:
//!
//! ```ignore
//! mod locale_keys { include!("generated/locale_keys.rs"); }
//! mod codegen_loader { include!("generated/codegen_loader.rs"); }
//!
//! use glotgen::runtime::TranslationProvider;
//!
//! let title = codegen_loader::CodegenLoader.lookup("en", locale_keys::LocaleKeys::login_title);
//! ```

/// Messages of one locale: `(symbol, value)` pairs in document order.
pub type Messages = &'static [(&'static str, &'static str)];

/// A source of embedded translations.
pub trait TranslationProvider {
    /// Every locale with its messages, in generation order.
    fn locales(&self) -> &'static [(&'static str, Messages)];

    fn locale_names(&self) -> Vec<&'static str> {
        self.locales().iter().map(|(name, _)| *name).collect()
    }

    fn messages(&self, locale: &str) -> Option<Messages> {
        self.locales()
            .iter()
            .find(|(name, _)| *name == locale)
            .map(|(_, messages)| *messages)
    }

    /// Look up a translation by dotted key (`login.title`) or by symbol
    /// (`login_title`).
    fn lookup(&self, locale: &str, key: &str) -> Option<&'static str> {
        let messages = self.messages(locale)?;
        let find = |wanted: &str| {
            messages
                .iter()
                .find(|(symbol, _)| *symbol == wanted)
                .map(|(_, value)| *value)
        };

        find(key).or_else(|| {
            if key.contains('.') {
                find(key.replace('.', "_").as_str())
            } else {
                None
            }
        })
    }
}
