//! Translated display strings.
//!
//! One JSON resource per [`Language`] lives in the `i18n/` folder and is
//! embedded at build time. Every resource must have the same shape as the
//! English one; [`Catalog::embedded`] refuses to start otherwise.

pub mod catalog;
pub mod shape;
pub mod value;

use std::fmt;
use std::str::FromStr;

use rust_embed::RustEmbed;

pub use catalog::{Catalog, Translator};
pub use value::{field, Record, Value};

#[derive(RustEmbed)]
#[folder = "i18n"]
struct Localizations;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Language {
    #[default]
    English,
    Portuguese,
    Spanish,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::English, Language::Portuguese, Language::Spanish];

    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Portuguese => "pt",
            Language::Spanish => "es",
        }
    }

    /// Label shown on the language toggle.
    pub fn label(self) -> &'static str {
        match self {
            Language::English => "EN",
            Language::Portuguese => "PT",
            Language::Spanish => "ES",
        }
    }

    /// Parses `en`, `PT`, `es-MX` and the like. Unknown codes give `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        let normalized = code.trim().to_ascii_lowercase();
        let primary = normalized.split(['-', '_']).next().unwrap_or_default();

        Language::ALL
            .into_iter()
            .find(|language| language.code() == primary)
    }

    fn resource_file(self) -> String {
        format!("{}.json", self.code())
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported language code `{0}`")]
pub struct UnknownLanguage(pub String);

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_code(s).ok_or_else(|| UnknownLanguage(s.to_string()))
    }
}
