use std::collections::BTreeMap;

use thiserror::Error;

use super::shape::{self, ShapeMismatch};
use super::value::{lookup, Record, Tree, Value};
use super::{Language, Localizations};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("no translation resource for `{0}`")]
    MissingResource(Language),
    #[error("translation resource for `{language}` is not valid: {source}")]
    Format {
        language: Language,
        #[source]
        source: serde_json::Error,
    },
    #[error("translation resource for `{0}` must be a mapping at the top level")]
    NotATree(Language),
    #[error(
        "translation resources differ in shape from `{default}` ({} mismatches)",
        .mismatches.len()
    )]
    Shape {
        default: Language,
        mismatches: Vec<ShapeMismatch>,
    },
}

/// Translation trees for every language, plus the language used when a key
/// or a whole tree is missing.
#[derive(Debug, Clone)]
pub struct Catalog {
    trees: BTreeMap<Language, Tree>,
    default: Language,
}

impl Catalog {
    pub fn new(default: Language) -> Self {
        Self {
            trees: BTreeMap::new(),
            default,
        }
    }

    /// Loads and validates the resources compiled into the binary.
    pub fn embedded() -> Result<Self, CatalogError> {
        let mut catalog = Catalog::new(Language::default());

        for language in Language::ALL {
            let file = Localizations::get(&language.resource_file())
                .ok_or(CatalogError::MissingResource(language))?;
            catalog.insert_json(language, &file.data)?;

            tracing::debug!(
                %language,
                keys = catalog.key_count(language),
                "loaded translations"
            );
        }

        catalog.validate()?;

        Ok(catalog)
    }

    pub fn insert(&mut self, language: Language, tree: Tree) {
        self.trees.insert(language, tree);
    }

    pub fn insert_json(&mut self, language: Language, json: &[u8]) -> Result<(), CatalogError> {
        let value: Value = serde_json::from_slice(json)
            .map_err(|source| CatalogError::Format { language, source })?;

        match value {
            Value::Tree(tree) => {
                self.insert(language, tree);
                Ok(())
            }
            _ => Err(CatalogError::NotATree(language)),
        }
    }

    pub fn tree(&self, language: Language) -> Option<&Tree> {
        self.trees.get(&language)
    }

    /// Resolves a dotted key path, falling back to the default language when
    /// the language has no tree or the path is absent from it.
    pub fn resolve(&self, language: Language, path: &str) -> Option<&Value> {
        self.tree(language)
            .and_then(|tree| lookup(tree, path))
            .or_else(|| {
                self.tree(self.default)
                    .and_then(|tree| lookup(tree, path))
            })
    }

    /// Like [`Catalog::resolve`], for a raw language code. Unknown codes use
    /// the default language.
    #[cfg(test)]
    pub fn resolve_code(&self, code: &str, path: &str) -> Option<&Value> {
        let language = Language::from_code(code).unwrap_or(self.default);
        self.resolve(language, path)
    }

    pub fn translator(&self, language: Language) -> Translator<'_> {
        Translator {
            catalog: self,
            language,
        }
    }

    pub fn key_count(&self, language: Language) -> usize {
        self.tree(language)
            .map(|tree| tree.values().map(Value::leaf_count).sum())
            .unwrap_or_default()
    }

    /// Checks that every language has the same shape as the default one.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let Some(reference) = self.tree(self.default) else {
            return Err(CatalogError::MissingResource(self.default));
        };

        let mut mismatches = Vec::new();

        for language in Language::ALL {
            if language == self.default {
                continue;
            }

            match self.tree(language) {
                Some(tree) => mismatches.extend(shape::compare(language, reference, tree)),
                None => mismatches.push(ShapeMismatch::missing_language(language)),
            }
        }

        if mismatches.is_empty() {
            return Ok(());
        }

        for mismatch in &mismatches {
            tracing::error!(%mismatch, "translation shape mismatch");
        }

        Err(CatalogError::Shape {
            default: self.default,
            mismatches,
        })
    }
}

/// A [`Catalog`] bound to the active language.
#[derive(Debug, Clone, Copy)]
pub struct Translator<'a> {
    catalog: &'a Catalog,
    language: Language,
}

impl<'a> Translator<'a> {
    pub fn language(&self) -> Language {
        self.language
    }

    pub fn resolve(&self, path: &str) -> Option<&'a Value> {
        self.catalog.resolve(self.language, path)
    }

    /// The string at `path`, or the path itself if it cannot be resolved.
    pub fn text(&self, path: &'a str) -> &'a str {
        let value = self.resolve(path);
        value.and_then(Value::as_text).unwrap_or_else(|| {
            self.report(path, "text", value);
            path
        })
    }

    pub fn list(&self, path: &str) -> &'a [String] {
        let value = self.resolve(path);
        value.and_then(Value::as_list).unwrap_or_else(|| {
            self.report(path, "list", value);
            &[]
        })
    }

    pub fn records(&self, path: &str) -> &'a [Record] {
        let value = self.resolve(path);
        if let Some(records) = value.and_then(Value::as_records) {
            return records;
        }

        // An empty JSON array deserializes as a list.
        if !matches!(value, Some(Value::List(items)) if items.is_empty()) {
            self.report(path, "record list", value);
        }
        &[]
    }

    fn report(&self, path: &str, expected: &str, found: Option<&Value>) {
        match found {
            Some(value) => tracing::warn!(
                language = %self.language,
                path,
                expected,
                found = value.kind(),
                "translation has the wrong shape"
            ),
            None => tracing::warn!(
                language = %self.language,
                path,
                "translation missing in every language"
            ),
        }
    }
}
