//! Structural comparison of translation trees.
//!
//! Every language must expose the same keys, the same value kinds, and lists
//! of the same length as the default language, so the view renders the same
//! layout whichever language is active.

use std::fmt;

use super::value::{Tree, Value};
use super::Language;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MismatchKind {
    MissingLanguage,
    MissingKey,
    UnexpectedKey,
    Blank,
    Kind {
        expected: &'static str,
        found: &'static str,
    },
    Length {
        expected: usize,
        found: usize,
    },
}

impl fmt::Display for MismatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MismatchKind::MissingLanguage => write!(f, "has no resource"),
            MismatchKind::MissingKey => write!(f, "is missing"),
            MismatchKind::UnexpectedKey => write!(f, "is not in the default language"),
            MismatchKind::Blank => write!(f, "is blank"),
            MismatchKind::Kind { expected, found } => {
                write!(f, "is a {found}, expected a {expected}")
            }
            MismatchKind::Length { expected, found } => {
                write!(f, "has {found} entries, expected {expected}")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeMismatch {
    pub language: Language,
    pub path: String,
    pub kind: MismatchKind,
}

impl ShapeMismatch {
    pub fn missing_language(language: Language) -> Self {
        Self {
            language,
            path: String::new(),
            kind: MismatchKind::MissingLanguage,
        }
    }
}

impl fmt::Display for ShapeMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "[{}] {}", self.language, self.kind)
        } else {
            write!(f, "[{}] `{}` {}", self.language, self.path, self.kind)
        }
    }
}

/// Lists every place where `candidate` differs in shape from `reference`.
pub fn compare(language: Language, reference: &Tree, candidate: &Tree) -> Vec<ShapeMismatch> {
    let mut mismatches = Vec::new();
    compare_trees(language, "", reference, candidate, &mut mismatches);
    mismatches
}

fn compare_trees(
    language: Language,
    prefix: &str,
    reference: &Tree,
    candidate: &Tree,
    out: &mut Vec<ShapeMismatch>,
) {
    let mismatch = |path: String, kind| ShapeMismatch {
        language,
        path,
        kind,
    };

    for (key, expected) in reference {
        let path = join(prefix, key);
        match candidate.get(key) {
            Some(found) => compare_values(language, &path, expected, found, out),
            None => out.push(mismatch(path, MismatchKind::MissingKey)),
        }
    }

    for key in candidate.keys().filter(|key| !reference.contains_key(*key)) {
        out.push(mismatch(join(prefix, key), MismatchKind::UnexpectedKey));
    }
}

fn compare_values(
    language: Language,
    path: &str,
    expected: &Value,
    found: &Value,
    out: &mut Vec<ShapeMismatch>,
) {
    let length = |expected: usize, found: usize| ShapeMismatch {
        language,
        path: path.to_string(),
        kind: MismatchKind::Length { expected, found },
    };

    match (expected, found) {
        (Value::Text(_), Value::Text(_)) => {
            if found.is_empty() && !expected.is_empty() {
                out.push(ShapeMismatch {
                    language,
                    path: path.to_string(),
                    kind: MismatchKind::Blank,
                });
            }
        }
        (Value::List(expected), Value::List(found)) => {
            if expected.len() != found.len() {
                out.push(length(expected.len(), found.len()));
            }
        }
        (Value::Records(expected), Value::Records(found)) => {
            if expected.len() != found.len() {
                out.push(length(expected.len(), found.len()));
            }
            for (index, (expected, found)) in expected.iter().zip(found).enumerate() {
                compare_trees(language, &join(path, &index.to_string()), expected, found, out);
            }
        }
        (Value::Tree(expected), Value::Tree(found)) => {
            compare_trees(language, path, expected, found, out);
        }
        _ => out.push(ShapeMismatch {
            language,
            path: path.to_string(),
            kind: MismatchKind::Kind {
                expected: expected.kind(),
                found: found.kind(),
            },
        }),
    }
}

fn join(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree(json: &str) -> Tree {
        serde_json::from_str(json).unwrap()
    }

    const REFERENCE: &str = r#"{
        "nav": { "projects": "Projects" },
        "hero": { "focusList": ["APIs", "CLIs"] },
        "projects": {
            "items": [
                { "name": "Relay", "stack": ["Rust", "Tokio"] },
                { "name": "Ledger", "stack": ["Go"] }
            ]
        }
    }"#;

    #[test]
    fn identical_shapes_have_no_mismatch() {
        let reference = tree(REFERENCE);
        let candidate = tree(
            r#"{
                "nav": { "projects": "Projetos" },
                "hero": { "focusList": ["APIs", "CLIs"] },
                "projects": {
                    "items": [
                        { "name": "Relay", "stack": ["Rust", "Tokio"] },
                        { "name": "Ledger", "stack": ["Go"] }
                    ]
                }
            }"#,
        );

        assert!(compare(Language::Portuguese, &reference, &candidate).is_empty());
    }

    #[test]
    fn reports_missing_and_unexpected_keys() {
        let reference = tree(REFERENCE);
        let candidate = tree(
            r#"{
                "nav": { "proyectos": "Proyectos" },
                "hero": { "focusList": ["APIs", "CLIs"] },
                "projects": {
                    "items": [
                        { "name": "Relay", "stack": ["Rust", "Tokio"] },
                        { "name": "Ledger", "stack": ["Go"] }
                    ]
                }
            }"#,
        );

        let mismatches = compare(Language::Spanish, &reference, &candidate);
        assert_eq!(
            mismatches,
            vec![
                ShapeMismatch {
                    language: Language::Spanish,
                    path: "nav.projects".to_string(),
                    kind: MismatchKind::MissingKey,
                },
                ShapeMismatch {
                    language: Language::Spanish,
                    path: "nav.proyectos".to_string(),
                    kind: MismatchKind::UnexpectedKey,
                },
            ]
        );
    }

    #[test]
    fn reports_kind_and_length_changes() {
        let reference = tree(REFERENCE);
        let candidate = tree(
            r#"{
                "nav": { "projects": ["Projects"] },
                "hero": { "focusList": ["APIs"] },
                "projects": {
                    "items": [
                        { "name": "Relay", "stack": ["Rust"] }
                    ]
                }
            }"#,
        );

        let mismatches = compare(Language::Spanish, &reference, &candidate);
        let kinds: Vec<_> = mismatches
            .iter()
            .map(|m| (m.path.as_str(), m.kind.clone()))
            .collect();

        assert_eq!(
            kinds,
            vec![
                ("hero.focusList", MismatchKind::Length { expected: 2, found: 1 }),
                (
                    "nav.projects",
                    MismatchKind::Kind {
                        expected: "text",
                        found: "list"
                    }
                ),
                ("projects.items", MismatchKind::Length { expected: 2, found: 1 }),
                ("projects.items.0.stack", MismatchKind::Length { expected: 2, found: 1 }),
            ]
        );
    }

    #[test]
    fn reports_blank_translations() {
        let reference = tree(r#"{ "nav": { "projects": "Projects" } }"#);
        let candidate = tree(r#"{ "nav": { "projects": "  " } }"#);

        let mismatches = compare(Language::Portuguese, &reference, &candidate);
        assert_eq!(mismatches.len(), 1);
        assert_eq!(mismatches[0].kind, MismatchKind::Blank);
        assert_eq!(mismatches[0].path, "nav.projects");
    }

    #[test]
    fn display_names_language_and_path() {
        let mismatch = ShapeMismatch {
            language: Language::Portuguese,
            path: "hero.stats".to_string(),
            kind: MismatchKind::Length {
                expected: 3,
                found: 2,
            },
        };
        assert_eq!(
            mismatch.to_string(),
            "[pt] `hero.stats` has 2 entries, expected 3"
        );
        assert_eq!(
            ShapeMismatch::missing_language(Language::Spanish).to_string(),
            "[es] has no resource"
        );
    }
}
