use std::collections::BTreeMap;

use serde::Deserialize;

/// A nested mapping of translation keys.
pub type Tree = BTreeMap<String, Value>;

/// One entry of a list of records, e.g. a project or a hero stat.
pub type Record = BTreeMap<String, Value>;

/// A node of a translation resource.
///
/// Leaves are either a single string, a list of strings or a list of records.
/// Callers know which shape a key path promises and branch on it through the
/// `as_*` accessors.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Text(String),
    List(Vec<String>),
    Records(Vec<Record>),
    Tree(Tree),
}

impl Value {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text.as_str()),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Value::List(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    pub fn as_records(&self) -> Option<&[Record]> {
        match self {
            Value::Records(records) => Some(records.as_slice()),
            _ => None,
        }
    }

    pub fn as_tree(&self) -> Option<&Tree> {
        match self {
            Value::Tree(tree) => Some(tree),
            _ => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Value::Text(_) => "text",
            Value::List(_) => "list",
            Value::Records(_) => "record list",
            Value::Tree(_) => "mapping",
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Value::Text(text) => text.trim().is_empty(),
            Value::List(items) => items.is_empty(),
            Value::Records(records) => records.is_empty(),
            Value::Tree(tree) => tree.is_empty(),
        }
    }

    /// Number of leaves below this node. A record list counts as one leaf.
    pub fn leaf_count(&self) -> usize {
        match self {
            Value::Tree(tree) => tree.values().map(Value::leaf_count).sum(),
            _ => 1,
        }
    }
}

/// Walks `path` one dotted segment at a time through nested mappings.
pub fn lookup<'a>(tree: &'a Tree, path: &str) -> Option<&'a Value> {
    let mut segments = path.split('.');
    let mut current = tree.get(segments.next()?)?;

    for segment in segments {
        current = current.as_tree()?.get(segment)?;
    }

    Some(current)
}

/// Text field of a record, or an empty string when it is absent.
pub fn field<'a>(record: &'a Record, name: &str) -> &'a str {
    record
        .get(name)
        .and_then(Value::as_text)
        .unwrap_or_default()
}
