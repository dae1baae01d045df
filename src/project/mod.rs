pub mod view;

use crate::i18n::{Record, Translator, Value};

/// Where the project list lives in the translation resources.
pub const ITEMS_KEY: &str = "projects.items";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectLinks<'a> {
    pub github: &'a str,
    pub youtube: &'a str,
}

/// One entry of the project gallery, borrowed from the active language's
/// resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectEntry<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub summary: &'a str,
    pub impact: &'a str,
    pub stack: &'a [String],
    pub highlights: &'a [String],
    pub links: ProjectLinks<'a>,
}

impl<'a> ProjectEntry<'a> {
    /// Reads a project record. Returns `None` if a field is missing or has
    /// the wrong shape.
    pub fn from_record(record: &'a Record) -> Option<Self> {
        let text = |name: &str| record.get(name).and_then(Value::as_text);
        let list = |name: &str| record.get(name).and_then(Value::as_list);

        Some(ProjectEntry {
            name: text("name")?,
            description: text("description")?,
            summary: text("summary")?,
            impact: text("impact")?,
            stack: list("stack")?,
            highlights: list("highlights")?,
            links: ProjectLinks {
                github: text("github")?,
                youtube: text("youtube")?,
            },
        })
    }
}

/// Every well-formed project of the active language, in resource order.
pub fn entries<'a>(t: &Translator<'a>) -> Vec<ProjectEntry<'a>> {
    t.records(ITEMS_KEY)
        .iter()
        .enumerate()
        .filter_map(|(index, record)| {
            let entry = ProjectEntry::from_record(record);
            if entry.is_none() {
                tracing::warn!(index, language = %t.language(), "skipping malformed project");
            }
            entry
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::value::Tree;
    use crate::i18n::{Catalog, Language};

    fn catalog(json: &str) -> Catalog {
        let tree: Tree = serde_json::from_str(json).unwrap();
        let mut catalog = Catalog::new(Language::English);
        catalog.insert(Language::English, tree);
        catalog
    }

    const PROJECT: &str = r#"{
        "name": "Relay",
        "description": "Message relay",
        "summary": "A longer summary",
        "impact": "40% less latency",
        "stack": ["Rust", "Tokio"],
        "highlights": ["Zero-copy parsing"],
        "github": "https://github.com/example/relay",
        "youtube": "https://youtube.com/watch?v=relay"
    }"#;

    #[test]
    fn reads_every_field() {
        let catalog = catalog(&format!(r#"{{ "projects": {{ "items": [{PROJECT}] }} }}"#));
        let t = catalog.translator(Language::English);
        let projects = entries(&t);

        assert_eq!(projects.len(), 1);
        let relay = projects[0];
        assert_eq!(relay.name, "Relay");
        assert_eq!(relay.impact, "40% less latency");
        assert_eq!(relay.stack, ["Rust", "Tokio"]);
        assert_eq!(relay.highlights, ["Zero-copy parsing"]);
        assert_eq!(relay.links.github, "https://github.com/example/relay");
    }

    #[test]
    fn malformed_records_are_skipped() {
        let broken = r#"{ "name": "Broken", "stack": "Rust" }"#;
        let catalog = catalog(&format!(
            r#"{{ "projects": {{ "items": [{broken}, {PROJECT}] }} }}"#
        ));
        let t = catalog.translator(Language::Spanish);
        let projects = entries(&t);

        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].name, "Relay");
    }

    #[test]
    fn shipped_projects_are_well_formed() {
        let catalog = Catalog::embedded().unwrap();
        for language in Language::ALL {
            let t = catalog.translator(language);
            assert_eq!(
                entries(&t).len(),
                t.records(ITEMS_KEY).len(),
                "{language}"
            );
        }
    }
}
