//! Sidebar data model and builder.
//!
//! A sidebar is an ordered list of [`NavEntry`] values serialized to the
//! JSON shapes the consuming site builder expects: bare identifier
//! strings, titled links, and collapsable sections.
//!
//! The sidebar is assembled once through [`SidebarBuilder`] and immutable
//! afterwards; there is no process-global state.
//!
//! # Example
//!
//! ```
//! use navgen_core::SidebarBuilder;
//!
//! let mut builder = SidebarBuilder::new();
//! builder.link("API Reference", "/api/0.8.1/");
//! builder.page("changelog");
//! builder.collected_section("client", vec!["client".to_owned(), "client/auth".to_owned()]);
//! let sidebar = builder.build();
//!
//! assert_eq!(sidebar.entries().len(), 3);
//! ```

use serde::Serialize;

/// One entry in the generated sidebar.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum NavEntry {
    /// Bare page identifier (normalized relative path, no extension).
    Page(String),
    /// Titled link to a fixed path.
    Link {
        /// Display title.
        title: String,
        /// Link target path.
        path: String,
    },
    /// Titled, collapsable grouping of entries.
    Section(Section),
}

/// A titled, collapsable grouping of navigation entries.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Section {
    /// Display title.
    pub title: String,
    /// Whether the section can be collapsed in the UI.
    pub collapsable: bool,
    /// Child entries, in ascending identifier order when collected.
    pub children: Vec<NavEntry>,
}

impl Section {
    /// Create a collapsable section from pre-sorted child identifiers.
    #[must_use]
    pub fn from_identifiers(title: impl Into<String>, identifiers: Vec<String>) -> Self {
        Self {
            title: title.into(),
            collapsable: true,
            children: identifiers.into_iter().map(NavEntry::Page).collect(),
        }
    }
}

/// Generated sidebar, ready for serialization.
///
/// Serializes transparently as the entry array.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Sidebar {
    entries: Vec<NavEntry>,
}

impl Sidebar {
    /// The ordered navigation entries.
    #[must_use]
    pub fn entries(&self) -> &[NavEntry] {
        &self.entries
    }

    /// Serialize to compact JSON.
    ///
    /// # Errors
    ///
    /// Returns [`serde_json::Error`] if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serialize to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`serde_json::Error`] if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Incremental builder for a [`Sidebar`].
#[derive(Debug, Default)]
pub struct SidebarBuilder {
    entries: Vec<NavEntry>,
}

impl SidebarBuilder {
    /// Create an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a bare page identifier.
    pub fn page(&mut self, identifier: impl Into<String>) {
        self.entries.push(NavEntry::Page(identifier.into()));
    }

    /// Append a titled link entry.
    pub fn link(&mut self, title: impl Into<String>, path: impl Into<String>) {
        self.entries.push(NavEntry::Link {
            title: title.into(),
            path: path.into(),
        });
    }

    /// Append a section with explicit child entries.
    pub fn section(&mut self, section: Section) {
        self.entries.push(NavEntry::Section(section));
    }

    /// Append a collapsable section from collected identifiers.
    ///
    /// Identifiers are taken as-is; [`collect`](crate::collect) already
    /// returns them sorted.
    pub fn collected_section(&mut self, title: impl Into<String>, identifiers: Vec<String>) {
        self.section(Section::from_identifiers(title, identifiers));
    }

    /// Finish building, consuming the builder.
    #[must_use]
    pub fn build(self) -> Sidebar {
        Sidebar {
            entries: self.entries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_builder_gives_empty_sidebar() {
        let sidebar = SidebarBuilder::new().build();

        assert!(sidebar.entries().is_empty());
        assert_eq!(sidebar.to_json().unwrap(), "[]");
    }

    #[test]
    fn test_builder_preserves_entry_order() {
        let mut builder = SidebarBuilder::new();
        builder.link("API Reference", "/api/0.8.1/");
        builder.page("changelog");
        builder.collected_section("client", vec!["client".to_owned()]);
        let sidebar = builder.build();

        assert_eq!(sidebar.entries().len(), 3);
        assert!(matches!(sidebar.entries()[0], NavEntry::Link { .. }));
        assert!(matches!(sidebar.entries()[1], NavEntry::Page(_)));
        assert!(matches!(sidebar.entries()[2], NavEntry::Section(_)));
    }

    #[test]
    fn test_page_serializes_as_bare_string() {
        let mut builder = SidebarBuilder::new();
        builder.page("changelog");
        let json = serde_json::to_value(builder.build()).unwrap();

        assert_eq!(json, serde_json::json!(["changelog"]));
    }

    #[test]
    fn test_link_serializes_with_title_and_path() {
        let mut builder = SidebarBuilder::new();
        builder.link("API Reference", "/api/0.8.1/");
        let json = serde_json::to_value(builder.build()).unwrap();

        assert_eq!(
            json,
            serde_json::json!([{ "title": "API Reference", "path": "/api/0.8.1/" }])
        );
    }

    #[test]
    fn test_section_serializes_with_children() {
        let mut builder = SidebarBuilder::new();
        builder.collected_section(
            "client",
            vec!["client".to_owned(), "client/auth".to_owned()],
        );
        let json = serde_json::to_value(builder.build()).unwrap();

        assert_eq!(
            json,
            serde_json::json!([{
                "title": "client",
                "collapsable": true,
                "children": ["client", "client/auth"]
            }])
        );
    }

    #[test]
    fn test_section_with_empty_children_keeps_array() {
        let mut builder = SidebarBuilder::new();
        builder.collected_section("schedules", Vec::new());
        let json = serde_json::to_value(builder.build()).unwrap();

        assert_eq!(json[0]["children"], serde_json::json!([]));
    }

    #[test]
    fn test_explicit_section_with_nav_entries() {
        let section = Section {
            title: "prefect".to_owned(),
            collapsable: true,
            children: vec![NavEntry::Page("triggers".to_owned())],
        };
        let mut builder = SidebarBuilder::new();
        builder.section(section);
        let sidebar = builder.build();

        let NavEntry::Section(section) = &sidebar.entries()[0] else {
            panic!("expected section entry");
        };
        assert_eq!(section.children, vec![NavEntry::Page("triggers".to_owned())]);
    }

    #[test]
    fn test_to_json_pretty_is_valid_json() {
        let mut builder = SidebarBuilder::new();
        builder.page("changelog");
        let pretty = builder.build().to_json_pretty().unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&pretty).unwrap();
        assert_eq!(parsed, serde_json::json!(["changelog"]));
    }
}
