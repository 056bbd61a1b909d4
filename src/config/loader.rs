//! Loading the build document.
//!
//! The XML is parsed once and copied into a small owned tree so the rest of
//! the pipeline never has to deal with parser lifetimes.

use std::path::Path;

use crate::error::GhostError;

/// Tag of the root element.
pub const ROOT_TAG: &str = "GhostBuild";

/// An element of the parsed build document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    attributes: Vec<(String, String)>,
    text: String,
    children: Vec<Element>,
}

impl Element {
    fn from_node(node: roxmltree::Node<'_, '_>) -> Self {
        Element {
            tag: node.tag_name().name().to_string(),
            attributes: node
                .attributes()
                .map(|attr| (attr.name().to_string(), attr.value().to_string()))
                .collect(),
            // Direct text children only; comments and nested elements are skipped
            text: node
                .children()
                .filter(|child| child.is_text())
                .filter_map(|child| child.text())
                .collect(),
            children: node
                .children()
                .filter(|child| child.is_element())
                .map(Element::from_node)
                .collect(),
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Value of an attribute, if present.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// First direct child with the given tag.
    pub fn find(&self, tag: &str) -> Option<&Element> {
        self.children.iter().find(|child| child.tag == tag)
    }

    /// Text content as written. `None` for an empty or blank element.
    pub fn text(&self) -> Option<&str> {
        Some(self.text.as_str()).filter(|t| !t.trim().is_empty())
    }
}

/// A parsed build document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    root: Element,
}

impl Document {
    /// Parse a build document from text.
    ///
    /// `path` is only used for error reporting.
    pub fn parse(text: &str, path: &Path) -> Result<Self, GhostError> {
        let malformed = |reason: String| GhostError::MalformedConfig {
            path: path.to_path_buf(),
            reason,
        };

        let doc = roxmltree::Document::parse(text).map_err(|e| {
            malformed(format!(
                "invalid syntax/missing root element (<{}>): {}",
                ROOT_TAG, e
            ))
        })?;

        let root = doc.root_element();
        if root.tag_name().name() != ROOT_TAG {
            return Err(malformed(format!(
                "root element is <{}>, expected <{}>",
                root.tag_name().name(),
                ROOT_TAG
            )));
        }

        Ok(Document {
            root: Element::from_node(root),
        })
    }

    /// The `<GhostBuild>` element.
    pub fn root(&self) -> &Element {
        &self.root
    }
}

/// Read and parse the build document at `path`.
pub fn load(path: &Path) -> Result<Document, GhostError> {
    if !path.is_file() {
        return Err(GhostError::MissingConfig {
            path: path.to_path_buf(),
        });
    }

    let text = std::fs::read_to_string(path).map_err(|e| GhostError::MalformedConfig {
        path: path.to_path_buf(),
        reason: format!("failed to read file: {}", e),
    })?;

    tracing::debug!("parsing build config {}", path.display());
    Document::parse(&text, path)
}
