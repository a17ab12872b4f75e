//! Document tree produced by theme renderers
//!
//! A [`DocumentTree`] is the structured visual output of rendering a
//! profile under a theme. It has no identity of its own: it is derived
//! wholesale from the profile and replaced on every change, never mutated.
//! Styling is carried as utility-class strings on each node; the `html`
//! module realizes the tree to markup.

use crate::theme::ThemeId;

/// Identity key for a node, used for stable re-render correspondence.
///
/// Nodes emitted per list item are keyed by the entry's id (experience and
/// projects) or by positional index (skills and tags, which have no ids).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKey {
    /// No per-item identity.
    Anon,
    /// Keyed by an entry id.
    Entry(u64),
    /// Keyed by position within its list.
    Index(usize),
}

impl NodeKey {
    /// The value realized as a `data-key` attribute, if any.
    pub fn attr_value(&self) -> Option<String> {
        match self {
            NodeKey::Anon => None,
            NodeKey::Entry(id) => Some(id.to_string()),
            NodeKey::Index(i) => Some(i.to_string()),
        }
    }
}

/// Structural role of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    /// Generic block container.
    Block,
    /// Thematic section of the document.
    Section,
    /// Heading at levels 1 through 4.
    Heading(u8),
    /// Flowing text block.
    Paragraph,
    /// Inline text run.
    Span,
    /// Ordered container of items.
    List,
    /// Single entry within a list.
    Item,
    /// Hyperlink with visible text.
    Link,
    /// Visual divider.
    Divider,
}

/// One node of the document tree.
///
/// Children are stored in reading order; traversal order is the document's
/// fixed top-down reading order.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub tag: Tag,
    /// Space-separated utility classes carrying the theme's styling.
    pub classes: String,
    /// Text payload for headings, paragraphs, spans, items, and links.
    pub text: Option<String>,
    /// Target for link nodes.
    pub href: Option<String>,
    pub key: NodeKey,
    pub children: Vec<Node>,
}

impl Node {
    fn new(tag: Tag, classes: &str) -> Self {
        Self {
            tag,
            classes: classes.to_string(),
            text: None,
            href: None,
            key: NodeKey::Anon,
            children: Vec::new(),
        }
    }

    /// Create a block container.
    pub fn block(classes: &str) -> Self {
        Self::new(Tag::Block, classes)
    }

    /// Create a section container.
    pub fn section(classes: &str) -> Self {
        Self::new(Tag::Section, classes)
    }

    /// Create a heading with the given level (1 through 4).
    pub fn heading(level: u8, classes: &str, text: impl Into<String>) -> Self {
        let mut node = Self::new(Tag::Heading(level), classes);
        node.text = Some(text.into());
        node
    }

    /// Create a flowing text block.
    pub fn paragraph(classes: &str, text: impl Into<String>) -> Self {
        let mut node = Self::new(Tag::Paragraph, classes);
        node.text = Some(text.into());
        node
    }

    /// Create an inline text run.
    pub fn span(classes: &str, text: impl Into<String>) -> Self {
        let mut node = Self::new(Tag::Span, classes);
        node.text = Some(text.into());
        node
    }

    /// Create an ordered list container.
    pub fn list(classes: &str) -> Self {
        Self::new(Tag::List, classes)
    }

    /// Create a list item with a text payload.
    pub fn item(classes: &str, text: impl Into<String>) -> Self {
        let mut node = Self::new(Tag::Item, classes);
        node.text = Some(text.into());
        node
    }

    /// Create a link with visible text.
    pub fn link(classes: &str, href: impl Into<String>, text: impl Into<String>) -> Self {
        let mut node = Self::new(Tag::Link, classes);
        node.href = Some(href.into());
        node.text = Some(text.into());
        node
    }

    /// Create a visual divider.
    pub fn divider(classes: &str) -> Self {
        Self::new(Tag::Divider, classes)
    }

    /// Set the identity key.
    pub fn key(mut self, key: NodeKey) -> Self {
        self.key = key;
        self
    }

    /// Append a child node.
    pub fn child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Append several child nodes in order.
    pub fn extend(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    /// Append a child only when it is present.
    pub fn maybe(mut self, child: Option<Node>) -> Self {
        if let Some(child) = child {
            self.children.push(child);
        }
        self
    }

    /// Visit this node and all descendants in reading order.
    pub fn visit<'a>(&'a self, f: &mut impl FnMut(&'a Node)) {
        f(self);
        for child in &self.children {
            child.visit(f);
        }
    }
}

/// The rendered document: a node tree plus the theme that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentTree {
    pub theme: ThemeId,
    pub root: Node,
}

impl DocumentTree {
    /// Visit every node in reading order.
    pub fn visit<'a>(&'a self, f: &mut impl FnMut(&'a Node)) {
        self.root.visit(f);
    }

    /// All text payloads in reading order.
    pub fn texts(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.visit(&mut |node| {
            if let Some(text) = &node.text {
                out.push(text.as_str());
            }
        });
        out
    }

    /// Whether any node's text contains the given needle.
    pub fn contains_text(&self, needle: &str) -> bool {
        self.texts().iter().any(|t| t.contains(needle))
    }

    /// All nodes matching a predicate, in reading order.
    pub fn select<'a>(&'a self, pred: impl Fn(&Node) -> bool) -> Vec<&'a Node> {
        let mut out = Vec::new();
        self.visit(&mut |node| {
            if pred(node) {
                out.push(node);
            }
        });
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> DocumentTree {
        DocumentTree {
            theme: ThemeId::Minimalist,
            root: Node::block("p-8")
                .child(Node::heading(1, "text-3xl", "Jane Doe"))
                .child(
                    Node::list("flex gap-2")
                        .child(Node::item("chip", "Rust").key(NodeKey::Index(0)))
                        .child(Node::item("chip", "Go").key(NodeKey::Index(1))),
                ),
        }
    }

    #[test]
    fn test_texts_in_reading_order() {
        let tree = sample_tree();
        assert_eq!(tree.texts(), vec!["Jane Doe", "Rust", "Go"]);
    }

    #[test]
    fn test_contains_text() {
        let tree = sample_tree();
        assert!(tree.contains_text("Jane"));
        assert!(!tree.contains_text("Python"));
    }

    #[test]
    fn test_select_by_tag() {
        let tree = sample_tree();
        let items = tree.select(|n| n.tag == Tag::Item);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].key, NodeKey::Index(0));
    }

    #[test]
    fn test_key_attr_value() {
        assert_eq!(NodeKey::Anon.attr_value(), None);
        assert_eq!(NodeKey::Entry(42).attr_value(), Some("42".to_string()));
        assert_eq!(NodeKey::Index(3).attr_value(), Some("3".to_string()));
    }
}
