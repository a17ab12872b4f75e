//! HTML realization of a document tree
//!
//! Walks a [`DocumentTree`] and produces markup with the theme's utility
//! classes attached. Node keys become `data-key` attributes so realized
//! per-item elements keep a stable identity across re-renders.

pub mod snapshot;

use crate::document::{DocumentTree, Node, Tag};

/// Configuration options for HTML output.
#[derive(Debug, Clone)]
pub struct HtmlConfig {
    /// Whether to format output with indentation.
    pub pretty_print: bool,
}

impl Default for HtmlConfig {
    fn default() -> Self {
        Self { pretty_print: true }
    }
}

impl HtmlConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to pretty-print output.
    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }
}

/// Build HTML incrementally while walking the tree.
struct HtmlWriter {
    config: HtmlConfig,
    out: String,
    depth: usize,
}

impl HtmlWriter {
    fn new(config: HtmlConfig) -> Self {
        Self {
            config,
            out: String::new(),
            depth: 0,
        }
    }

    fn open_line(&mut self) {
        if self.config.pretty_print {
            if !self.out.is_empty() {
                self.out.push('\n');
            }
            self.out.push_str(&"  ".repeat(self.depth));
        }
    }

    fn write_node(&mut self, node: &Node) {
        let tag = element_name(node.tag);

        self.open_line();
        self.out.push('<');
        self.out.push_str(tag);
        if !node.classes.is_empty() {
            self.out
                .push_str(&format!(r#" class="{}""#, escape_attr(&node.classes)));
        }
        if let Some(href) = &node.href {
            self.out.push_str(&format!(r#" href="{}""#, escape_attr(href)));
        }
        if let Some(key) = node.key.attr_value() {
            self.out.push_str(&format!(r#" data-key="{key}""#));
        }
        self.out.push('>');

        if let Some(text) = &node.text {
            self.out.push_str(&escape_text(text));
        }

        if !node.children.is_empty() {
            self.depth += 1;
            for child in &node.children {
                self.write_node(child);
            }
            self.depth -= 1;
            self.open_line();
        }

        self.out.push_str(&format!("</{tag}>"));
    }
}

fn element_name(tag: Tag) -> &'static str {
    match tag {
        Tag::Block | Tag::Divider => "div",
        Tag::Section => "section",
        Tag::Heading(1) => "h1",
        Tag::Heading(2) => "h2",
        Tag::Heading(3) => "h3",
        Tag::Heading(_) => "h4",
        Tag::Paragraph => "p",
        Tag::Span => "span",
        Tag::List => "ul",
        Tag::Item => "li",
        Tag::Link => "a",
    }
}

/// Realize a document tree to markup with the given configuration.
pub fn realize_with_config(tree: &DocumentTree, config: HtmlConfig) -> String {
    let mut writer = HtmlWriter::new(config);
    writer.write_node(&tree.root);
    writer.out
}

/// Realize a document tree to pretty-printed markup.
pub fn realize(tree: &DocumentTree) -> String {
    realize_with_config(tree, HtmlConfig::default())
}

/// Escape text content for HTML.
pub fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escape an attribute value for HTML.
pub fn escape_attr(value: &str) -> String {
    escape_text(value).replace('"', "&quot;").replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::NodeKey;
    use crate::theme::ThemeId;

    fn tree(root: Node) -> DocumentTree {
        DocumentTree {
            theme: ThemeId::Minimalist,
            root,
        }
    }

    #[test]
    fn test_realize_simple_block() {
        let html = realize_with_config(
            &tree(Node::block("p-8").child(Node::heading(1, "text-xl", "Jane"))),
            HtmlConfig::new().with_pretty_print(false),
        );
        assert_eq!(html, r#"<div class="p-8"><h1 class="text-xl">Jane</h1></div>"#);
    }

    #[test]
    fn test_realize_link_and_key() {
        let html = realize_with_config(
            &tree(
                Node::list("").child(Node::item("chip", "Rust").key(NodeKey::Index(0))),
            ),
            HtmlConfig::new().with_pretty_print(false),
        );
        assert_eq!(html, r#"<ul><li class="chip" data-key="0">Rust</li></ul>"#);

        let html = realize_with_config(
            &tree(Node::link("", "mailto:a@b.c", "a@b.c")),
            HtmlConfig::new().with_pretty_print(false),
        );
        assert_eq!(html, r#"<a href="mailto:a@b.c">a@b.c</a>"#);
    }

    #[test]
    fn test_text_is_escaped() {
        let html = realize_with_config(
            &tree(Node::paragraph("", "<Fearless & Fast>")),
            HtmlConfig::new().with_pretty_print(false),
        );
        assert_eq!(html, "<p>&lt;Fearless &amp; Fast&gt;</p>");
    }

    #[test]
    fn test_pretty_print_indents_children() {
        let html = realize(&tree(Node::block("a").child(Node::span("b", "x"))));
        assert_eq!(html, "<div class=\"a\">\n  <span class=\"b\">x</span>\n</div>");
    }
}
