//! A small owned markup tree.
//!
//! Layouts build `Node`s; the preview serialises them to HTML and the PDF
//! exporter walks the same tree. Text and attribute values are escaped on
//! serialisation, never at construction time.

use std::fmt::Write as _;

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: &'static str,
    pub class: String,
    /// Inline CSS declarations, kept structured so the exporter can read them.
    pub styles: Vec<(&'static str, String)>,
    pub children: Vec<Node>,
}

pub fn el(tag: &'static str) -> Element {
    Element {
        tag,
        class: String::new(),
        styles: Vec::new(),
        children: Vec::new(),
    }
}

pub fn text(value: impl Into<String>) -> Node {
    Node::Text(value.into())
}

impl Element {
    pub fn class(mut self, class: &str) -> Self {
        if !self.class.is_empty() {
            self.class.push(' ');
        }
        self.class.push_str(class);
        self
    }

    pub fn style(mut self, property: &'static str, value: impl Into<String>) -> Self {
        self.styles.push((property, value.into()));
        self
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    /// Appends the node only when present; how layouts omit optional sections.
    pub fn child_opt(mut self, node: Option<impl Into<Node>>) -> Self {
        if let Some(node) = node {
            self.children.push(node.into());
        }
        self
    }

    pub fn children<I, N>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(nodes.into_iter().map(Into::into));
        self
    }

    pub fn text(self, value: impl Into<String>) -> Self {
        self.child(text(value))
    }

    pub fn style_value(&self, property: &str) -> Option<&str> {
        self.styles
            .iter()
            .rev()
            .find(|(p, _)| *p == property)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.class.split_whitespace().any(|c| c == class)
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Node::Text(value)
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Node::Text(value.to_string())
    }
}

const VOID_TAGS: &[&str] = &["br", "hr"];

impl Node {
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Node::Text(value) => out.push_str(&escape_text(value)),
            Node::Element(element) => {
                out.push('<');
                out.push_str(element.tag);
                if !element.class.is_empty() {
                    let _ = write!(out, " class=\"{}\"", escape_text(&element.class));
                }
                if !element.styles.is_empty() {
                    let css = element
                        .styles
                        .iter()
                        .map(|(p, v)| format!("{p}: {v}"))
                        .collect::<Vec<_>>()
                        .join("; ");
                    let _ = write!(out, " style=\"{}\"", escape_text(&css));
                }
                out.push('>');
                if VOID_TAGS.contains(&element.tag) {
                    return;
                }
                for child in &element.children {
                    child.write_html(out);
                }
                let _ = write!(out, "</{}>", element.tag);
            }
        }
    }

    /// Concatenated text content, depth first.
    pub fn text_content(&self) -> String {
        match self {
            Node::Text(value) => value.clone(),
            Node::Element(element) => element
                .children
                .iter()
                .map(Node::text_content)
                .collect::<Vec<_>>()
                .join(""),
        }
    }
}

/// Text and attribute values share one escaper, the same one tera's
/// autoescape uses for the document shell.
pub fn escape_text(value: &str) -> String {
    tera::escape_html(value)
}
