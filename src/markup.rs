//! HTML markup construction module
//!
//! Page content is built as a tree of nodes and serialized to escaped,
//! indented text in one pass. Pages here are tiny, so the serializer
//! favors readable output over throughput.

/// One node of a markup tree: an element or a run of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// An element with a tag name, ordered attributes, and child nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: &'static str,
    attrs: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    #[must_use]
    pub const fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Append an attribute, keeping insertion order.
    #[must_use]
    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attrs.push((name.to_string(), value.to_string()));
        self
    }

    /// Append a child node.
    #[must_use]
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    /// Append a text child.
    #[must_use]
    pub fn text(self, content: &str) -> Self {
        self.child(Node::Text(content.to_string()))
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// Serialize a tree to HTML text.
///
/// Elements whose children are all elements are laid out one child per
/// line with two-space indentation. Anything holding text stays on a
/// single line, so rendered content gains no stray whitespace.
#[must_use]
pub fn serialize(node: &Node) -> String {
    let mut out = String::new();
    write_node(&mut out, node, 0);
    out
}

fn write_node(out: &mut String, node: &Node, depth: usize) {
    match node {
        Node::Text(text) => out.push_str(&escape_text(text)),
        Node::Element(element) => write_element(out, element, depth),
    }
}

fn write_element(out: &mut String, element: &Element, depth: usize) {
    out.push('<');
    out.push_str(element.tag);
    for (name, value) in &element.attrs {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&escape_attr(value));
        out.push('"');
    }
    out.push('>');

    let element_children_only = !element.children.is_empty()
        && element
            .children
            .iter()
            .all(|child| matches!(child, Node::Element(_)));

    if element_children_only {
        for child in &element.children {
            out.push('\n');
            out.push_str(&"  ".repeat(depth + 1));
            write_node(out, child, depth + 1);
        }
        out.push('\n');
        out.push_str(&"  ".repeat(depth));
    } else {
        for child in &element.children {
            write_node(out, child, depth);
        }
    }

    out.push_str("</");
    out.push_str(element.tag);
    out.push('>');
}

/// Escape text content: `&`, `<`, `>`.
fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape attribute values: the text escapes plus both quote characters.
fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
