//! Minimal SVG DOM and serializer

use std::fmt::Write as _;

use glam::DVec2;

/// An SVG element with ordered attributes
#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
    pub name: &'static str,
    pub attrs: Vec<(&'static str, String)>,
    pub children: Vec<SvgNode>,
}

/// A node in the output tree
#[derive(Debug, Clone, PartialEq)]
pub enum SvgNode {
    Element(Tag),
    Text(String),
}

impl Tag {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, key: &'static str, value: impl ToString) -> Self {
        self.attrs.push((key, value.to_string()));
        self
    }

    pub fn child(mut self, node: impl Into<SvgNode>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn children(mut self, nodes: impl IntoIterator<Item = SvgNode>) -> Self {
        self.children.extend(nodes);
        self
    }

    pub fn text(self, content: impl Into<String>) -> Self {
        self.child(SvgNode::Text(content.into()))
    }

    /// Look up an attribute value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }
}

impl From<Tag> for SvgNode {
    fn from(tag: Tag) -> Self {
        SvgNode::Element(tag)
    }
}

impl SvgNode {
    /// Serialize this node and its children on a single line.
    pub fn write_to(&self, out: &mut String) {
        match self {
            SvgNode::Text(s) => out.push_str(&escape_text(s)),
            SvgNode::Element(tag) => {
                out.push('<');
                out.push_str(tag.name);
                for (k, v) in &tag.attrs {
                    // infallible for String
                    let _ = write!(out, " {k}=\"{}\"", escape_attr(v));
                }
                if tag.children.is_empty() {
                    out.push_str(" />");
                    return;
                }
                out.push('>');
                for child in &tag.children {
                    child.write_to(out);
                }
                out.push_str("</");
                out.push_str(tag.name);
                out.push('>');
            }
        }
    }

    pub fn to_svg_string(&self) -> String {
        let mut out = String::new();
        self.write_to(&mut out);
        out
    }
}

/// Serialize a document: the root's open tag, then one top-level child per line.
pub fn write_document(root: &Tag, xml_declaration: bool) -> String {
    let mut out = String::new();
    if xml_declaration {
        out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    }
    out.push('<');
    out.push_str(root.name);
    for (k, v) in &root.attrs {
        let _ = write!(out, " {k}=\"{}\"", escape_attr(v));
    }
    out.push_str(">\n");
    for child in &root.children {
        child.write_to(&mut out);
        out.push('\n');
    }
    out.push_str("</");
    out.push_str(root.name);
    out.push('>');
    out
}

pub fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            c => out.push(c),
        }
    }
    out
}

pub fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            c => out.push(c),
        }
    }
    out
}

/// Fixed number of decimals. Negative zero prints without a sign.
pub fn fmt_num(value: f64, precision: usize) -> String {
    let s = format!("{value:.precision$}");
    match s.strip_prefix('-') {
        Some(rest) if rest.bytes().all(|b| b == b'0' || b == b'.') => rest.to_string(),
        _ => s,
    }
}

/// Up to six decimals, trailing zeros trimmed.
pub fn fmt_trim(value: f64) -> String {
    let s = fmt_num(value, 6);
    if !s.contains('.') {
        return s;
    }
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

/// `M x,y L x,y ...` path data, or `None` for an empty path.
pub fn path_data(points: &[DVec2], precision: usize) -> Option<String> {
    let (first, rest) = points.split_first()?;
    let mut d = format!(
        "M {},{}",
        fmt_num(first.x, precision),
        fmt_num(first.y, precision)
    );
    for p in rest {
        let _ = write!(
            d,
            " L {},{}",
            fmt_num(p.x, precision),
            fmt_num(p.y, precision)
        );
    }
    Some(d)
}
