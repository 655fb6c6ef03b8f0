//! HTML serializer
//!
//! Writes an output tree as HTML5 text. Text and attribute values are
//! escaped, [`Node::Raw`] content is written as is. A newline follows every
//! block-level element so the output stays diffable.

use std::fmt::Write;

use super::node::{Element, Node};

/// Elements that never have content or an end tag
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Elements followed by a newline
const BLOCK_ELEMENTS: &[&str] = &[
    "article", "aside", "blockquote", "body", "dd", "div", "dl", "dt", "figure", "footer", "h1",
    "h2", "h3", "h4", "h5", "h6", "head", "header", "hgroup", "hr", "html", "li", "link", "meta",
    "ol", "p", "pre", "script", "section", "style", "table", "tbody", "thead", "title", "tr",
    "ul",
];

/// HTML serializer
#[derive(Debug, Default)]
pub struct HtmlWriter {
    output: String,
}

impl HtmlWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serialize a complete document: doctype plus `html` element
    pub fn write_document(mut self, lang: &str, head: Element, body: Element) -> String {
        let mut html = Element::new("html");
        if !lang.is_empty() {
            html.set_attr("lang", lang);
        }
        html.push(head);
        html.push(body);

        self.output.push_str("<!DOCTYPE html>\n");
        self.write_element(&html);
        self.output
    }

    /// Serialize a fragment
    pub fn write_nodes(mut self, nodes: &[Node]) -> String {
        for node in nodes {
            self.write_node(node);
        }
        self.output
    }

    fn write_node(&mut self, node: &Node) {
        match node {
            Node::Element(element) => self.write_element(element),
            Node::Text(text) => escape_into(&mut self.output, text, false),
            Node::Raw(raw) => self.output.push_str(raw),
            Node::Comment(text) => {
                // "--" must not occur inside a comment
                let _ = write!(self.output, "<!-- {} -->", text.replace("--", "- -"));
            }
        }
    }

    fn write_element(&mut self, element: &Element) {
        let tag = element.tag.as_str();
        self.output.push('<');
        self.output.push_str(tag);
        for (name, value) in &element.attrs {
            self.output.push(' ');
            self.output.push_str(name);
            self.output.push_str("=\"");
            escape_into(&mut self.output, value, true);
            self.output.push('"');
        }
        self.output.push('>');

        if !VOID_ELEMENTS.contains(&tag) {
            for child in &element.children {
                self.write_node(child);
            }
            let _ = write!(self.output, "</{}>", tag);
        }
        if BLOCK_ELEMENTS.contains(&tag) {
            self.output.push('\n');
        }
    }
}

/// Serialize a fragment to a string
pub fn to_html(nodes: &[Node]) -> String {
    HtmlWriter::new().write_nodes(nodes)
}

fn escape_into(out: &mut String, s: &str, in_attr: bool) {
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if in_attr => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escaping() {
        let node = Element::new("a")
            .with_attr("title", "say \"hi\" & <go>")
            .with_child(Node::text("1 < 2 & \"q\""));
        assert_eq!(
            to_html(&[node.into()]),
            r#"<a title="say &quot;hi&quot; &amp; &lt;go&gt;">1 &lt; 2 &amp; "q"</a>"#
        );
    }

    #[test]
    fn test_void_and_block_elements() {
        let nodes = vec![
            Node::element("p", vec![Node::text("a"), Node::element("br", vec![])]),
            Element::new("img").with_attr("src", "x.png").into(),
        ];
        assert_eq!(to_html(&nodes), "<p>a<br></p>\n<img src=\"x.png\">");
    }

    #[test]
    fn test_raw_is_not_escaped() {
        let nodes = vec![Node::raw("<svg></svg>"), Node::Comment("a--b".to_string())];
        assert_eq!(to_html(&nodes), "<svg></svg><!-- a- -b -->");
    }

    #[test]
    fn test_document() {
        let head = Element::new("head").with_child(Node::element("title", vec![Node::text("T")]));
        let body = Element::new("body");
        let html = HtmlWriter::new().write_document("en", head, body);
        assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"en\"><head><title>T</title>\n"));
        assert!(html.ends_with("<body></body>\n</html>\n"));
    }
}
