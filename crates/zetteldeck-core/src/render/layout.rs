//! Building blocks shared by all pages

use chrono::NaiveDateTime;
use zetteldeck_ast::{plain_text, Inline};

use crate::html::{Element, HtmlWriter, Node};

/// How publication times are shown
pub const DISPLAY_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Style rules included in every page
pub const DEFAULT_CSS: &[&str] = &[
    "td.left, .reveal td.left,",
    "th.left { text-align: left }",
    "td.center, .reveal td.center,",
    "th.center { text-align: center }",
    "td.right, .reveal td.right,",
    "th.right { text-align: right }",
    "ol.zs-endnotes { padding-top: .5rem; border-top: 1px solid; font-size: smaller; margin-left: 2em; }",
    r#"a.external::after { content: "➚"; display: inline-block }"#,
    r#"a.zettel::after { content: "⤳"; display: inline-block }"#,
    "a.broken { text-decoration: line-through }",
    ".reveal blockquote { font-style: normal }",
    "p.updated { font-size: smaller }",
];

/// Link text pointing to the source of a page
pub(crate) const SOURCE_MARK: &str = "\u{266e}";

/// `head` with charset, viewport and generator
pub(crate) fn html_head() -> Element {
    Element::new("head")
        .with_child(Element::new("meta").with_attr("charset", "utf-8"))
        .with_child(
            Element::new("meta").with_attr("name", "viewport").with_attr(
                "content",
                "width=device-width, initial-scale=1.0, maximum-scale=1.0, user-scalable=no",
            ),
        )
        .with_child(
            Element::new("meta")
                .with_attr("name", "generator")
                .with_attr("content", "zetteldeck"),
        )
}

pub(crate) fn title_element(title: Option<&[Inline]>) -> Node {
    let text = title.map(plain_text).unwrap_or_default();
    Node::element("title", vec![Node::text(text)])
}

/// `style` with the default rules followed by `extra_css`
pub(crate) fn prefixed_css(extra_css: &str) -> Node {
    let mut style = Element::new("style");
    for line in DEFAULT_CSS {
        style.push(Node::raw(format!("{line}\n")));
    }
    if !extra_css.is_empty() {
        style.push(Node::raw(extra_css));
    }
    style.into()
}

pub(crate) fn simple_link(url: impl Into<String>, children: Vec<Node>) -> Node {
    Element::new("a")
        .with_attr("href", url)
        .with_children(children)
        .into()
}

pub(crate) fn simple_meta(name: &str, content: &str) -> Node {
    Element::new("meta")
        .with_attr("name", name)
        .with_attr("content", content)
        .into()
}

pub(crate) fn head_link(rel: &str, href: &str) -> Node {
    Element::new("link")
        .with_attr("rel", rel)
        .with_attr("href", href)
        .into()
}

pub(crate) fn js_file_script(src: &str) -> Node {
    Element::new("script").with_attr("src", src).into()
}

pub(crate) fn js_script(code: &str) -> Node {
    Node::element("script", vec![Node::raw(code)])
}

pub(crate) fn published_text(ts: NaiveDateTime) -> String {
    ts.format(DISPLAY_TIME_FORMAT).to_string()
}

/// Link to the source of a zettel, opened in a new window
pub(crate) fn source_link(url: String) -> Node {
    let a = Element::new("a")
        .with_attr("href", url)
        .with_attr("target", "_blank")
        .with_child(Node::text(SOURCE_MARK));
    Node::element("p", vec![a.into()])
}

pub(crate) fn write_document(lang: &str, head: Element, body: Element) -> String {
    HtmlWriter::new().write_document(lang, head, body)
}
