//! Inline elements for zettel content
//!
//! This module defines inline-level elements that appear within blocks,
//! such as text, formatting, links, embeds and endnotes.

use serde::{Deserialize, Serialize};

use crate::attributes::Attributes;
use crate::reference::Reference;

/// Inline-level content element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Inline {
    /// Plain text content
    Text(String),
    /// A single space between words
    Space,
    /// A soft line break
    Soft,
    /// A hard line break
    Hard,
    /// Formatted content (emphasis, strong, ...)
    Format(Format),
    /// A link to a zettel or URL
    Link(Link),
    /// An embedded zettel or image
    Embed(Embed),
    /// An endnote / footnote
    Endnote(Endnote),
    /// A mark that can be used as a link target
    Mark(Mark),
    /// A citation key
    Cite(Cite),
    /// Literal text (code, keyboard input, comments, ...)
    Literal(Literal),
}

/// Formatting kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatKind {
    Emph,
    Strong,
    Insert,
    Delete,
    Super,
    Sub,
    Quote,
    Mark,
    Span,
}

/// Formatted inline content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Format {
    pub kind: FormatKind,
    #[serde(default, skip_serializing_if = "Attributes::is_empty")]
    pub attrs: Attributes,
    pub inlines: Vec<Inline>,
}

/// A hyperlink element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    #[serde(default, skip_serializing_if = "Attributes::is_empty")]
    pub attrs: Attributes,
    /// The link target
    pub reference: Reference,
    /// The link text (empty means: show the reference)
    #[serde(default)]
    pub inlines: Vec<Inline>,
}

/// An embedded object, typically an image zettel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Embed {
    #[serde(default, skip_serializing_if = "Attributes::is_empty")]
    pub attrs: Attributes,
    pub reference: Reference,
    /// Syntax of the embedded object, e.g. `svg` or `png`
    #[serde(default)]
    pub syntax: String,
    /// Alternative text
    #[serde(default)]
    pub inlines: Vec<Inline>,
}

/// An endnote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Endnote {
    #[serde(default, skip_serializing_if = "Attributes::is_empty")]
    pub attrs: Attributes,
    pub inlines: Vec<Inline>,
}

/// A named mark
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mark {
    pub mark: String,
    #[serde(default)]
    pub fragment: String,
    #[serde(default)]
    pub inlines: Vec<Inline>,
}

/// A citation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cite {
    #[serde(default, skip_serializing_if = "Attributes::is_empty")]
    pub attrs: Attributes,
    pub key: String,
    #[serde(default)]
    pub inlines: Vec<Inline>,
}

/// Kinds of literal text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LiteralKind {
    Code,
    Input,
    Output,
    Math,
    Comment,
}

/// Literal inline text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Literal {
    pub kind: LiteralKind,
    #[serde(default, skip_serializing_if = "Attributes::is_empty")]
    pub attrs: Attributes,
    pub content: String,
}

impl Inline {
    /// Plain text inline
    pub fn text(s: impl Into<String>) -> Self {
        Inline::Text(s.into())
    }

    /// Split a string into text and space inlines
    pub fn words(s: &str) -> Vec<Inline> {
        let mut result = Vec::new();
        for (i, word) in s.split_whitespace().enumerate() {
            if i > 0 {
                result.push(Inline::Space);
            }
            result.push(Inline::text(word));
        }
        result
    }

    /// Link with the given reference and text
    pub fn link(reference: Reference, inlines: Vec<Inline>) -> Self {
        Inline::Link(Link {
            attrs: Attributes::new(),
            reference,
            inlines,
        })
    }

    /// Embed with the given reference and syntax
    pub fn embed(reference: Reference, syntax: impl Into<String>) -> Self {
        Inline::Embed(Embed {
            attrs: Attributes::new(),
            reference,
            syntax: syntax.into(),
            inlines: Vec::new(),
        })
    }

    /// Endnote with the given content
    pub fn endnote(inlines: Vec<Inline>) -> Self {
        Inline::Endnote(Endnote {
            attrs: Attributes::new(),
            inlines,
        })
    }
}

/// Plain-text rendering of inline content, as used for HTML `<title>`
pub fn plain_text(inlines: &[Inline]) -> String {
    let mut out = String::new();
    push_plain_text(&mut out, inlines);
    out
}

fn push_plain_text(out: &mut String, inlines: &[Inline]) {
    for inline in inlines {
        match inline {
            Inline::Text(s) => out.push_str(s),
            Inline::Space | Inline::Soft | Inline::Hard => out.push(' '),
            Inline::Format(f) => push_plain_text(out, &f.inlines),
            Inline::Link(l) => push_plain_text(out, &l.inlines),
            Inline::Embed(e) => push_plain_text(out, &e.inlines),
            Inline::Mark(m) => push_plain_text(out, &m.inlines),
            Inline::Cite(c) => out.push_str(&c.key),
            Inline::Literal(l) if l.kind != LiteralKind::Comment => out.push_str(&l.content),
            Inline::Literal(_) | Inline::Endnote(_) => {}
        }
    }
}
