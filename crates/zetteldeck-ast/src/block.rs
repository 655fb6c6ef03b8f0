//! Block-level elements for zettel content
//!
//! This module defines block-level elements that form the zettel structure,
//! such as paragraphs, headings, lists, regions and verbatim blocks.

use serde::{Deserialize, Serialize};

use crate::attributes::Attributes;
use crate::inline::Inline;

/// Block-level content element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Block {
    /// A paragraph of inline content
    Paragraph(Vec<Inline>),
    /// A section heading
    Heading(Heading),
    /// A horizontal rule
    ThematicBreak(Attributes),
    /// An ordered, unordered or quotation list
    List(List),
    /// A description list
    Description(Vec<Description>),
    /// A region of nested blocks (plain, quotation or verse)
    Region(Region),
    /// A verbatim block (code, comment, math, ...)
    Verbatim(Verbatim),
    /// A table
    Table(Table),
}

/// A section heading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heading {
    /// Heading level (1-5, where 1 is the highest)
    pub level: u8,
    #[serde(default, skip_serializing_if = "Attributes::is_empty")]
    pub attrs: Attributes,
    /// Fragment identifier for cross-references
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub fragment: String,
    /// Heading text content
    pub inlines: Vec<Inline>,
}

/// List kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListKind {
    Ordered,
    Unordered,
    Quote,
}

/// A list; every item is a sequence of blocks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct List {
    pub kind: ListKind,
    #[serde(default, skip_serializing_if = "Attributes::is_empty")]
    pub attrs: Attributes,
    pub items: Vec<Vec<Block>>,
}

/// A term of a description list with its descriptions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Description {
    pub term: Vec<Inline>,
    #[serde(default)]
    pub descriptions: Vec<Vec<Block>>,
}

/// Region kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegionKind {
    Block,
    Quote,
    Verse,
}

/// A region of nested blocks.
///
/// The generic attribute of a plain region selects presenter behaviour,
/// e.g. `:::show` marks speaker notes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub kind: RegionKind,
    #[serde(default, skip_serializing_if = "Attributes::is_empty")]
    pub attrs: Attributes,
    pub blocks: Vec<Block>,
    /// Citation / trailing inline content
    #[serde(default)]
    pub inlines: Vec<Inline>,
}

/// Verbatim kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerbatimKind {
    Code,
    Eval,
    Math,
    Comment,
    Html,
}

/// A verbatim block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verbatim {
    pub kind: VerbatimKind,
    #[serde(default, skip_serializing_if = "Attributes::is_empty")]
    pub attrs: Attributes,
    pub content: String,
}

/// Cell alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    #[default]
    Default,
    Left,
    Center,
    Right,
}

/// A table cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    #[serde(default)]
    pub align: Alignment,
    pub inlines: Vec<Inline>,
}

/// A table with an optional header row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    #[serde(default)]
    pub header: Vec<Cell>,
    pub rows: Vec<Vec<Cell>>,
}

impl Block {
    /// Paragraph of whitespace-separated words
    pub fn paragraph(text: &str) -> Self {
        Block::Paragraph(Inline::words(text))
    }

    /// Heading of the given level with plain text
    pub fn heading(level: u8, text: &str) -> Self {
        Block::Heading(Heading {
            level,
            attrs: Attributes::new(),
            fragment: String::new(),
            inlines: Inline::words(text),
        })
    }

    /// Thematic break carrying the default attribute, i.e. a slide break
    pub fn slide_break() -> Self {
        Block::ThematicBreak(Attributes::with_default())
    }

    /// Plain region with the given generic attribute
    pub fn region(kind: &str, blocks: Vec<Block>) -> Self {
        Block::Region(Region {
            kind: RegionKind::Block,
            attrs: Attributes::generic(kind),
            blocks,
            inlines: Vec::new(),
        })
    }

    /// Level-1 heading text, if this block is one
    pub fn as_level1_heading(&self) -> Option<&Heading> {
        match self {
            Block::Heading(h) if h.level == 1 => Some(h),
            _ => None,
        }
    }

    /// Check for a thematic break with the default attribute
    pub fn is_slide_break(&self) -> bool {
        matches!(self, Block::ThematicBreak(attrs) if attrs.has_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_levels() {
        let h1 = Block::heading(1, "Title");
        assert!(h1.as_level1_heading().is_some());
        assert!(Block::heading(2, "Sub").as_level1_heading().is_none());
    }

    #[test]
    fn test_slide_break_needs_default_attribute() {
        assert!(Block::slide_break().is_slide_break());
        assert!(!Block::ThematicBreak(Attributes::new()).is_slide_break());
        assert!(!Block::paragraph("text").is_slide_break());
    }

    #[test]
    fn test_block_json_roundtrip() {
        let block = Block::region("show", vec![Block::paragraph("speaker note")]);
        let json = serde_json::to_string(&block).unwrap();
        let back: Block = serde_json::from_str(&json).unwrap();
        assert_eq!(back, block);
    }
}
