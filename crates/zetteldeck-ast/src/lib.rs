//! zetteldeck-ast - Zettel content tree definitions
//!
//! This crate provides the types used by zetteldeck for representing
//! evaluated zettel: identifiers, metadata, and the block/inline tree a
//! content store delivers after parsing zettel markup.

pub mod attributes;
pub mod block;
pub mod id;
pub mod inline;
pub mod meta;
pub mod reference;
pub mod walk;
pub mod zettel;

pub use attributes::Attributes;
pub use block::{
    Alignment, Block, Cell, Description, Heading, List, ListKind, Region, RegionKind, Table,
    Verbatim, VerbatimKind,
};
pub use id::{IdError, ZettelId};
pub use inline::{
    plain_text, Cite, Embed, Endnote, Format, FormatKind, Inline, Link, Literal, LiteralKind, Mark,
};
pub use meta::Meta;
pub use reference::{RefState, Reference};
pub use walk::{walk_blocks, walk_inlines, Visitor};
pub use zettel::Zettel;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert_eq!(VERSION, "0.1.0");
    }
}
