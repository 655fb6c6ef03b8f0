//! Render context shared by all rules of one transformation

use zetteldeck_ast::ZettelId;

use crate::chain::{SlideChain, SlideIdx};
use crate::html::{Element, Node};
use crate::slide::SlideRole;
use crate::slideset::{Image, SlideSet};

/// Link and image handling of a rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderFlags {
    /// Link zettel outside the slide set as `/<id>`
    pub ext_zettel_links: bool,
    /// Inline cached raster images as `data:` URIs
    pub embed_images: bool,
}

impl RenderFlags {
    pub const SHOW: Self = Self::new(true, false);
    pub const HANDOUT: Self = Self::new(false, true);
    pub const FLAT: Self = Self::new(true, false);
    pub const TOC: Self = Self::new(false, false);

    pub const fn new(ext_zettel_links: bool, embed_images: bool) -> Self {
        Self {
            ext_zettel_links,
            embed_images,
        }
    }
}

#[derive(Debug, Clone)]
struct PendingEndnote {
    label: String,
    content: Vec<Node>,
}

/// State visible to rules
#[derive(Debug)]
pub struct RenderContext<'s> {
    pub role: Option<SlideRole>,
    pub flags: RenderFlags,
    slides: Option<&'s SlideSet>,
    chain: Option<&'s SlideChain>,
    current: Option<SlideIdx>,
    unique: String,
    endnotes: Vec<PendingEndnote>,
    pub(crate) document_start: bool,
}

impl<'s> RenderContext<'s> {
    pub fn new(slides: Option<&'s SlideSet>, role: Option<SlideRole>, flags: RenderFlags) -> Self {
        Self {
            role,
            flags,
            slides,
            chain: None,
            current: None,
            unique: String::new(),
            endnotes: Vec::new(),
            document_start: false,
        }
    }

    pub(crate) fn set_current_slide(&mut self, chain: &'s SlideChain, idx: SlideIdx) {
        self.chain = Some(chain);
        self.current = Some(idx);
    }

    pub(crate) fn set_unique(&mut self, prefix: impl Into<String>) {
        self.unique = prefix.into();
    }

    /// Prefix making generated ids unique within a page
    pub fn unique(&self) -> &str {
        &self.unique
    }

    /// Whether the node being evaluated is the first of a whole document
    pub fn at_document_start(&self) -> bool {
        self.document_start
    }

    /// Document number of the occurrence of `id` nearest to the current slide
    pub fn find_number(&self, id: ZettelId) -> Option<usize> {
        let chain = self.chain?;
        let found = chain.find(self.current?, id)?;
        Some(chain[found].number)
    }

    /// Cached image of the slide set
    pub fn image(&self, id: ZettelId) -> Option<&'s Image> {
        self.slides?.get_image(id)
    }

    /// Collect an endnote, returning its number and label
    pub(crate) fn push_endnote(&mut self, content: Vec<Node>) -> (usize, String) {
        let number = self.endnotes.len() + 1;
        let label = format!("{}{}", self.unique, number);
        self.endnotes.push(PendingEndnote {
            label: label.clone(),
            content,
        });
        (number, label)
    }

    /// Render and forget all collected endnotes
    pub(crate) fn drain_endnotes(&mut self) -> Option<Node> {
        if self.endnotes.is_empty() {
            return None;
        }
        let mut list = Element::new("ol").with_class("zs-endnotes");
        for (i, note) in self.endnotes.drain(..).enumerate() {
            let backref = Element::new("a")
                .with_class("zs-endnote-backref")
                .with_attr("href", format!("#fnref:{}", note.label))
                .with_attr("role", "doc-backlink")
                .with_child(Node::text("\u{21a9}\u{fe0e}"));
            let item = Element::new("li")
                .with_attr("id", format!("fn:{}", note.label))
                .with_class("zs-endnote")
                .with_attr("value", (i + 1).to_string())
                .with_children(note.content)
                .with_child(Node::text(" "))
                .with_child(backref);
            list.push(item);
        }
        Some(list.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html::to_html;

    #[test]
    fn test_flags() {
        assert!(RenderFlags::SHOW.ext_zettel_links);
        assert!(!RenderFlags::SHOW.embed_images);
        assert!(RenderFlags::HANDOUT.embed_images);
        assert_eq!(RenderFlags::TOC, RenderFlags::new(false, false));
    }

    #[test]
    fn test_endnotes_drain_and_reset() {
        let mut ctx = RenderContext::new(None, None, RenderFlags::FLAT);
        ctx.set_unique("3:");
        assert_eq!(ctx.push_endnote(vec![Node::text("a")]), (1, "3:1".to_string()));
        assert_eq!(ctx.push_endnote(vec![Node::text("b")]).0, 2);

        let html = to_html(&[ctx.drain_endnotes().unwrap()]);
        assert!(html.starts_with("<ol class=\"zs-endnotes\"><li id=\"fn:3:1\""));
        assert!(html.contains("href=\"#fnref:3:2\""));
        assert!(ctx.drain_endnotes().is_none());
        assert_eq!(ctx.push_endnote(Vec::new()).0, 1);
    }

    #[test]
    fn test_find_without_current_slide() {
        let ctx = RenderContext::new(None, None, RenderFlags::SHOW);
        assert_eq!(ctx.find_number(ZettelId::DEFAULT_HOME), None);
        assert!(ctx.image(ZettelId::DEFAULT_HOME).is_none());
    }
}
