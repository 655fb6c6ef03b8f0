//! Read-only traversal of zettel content
//!
//! [`walk_blocks`] visits every block and every inline node in document
//! order, descending into nested blocks, link texts, embeds and endnotes.
//! Leaf text and whitespace nodes are not reported.

use crate::block::Block;
use crate::inline::Inline;

/// Callbacks invoked during a walk
pub trait Visitor {
    /// Called before the children of a block are visited
    fn visit_block(&mut self, _block: &Block) {}

    /// Called before the children of a non-leaf inline are visited
    fn visit_inline(&mut self, _inline: &Inline) {}
}

/// Visit all blocks and their descendants
pub fn walk_blocks<V: Visitor + ?Sized>(visitor: &mut V, blocks: &[Block]) {
    for block in blocks {
        walk_block(visitor, block);
    }
}

fn walk_block<V: Visitor + ?Sized>(visitor: &mut V, block: &Block) {
    visitor.visit_block(block);
    match block {
        Block::Paragraph(inlines) => walk_inlines(visitor, inlines),
        Block::Heading(h) => walk_inlines(visitor, &h.inlines),
        Block::ThematicBreak(_) | Block::Verbatim(_) => {}
        Block::List(list) => {
            for item in &list.items {
                walk_blocks(visitor, item);
            }
        }
        Block::Description(terms) => {
            for term in terms {
                walk_inlines(visitor, &term.term);
                for description in &term.descriptions {
                    walk_blocks(visitor, description);
                }
            }
        }
        Block::Region(region) => {
            walk_blocks(visitor, &region.blocks);
            walk_inlines(visitor, &region.inlines);
        }
        Block::Table(table) => {
            for cell in table.header.iter().chain(table.rows.iter().flatten()) {
                walk_inlines(visitor, &cell.inlines);
            }
        }
    }
}

/// Visit all non-leaf inlines and their descendants
pub fn walk_inlines<V: Visitor + ?Sized>(visitor: &mut V, inlines: &[Inline]) {
    for inline in inlines {
        let children = match inline {
            Inline::Text(_) | Inline::Space | Inline::Soft | Inline::Hard => continue,
            Inline::Literal(_) => None,
            Inline::Format(f) => Some(&f.inlines),
            Inline::Link(l) => Some(&l.inlines),
            Inline::Embed(e) => Some(&e.inlines),
            Inline::Endnote(n) => Some(&n.inlines),
            Inline::Mark(m) => Some(&m.inlines),
            Inline::Cite(c) => Some(&c.inlines),
        };
        visitor.visit_inline(inline);
        if let Some(children) = children {
            walk_inlines(visitor, children);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::ZettelId;
    use crate::reference::Reference;

    #[derive(Default)]
    struct LinkCounter {
        links: usize,
        blocks: usize,
    }

    impl Visitor for LinkCounter {
        fn visit_block(&mut self, _block: &Block) {
            self.blocks += 1;
        }

        fn visit_inline(&mut self, inline: &Inline) {
            if matches!(inline, Inline::Link(_)) {
                self.links += 1;
            }
        }
    }

    #[test]
    fn test_walk_finds_nested_links() {
        let link = Inline::link(Reference::zettel(ZettelId::DEFAULT_HOME), vec![]);
        let content = vec![
            Block::Paragraph(vec![Inline::text("a"), link.clone()]),
            Block::region(
                "show",
                vec![Block::Paragraph(vec![Inline::endnote(vec![link])])],
            ),
        ];
        let mut counter = LinkCounter::default();
        walk_blocks(&mut counter, &content);
        assert_eq!(counter.links, 2);
        assert_eq!(counter.blocks, 3);
    }
}
