//! Zettel content to HTML transformation
//!
//! A [`Transformer`] evaluates block and inline nodes through a
//! [`RuleTable`]. The presenter rules installed by default hide or convert
//! role-specific notes, drop a leading title heading, resolve zettel links
//! within the current slide chain and handle embedded images.
//!
//! # Example
//!
//! ```
//! use zetteldeck_ast::Block;
//! use zetteldeck_core::html::to_html;
//! use zetteldeck_core::transform::{RenderFlags, Transformer};
//!
//! let mut tr = Transformer::new(None, None, RenderFlags::FLAT);
//! let nodes = tr.transform_document(&[Block::heading(1, "Title"), Block::paragraph("Text")]);
//! assert_eq!(to_html(&nodes), "<p>Text</p>\n");
//! ```

mod context;
mod defaults;
mod overrides;
mod rules;

pub use context::{RenderContext, RenderFlags};
pub use rules::{Eval, Next, NodeKind, NodeRef, Rule, RuleTable};

use zetteldeck_ast::{Block, Inline};

use crate::chain::{SlideChain, SlideIdx};
use crate::html::Node;
use crate::slide::SlideRole;
use crate::slideset::SlideSet;

/// Rule-driven transformer with the presenter rules installed
pub struct Transformer<'s> {
    rules: RuleTable,
    ctx: RenderContext<'s>,
}

impl<'s> Transformer<'s> {
    /// Create a transformer.
    ///
    /// `slides` provides cached images, `role` selects which notes are
    /// shown. Without a role, all tagged regions render as plain content.
    pub fn new(slides: Option<&'s SlideSet>, role: Option<SlideRole>, flags: RenderFlags) -> Self {
        let mut rules = RuleTable::new();
        overrides::install(&mut rules);
        Self {
            rules,
            ctx: RenderContext::new(slides, role, flags),
        }
    }

    /// Layer another rule over the installed ones
    pub fn add_rule<F>(&mut self, kind: NodeKind, rule: F)
    where
        F: Fn(&mut Eval<'_, '_>, NodeRef<'_>, Next<'_>) -> Vec<Node> + 'static,
    {
        self.rules.add(kind, rule);
    }

    /// Slide whose chain resolves zettel links
    pub fn set_current_slide(&mut self, chain: &'s SlideChain, idx: SlideIdx) {
        self.ctx.set_current_slide(chain, idx);
    }

    /// Prefix for generated ids, e.g. endnote anchors
    pub fn set_unique(&mut self, prefix: impl Into<String>) {
        self.ctx.set_unique(prefix);
    }

    fn eval(&mut self) -> Eval<'_, 's> {
        Eval::new(&self.rules, &mut self.ctx)
    }

    pub fn transform_block(&mut self, block: &Block) -> Vec<Node> {
        self.eval().eval_block(block)
    }

    pub fn transform_blocks(&mut self, blocks: &[Block]) -> Vec<Node> {
        self.eval().eval_blocks(blocks)
    }

    /// Transform the content of a whole document.
    ///
    /// A level-1 heading or slide break at the very start is dropped, as the
    /// page already shows the title.
    pub fn transform_document(&mut self, blocks: &[Block]) -> Vec<Node> {
        let mut eval = self.eval();
        let mut out = Vec::new();
        for (i, block) in blocks.iter().enumerate() {
            eval.ctx.document_start = i == 0;
            out.extend(eval.eval_block(block));
        }
        eval.ctx.document_start = false;
        out
    }

    pub fn transform_inlines(&mut self, inlines: &[Inline]) -> Vec<Node> {
        self.eval().eval_inlines(inlines)
    }

    /// Endnotes collected so far, as an ordered list; clears the collection
    pub fn endnotes(&mut self) -> Option<Node> {
        self.ctx.drain_endnotes()
    }
}
