//! Rule table and evaluation
//!
//! Every node kind has a default rule. Further rules can be layered on top:
//! the newest rule for a kind runs first and may hand the node on to the
//! rule it replaced through [`Next`].

use std::collections::HashMap;

use zetteldeck_ast::{Block, Inline};

use super::context::RenderContext;
use super::defaults::default_rule;
use crate::html::Node;

/// Node kinds rules are registered for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Paragraph,
    Heading,
    ThematicBreak,
    List,
    Description,
    Region,
    Verbatim,
    Table,
    Text,
    Space,
    Soft,
    Hard,
    Format,
    Link,
    Embed,
    Endnote,
    Mark,
    Cite,
    Literal,
}

/// Borrowed node of the input tree
#[derive(Debug, Clone, Copy)]
pub enum NodeRef<'a> {
    Block(&'a Block),
    Inline(&'a Inline),
}

impl NodeRef<'_> {
    pub fn kind(&self) -> NodeKind {
        match self {
            NodeRef::Block(block) => match block {
                Block::Paragraph(_) => NodeKind::Paragraph,
                Block::Heading(_) => NodeKind::Heading,
                Block::ThematicBreak(_) => NodeKind::ThematicBreak,
                Block::List(_) => NodeKind::List,
                Block::Description(_) => NodeKind::Description,
                Block::Region(_) => NodeKind::Region,
                Block::Verbatim(_) => NodeKind::Verbatim,
                Block::Table(_) => NodeKind::Table,
            },
            NodeRef::Inline(inline) => match inline {
                Inline::Text(_) => NodeKind::Text,
                Inline::Space => NodeKind::Space,
                Inline::Soft => NodeKind::Soft,
                Inline::Hard => NodeKind::Hard,
                Inline::Format(_) => NodeKind::Format,
                Inline::Link(_) => NodeKind::Link,
                Inline::Embed(_) => NodeKind::Embed,
                Inline::Endnote(_) => NodeKind::Endnote,
                Inline::Mark(_) => NodeKind::Mark,
                Inline::Cite(_) => NodeKind::Cite,
                Inline::Literal(_) => NodeKind::Literal,
            },
        }
    }
}

/// A transformation rule
pub type Rule = Box<dyn Fn(&mut Eval<'_, '_>, NodeRef<'_>, Next<'_>) -> Vec<Node>>;

/// Registered rules per node kind, oldest first
#[derive(Default)]
pub struct RuleTable {
    rules: HashMap<NodeKind, Vec<Rule>>,
}

impl RuleTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a rule that runs before all rules registered so far
    pub fn add<F>(&mut self, kind: NodeKind, rule: F)
    where
        F: Fn(&mut Eval<'_, '_>, NodeRef<'_>, Next<'_>) -> Vec<Node> + 'static,
    {
        self.rules.entry(kind).or_default().push(Box::new(rule));
    }

    fn handlers(&self, kind: NodeKind) -> &[Rule] {
        self.rules.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// The rules a rule replaced, ending in the default rule
#[derive(Clone, Copy)]
pub struct Next<'r> {
    older: &'r [Rule],
}

impl Next<'_> {
    /// Evaluate `node` with the replaced rule
    pub fn run(self, eval: &mut Eval<'_, '_>, node: NodeRef<'_>) -> Vec<Node> {
        match self.older.split_last() {
            Some((rule, older)) => rule(eval, node, Next { older }),
            None => default_rule(eval, node),
        }
    }
}

/// Evaluation state handed to every rule
pub struct Eval<'e, 's> {
    rules: &'e RuleTable,
    pub ctx: &'e mut RenderContext<'s>,
}

impl<'e, 's> Eval<'e, 's> {
    pub(crate) fn new(rules: &'e RuleTable, ctx: &'e mut RenderContext<'s>) -> Self {
        Self { rules, ctx }
    }

    /// Evaluate a node with the newest rule of its kind
    pub fn eval(&mut self, node: NodeRef<'_>) -> Vec<Node> {
        let rules = self.rules;
        Next {
            older: rules.handlers(node.kind()),
        }
        .run(self, node)
    }

    pub fn eval_block(&mut self, block: &Block) -> Vec<Node> {
        self.eval(NodeRef::Block(block))
    }

    /// Evaluate nested blocks; they never count as the start of a document
    pub fn eval_blocks(&mut self, blocks: &[Block]) -> Vec<Node> {
        let saved = std::mem::replace(&mut self.ctx.document_start, false);
        let mut out = Vec::new();
        for block in blocks {
            out.extend(self.eval_block(block));
        }
        self.ctx.document_start = saved;
        out
    }

    pub fn eval_inline(&mut self, inline: &Inline) -> Vec<Node> {
        self.eval(NodeRef::Inline(inline))
    }

    pub fn eval_inlines(&mut self, inlines: &[Inline]) -> Vec<Node> {
        let mut out = Vec::new();
        for inline in inlines {
            out.extend(self.eval_inline(inline));
        }
        out
    }
}
