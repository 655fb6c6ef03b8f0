//! Default rules: plain HTML for every node kind

use zetteldeck_ast::{
    plain_text, Alignment, Attributes, Block, Cell, FormatKind, Inline, ListKind, LiteralKind,
    RefState, RegionKind, VerbatimKind,
};

use super::rules::{Eval, NodeRef};
use crate::html::{Element, Node};

pub(crate) fn default_rule(eval: &mut Eval<'_, '_>, node: NodeRef<'_>) -> Vec<Node> {
    match node {
        NodeRef::Block(block) => default_block(eval, block),
        NodeRef::Inline(inline) => default_inline(eval, inline),
    }
}

fn default_block(eval: &mut Eval<'_, '_>, block: &Block) -> Vec<Node> {
    let node: Node = match block {
        Block::Paragraph(inlines) => Node::element("p", eval.eval_inlines(inlines)),
        Block::Heading(heading) => {
            let level = heading.level.clamp(1, 5) + 1;
            let mut h = Element::new(format!("h{level}"));
            if !heading.fragment.is_empty() {
                h.set_attr("id", format!("{}{}", eval.ctx.unique(), heading.fragment));
            }
            h.with_children(eval.eval_inlines(&heading.inlines)).into()
        }
        Block::ThematicBreak(_) => Node::element("hr", Vec::new()),
        Block::List(list) => {
            let tag = match list.kind {
                ListKind::Ordered => "ol",
                ListKind::Unordered => "ul",
                ListKind::Quote => "blockquote",
            };
            let mut el = with_class_attr(Element::new(tag), &list.attrs);
            for item in &list.items {
                if list.kind == ListKind::Quote {
                    el.extend(eval.eval_blocks(item));
                } else {
                    el.push(Node::element("li", compact_item(eval, item)));
                }
            }
            el.into()
        }
        Block::Description(entries) => {
            let mut dl = Element::new("dl");
            for entry in entries {
                dl.push(Node::element("dt", eval.eval_inlines(&entry.term)));
                for description in &entry.descriptions {
                    dl.push(Node::element("dd", compact_item(eval, description)));
                }
            }
            dl.into()
        }
        Block::Region(region) => {
            let el = match region.kind {
                RegionKind::Block => Element::new("div"),
                RegionKind::Quote => Element::new("blockquote"),
                RegionKind::Verse => Element::new("div").with_class("zs-verse"),
            };
            let mut el = with_class_attr(el, &region.attrs);
            el.extend(eval.eval_blocks(&region.blocks));
            if !region.inlines.is_empty() {
                el.push(Node::element("cite", eval.eval_inlines(&region.inlines)));
            }
            el.into()
        }
        Block::Verbatim(verbatim) => match verbatim.kind {
            VerbatimKind::Html => Node::raw(verbatim.content.clone()),
            VerbatimKind::Comment => Node::Comment(verbatim.content.clone()),
            kind => {
                let mut code = Element::new("code");
                match (kind, verbatim.attrs.generic_value()) {
                    (VerbatimKind::Eval, _) => code.set_attr("class", "zs-eval"),
                    (VerbatimKind::Math, _) => code.set_attr("class", "zs-math"),
                    (_, Some(lang)) => code.set_attr("class", format!("language-{lang}")),
                    _ => {}
                }
                let code = code.with_child(Node::text(verbatim.content.clone()));
                Node::element("pre", vec![code.into()])
            }
        },
        Block::Table(table) => {
            let mut el = Element::new("table");
            if !table.header.is_empty() {
                let row = table_row(eval, &table.header, "th");
                el.push(Node::element("thead", vec![row]));
            }
            let rows = table
                .rows
                .iter()
                .map(|row| table_row(eval, row, "td"))
                .collect();
            el.push(Node::element("tbody", rows));
            el.into()
        }
    };
    vec![node]
}

/// List items holding a single paragraph render without the `p`
fn compact_item(eval: &mut Eval<'_, '_>, item: &[Block]) -> Vec<Node> {
    match item {
        [Block::Paragraph(inlines)] => eval.eval_inlines(inlines),
        _ => eval.eval_blocks(item),
    }
}

fn table_row(eval: &mut Eval<'_, '_>, cells: &[Cell], tag: &str) -> Node {
    let cells = cells
        .iter()
        .map(|cell| {
            let mut el = Element::new(tag);
            match cell.align {
                Alignment::Left => el.set_attr("class", "left"),
                Alignment::Center => el.set_attr("class", "center"),
                Alignment::Right => el.set_attr("class", "right"),
                Alignment::Default => {}
            }
            el.with_children(eval.eval_inlines(&cell.inlines)).into()
        })
        .collect();
    Node::element("tr", cells)
}

/// Use the generic attribute value as class name
fn with_class_attr(el: Element, attrs: &Attributes) -> Element {
    match attrs.generic_value() {
        Some(class) => el.with_class(class),
        None => el,
    }
}

fn default_inline(eval: &mut Eval<'_, '_>, inline: &Inline) -> Vec<Node> {
    let node: Node = match inline {
        Inline::Text(text) => Node::text(text.clone()),
        Inline::Space | Inline::Soft => Node::text(" "),
        Inline::Hard => Node::element("br", Vec::new()),
        Inline::Format(format) => {
            let tag = match format.kind {
                FormatKind::Emph => "em",
                FormatKind::Strong => "strong",
                FormatKind::Insert => "ins",
                FormatKind::Delete => "del",
                FormatKind::Super => "sup",
                FormatKind::Sub => "sub",
                FormatKind::Quote => "q",
                FormatKind::Mark => "mark",
                FormatKind::Span => "span",
            };
            with_class_attr(Element::new(tag), &format.attrs)
                .with_children(eval.eval_inlines(&format.inlines))
                .into()
        }
        Inline::Link(link) => {
            let mut content = eval.eval_inlines(&link.inlines);
            if content.is_empty() {
                content.push(Node::text(link.reference.value.clone()));
            }
            match link.reference.state {
                RefState::Invalid => Node::element("span", content),
                RefState::Broken => Element::new("a")
                    .with_class("broken")
                    .with_attr("href", link.reference.value.clone())
                    .with_children(content)
                    .into(),
                _ => Element::new("a")
                    .with_attr("href", link.reference.value.clone())
                    .with_children(content)
                    .into(),
            }
        }
        Inline::Embed(embed) => {
            let mut img = Element::new("img").with_attr("src", embed.reference.value.clone());
            let alt = plain_text(&embed.inlines);
            if !alt.is_empty() {
                img.set_attr("alt", alt);
            }
            img.into()
        }
        Inline::Endnote(note) => {
            let content = eval.eval_inlines(&note.inlines);
            let (number, label) = eval.ctx.push_endnote(content);
            let anchor = Element::new("a")
                .with_class("zs-noteref")
                .with_attr("href", format!("#fn:{label}"))
                .with_attr("role", "doc-noteref")
                .with_child(Node::text(number.to_string()));
            Element::new("sup")
                .with_attr("id", format!("fnref:{label}"))
                .with_child(anchor)
                .into()
        }
        Inline::Mark(mark) => {
            let content = eval.eval_inlines(&mark.inlines);
            if mark.fragment.is_empty() {
                return content;
            }
            Element::new("a")
                .with_attr("id", format!("{}{}", eval.ctx.unique(), mark.fragment))
                .with_children(content)
                .into()
        }
        Inline::Cite(cite) => {
            let content = if cite.inlines.is_empty() {
                vec![Node::text(cite.key.clone())]
            } else {
                eval.eval_inlines(&cite.inlines)
            };
            Node::element("cite", content)
        }
        Inline::Literal(literal) => {
            let text = Node::text(literal.content.clone());
            match literal.kind {
                LiteralKind::Code => Node::element("code", vec![text]),
                LiteralKind::Input => Node::element("kbd", vec![text]),
                LiteralKind::Output => Node::element("samp", vec![text]),
                LiteralKind::Math => Element::new("code")
                    .with_class("zs-math")
                    .with_child(text)
                    .into(),
                LiteralKind::Comment => Node::Comment(literal.content.clone()),
            }
        }
    };
    vec![node]
}
