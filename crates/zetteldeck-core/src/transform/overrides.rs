//! Presenter rules layered over the defaults

use base64::{engine::general_purpose, Engine as _};
use zetteldeck_ast::{Block, Inline, LiteralKind, RefState, VerbatimKind, ZettelId};

use super::rules::{Eval, Next, NodeKind, NodeRef, RuleTable};
use crate::collect::SYNTAX_SVG;
use crate::html::{Element, Node};
use crate::slide::SlideRole;
use crate::slideset::Image;

/// Install all presenter rules
pub(crate) fn install(rules: &mut RuleTable) {
    rules.add(NodeKind::Region, note_region);
    rules.add(NodeKind::Heading, leading_heading);
    rules.add(NodeKind::ThematicBreak, leading_break);
    rules.add(NodeKind::Verbatim, verbatim_comment);
    rules.add(NodeKind::Link, zettel_link);
    rules.add(NodeKind::Embed, embed_image);
    rules.add(NodeKind::Literal, literal_comment);
}

/// Regions tagged for one rendering become side notes or vanish
fn note_region(eval: &mut Eval<'_, '_>, node: NodeRef<'_>, next: Next<'_>) -> Vec<Node> {
    let NodeRef::Block(Block::Region(region)) = node else {
        return next.run(eval, node);
    };
    let (Some(tag), Some(role)) = (region.attrs.generic_value(), eval.ctx.role) else {
        return next.run(eval, node);
    };
    let note_class = match tag {
        "show" | "show-note" => (role == SlideRole::Show).then_some("notes"),
        "handout" | "handout-note" => (role == SlideRole::Handout).then_some("handout"),
        "both" | "note" => Some(match role {
            SlideRole::Show => "notes",
            SlideRole::Handout => "handout",
        }),
        "only-show" if role != SlideRole::Show => None,
        "only-handout" if role != SlideRole::Handout => None,
        _ => return next.run(eval, node),
    };
    match note_class {
        Some(class) => {
            let aside = Element::new("aside")
                .with_class(class)
                .with_children(eval.eval_blocks(&region.blocks));
            vec![aside.into()]
        }
        None => Vec::new(),
    }
}

/// The first heading of a document repeats its title
fn leading_heading(eval: &mut Eval<'_, '_>, node: NodeRef<'_>, next: Next<'_>) -> Vec<Node> {
    match node {
        NodeRef::Block(block)
            if eval.ctx.at_document_start() && block.as_level1_heading().is_some() =>
        {
            Vec::new()
        }
        _ => next.run(eval, node),
    }
}

fn leading_break(eval: &mut Eval<'_, '_>, node: NodeRef<'_>, next: Next<'_>) -> Vec<Node> {
    match node {
        NodeRef::Block(block) if eval.ctx.at_document_start() && block.is_slide_break() => {
            Vec::new()
        }
        _ => next.run(eval, node),
    }
}

fn verbatim_comment(eval: &mut Eval<'_, '_>, node: NodeRef<'_>, next: Next<'_>) -> Vec<Node> {
    match node {
        NodeRef::Block(Block::Verbatim(v)) if v.kind == VerbatimKind::Comment => Vec::new(),
        _ => next.run(eval, node),
    }
}

fn literal_comment(eval: &mut Eval<'_, '_>, node: NodeRef<'_>, next: Next<'_>) -> Vec<Node> {
    match node {
        NodeRef::Inline(Inline::Literal(l)) if l.kind == LiteralKind::Comment => Vec::new(),
        _ => next.run(eval, node),
    }
}

fn single_element<'n>(nodes: &'n mut [Node], tag: &str) -> Option<&'n mut Element> {
    match nodes {
        [Node::Element(el)] if el.tag == tag => Some(el),
        _ => None,
    }
}

/// Resolve zettel links against the slide chain, decorate external links
fn zettel_link(eval: &mut Eval<'_, '_>, node: NodeRef<'_>, next: Next<'_>) -> Vec<Node> {
    let NodeRef::Inline(Inline::Link(link)) = node else {
        return next.run(eval, node);
    };
    let mut out = next.run(eval, node);
    if let Some(a) = single_element(&mut out, "a") {
        match link.reference.state {
            RefState::Zettel if a.attr("href").is_some() => {
                let target = link.reference.target();
                let number = ZettelId::parse(target)
                    .ok()
                    .and_then(|id| eval.ctx.find_number(id));
                if let Some(number) = number {
                    a.set_attr("href", format!("#({number})"));
                } else if eval.ctx.flags.ext_zettel_links {
                    a.add_class("zettel");
                    a.set_attr("href", format!("/{target}"));
                } else {
                    // Only the text, the zettel might not be public
                    let text = std::mem::take(&mut a.children);
                    return vec![Node::element("span", text)];
                }
            }
            RefState::External => {
                a.add_class("external");
                a.set_attr("target", "_blank");
                a.set_attr("rel", "noopener noreferrer");
            }
            _ => {}
        }
    }
    out
}

/// Point embedded zettel images to their content, or inline them
fn embed_image(eval: &mut Eval<'_, '_>, node: NodeRef<'_>, next: Next<'_>) -> Vec<Node> {
    let NodeRef::Inline(Inline::Embed(embed)) = node else {
        return next.run(eval, node);
    };
    let mut out = next.run(eval, node);
    let Some(id) = embed.reference.zettel_id() else {
        return out;
    };

    if embed.syntax == SYNTAX_SVG {
        if let Some(image) = eval.ctx.image(id).filter(|img| img.syntax == SYNTAX_SVG) {
            return vec![Node::raw(String::from_utf8_lossy(&image.data))];
        }
        let svg = Element::new("embed")
            .with_attr("type", "image/svg+xml")
            .with_attr("src", format!("/{id}.svg"));
        return vec![Element::new("figure").with_child(svg).into()];
    }

    let cached = eval
        .ctx
        .image(id)
        .filter(|_| eval.ctx.flags.embed_images);
    if let Some(img) = single_element(&mut out, "img") {
        let src = match cached {
            Some(image) => data_uri(image),
            None => format!("/{id}.content"),
        };
        img.set_attr("src", src);
    }
    out
}

fn data_uri(image: &Image) -> String {
    format!(
        "data:image/{};base64,{}",
        image.syntax,
        general_purpose::STANDARD.encode(&image.data)
    )
}
