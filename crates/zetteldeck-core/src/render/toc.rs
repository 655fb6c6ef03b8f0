//! Table of contents of a slide set

use super::layout::{html_head, prefixed_css, simple_link, title_element, write_document};
use crate::config::PresenterConfig;
use crate::html::{Element, Node};
use crate::slide::SlideRole;
use crate::slideset::SlideSet;
use crate::transform::{RenderFlags, Transformer};

/// List the show slides of `slides`, linking into the slide show
pub fn render_toc(slides: &SlideSet, config: &PresenterConfig) -> String {
    let title = slides.title();
    let lang = match slides.lang() {
        "" => config.lang.as_str(),
        lang => lang,
    };
    let id = slides.id();
    let offset = if title.is_some() { 2 } else { 1 };
    let chain = slides.slides(SlideRole::Show, offset);
    let mut tr = Transformer::new(Some(slides), None, RenderFlags::TOC);

    let head = html_head()
        .with_child(title_element(title.as_deref()))
        .with_child(prefixed_css(""));

    let mut header = Element::new("header");
    let mut list = Element::new("ol");
    if let Some(title) = &title {
        let html_title = tr.transform_inlines(title);
        header.push(Node::element("h1", html_title.clone()));
        list.push(Node::element(
            "li",
            vec![simple_link(format!("/{id}.slide#(1)"), html_title)],
        ));
    }
    if let Some(subtitle) = slides.subtitle() {
        header.push(Node::element("h2", tr.transform_inlines(&subtitle)));
    }

    for idx in chain.iter() {
        let info = &chain[idx];
        let text = match &info.slide.title {
            Some(slide_title) => tr.transform_inlines(slide_title),
            None => vec![Node::text(info.slide.id.to_string())],
        };
        list.push(Node::element(
            "li",
            vec![simple_link(format!("/{id}.slide#({})", info.number), text)],
        ));
    }

    let views = Node::element(
        "p",
        vec![
            simple_link(format!("/{id}.reveal"), vec![Node::text("Reveal")]),
            Node::text(", "),
            simple_link(format!("/{id}.html"), vec![Node::text("Handout")]),
        ],
    );
    let body = Element::new("body")
        .with_child(header)
        .with_child(list)
        .with_child(views);
    write_document(lang, head, body)
}
