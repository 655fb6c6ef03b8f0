//! reveal.js slide show

use tracing::{debug, warn};
use zetteldeck_ast::ZettelId;

use super::layout::{
    head_link, html_head, js_file_script, js_script, prefixed_css, published_text, source_link,
    title_element, write_document,
};
use super::Renderer;
use crate::chain::{SlideChain, SlideIdx};
use crate::config::PresenterConfig;
use crate::html::{Element, Node};
use crate::slide::SlideRole;
use crate::slideset::SlideSet;
use crate::store::ContentStore;
use crate::transform::{RenderFlags, Transformer};

const REVEAL_INIT: &str = r#"Reveal.initialize({width: 1920, height: 1024, center: true, slideNumber: "c", hash: true, plugins: [ RevealHighlight, RevealNotes ]});"#;

/// Renders a slide set as reveal.js presentation
#[derive(Debug, Clone)]
pub struct RevealRenderer {
    slide_css: Option<ZettelId>,
    default_lang: String,
    user_css: String,
}

impl RevealRenderer {
    pub fn new(config: &PresenterConfig) -> Self {
        Self {
            slide_css: config.slide_css,
            default_lang: config.lang.clone(),
            user_css: String::new(),
        }
    }
}

impl Renderer for RevealRenderer {
    fn role(&self) -> SlideRole {
        SlideRole::Show
    }

    /// Fetch the user stylesheet, if one is configured
    fn prepare(&mut self, store: &dyn ContentStore) {
        let Some(css_id) = self.slide_css else {
            return;
        };
        match store.fetch_content(css_id) {
            Ok(data) if !data.is_empty() => {
                debug!("Using slide CSS from {}", css_id);
                self.user_css = String::from_utf8_lossy(&data).into_owned();
            }
            Ok(_) => {}
            Err(e) => warn!("Unable to load slide CSS {}: {}", css_id, e),
        }
    }

    fn render(&self, slides: &SlideSet, author: &str) -> String {
        let title = slides.title();
        let lang = match slides.lang() {
            "" => self.default_lang.as_str(),
            lang => lang,
        };
        let offset = if title.is_some() { 2 } else { 1 };
        let chain = slides.slides(SlideRole::Show, offset);
        let mut tr = Transformer::new(Some(slides), Some(SlideRole::Show), RenderFlags::SHOW);

        let head = html_head()
            .with_child(head_link("stylesheet", "revealjs/reveal.css"))
            .with_child(head_link("stylesheet", "revealjs/theme/white.css"))
            .with_child(head_link("stylesheet", "revealjs/plugin/highlight/default.css"))
            .with_child(prefixed_css(&self.user_css))
            .with_child(title_element(title.as_deref()));

        let mut slides_div = Element::new("div").with_class("slides");
        if let Some(title) = &title {
            let mut hgroup = Element::new("hgroup").with_child(
                Element::new("h1")
                    .with_class("title")
                    .with_children(tr.transform_inlines(title)),
            );
            if let Some(subtitle) = slides.subtitle() {
                hgroup.push(
                    Element::new("h2")
                        .with_class("subtitle")
                        .with_children(tr.transform_inlines(&subtitle)),
                );
            }
            if !author.is_empty() {
                hgroup.push(
                    Element::new("p")
                        .with_class("author")
                        .with_child(Node::text(author)),
                );
            }
            if let Some(ts) = slides.published() {
                let time = Node::element("time", vec![Node::text(published_text(ts))]);
                hgroup.push(Element::new("p").with_class("updated").with_child(time));
            }
            slides_div.push(Element::new("section").with_child(hgroup));
        }

        for idx in chain.iter() {
            tr.set_current_slide(&chain, idx);
            let Some(main) = chain.child(idx) else {
                continue;
            };
            let mut section = reveal_slide(&mut tr, &chain, main, lang);
            if chain.next(main).is_some() {
                let main_lang = chain[main].slide.lang.as_str();
                let mut vertical = Element::new("section").with_child(section);
                for sub in chain.children(idx).skip(1) {
                    vertical.push(reveal_slide(&mut tr, &chain, sub, main_lang));
                }
                section = vertical;
            }
            slides_div.push(section);
        }

        let body = Element::new("body")
            .with_child(Element::new("div").with_class("reveal").with_child(slides_div))
            .with_child(js_file_script("revealjs/plugin/highlight/highlight.js"))
            .with_child(js_file_script("revealjs/plugin/notes/notes.js"))
            .with_child(js_file_script("revealjs/reveal.js"))
            .with_child(js_script(REVEAL_INIT));

        write_document(lang, head, body)
    }
}

/// One `section` for a (sub-)slide
fn reveal_slide(tr: &mut Transformer<'_>, chain: &SlideChain, idx: SlideIdx, lang: &str) -> Element {
    let info = &chain[idx];
    let slide = &info.slide;
    let mut section = Element::new("section").with_attr("id", format!("({})", info.slide_no));
    if !slide.lang.is_empty() && slide.lang != lang {
        section.set_attr("lang", slide.lang.clone());
    }
    if let Some(title) = &slide.title {
        section.push(Node::element("h1", tr.transform_inlines(title)));
    }
    tr.set_unique(format!("{}:", info.number));
    section.extend(tr.transform_blocks(&slide.content));
    if let Some(notes) = tr.endnotes() {
        section.push(notes);
    }
    section.push(source_link(slide.id.to_string()));
    section
}
