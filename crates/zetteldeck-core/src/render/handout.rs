//! Printable handout

use super::layout::{
    html_head, prefixed_css, published_text, simple_meta, title_element, write_document,
};
use super::Renderer;
use crate::chain::{SlideChain, SlideIdx};
use crate::config::PresenterConfig;
use crate::html::{Element, Node};
use crate::slide::SlideRole;
use crate::slideset::SlideSet;
use crate::store::ContentStore;
use crate::transform::{RenderFlags, Transformer};

const HANDOUT_CSS: &str = "blockquote {
  border-left: 0.5rem solid lightgray;
  padding-left: 1rem;
  margin-left: 1rem;
  margin-right: 2rem;
}
blockquote p { margin-bottom: .5rem }
aside.handout { border: 0.2rem solid lightgray }
";

/// Renders a slide set as one linear document
#[derive(Debug, Clone)]
pub struct HandoutRenderer {
    default_lang: String,
}

impl HandoutRenderer {
    pub fn new(config: &PresenterConfig) -> Self {
        Self {
            default_lang: config.lang.clone(),
        }
    }
}

impl Renderer for HandoutRenderer {
    fn role(&self) -> SlideRole {
        SlideRole::Handout
    }

    fn prepare(&mut self, _store: &dyn ContentStore) {}

    fn render(&self, slides: &SlideSet, author: &str) -> String {
        let title = slides.title();
        let copyright = slides.copyright();
        let license = slides.license();
        let lang = match slides.lang() {
            "" => self.default_lang.as_str(),
            lang => lang,
        };
        let offset = if title.is_some() { 2 } else { 1 };
        let chain = slides.slides(SlideRole::Handout, offset);
        let mut tr = Transformer::new(Some(slides), Some(SlideRole::Handout), RenderFlags::HANDOUT);

        let head = html_head()
            .with_child(simple_meta("author", author))
            .with_child(simple_meta("copyright", copyright))
            .with_child(simple_meta("license", license))
            .with_child(title_element(title.as_deref()))
            .with_child(prefixed_css(HANDOUT_CSS));

        let mut header = Element::new("header");
        if let Some(title) = &title {
            let mut hgroup = Element::new("hgroup").with_child(
                Element::new("h1")
                    .with_attr("id", "(1)")
                    .with_children(tr.transform_inlines(title)),
            );
            if let Some(subtitle) = slides.subtitle() {
                hgroup.push(Node::element("h2", tr.transform_inlines(&subtitle)));
            }
            for line in [author, copyright, license] {
                hgroup.push(Node::element("p", vec![Node::text(line)]));
            }
            if let Some(ts) = slides.published() {
                hgroup.push(Node::element(
                    "p",
                    vec![Node::text("Update: "), Node::text(published_text(ts))],
                ));
            }
            header.push(hgroup);
        }

        let mut article = Element::new("article");
        for idx in chain.iter() {
            let info = &chain[idx];
            tr.set_current_slide(&chain, idx);
            tr.set_unique(format!("{}:", info.number));
            let id = format!("({})", info.number);
            let slide = &info.slide;
            match &slide.title {
                Some(slide_title) => {
                    let mut h1 = Element::new("h1")
                        .with_attr("id", id)
                        .with_children(tr.transform_inlines(slide_title));
                    if let Some(range) = slide_no_range(&chain, idx) {
                        h1.push(range);
                    }
                    article.push(h1);
                }
                None => article.push(Element::new("a").with_attr("id", id)),
            }
            let content = tr.transform_document(&slide.content);
            if !slide.lang.is_empty() && slide.lang != lang {
                article.push(
                    Element::new("div")
                        .with_attr("lang", slide.lang.clone())
                        .with_children(content),
                );
            } else {
                article.extend(content);
            }
        }

        let mut footer = Element::new("footer");
        if let Some(notes) = tr.endnotes() {
            footer.push(notes);
        }
        let body = Element::new("body")
            .with_child(header)
            .with_child(article)
            .with_child(footer);
        write_document(lang, head, body)
    }
}

/// `(S.a–b)` or `(S.a)` for slides that are part of the show
fn slide_no_range(chain: &SlideChain, idx: SlideIdx) -> Option<Node> {
    let from = chain[idx].slide_no;
    if from == 0 {
        return None;
    }
    let to = chain
        .last_child(idx)
        .map(|last| chain[last].slide_no)
        .unwrap_or(from);
    let range = if from < to {
        format!(" (S.{from}&ndash;{to})")
    } else {
        format!(" (S.{from})")
    };
    Some(Node::element("small", vec![Node::raw(range)]))
}
