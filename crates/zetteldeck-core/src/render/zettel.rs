//! Single zettel as flat document

use tracing::{debug, warn};
use zetteldeck_ast::meta::{KEY_LANG, KEY_ROLE};
use zetteldeck_ast::{Meta, Zettel};

use super::layout::{
    html_head, prefixed_css, simple_link, title_element, write_document, SOURCE_MARK,
};
use super::toc::render_toc;
use crate::config::PresenterConfig;
use crate::html::{Element, Node};
use crate::slide::slide_title_or_id;
use crate::slideset::SlideSet;
use crate::store::ContentStore;
use crate::transform::{RenderFlags, Transformer};

/// Render one zettel as page.
///
/// A zettel carrying the configured slide-set role is shown as table of
/// contents instead, as long as its children can be listed.
pub fn render_zettel<S: ContentStore + ?Sized>(
    store: &S,
    config: &PresenterConfig,
    zettel: Zettel,
) -> String {
    let Zettel { id, meta, content } = zettel;
    if meta.get(KEY_ROLE) == Some(config.slideset_role.as_str()) {
        match SlideSet::populate(store, id, meta.clone()) {
            Ok(slides) => {
                debug!("Zettel {} is a slide set", id);
                return render_toc(&slides, config);
            }
            Err(e) => warn!("Showing slide set {} as zettel: {}", id, e),
        }
    }

    let title = slide_title_or_id(&meta, id);
    let lang = meta.get(KEY_LANG).unwrap_or(config.lang.as_str());
    let mut tr = Transformer::new(None, None, RenderFlags::FLAT);

    let head = html_head()
        .with_child(title_element(Some(title.as_slice())))
        .with_child(prefixed_css(""));

    let mut header = Element::new("header").with_child(Node::element(
        "h1",
        tr.transform_inlines(&title),
    ));
    if let Some(urls) = url_list(&meta) {
        header.push(urls);
    }

    let article = Element::new("article").with_children(tr.transform_document(&content));

    let mut footer = Element::new("footer");
    if let Some(notes) = tr.endnotes() {
        footer.push(notes);
    }
    let source = simple_link(
        format!("{}/h/{}", config.store_url.trim_end_matches('/'), id),
        vec![Node::text(SOURCE_MARK)],
    );
    footer.push(Node::element("p", vec![source]));

    let body = Element::new("body")
        .with_child(header)
        .with_child(article)
        .with_child(footer);
    write_document(lang, head, body)
}

/// `ul` of all URL-valued metadata, if any
fn url_list(meta: &Meta) -> Option<Node> {
    let items: Vec<Node> = meta
        .urls()
        .map(|(key, url)| {
            let link = Element::new("a")
                .with_attr("href", url)
                .with_attr("target", "_blank")
                .with_child(Node::text(url));
            Node::element(
                "li",
                vec![
                    Node::text(key),
                    Node::text(": "),
                    link.into(),
                    Node::text("\u{279a}"),
                ],
            )
        })
        .collect();
    (!items.is_empty()).then(|| Node::element("ul", items))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use zetteldeck_ast::meta::KEY_TITLE;
    use zetteldeck_ast::{Block, ZettelId};

    fn zid(n: u64) -> ZettelId {
        ZettelId::new(n).unwrap()
    }

    #[test]
    fn test_flat_zettel() {
        let store = MemoryStore::new();
        let zettel = Zettel::new(zid(5))
            .with_meta(KEY_TITLE, "Topic")
            .with_meta("url", "https://example.org")
            .with_content(vec![
                Block::heading(1, "Topic"),
                Block::paragraph("text"),
                Block::heading(1, "Later"),
            ]);
        let html = render_zettel(&store, &PresenterConfig::default(), zettel);
        assert!(html.contains("<html lang=\"de\">"));
        assert!(html.contains("<header><h1>Topic</h1>\n<ul>"));
        assert!(html.contains(
            "<li>url: <a href=\"https://example.org\" target=\"_blank\">https://example.org</a>\u{279a}</li>"
        ));
        assert!(html.contains("<article><p>text</p>"));
        assert!(html.contains(">Later</h2>"));
        assert!(html.contains(
            "<a href=\"http://127.0.0.1:23123/h/00000000000005\">\u{266e}</a>"
        ));
    }

    #[test]
    fn test_untitled_zettel_uses_id() {
        let store = MemoryStore::new();
        let html = render_zettel(&store, &PresenterConfig::default(), Zettel::new(zid(5)));
        assert!(html.contains("<title>00000000000005</title>"));
        assert!(!html.contains("<ul>"));
    }

    #[test]
    fn test_slide_set_role_renders_toc() {
        let mut store = MemoryStore::new();
        store.insert(Zettel::new(zid(1)).with_meta(KEY_TITLE, "First"));
        store.set_children(zid(9), vec![zid(1)]);
        let deck = Zettel::new(zid(9))
            .with_meta(KEY_TITLE, "Deck")
            .with_meta(KEY_ROLE, "slideset");
        store.insert(deck.clone());
        let html = render_zettel(&store, &PresenterConfig::default(), deck);
        assert!(html.contains("href=\"/00000000000009.reveal\""));
        assert!(html.contains(">First</a>"));
    }
}
