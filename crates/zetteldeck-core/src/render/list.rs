//! Listing of zettel

use tracing::warn;
use zetteldeck_ast::ZettelId;

use super::layout::{html_head, prefixed_css, simple_link, write_document};
use crate::config::PresenterConfig;
use crate::html::{Element, Node};
use crate::slide::{title_inlines, zettel_title_or_id};
use crate::store::ContentStore;
use crate::transform::{RenderFlags, Transformer};

/// Link every zettel of `ids` by its title.
///
/// Without `search` the page lists all zettel, otherwise it shows the
/// result of that search.
pub fn render_list<S: ContentStore + ?Sized>(
    store: &S,
    config: &PresenterConfig,
    ids: &[ZettelId],
    search: Option<&str>,
) -> String {
    let (title, heading) = match search {
        None => ("All zettel".to_string(), "All zettel".to_string()),
        Some(query) => ("Selected zettel".to_string(), format!("Search: {query}")),
    };
    let mut tr = Transformer::new(None, None, RenderFlags::TOC);

    let mut list = Element::new("ul");
    for &id in ids {
        let text = match store.fetch_zettel(id) {
            Ok(zettel) => zettel_title_or_id(&zettel.meta, id),
            Err(e) => {
                warn!("Listing zettel {} without title: {}", id, e);
                title_inlines(&id.to_string())
            }
        };
        list.push(Node::element(
            "li",
            vec![simple_link(format!("/{id}"), tr.transform_inlines(&text))],
        ));
    }

    let head = html_head()
        .with_child(Node::element("title", vec![Node::text(title)]))
        .with_child(prefixed_css(""));
    let body = Element::new("body")
        .with_child(Node::element("h1", vec![Node::text(heading)]))
        .with_child(list);
    write_document(&config.lang, head, body)
}
