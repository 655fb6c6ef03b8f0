//! Integration tests for slide set assembly and rendering
//!
//! Builds slide sets from an in-memory store and checks the rendered pages.

use zetteldeck_ast::meta::{KEY_SLIDE_ROLE, KEY_SYNTAX, KEY_TITLE, KEY_VISIBILITY};
use zetteldeck_ast::{plain_text, Block, Inline, Reference, Zettel, ZettelId};
use zetteldeck_core::html::to_html;
use zetteldeck_core::{
    split_slide, MemoryStore, Presenter, PresenterConfig, RenderFlags, Slide, SlideRole,
    SlideSet, Transformer,
};

fn zid(n: u64) -> ZettelId {
    ZettelId::new(n).unwrap()
}

fn titled(n: u64, title: &str, content: Vec<Block>) -> Zettel {
    Zettel::new(zid(n))
        .with_meta(KEY_TITLE, title)
        .with_content(content)
}

fn link_to(n: u64, text: &str) -> Block {
    Block::Paragraph(vec![Inline::link(
        Reference::zettel(zid(n)),
        vec![Inline::text(text)],
    )])
}

/// Deck 100 listing the given children
fn deck_store(children: &[u64]) -> MemoryStore {
    let mut store = MemoryStore::new();
    store.insert(titled(100, "Deck", Vec::new()));
    store.set_children(zid(100), children.iter().map(|&n| zid(n)).collect());
    store
}

#[test]
fn test_repeated_slide_is_stored_once() {
    let mut store = deck_store(&[1, 2, 1]);
    store.insert(titled(1, "X", vec![Block::paragraph("x")]));
    store.insert(titled(2, "Y", vec![Block::paragraph("y")]));

    let set = SlideSet::build(&store, zid(100)).unwrap();
    assert_eq!(set.len(), 3);
    assert_eq!(set.stored_count(), 2);
    assert_eq!(store.fetch_count(zid(1)), 1);

    let chain = set.slides(SlideRole::Show, 1);
    let top: Vec<_> = chain.iter().collect();
    assert_eq!(chain.find(top[2], zid(1)), Some(top[2]));
}

#[test]
fn test_split_by_headings_and_breaks() {
    let zettel = Zettel::new(zid(1)).with_content(vec![
        Block::heading(1, "A"),
        Block::paragraph("P1"),
        Block::slide_break(),
        Block::paragraph("P2"),
        Block::heading(1, "B"),
        Block::paragraph("P3"),
    ]);
    let parts = split_slide(&Slide::from_zettel(zettel));

    let summary: Vec<(String, Vec<Block>)> = parts
        .iter()
        .map(|p| {
            let title = p.title.as_deref().map(plain_text).unwrap_or_default();
            (title, p.content.clone())
        })
        .collect();
    assert_eq!(
        summary,
        vec![
            ("A".to_string(), vec![Block::paragraph("P1")]),
            ("A".to_string(), vec![Block::paragraph("P2")]),
            ("B".to_string(), vec![Block::paragraph("P3")]),
        ]
    );
}

#[test]
fn test_flat_mode_suppresses_leading_heading_only() {
    let blocks = vec![
        Block::heading(1, "Title"),
        Block::paragraph("body"),
        Block::heading(1, "Section"),
    ];
    let mut tr = Transformer::new(None, None, RenderFlags::FLAT);
    let html = to_html(&tr.transform_document(&blocks));
    assert!(!html.contains("Title"));
    assert!(html.contains("<p>body</p>"));
    assert!(html.contains(">Section</h2>"));
}

#[test]
fn test_show_offsets_follow_splits() {
    let mut store = deck_store(&[1, 2]);
    store.insert(titled(
        1,
        "Three parts",
        vec![
            Block::paragraph("a"),
            Block::slide_break(),
            Block::paragraph("b"),
            Block::slide_break(),
            Block::paragraph("c"),
        ],
    ));
    store.insert(titled(2, "One part", vec![Block::paragraph("d")]));

    let set = SlideSet::build(&store, zid(100)).unwrap();
    let chain = set.slides(SlideRole::Show, 2);
    let numbers: Vec<_> = chain
        .iter()
        .flat_map(|t| chain.children(t))
        .map(|c| chain[c].slide_no)
        .collect();
    assert_eq!(numbers, vec![2, 3, 4, 5]);
}

#[test]
fn test_only_public_zettel_are_discovered() {
    let mut store = deck_store(&[1]);
    store.insert(titled(
        1,
        "Start",
        vec![link_to(2, "public"), link_to(3, "private")],
    ));
    store.insert(titled(2, "Public", vec![link_to(1, "back")]).with_meta(KEY_VISIBILITY, "public"));
    store.insert(titled(3, "Private", Vec::new()));

    let set = SlideSet::build(&store, zid(100)).unwrap();
    assert_eq!(set.slide_ids(), vec![zid(1), zid(2)]);
    assert!(set.get_slide(zid(3)).is_none());

    let html = Presenter::new(store, PresenterConfig::default())
        .render_show(zid(100))
        .unwrap();
    // Links into the deck point to slide numbers
    assert!(html.contains("<a href=\"#(3)\">public</a>"));
    assert!(html.contains("<a href=\"#(2)\">back</a>"));
    assert!(html.contains("<a href=\"/00000000000003\" class=\"zettel\">private</a>"));
}

#[test]
fn test_handout_embeds_images() {
    let mut store = deck_store(&[1]);
    store.insert(titled(
        1,
        "Picture",
        vec![Block::Paragraph(vec![Inline::embed(
            Reference::zettel(zid(5)),
            "png",
        )])],
    ));
    store.insert(Zettel::new(zid(5)).with_meta(KEY_SYNTAX, "png"));
    store.insert_content(zid(5), b"abc".to_vec());

    let presenter = Presenter::new(store, PresenterConfig::default());
    let handout = presenter.render_handout(zid(100)).unwrap();
    assert!(handout.contains("src=\"data:image/png;base64,YWJj\""));

    let show = presenter.render_show(zid(100)).unwrap();
    assert!(show.contains("src=\"/00000000000005.content\""));
}

#[test]
fn test_handout_only_slides() {
    let mut store = deck_store(&[1, 2]);
    store.insert(titled(1, "Shown", vec![Block::paragraph("s")]));
    store.insert(
        titled(2, "Reading", vec![Block::paragraph("r")]).with_meta(KEY_SLIDE_ROLE, "handout"),
    );

    let presenter = Presenter::new(store, PresenterConfig::default());
    let show = presenter.render_show(zid(100)).unwrap();
    assert!(show.contains("Shown"));
    assert!(!show.contains("Reading"));

    let handout = presenter.render_handout(zid(100)).unwrap();
    assert!(handout.contains("<h1 id=\"(2)\">Shown<small> (S.2)</small></h1>"));
    assert!(handout.contains("<h1 id=\"(3)\">Reading</h1>"));
}

#[test]
fn test_private_zettel_images_stay_out() {
    let mut store = deck_store(&[1]);
    store.insert(titled(1, "Start", vec![link_to(3, "private")]));
    store.insert(titled(
        3,
        "Private",
        vec![Block::Paragraph(vec![Inline::embed(
            Reference::zettel(zid(5)),
            "png",
        )])],
    ));
    store.insert(Zettel::new(zid(5)).with_meta(KEY_SYNTAX, "png"));
    store.insert_content(zid(5), b"abc".to_vec());

    let set = SlideSet::build(&store, zid(100)).unwrap();
    assert!(set.get_slide(zid(3)).is_none());
    assert!(set.images().is_empty());

    let handout = Presenter::new(store, PresenterConfig::default())
        .render_handout(zid(100))
        .unwrap();
    assert!(!handout.contains("YWJj"));
    assert!(!handout.contains("Private"));
}
