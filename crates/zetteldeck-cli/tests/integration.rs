//! Integration tests for zetteldeck CLI
//!
//! These tests render pages from a directory store written to a temporary
//! directory.

use std::fs;

use tempfile::TempDir;
use zetteldeck_ast::block::{List, ListKind};
use zetteldeck_ast::meta::{KEY_ROLE, KEY_TITLE, KEY_VISIBILITY};
use zetteldeck_ast::{Attributes, Block, Inline, Reference, Zettel, ZettelId};
use zetteldeck_cli::{content_command, list_command, open_presenter, render_command, render_page};
use zetteldeck_cli::svg_command;
use zetteldeck_cli::{DirStore, Page, StoreOptions};

fn zid(n: u64) -> ZettelId {
    ZettelId::new(n).unwrap()
}

fn link(n: u64, text: &str) -> Vec<Block> {
    vec![Block::Paragraph(vec![Inline::link(
        Reference::zettel(zid(n)),
        vec![Inline::text(text)],
    )])]
}

/// A deck (100) with two slides and a linked public zettel
fn create_test_store() -> TempDir {
    let dir = TempDir::new().unwrap();
    let store = DirStore::new(dir.path());

    let toc = Zettel::new(zid(100))
        .with_meta(KEY_TITLE, "Rust Basics")
        .with_meta(KEY_ROLE, "slideset")
        .with_content(vec![Block::List(List {
            kind: ListKind::Unordered,
            attrs: Attributes::default(),
            items: vec![link(1, "Ownership"), link(2, "Borrowing")],
        })]);
    store.save(&toc).unwrap();

    let first = Zettel::new(zid(1))
        .with_meta(KEY_TITLE, "Ownership")
        .with_content(vec![
            Block::paragraph("Each value has one owner."),
            Block::slide_break(),
            Block::Paragraph(vec![
                Inline::text("See "),
                Inline::link(Reference::zettel(zid(3)), vec![Inline::text("moves")]),
            ]),
        ]);
    store.save(&first).unwrap();

    let second = Zettel::new(zid(2))
        .with_meta(KEY_TITLE, "Borrowing")
        .with_content(vec![Block::paragraph("References borrow values.")]);
    store.save(&second).unwrap();

    let moves = Zettel::new(zid(3))
        .with_meta(KEY_TITLE, "Moves")
        .with_meta(KEY_VISIBILITY, "public")
        .with_content(vec![Block::paragraph("Assignment moves.")]);
    store.save(&moves).unwrap();

    fs::write(dir.path().join("00000000000007.css"), "h1 { color: teal }").unwrap();
    dir
}

fn options(dir: &TempDir) -> StoreOptions {
    StoreOptions {
        store: dir.path().to_path_buf(),
        ..StoreOptions::default()
    }
}

#[test]
fn test_show_to_file() {
    let dir = create_test_store();
    let output = dir.path().join("deck.html");
    render_command(&options(&dir), Page::Show, zid(100), Some(output.as_path())).unwrap();

    let html = fs::read_to_string(&output).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<h1 class=\"title\">Rust Basics</h1>"));
    assert!(html.contains("<section id=\"(2)\"><h1>Ownership</h1>"));
    assert!(html.contains("<section id=\"(3)\"><h1>Ownership</h1>"));
    assert!(html.contains("<section id=\"(4)\"><h1>Borrowing</h1>"));
    // The linked public zettel joins the show
    assert!(html.contains("<a href=\"#(5)\">moves</a>"));
    assert!(html.contains("<section id=\"(5)\"><h1>Moves</h1>"));
}

#[test]
fn test_handout_and_toc() {
    let dir = create_test_store();
    let presenter = open_presenter(&options(&dir)).unwrap();

    let handout = render_page(&presenter, Page::Handout, zid(100)).unwrap();
    assert!(handout.contains("<h1 id=\"(2)\">Ownership<small> (S.2&ndash;3)</small></h1>"));
    assert!(handout.contains("<h1 id=\"(3)\">Borrowing<small> (S.4)</small></h1>"));

    let toc = render_page(&presenter, Page::Toc, zid(100)).unwrap();
    assert!(toc.contains("<a href=\"/00000000000100.slide#(4)\">Borrowing</a>"));

    // A slide set zettel is shown as table of contents
    let zettel = render_page(&presenter, Page::Zettel, zid(100)).unwrap();
    assert_eq!(zettel, toc);
}

#[test]
fn test_config_file_and_zettel() {
    let dir = create_test_store();
    let config_path = dir.path().join("zetteldeck.toml");
    fs::write(&config_path, "author = \"File Author\"\nslide_css = \"00000000000007\"\n").unwrap();

    let opts = StoreOptions {
        config: Some(config_path),
        ..options(&dir)
    };
    let presenter = open_presenter(&opts).unwrap();
    let html = render_page(&presenter, Page::Show, zid(100)).unwrap();
    assert!(html.contains("<p class=\"author\">File Author</p>"));
    assert!(html.contains("h1 { color: teal }"));

    let store = DirStore::new(dir.path());
    store
        .save(&Zettel::new(zid(50)).with_meta("author", "Zettel Author"))
        .unwrap();
    let opts = StoreOptions {
        config_zettel: Some(zid(50)),
        ..opts
    };
    let presenter = open_presenter(&opts).unwrap();
    let html = render_page(&presenter, Page::Show, zid(100)).unwrap();
    assert!(html.contains("<p class=\"author\">Zettel Author</p>"));
}

#[test]
fn test_content_command() {
    let dir = create_test_store();
    let output = dir.path().join("style.out");
    content_command(&options(&dir), zid(7), Some(output.as_path())).unwrap();
    assert_eq!(fs::read_to_string(&output).unwrap(), "h1 { color: teal }");
}

#[test]
fn test_missing_deck_fails() {
    let dir = create_test_store();
    let output = dir.path().join("missing.html");
    let err = render_command(&options(&dir), Page::Handout, zid(404), Some(output.as_path())).unwrap_err();
    assert!(format!("{err:#}").contains("not found"));
    assert!(!output.exists());
}

#[test]
fn test_svg_command() {
    let dir = create_test_store();
    fs::write(dir.path().join("00000000000008.svg"), "<svg/>").unwrap();
    let output = dir.path().join("image.svg");
    svg_command(&options(&dir), zid(8), Some(output.as_path())).unwrap();
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "<?xml version='1.0' encoding='utf-8'?><svg/>"
    );
}

#[test]
fn test_list_command() {
    let dir = create_test_store();
    let output = dir.path().join("list.html");
    list_command(&options(&dir), &[], Some(output.as_path())).unwrap();
    let html = fs::read_to_string(&output).unwrap();
    assert!(html.contains("<h1>All zettel</h1>"));
    assert!(html.contains("<li><a href=\"/00000000000001\">Ownership</a></li>"));
    assert!(html.contains("<li><a href=\"/00000000000100\">Rust Basics</a></li>"));
    assert!(!html.contains("00000000000007"));

    list_command(&options(&dir), &[zid(3)], Some(output.as_path())).unwrap();
    let html = fs::read_to_string(&output).unwrap();
    assert!(html.contains("<h1>Search: 00000000000003</h1>"));
    assert!(html.contains("<li><a href=\"/00000000000003\">Moves</a></li>"));
    assert!(!html.contains("Ownership"));
}

#[test]
fn test_repeated_slide_through_directory_store() {
    let dir = create_test_store();
    let store = DirStore::new(dir.path());
    let toc = Zettel::new(zid(200))
        .with_meta(KEY_TITLE, "Again")
        .with_content(vec![Block::List(List {
            kind: ListKind::Ordered,
            attrs: Attributes::default(),
            items: vec![link(1, "X"), link(2, "Y"), link(1, "X again")],
        })]);
    store.save(&toc).unwrap();

    let presenter = open_presenter(&options(&dir)).unwrap();
    let set = presenter.slide_set(zid(200)).unwrap();
    // Zettel 3 is linked from the repeated slide and joins once
    assert_eq!(set.slide_ids(), vec![zid(1), zid(2), zid(1), zid(3)]);
    assert_eq!(set.stored_count(), 3);

    let html = render_page(&presenter, Page::Show, zid(200)).unwrap();
    assert_eq!(html.matches("<h1>Borrowing</h1>").count(), 1);
    assert_eq!(html.matches("<h1>Ownership</h1>").count(), 4);
}
