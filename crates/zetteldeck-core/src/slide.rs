//! Slide data structures.
//!
//! A [`Slide`] is one zettel prepared for presentation. The same slide may be
//! shown several times in a deck; its record exists once per slide set.

use std::fmt;

use chrono::NaiveDateTime;
use zetteldeck_ast::meta::{
    KEY_LANG, KEY_PUBLISHED, KEY_SLIDE_ROLE, KEY_SLIDE_TITLE, KEY_TITLE, TIMESTAMP_LAYOUT,
};
use zetteldeck_ast::{Block, Inline, Meta, Zettel, ZettelId};

/// The two renderings of a slide set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlideRole {
    /// Interactive, numbered slide show
    Show,
    /// Linear, printable handout
    Handout,
}

impl SlideRole {
    pub fn as_str(self) -> &'static str {
        match self {
            SlideRole::Show => "show",
            SlideRole::Handout => "handout",
        }
    }

    /// Convert a role name supplied by program code.
    ///
    /// # Panics
    ///
    /// Panics on any name other than `show` or `handout`; callers must never
    /// pass user input here.
    pub fn from_contract(name: &str) -> Self {
        match name {
            "show" => SlideRole::Show,
            "handout" => SlideRole::Handout,
            _ => panic!("invalid slide role {name:?}"),
        }
    }
}

impl fmt::Display for SlideRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One zettel as a slide
#[derive(Debug, Clone, PartialEq)]
pub struct Slide {
    pub id: ZettelId,
    /// Slide title; `None` for untitled sub-slides
    pub title: Option<Vec<Inline>>,
    pub lang: String,
    /// Value of `slide-role`; empty means every role
    pub role: String,
    pub published: Option<NaiveDateTime>,
    pub content: Vec<Block>,
}

impl Slide {
    /// Build a slide from an evaluated zettel
    pub fn from_zettel(zettel: Zettel) -> Self {
        let Zettel { id, meta, content } = zettel;
        Self {
            id,
            title: Some(slide_title_or_id(&meta, id)),
            lang: meta.get_str(KEY_LANG).to_string(),
            role: meta.get_str(KEY_SLIDE_ROLE).to_string(),
            published: meta
                .get(KEY_PUBLISHED)
                .and_then(|ts| NaiveDateTime::parse_from_str(ts, TIMESTAMP_LAYOUT).ok()),
            content,
        }
    }

    /// Derived slide with another title and content, same identity
    pub fn make_child(&self, title: Option<Vec<Inline>>, content: Vec<Block>) -> Self {
        Self {
            id: self.id,
            title,
            lang: self.lang.clone(),
            role: self.role.clone(),
            published: self.published,
            content,
        }
    }

    /// Check whether the slide takes part in the given rendering
    pub fn has_role(&self, role: SlideRole) -> bool {
        self.role.is_empty() || self.role == role.as_str()
    }
}

/// Title of a slide or slide set: `slide-title` wins over `title`
pub fn slide_title(meta: &Meta) -> Option<Vec<Inline>> {
    meta.get(KEY_SLIDE_TITLE)
        .or_else(|| meta.get(KEY_TITLE))
        .map(title_inlines)
}

/// Title of a slide, falling back to its identifier
pub fn slide_title_or_id(meta: &Meta, id: ZettelId) -> Vec<Inline> {
    slide_title(meta).unwrap_or_else(|| title_inlines(&id.to_string()))
}

/// Title of a zettel for listings, ignoring `slide-title`
pub fn zettel_title_or_id(meta: &Meta, id: ZettelId) -> Vec<Inline> {
    title_inlines(meta.get(KEY_TITLE).unwrap_or(&id.to_string()))
}

pub(crate) fn title_inlines(s: &str) -> Vec<Inline> {
    vec![Inline::text(s)]
}
