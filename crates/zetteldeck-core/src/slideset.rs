//! Slide sets
//!
//! A [`SlideSet`] is the ordered sequence of slides of one presentation,
//! built from a table-of-contents zettel. A zettel may occur several times
//! in the sequence but is fetched and stored only once.

use std::collections::HashMap;
use std::rc::Rc;

use chrono::NaiveDateTime;
use tracing::{debug, info, warn};
use zetteldeck_ast::meta::{KEY_AUTHOR, KEY_COPYRIGHT, KEY_LANG, KEY_LICENSE, KEY_SUB_TITLE};
use zetteldeck_ast::{Inline, Meta, Zettel, ZettelId};

use crate::chain::SlideChain;
use crate::collect::Collector;
use crate::error::{PresenterError, Result};
use crate::slide::{slide_title, title_inlines, Slide, SlideRole};
use crate::split::split_slide;
use crate::store::ContentStore;

/// Cached image data of an embedded zettel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub syntax: String,
    pub data: Vec<u8>,
}

/// The sequence of slides of one presentation
#[derive(Debug)]
pub struct SlideSet {
    id: ZettelId,
    meta: Meta,
    seq: Vec<Rc<Slide>>,
    slides: HashMap<ZettelId, Rc<Slide>>,
    images: HashMap<ZettelId, Image>,
    completed: bool,
}

impl SlideSet {
    /// Create an empty slide set headed by the given metadata
    pub fn new(id: ZettelId, meta: Meta) -> Self {
        Self {
            id,
            meta,
            seq: Vec::new(),
            slides: HashMap::new(),
            images: HashMap::new(),
            completed: false,
        }
    }

    /// Build and complete the slide set headed by `root`.
    ///
    /// Failing to retrieve `root` or its list of children aborts; failures
    /// of individual slides only drop those slides.
    pub fn build<S: ContentStore + ?Sized>(store: &S, root: ZettelId) -> Result<Self> {
        let zettel = store
            .fetch_zettel(root)
            .map_err(|e| PresenterError::retrieve(root, e))?;
        if zettel.meta.is_empty() {
            return Err(PresenterError::NotASlideSet { id: root });
        }
        Self::populate(store, root, zettel.meta)
    }

    /// Fill a slide set with the children of `id` and complete it
    pub fn populate<S: ContentStore + ?Sized>(store: &S, id: ZettelId, meta: Meta) -> Result<Self> {
        let children = store
            .list_children(id)
            .map_err(|e| PresenterError::retrieve(id, e))?;
        let mut set = Self::new(id, meta);
        for child in children {
            set.add_slide(store, child);
        }
        set.completion(store);
        info!(
            "Slide set {}: {} slides, {} zettel, {} images",
            id,
            set.seq.len(),
            set.slides.len(),
            set.images.len()
        );
        Ok(set)
    }

    /// Append the zettel `id` to the sequence, fetching it if not yet stored
    pub fn add_slide<S: ContentStore + ?Sized>(&mut self, store: &S, id: ZettelId) {
        if let Some(slide) = self.slides.get(&id) {
            self.seq.push(Rc::clone(slide));
            return;
        }
        match store.fetch_zettel(id) {
            Ok(zettel) => {
                let slide = Rc::new(Slide::from_zettel(zettel));
                self.seq.push(Rc::clone(&slide));
                self.slides.insert(id, slide);
            }
            Err(e) => warn!("Skipping slide {}: {}", id, e),
        }
    }

    /// Append an automatically discovered zettel
    pub fn additional_slide(&mut self, zettel: Zettel) {
        let slide = Rc::new(Slide::from_zettel(zettel));
        debug!("Adding referenced zettel {}", slide.id);
        self.seq.push(Rc::clone(&slide));
        self.slides.insert(slide.id, slide);
    }

    /// Pull in all referenced public zettel and embedded images.
    ///
    /// Runs at most once per slide set.
    pub fn completion<S: ContentStore + ?Sized>(&mut self, store: &S) {
        if self.completed {
            return;
        }
        Collector::new(self, store).run();
        self.completed = true;
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Build the numbered chain of slides for a rendering
    pub fn slides(&self, role: SlideRole, offset: usize) -> SlideChain {
        match role {
            SlideRole::Show => self.slides_for_show(offset),
            SlideRole::Handout => self.slides_for_handout(offset),
        }
    }

    fn slides_for_show(&self, offset: usize) -> SlideChain {
        let mut chain = SlideChain::new();
        let mut slide_no = offset;
        for slide in self.seq.iter().filter(|s| s.has_role(SlideRole::Show)) {
            let idx = chain.push(Rc::clone(slide));
            chain.set_numbers(idx, slide_no, slide_no);
            chain.split_children(idx);
            let children: Vec<_> = chain.children(idx).collect();
            for (i, child) in children.into_iter().enumerate() {
                if i > 0 {
                    slide_no += 1;
                }
                chain.set_numbers(child, slide_no, slide_no);
            }
            slide_no += 1;
        }
        chain
    }

    fn slides_for_handout(&self, offset: usize) -> SlideChain {
        let mut chain = SlideChain::new();
        let mut number = offset;
        let mut slide_no = offset;
        for slide in &self.seq {
            let shown = slide.has_role(SlideRole::Show);
            if !slide.has_role(SlideRole::Handout) {
                if shown {
                    slide_no += split_slide(slide).len();
                }
                continue;
            }
            let idx = chain.push(Rc::clone(slide));
            if shown {
                chain.set_numbers(idx, number, slide_no);
                chain.split_children(idx);
                let children: Vec<_> = chain.children(idx).collect();
                for child in children {
                    chain.set_numbers(child, 0, slide_no);
                    slide_no += 1;
                }
            } else {
                chain.set_numbers(idx, number, 0);
            }
            number += 1;
        }
        chain
    }

    pub fn id(&self) -> ZettelId {
        self.id
    }

    pub fn meta(&self) -> &Meta {
        &self.meta
    }

    /// Number of entries in the sequence, counting repeats
    pub fn len(&self) -> usize {
        self.seq.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }

    /// Identifiers of the sequence, in order and with repeats
    pub fn slide_ids(&self) -> Vec<ZettelId> {
        self.seq.iter().map(|s| s.id).collect()
    }

    /// Stored slide of a zettel
    pub fn get_slide(&self, id: ZettelId) -> Option<&Rc<Slide>> {
        self.slides.get(&id)
    }

    /// Number of distinct stored slides
    pub fn stored_count(&self) -> usize {
        self.slides.len()
    }

    pub fn title(&self) -> Option<Vec<Inline>> {
        slide_title(&self.meta)
    }

    pub fn subtitle(&self) -> Option<Vec<Inline>> {
        self.meta.get(KEY_SUB_TITLE).map(title_inlines)
    }

    pub fn lang(&self) -> &str {
        self.meta.get_str(KEY_LANG)
    }

    /// Author of the slide set, or `fallback` if none is given
    pub fn author<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.meta.get(KEY_AUTHOR).unwrap_or(fallback)
    }

    pub fn copyright(&self) -> &str {
        self.meta.get_str(KEY_COPYRIGHT)
    }

    pub fn license(&self) -> &str {
        self.meta.get_str(KEY_LICENSE)
    }

    /// Most recent publication time of all slides
    pub fn published(&self) -> Option<NaiveDateTime> {
        self.seq.iter().filter_map(|s| s.published).max()
    }

    pub fn has_image(&self, id: ZettelId) -> bool {
        self.images.contains_key(&id)
    }

    pub fn add_image(&mut self, id: ZettelId, syntax: impl Into<String>, data: Vec<u8>) {
        self.images.insert(
            id,
            Image {
                syntax: syntax.into(),
                data,
            },
        );
    }

    pub fn get_image(&self, id: ZettelId) -> Option<&Image> {
        self.images.get(&id)
    }

    /// Identifiers of all cached images, sorted
    pub fn images(&self) -> Vec<ZettelId> {
        let mut ids: Vec<_> = self.images.keys().copied().collect();
        ids.sort();
        ids
    }
}
