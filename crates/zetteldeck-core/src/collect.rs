//! Reachability collection
//!
//! Starting from the slides of a set, follow every zettel link and embed
//! depth-first. Linked zettel that are public join the set as additional
//! slides, embedded images are cached.

use std::collections::HashSet;
use std::rc::Rc;

use tracing::{debug, warn};
use zetteldeck_ast::{walk_blocks, Inline, Visitor, ZettelId};

use crate::slideset::SlideSet;
use crate::store::ContentStore;

/// Syntax values of zettel that can be embedded as images
pub const IMAGE_SYNTAXES: &[&str] = &["gif", "jpeg", "jpg", "png", "svg", "webp"];

/// Syntax value of SVG images
pub const SYNTAX_SVG: &str = "svg";

pub fn is_image_syntax(syntax: &str) -> bool {
    IMAGE_SYNTAXES.contains(&syntax)
}

pub(crate) struct Collector<'a, S: ?Sized> {
    set: &'a mut SlideSet,
    store: &'a S,
    stack: Vec<ZettelId>,
    visited: HashSet<ZettelId>,
    /// Linked zettel already fetched or rejected
    attempted: HashSet<ZettelId>,
    /// Embedded images already fetched or failed
    attempted_images: HashSet<ZettelId>,
}

impl<'a, S: ContentStore + ?Sized> Collector<'a, S> {
    pub(crate) fn new(set: &'a mut SlideSet, store: &'a S) -> Self {
        let ids = set.slide_ids();
        let visited = HashSet::with_capacity(ids.len() + 16);
        let stack = ids.into_iter().rev().collect();
        Self {
            set,
            store,
            stack,
            visited,
            attempted: HashSet::new(),
            attempted_images: HashSet::new(),
        }
    }

    pub(crate) fn run(mut self) {
        while let Some(id) = self.stack.pop() {
            if !self.visited.insert(id) {
                continue;
            }
            let Some(slide) = self.set.get_slide(id).map(Rc::clone) else {
                warn!("Zettel {} is on the stack but not in the slide set", id);
                continue;
            };
            debug!("Collecting references of {}", id);
            walk_blocks(&mut self, &slide.content);
        }
    }

    fn visit_zettel(&mut self, id: ZettelId) {
        if self.visited.contains(&id) || self.set.get_slide(id).is_some() {
            return;
        }
        if !self.attempted.insert(id) {
            return;
        }
        let zettel = match self.store.fetch_zettel(id) {
            Ok(zettel) => zettel,
            Err(e) => {
                warn!("Skipping linked zettel {}: {}", id, e);
                return;
            }
        };
        if !zettel.meta.is_public() {
            debug!("Skipping non-public zettel {}", id);
            return;
        }
        self.set.additional_slide(zettel);
        self.stack.push(id);
    }

    fn visit_image(&mut self, id: ZettelId, syntax: &str) {
        if self.set.has_image(id) || !self.attempted_images.insert(id) {
            return;
        }
        match self.store.fetch_content(id) {
            Ok(data) => self.set.add_image(id, syntax, data),
            Err(e) => warn!("Skipping image {}: {}", id, e),
        }
    }
}

impl<S: ContentStore + ?Sized> Visitor for Collector<'_, S> {
    fn visit_inline(&mut self, inline: &Inline) {
        match inline {
            Inline::Link(link) => {
                if let Some(id) = link.reference.zettel_id() {
                    self.visit_zettel(id);
                }
            }
            Inline::Embed(embed) if is_image_syntax(&embed.syntax) => {
                if let Some(id) = embed.reference.zettel_id() {
                    self.visit_image(id, &embed.syntax);
                }
            }
            _ => {}
        }
    }
}
