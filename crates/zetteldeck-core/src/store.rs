//! Content store interface
//!
//! The presenter never talks to a zettel store directly. All zettel, raw
//! content and table-of-contents listings come through [`ContentStore`],
//! with blocking calls issued one at a time.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

use zetteldeck_ast::{Zettel, ZettelId};

use crate::error::StoreError;

/// Blocking access to evaluated zettel
pub trait ContentStore {
    /// Fetch metadata and parsed content of a zettel
    fn fetch_zettel(&self, id: ZettelId) -> Result<Zettel, StoreError>;

    /// Fetch the raw content bytes of a zettel, e.g. image data
    fn fetch_content(&self, id: ZettelId) -> Result<Vec<u8>, StoreError>;

    /// Identifiers listed inside a table-of-contents zettel
    fn list_children(&self, id: ZettelId) -> Result<Vec<ZettelId>, StoreError>;
}

impl<S: ContentStore + ?Sized> ContentStore for &S {
    fn fetch_zettel(&self, id: ZettelId) -> Result<Zettel, StoreError> {
        (**self).fetch_zettel(id)
    }

    fn fetch_content(&self, id: ZettelId) -> Result<Vec<u8>, StoreError> {
        (**self).fetch_content(id)
    }

    fn list_children(&self, id: ZettelId) -> Result<Vec<ZettelId>, StoreError> {
        (**self).list_children(id)
    }
}

/// In-memory store, used for tests and embedding
#[derive(Debug, Default)]
pub struct MemoryStore {
    zettel: HashMap<ZettelId, Zettel>,
    contents: HashMap<ZettelId, Vec<u8>>,
    children: HashMap<ZettelId, Vec<ZettelId>>,
    malformed: HashSet<ZettelId>,
    fetches: RefCell<HashMap<ZettelId, usize>>,
    content_fetches: RefCell<HashMap<ZettelId, usize>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a zettel
    pub fn insert(&mut self, zettel: Zettel) {
        self.zettel.insert(zettel.id, zettel);
    }

    /// Add raw content for a zettel
    pub fn insert_content(&mut self, id: ZettelId, data: impl Into<Vec<u8>>) {
        self.contents.insert(id, data.into());
    }

    /// Define the children listed by a table-of-contents zettel
    pub fn set_children(&mut self, id: ZettelId, children: Vec<ZettelId>) {
        self.children.insert(id, children);
    }

    /// Make a zettel unreadable: fetching it reports malformed content
    pub fn mark_malformed(&mut self, id: ZettelId) {
        self.malformed.insert(id);
    }

    /// How often `fetch_zettel` was called for an identifier
    pub fn fetch_count(&self, id: ZettelId) -> usize {
        self.fetches.borrow().get(&id).copied().unwrap_or(0)
    }

    /// How often `fetch_content` was called for an identifier
    pub fn content_fetch_count(&self, id: ZettelId) -> usize {
        self.content_fetches.borrow().get(&id).copied().unwrap_or(0)
    }
}

impl ContentStore for MemoryStore {
    fn fetch_zettel(&self, id: ZettelId) -> Result<Zettel, StoreError> {
        *self.fetches.borrow_mut().entry(id).or_insert(0) += 1;
        if self.malformed.contains(&id) {
            return Err(StoreError::malformed(id, "missing metadata/content split"));
        }
        self.zettel
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound { id })
    }

    fn fetch_content(&self, id: ZettelId) -> Result<Vec<u8>, StoreError> {
        *self.content_fetches.borrow_mut().entry(id).or_insert(0) += 1;
        self.contents
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound { id })
    }

    fn list_children(&self, id: ZettelId) -> Result<Vec<ZettelId>, StoreError> {
        if !self.zettel.contains_key(&id) {
            return Err(StoreError::NotFound { id });
        }
        Ok(self.children.get(&id).cloned().unwrap_or_default())
    }
}
