//! Zettel root definition
//!
//! A zettel is the atomic content unit: an identifier, its metadata and the
//! evaluated block content.

use serde::{Deserialize, Serialize};

use crate::block::Block;
use crate::id::ZettelId;
use crate::meta::Meta;

/// A complete, evaluated zettel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zettel {
    pub id: ZettelId,
    #[serde(default)]
    pub meta: Meta,
    #[serde(default)]
    pub content: Vec<Block>,
}

impl Zettel {
    /// Create an empty zettel
    pub fn new(id: ZettelId) -> Self {
        Self {
            id,
            meta: Meta::new(),
            content: Vec::new(),
        }
    }

    /// Builder-style metadata setter
    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.meta.set(key, value);
        self
    }

    /// Builder-style content setter
    pub fn with_content(mut self, content: Vec<Block>) -> Self {
        self.content = content;
        self
    }

    /// Add a block to the content
    pub fn push(&mut self, block: Block) {
        self.content.push(block);
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }
}
