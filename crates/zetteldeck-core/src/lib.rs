//! zetteldeck-core - Slide decks from zettel
//!
//! Assembles slide sets from a table-of-contents zettel, splits zettel into
//! slides and renders them as reveal.js slide show, handout, flat zettel page
//! or table of contents.
//!
//! # Example
//!
//! ```
//! use zetteldeck_ast::{meta::KEY_TITLE, Block, Zettel, ZettelId};
//! use zetteldeck_core::{MemoryStore, Presenter, PresenterConfig};
//!
//! let deck = ZettelId::new(10).unwrap();
//! let slide = ZettelId::new(11).unwrap();
//!
//! let mut store = MemoryStore::new();
//! store.insert(Zettel::new(deck).with_meta(KEY_TITLE, "Deck"));
//! store.insert(
//!     Zettel::new(slide)
//!         .with_meta(KEY_TITLE, "Hello")
//!         .with_content(vec![Block::paragraph("World")]),
//! );
//! store.set_children(deck, vec![slide]);
//!
//! let presenter = Presenter::new(store, PresenterConfig::default());
//! let html = presenter.render_show(deck).unwrap();
//! assert!(html.contains("<h1>Hello</h1>"));
//! assert!(html.contains("<p>World</p>"));
//! ```

pub mod chain;
pub mod collect;
pub mod config;
pub mod error;
pub mod html;
pub mod presenter;
pub mod render;
pub mod slide;
pub mod slideset;
pub mod split;
pub mod store;
pub mod transform;

// Re-export main types and functions
pub use chain::{SlideChain, SlideIdx, SlideInfo};
pub use config::PresenterConfig;
pub use error::{PresenterError, Result, StoreError};
pub use presenter::Presenter;
pub use presenter::XML_PROLOG;
pub use render::{
    render_list, render_toc, render_zettel, HandoutRenderer, Renderer, RevealRenderer,
};
pub use slide::{Slide, SlideRole};
pub use slideset::{Image, SlideSet};
pub use split::split_slide;
pub use store::{ContentStore, MemoryStore};
pub use transform::{RenderFlags, Transformer};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert_eq!(VERSION, "0.1.0");
    }
}
