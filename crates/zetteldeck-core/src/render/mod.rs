//! HTML pages
//!
//! Slide sets are rendered through a [`Renderer`]: [`RevealRenderer`] for the
//! slide show and [`HandoutRenderer`] for the printable handout. Single zettel,
//! tables of contents and zettel listings have their own page functions.

mod handout;
mod layout;
mod list;
mod reveal;
mod toc;
mod zettel;

pub use handout::HandoutRenderer;
pub use layout::{DEFAULT_CSS, DISPLAY_TIME_FORMAT};
pub use list::render_list;
pub use reveal::RevealRenderer;
pub use toc::render_toc;
pub use zettel::render_zettel;

use crate::slide::SlideRole;
use crate::slideset::SlideSet;
use crate::store::ContentStore;

/// Page generator for a complete slide set
pub trait Renderer {
    /// Slides of this role are included
    fn role(&self) -> SlideRole;

    /// Load additional resources before rendering
    fn prepare(&mut self, store: &dyn ContentStore);

    /// Produce the HTML document
    fn render(&self, slides: &SlideSet, author: &str) -> String;
}
