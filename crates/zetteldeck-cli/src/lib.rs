//! zetteldeck CLI - Command-line interface library
//!
//! This library provides the CLI functionality for zetteldeck:
//! - Show: reveal.js slide show of a slide set
//! - Handout: printable handout of a slide set
//! - Zettel: a single zettel as page (table of contents for slide sets)
//! - Toc: table of contents of a slide set
//! - Content: raw content of a zettel, e.g. an image
//! - Svg: an SVG zettel as standalone XML document
//! - List: all or selected zettel with their titles
//!
//! # Library Usage
//!
//! ```ignore
//! use zetteldeck_cli::{render_command, Page};
//!
//! render_command(&options, Page::Show, id, Some(Path::new("deck.html")))?;
//! ```
//!
//! # Binary Usage
//!
//! ```bash
//! # Render a slide show
//! zetteldeck --store zettel/ show 20240101120000 --output deck.html
//!
//! # Render the handout with a configuration file
//! zetteldeck --store zettel/ --config zetteldeck.toml handout 20240101120000
//! ```

pub mod app;
pub mod dirstore;

// Re-export main entry point and types
pub use app::{content_command, list_command, open_presenter, render_command, render_page};
pub use app::svg_command;
pub use app::{run_cli, Page, StoreOptions};
pub use dirstore::DirStore;
