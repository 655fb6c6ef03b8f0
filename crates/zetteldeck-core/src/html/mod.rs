//! HTML output tree and serializer

mod node;
mod writer;

pub use node::{Element, Node};
pub use writer::{to_html, HtmlWriter};
