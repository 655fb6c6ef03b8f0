//! Page rendering entry points
//!
//! A [`Presenter`] ties a [`ContentStore`] to a [`PresenterConfig`] and
//! renders the pages of a zettel: slide show, handout, flat zettel view,
//! table of contents, zettel listing and raw content.

use tracing::{debug, info};
use zetteldeck_ast::ZettelId;

use crate::config::PresenterConfig;
use crate::error::{PresenterError, Result};
use crate::render::{self, HandoutRenderer, Renderer, RevealRenderer};
use crate::slideset::SlideSet;
use crate::store::ContentStore;

/// Prepended to SVG content served as a standalone document
pub const XML_PROLOG: &str = "<?xml version='1.0' encoding='utf-8'?>";

/// Renders pages from the zettel of one store
#[derive(Debug)]
pub struct Presenter<S> {
    store: S,
    config: PresenterConfig,
}

impl<S: ContentStore> Presenter<S> {
    pub fn new(store: S, config: PresenterConfig) -> Self {
        Self { store, config }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &PresenterConfig {
        &self.config
    }

    /// Overlay the configuration with the metadata of zettel `id`
    pub fn apply_config_zettel(&mut self, id: ZettelId) -> Result<()> {
        let zettel = self
            .store
            .fetch_zettel(id)
            .map_err(|e| PresenterError::retrieve(id, e))?;
        debug!("Reading presenter configuration from {}", id);
        self.config.apply_meta(&zettel.meta);
        self.config.validate()
    }

    /// Build and complete the slide set headed by `id`
    pub fn slide_set(&self, id: ZettelId) -> Result<SlideSet> {
        SlideSet::build(&self.store, id)
    }

    /// reveal.js slide show of slide set `id`
    pub fn render_show(&self, id: ZettelId) -> Result<String> {
        self.render_slide_set(id, &mut RevealRenderer::new(&self.config))
    }

    /// Handout of slide set `id`
    pub fn render_handout(&self, id: ZettelId) -> Result<String> {
        self.render_slide_set(id, &mut HandoutRenderer::new(&self.config))
    }

    /// Render slide set `id` with any renderer
    pub fn render_slide_set(&self, id: ZettelId, renderer: &mut dyn Renderer) -> Result<String> {
        let slides = self.slide_set(id)?;
        renderer.prepare(&self.store);
        let author = slides.author(&self.config.author);
        info!("Rendering {} of slide set {}", renderer.role(), id);
        Ok(renderer.render(&slides, author))
    }

    /// Zettel `id` as page, or its table of contents for slide sets
    pub fn render_zettel(&self, id: ZettelId) -> Result<String> {
        let zettel = self
            .store
            .fetch_zettel(id)
            .map_err(|e| PresenterError::retrieve(id, e))?;
        Ok(render::render_zettel(&self.store, &self.config, zettel))
    }

    /// Table of contents of slide set `id`
    pub fn render_toc(&self, id: ZettelId) -> Result<String> {
        let slides = self.slide_set(id)?;
        Ok(render::render_toc(&slides, &self.config))
    }

    /// Raw content of zettel `id`, e.g. an image
    pub fn content(&self, id: ZettelId) -> Result<Vec<u8>> {
        self.store
            .fetch_content(id)
            .map_err(|e| PresenterError::retrieve(id, e))
    }

    /// SVG content of zettel `id` as XML document
    pub fn svg(&self, id: ZettelId) -> Result<Vec<u8>> {
        let content = self.content(id)?;
        let mut data = Vec::with_capacity(XML_PROLOG.len() + content.len());
        data.extend_from_slice(XML_PROLOG.as_bytes());
        data.extend_from_slice(&content);
        Ok(data)
    }

    /// Listing of the zettel `ids`, optionally as result of `search`
    pub fn render_list(&self, ids: &[ZettelId], search: Option<&str>) -> String {
        render::render_list(&self.store, &self.config, ids, search)
    }
}
