//! Embeddable markup for enclosures.
//!
//! Rendering happens in two steps:
//!
//! 1. Caller options ([`RawOptions`], either an [`OptionOverrides`] value or a
//!    `key:value,key:value` string) are resolved into [`EmbedOptions`], which
//!    fills in defaults and derives width, height and placeholder from the
//!    enclosure's media type.
//! 2. The enclosure's handler picks a renderer from the [`RendererRegistry`]:
//!    HTML5 elements, QuickTime or Windows Media plugin tags (or script calls),
//!    and a plain link when nothing else applies.
//!
//! ## Example
//!
//! ```rust
//! use feedmedia::enclosure::{Enclosure, EnclosureData};
//!
//! let enclosure = Enclosure::new(
//!     EnclosureData::builder()
//!         .link("http://example.com/video.wmv")
//!         .build(),
//! );
//! let html = enclosure.embed("", true);
//! assert!(html.contains("type=\"application/x-mplayer2\""));
//! assert!(html.contains("height=\"405\""));
//! ```

mod options;
mod renderers;
mod templates;

pub use options::{Dimension, DimensionError, EmbedOptions, OptionOverrides, RawOptions};
pub use renderers::{
    EmbedRenderer, Html5Renderer, QuickTimeRenderer, RenderContext, RendererRegistry,
    WindowsMediaRenderer,
};
pub use templates::display_title;

use crate::enclosure::Enclosure;

impl Enclosure {
    /// Resolve caller options for this enclosure
    pub fn embed_options(&self, options: impl Into<RawOptions>) -> EmbedOptions {
        EmbedOptions::resolve(self, options)
    }

    /// Markup embedding this enclosure
    ///
    /// `native` selects plugin `<embed>` tags instead of script calls for
    /// QuickTime and Windows Media; HTML5 media ignores it.
    pub fn embed(&self, options: impl Into<RawOptions>, native: bool) -> String {
        let options = self.embed_options(options);
        self.render(&options, native)
    }

    /// Shorthand for `embed(options, true)`
    pub fn native_embed(&self, options: impl Into<RawOptions>) -> String {
        self.embed(options, true)
    }

    /// Render already resolved options with the built-in renderers
    pub fn render(&self, options: &EmbedOptions, native: bool) -> String {
        self.render_with(RendererRegistry::builtin(), options, native)
    }

    /// Render already resolved options with a caller-provided registry
    pub fn render_with(
        &self,
        registry: &RendererRegistry,
        options: &EmbedOptions,
        native: bool,
    ) -> String {
        let link = self.link().unwrap_or_default();
        let ctx = RenderContext {
            link: &link,
            title: self.title(),
            options,
            native,
        };
        registry.render(&ctx)
    }
}
