use std::collections::BTreeMap;
use std::sync::{Arc, LazyLock};

use super::options::EmbedOptions;
use super::templates;
use crate::media::{MediaCategory, MediaHandler};

/// Extra height reserved for the QuickTime controller bar
const QUICKTIME_CONTROLS_HEIGHT: u32 = 16;
/// Extra height reserved for the Windows Media control and status bars
const WMEDIA_CONTROLS_HEIGHT: u32 = 45;

/// Everything a renderer needs to produce markup for one enclosure
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    /// Percent-decoded link, empty when the enclosure has none
    pub link: &'a str,
    pub title: Option<&'a str>,
    pub options: &'a EmbedOptions,
    /// Prefer plugin `<embed>` tags over script calls
    pub native: bool,
}

/// Produces markup for enclosures of one handler
///
/// Returning `None` hands the enclosure to the plain-link fallback.
pub trait EmbedRenderer: Send + Sync {
    fn render(&self, ctx: &RenderContext<'_>) -> Option<String>;
}

/// Native `<audio>`, `<video>` and `<picture>` elements
#[derive(Debug, Clone, Copy, Default)]
pub struct Html5Renderer;

impl EmbedRenderer for Html5Renderer {
    fn render(&self, ctx: &RenderContext<'_>) -> Option<String> {
        let render: fn(&str, Option<&str>, &EmbedOptions) -> String =
            match ctx.options.category()? {
                MediaCategory::Audio => templates::html_audio,
                MediaCategory::Video => templates::html_video,
                MediaCategory::Image => templates::html_image,
            };
        Some(render(ctx.link, ctx.title, ctx.options))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct QuickTimeRenderer;

impl EmbedRenderer for QuickTimeRenderer {
    fn render(&self, ctx: &RenderContext<'_>) -> Option<String> {
        let height = ctx.options.height.grown_by(QUICKTIME_CONTROLS_HEIGHT);
        Some(if ctx.native {
            templates::quicktime_embed(ctx.link, ctx.options, height)
        } else {
            templates::quicktime_script(ctx.link, ctx.options, height)
        })
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct WindowsMediaRenderer;

impl EmbedRenderer for WindowsMediaRenderer {
    fn render(&self, ctx: &RenderContext<'_>) -> Option<String> {
        let height = ctx.options.height.grown_by(WMEDIA_CONTROLS_HEIGHT);
        Some(if ctx.native {
            templates::wmedia_embed(ctx.link, ctx.options, height)
        } else {
            templates::wmedia_script(ctx.link, ctx.options, height)
        })
    }
}

static BUILTIN: LazyLock<RendererRegistry> = LazyLock::new(RendererRegistry::with_defaults);

/// Registry mapping handlers to renderer instances
#[derive(Clone)]
pub struct RendererRegistry {
    renderers: BTreeMap<MediaHandler, Arc<dyn EmbedRenderer>>,
}

impl RendererRegistry {
    /// Empty registry; every enclosure renders as a plain link
    pub fn new() -> Self {
        Self {
            renderers: BTreeMap::new(),
        }
    }

    /// Registry with the built-in renderer for every handler
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(MediaHandler::Html, Arc::new(Html5Renderer));
        registry.register(MediaHandler::QuickTime, Arc::new(QuickTimeRenderer));
        registry.register(MediaHandler::WindowsMedia, Arc::new(WindowsMediaRenderer));
        registry
    }

    /// Shared registry used by [`crate::enclosure::Enclosure::embed`]
    pub fn builtin() -> &'static RendererRegistry {
        &BUILTIN
    }

    /// Register a renderer, replacing any previous one for the handler
    pub fn register(&mut self, handler: MediaHandler, renderer: Arc<dyn EmbedRenderer>) {
        self.renderers.insert(handler, renderer);
    }

    pub fn get(&self, handler: MediaHandler) -> Option<Arc<dyn EmbedRenderer>> {
        self.renderers.get(&handler).cloned()
    }

    pub fn has_renderer(&self, handler: MediaHandler) -> bool {
        self.renderers.contains_key(&handler)
    }

    /// Render with the handler's renderer, falling back to a plain link
    pub fn render(&self, ctx: &RenderContext<'_>) -> String {
        let rendered = ctx
            .options
            .handler
            .and_then(|handler| self.renderers.get(&handler))
            .and_then(|renderer| renderer.render(ctx));

        rendered.unwrap_or_else(|| {
            tracing::debug!(
                link = ctx.link,
                mime = %ctx.options.mime,
                "no inline renderer, using plain link"
            );
            templates::fallback_link(ctx.link, ctx.options)
        })
    }
}

impl Default for RendererRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embed::options::Dimension;

    fn options(handler: Option<MediaHandler>, mime_type: &str) -> EmbedOptions {
        EmbedOptions {
            audio: String::new(),
            video: String::new(),
            alt: "Download".to_string(),
            altclass: String::new(),
            r#loop: "false".to_string(),
            width: Dimension::Pixels(480),
            height: Dimension::Pixels(360),
            bgcolor: "#ffffff".to_string(),
            widescreen: false,
            handler,
            mime_type: Some(mime_type.to_string()),
            mime: mime_type.split('/').next().unwrap_or_default().to_string(),
            placeholder: None,
        }
    }

    fn ctx<'a>(options: &'a EmbedOptions, native: bool) -> RenderContext<'a> {
        RenderContext {
            link: "http://x/media",
            title: None,
            options,
            native,
        }
    }

    struct Fixed;

    impl EmbedRenderer for Fixed {
        fn render(&self, _ctx: &RenderContext<'_>) -> Option<String> {
            Some("<custom/>".to_string())
        }
    }

    #[test]
    fn test_defaults_cover_every_handler() {
        let registry = RendererRegistry::with_defaults();
        for handler in MediaHandler::ALL {
            assert!(registry.has_renderer(handler));
        }
    }

    #[test]
    fn test_html5_without_category_falls_back() {
        let opts = options(Some(MediaHandler::Html), "application/ogg");
        let html = RendererRegistry::builtin().render(&ctx(&opts, true));
        assert_eq!(html, "<a href=\"http://x/media\" class=\"\">Download</a>");
    }

    #[test]
    fn test_quicktime_grows_height() {
        let opts = options(Some(MediaHandler::QuickTime), "video/quicktime");
        let html = RendererRegistry::builtin().render(&ctx(&opts, true));
        assert!(html.contains("height=\"376\""));
    }

    #[test]
    fn test_wmedia_grows_height() {
        let opts = options(Some(MediaHandler::WindowsMedia), "video/x-ms-wmv");
        let html = RendererRegistry::builtin().render(&ctx(&opts, false));
        assert!(html.contains("'480', '405'"));
    }

    #[test]
    fn test_register_replaces_renderer() {
        let mut registry = RendererRegistry::with_defaults();
        registry.register(MediaHandler::WindowsMedia, Arc::new(Fixed));

        let opts = options(Some(MediaHandler::WindowsMedia), "video/x-ms-wmv");
        assert_eq!(registry.render(&ctx(&opts, true)), "<custom/>");
    }

    #[test]
    fn test_empty_registry_renders_links() {
        let registry = RendererRegistry::new();
        let opts = options(Some(MediaHandler::Html), "audio/mp3");
        assert!(registry.render(&ctx(&opts, false)).starts_with("<a href="));
        assert!(registry.get(MediaHandler::Html).is_none());
    }
}
