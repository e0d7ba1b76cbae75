//! Markup templates for each embedding strategy
//!
//! Values are interpolated verbatim; callers are expected to pass benign
//! links and option values.

use super::options::{Dimension, EmbedOptions};

const QUICKTIME_PLUGIN_PAGE: &str = "http://apple.com/quicktime/download/";
const WMEDIA_PLUGIN_TYPE: &str = "application/x-mplayer2";
const FULL_WIDTH_STYLE: &str = "width: 100%; height: auto;";

/// Title to display, falling back to the last path segment of the link
pub fn display_title(link: &str, title: Option<&str>) -> String {
    match title {
        Some(title) if !title.is_empty() => title.to_string(),
        _ => link.rsplit('/').next().unwrap_or_default().to_string(),
    }
}

fn figcaption(link: &str, title: &str) -> String {
    format!("\t<figcaption><a href=\"{link}\">{title}</a></figcaption>\n")
}

pub fn html_audio(link: &str, title: Option<&str>, options: &EmbedOptions) -> String {
    let title = display_title(link, title);
    let mime_type = options.mime_type.as_deref().unwrap_or_default();

    format!(
        "<figure>\n\
         \t<audio controls preload=\"none\" loop=\"{looping}\" title=\"{title}\">\n\
         \t\t<source type=\"{mime_type}\" src=\"{link}\" />\n\
         \t\t<p>Your browser does not support HTML5 audio. Here is a <a href=\"{link}\">link to the audio</a> instead.</p>\n\
         \t</audio>\n\
         {caption}\
         </figure>",
        looping = options.r#loop,
        caption = figcaption(link, &title),
    )
}

pub fn html_video(link: &str, title: Option<&str>, options: &EmbedOptions) -> String {
    let title = display_title(link, title);
    let mime_type = options.mime_type.as_deref().unwrap_or_default();

    format!(
        "<figure>\n\
         \t<video controls preload=\"none\" poster=\"{poster}\" loop=\"{looping}\" title=\"{title}\" aria-label=\"{title}\" style=\"{FULL_WIDTH_STYLE}\">\n\
         \t\t<source type=\"{mime_type}\" src=\"{link}\" />\n\
         \t\t<a href=\"{link}\"><img src=\"{poster}\" style=\"{FULL_WIDTH_STYLE}\" alt=\"Your browser does not support HTML5 video. Click here to get directly to the video instead.\" /></a>\n\
         \t</video>\n\
         {caption}\
         </figure>",
        poster = options.video,
        looping = options.r#loop,
        caption = figcaption(link, &title),
    )
}

pub fn html_image(link: &str, title: Option<&str>, _options: &EmbedOptions) -> String {
    let title = display_title(link, title);

    format!(
        "<figure>\n\
         \t<picture><img src=\"{link}\" alt=\"\" title=\"{title}\" style=\"{FULL_WIDTH_STYLE}\" /></picture>\n\
         {caption}\
         </figure>",
        caption = figcaption(link, &title),
    )
}

/// QuickTime plugin `<embed>`; `height` already includes the controller bar
pub fn quicktime_embed(link: &str, options: &EmbedOptions, height: Dimension) -> String {
    let mime_type = options.mime_type.as_deref().unwrap_or_default();
    let (source, controller) = match options.placeholder.as_deref() {
        Some(placeholder) => (format!("href=\"{link}\" src=\"{placeholder}\""), false),
        None => (format!("src=\"{link}\""), true),
    };

    format!(
        "<embed type=\"{mime_type}\" style=\"cursor:hand; cursor:pointer;\" {source} width=\"{width}\" height=\"{height}\" autoplay=\"false\" target=\"myself\" controller=\"{controller}\" loop=\"{looping}\" scale=\"aspect\" bgcolor=\"{bgcolor}\" pluginspage=\"{QUICKTIME_PLUGIN_PAGE}\"></embed>",
        width = options.width,
        looping = options.r#loop,
        bgcolor = options.bgcolor,
    )
}

/// Call to the client-side `embed_quicktime` helper
pub fn quicktime_script(link: &str, options: &EmbedOptions, height: Dimension) -> String {
    format!(
        "<script type='text/javascript'>embed_quicktime('{mime_type}', '{bgcolor}', '{width}', '{height}', '{link}', '{placeholder}', '{looping}');</script>",
        mime_type = options.mime_type.as_deref().unwrap_or_default(),
        bgcolor = options.bgcolor,
        width = options.width,
        placeholder = options.placeholder.as_deref().unwrap_or_default(),
        looping = options.r#loop,
    )
}

/// Windows Media plugin `<embed>`; `height` already includes the control bar
pub fn wmedia_embed(link: &str, options: &EmbedOptions, height: Dimension) -> String {
    format!(
        "<embed type=\"{WMEDIA_PLUGIN_TYPE}\" src=\"{link}\" autosize=\"1\" width=\"{width}\" height=\"{height}\" showcontrols=\"1\" showstatusbar=\"0\" showdisplay=\"0\" autostart=\"0\"></embed>",
        width = options.width,
    )
}

/// Call to the client-side `embed_wmedia` helper
pub fn wmedia_script(link: &str, options: &EmbedOptions, height: Dimension) -> String {
    format!(
        "<script type='text/javascript'>embed_wmedia('{width}', '{height}', '{link}');</script>",
        width = options.width,
    )
}

/// Plain link for media nothing can play inline
pub fn fallback_link(link: &str, options: &EmbedOptions) -> String {
    format!(
        "<a href=\"{link}\" class=\"{altclass}\">{alt}</a>",
        altclass = options.altclass,
        alt = options.alt,
    )
}
