//! Media type classification.
//!
//! Feeds routinely misreport or omit the MIME type of an enclosure. This
//! module maps the declared type and the enclosure URL onto:
//!
//! - a canonical MIME type (the declared one when recognised, otherwise one
//!   inferred from the URL's file extension), and
//! - a [`MediaHandler`], the playback mechanism used when embedding.
//!
//! ## Example
//!
//! ```rust
//! use feedmedia::media::{resolve_canonical_type, resolve_handler, MediaHandler};
//!
//! let kind = resolve_canonical_type(Some("application/octet-stream"), Some("http://x/a.mp3"));
//! assert_eq!(kind.as_deref(), Some("audio/mp3"));
//! assert_eq!(resolve_handler(None, Some("http://x/clip.mov")), Some(MediaHandler::QuickTime));
//! ```

mod resolver;
mod tables;

pub use resolver::{
    extension_of, handler_for_type, resolve_canonical_type, resolve_handler, type_from_extension,
};
pub use tables::{EXTENSION_TYPES, TYPES_HTML, TYPES_QUICKTIME, TYPES_WMEDIA};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Playback mechanism selected for an enclosure
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
pub enum MediaHandler {
    /// Native HTML5 `<audio>`, `<video>` and `<picture>` elements
    #[serde(rename = "html")]
    Html,
    /// QuickTime browser plugin
    #[serde(rename = "quicktime")]
    QuickTime,
    /// Windows Media Player plugin
    #[serde(rename = "wmedia")]
    WindowsMedia,
}

impl MediaHandler {
    /// Every handler, in lookup order
    pub const ALL: [MediaHandler; 3] = [
        MediaHandler::Html,
        MediaHandler::QuickTime,
        MediaHandler::WindowsMedia,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MediaHandler::Html => "html",
            MediaHandler::QuickTime => "quicktime",
            MediaHandler::WindowsMedia => "wmedia",
        }
    }

    /// MIME types owned by this handler
    pub fn types(&self) -> &'static [&'static str] {
        match self {
            MediaHandler::Html => TYPES_HTML,
            MediaHandler::QuickTime => TYPES_QUICKTIME,
            MediaHandler::WindowsMedia => TYPES_WMEDIA,
        }
    }

    pub fn owns(&self, mime_type: &str) -> bool {
        self.types().contains(&mime_type)
    }
}

impl fmt::Display for MediaHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown media handler: {0}")]
pub struct UnknownHandler(String);

impl FromStr for MediaHandler {
    type Err = UnknownHandler;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MediaHandler::ALL
            .into_iter()
            .find(|handler| handler.as_str() == s)
            .ok_or_else(|| UnknownHandler(s.to_string()))
    }
}

/// Top-level media category with a dedicated HTML5 template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaCategory {
    Audio,
    Video,
    Image,
}

impl MediaCategory {
    /// Category for a top-level type name such as `audio`
    pub fn from_top_level(name: &str) -> Option<Self> {
        if name == mime::AUDIO.as_str() {
            Some(MediaCategory::Audio)
        } else if name == mime::VIDEO.as_str() {
            Some(MediaCategory::Video)
        } else if name == mime::IMAGE.as_str() {
            Some(MediaCategory::Image)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MediaCategory::Audio => "audio",
            MediaCategory::Video => "video",
            MediaCategory::Image => "image",
        }
    }
}

/// Top-level part of a MIME type (`video` for `video/mp4`), empty when there is no type
pub fn top_level_type(mime_type: Option<&str>) -> String {
    let Some(mime_type) = mime_type else {
        return String::new();
    };

    match mime_type.parse::<mime::Mime>() {
        Ok(parsed) => parsed.type_().as_str().to_string(),
        Err(_) => mime_type
            .split_once('/')
            .map(|(top, _)| top)
            .unwrap_or(mime_type)
            .to_string(),
    }
}
