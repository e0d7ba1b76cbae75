//! Media enclosure attached to a feed item.
//!
//! An [`Enclosure`] is built once from an [`EnclosureData`] record and never
//! changes afterwards. Its playback handler is resolved at construction and
//! stored alongside the raw fields.
//!
//! ## Example
//!
//! ```rust
//! use feedmedia::enclosure::{Enclosure, EnclosureData};
//! use feedmedia::media::MediaHandler;
//!
//! let enclosure = Enclosure::new(
//!     EnclosureData::builder()
//!         .link("http://example.com/piece.mid")
//!         .build(),
//! );
//! assert_eq!(enclosure.handler(), Some(MediaHandler::QuickTime));
//! assert_eq!(enclosure.real_type().as_deref(), Some("audio/midi"));
//! ```

mod types;

pub use types::{
    Caption, Category, Copyright, Credit, EnclosureData, Expression, Rating, Restriction,
    UnknownExpression,
};

use serde::{Deserialize, Serialize};

use crate::humanize::{self, ByteSize};
use crate::media::{self, MediaHandler};

/// Immutable enclosure with its resolved handler
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(from = "EnclosureData", into = "EnclosureData")]
pub struct Enclosure {
    data: EnclosureData,
    handler: Option<MediaHandler>,
}

impl Enclosure {
    pub fn new(data: EnclosureData) -> Self {
        // Resolved last, from the fully populated record
        let handler = media::resolve_handler(data.mime_type.as_deref(), data.link.as_deref());

        tracing::debug!(
            link = data.link.as_deref().unwrap_or_default(),
            declared = data.mime_type.as_deref().unwrap_or_default(),
            handler = handler.map(|h| h.as_str()).unwrap_or("none"),
            "enclosure classified"
        );

        Self { data, handler }
    }

    /// Raw fields this enclosure was built from
    pub fn data(&self) -> &EnclosureData {
        &self.data
    }

    /// Playback handler resolved at construction
    pub fn handler(&self) -> Option<MediaHandler> {
        self.handler
    }

    /// Canonical MIME type (declared if recognised, else inferred from the link)
    pub fn real_type(&self) -> Option<String> {
        media::resolve_canonical_type(self.data.mime_type.as_deref(), self.data.link.as_deref())
    }

    /// File extension of the link's path
    pub fn extension(&self) -> Option<String> {
        self.data.link.as_deref().and_then(media::extension_of)
    }

    /// Percent-decoded link
    pub fn link(&self) -> Option<String> {
        self.data.link.as_deref().map(decode_link)
    }

    /// Declared MIME type, unmodified
    pub fn mime_type(&self) -> Option<&str> {
        self.data.mime_type.as_deref()
    }

    /// Length in bytes
    pub fn length(&self) -> Option<u64> {
        self.data.length.map(|size| size.as_u64())
    }

    /// Length in MiB, rounded to two decimals
    pub fn size_mib(&self) -> Option<f64> {
        self.data.length.map(|size| size.as_mib())
    }

    pub fn length_human(&self) -> Option<String> {
        self.data.length.as_ref().map(ByteSize::to_human_readable)
    }

    pub fn bitrate(&self) -> Option<&str> {
        self.data.bitrate.as_deref()
    }

    pub fn caption(&self, index: usize) -> Option<&Caption> {
        self.data.captions.get(index)
    }

    pub fn captions(&self) -> &[Caption] {
        &self.data.captions
    }

    pub fn category(&self, index: usize) -> Option<&Category> {
        self.data.categories.get(index)
    }

    pub fn categories(&self) -> &[Category] {
        &self.data.categories
    }

    pub fn channels(&self) -> Option<u32> {
        self.data.channels
    }

    pub fn copyright(&self) -> Option<&Copyright> {
        self.data.copyright.as_ref()
    }

    pub fn credit(&self, index: usize) -> Option<&Credit> {
        self.data.credits.get(index)
    }

    pub fn credits(&self) -> &[Credit] {
        &self.data.credits
    }

    pub fn description(&self) -> Option<&str> {
        self.data.description.as_deref()
    }

    /// Duration in seconds
    pub fn duration(&self) -> Option<u64> {
        self.data.duration
    }

    /// Duration as `[h:]mm:ss`
    pub fn duration_hms(&self) -> Option<String> {
        self.data.duration.map(humanize::format_hms)
    }

    pub fn expression(&self) -> Expression {
        self.data.expression.unwrap_or_default()
    }

    pub fn framerate(&self) -> Option<&str> {
        self.data.framerate.as_deref()
    }

    pub fn hash(&self, index: usize) -> Option<&str> {
        self.data.hashes.get(index).map(String::as_str)
    }

    pub fn hashes(&self) -> &[String] {
        &self.data.hashes
    }

    pub fn height(&self) -> Option<&str> {
        self.data.height.as_deref()
    }

    pub fn keyword(&self, index: usize) -> Option<&str> {
        self.data.keywords.get(index).map(String::as_str)
    }

    pub fn keywords(&self) -> &[String] {
        &self.data.keywords
    }

    pub fn language(&self) -> Option<&str> {
        self.data.lang.as_deref()
    }

    pub fn medium(&self) -> Option<&str> {
        self.data.medium.as_deref()
    }

    pub fn player(&self) -> Option<&str> {
        self.data.player.as_deref()
    }

    pub fn rating(&self, index: usize) -> Option<&Rating> {
        self.data.ratings.get(index)
    }

    pub fn ratings(&self) -> &[Rating] {
        &self.data.ratings
    }

    pub fn restriction(&self, index: usize) -> Option<&Restriction> {
        self.data.restrictions.get(index)
    }

    pub fn restrictions(&self) -> &[Restriction] {
        &self.data.restrictions
    }

    pub fn sampling_rate(&self) -> Option<&str> {
        self.data.samplingrate.as_deref()
    }

    pub fn thumbnail(&self, index: usize) -> Option<&str> {
        self.data.thumbnails.get(index).map(String::as_str)
    }

    pub fn thumbnails(&self) -> &[String] {
        &self.data.thumbnails
    }

    pub fn title(&self) -> Option<&str> {
        self.data.title.as_deref()
    }

    pub fn width(&self) -> Option<&str> {
        self.data.width.as_deref()
    }
}

impl From<EnclosureData> for Enclosure {
    fn from(data: EnclosureData) -> Self {
        Self::new(data)
    }
}

impl From<Enclosure> for EnclosureData {
    fn from(enclosure: Enclosure) -> Self {
        enclosure.data
    }
}

/// Decode `%XX` escapes and `+` like a form-encoded value; invalid UTF-8 leaves the link untouched
fn decode_link(link: &str) -> String {
    let plus_decoded = link.replace('+', "%20");
    match urlencoding::decode(&plus_decoded) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => link.to_string(),
    }
}
