use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::enclosure::Enclosure;
use crate::media::{self, MediaCategory, MediaHandler};

const VIDEO_DEFAULT_WIDTH: u32 = 480;
const VIDEO_DEFAULT_HEIGHT: u32 = 360;
const VIDEO_DEFAULT_HEIGHT_WIDESCREEN: u32 = 270;
const OTHER_DEFAULT_HEIGHT: u32 = 376;

#[derive(Debug, Error)]
#[error("invalid dimension '{0}', expected \"auto\", a pixel count or a percentage")]
pub struct DimensionError(String);

/// Width or height of embedded media
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Dimension {
    /// Derived from the media category and the other dimension
    #[default]
    Auto,
    Pixels(u32),
    Percent(u32),
}

impl Dimension {
    pub const FULL_WIDTH: Dimension = Dimension::Percent(100);

    /// Parse a caller-supplied value without failing
    ///
    /// Anything that is neither `auto` nor a percentage is read as a pixel
    /// count from its leading digits (`"480px"` is 480, `"wide"` is 0).
    pub fn lenient(value: &str) -> Self {
        let value = value.trim();
        if value.eq_ignore_ascii_case("auto") {
            return Dimension::Auto;
        }
        match value.strip_suffix('%') {
            Some(percent) => Dimension::Percent(leading_number(percent)),
            None => Dimension::Pixels(leading_number(value)),
        }
    }

    pub fn is_auto(&self) -> bool {
        matches!(self, Dimension::Auto)
    }

    /// Numeric part of the dimension, 0 for `auto`
    pub fn value(&self) -> u32 {
        match self {
            Dimension::Auto => 0,
            Dimension::Pixels(n) | Dimension::Percent(n) => *n,
        }
    }

    /// Pixel dimension grown by `extra`, used to make room for plugin controls
    pub fn grown_by(&self, extra: u32) -> Dimension {
        Dimension::Pixels(self.value().saturating_add(extra))
    }

    fn scaled(&self, numerator: f64, denominator: f64) -> Dimension {
        let scaled = (self.value() as f64 / denominator * numerator).round();
        Dimension::Pixels(scaled as u32)
    }
}

fn leading_number(value: &str) -> u32 {
    let value = value.trim();
    let end = value
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(value.len());
    // overlong digit runs saturate
    value[..end]
        .parse()
        .unwrap_or(if end == 0 { 0 } else { u32::MAX })
}

impl FromStr for Dimension {
    type Err = DimensionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("auto") {
            return Ok(Dimension::Auto);
        }
        if let Some(percent) = trimmed.strip_suffix('%') {
            return percent
                .parse()
                .map(Dimension::Percent)
                .map_err(|_| DimensionError(s.to_string()));
        }
        trimmed
            .parse()
            .map(Dimension::Pixels)
            .map_err(|_| DimensionError(s.to_string()))
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Auto => f.write_str("auto"),
            Dimension::Pixels(n) => write!(f, "{n}"),
            Dimension::Percent(n) => write!(f, "{n}%"),
        }
    }
}

impl Serialize for Dimension {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Dimension::Pixels(n) => serializer.serialize_u32(*n),
            other => serializer.collect_str(other),
        }
    }
}

impl<'de> Deserialize<'de> for Dimension {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct DimensionVisitor;

        impl<'de> serde::de::Visitor<'de> for DimensionVisitor {
            type Value = Dimension;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("\"auto\", a pixel count (e.g., 480) or a percentage (e.g., \"100%\")")
            }

            fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                u32::try_from(v)
                    .map(Dimension::Pixels)
                    .map_err(|_| E::custom(format!("dimension out of range: {v}")))
            }

            fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                u32::try_from(v)
                    .map(Dimension::Pixels)
                    .map_err(|_| E::custom(format!("dimension out of range: {v}")))
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                v.parse::<Dimension>().map_err(serde::de::Error::custom)
            }
        }

        deserializer.deserialize_any(DimensionVisitor)
    }
}

/// Partial embed configuration; unset fields keep the value underneath
///
/// Used both for caller options and for the `[embed]` section of the
/// configuration file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct OptionOverrides {
    /// Placeholder image for audio
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio: Option<String>,
    /// Placeholder image for video, also used as the HTML5 poster
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub altclass: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#loop: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<Dimension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<Dimension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bgcolor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub widescreen: Option<bool>,
}

impl OptionOverrides {
    /// Parse a `key:value,key:value` option string
    ///
    /// Only the first `:` separates key from value, so values may contain
    /// colons (`video:http://x/poster.jpg`). Entries without a `:` and
    /// unknown keys are skipped.
    pub fn parse(options: &str) -> Self {
        let mut overrides = Self::default();

        for entry in options.split(',') {
            let Some((key, value)) = entry.split_once(':') else {
                if !entry.trim().is_empty() {
                    tracing::debug!(entry, "ignoring embed option without ':'");
                }
                continue;
            };

            let value = value.trim().to_string();
            match key.trim() {
                "audio" => overrides.audio = Some(value),
                "video" => overrides.video = Some(value),
                "alt" => overrides.alt = Some(value),
                "altclass" => overrides.altclass = Some(value),
                "loop" => overrides.r#loop = Some(value),
                "width" => overrides.width = Some(Dimension::lenient(&value)),
                "height" => overrides.height = Some(Dimension::lenient(&value)),
                "bgcolor" => overrides.bgcolor = Some(value),
                "widescreen" => overrides.widescreen = Some(parse_flag(&value)),
                other => tracing::debug!(key = other, "ignoring unknown embed option"),
            }
        }

        overrides
    }

    /// Layer `top` over `self`; fields set in `top` win
    pub fn overlay(self, top: OptionOverrides) -> OptionOverrides {
        OptionOverrides {
            audio: top.audio.or(self.audio),
            video: top.video.or(self.video),
            alt: top.alt.or(self.alt),
            altclass: top.altclass.or(self.altclass),
            r#loop: top.r#loop.or(self.r#loop),
            width: top.width.or(self.width),
            height: top.height.or(self.height),
            bgcolor: top.bgcolor.or(self.bgcolor),
            widescreen: top.widescreen.or(self.widescreen),
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "true" | "1" | "yes" | "on"
    )
}

/// Caller-supplied embed options before normalization
#[derive(Debug, Clone, PartialEq)]
pub enum RawOptions {
    /// Typed key/value configuration
    Structured(OptionOverrides),
    /// `key:value,key:value` string
    Delimited(String),
}

impl RawOptions {
    pub fn into_overrides(self) -> OptionOverrides {
        match self {
            RawOptions::Structured(overrides) => overrides,
            RawOptions::Delimited(options) => OptionOverrides::parse(&options),
        }
    }
}

impl Default for RawOptions {
    fn default() -> Self {
        RawOptions::Structured(OptionOverrides::default())
    }
}

impl From<OptionOverrides> for RawOptions {
    fn from(overrides: OptionOverrides) -> Self {
        RawOptions::Structured(overrides)
    }
}

impl From<&str> for RawOptions {
    fn from(options: &str) -> Self {
        RawOptions::Delimited(options.to_string())
    }
}

impl From<String> for RawOptions {
    fn from(options: String) -> Self {
        RawOptions::Delimited(options)
    }
}

/// Fully resolved embed configuration for one enclosure
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmbedOptions {
    pub audio: String,
    pub video: String,
    pub alt: String,
    pub altclass: String,
    pub r#loop: String,
    pub width: Dimension,
    pub height: Dimension,
    pub bgcolor: String,
    pub widescreen: bool,
    /// Handler of the enclosure
    pub handler: Option<MediaHandler>,
    /// Canonical MIME type of the enclosure
    #[serde(rename = "type")]
    pub mime_type: Option<String>,
    /// Top-level part of `mime_type`, empty when the type is unknown
    pub mime: String,
    /// Image shown before playback starts, audio and video only
    pub placeholder: Option<String>,
}

impl EmbedOptions {
    /// Resolve caller options over the built-in defaults
    pub fn resolve(enclosure: &Enclosure, raw: impl Into<RawOptions>) -> Self {
        Self::resolve_with(enclosure, &OptionOverrides::default(), raw)
    }

    /// Resolve caller options over site-wide defaults over the built-in defaults
    pub fn resolve_with(
        enclosure: &Enclosure,
        site_defaults: &OptionOverrides,
        raw: impl Into<RawOptions>,
    ) -> Self {
        let merged = site_defaults.clone().overlay(raw.into().into_overrides());
        let mime_type = enclosure.real_type();

        let mut options = EmbedOptions {
            audio: merged.audio.unwrap_or_default(),
            video: merged
                .video
                .or_else(|| enclosure.thumbnail(0).map(str::to_string))
                .unwrap_or_default(),
            alt: merged.alt.unwrap_or_default(),
            altclass: merged.altclass.unwrap_or_default(),
            r#loop: merged.r#loop.unwrap_or_else(|| "false".to_string()),
            width: merged.width.unwrap_or_default(),
            height: merged.height.unwrap_or_default(),
            bgcolor: merged.bgcolor.unwrap_or_else(|| "#ffffff".to_string()),
            widescreen: merged.widescreen.unwrap_or(false),
            handler: enclosure.handler(),
            mime: media::top_level_type(mime_type.as_deref()),
            mime_type,
            placeholder: None,
        };

        // Width first: the video height rule looks at the resolved width
        options.resolve_width();
        options.resolve_height();
        options.placeholder = options.select_placeholder();

        tracing::trace!(
            width = %options.width,
            height = %options.height,
            mime = %options.mime,
            "embed options resolved"
        );

        options
    }

    /// Category with a dedicated HTML5 template, if any
    pub fn category(&self) -> Option<MediaCategory> {
        MediaCategory::from_top_level(&self.mime)
    }

    fn is_mime(&self, category: MediaCategory) -> bool {
        self.mime == category.as_str()
    }

    fn resolve_width(&mut self) {
        if !self.width.is_auto() {
            return;
        }

        self.width = Dimension::FULL_WIDTH;
        if self.is_mime(MediaCategory::Video) {
            self.width = if self.height.is_auto() {
                Dimension::Pixels(VIDEO_DEFAULT_WIDTH)
            } else if self.widescreen {
                self.height.scaled(16.0, 9.0)
            } else {
                self.height.scaled(4.0, 3.0)
            };
        }
    }

    fn resolve_height(&mut self) {
        if !self.height.is_auto() {
            // audio never shows a visual frame
            if self.is_mime(MediaCategory::Audio) {
                self.height = Dimension::Pixels(0);
            }
            return;
        }

        self.height = if self.is_mime(MediaCategory::Audio) {
            Dimension::Pixels(0)
        } else if self.is_mime(MediaCategory::Video) {
            if self.width.is_auto() {
                Dimension::Pixels(if self.widescreen {
                    VIDEO_DEFAULT_HEIGHT_WIDESCREEN
                } else {
                    VIDEO_DEFAULT_HEIGHT
                })
            } else if self.widescreen {
                self.width.scaled(9.0, 16.0)
            } else {
                self.width.scaled(3.0, 4.0)
            }
        } else {
            Dimension::Pixels(OTHER_DEFAULT_HEIGHT)
        };
    }

    fn select_placeholder(&self) -> Option<String> {
        let placeholder = match self.category() {
            Some(MediaCategory::Audio) => &self.audio,
            Some(MediaCategory::Video) => &self.video,
            _ => return None,
        };

        if placeholder.is_empty() {
            None
        } else {
            Some(placeholder.clone())
        }
    }
}
