use bon::Builder;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::humanize::ByteSize;

/// Raw enclosure fields as extracted from a feed
///
/// This is the construction input for [`super::Enclosure`]; it carries no
/// derived state.
#[derive(Debug, Clone, Default, PartialEq, Builder, Deserialize, Serialize)]
#[serde(default)]
pub struct EnclosureData {
    #[builder(into)]
    pub link: Option<String>,
    /// MIME type as declared by the feed
    #[builder(into)]
    #[serde(rename = "type")]
    pub mime_type: Option<String>,
    pub length: Option<ByteSize>,
    #[builder(into)]
    pub bitrate: Option<String>,
    #[builder(default)]
    pub captions: Vec<Caption>,
    #[builder(default)]
    pub categories: Vec<Category>,
    pub channels: Option<u32>,
    pub copyright: Option<Copyright>,
    #[builder(default)]
    pub credits: Vec<Credit>,
    #[builder(into)]
    pub description: Option<String>,
    /// Duration in seconds
    pub duration: Option<u64>,
    pub expression: Option<Expression>,
    #[builder(into)]
    pub framerate: Option<String>,
    /// `algo:value` hashes as given by `media:hash`
    #[builder(default)]
    pub hashes: Vec<String>,
    #[builder(into)]
    pub height: Option<String>,
    #[builder(default)]
    pub keywords: Vec<String>,
    #[builder(into)]
    pub lang: Option<String>,
    #[builder(into)]
    pub medium: Option<String>,
    #[builder(into)]
    pub player: Option<String>,
    #[builder(default)]
    pub ratings: Vec<Rating>,
    #[builder(default)]
    pub restrictions: Vec<Restriction>,
    #[builder(into)]
    pub samplingrate: Option<String>,
    #[builder(default)]
    pub thumbnails: Vec<String>,
    #[builder(into)]
    pub title: Option<String>,
    #[builder(into)]
    pub width: Option<String>,
}

/// How much of the media the enclosure represents
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Expression {
    Sample,
    #[default]
    Full,
    Nonstop,
    Clip,
}

impl Expression {
    pub fn as_str(&self) -> &'static str {
        match self {
            Expression::Sample => "sample",
            Expression::Full => "full",
            Expression::Nonstop => "nonstop",
            Expression::Clip => "clip",
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown expression: {0}")]
pub struct UnknownExpression(String);

impl FromStr for Expression {
    type Err = UnknownExpression;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sample" => Ok(Expression::Sample),
            "full" => Ok(Expression::Full),
            "nonstop" => Ok(Expression::Nonstop),
            "clip" => Ok(Expression::Clip),
            _ => Err(UnknownExpression(s.to_string())),
        }
    }
}

/// Timed text track (`media:text`)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Caption {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub lang: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Category {
    pub term: Option<String>,
    pub scheme: Option<String>,
    pub label: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

impl Category {
    /// Label when present, otherwise the term
    pub fn display_label(&self) -> Option<&str> {
        self.label.as_deref().or(self.term.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Credit {
    pub role: Option<String>,
    pub scheme: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Rating {
    pub scheme: Option<String>,
    pub value: Option<String>,
}

/// Access restriction (`media:restriction`)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Restriction {
    /// `allow` or `deny`
    pub relationship: Option<String>,
    /// `country`, `uri` or `sharing`
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Copyright {
    pub url: Option<String>,
    pub label: Option<String>,
}
