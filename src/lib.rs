pub mod config;
pub mod embed;
pub mod enclosure;
pub mod humanize;
pub mod media;
pub mod observability;

pub use embed::{EmbedOptions, OptionOverrides, RawOptions, RendererRegistry};
pub use enclosure::{Enclosure, EnclosureData};
pub use media::MediaHandler;
