use super::MediaHandler;
use super::tables::EXTENSION_TYPES;

/// File extension of the URL's path, excluding query string and fragment
///
/// Accepts absolute URLs as well as relative references such as `image.jpeg`.
pub fn extension_of(url: &str) -> Option<String> {
    let path = match url::Url::parse(url) {
        Ok(parsed) => parsed.path().to_string(),
        Err(_) => relative_path(url).to_string(),
    };

    let file_name = path.rsplit('/').next().unwrap_or_default();
    let (_, extension) = file_name.rsplit_once('.')?;

    if extension.is_empty() {
        None
    } else {
        Some(extension.to_string())
    }
}

/// Path of a relative reference; a leading `//authority` is not part of it
fn relative_path(reference: &str) -> &str {
    let end = reference.find(['?', '#']).unwrap_or(reference.len());
    let path = &reference[..end];

    match path.strip_prefix("//") {
        Some(rest) => rest.find('/').map_or("", |slash| &rest[slash..]),
        None => path,
    }
}

/// Canonical type implied by a file extension (case-insensitive)
pub fn type_from_extension(extension: Option<&str>) -> Option<&'static str> {
    let extension = extension?.to_lowercase();

    EXTENSION_TYPES
        .iter()
        .find(|(_, extensions)| extensions.contains(&extension.as_str()))
        .map(|(mime_type, _)| *mime_type)
}

/// Handler owning a canonical type
pub fn handler_for_type(mime_type: &str) -> Option<MediaHandler> {
    MediaHandler::ALL
        .into_iter()
        .find(|handler| handler.owns(mime_type))
}

/// Canonical MIME type for a declared type and URL
///
/// The lower-cased declared type is kept only when one of the handlers
/// recognises it verbatim; otherwise the type is inferred from the URL's
/// extension.
pub fn resolve_canonical_type(declared: Option<&str>, url: Option<&str>) -> Option<String> {
    let declared = declared.map(str::to_lowercase);

    if let Some(declared) = declared {
        if handler_for_type(&declared).is_some() {
            return Some(declared);
        }
        tracing::trace!(declared = %declared, "declared type not recognised, using extension");
    }

    let extension = url.and_then(extension_of);
    let inferred = type_from_extension(extension.as_deref());

    tracing::trace!(
        extension = extension.as_deref().unwrap_or_default(),
        inferred = inferred.unwrap_or_default(),
        "inferred type from extension"
    );

    inferred.map(str::to_string)
}

/// Handler for a declared type and URL, `None` when nothing can play it
pub fn resolve_handler(declared: Option<&str>, url: Option<&str>) -> Option<MediaHandler> {
    resolve_canonical_type(declared, url).and_then(|mime_type| handler_for_type(&mime_type))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::{TYPES_HTML, TYPES_QUICKTIME, TYPES_WMEDIA};

    #[test]
    fn test_extension_of_absolute_url() {
        assert_eq!(extension_of("http://x/a.mp3").as_deref(), Some("mp3"));
        assert_eq!(
            extension_of("https://cdn.example.com/path/movie.MP4?token=abc#t=10").as_deref(),
            Some("MP4")
        );
    }

    #[test]
    fn test_extension_of_relative_reference() {
        assert_eq!(extension_of("image.jpeg").as_deref(), Some("jpeg"));
        assert_eq!(extension_of("media/clip.mov?x=1").as_deref(), Some("mov"));
    }

    #[test]
    fn test_extension_of_protocol_relative() {
        assert_eq!(extension_of("//cdn.example.com"), None);
        assert_eq!(extension_of("//cdn.example.com/"), None);
        assert_eq!(extension_of("//cdn.example.com?v=1.2"), None);
        assert_eq!(
            extension_of("//cdn.example.com/media/a.mp3?v=2").as_deref(),
            Some("mp3")
        );
    }

    #[test]
    fn test_extension_of_missing() {
        assert_eq!(extension_of("http://example.com/"), None);
        assert_eq!(extension_of("http://example.com/podcast/episode"), None);
        assert_eq!(extension_of("http://example.com/dir.d/file"), None);
        assert_eq!(extension_of("http://example.com/file."), None);
        // dots in the query string are not an extension
        assert_eq!(extension_of("http://example.com/stream?format=a.mp3"), None);
    }

    #[test]
    fn test_type_from_extension() {
        assert_eq!(type_from_extension(Some("mp4")), Some("video/mp4"));
        assert_eq!(type_from_extension(Some("JPG")), Some("image/*"));
        assert_eq!(type_from_extension(Some("ogg")), Some("video/ogg"));
        assert_eq!(type_from_extension(Some("oga")), Some("audio/ogg"));
        assert_eq!(type_from_extension(Some("xyz")), None);
        assert_eq!(type_from_extension(None), None);
    }

    #[test]
    fn test_recognised_declared_type_is_trusted() {
        for handler in MediaHandler::ALL {
            for &mime_type in handler.types() {
                assert_eq!(
                    resolve_handler(Some(mime_type), Some("http://x/file.xyz")),
                    Some(handler)
                );
                assert_eq!(resolve_handler(Some(mime_type), None), Some(handler));
            }
        }
        assert_eq!(TYPES_HTML.len() + TYPES_QUICKTIME.len() + TYPES_WMEDIA.len(), 40);
    }

    #[test]
    fn test_declared_type_is_lowercased() {
        assert_eq!(
            resolve_canonical_type(Some("Audio/MP3"), Some("http://x/a.bin")).as_deref(),
            Some("audio/mp3")
        );
        assert_eq!(
            resolve_canonical_type(Some("AUDIO/MPEG"), Some("http://x/a.mp3")).as_deref(),
            Some("audio/mpeg")
        );
    }

    #[test]
    fn test_declared_type_with_parameters_falls_back_to_extension() {
        assert_eq!(
            resolve_canonical_type(Some("audio/mpeg; codecs=mp3"), Some("http://x/a.mp3"))
                .as_deref(),
            Some("audio/mp3")
        );
        assert_eq!(
            resolve_canonical_type(Some("audio/mpeg; codecs=mp3"), Some("http://x/a")),
            None
        );
    }

    #[test]
    fn test_unrecognised_declared_type_uses_extension() {
        assert_eq!(
            resolve_canonical_type(Some("image/jpg"), Some("image.jpeg")).as_deref(),
            Some("image/*")
        );
        assert_eq!(
            resolve_handler(Some("application/octet-stream"), Some("http://x/v.wmv")),
            Some(MediaHandler::WindowsMedia)
        );
    }

    #[test]
    fn test_extension_inference_for_every_table_entry() {
        for (mime_type, extensions) in EXTENSION_TYPES {
            for &extension in *extensions {
                let url = format!("http://x/file.{extension}");
                let resolved = resolve_canonical_type(None, Some(&url));
                // an earlier entry may claim the same extension
                let first = type_from_extension(Some(extension));
                assert_eq!(resolved.as_deref(), first);
                if first == Some(*mime_type) {
                    assert_eq!(
                        resolve_handler(None, Some(&url)),
                        handler_for_type(mime_type)
                    );
                }
            }
        }
    }

    #[test]
    fn test_unknown_everything_is_none() {
        assert_eq!(
            resolve_handler(Some("application/x-custom"), Some("http://x/file.xyz")),
            None
        );
        assert_eq!(resolve_handler(None, None), None);
        assert_eq!(resolve_canonical_type(None, None), None);
    }
}
