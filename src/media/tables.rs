/// Types played through native HTML5 elements
pub const TYPES_HTML: &[&str] = &[
    "image/*",
    "audio/aac",
    "audio/x-aac",
    "audio/ogg",
    "audio/wav",
    "audio/x-wav",
    "audio/mp3",
    "audio/x-mp3",
    "audio/mpeg",
    "audio/x-mpeg",
    "audio/mp4",
    "video/ogg",
    "video/webm",
    "video/mp4",
    "video/mpeg",
    "video/x-mpeg",
];

/// QuickTime 7 types
pub const TYPES_QUICKTIME: &[&str] = &[
    "audio/3gpp",
    "audio/3gpp2",
    "audio/aiff",
    "audio/x-aiff",
    "audio/mid",
    "audio/midi",
    "audio/x-midi",
    "audio/m4a",
    "audio/x-m4a",
    "video/3gpp",
    "video/3gpp2",
    "video/m4v",
    "video/x-m4v",
    "video/quicktime",
    "video/sd-video",
];

/// Windows Media types
pub const TYPES_WMEDIA: &[&str] = &[
    "application/asx",
    "application/x-mplayer2",
    "audio/x-ms-wma",
    "audio/x-ms-wax",
    "video/x-ms-asf-plugin",
    "video/x-ms-asf",
    "video/x-ms-wm",
    "video/x-ms-wmv",
    "video/x-ms-wvx",
];

/// Canonical type implied by each file extension. Order matters: the first
/// entry listing an extension wins (`ogg` is video, `oga` is audio).
pub const EXTENSION_TYPES: &[(&str, &[&str])] = &[
    ("audio/aac", &["aac", "adts"]),
    ("audio/aiff", &["aif", "aifc", "aiff", "cdda"]),
    ("audio/midi", &["kar", "mid", "midi", "smf"]),
    ("audio/mp3", &["mp3", "swa"]),
    ("audio/x-ms-wax", &["wax"]),
    ("audio/x-ms-wma", &["wma"]),
    ("audio/ogg", &["oga", "opus"]),
    ("audio/wav", &["bwf", "wav"]),
    ("audio/x-m4a", &["m4a"]),
    ("image/*", &["jpg", "jpeg", "gif", "bmp", "png", "webp"]),
    ("video/3gpp", &["3gp", "3gpp"]),
    ("video/3gpp2", &["3g2", "3gp2"]),
    ("video/mp4", &["mp4", "mpg4"]),
    ("video/ogg", &["ogg", "ogv"]),
    ("video/quicktime", &["mov", "qt"]),
    ("video/sd-video", &["sdv"]),
    ("video/x-m4v", &["m4v"]),
    ("video/x-ms-asf", &["asf"]),
    ("video/x-ms-wm", &["wm"]),
    ("video/x-ms-wmv", &["wmv"]),
    ("video/x-ms-wvx", &["wvx"]),
    (
        "video/mpeg",
        &["m1s", "m1v", "m15", "m75", "mp2", "mpa", "mpeg", "mpg", "mpm", "mpv"],
    ),
    ("video/webm", &["webm"]),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::MediaHandler;

    #[test]
    fn test_every_extension_type_has_a_handler() {
        for (mime_type, _) in EXTENSION_TYPES {
            assert!(
                MediaHandler::ALL.iter().any(|h| h.owns(mime_type)),
                "{mime_type} has no handler"
            );
        }
    }

    #[test]
    fn test_handler_sets_are_disjoint() {
        for mime_type in TYPES_HTML {
            assert!(!TYPES_QUICKTIME.contains(mime_type));
            assert!(!TYPES_WMEDIA.contains(mime_type));
        }
        for mime_type in TYPES_QUICKTIME {
            assert!(!TYPES_WMEDIA.contains(mime_type));
        }
    }
}
