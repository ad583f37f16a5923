use std::path::Path;

/// Infer a MIME type from a file path's extension.
///
/// Unrecognized or missing extensions fall back to the generic binary type.
pub fn detect_mime_type(path: &Path) -> String {
    mime_guess::from_path(path)
        .first_raw()
        .unwrap_or("application/octet-stream")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_png() {
        assert_eq!(
            detect_mime_type(Path::new("sample_data/gemini_logo.png")),
            "image/png"
        );
    }

    #[test]
    fn test_detect_jpeg_variants() {
        assert_eq!(detect_mime_type(Path::new("photo.jpg")), "image/jpeg");
        assert_eq!(detect_mime_type(Path::new("photo.jpeg")), "image/jpeg");
    }

    #[test]
    fn test_detect_webp() {
        assert_eq!(detect_mime_type(Path::new("photo.webp")), "image/webp");
    }

    #[test]
    fn test_detect_gif() {
        assert_eq!(detect_mime_type(Path::new("loop.gif")), "image/gif");
    }

    #[test]
    fn test_detect_pdf() {
        assert_eq!(detect_mime_type(Path::new("paper.pdf")), "application/pdf");
    }

    #[test]
    fn test_detect_audio_and_video() {
        assert_eq!(detect_mime_type(Path::new("memo.mp3")), "audio/mpeg");
        assert_eq!(detect_mime_type(Path::new("clip.mp4")), "video/mp4");
    }

    #[test]
    fn test_detect_text() {
        assert_eq!(detect_mime_type(Path::new("notes.txt")), "text/plain");
    }

    #[test]
    fn test_extension_lookup_is_case_insensitive() {
        assert_eq!(detect_mime_type(Path::new("LOGO.PNG")), "image/png");
    }

    #[test]
    fn test_unknown_extension_falls_back_to_octet_stream() {
        assert_eq!(
            detect_mime_type(Path::new("blob.zzz999")),
            "application/octet-stream"
        );
    }

    #[test]
    fn test_missing_extension_falls_back_to_octet_stream() {
        assert_eq!(
            detect_mime_type(Path::new("no_extension")),
            "application/octet-stream"
        );
    }
}
