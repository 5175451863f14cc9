use std::path::Path;

/// Guesses a MIME type from the file extension of `path`.
///
/// Unknown or missing extensions fall back to `application/octet-stream`.
pub fn guess_mime(path: impl AsRef<Path>) -> String {
    mime_guess::from_path(path)
        .first_or_octet_stream()
        .essence_str()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_extensions() {
        assert_eq!(guess_mime("a.html"), "text/html");
        assert_eq!(guess_mime("images/b.png"), "image/png");
        assert_eq!(guess_mime("notes.txt"), "text/plain");
    }

    #[test]
    fn unknown_extension_is_octet_stream() {
        assert_eq!(guess_mime("make_type.zzzunknown"), "application/octet-stream");
        assert_eq!(guess_mime("Makefile"), "application/octet-stream");
    }
}
