use std::fmt;
use std::path::PathBuf;

use anyhow::{Context, Result};

const FILE_URI_SCHEME: &str = "file://";

/// Reference to a device-local image, either a plain filesystem path or a
/// `file://` URI as handed back by a picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageLocation(String);

impl ImageLocation {
    /// Keeps the location byte for byte; only an empty string means "no image".
    pub fn parse(raw_location: &str) -> Option<Self> {
        if raw_location.is_empty() {
            return None;
        }
        Some(Self(raw_location.to_string()))
    }

    #[cfg(test)]
    pub fn from_path(path: &std::path::Path) -> Option<Self> {
        Self::parse(&path.to_string_lossy())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn to_file_path(&self) -> Result<PathBuf> {
        if let Some(encoded_path) = self.0.strip_prefix(FILE_URI_SCHEME) {
            let decoded_path = urlencoding::decode(encoded_path)
                .with_context(|| format!("Invalid percent-encoding in {}", self.0))?;
            return Ok(PathBuf::from(decoded_path.into_owned()));
        }

        if let Some(scheme) = uri_scheme(&self.0) {
            anyhow::bail!("Unsupported image location scheme: {}", scheme);
        }

        Ok(PathBuf::from(&self.0))
    }

    pub fn display_name(&self) -> String {
        self.to_file_path()
            .ok()
            .and_then(|path| path.file_name().map(|name| name.to_string_lossy().into_owned()))
            .unwrap_or_else(|| self.0.clone())
    }
}

/// Scheme of `location` when it starts with `scheme://`, per RFC 3986 scheme syntax.
fn uri_scheme(location: &str) -> Option<&str> {
    let (scheme, _) = location.split_once("://")?;
    let mut chars = scheme.chars();
    let starts_with_letter = chars.next().is_some_and(|c| c.is_ascii_alphabetic());
    let rest_is_valid = chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));

    (starts_with_letter && rest_is_valid).then_some(scheme)
}

impl fmt::Display for ImageLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rejects_empty_location() {
        assert!(ImageLocation::parse("").is_none());
    }

    #[test]
    fn test_parse_preserves_surrounding_whitespace() {
        let location = ImageLocation::parse(" /tmp/photo.png ").unwrap();

        assert_eq!(location.as_str(), " /tmp/photo.png ");
        assert_eq!(
            location.to_file_path().unwrap(),
            PathBuf::from(" /tmp/photo.png ")
        );
    }

    #[test]
    fn test_to_file_path_keeps_plain_paths_containing_scheme_separator() {
        let location = ImageLocation::parse("/data/a://b.png").unwrap();

        assert_eq!(
            location.to_file_path().unwrap(),
            PathBuf::from("/data/a://b.png")
        );
    }

    #[test]
    fn test_uri_scheme_requires_scheme_at_start() {
        assert_eq!(uri_scheme("https://example.com/a.png"), Some("https"));
        assert_eq!(uri_scheme("content+x.y-z://media/1"), Some("content+x.y-z"));
        assert_eq!(uri_scheme("/data/a://b.png"), None);
        assert_eq!(uri_scheme("1abc://x"), None);
        assert_eq!(uri_scheme("relative dir://x.png"), None);
        assert_eq!(uri_scheme("/tmp/photo.png"), None);
    }

    #[test]
    fn test_to_file_path_returns_plain_paths_unchanged() {
        let location = ImageLocation::parse("/home/user/Pictures/receipt.jpg").unwrap();

        assert_eq!(
            location.to_file_path().unwrap(),
            PathBuf::from("/home/user/Pictures/receipt.jpg")
        );
    }

    #[test]
    fn test_to_file_path_decodes_file_uri() {
        let location = ImageLocation::parse("file:///home/user/My%20Pictures/scan%231.png").unwrap();

        assert_eq!(
            location.to_file_path().unwrap(),
            PathBuf::from("/home/user/My Pictures/scan#1.png")
        );
    }

    #[test]
    fn test_to_file_path_rejects_remote_schemes() {
        let location = ImageLocation::parse("https://example.com/image.png").unwrap();

        let error = location.to_file_path().unwrap_err();

        assert!(error.to_string().contains("https"));
    }

    #[test]
    fn test_display_name_uses_file_name() {
        let location = ImageLocation::parse("file:///tmp/shots/label%20photo.jpeg").unwrap();

        assert_eq!(location.display_name(), "label photo.jpeg");
    }

    #[test]
    fn test_from_path_round_trips_through_to_file_path() {
        let path = std::env::temp_dir().join("image-text-extractor-sample.png");

        let location = ImageLocation::from_path(&path).unwrap();

        assert_eq!(location.to_file_path().unwrap(), path);
    }
}
