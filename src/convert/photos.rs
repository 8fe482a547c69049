use crate::domain::PhotoRef;
use regex::{NoExpand, Regex};

/// URL scheme Day One uses for inline photo references
pub const MOMENT_SCHEME: &str = "dayone-moment://";

/// Replace every `dayone-moment://<identifier>` with the photo's relative file path
pub fn rewrite_image_refs(text: &str, photos: &[PhotoRef]) -> String {
    let mut output = text.to_string();

    for photo in photos {
        let pattern = format!("{}{}", regex::escape(MOMENT_SCHEME), regex::escape(&photo.identifier));
        let re = match Regex::new(&pattern) {
            Ok(re) => re,
            Err(e) => {
                tracing::warn!("skipping photo {}: {}", photo.identifier, e);
                continue;
            }
        };

        if re.is_match(&output) {
            output = re
                .replace_all(&output, NoExpand(&photo.relative_path()))
                .into_owned();
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn photo(identifier: &str, md5: &str, file_type: Option<&str>) -> PhotoRef {
        PhotoRef {
            identifier: identifier.to_string(),
            md5: md5.to_string(),
            file_type: file_type.map(str::to_string),
        }
    }

    #[test]
    fn test_rewrites_every_occurrence() {
        let text = "![](dayone-moment://abc)\nagain ![](dayone-moment://abc)";
        let out = rewrite_image_refs(text, &[photo("abc", "deadbeef", Some("png"))]);
        assert_eq!(out, "![](photos/deadbeef.png)\nagain ![](photos/deadbeef.png)");
    }

    #[test]
    fn test_default_extension_is_jpeg() {
        let out = rewrite_image_refs("dayone-moment://abc", &[photo("abc", "deadbeef", None)]);
        assert_eq!(out, "photos/deadbeef.jpeg");
    }

    #[test]
    fn test_unrelated_text_untouched() {
        let text = "no images here, dayone-moment://other";
        let out = rewrite_image_refs(text, &[photo("abc", "deadbeef", None)]);
        assert_eq!(out, text);
    }

    #[test]
    fn test_identifier_is_matched_literally() {
        let text = "dayone-moment://a.c dayone-moment://abc";
        let out = rewrite_image_refs(text, &[photo("a.c", "1234", Some("gif"))]);
        assert_eq!(out, "photos/1234.gif dayone-moment://abc");
    }

    #[test]
    fn test_dollar_in_replacement_is_literal() {
        let out = rewrite_image_refs("dayone-moment://x", &[photo("x", "$1", None)]);
        assert_eq!(out, "photos/$1.jpeg");
    }
}
