//! Metadata extraction from the source document.
//!
//! The source's HTML is a black box apart from its `<meta property=...
//! content=...>` pairs; a regex scan over the tags is all the structure we
//! rely on. The comic id comes from the canonical URL's trailing path
//! segment.

use crate::model::FetchError;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::warn;

static META_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<meta\b[^>]*>").expect("meta tag pattern"));

static META_ATTR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)\b(property|content)\s*=\s*"([^"]*)""#).expect("meta attribute pattern")
});

/// Metadata property naming the title.
const PROP_TITLE: &str = "og:title";
/// Metadata property naming the comic image.
const PROP_IMAGE: &str = "og:image";
/// Metadata property naming the canonical URL (trailing id segment).
const PROP_URL: &str = "og:url";

/// The fields the pipeline needs from one source document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMeta {
    /// Comic number; 0 when the canonical URL has no parsable id.
    pub id: u32,
    /// Comic title; empty when the document carries none.
    pub title: String,
    /// Comic image URL; empty for text-only documents.
    pub image_url: String,
}

/// All `(property, content)` pairs from the document's meta tags, in
/// document order. Tags missing either attribute are skipped.
pub fn extract_meta_pairs(html: &str) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    for tag in META_TAG.find_iter(html) {
        let mut property = None;
        let mut content = None;
        for attr in META_ATTR.captures_iter(tag.as_str()) {
            match attr[1].to_ascii_lowercase().as_str() {
                "property" => property = Some(attr[2].to_string()),
                "content" => content = Some(attr[2].to_string()),
                _ => {}
            }
        }
        if let (Some(property), Some(content)) = (property, content) {
            pairs.push((property, content));
        }
    }
    pairs
}

/// Extract the page metadata, or fail the attempt if the document has no
/// usable pairs at all.
///
/// An unparsable id degrades to 0 with a warning; the fetch still
/// succeeds with whatever title/image the document carried.
pub fn page_meta(html: &str) -> Result<PageMeta, FetchError> {
    let mut title = None;
    let mut image_url = None;
    let mut canonical = None;

    for (property, content) in extract_meta_pairs(html) {
        match property.as_str() {
            PROP_TITLE => title = Some(content),
            PROP_IMAGE => image_url = Some(content),
            PROP_URL => canonical = Some(content),
            _ => {}
        }
    }

    if title.is_none() && image_url.is_none() && canonical.is_none() {
        return Err(FetchError::Metadata);
    }

    let id = canonical.as_deref().map_or(0, parse_trailing_id);
    Ok(PageMeta {
        id,
        title: title.unwrap_or_default(),
        image_url: image_url.unwrap_or_default(),
    })
}

/// Parse the last path segment of a canonical URL as the comic number.
fn parse_trailing_id(url: &str) -> u32 {
    let segment = url.trim_matches('/').rsplit('/').next().unwrap_or("");
    match segment.parse() {
        Ok(id) => id,
        Err(err) => {
            warn!(url, error = %err, "can't parse comic id from canonical URL");
            0
        }
    }
}
