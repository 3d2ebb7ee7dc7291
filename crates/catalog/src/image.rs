//! IIIF image URLs for artworks.

use artscope_config::CatalogConfig;

/// Width used in artwork listings.
pub const THUMBNAIL_WIDTH: u32 = 300;

/// Width used in the artwork detail panel.
pub const DETAIL_WIDTH: u32 = 800;

/// Builds image URLs, falling back to a placeholder when an artwork has no image.
#[derive(Debug, Clone)]
pub struct ImageUrls {
    base_url: String,
    placeholder: String,
}

impl ImageUrls {
    pub fn new(base_url: impl Into<String>, placeholder: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            placeholder: placeholder.into(),
        }
    }

    pub fn from_config(config: &CatalogConfig) -> Self {
        Self::new(&config.image_base_url, &config.placeholder_image_url)
    }

    pub fn url(&self, image_id: Option<&str>, width: u32) -> String {
        match image_id.map(str::trim) {
            Some(id) if !id.is_empty() => {
                format!("{}/{id}/full/{width},/0/default.jpg", self.base_url)
            }
            _ => self.placeholder.clone(),
        }
    }

    pub fn thumbnail(&self, image_id: Option<&str>) -> String {
        self.url(image_id, THUMBNAIL_WIDTH)
    }

    pub fn detail(&self, image_id: Option<&str>) -> String {
        self.url(image_id, DETAIL_WIDTH)
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn urls() -> ImageUrls {
        ImageUrls::from_config(&CatalogConfig::default())
    }

    #[test]
    fn thumbnail_url() {
        assert_eq!(
            urls().thumbnail(Some("abc-123")),
            "https://www.artic.edu/iiif/2/abc-123/full/300,/0/default.jpg"
        );
    }

    #[test]
    fn detail_url() {
        assert_eq!(
            urls().detail(Some("abc-123")),
            "https://www.artic.edu/iiif/2/abc-123/full/800,/0/default.jpg"
        );
    }

    #[test]
    fn missing_image_uses_placeholder() {
        let urls = urls();
        assert_eq!(urls.thumbnail(None), urls.placeholder());
        assert_eq!(urls.detail(Some("  ")), urls.placeholder());
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let urls = ImageUrls::new("http://images.test/iiif/", "none.png");
        assert_eq!(
            urls.url(Some("x"), 10),
            "http://images.test/iiif/x/full/10,/0/default.jpg"
        );
    }
}
