use crate::config::GalleryConfig;
use crate::dom;
use crate::error::Result;
use crate::state::GalleryItem;
use web_sys::{Document, Element, HtmlImageElement};

pub const ATTR_SRC: &str = "data-src";
pub const ATTR_TITLE: &str = "data-title";
pub const ATTR_DESCRIPTION: &str = "data-description";
pub const ATTR_LINK: &str = "data-link";

impl GalleryItem {
    /// Build an item from attribute lookups. Missing text reads as empty and
    /// a blank link counts as no link.
    pub fn from_attributes(read: impl Fn(&str) -> Option<String>) -> Self {
        let text = |name: &str| read(name).unwrap_or_default();
        Self {
            image_src: text(ATTR_SRC),
            title: text(ATTR_TITLE),
            description: text(ATTR_DESCRIPTION),
            link_url: read(ATTR_LINK).filter(|url| !url.trim().is_empty()),
        }
    }

    pub fn from_element(element: &Element) -> Self {
        Self::from_attributes(|name| element.get_attribute(name))
    }
}

/// Copy each item's declared source and title into its thumbnail image.
/// Items without a thumbnail are skipped. Returns how many were populated.
pub fn initialize_thumbnails(document: &Document, config: &GalleryConfig) -> Result<usize> {
    let mut populated = 0;
    for element in dom::query_all(document, &config.selectors.item)? {
        let Ok(Some(thumb)) = dom::query_in::<HtmlImageElement>(&element, &config.selectors.thumb)
        else {
            continue;
        };
        let item = GalleryItem::from_element(&element);
        thumb.set_src(&item.image_src);
        thumb.set_alt(&config.thumbnail_alt(&item.title));
        populated += 1;
    }
    Ok(populated)
}
