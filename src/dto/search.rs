//! Response shape of the store search endpoint used for thumbnails.

use serde::Deserialize;

/// Search results; only the fields the picker needs are decoded.
#[derive(Debug, Default, Deserialize)]
pub struct StoreSearchResponse {
    /// Hits in relevance order.
    #[serde(default)]
    pub items: Vec<StoreSearchItem>,
}

/// Single search hit.
#[derive(Debug, Deserialize)]
pub struct StoreSearchItem {
    /// Small capsule image URL.
    #[serde(default)]
    pub tiny_image: Option<String>,
}

impl StoreSearchResponse {
    /// Small image of the first hit, if the search returned one.
    pub fn first_thumbnail(self) -> Option<String> {
        self.items
            .into_iter()
            .next()
            .and_then(|item| item.tiny_image)
            .filter(|url| !url.is_empty())
    }
}
