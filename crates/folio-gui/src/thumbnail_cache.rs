use std::collections::HashMap;

use iced::widget::image;

/// State of a remote image, keyed by its URL.
#[derive(Debug, Clone)]
pub enum ThumbnailState {
    Loading,
    Loaded(image::Handle),
    Failed,
}

/// In-memory cache of fetched preview and profile images.
#[derive(Debug, Default)]
pub struct ThumbnailCache {
    states: HashMap<String, ThumbnailState>,
}

impl ThumbnailCache {
    pub fn get(&self, url: &str) -> Option<&ThumbnailState> {
        self.states.get(url)
    }

    /// Mark `url` as loading. Returns `false` when it was already requested,
    /// in which case no new download should start.
    pub fn begin(&mut self, url: &str) -> bool {
        if url.is_empty() {
            self.states
                .entry(String::new())
                .or_insert(ThumbnailState::Failed);
            return false;
        }
        if self.states.contains_key(url) {
            return false;
        }
        self.states
            .insert(url.to_string(), ThumbnailState::Loading);
        true
    }

    pub fn finish(&mut self, url: String, result: Result<Vec<u8>, String>) {
        let state = match result {
            Ok(bytes) => ThumbnailState::Loaded(image::Handle::from_bytes(bytes)),
            Err(e) => {
                tracing::warn!(%url, error = %e, "Thumbnail download failed");
                ThumbnailState::Failed
            }
        };
        self.states.insert(url, state);
    }
}

/// Download an image into memory.
pub async fn fetch_thumbnail(url: String) -> Result<Vec<u8>, String> {
    let response = reqwest::get(&url)
        .await
        .map_err(|e| e.to_string())?
        .error_for_status()
        .map_err(|e| e.to_string())?;
    let bytes = response.bytes().await.map_err(|e| e.to_string())?;
    Ok(bytes.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_only_once_per_url() {
        let mut cache = ThumbnailCache::default();
        assert!(cache.begin("https://img.example/a.png"));
        assert!(!cache.begin("https://img.example/a.png"));
        assert!(matches!(
            cache.get("https://img.example/a.png"),
            Some(ThumbnailState::Loading)
        ));
    }

    #[test]
    fn test_empty_url_fails_without_fetch() {
        let mut cache = ThumbnailCache::default();
        assert!(!cache.begin(""));
        assert!(matches!(cache.get(""), Some(ThumbnailState::Failed)));
    }

    #[test]
    fn test_failed_download_is_recorded() {
        let mut cache = ThumbnailCache::default();
        cache.begin("https://img.example/b.png");
        cache.finish("https://img.example/b.png".into(), Err("timeout".into()));
        assert!(matches!(
            cache.get("https://img.example/b.png"),
            Some(ThumbnailState::Failed)
        ));
    }
}
