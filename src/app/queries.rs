use super::*;

impl FinAwareApp {
    /// Rows of `kind`, newest first. Fetched on first use and cached, errors
    /// included, until [`FinAwareApp::invalidate`] is called.
    pub fn items(&mut self, kind: ContentKind) -> Result<Vec<ContentItem>, String> {
        if let Some(cached) = self.lists.get(&kind) {
            return cached.clone();
        }
        // Empty until the fetch replies; see `is_loading`
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(remote) = self.remote.clone() {
                self.request_list(remote, kind);
                return Ok(Vec::new());
            }
        }
        let fetched = self.content.list(kind);
        self.store_list(kind, fetched)
    }

    /// Rows of `kind` matching the current search text.
    pub fn filtered_items(&mut self, kind: ContentKind) -> Result<Vec<ContentItem>, String> {
        let query = self.search.clone();
        self.items(kind)
            .map(|rows| rows.into_iter().filter(|r| r.matches_search(&query)).collect())
    }

    pub fn latest(&mut self, kind: ContentKind) -> Option<ContentItem> {
        self.items(kind).ok()?.into_iter().next()
    }

    pub fn recent(&mut self, kind: ContentKind, limit: usize) -> Vec<ContentItem> {
        self.items(kind)
            .map(|rows| rows.into_iter().take(limit).collect())
            .unwrap_or_default()
    }

    /// Single row by id. Served from the cached list when present, otherwise
    /// fetched once per visit of the detail page.
    pub fn detail(&mut self, kind: ContentKind, id: &str) -> Result<ContentItem, String> {
        if let Some(Ok(rows)) = self.lists.get(&kind) {
            if let Some(found) = rows.iter().find(|r| r.id() == id) {
                return Ok(found.clone());
            }
        }
        if let Some(cached) = self.details.get(&(kind, id.to_owned())) {
            return cached.clone();
        }
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(remote) = self.remote.clone() {
                self.request_detail(remote, kind, id);
                return Err("still loading".into());
            }
        }
        let fetched = self.content.get(kind, id);
        self.store_detail(kind, id, fetched)
    }

    /// Drops cached rows of `kind` so the next read refetches.
    pub fn invalidate(&mut self, kind: ContentKind) {
        self.lists.remove(&kind);
        self.details.retain(|(k, _), _| *k != kind);
    }
}
