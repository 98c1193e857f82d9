use super::*;
use crate::content::{NewContent, announce_publication};
use crate::error::ContentError;

/// Outcome of one content store call, applied to the app on the UI thread.
#[derive(Debug)]
pub enum ContentReply {
    Listed(ContentKind, Result<Vec<ContentItem>, ContentError>),
    Fetched(ContentKind, String, Result<ContentItem, ContentError>),
    Inserted(NewContent, Result<(), ContentError>),
    Deleted(ContentKind, String, Result<(), ContentError>),
}

fn published_message(kind: ContentKind) -> &'static str {
    match kind {
        ContentKind::Market => "Market update published successfully!",
        ContentKind::Ai => "AI update published successfully!",
        ContentKind::Myth => "Myth vs Fact published successfully!",
    }
}

impl FinAwareApp {
    /// Sender for replies produced off the current call stack.
    pub fn reply_sender(&self) -> Sender<ContentReply> {
        self.replies_tx.clone()
    }

    /// Applies every reply that has arrived since the last frame.
    pub fn poll_content(&mut self) {
        while let Ok(reply) = self.replies_rx.try_recv() {
            self.in_flight = self.in_flight.saturating_sub(1);
            self.apply_reply(reply);
        }
    }

    /// `true` while a background request has not replied yet.
    pub fn is_busy(&self) -> bool {
        self.in_flight > 0
    }

    pub fn is_loading(&self, kind: ContentKind) -> bool {
        self.loading.contains(&kind)
    }

    pub fn is_loading_detail(&self, kind: ContentKind, id: &str) -> bool {
        self.loading_details.contains(&(kind, id.to_owned()))
    }

    pub fn apply_reply(&mut self, reply: ContentReply) {
        match reply {
            ContentReply::Listed(kind, result) => {
                self.store_list(kind, result);
            }
            ContentReply::Fetched(kind, id, result) => {
                self.store_detail(kind, &id, result);
            }
            ContentReply::Inserted(record, Ok(())) => {
                let kind = record.kind();
                announce_publication(&record);
                self.forms.clear(kind);
                self.invalidate(kind);
                self.toast_success(published_message(kind));
            }
            ContentReply::Inserted(record, Err(e)) => {
                let noun = record.kind().noun();
                log::error!("error creating {noun}: {e}");
                self.toast_error(format!("Failed to publish {noun}"));
            }
            ContentReply::Deleted(kind, _, Ok(())) => {
                self.invalidate(kind);
                self.toast_success("Item deleted successfully");
            }
            ContentReply::Deleted(kind, id, Err(e)) => {
                log::error!("error deleting {} {id}: {e}", kind.noun());
                self.toast_error("Failed to delete item");
            }
        }
    }

    pub(super) fn store_list(
        &mut self,
        kind: ContentKind,
        fetched: Result<Vec<ContentItem>, ContentError>,
    ) -> Result<Vec<ContentItem>, String> {
        self.loading.remove(&kind);
        let rows = fetched.map_err(|e| {
            log::error!("error fetching {}: {e}", kind.table());
            e.to_string()
        });
        self.lists.insert(kind, rows.clone());
        rows
    }

    pub(super) fn store_detail(
        &mut self,
        kind: ContentKind,
        id: &str,
        fetched: Result<ContentItem, ContentError>,
    ) -> Result<ContentItem, String> {
        let key = (kind, id.to_owned());
        self.loading_details.remove(&key);
        let item = fetched.map_err(|e| {
            log::error!("error fetching {} {id}: {e}", kind.table());
            e.to_string()
        });
        self.details.insert(key, item.clone());
        item
    }
}

#[cfg(target_arch = "wasm32")]
impl FinAwareApp {
    /// Runs `request` on the browser event loop; its reply is picked up by
    /// [`FinAwareApp::poll_content`].
    pub(super) fn spawn_content(
        &mut self,
        request: impl std::future::Future<Output = ContentReply> + 'static,
    ) {
        let tx = self.replies_tx.clone();
        self.in_flight += 1;
        wasm_bindgen_futures::spawn_local(async move {
            let _ = tx.send(request.await);
        });
    }

    pub(super) fn request_list(&mut self, remote: WebContentStore, kind: ContentKind) {
        if !self.loading.insert(kind) {
            return;
        }
        self.spawn_content(async move {
            let result = remote.list(kind).await;
            ContentReply::Listed(kind, result)
        });
    }

    pub(super) fn request_detail(&mut self, remote: WebContentStore, kind: ContentKind, id: &str) {
        if !self.loading_details.insert((kind, id.to_owned())) {
            return;
        }
        let id = id.to_owned();
        self.spawn_content(async move {
            let result = remote.get(kind, &id).await;
            ContentReply::Fetched(kind, id, result)
        });
    }
}
