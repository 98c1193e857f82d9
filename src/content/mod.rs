//! Content access layer: market updates, AI updates and myth/fact pairs kept
//! in a hosted table store.

pub mod forms;
pub mod memory;
pub mod postgrest;
pub mod records;
#[cfg(not(target_arch = "wasm32"))]
pub mod rest;
#[cfg(target_arch = "wasm32")]
pub mod web;

use crate::error::ContentError;

pub use forms::{AdminForms, AiUpdateForm, MarketUpdateForm, MythFactForm};
pub use memory::MemoryContentStore;
pub use records::{
    AiUpdate, ContentItem, ContentKind, MarketUpdate, MythFact, NewAiUpdate, NewContent,
    NewMarketUpdate, NewMythFact,
};
#[cfg(not(target_arch = "wasm32"))]
pub use rest::RestContentStore;
#[cfg(target_arch = "wasm32")]
pub use web::WebContentStore;

/// Row-level access to the three content tables.
pub trait ContentStore {
    /// All rows of `kind`, newest first.
    fn list(&self, kind: ContentKind) -> Result<Vec<ContentItem>, ContentError>;
    fn get(&self, kind: ContentKind, id: &str) -> Result<ContentItem, ContentError>;
    /// Single-row insert.
    fn insert(&mut self, record: NewContent) -> Result<(), ContentError>;
    fn delete(&mut self, kind: ContentKind, id: &str) -> Result<(), ContentError>;
}

/// Publication hook run after a successful insert. There is no push service
/// behind it; the announcement is only logged.
pub fn announce_publication(record: &NewContent) {
    log::info!(
        "notification: new {} published: {}",
        record.kind().noun(),
        record.headline()
    );
}
