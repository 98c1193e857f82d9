use crate::config::AppConfig;
#[cfg(target_arch = "wasm32")]
use crate::content::WebContentStore;
use crate::content::{AdminForms, ContentItem, ContentKind, ContentStore, MemoryContentStore};
use crate::data::quiz_questions;
use crate::model::Page;
use crate::quiz::{KeyValueStore, QuizSession, ResultStore};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::sync::mpsc::{Receiver, Sender};

// Submodules
pub mod actions;
pub mod navigation;
pub mod queries;
pub mod requests;
pub mod resets;
pub mod toasts;
pub mod view_models;

pub use requests::ContentReply;
pub use toasts::{Toast, ToastKind};

/// UI preferences kept in eframe's own storage between runs.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct UiPrefs {
    pub dark_mode: bool,
}

impl Default for UiPrefs {
    fn default() -> Self {
        Self { dark_mode: true }
    }
}

pub struct FinAwareApp {
    pub page: Page,
    pub prefs: UiPrefs,
    pub config: AppConfig,
    pub results: ResultStore<Box<dyn KeyValueStore>>,
    pub content: Box<dyn ContentStore>,
    /// Live quiz run; exists only while the quiz page is mounted.
    pub session: Option<QuizSession<'static>>,
    pub lists: HashMap<ContentKind, Result<Vec<ContentItem>, String>>,
    /// Single rows opened by id; dropped on every page change.
    pub details: HashMap<(ContentKind, String), Result<ContentItem, String>>,
    pub loading: HashSet<ContentKind>,
    pub loading_details: HashSet<(ContentKind, String)>,
    /// Hosted store reached with `fetch`; `None` keeps content in `content`.
    #[cfg(target_arch = "wasm32")]
    pub remote: Option<WebContentStore>,
    in_flight: usize,
    replies_tx: Sender<ContentReply>,
    replies_rx: Receiver<ContentReply>,
    pub search: String,
    pub admin_tab: ContentKind,
    pub forms: AdminForms,
    pub toasts: Vec<Toast>,
    pub confirm_reset: bool,
    pub pending_delete: Option<(ContentKind, String)>,
}

impl FinAwareApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let config = AppConfig::load();
        let prefs: UiPrefs = cc
            .storage
            .and_then(|s| eframe::get_value(s, eframe::APP_KEY))
            .unwrap_or_default();

        cc.egui_ctx.set_visuals(if prefs.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });

        let slot = default_result_slot(&config);
        let content = default_content_store(&config);
        #[cfg(target_arch = "wasm32")]
        let remote = config.content_url.as_deref().map(|url| {
            log::info!("using remote content store at {url}");
            WebContentStore::new(url, &config.content_api_key)
        });

        let mut app = Self::with_stores(config, slot, content);
        app.prefs = prefs;
        #[cfg(target_arch = "wasm32")]
        {
            app.remote = remote;
        }
        app
    }

    /// Builds the app over explicit stores and applies the start-up guard:
    /// without a stored result the first page is the quiz.
    pub fn with_stores(
        config: AppConfig,
        slot: Box<dyn KeyValueStore>,
        content: Box<dyn ContentStore>,
    ) -> Self {
        let (replies_tx, replies_rx) = std::sync::mpsc::channel();
        let mut app = Self {
            page: Page::Dashboard,
            prefs: UiPrefs::default(),
            config,
            results: ResultStore::new(slot),
            content,
            session: None,
            lists: HashMap::new(),
            details: HashMap::new(),
            loading: HashSet::new(),
            loading_details: HashSet::new(),
            #[cfg(target_arch = "wasm32")]
            remote: None,
            in_flight: 0,
            replies_tx,
            replies_rx,
            search: String::new(),
            admin_tab: ContentKind::Market,
            forms: AdminForms::default(),
            toasts: Vec::new(),
            confirm_reset: false,
            pending_delete: None,
        };
        app.enforce_quiz_guard();
        app
    }

    /// Session of the mounted quiz page, created on demand.
    pub fn session_mut(&mut self) -> &mut QuizSession<'static> {
        self.session
            .get_or_insert_with(|| QuizSession::new(quiz_questions()))
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn default_result_slot(config: &AppConfig) -> Box<dyn KeyValueStore> {
    Box::new(crate::quiz::FileStore::new(config.data_dir.clone()))
}

#[cfg(target_arch = "wasm32")]
fn default_result_slot(_config: &AppConfig) -> Box<dyn KeyValueStore> {
    Box::new(crate::quiz::LocalStore)
}

#[cfg(not(target_arch = "wasm32"))]
fn default_content_store(config: &AppConfig) -> Box<dyn ContentStore> {
    match &config.content_url {
        Some(url) => {
            log::info!("using remote content store at {url}");
            Box::new(crate::content::RestContentStore::new(
                url,
                &config.content_api_key,
            ))
        }
        None => {
            log::warn!("no content store configured, content is kept in memory");
            Box::new(MemoryContentStore::new())
        }
    }
}

/// Local fallback; the hosted store is reached through `FinAwareApp::remote`.
#[cfg(target_arch = "wasm32")]
fn default_content_store(config: &AppConfig) -> Box<dyn ContentStore> {
    if config.content_url.is_none() {
        log::warn!("no content store configured, content is kept in memory");
    }
    Box::new(MemoryContentStore::new())
}
