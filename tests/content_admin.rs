use finaware::FinAwareApp;
use finaware::app::ContentReply;
use finaware::config::AppConfig;
use finaware::content::{
    ContentItem, ContentKind, ContentStore, MemoryContentStore, MythFact, NewContent, NewMarketUpdate,
};
use finaware::error::ContentError;
use finaware::model::Page;
use finaware::quiz::{KeyValueStore, MemoryStore, QUIZ_RESULT_KEY};

/// Content store that is always down.
struct OfflineStore;

impl ContentStore for OfflineStore {
    fn list(&self, _kind: ContentKind) -> Result<Vec<ContentItem>, ContentError> {
        Err(ContentError::Transport("connection refused".into()))
    }
    fn get(&self, _kind: ContentKind, _id: &str) -> Result<ContentItem, ContentError> {
        Err(ContentError::Transport("connection refused".into()))
    }
    fn insert(&mut self, _record: NewContent) -> Result<(), ContentError> {
        Err(ContentError::Status {
            status: 503,
            body: "unavailable".into(),
        })
    }
    fn delete(&mut self, _kind: ContentKind, _id: &str) -> Result<(), ContentError> {
        Err(ContentError::Status {
            status: 503,
            body: "unavailable".into(),
        })
    }
}

fn admin_app(content: Box<dyn ContentStore>) -> FinAwareApp {
    let mut slot = MemoryStore::new();
    slot.set(
        QUIZ_RESULT_KEY,
        r#"{"profile":"balanced","completedAt":"2024-03-01T10:00:00Z"}"#,
    )
    .unwrap();
    let config = AppConfig {
        admin_enabled: true,
        ..AppConfig::default()
    };
    let mut app = FinAwareApp::with_stores(config, Box::new(slot), content);
    app.go_to(Page::Admin);
    app
}

fn last_toast(app: &FinAwareApp) -> Option<&str> {
    app.toasts.last().map(|t| t.message.as_str())
}

#[test]
fn blank_form_is_rejected_without_touching_the_store() {
    let mut app = admin_app(Box::new(MemoryContentStore::new()));
    app.publish(ContentKind::Market);

    let toast = last_toast(&app).unwrap();
    assert!(toast.starts_with("Failed to publish market update"), "{toast}");
    assert_eq!(app.items(ContentKind::Market).unwrap().len(), 0);
}

#[test]
fn publish_then_delete_a_myth() {
    let mut app = admin_app(Box::new(MemoryContentStore::new()));
    app.forms.myth.myth = "Timing the market beats time in the market".into();
    app.forms.myth.fact = "Missing the best days costs more than avoiding the worst".into();
    app.forms.myth.why_it_matters = "Staying invested compounds".into();

    // prime the cache so publish has something to invalidate
    assert!(app.items(ContentKind::Myth).unwrap().is_empty());
    app.publish(ContentKind::Myth);

    assert_eq!(last_toast(&app), Some("Myth vs Fact published successfully!"));
    assert!(app.forms.myth.myth.is_empty());
    let rows = app.content_rows(ContentKind::Myth).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].headline, "Timing the market beats time in the market");

    app.request_delete(ContentKind::Myth, &rows[0].id);
    assert_eq!(
        app.pending_delete,
        Some((ContentKind::Myth, rows[0].id.clone()))
    );
    app.delete_item(ContentKind::Myth, &rows[0].id);
    assert_eq!(last_toast(&app), Some("Item deleted successfully"));
    assert!(app.items(ContentKind::Myth).unwrap().is_empty());
}

#[test]
fn search_filters_market_updates() {
    let mut app = admin_app(Box::new(MemoryContentStore::new()));
    for (title, week) in [("Fed pause", "Jan 1"), ("Crypto rally", "Jan 8")] {
        let form = &mut app.forms.market;
        form.week_of = week.into();
        form.title = title.into();
        for field in [
            &mut form.summary,
            &mut form.macro_global,
            &mut form.forex,
            &mut form.crypto,
            &mut form.us_news,
            &mut form.liquidity_rates,
            &mut form.insights,
        ] {
            *field = "n/a".into();
        }
        app.publish(ContentKind::Market);
    }

    app.go_to(Page::MarketUpdates);
    app.search = "CRYPTO".into();
    let hits = app.filtered_items(ContentKind::Market).unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].headline(), "Crypto rally");

    let latest = app.latest(ContentKind::Market).unwrap();
    assert_eq!(latest.headline(), "Crypto rally");
    assert!(app.detail(ContentKind::Market, latest.id()).is_ok());
}

#[test]
fn store_failures_become_error_toasts() {
    let mut app = admin_app(Box::new(OfflineStore));
    app.forms.myth.myth = "m".into();
    app.forms.myth.fact = "f".into();
    app.forms.myth.why_it_matters = "w".into();

    app.publish(ContentKind::Myth);
    assert_eq!(last_toast(&app), Some("Failed to publish myth vs fact"));
    // the form survives a failed insert
    assert_eq!(app.forms.myth.myth, "m");

    app.delete_item(ContentKind::Ai, "42");
    assert_eq!(last_toast(&app), Some("Failed to delete item"));

    assert!(app.items(ContentKind::Ai).is_err());
    assert!(app.detail(ContentKind::Ai, "42").is_err());
    assert!(app.recent(ContentKind::Ai, 3).is_empty());
}

fn myth(id: &str) -> ContentItem {
    ContentItem::Myth(MythFact {
        id: id.into(),
        created_at: "2024-03-04T09:00:00Z".parse().unwrap(),
        myth: "Gold never loses value".into(),
        fact: "Gold fell over 40% between 2011 and 2015".into(),
        why_it_matters: "No asset is a one-way bet".into(),
    })
}

#[test]
fn background_replies_land_on_the_next_poll() {
    let mut app = admin_app(Box::new(OfflineStore));
    let tx = app.reply_sender();
    tx.send(ContentReply::Listed(ContentKind::Myth, Ok(vec![myth("m-1")])))
        .unwrap();
    tx.send(ContentReply::Inserted(
        NewContent::Market(NewMarketUpdate::default()),
        Err(ContentError::Transport("timed out".into())),
    ))
    .unwrap();
    assert!(app.toasts.is_empty());

    app.poll_content();
    assert!(!app.is_busy());
    assert_eq!(last_toast(&app), Some("Failed to publish market update"));

    // served from the cache, the offline store is never asked
    let rows = app.items(ContentKind::Myth).unwrap();
    assert_eq!(rows, vec![myth("m-1")]);
    assert!(!app.is_loading(ContentKind::Myth));

    tx.send(ContentReply::Deleted(ContentKind::Myth, "m-1".into(), Ok(())))
        .unwrap();
    app.poll_content();
    assert_eq!(last_toast(&app), Some("Item deleted successfully"));
    // the delete dropped the cached list, so the next read goes to the store
    assert!(app.items(ContentKind::Myth).is_err());
}

#[test]
fn recent_myths_carry_why_it_matters() {
    let mut app = admin_app(Box::new(MemoryContentStore::new()));
    app.forms.myth.myth = "m".into();
    app.forms.myth.fact = "f".into();
    app.forms.myth.why_it_matters = "compounding".into();
    app.publish(ContentKind::Myth);

    let recent = app.recent(ContentKind::Myth, 3);
    let Some(ContentItem::Myth(m)) = recent.first() else {
        panic!("no myth in {recent:?}");
    };
    assert_eq!(m.why_it_matters, "compounding");
}

#[test]
fn detail_cache_is_dropped_on_navigation() {
    let mut app = admin_app(Box::new(MemoryContentStore::new()));
    app.go_to(Page::MarketUpdates);
    assert!(app.detail(ContentKind::Market, "missing-1").is_err());
    assert!(app.detail(ContentKind::Market, "missing-2").is_err());
    assert_eq!(app.details.len(), 2);

    app.go_to(Page::MythsFacts);
    assert!(app.details.is_empty());
}
