use finaware::FinAwareApp;
use finaware::config::AppConfig;
use finaware::content::{ContentStore, MemoryContentStore, NewContent, NewMarketUpdate};
use finaware::error::StoreError;
use finaware::model::{Page, RiskProfile};
use finaware::quiz::{KeyValueStore, MemoryStore, QUIZ_RESULT_KEY, QuizStep};

/// Slot whose writes always fail.
struct ReadOnlySlot;

impl KeyValueStore for ReadOnlySlot {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }
    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("read-only".into()))
    }
    fn remove(&mut self, _key: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("read-only".into()))
    }
}

fn fresh_app() -> FinAwareApp {
    FinAwareApp::with_stores(
        AppConfig::default(),
        Box::new(MemoryStore::new()),
        Box::new(MemoryContentStore::new()),
    )
}

fn app_with_result(profile: &str, content: MemoryContentStore) -> FinAwareApp {
    let mut slot = MemoryStore::new();
    slot.set(
        QUIZ_RESULT_KEY,
        &format!(r#"{{"profile":"{profile}","completedAt":"2024-03-01T10:00:00Z"}}"#),
    )
    .unwrap();
    FinAwareApp::with_stores(AppConfig::default(), Box::new(slot), Box::new(content))
}

fn answer_all(app: &mut FinAwareApp, option_idx: usize) {
    let total = app.session_mut().total();
    for _ in 0..total {
        app.choose_option(option_idx);
        app.next_question();
    }
}

#[test]
fn first_launch_lands_on_the_quiz() {
    let mut app = fresh_app();
    assert_eq!(app.page, Page::Quiz);
    assert_eq!(app.session_mut().step(), QuizStep::Question(0));
    let header = app.quiz_header().unwrap();
    assert_eq!(header.label(), "Question 1 of 5");
    assert_eq!(header.percent, 20);
}

#[test]
fn guard_redirects_every_page_until_the_quiz_is_done() {
    let mut app = fresh_app();
    for page in [Page::Dashboard, Page::MarketUpdates, Page::MythsFacts, Page::Admin] {
        app.go_to(page);
        assert!(app.enforce_quiz_guard());
        assert_eq!(app.page, Page::Quiz);
    }
}

#[test]
fn completing_the_quiz_persists_and_unlocks_the_dashboard() {
    let mut app = fresh_app();
    answer_all(&mut app, 2);

    assert_eq!(
        app.session_mut().step(),
        QuizStep::Result(RiskProfile::Aggressive)
    );
    assert_eq!(
        app.results.load_result().map(|r| r.profile),
        Some(RiskProfile::Aggressive)
    );

    app.get_started();
    assert_eq!(app.page, Page::Dashboard);
    assert!(app.session.is_none());
    assert!(!app.enforce_quiz_guard());
    assert_eq!(app.greeting_name(), "Aggressive");
}

#[test]
fn next_is_blocked_until_an_option_is_chosen() {
    let mut app = fresh_app();
    app.next_question();
    assert_eq!(app.session_mut().step(), QuizStep::Question(0));

    app.choose_option(1);
    app.next_question();
    assert_eq!(app.session_mut().step(), QuizStep::Question(1));

    app.previous_question();
    assert_eq!(app.session_mut().selected(), Some(RiskProfile::Balanced));
}

#[test]
fn leaving_the_quiz_discards_unfinished_answers() {
    let mut app = fresh_app();
    app.choose_option(0);
    app.next_question();
    app.go_to(Page::Dashboard);
    assert!(app.session.is_none());

    app.go_to(Page::Quiz);
    assert_eq!(app.session_mut().step(), QuizStep::Question(0));
    assert!(app.session_mut().answers().is_empty());
}

#[test]
fn reset_clears_the_result_and_restarts_the_quiz() {
    let mut app = app_with_result("balanced", MemoryContentStore::new());
    assert_eq!(app.page, Page::Dashboard);

    app.confirm_reset = true;
    app.reset_quiz();

    assert!(!app.confirm_reset);
    assert!(!app.results.has_completed());
    assert_eq!(app.page, Page::Quiz);
    assert_eq!(app.session_mut().step(), QuizStep::Question(0));
    assert_eq!(
        app.toasts.last().map(|t| t.message.as_str()),
        Some("Quiz reset successfully")
    );
}

#[test]
fn failed_save_keeps_the_last_question_open() {
    let mut app = FinAwareApp::with_stores(
        AppConfig::default(),
        Box::new(ReadOnlySlot),
        Box::new(MemoryContentStore::new()),
    );
    answer_all(&mut app, 0);

    assert_eq!(app.session_mut().step(), QuizStep::Question(4));
    assert_eq!(
        app.toasts.last().map(|t| t.message.as_str()),
        Some("Could not save your quiz result")
    );
}

#[test]
fn dashboard_insights_reflect_result_and_latest_content() {
    let mut content = MemoryContentStore::new();
    content
        .insert(NewContent::Market(NewMarketUpdate {
            week_of: "Mar 4, 2024".into(),
            title: "Rates on hold".into(),
            ..Default::default()
        }))
        .unwrap();
    let mut app = app_with_result("conservative", content);

    assert_eq!(app.greeting_name(), "Conservative");
    let insights = app.dashboard_insights();
    assert_eq!(insights[0].value, "Conservative (Safe)");
    assert_eq!(insights[0].helper, "Personalised insights unlocked");
    assert_eq!(insights[1].value, "Mar 4, 2024");
    assert_eq!(insights[2].value, "Queued");
    assert_eq!(insights[2].helper, "Stay tuned for the next drop");
}

#[test]
fn corrupt_stored_result_counts_as_no_result() {
    let mut slot = MemoryStore::new();
    slot.set(QUIZ_RESULT_KEY, r#"{"profile":"reckless"}"#).unwrap();
    let app = FinAwareApp::with_stores(
        AppConfig::default(),
        Box::new(slot),
        Box::new(MemoryContentStore::new()),
    );
    assert_eq!(app.page, Page::Quiz);
}
