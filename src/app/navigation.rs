use super::*;

impl FinAwareApp {
    /// Changes page. Entering the quiz mounts a fresh session; leaving it
    /// discards the in-flight answers.
    pub fn go_to(&mut self, page: Page) {
        if page == self.page {
            return;
        }
        self.session = if page.is_quiz() {
            Some(QuizSession::new(quiz_questions()))
        } else {
            None
        };
        self.search.clear();
        self.details.clear();
        self.loading_details.clear();
        self.page = page;
    }

    /// Redirects to the quiz while no result is stored. Returns `true` when it did.
    pub fn enforce_quiz_guard(&mut self) -> bool {
        if self.page.is_quiz() || self.results.has_completed() {
            return false;
        }
        log::debug!("no quiz result stored, redirecting to quiz");
        self.go_to(Page::Quiz);
        true
    }

    /// Opens the quiz on its first question, even if it is already showing.
    pub fn restart_quiz(&mut self) {
        self.page = Page::Quiz;
        self.session = Some(QuizSession::new(quiz_questions()));
    }

    /// "Get Started" on the result screen.
    pub fn get_started(&mut self) {
        self.go_to(Page::Dashboard);
    }

    pub fn open_item(&mut self, kind: ContentKind, id: &str) {
        match kind {
            ContentKind::Market => self.go_to(Page::MarketUpdateDetail(id.to_owned())),
            ContentKind::Ai => self.go_to(Page::AiUpdateDetail(id.to_owned())),
            ContentKind::Myth => self.go_to(Page::MythsFacts),
        }
    }
}
