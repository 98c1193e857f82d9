use super::scoring::{AnswerSet, compute_result};
use super::store::{KeyValueStore, ResultStore};
use crate::error::StoreError;
use crate::model::{QuizQuestion, RiskProfile};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizStep {
    /// Zero-based index into the question table.
    Question(usize),
    /// Terminal; leaving it is a page change, not a step.
    Result(RiskProfile),
}

/// In-memory state of one quiz run. Created when the quiz page mounts and
/// dropped when it unmounts; nothing here is persisted until the run finishes.
#[derive(Clone, Debug)]
pub struct QuizSession<'q> {
    questions: &'q [QuizQuestion],
    answers: AnswerSet,
    step: QuizStep,
}

impl<'q> QuizSession<'q> {
    pub fn new(questions: &'q [QuizQuestion]) -> Self {
        Self {
            questions,
            answers: AnswerSet::new(),
            step: QuizStep::Question(0),
        }
    }

    pub fn step(&self) -> QuizStep {
        self.step
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn current_index(&self) -> Option<usize> {
        match self.step {
            QuizStep::Question(i) => Some(i),
            QuizStep::Result(_) => None,
        }
    }

    pub fn current_question(&self) -> Option<&'q QuizQuestion> {
        self.current_index().and_then(|i| self.questions.get(i))
    }

    pub fn is_last_question(&self) -> bool {
        self.current_index().is_some_and(|i| i + 1 == self.questions.len())
    }

    /// Category recorded for the current question, if any.
    pub fn selected(&self) -> Option<RiskProfile> {
        self.current_question().and_then(|q| self.answers.get(q.id))
    }

    pub fn result(&self) -> Option<RiskProfile> {
        match self.step {
            QuizStep::Result(profile) => Some(profile),
            QuizStep::Question(_) => None,
        }
    }

    /// Percentage shown in the progress bar: `(i + 1) / N`, rounded.
    pub fn progress_percent(&self) -> u32 {
        let total = self.questions.len();
        match self.step {
            QuizStep::Result(_) => 100,
            QuizStep::Question(_) if total == 0 => 0,
            QuizStep::Question(i) => (((i + 1) as f64 / total as f64) * 100.0).round() as u32,
        }
    }

    pub fn record_answer(&mut self, question_id: u32, category: RiskProfile) {
        self.answers.record_answer(question_id, category);
    }

    /// Records the category of option `option_idx` of the current question.
    /// Returns `false` when there is no such option.
    pub fn choose_option(&mut self, option_idx: usize) -> bool {
        let Some(question) = self.current_question() else {
            return false;
        };
        match question.options.get(option_idx) {
            Some(option) => {
                self.answers.record_answer(question.id, option.value);
                true
            }
            None => false,
        }
    }

    /// "Next" is enabled only once the current question has an answer.
    pub fn can_advance(&self) -> bool {
        self.selected().is_some()
    }

    /// Moves forward one question. On the last question this scores the run
    /// and persists the result before entering [`QuizStep::Result`].
    ///
    /// Blocked moves leave the step unchanged. If persisting fails the
    /// session stays on the last question.
    pub fn next<S: KeyValueStore>(
        &mut self,
        store: &mut ResultStore<S>,
    ) -> Result<QuizStep, StoreError> {
        let QuizStep::Question(i) = self.step else {
            return Ok(self.step);
        };
        if !self.can_advance() {
            return Ok(self.step);
        }

        if i + 1 < self.questions.len() {
            self.step = QuizStep::Question(i + 1);
        } else {
            let profile = compute_result(&self.answers);
            store.persist_result(profile)?;
            log::info!("quiz completed with profile {profile}");
            self.step = QuizStep::Result(profile);
        }
        Ok(self.step)
    }

    pub fn back(&mut self) -> QuizStep {
        if let QuizStep::Question(i) = self.step {
            if i > 0 {
                self.step = QuizStep::Question(i - 1);
            }
        }
        self.step
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::quiz_questions;
    use crate::quiz::store::MemoryStore;

    fn fixtures() -> (QuizSession<'static>, ResultStore<MemoryStore>) {
        (
            QuizSession::new(quiz_questions()),
            ResultStore::new(MemoryStore::new()),
        )
    }

    #[test]
    fn starts_on_first_question_with_next_blocked() {
        let (mut session, mut store) = fixtures();
        assert_eq!(session.step(), QuizStep::Question(0));
        assert!(!session.can_advance());
        assert_eq!(session.next(&mut store).unwrap(), QuizStep::Question(0));
        assert!(!store.has_completed());
    }

    #[test]
    fn back_is_a_no_op_on_first_question() {
        let (mut session, mut store) = fixtures();
        assert_eq!(session.back(), QuizStep::Question(0));
        session.choose_option(1);
        session.next(&mut store).unwrap();
        assert_eq!(session.back(), QuizStep::Question(0));
        // the earlier answer is still there after going back
        assert_eq!(session.selected(), Some(RiskProfile::Balanced));
    }

    #[test]
    fn answering_index_zero_everywhere_yields_conservative() {
        let (mut session, mut store) = fixtures();
        for _ in 0..session.total() {
            assert!(session.choose_option(0));
            session.next(&mut store).unwrap();
        }
        assert_eq!(session.step(), QuizStep::Result(RiskProfile::Conservative));
        assert_eq!(
            store.load_result().map(|r| r.profile),
            Some(RiskProfile::Conservative)
        );

        // terminal: further moves do nothing
        assert_eq!(session.back(), QuizStep::Result(RiskProfile::Conservative));
        assert_eq!(
            session.next(&mut store).unwrap(),
            QuizStep::Result(RiskProfile::Conservative)
        );
    }

    #[test]
    fn progress_and_last_question_flags() {
        let (mut session, mut store) = fixtures();
        assert_eq!(session.progress_percent(), 20);
        for _ in 0..4 {
            session.choose_option(2);
            session.next(&mut store).unwrap();
        }
        assert!(session.is_last_question());
        assert_eq!(session.progress_percent(), 100);
    }

    #[test]
    fn out_of_range_option_is_ignored() {
        let (mut session, _) = fixtures();
        assert!(!session.choose_option(7));
        assert!(session.answers().is_empty());
    }
}
