use crate::error::QuizError;
use crate::model::{QuizQuestion, RiskProfile};
use std::collections::BTreeMap;

/// One selected category per question id. Last write wins, no history.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AnswerSet {
    answers: BTreeMap<u32, RiskProfile>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_answer(&mut self, question_id: u32, category: RiskProfile) {
        self.answers.insert(question_id, category);
    }

    /// Records an answer given as a raw tag. Unknown tags are rejected here
    /// so they never reach [`tally`].
    pub fn record_tag(&mut self, question_id: u32, tag: &str) -> Result<(), QuizError> {
        let category = tag.parse()?;
        self.record_answer(question_id, category);
        Ok(())
    }

    pub fn get(&self, question_id: u32) -> Option<RiskProfile> {
        self.answers.get(&question_id).copied()
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// True when every question in `questions` has an entry.
    pub fn is_complete(&self, questions: &[QuizQuestion]) -> bool {
        questions.iter().all(|q| self.answers.contains_key(&q.id))
    }

    pub fn values(&self) -> impl Iterator<Item = RiskProfile> + '_ {
        self.answers.values().copied()
    }
}

/// Per-category answer counts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    pub conservative: usize,
    pub balanced: usize,
    pub aggressive: usize,
}

impl Tally {
    pub fn add(&mut self, category: RiskProfile) {
        match category {
            RiskProfile::Conservative => self.conservative += 1,
            RiskProfile::Balanced => self.balanced += 1,
            RiskProfile::Aggressive => self.aggressive += 1,
        }
    }

    pub fn max(&self) -> usize {
        self.conservative.max(self.balanced).max(self.aggressive)
    }
}

pub fn tally(answers: &AnswerSet) -> Tally {
    let mut t = Tally::default();
    for category in answers.values() {
        t.add(category);
    }
    t
}

/// Majority category of the answer set.
///
/// Ties resolve aggressive > balanced > conservative. Partial sets are scored
/// as-is; an empty set ties at zero and therefore yields aggressive.
pub fn compute_result(answers: &AnswerSet) -> RiskProfile {
    let t = tally(answers);
    let max = t.max();

    if t.aggressive == max {
        RiskProfile::Aggressive
    } else if t.balanced == max {
        RiskProfile::Balanced
    } else {
        RiskProfile::Conservative
    }
}
