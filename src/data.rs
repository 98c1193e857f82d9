// src/data.rs

use crate::error::QuizError;
use crate::model::QuizQuestion;
use std::sync::LazyLock;

const QUESTION_BANK: &str = include_str!("data/quiz_questions.yaml");

static QUESTIONS: LazyLock<Vec<QuizQuestion>> = LazyLock::new(|| {
    parse_questions(QUESTION_BANK).expect("embedded question bank must be valid")
});

/// Question table, parsed once on first use and never mutated afterwards.
pub fn quiz_questions() -> &'static [QuizQuestion] {
    &QUESTIONS
}

/// Parses a YAML question bank and checks its shape.
///
/// Ids must run 1..=N in order and every question needs 2 to 4 options.
/// Option values outside the three categories fail here, before any answer
/// can reach the tally.
pub fn parse_questions(src: &str) -> Result<Vec<QuizQuestion>, QuizError> {
    let questions: Vec<QuizQuestion> = serde_yaml::from_str(src)
        .map_err(|e| QuizError::InvalidQuestionBank(e.to_string()))?;

    if questions.is_empty() {
        return Err(QuizError::InvalidQuestionBank("no questions".into()));
    }

    for (i, q) in questions.iter().enumerate() {
        let expected = i as u32 + 1;
        if q.id != expected {
            return Err(QuizError::InvalidQuestionBank(format!(
                "question at position {expected} has id {}",
                q.id
            )));
        }
        if !(2..=4).contains(&q.options.len()) {
            return Err(QuizError::InvalidQuestionBank(format!(
                "question {} has {} options, expected 2 to 4",
                q.id,
                q.options.len()
            )));
        }
    }

    Ok(questions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RiskProfile;

    #[test]
    fn embedded_bank_has_five_questions_starting_conservative() {
        let questions = quiz_questions();
        assert_eq!(questions.len(), 5);
        for (i, q) in questions.iter().enumerate() {
            assert_eq!(q.id, i as u32 + 1);
            assert_eq!(q.options[0].value, RiskProfile::Conservative);
            assert_eq!(q.options.len(), 3);
        }
    }

    #[test]
    fn rejects_unknown_option_category() {
        let src = r#"
- id: 1
  prompt: "?"
  options:
    - text: "a"
      value: conservative
    - text: "b"
      value: reckless
"#;
        let err = parse_questions(src).unwrap_err();
        assert!(matches!(err, QuizError::InvalidQuestionBank(_)));
    }

    #[test]
    fn rejects_out_of_order_ids_and_option_counts() {
        let gap = r#"
- id: 2
  prompt: "?"
  options:
    - { text: "a", value: conservative }
    - { text: "b", value: balanced }
"#;
        assert!(parse_questions(gap).is_err());

        let single = r#"
- id: 1
  prompt: "?"
  options:
    - { text: "a", value: conservative }
"#;
        assert!(parse_questions(single).is_err());
        assert!(parse_questions("[]").is_err());
    }
}
