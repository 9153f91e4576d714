//! Security Question Set Entity
//!
//! A user has exactly three (question, hashed answer) pairs, or no set
//! at all. The set is always written wholesale, never patched.

use crate::error::{RecoveryError, RecoveryResult};
use platform::answer::AnswerHash;

/// Number of questions in a configured set
pub const QUESTION_COUNT: usize = 3;

/// One question with its hashed answer
#[derive(Debug, Clone)]
pub struct SecurityQuestion {
    pub question: String,
    pub answer_hash: AnswerHash,
}

/// A user's complete security question set
///
/// The three-entry invariant is enforced at construction; a set of any
/// other size cannot exist.
#[derive(Debug, Clone)]
pub struct SecurityQuestionSet {
    entries: Vec<SecurityQuestion>,
}

impl SecurityQuestionSet {
    pub fn new(entries: Vec<SecurityQuestion>) -> RecoveryResult<Self> {
        if entries.len() != QUESTION_COUNT {
            return Err(RecoveryError::InvalidInput(format!(
                "Exactly {} security questions are required",
                QUESTION_COUNT
            )));
        }
        Ok(Self { entries })
    }

    /// Question texts, in stored order. Hashes never leave the entity.
    pub fn questions(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.question.clone()).collect()
    }

    /// Find a stored entry by exact question text
    pub fn find(&self, question: &str) -> Option<&SecurityQuestion> {
        self.entries.iter().find(|e| e.question == question)
    }

    pub fn entries(&self) -> &[SecurityQuestion] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use platform::answer::NormalizedAnswer;

    fn entry(question: &str, answer: &str) -> SecurityQuestion {
        let normalized = NormalizedAnswer::new(answer).unwrap();
        SecurityQuestion {
            question: question.to_string(),
            answer_hash: AnswerHash::from_answer(&normalized).unwrap(),
        }
    }

    #[test]
    fn test_exactly_three_required() {
        let two = vec![entry("Q1?", "a"), entry("Q2?", "b")];
        assert!(matches!(
            SecurityQuestionSet::new(two),
            Err(RecoveryError::InvalidInput(_))
        ));

        let three = vec![entry("Q1?", "a"), entry("Q2?", "b"), entry("Q3?", "c")];
        assert!(SecurityQuestionSet::new(three).is_ok());
    }

    #[test]
    fn test_find_is_exact_match() {
        let set = SecurityQuestionSet::new(vec![
            entry("First pet?", "rex"),
            entry("Birth city?", "osaka"),
            entry("First teacher?", "tanaka"),
        ])
        .unwrap();

        assert!(set.find("First pet?").is_some());
        assert!(set.find("first pet?").is_none());
        assert!(set.find("First pet? ").is_none());
    }

    #[test]
    fn test_questions_in_order() {
        let set = SecurityQuestionSet::new(vec![
            entry("Q1?", "a"),
            entry("Q2?", "b"),
            entry("Q3?", "c"),
        ])
        .unwrap();
        assert_eq!(set.questions(), vec!["Q1?", "Q2?", "Q3?"]);
    }
}
