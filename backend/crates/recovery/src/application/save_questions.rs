//! Save Security Questions Use Case
//!
//! The authenticated owner configures (or replaces) their question set.
//! The set is normalized, hashed, and written wholesale - there is no
//! partial update.

use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::entity::question_set::{
    QUESTION_COUNT, SecurityQuestion, SecurityQuestionSet,
};
use crate::domain::repository::QuestionSetRepository;
use crate::error::{RecoveryError, RecoveryResult};
use kernel::id::UserId;
use platform::answer::{AnswerHash, NormalizedAnswer};

/// One (question, answer) pair as entered by the owner
#[derive(Debug, Clone)]
pub struct QuestionAnswerPair {
    pub question: String,
    pub answer: String,
}

/// Input DTO for saving a question set
#[derive(Debug, Clone)]
pub struct SaveSecurityQuestionsInput {
    /// Account whose set is being written
    pub user_id: UserId,
    /// Authenticated caller, as established by the host's auth layer
    pub requester_id: UserId,
    pub questions: Vec<QuestionAnswerPair>,
}

/// Save Security Questions Use Case
pub struct SaveSecurityQuestionsUseCase<Q>
where
    Q: QuestionSetRepository,
{
    question_repo: Arc<Q>,
}

impl<Q> SaveSecurityQuestionsUseCase<Q>
where
    Q: QuestionSetRepository,
{
    pub fn new(question_repo: Arc<Q>) -> Self {
        Self { question_repo }
    }

    pub async fn execute(&self, input: SaveSecurityQuestionsInput) -> RecoveryResult<()> {
        if input.requester_id != input.user_id {
            tracing::warn!(
                user_id = %input.user_id,
                requester_id = %input.requester_id,
                "Attempt to save another user's security questions"
            );
            return Err(RecoveryError::NotOwner);
        }

        if input.questions.len() != QUESTION_COUNT {
            return Err(RecoveryError::InvalidInput(format!(
                "Exactly {} security questions are required",
                QUESTION_COUNT
            )));
        }

        let mut seen: HashSet<String> = HashSet::new();
        let mut entries = Vec::with_capacity(QUESTION_COUNT);

        for pair in &input.questions {
            let question = pair.question.trim();
            if question.is_empty() {
                return Err(RecoveryError::InvalidInput(
                    "Question text cannot be empty".to_string(),
                ));
            }
            if !seen.insert(question.to_string()) {
                return Err(RecoveryError::InvalidInput(
                    "Questions must be distinct".to_string(),
                ));
            }

            let normalized = NormalizedAnswer::new(&pair.answer).map_err(|_| {
                RecoveryError::InvalidInput("Answer cannot be empty".to_string())
            })?;

            entries.push(SecurityQuestion {
                question: question.to_string(),
                answer_hash: AnswerHash::from_answer(&normalized)?,
            });
        }

        let set = SecurityQuestionSet::new(entries)?;
        self.question_repo.save(&input.user_id, &set).await?;

        tracing::info!(user_id = %input.user_id, "Security question set saved");

        Ok(())
    }
}
