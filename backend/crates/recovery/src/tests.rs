//! Unit tests for the recovery crate
//!
//! Exercises the use cases end-to-end against the in-memory store.

use std::sync::Arc;

use crate::application::config::RecoveryConfig;
use crate::application::{
    GetSecurityQuestionsUseCase, QuestionAnswerPair, ResetPasswordInput, ResetPasswordUseCase,
    SaveSecurityQuestionsInput, SaveSecurityQuestionsUseCase, SubmittedAnswer,
    VerifySecurityAnswersInput, VerifySecurityAnswersUseCase,
};
use crate::error::RecoveryError;
use crate::infra::memory::MemoryRecoveryStore;
use kernel::id::UserId;
use platform::rate_limit::RateLimitConfig;

type MemStore = MemoryRecoveryStore;

fn default_questions() -> Vec<QuestionAnswerPair> {
    vec![
        QuestionAnswerPair {
            question: "What was your first pet's name?".to_string(),
            answer: "Fluffy".to_string(),
        },
        QuestionAnswerPair {
            question: "In what city were you born?".to_string(),
            answer: "Osaka".to_string(),
        },
        QuestionAnswerPair {
            question: "What was your first teacher's name?".to_string(),
            answer: "Tanaka".to_string(),
        },
    ]
}

fn answers(pairs: &[(&str, &str)]) -> Vec<SubmittedAnswer> {
    pairs
        .iter()
        .map(|(question, answer)| SubmittedAnswer {
            question: question.to_string(),
            answer: answer.to_string(),
        })
        .collect()
}

fn correct_answers() -> Vec<SubmittedAnswer> {
    answers(&[
        ("What was your first pet's name?", "Fluffy"),
        ("In what city were you born?", "Osaka"),
        ("What was your first teacher's name?", "Tanaka"),
    ])
}

async fn store_with_recovery_user(email: &str) -> (MemStore, UserId) {
    let store = MemStore::new();
    let user_id = store.insert_user(email).unwrap();

    let save = SaveSecurityQuestionsUseCase::new(Arc::new(store.clone()));
    save.execute(SaveSecurityQuestionsInput {
        user_id: user_id.clone(),
        requester_id: user_id.clone(),
        questions: default_questions(),
    })
    .await
    .unwrap();

    (store, user_id)
}

fn get_use_case(
    store: &MemStore,
    config: RecoveryConfig,
) -> GetSecurityQuestionsUseCase<MemStore, MemStore, MemStore> {
    GetSecurityQuestionsUseCase::new(
        Arc::new(store.clone()),
        Arc::new(store.clone()),
        Arc::new(store.clone()),
        Arc::new(config),
    )
}

fn verify_use_case(
    store: &MemStore,
    config: RecoveryConfig,
) -> VerifySecurityAnswersUseCase<MemStore, MemStore, MemStore, MemStore> {
    VerifySecurityAnswersUseCase::new(
        Arc::new(store.clone()),
        Arc::new(store.clone()),
        Arc::new(store.clone()),
        Arc::new(store.clone()),
        Arc::new(config),
    )
}

fn reset_use_case(
    store: &MemStore,
    config: RecoveryConfig,
) -> ResetPasswordUseCase<MemStore, MemStore, MemStore, MemStore> {
    ResetPasswordUseCase::new(
        Arc::new(store.clone()),
        Arc::new(store.clone()),
        Arc::new(store.clone()),
        Arc::new(store.clone()),
        Arc::new(config),
    )
}

mod save_questions_tests {
    use super::*;

    #[tokio::test]
    async fn test_owner_only() {
        let store = MemStore::new();
        let owner = store.insert_user("owner@example.com").unwrap();
        let stranger = store.insert_user("stranger@example.com").unwrap();

        let save = SaveSecurityQuestionsUseCase::new(Arc::new(store.clone()));
        let result = save
            .execute(SaveSecurityQuestionsInput {
                user_id: owner,
                requester_id: stranger,
                questions: default_questions(),
            })
            .await;

        assert!(matches!(result, Err(RecoveryError::NotOwner)));
    }

    #[tokio::test]
    async fn test_exactly_three_required() {
        let store = MemStore::new();
        let user_id = store.insert_user("user@example.com").unwrap();

        let mut two = default_questions();
        two.pop();

        let save = SaveSecurityQuestionsUseCase::new(Arc::new(store.clone()));
        let result = save
            .execute(SaveSecurityQuestionsInput {
                user_id: user_id.clone(),
                requester_id: user_id,
                questions: two,
            })
            .await;

        assert!(matches!(result, Err(RecoveryError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_empty_fields_rejected() {
        let store = MemStore::new();
        let user_id = store.insert_user("user@example.com").unwrap();
        let save = SaveSecurityQuestionsUseCase::new(Arc::new(store.clone()));

        let mut blank_question = default_questions();
        blank_question[0].question = "   ".to_string();
        let result = save
            .execute(SaveSecurityQuestionsInput {
                user_id: user_id.clone(),
                requester_id: user_id.clone(),
                questions: blank_question,
            })
            .await;
        assert!(matches!(result, Err(RecoveryError::InvalidInput(_))));

        let mut blank_answer = default_questions();
        blank_answer[1].answer = "   ".to_string();
        let result = save
            .execute(SaveSecurityQuestionsInput {
                user_id: user_id.clone(),
                requester_id: user_id,
                questions: blank_answer,
            })
            .await;
        assert!(matches!(result, Err(RecoveryError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_duplicate_questions_rejected() {
        let store = MemStore::new();
        let user_id = store.insert_user("user@example.com").unwrap();
        let save = SaveSecurityQuestionsUseCase::new(Arc::new(store.clone()));

        let mut duplicated = default_questions();
        duplicated[2].question = duplicated[0].question.clone();
        let result = save
            .execute(SaveSecurityQuestionsInput {
                user_id: user_id.clone(),
                requester_id: user_id,
                questions: duplicated,
            })
            .await;

        assert!(matches!(result, Err(RecoveryError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_save_overwrites_wholesale() {
        let (store, user_id) = store_with_recovery_user("user@example.com").await;
        let save = SaveSecurityQuestionsUseCase::new(Arc::new(store.clone()));

        let replacement = vec![
            QuestionAnswerPair {
                question: "Q1?".to_string(),
                answer: "a1".to_string(),
            },
            QuestionAnswerPair {
                question: "Q2?".to_string(),
                answer: "a2".to_string(),
            },
            QuestionAnswerPair {
                question: "Q3?".to_string(),
                answer: "a3".to_string(),
            },
        ];
        save.execute(SaveSecurityQuestionsInput {
            user_id: user_id.clone(),
            requester_id: user_id,
            questions: replacement,
        })
        .await
        .unwrap();

        let get = get_use_case(&store, RecoveryConfig::default());
        let questions = get.execute("user@example.com").await.unwrap();
        assert_eq!(questions, vec!["Q1?", "Q2?", "Q3?"]);
    }
}

mod get_questions_tests {
    use super::*;

    #[tokio::test]
    async fn test_returns_questions_in_order() {
        let (store, _) = store_with_recovery_user("user@example.com").await;
        let get = get_use_case(&store, RecoveryConfig::default());

        let questions = get.execute("user@example.com").await.unwrap();
        assert_eq!(
            questions,
            vec![
                "What was your first pet's name?",
                "In what city were you born?",
                "What was your first teacher's name?",
            ]
        );
    }

    #[tokio::test]
    async fn test_unknown_email_and_missing_set_look_identical() {
        let store = MemStore::new();
        // Exists, but never configured questions
        store.insert_user("configured-nothing@example.com").unwrap();

        let get = get_use_case(&store, RecoveryConfig::default());

        let for_unknown = get.execute("unknown@example.com").await.unwrap();
        let for_missing_set = get.execute("configured-nothing@example.com").await.unwrap();

        assert!(for_unknown.is_empty());
        assert_eq!(for_unknown, for_missing_set);
    }

    #[tokio::test]
    async fn test_invalid_email_rejected() {
        let store = MemStore::new();
        let get = get_use_case(&store, RecoveryConfig::default());

        let result = get.execute("not-an-email").await;
        assert!(matches!(result, Err(RecoveryError::InvalidEmail)));
    }

    #[tokio::test]
    async fn test_domain_restriction() {
        let (store, _) = store_with_recovery_user("student@campus.edu").await;
        let get = get_use_case(&store, RecoveryConfig::for_domain("campus.edu"));

        assert!(get.execute("student@campus.edu").await.is_ok());
        assert!(matches!(
            get.execute("student@gmail.com").await,
            Err(RecoveryError::InvalidEmail)
        ));
    }

    #[tokio::test]
    async fn test_rate_limited() {
        let (store, _) = store_with_recovery_user("user@example.com").await;
        let config = RecoveryConfig {
            questions_rate_limit: RateLimitConfig::new(2, 3600),
            ..Default::default()
        };
        let get = get_use_case(&store, config);

        assert!(get.execute("user@example.com").await.is_ok());
        assert!(get.execute("user@example.com").await.is_ok());
        assert!(matches!(
            get.execute("user@example.com").await,
            Err(RecoveryError::RateLimited)
        ));
    }
}

mod verify_answers_tests {
    use super::*;

    /// End-to-end scenario: answers saved as "Fluffy" verify as " fLuFfY "
    #[tokio::test]
    async fn test_whitespace_and_case_variants_verify() {
        let (store, user_id) = store_with_recovery_user("user@example.com").await;
        let verify = verify_use_case(&store, RecoveryConfig::default());

        let output = verify
            .execute(VerifySecurityAnswersInput {
                email: "user@example.com".to_string(),
                answers: answers(&[
                    ("What was your first pet's name?", " fLuFfY "),
                    ("In what city were you born?", "Osaka"),
                    ("What was your first teacher's name?", "Tanaka"),
                ]),
            })
            .await
            .unwrap();

        assert_eq!(output.user_id, user_id);
        assert!(!output.token.is_empty());
        assert_eq!(store.token_count(), 1);
    }

    #[tokio::test]
    async fn test_failures_share_one_message() {
        let (store, _) = store_with_recovery_user("user@example.com").await;
        let verify = verify_use_case(&store, RecoveryConfig::default());

        let one_wrong = verify
            .execute(VerifySecurityAnswersInput {
                email: "user@example.com".to_string(),
                answers: answers(&[
                    ("What was your first pet's name?", "Fluffy"),
                    ("In what city were you born?", "Osaka"),
                    ("What was your first teacher's name?", "wrong"),
                ]),
            })
            .await
            .unwrap_err();

        let all_wrong = verify
            .execute(VerifySecurityAnswersInput {
                email: "user@example.com".to_string(),
                answers: answers(&[
                    ("What was your first pet's name?", "a"),
                    ("In what city were you born?", "b"),
                    ("What was your first teacher's name?", "c"),
                ]),
            })
            .await
            .unwrap_err();

        let unknown_email = verify
            .execute(VerifySecurityAnswersInput {
                email: "unknown@example.com".to_string(),
                answers: correct_answers(),
            })
            .await
            .unwrap_err();

        assert!(matches!(one_wrong, RecoveryError::AnswersIncorrect));
        assert!(matches!(all_wrong, RecoveryError::AnswersIncorrect));
        assert!(matches!(unknown_email, RecoveryError::AnswersIncorrect));
        assert_eq!(one_wrong.user_message(), "Security answers incorrect");
        assert_eq!(one_wrong.user_message(), all_wrong.user_message());
        assert_eq!(one_wrong.user_message(), unknown_email.user_message());

        // No token issued on any failure path
        assert_eq!(store.token_count(), 0);
    }

    #[tokio::test]
    async fn test_unknown_question_text_fails() {
        let (store, _) = store_with_recovery_user("user@example.com").await;
        let verify = verify_use_case(&store, RecoveryConfig::default());

        let result = verify
            .execute(VerifySecurityAnswersInput {
                email: "user@example.com".to_string(),
                answers: answers(&[
                    ("What was your first pet's name?", "Fluffy"),
                    ("In what city were you born?", "Osaka"),
                    ("Some question never configured?", "Tanaka"),
                ]),
            })
            .await;

        assert!(matches!(result, Err(RecoveryError::AnswersIncorrect)));
    }

    #[tokio::test]
    async fn test_duplicated_question_fails() {
        let (store, _) = store_with_recovery_user("user@example.com").await;
        let verify = verify_use_case(&store, RecoveryConfig::default());

        // Three answers, but the same question twice: one stored
        // question goes unanswered, so this must not verify.
        let result = verify
            .execute(VerifySecurityAnswersInput {
                email: "user@example.com".to_string(),
                answers: answers(&[
                    ("What was your first pet's name?", "Fluffy"),
                    ("What was your first pet's name?", "Fluffy"),
                    ("What was your first teacher's name?", "Tanaka"),
                ]),
            })
            .await;

        assert!(matches!(result, Err(RecoveryError::AnswersIncorrect)));
    }

    #[tokio::test]
    async fn test_wrong_count_fails_before_rate_limit() {
        let (store, _) = store_with_recovery_user("user@example.com").await;
        let verify = verify_use_case(&store, RecoveryConfig::default());

        // Far more malformed calls than the attempt budget allows
        for _ in 0..20 {
            let result = verify
                .execute(VerifySecurityAnswersInput {
                    email: "user@example.com".to_string(),
                    answers: answers(&[("What was your first pet's name?", "Fluffy")]),
                })
                .await;
            assert!(matches!(result, Err(RecoveryError::InvalidInput(_))));
        }

        // None of them consumed a rate-limit slot
        let result = verify
            .execute(VerifySecurityAnswersInput {
                email: "user@example.com".to_string(),
                answers: correct_answers(),
            })
            .await;
        assert!(result.is_ok());
    }

    /// End-to-end scenario: the 6th attempt in the window is refused
    /// no matter whether its answers are correct
    #[tokio::test]
    async fn test_sixth_attempt_rate_limited() {
        let (store, _) = store_with_recovery_user("user@example.com").await;
        let verify = verify_use_case(&store, RecoveryConfig::default());

        for _ in 0..5 {
            let result = verify
                .execute(VerifySecurityAnswersInput {
                    email: "user@example.com".to_string(),
                    answers: answers(&[
                        ("What was your first pet's name?", "wrong"),
                        ("In what city were you born?", "wrong"),
                        ("What was your first teacher's name?", "wrong"),
                    ]),
                })
                .await;
            assert!(matches!(result, Err(RecoveryError::AnswersIncorrect)));
        }

        let sixth = verify
            .execute(VerifySecurityAnswersInput {
                email: "user@example.com".to_string(),
                answers: correct_answers(),
            })
            .await;
        assert!(matches!(sixth, Err(RecoveryError::RateLimited)));
        assert_eq!(
            sixth.unwrap_err().user_message(),
            "Too many verification attempts. Please try again later."
        );
    }
}

mod token_tests {
    use super::*;
    use crate::domain::entity::verification_token::VerificationToken;
    use crate::domain::repository::{TokenConsume, TokenRepository};
    use crate::domain::value_object::email::Email;

    fn issued(ttl_ms: i64) -> VerificationToken {
        VerificationToken::issue(
            UserId::from_string("user-1"),
            Email::new("user@example.com").unwrap(),
            ttl_ms,
        )
    }

    #[tokio::test]
    async fn test_single_use_under_concurrency() {
        let store = MemStore::new();
        let token = issued(600_000);
        store.create(token.record()).await.unwrap();

        let fingerprint = token.record().fingerprint.clone();
        let (first, second) =
            tokio::join!(store.consume(&fingerprint), store.consume(&fingerprint));

        let outcomes = [first.unwrap(), second.unwrap()];
        let consumed = outcomes
            .iter()
            .filter(|o| matches!(o, TokenConsume::Consumed(_)))
            .count();
        let missing = outcomes
            .iter()
            .filter(|o| matches!(o, TokenConsume::Missing))
            .count();

        assert_eq!(consumed, 1);
        assert_eq!(missing, 1);
    }

    #[tokio::test]
    async fn test_expired_token_reports_expired_and_is_deleted() {
        let store = MemStore::new();
        let token = issued(-1_000);
        store.create(token.record()).await.unwrap();

        let fingerprint = &token.record().fingerprint;
        assert!(matches!(
            store.consume(fingerprint).await.unwrap(),
            TokenConsume::Expired
        ));
        // Delete-on-read: the expired record is gone
        assert!(matches!(
            store.consume(fingerprint).await.unwrap(),
            TokenConsume::Missing
        ));
    }

    #[tokio::test]
    async fn test_unknown_token_missing() {
        let store = MemStore::new();
        assert!(matches!(
            store.consume("no-such-fingerprint").await.unwrap(),
            TokenConsume::Missing
        ));
    }
}

mod reset_password_tests {
    use super::*;

    const STRONG_PASSWORD: &str = "Correct#Horse7battery";

    async fn verified_token(store: &MemStore, email: &str) -> String {
        let verify = verify_use_case(store, RecoveryConfig::default());
        verify
            .execute(VerifySecurityAnswersInput {
                email: email.to_string(),
                answers: correct_answers(),
            })
            .await
            .unwrap()
            .token
    }

    #[tokio::test]
    async fn test_happy_path() {
        let (store, user_id) = store_with_recovery_user("user@example.com").await;
        let token = verified_token(&store, "user@example.com").await;

        let reset = reset_use_case(&store, RecoveryConfig::default());
        reset
            .execute(ResetPasswordInput {
                email: "user@example.com".to_string(),
                new_password: STRONG_PASSWORD.to_string(),
                token: token.clone(),
            })
            .await
            .unwrap();

        let candidate =
            crate::domain::value_object::new_password::NewPassword::new(STRONG_PASSWORD.to_string())
                .unwrap();
        assert!(store.password_matches(&user_id, &candidate));
        assert_eq!(store.token_count(), 0);

        // The token cannot be redeemed twice
        let again = reset
            .execute(ResetPasswordInput {
                email: "user@example.com".to_string(),
                new_password: STRONG_PASSWORD.to_string(),
                token,
            })
            .await;
        assert!(matches!(again, Err(RecoveryError::TokenNotFound)));
    }

    /// End-to-end scenario: a weak password burns the token (fail-closed)
    #[tokio::test]
    async fn test_weak_password_still_consumes_token() {
        let (store, user_id) = store_with_recovery_user("user@example.com").await;
        let token = verified_token(&store, "user@example.com").await;
        let reset = reset_use_case(&store, RecoveryConfig::default());

        // 11 characters: fails the 12-minimum, nothing else
        let weak = reset
            .execute(ResetPasswordInput {
                email: "user@example.com".to_string(),
                new_password: "Aa1!aaaaaaa".to_string(),
                token: token.clone(),
            })
            .await;
        assert!(matches!(weak, Err(RecoveryError::WeakPassword(_))));
        assert_eq!(store.token_count(), 0);

        // Same token with a valid password now fails: the flow must
        // restart from answer verification
        let retry = reset
            .execute(ResetPasswordInput {
                email: "user@example.com".to_string(),
                new_password: STRONG_PASSWORD.to_string(),
                token,
            })
            .await;
        assert!(matches!(retry, Err(RecoveryError::TokenNotFound)));

        let candidate =
            crate::domain::value_object::new_password::NewPassword::new(STRONG_PASSWORD.to_string())
                .unwrap();
        assert!(!store.password_matches(&user_id, &candidate));
    }

    #[tokio::test]
    async fn test_token_email_mismatch() {
        let (store, _) = store_with_recovery_user("user@example.com").await;
        let token = verified_token(&store, "user@example.com").await;

        let reset = reset_use_case(&store, RecoveryConfig::default());
        let result = reset
            .execute(ResetPasswordInput {
                email: "other@example.com".to_string(),
                new_password: STRONG_PASSWORD.to_string(),
                token,
            })
            .await;

        assert!(matches!(result, Err(RecoveryError::TokenMismatch)));
        // Spent on inspection, like every other outcome
        assert_eq!(store.token_count(), 0);
    }

    #[tokio::test]
    async fn test_user_mismatch_when_account_vanishes() {
        let (store, user_id) = store_with_recovery_user("user@example.com").await;
        let token = verified_token(&store, "user@example.com").await;

        store.remove_user(&user_id);

        let reset = reset_use_case(&store, RecoveryConfig::default());
        let result = reset
            .execute(ResetPasswordInput {
                email: "user@example.com".to_string(),
                new_password: STRONG_PASSWORD.to_string(),
                token,
            })
            .await;

        assert!(matches!(result, Err(RecoveryError::UserMismatch)));
    }

    #[tokio::test]
    async fn test_rate_limited() {
        let (store, _) = store_with_recovery_user("user@example.com").await;
        let config = RecoveryConfig {
            reset_rate_limit: RateLimitConfig::new(2, 3600),
            ..Default::default()
        };
        let reset = reset_use_case(&store, config);

        for _ in 0..2 {
            let result = reset
                .execute(ResetPasswordInput {
                    email: "user@example.com".to_string(),
                    new_password: STRONG_PASSWORD.to_string(),
                    token: "garbage".to_string(),
                })
                .await;
            assert!(matches!(result, Err(RecoveryError::TokenNotFound)));
        }

        let third = reset
            .execute(ResetPasswordInput {
                email: "user@example.com".to_string(),
                new_password: STRONG_PASSWORD.to_string(),
                token: "garbage".to_string(),
            })
            .await;
        assert!(matches!(third, Err(RecoveryError::RateLimited)));
    }
}

mod error_tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    #[test]
    fn test_status_codes() {
        let cases: Vec<(RecoveryError, StatusCode)> = vec![
            (RecoveryError::InvalidEmail, StatusCode::BAD_REQUEST),
            (
                RecoveryError::InvalidInput("x".into()),
                StatusCode::BAD_REQUEST,
            ),
            (
                RecoveryError::WeakPassword("x".into()),
                StatusCode::BAD_REQUEST,
            ),
            (RecoveryError::AnswersIncorrect, StatusCode::UNAUTHORIZED),
            (RecoveryError::RateLimited, StatusCode::TOO_MANY_REQUESTS),
            (RecoveryError::TokenNotFound, StatusCode::GONE),
            (RecoveryError::TokenExpired, StatusCode::GONE),
            (RecoveryError::TokenMismatch, StatusCode::GONE),
            (RecoveryError::UserMismatch, StatusCode::GONE),
            (RecoveryError::NotOwner, StatusCode::FORBIDDEN),
            (
                RecoveryError::Internal("x".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            let response = error.into_response();
            assert_eq!(response.status(), expected);
        }
    }

    #[test]
    fn test_token_failures_share_user_message() {
        let messages: Vec<String> = [
            RecoveryError::TokenNotFound,
            RecoveryError::TokenExpired,
            RecoveryError::TokenMismatch,
            RecoveryError::UserMismatch,
        ]
        .iter()
        .map(RecoveryError::user_message)
        .collect();

        assert!(messages.iter().all(|m| m == &messages[0]));
        // The internal distinction never leaks into the user string
        assert!(!messages[0].to_lowercase().contains("mismatch"));
    }

    #[test]
    fn test_internal_text_never_crosses_boundary() {
        let err = RecoveryError::Internal("connection refused to 10.0.0.5".into());
        assert!(!err.user_message().contains("10.0.0.5"));
    }
}

mod dto_tests {
    use crate::presentation::dto::*;

    #[test]
    fn test_verify_response_serialization() {
        let response = VerifyAnswersResponse {
            verified: true,
            token: "tok".to_string(),
            user_id: "user-1".to_string(),
            expires_at_ms: 1234567890000,
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains(r#""verified":true"#));
        assert!(json.contains("userId"));
        assert!(json.contains("expiresAtMs"));
    }

    #[test]
    fn test_reset_request_deserialization() {
        let json = r#"{"email":"user@example.com","newPassword":"Correct#Horse7battery","token":"tok"}"#;
        let request: ResetPasswordRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.email, "user@example.com");
        assert_eq!(request.new_password, "Correct#Horse7battery");
        assert_eq!(request.token, "tok");
    }

    #[test]
    fn test_verify_request_deserialization() {
        let json = r#"{"email":"user@example.com","answers":[{"question":"Q?","answer":"a"}]}"#;
        let request: VerifyAnswersRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.answers.len(), 1);
        assert_eq!(request.answers[0].question, "Q?");
    }

    #[test]
    fn test_questions_response_serialization() {
        let response = QuestionsResponse {
            questions: vec!["Q1?".to_string()],
        };
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"questions":["Q1?"]}"#);
    }
}
