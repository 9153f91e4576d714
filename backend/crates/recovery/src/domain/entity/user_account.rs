//! User Account Entity
//!
//! The projection of a user record as seen by the recovery subsystem.
//! The record itself is owned by the external user store; only the
//! fields recovery needs cross the boundary.

use crate::domain::value_object::email::Email;
use kernel::id::UserId;

/// Recovery's view of a user record
#[derive(Debug, Clone)]
pub struct UserAccount {
    pub user_id: UserId,
    pub email: Email,
    pub has_security_questions: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_construction() {
        let account = UserAccount {
            user_id: UserId::from_string("user-1"),
            email: Email::new("user@example.com").unwrap(),
            has_security_questions: false,
        };
        assert_eq!(account.user_id.as_str(), "user-1");
        assert!(!account.has_security_questions);
    }
}
