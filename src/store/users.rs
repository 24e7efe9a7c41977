//! User Store Module
//!
//! Read-only set of preloaded users and the security-answer check.

use crate::error::{ApiError, Result, UNAUTHORIZED, USER_NOT_FOUND};
use crate::models::{SecurityAnswer, User};

// == User Store ==
#[derive(Debug, Default)]
pub struct UserStore {
    users: Vec<User>,
}

impl UserStore {
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }

    /// Creates the store the server starts with.
    pub fn seeded() -> Self {
        Self::new(vec![
            User::new(
                "john.doe@example.com",
                &[
                    ("What was the name of your first pet?", "Rex"),
                    ("In which city were you born?", "Lisbon"),
                    ("What is your favourite book?", "Dune"),
                ],
            ),
            User::new(
                "jane.smith@example.com",
                &[
                    ("What was your childhood nickname?", "Jay"),
                    ("What is your mother's maiden name?", "Walker"),
                ],
            ),
        ])
    }

    pub fn find_all(&self) -> &[User] {
        &self.users
    }

    /// Looks up a user by exact email match.
    pub fn find_by_email(&self, email: &str) -> Option<&User> {
        self.users.iter().find(|user| user.email == email)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    // == Verify ==
    /// Checks submitted answers against the user's stored answers.
    ///
    /// Comparison is positional and exact. Every stored question needs an
    /// answer at the same index; answers past the last stored question
    /// are ignored.
    pub fn verify_security_answers(&self, email: &str, answers: &[SecurityAnswer]) -> Result<()> {
        let user = self
            .find_by_email(email)
            .ok_or_else(|| ApiError::NotFound(USER_NOT_FOUND.to_string()))?;

        let all_match = user
            .security_questions
            .iter()
            .enumerate()
            .all(|(i, stored)| {
                answers
                    .get(i)
                    .is_some_and(|given| given.answer == stored.answer)
            });

        if all_match {
            Ok(())
        } else {
            Err(ApiError::Unauthorized(UNAUTHORIZED.to_string()))
        }
    }
}
