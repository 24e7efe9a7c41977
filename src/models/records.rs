//! Store records
//!
//! Serialized as-is in API responses.

use serde::{Deserialize, Serialize};

pub type BookId = i64;

/// A book in the collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Assigned by the store on insert, never changed afterwards
    pub id: BookId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

/// A single security question with its expected answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityQuestion {
    pub question: String,
    pub answer: String,
}

/// A preloaded user, looked up by email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub email: String,
    /// Ordered; answers are checked by position
    pub security_questions: Vec<SecurityQuestion>,
}

impl User {
    pub fn new(email: impl Into<String>, questions: &[(&str, &str)]) -> Self {
        Self {
            email: email.into(),
            security_questions: questions
                .iter()
                .map(|(question, answer)| SecurityQuestion {
                    question: question.to_string(),
                    answer: answer.to_string(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_without_author_omits_field() {
        let book = Book {
            id: 7,
            title: "Untitled".to_string(),
            author: None,
        };
        let json = serde_json::to_value(&book).unwrap();
        assert_eq!(json, serde_json::json!({"id": 7, "title": "Untitled"}));
    }

    #[test]
    fn test_user_serializes_camel_case() {
        let user = User::new("a@example.com", &[("Pet?", "Rex")]);
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["email"], "a@example.com");
        assert_eq!(json["securityQuestions"][0]["question"], "Pet?");
        assert_eq!(json["securityQuestions"][0]["answer"], "Rex");
    }
}
