//! Printable question sets.
//!
//! A worksheet holds questions with the same shape as a session's but is
//! never answered through the state machine; it exists only to be rendered.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::generator::{generate_questions, RandomSource};
use crate::model::Question;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Worksheet {
    pub created_at: DateTime<Utc>,
    pub questions: Vec<Question>,
}

impl Worksheet {
    /// Generate a worksheet of `count` questions.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidInput`] when `count` is zero.
    pub fn generate(count: u32, rng: &mut dyn RandomSource) -> Result<Self, CoreError> {
        if count < 1 {
            return Err(CoreError::invalid(
                "number of questions must be at least 1",
            ));
        }
        tracing::debug!(count, "generating worksheet");
        Ok(Self {
            created_at: Utc::now(),
            questions: generate_questions(count, rng),
        })
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::RngSource;

    #[test]
    fn zero_count_rejected() {
        let err = Worksheet::generate(0, &mut RngSource::seeded(0)).unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn questions_are_unanswered_and_numbered() {
        let sheet = Worksheet::generate(12, &mut RngSource::seeded(0)).unwrap();
        assert_eq!(sheet.len(), 12);
        assert!(!sheet.is_empty());
        for (i, q) in sheet.questions.iter().enumerate() {
            assert_eq!(q.id as usize, i + 1);
            assert!(q.user_answer.is_empty());
        }
    }
}
