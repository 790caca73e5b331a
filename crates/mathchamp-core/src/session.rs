//! Test session state machine.
//!
//! A [`Session`] is an immutable value. Every transition consumes the current
//! session and returns the next one; callers that want history can clone
//! before transitioning.
//!
//! ```text
//! not_started --start--> active --submit (last)--> complete
//!                          |  ^                       ^
//!                          |  +--submit (not last)    |
//!                          +--------stop_early--------+
//! any --reset--> not_started
//! ```

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::generator::{generate_questions, RandomSource};
use crate::model::Question;
use crate::scoring::{compute_score, Score};

/// Lifecycle phase of a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    #[default]
    NotStarted,
    Active,
    Complete,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::NotStarted => write!(f, "not_started"),
            Phase::Active => write!(f, "active"),
            Phase::Complete => write!(f, "complete"),
        }
    }
}

/// The state of one test attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    candidate_name: String,
    questions: Vec<Question>,
    current_index: usize,
    phase: Phase,
}

impl Session {
    /// Begin a test of `count` freshly generated questions.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidInput`] when the trimmed name is empty or
    /// `count` is zero.
    pub fn start(name: &str, count: u32, rng: &mut dyn RandomSource) -> Result<Self, CoreError> {
        let candidate_name = name.trim();
        if candidate_name.is_empty() {
            return Err(CoreError::invalid("candidate name must not be empty"));
        }
        if count < 1 {
            return Err(CoreError::invalid(
                "number of questions must be at least 1",
            ));
        }

        let questions = generate_questions(count, rng);
        tracing::debug!(candidate = candidate_name, count, "session started");

        Ok(Self {
            candidate_name: candidate_name.to_string(),
            questions,
            current_index: 0,
            phase: Phase::Active,
        })
    }

    /// Record `raw` verbatim on the current question and advance.
    ///
    /// Completes the session after the last question. Ignored outside the
    /// active phase.
    #[must_use]
    pub fn submit_answer(mut self, raw: &str) -> Self {
        if self.phase != Phase::Active {
            tracing::warn!(phase = %self.phase, "answer submitted outside an active session, ignoring");
            return self;
        }
        let Some(question) = self.questions.get_mut(self.current_index) else {
            self.phase = Phase::Complete;
            return self;
        };

        question.user_answer = raw.to_string();
        self.current_index += 1;
        if self.current_index >= self.questions.len() {
            self.phase = Phase::Complete;
        }
        tracing::debug!(
            index = self.current_index,
            total = self.questions.len(),
            phase = %self.phase,
            "answer recorded"
        );
        self
    }

    /// Finish the test now, keeping a non-empty pending answer for the
    /// current question. Unreached questions stay unanswered.
    ///
    /// Ignored outside the active phase.
    #[must_use]
    pub fn stop_early(mut self, pending: Option<&str>) -> Self {
        if self.phase != Phase::Active {
            tracing::warn!(phase = %self.phase, "stop requested outside an active session, ignoring");
            return self;
        }
        if let Some(raw) = pending.filter(|raw| !raw.is_empty()) {
            if let Some(question) = self.questions.get_mut(self.current_index) {
                question.user_answer = raw.to_string();
            }
        }
        self.phase = Phase::Complete;
        tracing::debug!(
            index = self.current_index,
            total = self.questions.len(),
            "session stopped early"
        );
        self
    }

    /// Discard this session.
    #[must_use]
    pub fn reset(self) -> Self {
        tracing::debug!("session reset");
        Self::default()
    }

    /// Score the answers recorded so far.
    pub fn score(&self) -> Score {
        compute_score(self)
    }

    pub fn candidate_name(&self) -> &str {
        &self.candidate_name
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Index of the next unanswered question, in `0..=len`.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        self.phase == Phase::Active
    }

    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Complete
    }

    /// The question awaiting an answer, while active.
    pub fn current_question(&self) -> Option<&Question> {
        if self.is_active() {
            self.questions.get(self.current_index)
        } else {
            None
        }
    }

    /// Fraction of questions already passed, in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        if self.questions.is_empty() {
            return 0.0;
        }
        self.current_index as f64 / self.questions.len() as f64
    }

    /// Whether this record could have been produced by the transitions above.
    ///
    /// Records restored from storage that fail this check are discarded.
    pub fn is_consistent(&self) -> bool {
        let len = self.questions.len();
        let shape_ok = match self.phase {
            Phase::NotStarted => {
                self.questions.is_empty()
                    && self.current_index == 0
                    && self.candidate_name.is_empty()
            }
            Phase::Active => {
                len >= 1
                    && self.current_index < len
                    && self.questions[self.current_index..]
                        .iter()
                        .all(|q| !q.is_answered())
            }
            Phase::Complete => len >= 1 && self.current_index <= len,
        };
        let name_ok = self.phase == Phase::NotStarted
            || (!self.candidate_name.trim().is_empty()
                && self.candidate_name.trim() == self.candidate_name);
        let ids_ok = self
            .questions
            .iter()
            .enumerate()
            .all(|(i, q)| q.id as usize == i + 1 && q.is_well_formed());

        shape_ok && name_ok && ids_ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{RngSource, ScriptedSource};
    use crate::model::{BlankPosition, Operator};

    fn started(count: u32) -> Session {
        Session::start("Ann", count, &mut RngSource::seeded(3)).unwrap()
    }

    #[test]
    fn start_rejects_invalid_input() {
        let mut rng = RngSource::seeded(0);
        assert!(matches!(
            Session::start("", 5, &mut rng),
            Err(CoreError::InvalidInput(_))
        ));
        assert!(matches!(
            Session::start("   ", 5, &mut rng),
            Err(CoreError::InvalidInput(_))
        ));
        assert!(matches!(
            Session::start("Ann", 0, &mut rng),
            Err(CoreError::InvalidInput(_))
        ));
    }

    #[test]
    fn start_builds_active_session() {
        let session = Session::start("  Ann ", 5, &mut RngSource::seeded(0)).unwrap();
        assert_eq!(session.candidate_name(), "Ann");
        assert_eq!(session.questions().len(), 5);
        let ids: Vec<u32> = session.questions().iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert_eq!(session.phase(), Phase::Active);
        assert_eq!(session.current_index(), 0);
        assert!(session.is_consistent());
    }

    #[test]
    fn completes_exactly_after_last_answer() {
        let mut session = started(4);
        for i in 0..4 {
            assert_eq!(session.phase(), Phase::Active, "completed early at {i}");
            session = session.submit_answer("1");
        }
        assert_eq!(session.phase(), Phase::Complete);
        assert_eq!(session.current_index(), 4);
        assert!(session.current_question().is_none());
        assert!((session.progress() - 1.0).abs() < f64::EPSILON);
        assert!(session.is_consistent());
    }

    #[test]
    fn submit_records_verbatim() {
        let session = started(2).submit_answer(" 12abc ");
        assert_eq!(session.questions()[0].user_answer, " 12abc ");
        assert_eq!(session.current_index(), 1);
        assert_eq!(session.current_question().map(|q| q.id), Some(2));
    }

    #[test]
    fn stop_early_keeps_remaining_blank() {
        let mut session = started(10);
        for _ in 0..3 {
            session = session.submit_answer("5");
        }
        let session = session.stop_early(None);
        assert!(session.is_complete());
        assert_eq!(session.score().answered, 3);
        assert_eq!(
            session
                .questions()
                .iter()
                .filter(|q| q.user_answer.is_empty())
                .count(),
            7
        );
    }

    #[test]
    fn stop_early_records_pending_answer() {
        let session = started(3).submit_answer("1").stop_early(Some("42"));
        assert_eq!(session.questions()[1].user_answer, "42");
        assert_eq!(session.score().answered, 2);

        let session = started(3).stop_early(Some(""));
        assert_eq!(session.score().answered, 0);
    }

    #[test]
    fn transitions_outside_active_are_ignored() {
        let done = started(1).submit_answer("3");
        let again = done.clone().submit_answer("4");
        assert_eq!(again, done);
        assert_eq!(done.clone().stop_early(Some("9")), done);

        let fresh = Session::default();
        assert_eq!(fresh.clone().submit_answer("1"), fresh);
        assert_eq!(fresh.phase(), Phase::NotStarted);
    }

    #[test]
    fn reset_returns_not_started() {
        let session = started(3).submit_answer("1").reset();
        assert_eq!(session, Session::default());
        assert_eq!(session.phase(), Phase::NotStarted);
        assert!(session.is_consistent());
    }

    #[test]
    fn transitions_leave_earlier_values_untouched() {
        let before = started(2);
        let after = before.clone().submit_answer("7");
        assert!(before.questions()[0].user_answer.is_empty());
        assert_eq!(after.questions()[0].user_answer, "7");
    }

    #[test]
    fn consistency_rejects_tampered_records() {
        let session = Session::start("Bo", 2, &mut ScriptedSource::new([0, 0, 3, 10]))
            .unwrap()
            .submit_answer("13");
        assert!(session.is_consistent());

        let mut json: serde_json::Value = serde_json::to_value(&session).unwrap();
        json["current_index"] = serde_json::json!(7);
        let broken: Session = serde_json::from_value(json).unwrap();
        assert!(!broken.is_consistent());

        let mut json: serde_json::Value = serde_json::to_value(&session).unwrap();
        json["candidate_name"] = serde_json::json!("  ");
        let broken: Session = serde_json::from_value(json).unwrap();
        assert!(!broken.is_consistent());
    }

    #[test]
    fn serde_roundtrip_preserves_state() {
        let session = Session::start("Cy", 3, &mut ScriptedSource::new([1, 2, 4, 11]))
            .unwrap()
            .submit_answer("4");
        let json = serde_json::to_string(&session).unwrap();
        assert!(json.contains("\"active\""));
        let restored: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, session);
        assert_eq!(restored.questions()[0].operator, Operator::Subtract);
        assert_eq!(
            restored.questions()[0].blank_position,
            BlankPosition::SecondOperand
        );
    }
}
