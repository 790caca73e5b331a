//! Scoring and motivational tiers.
//!
//! Unanswered questions are excluded from both the numerator and the
//! denominator: stopping early never counts the remainder as wrong.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::Question;
use crate::session::Session;

/// Outcome of a session so far.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Score {
    /// Answered questions whose answer parses to the correct value.
    pub correct: usize,
    /// Questions with a non-empty answer.
    pub answered: usize,
    /// `100 * correct / answered`, or `0` when nothing was answered.
    pub percentage: f64,
}

impl Score {
    pub fn tier(&self) -> Tier {
        motivational_tier(self.percentage)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} ({:.1}%)",
            self.correct, self.answered, self.percentage
        )
    }
}

/// Per-question result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnswerStatus {
    Correct,
    Incorrect,
    Unanswered,
}

impl AnswerStatus {
    /// Symbol used in result listings.
    pub fn symbol(&self) -> &'static str {
        match self {
            AnswerStatus::Correct => "✓",
            AnswerStatus::Incorrect => "✗",
            AnswerStatus::Unanswered => "⊘",
        }
    }
}

impl fmt::Display for AnswerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerStatus::Correct => write!(f, "correct"),
            AnswerStatus::Incorrect => write!(f, "incorrect"),
            AnswerStatus::Unanswered => write!(f, "unanswered"),
        }
    }
}

/// Classify the answer recorded on `question`.
pub fn answer_status(question: &Question) -> AnswerStatus {
    if !question.is_answered() {
        return AnswerStatus::Unanswered;
    }
    match parse_integer(&question.user_answer) {
        Some(value) if value == i64::from(question.correct_answer) => AnswerStatus::Correct,
        _ => AnswerStatus::Incorrect,
    }
}

/// Score every answered question of `session`.
pub fn compute_score(session: &Session) -> Score {
    let (correct, answered) = session
        .questions()
        .iter()
        .map(answer_status)
        .fold((0, 0), |(correct, answered), status| match status {
            AnswerStatus::Correct => (correct + 1, answered + 1),
            AnswerStatus::Incorrect => (correct, answered + 1),
            AnswerStatus::Unanswered => (correct, answered),
        });

    let percentage = if answered > 0 {
        correct as f64 / answered as f64 * 100.0
    } else {
        0.0
    };

    Score {
        correct,
        answered,
        percentage,
    }
}

/// Parse the leading integer of `raw`.
///
/// Leading whitespace is skipped, one optional sign is accepted, then the
/// leading run of ASCII digits is taken and anything after it ignored.
/// Returns `None` when there are no digits or the value overflows.
pub fn parse_integer(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits_end = rest
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return None;
    }
    let magnitude: i64 = rest[..digits_end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Encouragement level shown with the final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Tier {
    Champion,
    Great,
    TryAgain,
}

impl Tier {
    pub fn message(&self) -> &'static str {
        match self {
            Tier::Champion => "You are a Math Champion! 🏆",
            Tier::Great => "Great job! 🌟",
            Tier::TryAgain => "Nice Try! 💪",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tier::Champion => write!(f, "champion"),
            Tier::Great => write!(f, "great"),
            Tier::TryAgain => write!(f, "tryAgain"),
        }
    }
}

/// Map a percentage to its tier. Both thresholds are inclusive.
pub fn motivational_tier(percentage: f64) -> Tier {
    if percentage >= 100.0 {
        Tier::Champion
    } else if percentage >= 75.0 {
        Tier::Great
    } else {
        Tier::TryAgain
    }
}
