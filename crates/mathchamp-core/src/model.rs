//! Core data model types for mathchamp.
//!
//! These are the fundamental types the whole system uses to represent a
//! single arithmetic question and the terms it is built from.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Smallest value any visible or hidden term may take.
pub const MIN_TERM: u32 = 1;
/// Largest value any visible or hidden term may take.
pub const MAX_TERM: u32 = 99;
/// Largest value of the single-digit operand.
pub const MAX_SINGLE_DIGIT: u32 = 9;

/// Arithmetic operator of a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    Add,
    Subtract,
}

impl Operator {
    /// The symbol rendered between the operands.
    pub fn symbol(&self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
        }
    }

    /// Apply the operator. `None` when subtraction would go below zero.
    pub fn apply(&self, a: u32, b: u32) -> Option<u32> {
        match self {
            Operator::Add => a.checked_add(b),
            Operator::Subtract => a.checked_sub(b),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operator::Add => write!(f, "add"),
            Operator::Subtract => write!(f, "subtract"),
        }
    }
}

impl FromStr for Operator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "add" | "+" | "plus" => Ok(Operator::Add),
            "subtract" | "sub" | "-" | "minus" => Ok(Operator::Subtract),
            other => Err(format!("unknown operator: {other}")),
        }
    }
}

/// Which term of the equation is hidden and must be solved for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlankPosition {
    Result,
    FirstOperand,
    SecondOperand,
}

impl fmt::Display for BlankPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlankPosition::Result => write!(f, "result"),
            BlankPosition::FirstOperand => write!(f, "first_operand"),
            BlankPosition::SecondOperand => write!(f, "second_operand"),
        }
    }
}

impl FromStr for BlankPosition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "result" => Ok(BlankPosition::Result),
            "first_operand" | "first" => Ok(BlankPosition::FirstOperand),
            "second_operand" | "second" => Ok(BlankPosition::SecondOperand),
            other => Err(format!("unknown blank position: {other}")),
        }
    }
}

/// One arithmetic problem.
///
/// `operand_a` is always the left-hand term and `operand_b` the right-hand
/// term of `a <op> b = result`, whichever of the three is blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// 1-based position within its session or worksheet.
    pub id: u32,
    pub operand_a: u32,
    pub operand_b: u32,
    pub operator: Operator,
    pub blank_position: BlankPosition,
    /// The value that belongs in the blank.
    pub correct_answer: u32,
    /// The equation with `?` in place of the blank, e.g. `34 + ? = 40`.
    pub display_text: String,
    /// Raw answer as typed. Empty means unanswered.
    #[serde(default)]
    pub user_answer: String,
}

impl Question {
    /// Build a question from its terms, checking every range invariant.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidInput`] when an operand or the result falls
    /// outside `[1, 99]`, including subtractions that would go negative.
    pub fn new(
        id: u32,
        operand_a: u32,
        operator: Operator,
        operand_b: u32,
        blank_position: BlankPosition,
    ) -> Result<Self, CoreError> {
        if id == 0 {
            return Err(CoreError::invalid("question id must be at least 1"));
        }
        let in_range = |v: u32| (MIN_TERM..=MAX_TERM).contains(&v);
        if !in_range(operand_a) || !in_range(operand_b) {
            return Err(CoreError::invalid(format!(
                "operands must be between {MIN_TERM} and {MAX_TERM}, got {operand_a} and {operand_b}"
            )));
        }
        match operator.apply(operand_a, operand_b) {
            Some(result) if in_range(result) => {}
            _ => {
                return Err(CoreError::invalid(format!(
                    "{operand_a} {} {operand_b} does not stay between {MIN_TERM} and {MAX_TERM}",
                    operator.symbol()
                )))
            }
        }
        Ok(Self::assemble(
            id,
            operand_a,
            operator,
            operand_b,
            blank_position,
        ))
    }

    /// Build a question whose terms are already known to be in range.
    pub(crate) fn assemble(
        id: u32,
        operand_a: u32,
        operator: Operator,
        operand_b: u32,
        blank_position: BlankPosition,
    ) -> Self {
        let result = match operator {
            Operator::Add => operand_a + operand_b,
            Operator::Subtract => operand_a - operand_b,
        };
        let correct_answer = match blank_position {
            BlankPosition::Result => result,
            BlankPosition::FirstOperand => operand_a,
            BlankPosition::SecondOperand => operand_b,
        };
        let slot = |value: u32, position: BlankPosition| {
            if position == blank_position {
                "?".to_string()
            } else {
                value.to_string()
            }
        };
        let display_text = format!(
            "{} {} {} = {}",
            slot(operand_a, BlankPosition::FirstOperand),
            operator.symbol(),
            slot(operand_b, BlankPosition::SecondOperand),
            slot(result, BlankPosition::Result),
        );

        Self {
            id,
            operand_a,
            operand_b,
            operator,
            blank_position,
            correct_answer,
            display_text,
            user_answer: String::new(),
        }
    }

    /// The right-hand side of the equation.
    pub fn result(&self) -> u32 {
        match self.operator {
            Operator::Add => self.operand_a.saturating_add(self.operand_b),
            Operator::Subtract => self.operand_a.saturating_sub(self.operand_b),
        }
    }

    /// Whether an answer has been recorded.
    pub fn is_answered(&self) -> bool {
        !self.user_answer.is_empty()
    }

    /// Whether the stored terms still satisfy the range invariants.
    ///
    /// Used to reject tampered or stale records loaded from storage.
    pub fn is_well_formed(&self) -> bool {
        Question::new(
            self.id.max(1),
            self.operand_a,
            self.operator,
            self.operand_b,
            self.blank_position,
        )
        .map(|fresh| {
            self.id >= 1
                && fresh.correct_answer == self.correct_answer
                && fresh.display_text == self.display_text
        })
        .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operator_display_and_parse() {
        assert_eq!(Operator::Add.to_string(), "add");
        assert_eq!(Operator::Subtract.symbol(), '-');
        assert_eq!("+".parse::<Operator>().unwrap(), Operator::Add);
        assert_eq!("Minus".parse::<Operator>().unwrap(), Operator::Subtract);
        assert!("times".parse::<Operator>().is_err());
    }

    #[test]
    fn blank_position_parse() {
        assert_eq!(
            "second".parse::<BlankPosition>().unwrap(),
            BlankPosition::SecondOperand
        );
        assert_eq!(BlankPosition::FirstOperand.to_string(), "first_operand");
        assert!("middle".parse::<BlankPosition>().is_err());
    }

    #[test]
    fn display_text_places_blank() {
        let q = Question::new(1, 34, Operator::Add, 6, BlankPosition::SecondOperand).unwrap();
        assert_eq!(q.display_text, "34 + ? = 40");
        assert_eq!(q.correct_answer, 6);

        let q = Question::new(2, 40, Operator::Subtract, 28, BlankPosition::SecondOperand)
            .unwrap();
        assert_eq!(q.display_text, "40 - ? = 12");
        assert_eq!(q.correct_answer, 28);

        let q = Question::new(3, 15, Operator::Subtract, 7, BlankPosition::Result).unwrap();
        assert_eq!(q.display_text, "15 - 7 = ?");
        assert_eq!(q.correct_answer, 8);
        assert_eq!(q.result(), 8);
    }

    #[test]
    fn new_rejects_out_of_range_terms() {
        assert!(Question::new(1, 0, Operator::Add, 5, BlankPosition::Result).is_err());
        assert!(Question::new(1, 95, Operator::Add, 5, BlankPosition::Result).is_err());
        assert!(Question::new(1, 5, Operator::Subtract, 9, BlankPosition::Result).is_err());
        assert!(Question::new(1, 9, Operator::Subtract, 9, BlankPosition::Result).is_err());
        assert!(Question::new(0, 1, Operator::Add, 1, BlankPosition::Result).is_err());
    }

    #[test]
    fn well_formed_detects_tampering() {
        let mut q = Question::new(4, 20, Operator::Add, 3, BlankPosition::FirstOperand).unwrap();
        assert!(q.is_well_formed());
        q.correct_answer = 21;
        assert!(!q.is_well_formed());
    }

    #[test]
    fn question_serde_uses_snake_case_tags() {
        let q = Question::new(1, 12, Operator::Subtract, 3, BlankPosition::FirstOperand).unwrap();
        let json = serde_json::to_string(&q).unwrap();
        assert!(json.contains("\"subtract\""));
        assert!(json.contains("\"first_operand\""));
        let back: Question = serde_json::from_str(&json).unwrap();
        assert_eq!(back, q);
    }
}
