//! Question generation.
//!
//! Each question is one of six shapes (two operators times three blank
//! positions), picked uniformly. The single-digit operand is drawn from
//! `[1, 9]` and every other term is derived so that all visible and hidden
//! numbers stay within `[1, 99]`.

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

use crate::model::{BlankPosition, Operator, Question, MAX_SINGLE_DIGIT, MAX_TERM, MIN_TERM};

/// A source of uniform integers.
///
/// Injected into the generator so tests can pin exact sequences.
pub trait RandomSource {
    /// Return an integer in `low..=high`. Callers guarantee `low <= high`.
    fn pick(&mut self, low: u32, high: u32) -> u32;
}

/// [`RandomSource`] backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<ThreadRng> {
    /// Non-reproducible source drawing from the thread-local generator.
    pub fn thread() -> Self {
        Self::new(rand::rng())
    }
}

impl RngSource<StdRng> {
    /// Reproducible source: the same seed always yields the same questions.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn pick(&mut self, low: u32, high: u32) -> u32 {
        self.rng.random_range(low..=high)
    }
}

/// Pick the seeded source when a seed is configured, the thread source otherwise.
pub fn random_source(seed: Option<u64>) -> Box<dyn RandomSource> {
    match seed {
        Some(seed) => Box::new(RngSource::seeded(seed)),
        None => Box::new(RngSource::thread()),
    }
}

/// Replays a fixed list of values, cycling when exhausted.
///
/// Values are clamped into the requested range, so any script yields a
/// valid question.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    values: Vec<u32>,
    cursor: usize,
}

impl ScriptedSource {
    pub fn new(values: impl Into<Vec<u32>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }

    /// Number of values handed out so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedSource {
    fn pick(&mut self, low: u32, high: u32) -> u32 {
        if self.values.is_empty() {
            return low;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value.clamp(low, high)
    }
}

/// Generate one question with the given id.
pub fn generate_question(id: u32, rng: &mut dyn RandomSource) -> Question {
    let operator = if rng.pick(0, 1) == 0 {
        Operator::Add
    } else {
        Operator::Subtract
    };
    let blank_position = match rng.pick(0, 2) {
        0 => BlankPosition::Result,
        1 => BlankPosition::FirstOperand,
        _ => BlankPosition::SecondOperand,
    };

    let (operand_a, operand_b) = match (operator, blank_position) {
        (Operator::Add, BlankPosition::Result) => {
            let b = single_digit(rng);
            let a = rng.pick(MIN_TERM, MAX_TERM - b);
            (a, b)
        }
        (Operator::Add, BlankPosition::FirstOperand) => {
            let x = single_digit(rng);
            let sum = rng.pick(x + 1, MAX_TERM);
            (x, sum - x)
        }
        (Operator::Add, BlankPosition::SecondOperand) => {
            let x = single_digit(rng);
            let sum = rng.pick(x + 1, MAX_TERM);
            (sum - x, x)
        }
        (Operator::Subtract, BlankPosition::Result) => {
            let b = single_digit(rng);
            let a = rng.pick(b + 1, MAX_TERM);
            (a, b)
        }
        (Operator::Subtract, BlankPosition::FirstOperand) => {
            // Visible subtrahend, hidden minuend.
            let b = single_digit(rng);
            let difference = rng.pick(MIN_TERM, MAX_TERM - b);
            (difference + b, b)
        }
        (Operator::Subtract, BlankPosition::SecondOperand) => {
            let x = single_digit(rng);
            let difference = rng.pick(MIN_TERM, MAX_TERM - x);
            (difference + x, x)
        }
    };

    let question = Question::assemble(id, operand_a, operator, operand_b, blank_position);
    tracing::debug!(
        id,
        operator = %operator,
        blank = %blank_position,
        text = %question.display_text,
        "generated question"
    );
    question
}

/// Generate `count` questions with ids `1..=count`.
pub fn generate_questions(count: u32, rng: &mut dyn RandomSource) -> Vec<Question> {
    (1..=count).map(|id| generate_question(id, rng)).collect()
}

fn single_digit(rng: &mut dyn RandomSource) -> u32 {
    rng.pick(MIN_TERM, MAX_SINGLE_DIGIT)
}
