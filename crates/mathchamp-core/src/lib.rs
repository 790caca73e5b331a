//! mathchamp-core: question generation, test sessions, and scoring.
//!
//! This crate defines the data model, the question generator, the test
//! session state machine, and the scoring rules that the report renderer and
//! the CLI build on. Persistence and rendering stay outside the state
//! machine: callers plug them in through [`controller::SessionObserver`].

pub mod config;
pub mod controller;
pub mod error;
pub mod generator;
pub mod model;
pub mod report;
pub mod scoring;
pub mod session;
pub mod store;
pub mod worksheet;

pub use controller::{NoopObserver, QuizController, SessionObserver};
pub use error::CoreError;
pub use generator::{generate_question, generate_questions, RandomSource, RngSource, ScriptedSource};
pub use model::{BlankPosition, Operator, Question};
pub use scoring::{compute_score, motivational_tier, AnswerStatus, Score, Tier};
pub use session::{Phase, Session};
pub use worksheet::Worksheet;
