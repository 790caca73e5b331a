//! Caller-side driver for a session.
//!
//! [`QuizController`] holds the current [`Session`] together with the random
//! source used to start new ones, applies the pure transitions, and notifies
//! a [`SessionObserver`] after every state change. The transitions in
//! [`crate::session`] never call the observer themselves.

use crate::error::CoreError;
use crate::generator::RandomSource;
use crate::scoring::Score;
use crate::session::Session;

/// State-change hook.
pub trait SessionObserver {
    fn on_state_change(&self, session: &Session);
}

/// Observer that ignores every notification.
pub struct NoopObserver;

impl SessionObserver for NoopObserver {
    fn on_state_change(&self, _: &Session) {}
}

/// Drives one session at a time.
pub struct QuizController<'a> {
    session: Session,
    rng: Box<dyn RandomSource + 'a>,
    observer: Box<dyn SessionObserver + 'a>,
}

impl<'a> QuizController<'a> {
    pub fn new(
        rng: Box<dyn RandomSource + 'a>,
        observer: Box<dyn SessionObserver + 'a>,
    ) -> Self {
        Self {
            session: Session::default(),
            rng,
            observer,
        }
    }

    /// Continue from a session restored elsewhere (e.g. from storage).
    pub fn with_session(mut self, session: Session) -> Self {
        self.session = session;
        self
    }

    /// Replace the current session with a freshly started one.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidInput`] for an empty name or zero count;
    /// the current session is left untouched and the observer not notified.
    pub fn start(&mut self, name: &str, count: u32) -> Result<&Session, CoreError> {
        let session = Session::start(name, count, self.rng.as_mut())?;
        Ok(self.replace(session))
    }

    pub fn submit_answer(&mut self, raw: &str) -> &Session {
        let next = std::mem::take(&mut self.session).submit_answer(raw);
        self.replace(next)
    }

    pub fn stop_early(&mut self, pending: Option<&str>) -> &Session {
        let next = std::mem::take(&mut self.session).stop_early(pending);
        self.replace(next)
    }

    pub fn reset(&mut self) -> &Session {
        let next = std::mem::take(&mut self.session).reset();
        self.replace(next)
    }

    pub fn score(&self) -> Score {
        self.session.score()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Hand back the current session, dropping the controller.
    pub fn into_session(self) -> Session {
        self.session
    }

    fn replace(&mut self, next: Session) -> &Session {
        self.session = next;
        self.observer.on_state_change(&self.session);
        &self.session
    }
}
