//! Results report types with JSON persistence.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::scoring::{answer_status, AnswerStatus, Score, Tier};
use crate::session::{Phase, Session};

/// An immutable summary of one session, ready for export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultsReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the report was created.
    pub created_at: DateTime<Utc>,
    pub candidate_name: String,
    /// Phase of the session when the report was taken.
    pub phase: Phase,
    pub score: Score,
    pub tier: Tier,
    /// One row per question, in session order.
    pub outcomes: Vec<QuestionOutcome>,
}

/// How a single question went.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionOutcome {
    /// 1-based question number.
    pub number: usize,
    pub display_text: String,
    /// `None` when the question was never answered.
    pub user_answer: Option<String>,
    pub correct_answer: u32,
    pub status: AnswerStatus,
}

impl ResultsReport {
    /// Summarize `session` as it stands now.
    pub fn from_session(session: &Session) -> Self {
        let score = session.score();
        let outcomes = session
            .questions()
            .iter()
            .enumerate()
            .map(|(i, q)| QuestionOutcome {
                number: i + 1,
                display_text: q.display_text.clone(),
                user_answer: q.is_answered().then(|| q.user_answer.clone()),
                correct_answer: q.correct_answer,
                status: answer_status(q),
            })
            .collect();

        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            candidate_name: session.candidate_name().to_string(),
            phase: session.phase(),
            score,
            tier: score.tier(),
            outcomes,
        }
    }

    /// Count of outcomes with the given status.
    pub fn count(&self, status: AnswerStatus) -> usize {
        self.outcomes.iter().filter(|o| o.status == status).count()
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: ResultsReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::ScriptedSource;

    fn finished_session() -> Session {
        // Every question is "34 + 9 = ?".
        let session = Session::start("Ann", 4, &mut ScriptedSource::new([0, 0, 9, 34])).unwrap();
        session
            .submit_answer("43")
            .submit_answer("44")
            .submit_answer("43")
            .stop_early(None)
    }

    #[test]
    fn outcomes_follow_session() {
        let report = ResultsReport::from_session(&finished_session());
        assert_eq!(report.candidate_name, "Ann");
        assert_eq!(report.phase, Phase::Complete);
        assert_eq!(report.outcomes.len(), 4);
        assert_eq!(report.outcomes[0].display_text, "34 + 9 = ?");
        assert_eq!(report.outcomes[1].user_answer.as_deref(), Some("44"));
        assert_eq!(report.outcomes[3].user_answer, None);
        assert_eq!(report.count(AnswerStatus::Correct), 2);
        assert_eq!(report.count(AnswerStatus::Incorrect), 1);
        assert_eq!(report.count(AnswerStatus::Unanswered), 1);
        assert_eq!(report.score.answered, 3);
        assert_eq!(report.tier, Tier::TryAgain);
    }

    #[test]
    fn json_roundtrip() {
        let report = ResultsReport::from_session(&finished_session());
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out/report.json");

        report.save_json(&path).unwrap();
        let loaded = ResultsReport::load_json(&path).unwrap();

        assert_eq!(loaded.id, report.id);
        assert_eq!(loaded.outcomes.len(), 4);
        assert_eq!(loaded.score.correct, 2);
        assert_eq!(loaded.score.answered, 3);
        assert!((loaded.score.percentage - report.score.percentage).abs() < 1e-9);
    }

    #[test]
    fn load_missing_file_fails_with_path() {
        let err = ResultsReport::load_json(Path::new("nope/report.json")).unwrap_err();
        assert!(format!("{err:#}").contains("nope/report.json"));
    }
}
