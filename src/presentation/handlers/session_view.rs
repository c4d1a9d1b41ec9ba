use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::application::services::{CompletedEvaluation, SessionSnapshot};
use crate::domain::{CriterionFeedback, ScoreTier};

/// Style hint for a score badge.
pub fn tier_style(tier: ScoreTier) -> &'static str {
    match tier {
        ScoreTier::High => "success",
        ScoreTier::Medium => "warning",
        ScoreTier::Low => "danger",
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// What the client renders: busy indicator, error panel or result view.
#[derive(Debug, Serialize)]
pub struct SessionView {
    pub status: &'static str,
    pub busy: bool,
    pub paper: Option<String>,
    pub rubric: Option<String>,
    pub error: Option<String>,
    pub evaluation: Option<EvaluationView>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationView {
    pub overall_score: f64,
    pub overall_tier: &'static str,
    pub overall_style: &'static str,
    pub summary: String,
    pub evaluated_at: DateTime<Utc>,
    pub criteria_feedback: Vec<CriterionView>,
}

#[derive(Debug, Serialize)]
pub struct CriterionView {
    pub criterion: String,
    pub score: f64,
    pub tier: &'static str,
    pub style: &'static str,
    pub feedback: String,
}

impl From<SessionSnapshot> for SessionView {
    fn from(snapshot: SessionSnapshot) -> Self {
        Self {
            status: snapshot.phase.as_str(),
            busy: snapshot.busy,
            paper: snapshot.paper,
            rubric: snapshot.rubric,
            error: snapshot.error,
            evaluation: snapshot.evaluation.map(EvaluationView::from),
        }
    }
}

impl From<CompletedEvaluation> for EvaluationView {
    fn from(completed: CompletedEvaluation) -> Self {
        let result = completed.result;
        let tier = ScoreTier::from_score(result.overall_score);
        Self {
            overall_score: result.overall_score,
            overall_tier: tier.as_str(),
            overall_style: tier_style(tier),
            summary: result.summary,
            evaluated_at: completed.evaluated_at,
            criteria_feedback: result
                .criteria_feedback
                .into_iter()
                .map(CriterionView::from)
                .collect(),
        }
    }
}

impl From<CriterionFeedback> for CriterionView {
    fn from(item: CriterionFeedback) -> Self {
        let tier = ScoreTier::from_score(item.score);
        Self {
            criterion: item.criterion,
            score: item.score,
            tier: tier.as_str(),
            style: tier_style(tier),
            feedback: item.feedback,
        }
    }
}
