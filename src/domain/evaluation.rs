/// Score and feedback for a single rubric criterion.
#[derive(Debug, Clone, PartialEq)]
pub struct CriterionFeedback {
    pub criterion: String,
    pub score: f64,
    pub feedback: String,
}

/// A complete grading of one paper against one rubric.
///
/// `criteria_feedback` keeps the order in which the model returned the
/// criteria, which is expected to follow the rubric.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationResult {
    pub overall_score: f64,
    pub summary: String,
    pub criteria_feedback: Vec<CriterionFeedback>,
}

impl EvaluationResult {
    pub const MIN_SCORE: f64 = 0.0;
    pub const MAX_SCORE: f64 = 10.0;

    pub fn is_score_in_range(score: f64) -> bool {
        (Self::MIN_SCORE..=Self::MAX_SCORE).contains(&score)
    }

    /// Scores that fall outside the 0-10 scale, overall score included.
    pub fn out_of_range_scores(&self) -> impl Iterator<Item = f64> + '_ {
        std::iter::once(self.overall_score)
            .chain(self.criteria_feedback.iter().map(|c| c.score))
            .filter(|s| !Self::is_score_in_range(*s))
    }
}
