use rubric_grader::domain::{CriterionFeedback, EvaluationResult};

fn result_with(overall: f64, scores: &[f64]) -> EvaluationResult {
    EvaluationResult {
        overall_score: overall,
        summary: String::new(),
        criteria_feedback: scores
            .iter()
            .enumerate()
            .map(|(i, s)| CriterionFeedback {
                criterion: format!("Criterion {i}"),
                score: *s,
                feedback: String::new(),
            })
            .collect(),
    }
}

#[test]
fn given_scores_within_scale_when_checking_range_then_none_reported() {
    let result = result_with(7.5, &[0.0, 10.0, 5.5]);

    assert_eq!(result.out_of_range_scores().count(), 0);
}

#[test]
fn given_scores_outside_scale_when_checking_range_then_each_reported() {
    let result = result_with(11.0, &[-1.0, 4.0]);

    let out: Vec<f64> = result.out_of_range_scores().collect();

    assert_eq!(out, vec![11.0, -1.0]);
}
