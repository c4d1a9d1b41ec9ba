use serde_json::{Value, json};

use crate::domain::ExtractedText;

const EVALUATOR_ROLE: &str = "You are an expert academic evaluator specializing in writing, grammar, and content analysis. Your task is to read and grade an academic document based on a provided rubric.";

const INSTRUCTIONS: [&str; 8] = [
    "Carefully read the entire academic paper provided.",
    "Carefully read the evaluation rubric provided.",
    "Analyze and evaluate the paper against EACH criterion listed in the rubric.",
    "Assign a numerical score from 0 to 10 for each criterion.",
    "Provide clear, objective, and constructive feedback for each criterion, justifying the score.",
    "Calculate a final overall score by averaging the scores of all criteria.",
    "Write a final summary of the paper's evaluation, highlighting strengths and major areas for improvement.",
    "Return the entire evaluation in the specified JSON format.",
];

/// Builds the grading prompt. Both texts are embedded verbatim.
pub fn build_evaluation_prompt(
    document_text: &ExtractedText,
    rubric_text: &ExtractedText,
) -> String {
    let steps = INSTRUCTIONS
        .iter()
        .enumerate()
        .map(|(i, step)| format!("{}. {step}", i + 1))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "ROLE: {EVALUATOR_ROLE}\n\n\
         INSTRUCTIONS:\n{steps}\n\n\
         ACADEMIC PAPER TEXT:\n---\n{}\n---\n\n\
         EVALUATION RUBRIC TEXT:\n---\n{}\n---\n",
        document_text.as_str(),
        rubric_text.as_str(),
    )
}

/// Response schema in the hosted model's OpenAPI subset.
pub fn evaluation_response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "overallScore": {
                "type": "NUMBER",
                "description": "The final average score from 0 to 10, rounded to one decimal place."
            },
            "summary": {
                "type": "STRING",
                "description": "A final summary of the overall evaluation, highlighting strengths and key areas for improvement."
            },
            "criteriaFeedback": {
                "type": "ARRAY",
                "description": "An array of feedback objects for each criterion in the rubric.",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "criterion": {
                            "type": "STRING",
                            "description": "The name of the evaluation criterion from the rubric."
                        },
                        "score": {
                            "type": "NUMBER",
                            "description": "The numerical score assigned for this criterion, from 0 to 10."
                        },
                        "feedback": {
                            "type": "STRING",
                            "description": "Detailed, objective, and constructive feedback for this specific criterion, explaining the reasoning for the score."
                        }
                    },
                    "required": ["criterion", "score", "feedback"]
                }
            }
        },
        "required": ["overallScore", "summary", "criteriaFeedback"]
    })
}
