use serde_json::{Map, Value};
use thiserror::Error;

use crate::assessment::catalog::find_question;

/// Joins multi-choice selections into one display string.
const MULTI_ANSWER_DELIMITER: &str = ", ";

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("answer references unknown question id {0}")]
    MissingQuestion(String),

    #[error("answer for question {0} must be a string or an array of strings")]
    UnsupportedAnswer(String),
}

/// One human-readable question/answer pair, ready for prompt embedding.
#[derive(Debug, Clone, PartialEq)]
pub struct QaPair {
    pub question: String,
    pub answer: String,
}

/// Turns the raw answer map into Q/A pairs using the question catalog.
///
/// Output order follows the map's insertion order (the order the client
/// submitted the keys). An unknown question id aborts the whole pipeline
/// here, before any network call is made. Multi-choice answers are joined
/// with ", "; single-choice answers pass through unchanged.
pub fn format_answers(answers: &Map<String, Value>) -> Result<Vec<QaPair>, FormatError> {
    let mut pairs = Vec::with_capacity(answers.len());

    for (key, value) in answers {
        let question = key
            .parse::<i64>()
            .ok()
            .and_then(find_question)
            .ok_or_else(|| FormatError::MissingQuestion(key.clone()))?;

        let answer = match value {
            Value::String(s) => s.clone(),
            Value::Array(items) => {
                let selections = items
                    .iter()
                    .map(|item| {
                        item.as_str()
                            .ok_or_else(|| FormatError::UnsupportedAnswer(key.clone()))
                    })
                    .collect::<Result<Vec<&str>, FormatError>>()?;
                selections.join(MULTI_ANSWER_DELIMITER)
            }
            _ => return Err(FormatError::UnsupportedAnswer(key.clone())),
        };

        pairs.push(QaPair {
            question: question.text.to_string(),
            answer,
        });
    }

    Ok(pairs)
}
