use serde::Deserialize;
use validator::Validate;

use crate::models::domain::AnswerValue;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateQuizRequest {
    #[validate(length(min = 1, max = 100))]
    pub subject: String,

    #[validate(length(min = 1, max = 100))]
    pub level: String,
}

/// Body of an answer submission. The answer is optional on purpose: a
/// client with nothing captured yet may still post, and the session treats
/// that as "not ready to submit" rather than an error. An empty string or
/// an empty selection is a real answer and gets evaluated.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmitAnswerRequest {
    pub answer: Option<AnswerValue>,
}
