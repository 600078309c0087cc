use serde::{Deserialize, Serialize};

/// Question formats the generator is asked for, plus a catch-all for
/// anything it emits outside that set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum QuestionType {
    MultipleChoice,
    FillInBlank,
    DragAndDrop,
    #[default]
    Unknown,
}

impl QuestionType {
    /// Maps a raw type tag from generator text. The match is exact; any
    /// other tag (or a missing one) collapses to `Unknown`.
    pub fn parse(value: &str) -> Self {
        match value {
            "Multiple Choice" => QuestionType::MultipleChoice,
            "Fill in the Blank" => QuestionType::FillInBlank,
            "Drag and Drop" => QuestionType::DragAndDrop,
            _ => QuestionType::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::MultipleChoice => "Multiple Choice",
            QuestionType::FillInBlank => "Fill in the Blank",
            QuestionType::DragAndDrop => "Drag and Drop",
            QuestionType::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for QuestionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What a user can submit for a question: free text (fill-in-the-blank,
/// multiple choice) or an ordered multi-selection (drag-and-drop).
/// Untagged so the JSON is a plain string or a plain array.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Text(String),
    Selection(Vec<String>),
}

impl AnswerValue {
    /// Canonical string form used by answer evaluation: a text answer is
    /// itself, a selection renders as `['a', 'b']`.
    pub fn stringified(&self) -> String {
        match self {
            AnswerValue::Text(value) => value.clone(),
            AnswerValue::Selection(values) => stringify_list(values),
        }
    }
}

/// Renders a list of strings in the canonical `['a', 'b']` form the
/// evaluator compares against. An empty list renders as `[]`.
pub fn stringify_list(values: &[String]) -> String {
    let quoted: Vec<String> = values.iter().map(|value| format!("'{}'", value)).collect();
    format!("[{}]", quoted.join(", "))
}

/// One parsed question block. Every field degrades to its default when the
/// source text is missing or malformed; only `user_answer` mutates after
/// parsing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Question {
    pub question_type: QuestionType,
    pub description: String,
    pub possible_answers: Vec<String>,
    pub correct_answer: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_answer: Option<AnswerValue>,
}
