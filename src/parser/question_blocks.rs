use crate::models::domain::question::{Question, QuestionType};
use crate::parser::list_literal;

/// Separates one question block from the next in generator output.
pub const BLOCK_DELIMITER: &str = "\n---\n";

const TYPE_MARKER: &str = "**Question Type:**";
const DESCRIPTION_MARKER: &str = "**Question Description:**";
const POSSIBLE_ANSWERS_MARKER: &str = "**Possible Answers:**";
const CORRECT_ANSWER_MARKER: &str = "**Correct Answer:**";

/// Extracts question records from raw generator text.
///
/// The text is split on the block delimiter and each block is scanned line
/// by line for the four field markers. Unmarked lines are ignored, missing
/// fields keep their defaults and a duplicated field keeps its last value,
/// so any input (including empty or garbage text) parses into at least one
/// record without failing.
pub fn parse_questions(raw_text: &str) -> Vec<Question> {
    raw_text.split(BLOCK_DELIMITER).map(parse_block).collect()
}

fn parse_block(block: &str) -> Question {
    let mut question = Question::default();

    for line in block.lines() {
        let line = line.trim();

        if let Some(value) = line.strip_prefix(TYPE_MARKER) {
            question.question_type = QuestionType::parse(value.trim());
        } else if let Some(value) = line.strip_prefix(DESCRIPTION_MARKER) {
            question.description = value.trim().to_string();
        } else if let Some(value) = line.strip_prefix(POSSIBLE_ANSWERS_MARKER) {
            question.possible_answers = list_literal::decode(value);
        } else if let Some(value) = line.strip_prefix(CORRECT_ANSWER_MARKER) {
            question.correct_answer = list_literal::decode(value);
        }
    }

    question
}
