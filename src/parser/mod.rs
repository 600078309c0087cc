pub mod list_literal;
pub mod question_blocks;

pub use question_blocks::{parse_questions, BLOCK_DELIMITER};
