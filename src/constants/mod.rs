pub mod catalog;
pub mod prompts;
