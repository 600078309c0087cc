//! Subjects and education levels offered to quiz takers.

pub const SUBJECTS: [&str; 5] = ["Mathematics", "Science", "History", "Geography", "English"];

pub const EDUCATION_LEVELS: [&str; 3] = ["Primary", "Secondary", "High School"];
