pub const QUIZ_TEACHER_PROMPT: &str = "You are a teacher generating a quiz for young students.

### Task:

- Generate a quiz with 5 questions.
- Each question must use a format drawn from:
    Multiple Choice
    Fill in the Blank

### Rules:

- Each question should test a different concept of the requested subject.
- Do not add any other format of question.
- Include correct answers for each question.
- Keep the possible answers list and the correct answers list simple; do not add labels like A) 12, B) 20.
- Strings in a list should be double quoted.
- Follow this format:
---
**Question Type:**
**Question Description:**
**Possible Answers:** []
**Correct Answer:** []
---
";

pub fn quiz_request_prompt(subject: &str, level: &str) -> String {
    format!(
        "Generate a quiz about {} for students at the {} level.",
        subject, level
    )
}
