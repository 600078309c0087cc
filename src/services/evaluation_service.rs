use crate::models::domain::question::{stringify_list, AnswerValue};

pub struct EvaluationService;

impl EvaluationService {
    /// Decides whether a submission matches the correct-answer list.
    ///
    /// The rule is asymmetric on purpose and must stay that way: the
    /// stringified submission is first compared against the stringified
    /// list as a whole (how an ordered multi-select matches), and failing
    /// that against each element of the list (how a free-text answer
    /// matches a single-element list).
    pub fn evaluate(user_answer: &AnswerValue, correct_answer: &[String]) -> bool {
        let submitted = user_answer.stringified();

        if submitted == stringify_list(correct_answer) {
            return true;
        }

        correct_answer.iter().any(|candidate| *candidate == submitted)
    }
}
