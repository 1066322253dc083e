mod quiz_vm;
mod scorecard_vm;

pub use quiz_vm::{
    ChoiceState, ChoiceVm, QuestionCardVm, QuizIntent, format_timer, map_question_card,
};
pub use scorecard_vm::{ScorecardRowVm, ScorecardVm, map_scorecard};
