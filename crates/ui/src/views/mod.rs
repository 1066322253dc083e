mod quiz;
mod scorecard;

pub use quiz::QuizView;
pub use scorecard::ScorecardView;
