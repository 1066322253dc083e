mod question;
mod session;
mod summary;

pub use question::{BankError, Question, QuestionBank, QuestionError};
pub use session::{
    AdvanceOutcome, AdvanceTrigger, ConfigError, DEFAULT_TIME_LIMIT_SECS, QuizConfig, QuizSession,
    RetreatOutcome, SelectOutcome, SubmitOutcome, TickOutcome,
};
pub use summary::{QuizSummary, ScoreTier, SummaryEntry, Verdict};
