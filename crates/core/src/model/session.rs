use std::collections::BTreeMap;

use thiserror::Error;

use crate::model::question::QuestionBank;
use crate::model::summary::QuizSummary;

//
// ─── CONFIG ────────────────────────────────────────────────────────────────────
//

/// Default per-question countdown, in seconds.
pub const DEFAULT_TIME_LIMIT_SECS: u32 = 15;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("time limit must be > 0 seconds")]
    ZeroTimeLimit,
}

/// Per-session configuration, immutable for the session's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizConfig {
    time_limit_secs: u32,
}

impl QuizConfig {
    /// Creates a config with a custom per-question time limit.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ZeroTimeLimit` if the limit is zero.
    pub fn new(time_limit_secs: u32) -> Result<Self, ConfigError> {
        if time_limit_secs == 0 {
            return Err(ConfigError::ZeroTimeLimit);
        }
        Ok(Self { time_limit_secs })
    }

    #[must_use]
    pub fn time_limit_secs(&self) -> u32 {
        self.time_limit_secs
    }
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            time_limit_secs: DEFAULT_TIME_LIMIT_SECS,
        }
    }
}

//
// ─── OPERATION OUTCOMES ────────────────────────────────────────────────────────
//

/// Result of [`QuizSession::select_choice`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// The choice is now the pending selection.
    Selected,
    /// The current question already has a recorded answer; nothing changed.
    Locked,
}

/// Result of [`QuizSession::submit_answer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The pending selection was recorded for the current question.
    Recorded { correct: bool },
    /// No pending selection to record; nothing changed.
    NoSelection,
    /// The current question already has a recorded answer; nothing changed.
    AlreadyAnswered,
}

/// Who asked the session to move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceTrigger {
    /// The user pressed "Next". Gated on the current question being answered.
    Manual,
    /// The countdown ran out. Bypasses the answer gate; the question is
    /// left unattempted.
    TimerExpiry,
}

/// Result of [`QuizSession::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// Moved to the next question.
    Moved,
    /// Advanced past the last question; the session is now complete.
    Completed,
    /// Manual advance on an unanswered question; nothing changed.
    Blocked,
}

/// Result of [`QuizSession::retreat`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetreatOutcome {
    /// Moved to the previous question.
    Moved,
    /// Already at the first question; nothing changed.
    AtFirstQuestion,
}

/// Result of [`QuizSession::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The countdown decremented.
    Counting,
    /// The countdown was already at zero: the driver should advance.
    Expired,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One quiz attempt over a fixed question bank.
///
/// All mutation goes through the operations below; every precondition
/// violation is a reported no-op, never a panic or an error. The session
/// never navigates on its own: the tick driver observes
/// [`TickOutcome::Expired`] and calls [`QuizSession::advance`] with
/// [`AdvanceTrigger::TimerExpiry`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSession {
    bank: QuestionBank,
    config: QuizConfig,
    current_index: usize,
    score: u32,
    time_remaining: u32,
    pending_selection: Option<String>,
    answers: BTreeMap<usize, String>,
    complete: bool,
}

impl QuizSession {
    #[must_use]
    pub fn new(bank: QuestionBank, config: QuizConfig) -> Self {
        let time_remaining = config.time_limit_secs();
        Self {
            bank,
            config,
            current_index: 0,
            score: 0,
            time_remaining,
            pending_selection: None,
            answers: BTreeMap::new(),
            complete: false,
        }
    }

    //
    // ─── QUERIES ───────────────────────────────────────────────────────────
    //

    #[must_use]
    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    #[must_use]
    pub fn config(&self) -> QuizConfig {
        self.config
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    #[must_use]
    pub fn pending_selection(&self) -> Option<&str> {
        self.pending_selection.as_deref()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// The recorded answer for a question, if one was submitted.
    #[must_use]
    pub fn answer_for(&self, index: usize) -> Option<&str> {
        self.answers.get(&index).map(String::as_str)
    }

    /// True if the current question has a recorded answer.
    #[must_use]
    pub fn current_answered(&self) -> bool {
        self.answers.contains_key(&self.current_index)
    }

    #[must_use]
    pub fn current_question(&self) -> &crate::model::Question {
        // current_index stays in bounds by construction.
        &self.bank.questions()[self.current_index]
    }

    //
    // ─── TRANSITIONS ───────────────────────────────────────────────────────
    //

    /// Marks a choice as the pending selection for the current question.
    ///
    /// Ignored once the question has a recorded answer: the lock rule.
    pub fn select_choice(&mut self, choice: &str) -> SelectOutcome {
        if self.current_answered() {
            return SelectOutcome::Locked;
        }
        self.pending_selection = Some(choice.to_string());
        SelectOutcome::Selected
    }

    /// Records the pending selection as the answer to the current question.
    ///
    /// First submission wins; repeated calls change nothing.
    pub fn submit_answer(&mut self) -> SubmitOutcome {
        if self.current_answered() {
            return SubmitOutcome::AlreadyAnswered;
        }
        let Some(selection) = self.pending_selection.take() else {
            return SubmitOutcome::NoSelection;
        };

        let correct = self.current_question().is_correct(&selection);
        self.answers.insert(self.current_index, selection);
        if correct {
            self.score += 1;
        }
        SubmitOutcome::Recorded { correct }
    }

    /// Moves to the next question, or completes the session at the last one.
    ///
    /// A manual advance requires the current question to be answered; a
    /// timer-expiry advance leaves an unanswered question unattempted.
    pub fn advance(&mut self, trigger: AdvanceTrigger) -> AdvanceOutcome {
        if trigger == AdvanceTrigger::Manual && !self.current_answered() {
            return AdvanceOutcome::Blocked;
        }
        if self.current_index == self.bank.last_index() {
            self.complete = true;
            self.pending_selection = None;
            return AdvanceOutcome::Completed;
        }
        self.current_index += 1;
        self.reset_question_state();
        AdvanceOutcome::Moved
    }

    /// Moves back one question. Recorded answers and score are untouched.
    pub fn retreat(&mut self) -> RetreatOutcome {
        if self.current_index == 0 {
            return RetreatOutcome::AtFirstQuestion;
        }
        self.current_index -= 1;
        self.reset_question_state();
        RetreatOutcome::Moved
    }

    /// One externally delivered one-second timer event.
    ///
    /// Decrements while time remains. A tick that arrives with the counter
    /// already at zero reports [`TickOutcome::Expired`]; the session itself
    /// does not navigate.
    pub fn tick(&mut self) -> TickOutcome {
        if self.time_remaining > 0 {
            self.time_remaining -= 1;
            TickOutcome::Counting
        } else {
            TickOutcome::Expired
        }
    }

    /// Throws away all recorded state and starts over at question zero.
    pub fn restart(&mut self) {
        self.current_index = 0;
        self.score = 0;
        self.time_remaining = self.config.time_limit_secs();
        self.pending_selection = None;
        self.answers.clear();
        self.complete = false;
    }

    /// Builds the scorecard. Read-only; a mid-session call yields the
    /// partial summary of what has been answered so far.
    #[must_use]
    pub fn summary(&self) -> QuizSummary {
        QuizSummary::of(self)
    }

    fn reset_question_state(&mut self) {
        self.time_remaining = self.config.time_limit_secs();
        self.pending_selection = None;
    }
}
