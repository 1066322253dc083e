use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question prompt cannot be empty")]
    EmptyPrompt,

    #[error("question needs at least two choices, got {0}")]
    TooFewChoices(usize),

    #[error("duplicate choice: {0}")]
    DuplicateChoice(String),

    #[error("correct choice {0:?} is not one of the choices")]
    CorrectChoiceMissing(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BankError {
    #[error("question bank cannot be empty")]
    Empty,
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// One multiple-choice question: a prompt, an ordered list of choices, and
/// the choice that counts as correct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    prompt: String,
    choices: Vec<String>,
    correct_choice: String,
}

impl Question {
    /// Creates a validated question.
    ///
    /// # Errors
    ///
    /// Returns an error if the prompt is empty, there are fewer than two
    /// choices, any choice repeats, or the correct choice is not listed.
    pub fn new(
        prompt: impl Into<String>,
        choices: Vec<String>,
        correct_choice: impl Into<String>,
    ) -> Result<Self, QuestionError> {
        let prompt = prompt.into();
        let correct_choice = correct_choice.into();

        if prompt.trim().is_empty() {
            return Err(QuestionError::EmptyPrompt);
        }
        if choices.len() < 2 {
            return Err(QuestionError::TooFewChoices(choices.len()));
        }
        for (i, choice) in choices.iter().enumerate() {
            if choices[..i].contains(choice) {
                return Err(QuestionError::DuplicateChoice(choice.clone()));
            }
        }
        if !choices.contains(&correct_choice) {
            return Err(QuestionError::CorrectChoiceMissing(correct_choice));
        }

        Ok(Self {
            prompt,
            choices,
            correct_choice,
        })
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    #[must_use]
    pub fn correct_choice(&self) -> &str {
        &self.correct_choice
    }

    /// Returns true if `choice` is the correct answer to this question.
    #[must_use]
    pub fn is_correct(&self, choice: &str) -> bool {
        self.correct_choice == choice
    }
}

//
// ─── QUESTION BANK ─────────────────────────────────────────────────────────────
//

/// The fixed, ordered list of questions for one quiz session.
///
/// Non-empty by construction and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Creates a bank from an ordered list of questions.
    ///
    /// # Errors
    ///
    /// Returns `BankError::Empty` if the list is empty.
    pub fn new(questions: Vec<Question>) -> Result<Self, BankError> {
        if questions.is_empty() {
            return Err(BankError::Empty);
        }
        Ok(Self { questions })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        // A constructed bank is never empty; kept for the len/is_empty pair.
        self.questions.is_empty()
    }

    #[must_use]
    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn last_index(&self) -> usize {
        self.questions.len() - 1
    }
}
