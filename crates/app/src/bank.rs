use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use serde::Deserialize;

use quiz_core::model::{BankError, Question, QuestionBank, QuestionError};

#[derive(Debug)]
pub enum BankLoadError {
    Read(io::Error),
    Parse(serde_json::Error),
    Question { index: usize, source: QuestionError },
    Bank(BankError),
}

impl fmt::Display for BankLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BankLoadError::Read(err) => write!(f, "cannot read question file: {err}"),
            BankLoadError::Parse(err) => write!(f, "malformed question file: {err}"),
            BankLoadError::Question { index, source } => write!(f, "question {index}: {source}"),
            BankLoadError::Bank(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for BankLoadError {}

/// On-disk question file schema.
#[derive(Debug, Deserialize)]
struct BankFile {
    questions: Vec<QuestionEntry>,
}

#[derive(Debug, Deserialize)]
struct QuestionEntry {
    prompt: String,
    choices: Vec<String>,
    answer: String,
}

/// Parses and validates a question file into a bank.
///
/// # Errors
///
/// Returns an error for malformed JSON, any invalid question (reported with
/// its zero-based index), or an empty question list.
pub fn parse_bank(raw: &str) -> Result<QuestionBank, BankLoadError> {
    let file: BankFile = serde_json::from_str(raw).map_err(BankLoadError::Parse)?;
    let mut questions = Vec::with_capacity(file.questions.len());
    for (index, entry) in file.questions.into_iter().enumerate() {
        let question = Question::new(entry.prompt, entry.choices, entry.answer)
            .map_err(|source| BankLoadError::Question { index, source })?;
        questions.push(question);
    }
    QuestionBank::new(questions).map_err(BankLoadError::Bank)
}

/// Loads a bank from a `--bank` file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or fails validation.
pub fn load_from_path(path: &Path) -> Result<QuestionBank, BankLoadError> {
    let raw = fs::read_to_string(path).map_err(BankLoadError::Read)?;
    parse_bank(&raw)
}

const DEFAULT_BANK_JSON: &str = include_str!("../assets/questions.json");

/// The seven shipped questions.
///
/// # Panics
///
/// Panics if the embedded question file is invalid, which is caught by tests.
#[must_use]
pub fn default_bank() -> QuestionBank {
    parse_bank(DEFAULT_BANK_JSON).expect("embedded question bank should be valid")
}
