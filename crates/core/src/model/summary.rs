use crate::model::session::QuizSession;

//
// ─── SCORE TIER ────────────────────────────────────────────────────────────────
//

/// Three-tier message policy for a finished quiz.
///
/// Thresholds are bank-size-relative: top tier at score/total >= 5/7,
/// middle tier at >= 3/7, matching the shipped seven-question bank's
/// fixed cutoffs of 5 and 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTier {
    Top,
    Middle,
    Encouragement,
}

impl ScoreTier {
    #[must_use]
    pub fn for_result(score: u32, total: u32) -> Self {
        if 7 * score >= 5 * total {
            Self::Top
        } else if 7 * score >= 3 * total {
            Self::Middle
        } else {
            Self::Encouragement
        }
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ScoreTier::Top => "🎉 Well Done!",
            ScoreTier::Middle => "😊 Good Going!",
            ScoreTier::Encouragement => "🤔 Wanna give another try?",
        }
    }
}

//
// ─── SCORECARD ─────────────────────────────────────────────────────────────────
//

/// How one question turned out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect,
    NotAttempted,
}

/// One scorecard row: the question, the right answer, and what the user did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryEntry {
    index: usize,
    prompt: String,
    correct_choice: String,
    response: Option<String>,
    verdict: Verdict,
}

impl SummaryEntry {
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn correct_choice(&self) -> &str {
        &self.correct_choice
    }

    /// The recorded answer, or `None` for an unattempted question.
    #[must_use]
    pub fn response(&self) -> Option<&str> {
        self.response.as_deref()
    }

    #[must_use]
    pub fn verdict(&self) -> Verdict {
        self.verdict
    }
}

/// The full scorecard for a session: one entry per bank question, in bank
/// order, plus the totals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSummary {
    entries: Vec<SummaryEntry>,
    score: u32,
    total: u32,
}

impl QuizSummary {
    /// Snapshot of a session's results. Pure read; safe to call mid-session,
    /// in which case yet-unanswered questions show as not attempted.
    #[must_use]
    pub fn of(session: &QuizSession) -> Self {
        let entries = session
            .bank()
            .questions()
            .iter()
            .enumerate()
            .map(|(index, question)| {
                let response = session.answer_for(index).map(ToString::to_string);
                let verdict = match response.as_deref() {
                    Some(choice) if question.is_correct(choice) => Verdict::Correct,
                    Some(_) => Verdict::Incorrect,
                    None => Verdict::NotAttempted,
                };
                SummaryEntry {
                    index,
                    prompt: question.prompt().to_string(),
                    correct_choice: question.correct_choice().to_string(),
                    response,
                    verdict,
                }
            })
            .collect();

        Self {
            entries,
            score: session.score(),
            total: session.bank().len() as u32,
        }
    }

    #[must_use]
    pub fn entries(&self) -> &[SummaryEntry] {
        &self.entries
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    #[must_use]
    pub fn tier(&self) -> ScoreTier {
        ScoreTier::for_result(self.score, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::question::{Question, QuestionBank};
    use crate::model::session::{AdvanceTrigger, QuizConfig};

    fn bank() -> QuestionBank {
        QuestionBank::new(vec![
            Question::new(
                "What is the capital of France?",
                vec!["Berlin".into(), "Paris".into()],
                "Paris",
            )
            .unwrap(),
            Question::new(
                "Which planet is known as the Red Planet?",
                vec!["Earth".into(), "Mars".into()],
                "Mars",
            )
            .unwrap(),
            Question::new("What is 5 + 3?", vec!["8".into(), "12".into()], "8").unwrap(),
        ])
        .unwrap()
    }

    #[test]
    fn summary_has_one_entry_per_question_in_bank_order() {
        let mut session = QuizSession::new(bank(), QuizConfig::default());
        session.select_choice("Paris");
        session.submit_answer();
        session.advance(AdvanceTrigger::Manual);
        session.select_choice("Earth");
        session.submit_answer();

        let summary = session.summary();
        assert_eq!(summary.entries().len(), 3);
        assert_eq!(summary.total(), 3);
        assert_eq!(summary.score(), 1);

        let verdicts: Vec<_> = summary
            .entries()
            .iter()
            .map(SummaryEntry::verdict)
            .collect();
        assert_eq!(
            verdicts,
            vec![Verdict::Correct, Verdict::Incorrect, Verdict::NotAttempted]
        );
        assert_eq!(summary.entries()[0].response(), Some("Paris"));
        assert_eq!(summary.entries()[1].response(), Some("Earth"));
        assert_eq!(summary.entries()[1].correct_choice(), "Mars");
        assert_eq!(summary.entries()[2].response(), None);
        assert_eq!(summary.entries()[2].index(), 2);
    }

    #[test]
    fn tiers_match_the_shipped_seven_question_cutoffs() {
        assert_eq!(ScoreTier::for_result(7, 7), ScoreTier::Top);
        assert_eq!(ScoreTier::for_result(5, 7), ScoreTier::Top);
        assert_eq!(ScoreTier::for_result(4, 7), ScoreTier::Middle);
        assert_eq!(ScoreTier::for_result(3, 7), ScoreTier::Middle);
        assert_eq!(ScoreTier::for_result(2, 7), ScoreTier::Encouragement);
        assert_eq!(ScoreTier::for_result(0, 7), ScoreTier::Encouragement);
    }

    #[test]
    fn tiers_scale_with_bank_size() {
        assert_eq!(ScoreTier::for_result(10, 14), ScoreTier::Top);
        assert_eq!(ScoreTier::for_result(9, 14), ScoreTier::Middle);
        assert_eq!(ScoreTier::for_result(5, 14), ScoreTier::Encouragement);
        assert_eq!(ScoreTier::for_result(2, 2), ScoreTier::Top);
        assert_eq!(ScoreTier::for_result(1, 2), ScoreTier::Middle);
        assert_eq!(ScoreTier::for_result(0, 2), ScoreTier::Encouragement);
    }

    #[test]
    fn tier_messages() {
        assert_eq!(ScoreTier::Top.message(), "🎉 Well Done!");
        assert_eq!(ScoreTier::Middle.message(), "😊 Good Going!");
        assert_eq!(ScoreTier::Encouragement.message(), "🤔 Wanna give another try?");
    }
}
