use quiz_core::model::{QuizSummary, ScoreTier, SummaryEntry, Verdict};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScorecardRowVm {
    pub heading: String,
    pub correct_line: String,
    pub response_line: String,
    pub verdict: Verdict,
}

/// Render-ready scorecard for a finished (or in-progress) session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScorecardVm {
    pub score_label: String,
    pub message: String,
    pub celebrate: bool,
    pub rows: Vec<ScorecardRowVm>,
}

#[must_use]
pub fn map_scorecard(summary: &QuizSummary) -> ScorecardVm {
    let rows = summary.entries().iter().map(map_row).collect();
    ScorecardVm {
        score_label: format!("Your score: {} / {}", summary.score(), summary.total()),
        message: summary.tier().message().to_string(),
        celebrate: summary.tier() == ScoreTier::Top,
        rows,
    }
}

fn map_row(entry: &SummaryEntry) -> ScorecardRowVm {
    let response_line = match (entry.verdict(), entry.response()) {
        (Verdict::Correct, Some(response)) => format!("✅ Your Answer: {response}"),
        (_, Some(response)) => format!("❌ Your Answer: {response}"),
        (_, None) => "⚪ Not Attempted".to_string(),
    };
    ScorecardRowVm {
        heading: format!("Q{}: {}", entry.index() + 1, entry.prompt()),
        correct_line: format!("✅ Correct: {}", entry.correct_choice()),
        response_line,
        verdict: entry.verdict(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::{AdvanceTrigger, Question, QuestionBank, QuizConfig, QuizSession};

    fn finished_session() -> QuizSession {
        let bank = QuestionBank::new(vec![
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
        .unwrap();
        let mut session = QuizSession::new(bank, QuizConfig::default());
        session.select_choice("Paris");
        session.submit_answer();
        session.advance(AdvanceTrigger::Manual);
        session.select_choice("Earth");
        session.submit_answer();
        session.advance(AdvanceTrigger::Manual);
        // Last question times out unanswered.
        session.advance(AdvanceTrigger::TimerExpiry);
        session
    }

    #[test]
    fn scorecard_rows_cover_every_question() {
        let session = finished_session();
        let card = map_scorecard(&session.summary());
        assert_eq!(card.score_label, "Your score: 1 / 3");
        assert_eq!(card.rows.len(), 3);

        assert_eq!(card.rows[0].heading, "Q1: What is the capital of France?");
        assert_eq!(card.rows[0].correct_line, "✅ Correct: Paris");
        assert_eq!(card.rows[0].response_line, "✅ Your Answer: Paris");
        assert_eq!(card.rows[0].verdict, Verdict::Correct);

        assert_eq!(card.rows[1].response_line, "❌ Your Answer: Earth");
        assert_eq!(card.rows[1].verdict, Verdict::Incorrect);

        assert_eq!(card.rows[2].response_line, "⚪ Not Attempted");
        assert_eq!(card.rows[2].verdict, Verdict::NotAttempted);
    }

    #[test]
    fn low_score_gets_encouragement_without_celebration() {
        let session = finished_session();
        let card = map_scorecard(&session.summary());
        assert_eq!(card.message, "🤔 Wanna give another try?");
        assert!(!card.celebrate);
    }

    #[test]
    fn perfect_score_celebrates() {
        let bank = QuestionBank::new(vec![
            Question::new("What is 5 + 3?", vec!["8".into(), "12".into()], "8").unwrap(),
            Question::new(
                "Which gas do plants absorb?",
                vec!["Oxygen".into(), "Carbon Dioxide".into()],
                "Carbon Dioxide",
            )
            .unwrap(),
        ])
        .unwrap();
        let mut session = QuizSession::new(bank, QuizConfig::default());
        session.select_choice("8");
        session.submit_answer();
        session.advance(AdvanceTrigger::Manual);
        session.select_choice("Carbon Dioxide");
        session.submit_answer();
        session.advance(AdvanceTrigger::Manual);

        let card = map_scorecard(&session.summary());
        assert_eq!(card.score_label, "Your score: 2 / 2");
        assert_eq!(card.message, "🎉 Well Done!");
        assert!(card.celebrate);
    }
}
