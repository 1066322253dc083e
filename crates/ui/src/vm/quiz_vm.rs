use quiz_core::model::QuizSession;

/// User actions the quiz view can dispatch against the session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Select(String),
    Submit,
    Next,
    Previous,
    Restart,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChoiceState {
    /// Selectable, not currently picked.
    Idle,
    /// The pending selection.
    Selected,
    /// The question already has a recorded answer; choices are frozen.
    Locked,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChoiceVm {
    pub label: String,
    pub state: ChoiceState,
}

/// Render-ready snapshot of the current question.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionCardVm {
    pub prompt: String,
    pub choices: Vec<ChoiceVm>,
    pub answered: bool,
    pub can_submit: bool,
    pub can_retreat: bool,
    pub can_advance: bool,
    pub timer_label: String,
    pub progress_label: String,
}

#[must_use]
pub fn format_timer(seconds: u32) -> String {
    format!("⏳ {seconds}s")
}

#[must_use]
pub fn map_question_card(session: &QuizSession) -> QuestionCardVm {
    let question = session.current_question();
    let answered = session.current_answered();
    let pending = session.pending_selection();

    let choices = question
        .choices()
        .iter()
        .map(|label| {
            let state = if answered {
                ChoiceState::Locked
            } else if pending == Some(label.as_str()) {
                ChoiceState::Selected
            } else {
                ChoiceState::Idle
            };
            ChoiceVm {
                label: label.clone(),
                state,
            }
        })
        .collect();

    QuestionCardVm {
        prompt: question.prompt().to_string(),
        choices,
        answered,
        can_submit: !answered && pending.is_some(),
        can_retreat: session.current_index() > 0,
        can_advance: answered,
        timer_label: format_timer(session.time_remaining()),
        progress_label: format!(
            "Question {} of {}",
            session.current_index() + 1,
            session.bank().len()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::{AdvanceTrigger, Question, QuestionBank, QuizConfig};

    fn session() -> QuizSession {
        let bank = QuestionBank::new(vec![
            Question::new(
                "What is the capital of France?",
                vec!["Berlin".into(), "Paris".into(), "Rome".into()],
                "Paris",
            )
            .unwrap(),
            Question::new("What is 5 + 3?", vec!["8".into(), "12".into()], "8").unwrap(),
        ])
        .unwrap();
        QuizSession::new(bank, QuizConfig::default())
    }

    #[test]
    fn fresh_question_card_has_idle_choices_and_no_actions() {
        let session = session();
        let card = map_question_card(&session);
        assert_eq!(card.prompt, "What is the capital of France?");
        assert_eq!(card.choices.len(), 3);
        assert!(card.choices.iter().all(|c| c.state == ChoiceState::Idle));
        assert!(!card.answered);
        assert!(!card.can_submit);
        assert!(!card.can_retreat);
        assert!(!card.can_advance);
        assert_eq!(card.timer_label, "⏳ 15s");
        assert_eq!(card.progress_label, "Question 1 of 2");
    }

    #[test]
    fn pending_selection_is_highlighted_and_submittable() {
        let mut session = session();
        session.select_choice("Paris");
        let card = map_question_card(&session);
        let states: Vec<_> = card.choices.iter().map(|c| c.state).collect();
        assert_eq!(
            states,
            vec![ChoiceState::Idle, ChoiceState::Selected, ChoiceState::Idle]
        );
        assert!(card.can_submit);
        assert!(!card.can_advance);
    }

    #[test]
    fn answered_question_locks_choices_and_enables_next() {
        let mut session = session();
        session.select_choice("Paris");
        session.submit_answer();
        let card = map_question_card(&session);
        assert!(card.answered);
        assert!(card.choices.iter().all(|c| c.state == ChoiceState::Locked));
        assert!(!card.can_submit);
        assert!(card.can_advance);
    }

    #[test]
    fn second_question_allows_retreat_and_resets_timer_label() {
        let mut session = session();
        session.tick();
        session.advance(AdvanceTrigger::TimerExpiry);
        let card = map_question_card(&session);
        assert!(card.can_retreat);
        assert_eq!(card.timer_label, "⏳ 15s");
        assert_eq!(card.progress_label, "Question 2 of 2");
    }
}
