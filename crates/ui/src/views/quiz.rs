use std::time::Duration;

use dioxus::prelude::*;

use quiz_core::model::{AdvanceTrigger, QuizSession, TickOutcome};

use crate::context::AppContext;
use crate::views::ScorecardView;
use crate::vm::{
    ChoiceState, ChoiceVm, QuestionCardVm, QuizIntent, map_question_card, map_scorecard,
};

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let mut session = use_signal({
        let bank = ctx.question_bank();
        let config = ctx.quiz_config();
        move || QuizSession::new((*bank).clone(), config)
    });

    let dispatch = use_callback(move |intent: QuizIntent| {
        let mut session = session.write();
        match intent {
            QuizIntent::Select(choice) => {
                session.select_choice(&choice);
            }
            QuizIntent::Submit => {
                session.submit_answer();
            }
            QuizIntent::Next => {
                session.advance(AdvanceTrigger::Manual);
            }
            QuizIntent::Previous => {
                session.retreat();
            }
            QuizIntent::Restart => session.restart(),
        }
    });

    // One tick task per question. The key changes on navigation, restart,
    // and completion; re-keying cancels the superseded task before a new
    // one starts, and the task itself re-checks its captured index so a
    // late tick against a stale question is inert.
    let timer_key = use_memo(move || {
        let session = session.read();
        (session.current_index(), session.is_complete())
    });
    let mut tick_task = use_signal(|| None::<Task>);
    use_effect(move || {
        let (index, complete) = timer_key();
        if let Some(task) = tick_task.write().take() {
            task.cancel();
        }
        if complete {
            return;
        }
        let task = spawn(async move {
            loop {
                tokio::time::sleep(Duration::from_secs(1)).await;
                let expired = {
                    let mut session = session.write();
                    if session.is_complete() || session.current_index() != index {
                        return;
                    }
                    session.tick() == TickOutcome::Expired
                };
                if expired {
                    session.write().advance(AdvanceTrigger::TimerExpiry);
                    return;
                }
            }
        });
        tick_task.set(Some(task));
    });

    let session_read = session.read();
    rsx! {
        div { class: "quiz-page",
            header { class: "quiz-header",
                h1 { "Quiz Challenge 🎯" }
            }
            if session_read.is_complete() {
                ScorecardView {
                    scorecard: map_scorecard(&session_read.summary()),
                    on_restart: move |()| dispatch.call(QuizIntent::Restart),
                }
            } else {
                QuestionCard {
                    card: map_question_card(&session_read),
                    on_intent: dispatch,
                }
            }
        }
    }
}

#[component]
fn QuestionCard(card: QuestionCardVm, on_intent: EventHandler<QuizIntent>) -> Element {
    let choices = card.choices.iter().cloned().map(|choice| {
        rsx! {
            ChoiceButton { choice, on_intent }
        }
    });

    rsx! {
        div { class: "quiz-card",
            span { class: "quiz-timer", "{card.timer_label}" }
            h2 { class: "quiz-prompt", "{card.prompt}" }
            div { class: "quiz-choices", {choices} }
            button {
                class: "btn quiz-submit",
                r#type: "button",
                disabled: !card.can_submit,
                onclick: move |_| on_intent.call(QuizIntent::Submit),
                "Submit"
            }
            div { class: "quiz-nav",
                button {
                    class: "btn quiz-nav-btn",
                    r#type: "button",
                    disabled: !card.can_retreat,
                    onclick: move |_| on_intent.call(QuizIntent::Previous),
                    "← Previous"
                }
                span { class: "quiz-progress", "{card.progress_label}" }
                button {
                    class: "btn quiz-nav-btn",
                    r#type: "button",
                    disabled: !card.can_advance,
                    onclick: move |_| on_intent.call(QuizIntent::Next),
                    "Next →"
                }
            }
        }
    }
}

#[component]
fn ChoiceButton(choice: ChoiceVm, on_intent: EventHandler<QuizIntent>) -> Element {
    let class = match choice.state {
        ChoiceState::Idle => "quiz-choice",
        ChoiceState::Selected => "quiz-choice quiz-choice--selected",
        ChoiceState::Locked => "quiz-choice quiz-choice--locked",
    };
    let label = choice.label.clone();

    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            disabled: choice.state == ChoiceState::Locked,
            onclick: move |_| on_intent.call(QuizIntent::Select(label.clone())),
            "{choice.label}"
        }
    }
}
