use dioxus::prelude::*;

use quiz_core::model::Verdict;

use crate::vm::ScorecardVm;

#[component]
pub fn ScorecardView(scorecard: ScorecardVm, on_restart: EventHandler<()>) -> Element {
    let rows = scorecard.rows.iter().map(|row| {
        let response_class = match row.verdict {
            Verdict::Correct => "scorecard-response scorecard-response--correct",
            Verdict::Incorrect => "scorecard-response scorecard-response--incorrect",
            Verdict::NotAttempted => "scorecard-response scorecard-response--skipped",
        };
        rsx! {
            li { class: "scorecard-row",
                strong { class: "scorecard-heading", "{row.heading}" }
                span { class: "scorecard-correct", "{row.correct_line}" }
                span { class: "{response_class}", "{row.response_line}" }
            }
        }
    });
    let bursts = (0..5).map(|i| {
        let delay = i * 200;
        rsx! {
            span {
                class: "celebration-burst",
                style: "animation-delay: {delay}ms",
                "🎉"
            }
        }
    });

    rsx! {
        div { class: "quiz-card scorecard",
            if scorecard.celebrate {
                div { class: "celebration", aria_hidden: "true", {bursts} }
            }
            h2 { class: "scorecard-title", "Quiz Completed!" }
            p { class: "scorecard-score", "{scorecard.score_label}" }
            p { class: "scorecard-message", "{scorecard.message}" }
            h3 { class: "scorecard-subtitle", "📊 Scorecard:" }
            ul { class: "scorecard-list", {rows} }
            button {
                class: "btn scorecard-restart",
                r#type: "button",
                onclick: move |_| on_restart.call(()),
                "Restart Quiz"
            }
        }
    }
}
