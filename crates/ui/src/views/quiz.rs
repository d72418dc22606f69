use dioxus::prelude::*;
use tracing::warn;

use crate::context::AppContext;
use crate::views::ViewError;
use crate::vm::{QuizScreenVm, map_quiz_screen};

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let quiz = use_signal(|| ctx.new_quiz().map_err(|_| ViewError::EmptyQuiz));

    let screen = quiz.read().as_ref().map(map_quiz_screen).map_err(|err| *err);

    rsx! {
        div { class: "page quiz-page",
            h2 { class: "view-title", "Halifax Woodlands Quiz" }
            match screen {
                Err(err) => rsx! {
                    p { class: "quiz-empty", "{err.message()}" }
                },
                Ok(QuizScreenVm::Question(question)) => {
                    let option_buttons = question.options.iter().map(|option| {
                        let mut quiz = quiz;
                        let label = option.clone();
                        let answer = option.clone();
                        rsx! {
                            button {
                                key: "{label}",
                                class: "quiz-option",
                                r#type: "button",
                                onclick: move |_| {
                                    if let Ok(quiz) = &mut *quiz.write() {
                                        if let Err(err) = quiz.submit_answer(&answer) {
                                            warn!(error = %err, "answer ignored");
                                        }
                                    }
                                },
                                "{label}"
                            }
                        }
                    });
                    rsx! {
                        div { class: "quiz-card",
                            h3 { class: "quiz-prompt", "{question.prompt}" }
                            div { class: "quiz-options",
                                {option_buttons}
                            }
                            p { class: "quiz-progress", "{question.progress_label}" }
                        }
                    }
                }
                Ok(QuizScreenVm::Complete(result)) => {
                    let mut quiz = quiz;
                    rsx! {
                        div { class: "quiz-card quiz-complete",
                            h3 { "Quiz Complete!" }
                            p { class: "quiz-score", "{result.score_label}" }
                            button {
                                class: "btn btn-primary",
                                r#type: "button",
                                onclick: move |_| {
                                    if let Ok(quiz) = &mut *quiz.write() {
                                        quiz.reset();
                                    }
                                },
                                "Try Again"
                            }
                        }
                    }
                }
            }
        }
    }
}
