//! Cultural hub: quiz, FAQ accordion, and the embedded video.
//!
//! The quiz runs the same trivia engine as Quiz Battle but with the
//! manual-reveal policy: select, check, then move on. Completion surfaces
//! the reward code. FAQ and video are static presentation.

#[cfg(test)]
#[path = "hub_panel_test.rs"]
mod hub_panel_test;

use leptos::prelude::*;

use arcade::trivia::{AdvancePolicy, Question, TriviaGame};

/// Reward code surfaced when the cultural quiz completes.
pub const REWARD_CODE: &str = "CULTURE10";

/// Question bank for the cultural quiz.
#[must_use]
pub fn questions() -> Vec<Question> {
    vec![
        Question::new(
            "What is the main purpose of the Cultural Connection Hub?",
            &[
                "To provide entertainment only",
                "To transform waiting time into a cultural experience",
                "To replace human customer service",
                "To collect customer data",
            ],
            1,
        ),
        Question::new(
            "Which feature allows real-time communication in different languages?",
            &["Cultural insights", "Entertainment games", "Translation module", "AR experiences"],
            2,
        ),
        Question::new(
            "What can customers earn by completing activities in the Cultural Connection Hub?",
            &["Crypto tokens", "Free products", "Rewards like discounts", "Airline miles"],
            2,
        ),
    ]
}

/// One FAQ entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

/// Static FAQ content.
pub const FAQ: [FaqEntry; 4] = [
    FaqEntry {
        question: "Hur kan jag förbättra min kommunikation med andra kulturer?",
        answer: "Läs på om de vanligaste hövlighetsfraserna, observera kroppsspråk och var nyfiken utan att vara påträngande. Lyssna aktivt och våga fråga om du är osäker.",
    },
    FaqEntry {
        question: "Vilken är den bästa första hälsningsfrasen i affärssammanhang internationellt?",
        answer: "En neutral och vänlig hälsning, exempelvis 'Hej, trevligt att träffas!' på engelska: 'Hello, nice to meet you!' fungerar nästan överallt. Undvik starka handslag där det inte är norm.",
    },
    FaqEntry {
        question: "Hur kan jag hantera missförstånd i ett samtal?",
        answer: "Var tålmodig och fråga öppet vad personen menar. Sammanfatta gärna vad du hört för att säkerställa att ni förstått varandra rätt.",
    },
    FaqEntry {
        question: "Kan jag använda informell ton på andra språk?",
        answer: "Det beror på situation och kultur. I formella affärssammanhang är det bäst att börja artigt och byta till mer avslappnad ton om motparten gör det.",
    },
];

/// Cultural hub view.
#[component]
pub fn HubPanel() -> impl IntoView {
    view! {
        <div class="hub-panel">
            <CulturalQuiz/>
            <CulturalFaq/>
            <CulturalVideo/>
        </div>
    }
}

/// Quiz with explicit check-answer and next-question steps.
#[component]
fn CulturalQuiz() -> impl IntoView {
    let game = RwSignal::new(TriviaGame::with_reward(
        questions(),
        AdvancePolicy::ManualReveal,
        REWARD_CODE,
    ));

    view! {
        <section class="hub-quiz">
            {move || {
                let state = game.get();
                if state.completed() {
                    let reward = state.reward_code().unwrap_or_default().to_owned();
                    view! {
                        <div class="hub-quiz__done">
                            <h3>"Quiz Completed!"</h3>
                            <p>{format!("You scored {} out of {}", state.score(), state.len())}</p>
                            <div class="hub-quiz__reward">
                                <h4>"You've earned a reward!"</h4>
                                <p>
                                    "Use code "
                                    <span class="hub-quiz__code">{reward}</span>
                                    " for 10% off your next purchase."
                                </p>
                            </div>
                            <button class="hub-quiz__restart" on:click=move |_| game.update(TriviaGame::restart)>
                                "Try Another Quiz"
                            </button>
                        </div>
                    }
                        .into_any()
                } else {
                    let Some(question) = state.current().cloned() else {
                        return view! { <div class="hub-quiz__empty">"No questions."</div> }.into_any();
                    };
                    let correct = question.correct;
                    let revealed = state.revealed();
                    let selected = state.selected();
                    view! {
                        <div>
                            <div class="hub-quiz__meta">
                                <span>{format!("Question {}/{}", state.index() + 1, state.len())}</span>
                                <span>{format!("Score: {}", state.score())}</span>
                            </div>
                            <h3 class="hub-quiz__prompt">{question.prompt.clone()}</h3>
                            <div class="hub-quiz__options">
                                {question
                                    .options
                                    .iter()
                                    .enumerate()
                                    .map(|(option, label)| {
                                        view! {
                                            <button
                                                class="hub-quiz__option"
                                                class:hub-quiz__option--selected=!revealed
                                                    && selected == Some(option)
                                                class:hub-quiz__option--correct=revealed && option == correct
                                                class:hub-quiz__option--wrong=revealed
                                                    && selected == Some(option) && option != correct
                                                on:click=move |_| {
                                                    game.update(|g| {
                                                        g.select(option);
                                                    });
                                                }
                                            >
                                                {label.clone()}
                                            </button>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </div>
                            {if revealed {
                                let on_last = state.on_last_question();
                                view! {
                                    <button
                                        class="hub-quiz__next"
                                        on:click=move |_| game.update(TriviaGame::advance)
                                    >
                                        {if on_last { "See Results" } else { "Next Question" }}
                                    </button>
                                }
                                    .into_any()
                            } else {
                                view! {
                                    <button
                                        class="hub-quiz__check"
                                        disabled=selected.is_none()
                                        on:click=move |_| game.update(TriviaGame::reveal)
                                    >
                                        "Check Answer"
                                    </button>
                                }
                                    .into_any()
                            }}
                        </div>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}

/// FAQ accordion; one entry open at a time.
#[component]
fn CulturalFaq() -> impl IntoView {
    let open = RwSignal::new(None::<usize>);

    view! {
        <section class="hub-faq">
            <h3>"Vanliga frågor & svar"</h3>
            {FAQ
                .iter()
                .copied()
                .enumerate()
                .map(|(index, entry)| {
                    view! {
                        <div class="hub-faq__entry">
                            <button
                                class="hub-faq__question"
                                on:click=move |_| {
                                    open.update(|o| {
                                        *o = if *o == Some(index) { None } else { Some(index) };
                                    });
                                }
                            >
                                {entry.question}
                            </button>
                            {move || {
                                (open.get() == Some(index))
                                    .then(|| view! { <p class="hub-faq__answer">{entry.answer}</p> })
                            }}
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </section>
    }
}

/// Embedded introduction video.
#[component]
fn CulturalVideo() -> impl IntoView {
    view! {
        <section class="hub-video">
            <h3>"Upptäck mer"</h3>
            <div class="hub-video__frame">
                <iframe
                    src="https://www.youtube.com/embed/1O_9oM0FQJc"
                    title="Cultural introduction"
                    allowfullscreen=true
                ></iframe>
            </div>
        </section>
    }
}
