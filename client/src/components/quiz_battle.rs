//! Quiz Battle view over `arcade::trivia` with the auto-advance policy.
//!
//! Selecting an answer locks and scores it immediately; the engine hands
//! back the advance delay and this component schedules it, guarded by the
//! round's generation so a restart drops stale advances.

#[cfg(test)]
#[path = "quiz_battle_test.rs"]
mod quiz_battle_test;

use leptos::prelude::*;

use arcade::trivia::{AUTO_ADVANCE_DELAY_MS, AdvancePolicy, Question, SelectOutcome, TriviaGame};

use crate::util::timers;

/// Question bank for Quiz Battle.
#[must_use]
pub fn questions() -> Vec<Question> {
    vec![
        Question::new(
            "Vilket är Sveriges största landskap?",
            &["Skåne", "Lappland", "Norrland", "Västergötland"],
            1,
        ),
        Question::new("Vad betyder det japanska ordet 'sushi'?", &["Ris", "Fisk", "Rå", "Vatten"], 0),
        Question::new(
            "Vilket språk pratas INTE i Schweiz?",
            &["Franska", "Norska", "Tyska", "Italienska"],
            1,
        ),
        Question::new(
            "Vilken färg har flaggan för Brasilien?",
            &["Blå & Vit", "Grön & Gul", "Röd & Vit", "Lila & Guld"],
            1,
        ),
        Question::new(
            "Från vilket land kommer pizzan ursprungligen?",
            &["USA", "Spanien", "Italien", "Grekland"],
            2,
        ),
    ]
}

/// Fast-paced quiz with timed auto-advance.
#[component]
pub fn QuizBattleView(#[prop(into)] on_back: Callback<()>) -> impl IntoView {
    let game = RwSignal::new(TriviaGame::new(
        questions(),
        AdvancePolicy::AutoAdvance { delay_ms: AUTO_ADVANCE_DELAY_MS },
    ));
    let generation = RwSignal::new(0_u64);

    let on_answer = move |option: usize| {
        let mut outcome = SelectOutcome::Rejected;
        game.update(|g| outcome = g.select(option));
        let SelectOutcome::ScheduleAdvance { delay_ms } = outcome else {
            return;
        };
        let generation_at_answer = generation.get_untracked();
        timers::schedule(delay_ms, move || {
            if generation.try_get_untracked() != Some(generation_at_answer) {
                return;
            }
            let _ = game.try_update(TriviaGame::advance);
        });
    };

    let restart = move |_| {
        generation.update(|g| *g += 1);
        game.update(TriviaGame::restart);
    };

    view! {
        <div class="game quiz-battle">
            <div class="game__header">
                <button class="game__back" on:click=move |_| on_back.run(())>
                    "←"
                </button>
                <h2>"Quiz Battle"</h2>
            </div>

            {move || {
                let state = game.get();
                if state.completed() {
                    view! {
                        <div class="quiz-battle__done">
                            <p>{format!("Du fick {} av {} poäng!", state.score(), state.len())}</p>
                            <button class="game__restart" on:click=restart>
                                "Försök igen"
                            </button>
                            <button class="game__back-button" on:click=move |_| on_back.run(())>
                                "Tillbaka"
                            </button>
                        </div>
                    }
                        .into_any()
                } else {
                    let Some(question) = state.current().cloned() else {
                        return view! { <div class="quiz-battle__empty">"Inga frågor."</div> }
                            .into_any();
                    };
                    let correct = question.correct;
                    let revealed = state.revealed();
                    let selected = state.selected();
                    view! {
                        <div>
                            <div class="quiz-battle__meta">
                                <span>{format!("Fråga {}/{}", state.index() + 1, state.len())}</span>
                                <span>{format!("Poäng: {}", state.score())}</span>
                            </div>
                            <h3 class="quiz-battle__prompt">{question.prompt.clone()}</h3>
                            <div class="quiz-battle__options">
                                {question
                                    .options
                                    .iter()
                                    .enumerate()
                                    .map(|(option, label)| {
                                        view! {
                                            <button
                                                class="quiz-battle__option"
                                                class:quiz-battle__option--correct=revealed && option == correct
                                                class:quiz-battle__option--wrong=revealed
                                                    && selected == Some(option) && option != correct
                                                disabled=revealed
                                                on:click=move |_| on_answer(option)
                                            >
                                                {label.clone()}
                                            </button>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </div>
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
