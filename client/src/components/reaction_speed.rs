//! Reaction-speed view over `arcade::reaction`.
//!
//! The engine draws the arm delay; this component schedules it and feeds
//! clicks back with the high-resolution clock. The generation counter
//! drops arm callbacks from earlier rounds, so a quick restart can never
//! double-arm a trial.

use leptos::prelude::*;

use arcade::reaction::{InputOutcome, Phase, ReactionTimer};

use crate::util::rng::game_rng;
use crate::util::time::perf_now_ms;
use crate::util::timers;

/// Reaction-time test.
#[component]
pub fn ReactionSpeedView(#[prop(into)] on_back: Callback<()>) -> impl IntoView {
    let timer = RwSignal::new(ReactionTimer::new());
    let generation = RwSignal::new(0_u64);

    let start = move || {
        generation.update(|g| *g += 1);
        let mut delay = 0;
        timer.update(|t| delay = t.start(&mut game_rng()));
        let generation_at_start = generation.get_untracked();
        timers::schedule(delay, move || {
            if generation.try_get_untracked() != Some(generation_at_start) {
                return;
            }
            let _ = timer.try_update(|t| t.arm(perf_now_ms()));
        });
    };

    let on_click = move |_| {
        let mut outcome = InputOutcome::Ignored;
        timer.update(|t| outcome = t.register_input(perf_now_ms()));
        if outcome == InputOutcome::FalseStart {
            // The pending arm callback dies with this round's generation.
            generation.update(|g| *g += 1);
        }
    };

    view! {
        <div class="game reaction-speed">
            <div class="game__header">
                <button class="game__back" on:click=move |_| on_back.run(())>
                    "←"
                </button>
                <h2>"Reaction Speed"</h2>
            </div>

            <div class="reaction-speed__stage">
                {move || match timer.get().phase() {
                    Phase::Idle => {
                        view! {
                            <button class="reaction-speed__start" on:click=move |_| start()>
                                "Starta Testet"
                            </button>
                        }
                            .into_any()
                    }
                    Phase::Waiting => {
                        view! {
                            <button class="reaction-speed__waiting" on:click=on_click>
                                "Vänta på grön!"
                            </button>
                        }
                            .into_any()
                    }
                    Phase::Armed => {
                        view! {
                            <button class="reaction-speed__go" on:click=on_click>
                                "KLICKA!"
                            </button>
                        }
                            .into_any()
                    }
                    Phase::FalseStart => {
                        view! {
                            <div class="reaction-speed__result">
                                <p class="reaction-speed__early">"För tidigt! Vänta på grön signal 🔴"</p>
                                <button class="game__restart" on:click=move |_| start()>
                                    "Försök igen"
                                </button>
                            </div>
                        }
                            .into_any()
                    }
                    Phase::Measured => {
                        let result = timer.get().result_ms().unwrap_or_default();
                        view! {
                            <div class="reaction-speed__result">
                                <p>"Din reaktionstid:"</p>
                                <p class="reaction-speed__ms">{format!("{result} ms")}</p>
                                <button class="game__restart" on:click=move |_| start()>
                                    "Försök igen"
                                </button>
                            </div>
                        }
                            .into_any()
                    }
                }}
            </div>

            <p class="reaction-speed__hint">
                "Hur snabbt kan du klicka när knappen blir grön? Klicka INTE direkt!"
            </p>
        </div>
    }
}
