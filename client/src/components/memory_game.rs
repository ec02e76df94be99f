//! Memory game view over `arcade::memory`.
//!
//! The engine owns the deck; this component only schedules the reveal
//! delay and re-renders. Scheduled resolutions carry the generation at
//! flip time, so a restart invalidates any timer still in flight.

use leptos::prelude::*;

use arcade::memory::{FlipOutcome, MemoryGame, PAIR_MULTIPLICITY, REVEAL_DELAY_MS};

use crate::util::rng::game_rng;
use crate::util::timers;

/// Tokens dealt into the deck, two cards each.
pub const TOKENS: [&str; 6] = ["🍉", "🎲", "🌍", "🥨", "❄️", "🚀"];

/// Memory-matching game.
#[component]
pub fn MemoryGameView(#[prop(into)] on_back: Callback<()>) -> impl IntoView {
    let game = RwSignal::new(MemoryGame::new(
        TOKENS.to_vec(),
        PAIR_MULTIPLICITY,
        &mut game_rng(),
    ));
    let generation = RwSignal::new(0_u64);

    let on_flip = move |slot: usize| {
        let mut outcome = FlipOutcome::Rejected;
        game.update(|g| outcome = g.flip(slot));
        if outcome != FlipOutcome::PairPending {
            return;
        }
        let generation_at_flip = generation.get_untracked();
        timers::schedule(REVEAL_DELAY_MS, move || {
            if generation.try_get_untracked() != Some(generation_at_flip) {
                return;
            }
            let _ = game.try_update(|g| {
                g.resolve_pending();
            });
        });
    };

    let restart = move |_| {
        generation.update(|g| *g += 1);
        game.update(|g| g.restart(&mut game_rng()));
    };

    view! {
        <div class="game memory-game">
            <div class="game__header">
                <button class="game__back" on:click=move |_| on_back.run(())>
                    "←"
                </button>
                <h2>"Memory Game"</h2>
            </div>

            <div class="memory-game__grid">
                {move || {
                    let state = game.get();
                    let pending_full = state.pending().len() >= 2;
                    state
                        .cards()
                        .iter()
                        .enumerate()
                        .map(|(slot, card)| {
                            let face_up = card.flipped || card.matched;
                            let token = card.token;
                            view! {
                                <button
                                    class="memory-game__card"
                                    class:memory-game__card--up=face_up
                                    disabled=face_up || pending_full
                                    on:click=move |_| on_flip(slot)
                                >
                                    {if face_up { token } else { "?" }}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>

            <p class="memory-game__moves">{move || format!("Antal drag: {}", game.get().moves())}</p>

            {move || {
                game.get()
                    .is_won()
                    .then(|| {
                        view! {
                            <div class="memory-game__won">
                                <p>
                                    {format!("Grattis! Du klarade spelet på {} drag!", game.get().moves())}
                                </p>
                                <button class="game__restart" on:click=restart>
                                    "Spela igen"
                                </button>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
