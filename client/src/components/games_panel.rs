//! Mini-game menu and host.
//!
//! Each game is self-contained and talks back only through the
//! return-to-menu callback; mounting a game creates its state, leaving it
//! tears the state down.

#[cfg(test)]
#[path = "games_panel_test.rs"]
mod games_panel_test;

use leptos::prelude::*;

use crate::components::memory_game::MemoryGameView;
use crate::components::quiz_battle::QuizBattleView;
use crate::components::reaction_speed::ReactionSpeedView;
use crate::state::ui::{ActiveGame, UiState};

/// A mini-game menu card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameDef {
    pub game: ActiveGame,
    pub title: &'static str,
    pub description: &'static str,
}

/// The three mini-games, in display order.
pub const GAMES: [GameDef; 3] = [
    GameDef {
        game: ActiveGame::Memory,
        title: "Memory Game",
        description: "Vänd och matcha par av emojis på så få drag som möjligt.",
    },
    GameDef {
        game: ActiveGame::Quiz,
        title: "Quiz Battle",
        description: "Testa dina kunskaper om kultur och världen i snabba quizrundor.",
    },
    GameDef {
        game: ActiveGame::Reaction,
        title: "Reaction Speed",
        description: "Hur snabbt kan du reagera när signalen blir grön?",
    },
];

/// Game menu, or the mounted game.
#[component]
pub fn GamesPanel() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let on_back = Callback::new(move |()| ui.update(|u| u.active_game = None));

    view! {
        <div class="games-panel">
            {move || match ui.get().active_game {
                Some(ActiveGame::Memory) => view! { <MemoryGameView on_back=on_back/> }.into_any(),
                Some(ActiveGame::Quiz) => view! { <QuizBattleView on_back=on_back/> }.into_any(),
                Some(ActiveGame::Reaction) => {
                    view! { <ReactionSpeedView on_back=on_back/> }.into_any()
                }
                None => {
                    view! {
                        <div class="games-panel__menu">
                            <h2>"Spel & Aktiviteter"</h2>
                            <p class="games-panel__intro">
                                "Tre enkla, underhållande spel du snabbt hinner spela! Välj ett spel nedan:"
                            </p>
                            <div class="games-panel__cards">
                                {GAMES
                                    .iter()
                                    .map(|def| {
                                        let game = def.game;
                                        view! {
                                            <div class="games-panel__card">
                                                <h3>{def.title}</h3>
                                                <p>{def.description}</p>
                                                <button
                                                    class="games-panel__play"
                                                    on:click=move |_| {
                                                        ui.update(|u| u.active_game = Some(game));
                                                    }
                                                >
                                                    "Spela"
                                                </button>
                                            </div>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </div>
                            <p class="games-panel__footer">
                                "Perfekta spel för att slå ihjäl tid i väntan – och kanske lära dig något nytt!"
                            </p>
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
