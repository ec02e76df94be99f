//! Single-page shell: the top view selector and the mounted view.
//!
//! The selector mounts exactly one of the chat panel, the cultural hub, or
//! the games panel. Switching views tears the previous one down, which is
//! what resets games and chat state between visits.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::components::chat_panel::ChatPanel;
use crate::components::games_panel::GamesPanel;
use crate::components::hub_panel::HubPanel;
use crate::state::ui::{ActiveView, UiState};

/// A selectable top-level view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewDef {
    pub view: ActiveView,
    pub name: &'static str,
    pub description: &'static str,
}

/// The three top-level views, in display order.
pub const VIEWS: [ViewDef; 3] = [
    ViewDef {
        view: ActiveView::Chat,
        name: "Kundtjänstchatt",
        description: "Få hjälp och chatta med kundtjänst.",
    },
    ViewDef {
        view: ActiveView::Hub,
        name: "Kulturell hub",
        description: "Upptäck kultur, quiz och mer.",
    },
    ViewDef {
        view: ActiveView::Games,
        name: "Spel",
        description: "Tidsfördriv & lär genom spel.",
    },
];

/// Widget shell: brand header, view selector, and the active view.
#[component]
pub fn HomePage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <div class="widget">
            <header class="widget__header">
                <span class="widget__brand">"CService"</span>
                <nav class="widget__menu">
                    {VIEWS
                        .iter()
                        .map(|def| {
                            let view = def.view;
                            view! {
                                <button
                                    class="widget__menu-item"
                                    class:widget__menu-item--active=move || ui.get().view == view
                                    title=def.description
                                    on:click=move |_| {
                                        ui.update(|u| {
                                            u.view = view;
                                            // Entering the games view always lands on the menu.
                                            u.active_game = None;
                                        });
                                    }
                                >
                                    {def.name}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </nav>
            </header>

            {move || {
                ui.get()
                    .notice
                    .map(|text| {
                        view! {
                            <div class="widget__notice" role="status">
                                <span>{text}</span>
                                <button
                                    class="widget__notice-dismiss"
                                    on:click=move |_| ui.update(|u| u.notice = None)
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    })
            }}

            <main class="widget__content">
                {move || match ui.get().view {
                    ActiveView::Chat => view! { <ChatPanel/> }.into_any(),
                    ActiveView::Hub => view! { <HubPanel/> }.into_any(),
                    ActiveView::Games => view! { <GamesPanel/> }.into_any(),
                }}
            </main>
        </div>
    }
}
