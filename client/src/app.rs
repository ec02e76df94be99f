//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};

use crate::pages::home::HomePage;
use crate::state::{chat::ChatState, speech::SpeechState, ui::UiState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared state contexts and mounts the single-page widget.
/// There is no router: the top-level views are a state switch, and games
/// and chat reset when their view unmounts.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    let chat = RwSignal::new(ChatState::default());
    let speech = RwSignal::new(SpeechState::default());

    provide_context(ui);
    provide_context(chat);
    provide_context(speech);

    view! {
        <Stylesheet id="leptos" href="/pkg/cservice.css"/>
        <Title text="CService"/>

        <HomePage/>
    }
}
