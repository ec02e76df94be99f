//! One chat bubble: text, timestamp, audio playback, and on-demand
//! translation.

use leptos::prelude::*;

use crate::components::language_selector::LanguageSelector;
use crate::state::chat::ChatMessage as Message;
use crate::state::ui::UiState;
use crate::util::speech;
use crate::util::time::format_clock;

/// A single message bubble with its action row.
///
/// Translation is fetched lazily per message and shown beneath the text;
/// the fetcher degrades to a canned sentence on any failure, so the action
/// never errors. Audio playback goes through platform speech synthesis and
/// surfaces a notice when unsupported.
#[component]
pub fn ChatMessageView(message: Message) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let translated = RwSignal::new(None::<String>);
    let translating = RwSignal::new(false);

    let text = message.text.clone();
    let play_text = message.text.clone();

    let on_play = move |_| {
        let lang = ui.get_untracked().language;
        if !speech::speak(&play_text, &lang) {
            ui.update(|u| u.push_notice("Speech synthesis is not supported in this browser."));
        }
    };

    let on_translate = move |_| {
        if translating.get_untracked() || translated.get_untracked().is_some() {
            return;
        }
        translating.set(true);
        let text = text.clone();
        let target = ui.get_untracked().language;
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::translate::translate(&text, &target).await;
            // try_*: the panel may have unmounted while the request ran.
            let _ = translated.try_set(Some(result));
            let _ = translating.try_set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &text;
            translated.set(Some(crate::net::translate::fallback_translation(&target).to_owned()));
            translating.set(false);
        }
    };

    view! {
        <div class="chat-message" class:chat-message--user=message.is_user>
            <div class="chat-message__bubble">
                <p class="chat-message__text">{message.text.clone()}</p>
                <p class="chat-message__time">{format_clock(message.timestamp)}</p>

                {move || {
                    translated
                        .get()
                        .map(|text| {
                            view! {
                                <div class="chat-message__translation">
                                    <span class="chat-message__translation-label">"Översättning:"</span>
                                    <span>{text}</span>
                                </div>
                            }
                        })
                }}

                <div class="chat-message__actions">
                    <button class="chat-message__action" aria-label="Play audio" on:click=on_play>
                        "🔊"
                    </button>
                    <button
                        class="chat-message__action"
                        aria-label="Translate message"
                        disabled=move || translating.get() || translated.get().is_some()
                        on:click=on_translate
                    >
                        "🌐"
                    </button>
                </div>

                {message
                    .translate_options
                    .then(|| view! { <LanguageSelector/> })}
            </div>
        </div>
    }
}
