//! Customer-service chat panel: tabs, message list, input bar.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sends are optimistic: the user message is appended before the request
//! leaves, and the reply (or the canned apology) is folded in when the
//! request completes. Completions are generation-guarded so a response
//! arriving after the panel was torn down and remounted is dropped instead
//! of landing in a fresh session.

use leptos::prelude::*;

use crate::components::chat_input_bar::ChatInputBar;
use crate::components::chat_message::ChatMessageView;
use crate::components::language_selector::LanguageSelector;
use crate::state::chat::ChatState;
use crate::state::speech::{Capability, SpeechState};
use crate::state::ui::{ChatTab, UiState};
use crate::util::speech;
use crate::util::time::now_ms;

const SPEECH_ADVISORY: &str =
    "Din webbläsare stöder inte röstinspelning. Försök med Chrome eller Edge.";

/// Chat card with its two tabs.
#[component]
pub fn ChatPanel() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let chat = expect_context::<RwSignal<ChatState>>();
    let speech_state = expect_context::<RwSignal<SpeechState>>();

    let input = RwSignal::new(String::new());
    let generation = RwSignal::new(0_u64);
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    // Probe speech capabilities once per mount; surface the advisory a
    // single time when recognition is missing.
    Effect::new(move || {
        if speech_state.get_untracked().recognition != Capability::Unknown {
            return;
        }
        let recognition = speech::probe_recognition();
        let synthesis = speech::probe_synthesis();
        let mut advise = false;
        speech_state.update(|s| {
            s.recognition = recognition;
            s.synthesis = synthesis;
            if recognition == Capability::Unavailable {
                advise = s.should_advise();
            }
        });
        if advise {
            ui.update(|u| u.push_notice(SPEECH_ADVISORY));
        }
    });

    // Keep the newest message in view.
    Effect::new(move || {
        let _ = chat.get().messages.len();
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    // Stale completions from a previous mount must not touch this session.
    on_cleanup(move || {
        let _ = generation.try_update(|g| *g += 1);
    });

    let do_send = move || {
        let Some(text) = input.try_get_untracked() else {
            return;
        };
        let mut query = None;
        chat.update(|c| query = c.begin_send(&text, now_ms()));
        let Some(query) = query else {
            return;
        };
        input.set(String::new());
        #[cfg(not(feature = "hydrate"))]
        let _ = query;

        #[cfg(feature = "hydrate")]
        {
            let generation_at_send = generation.get_untracked();
            leptos::task::spawn_local(async move {
                let session_id = chat.with_untracked(ChatState::outbound_session_id);
                let result = crate::net::api::send_chat(
                    crate::net::api::CHAT_ENDPOINT,
                    &query,
                    session_id.as_deref(),
                )
                .await;
                if generation.try_get_untracked() != Some(generation_at_send) {
                    return;
                }
                chat.update(|c| c.apply_reply(&query, result, now_ms()));
            });
        }
    };
    let on_send = Callback::new(move |()| do_send());

    view! {
        <div class="chat-panel">
            <div class="chat-panel__tabs">
                <button
                    class="chat-panel__tab"
                    class:chat-panel__tab--active=move || ui.get().chat_tab == ChatTab::Chat
                    on:click=move |_| ui.update(|u| u.chat_tab = ChatTab::Chat)
                >
                    "Chat"
                </button>
                <button
                    class="chat-panel__tab"
                    class:chat-panel__tab--active=move || ui.get().chat_tab == ChatTab::Translate
                    on:click=move |_| ui.update(|u| u.chat_tab = ChatTab::Translate)
                >
                    "Translate"
                </button>
            </div>

            {move || match ui.get().chat_tab {
                ChatTab::Chat => {
                    view! {
                        <div class="chat-panel__body">
                            <div class="chat-panel__messages" node_ref=messages_ref>
                                <For
                                    each=move || chat.get().messages
                                    key=|message| message.id.clone()
                                    let:message
                                >
                                    <ChatMessageView message/>
                                </For>
                            </div>

                            {move || {
                                let follow_ups = chat.get().follow_ups;
                                (!follow_ups.is_empty())
                                    .then(|| {
                                        view! {
                                            <div class="chat-panel__follow-ups">
                                                {follow_ups
                                                    .into_iter()
                                                    .map(|question| {
                                                        let fill = question.clone();
                                                        view! {
                                                            <button
                                                                class="chat-panel__follow-up"
                                                                on:click=move |_| input.set(fill.clone())
                                                            >
                                                                {question}
                                                            </button>
                                                        }
                                                    })
                                                    .collect::<Vec<_>>()}
                                            </div>
                                        }
                                    })
                            }}

                            <ChatInputBar input=input on_send=on_send/>
                        </div>
                    }
                        .into_any()
                }
                ChatTab::Translate => {
                    view! {
                        <div class="chat-panel__translate">
                            <h3>"Select Language"</h3>
                            <LanguageSelector/>
                            <h3>"Real-time Translation"</h3>
                            <p class="chat-panel__translate-hint">
                                "All communication will be automatically translated to your selected language. You can change languages at any time without interrupting your customer service experience."
                            </p>
                            <button
                                class="chat-panel__translate-return"
                                on:click=move |_| ui.update(|u| u.chat_tab = ChatTab::Chat)
                            >
                                "Return to Chat"
                            </button>
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
