//! Chat input row: text field, microphone toggle, send button.
//!
//! SYSTEM CONTEXT
//! ==============
//! While recording, the recognition transcript continuously replaces the
//! input buffer. Stopping the microphone with pending text schedules the
//! send after a short grace delay so the final transcript fragment can
//! still land in the buffer.

use leptos::prelude::*;

use crate::state::speech::SpeechState;
use crate::state::ui::UiState;
use crate::util::{speech, timers};

/// Grace period between stopping the microphone and auto-sending, in ms.
pub const AUTO_SEND_GRACE_MS: u32 = 500;

const MIC_ERROR_NOTICE: &str =
    "Det gick inte att använda mikrofonen. Kontrollera behörigheter.";

/// Input bar. The panel owns the buffer and the send action; this
/// component owns the microphone lifecycle.
#[component]
pub fn ChatInputBar(input: RwSignal<String>, #[prop(into)] on_send: Callback<()>) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let speech_state = expect_context::<RwSignal<SpeechState>>();

    // Invalidates a pending grace-send when recording restarts or the
    // panel unmounts before the timer fires.
    let grace_generation = RwSignal::new(0_u64);

    let stop_recording = move || {
        speech::stop_recognition();
        speech_state.update(|s| s.recording = false);
        if !input.get_untracked().trim().is_empty() {
            let generation_at_stop = grace_generation.get_untracked();
            timers::schedule(AUTO_SEND_GRACE_MS, move || {
                if grace_generation.try_get_untracked() != Some(generation_at_stop) {
                    return;
                }
                on_send.run(());
            });
        }
    };

    let start_recording = move || {
        grace_generation.update(|g| *g += 1);
        let started = speech::start_recognition(
            move |transcript| {
                let _ = input.try_set(transcript);
            },
            move || {
                speech::stop_recognition();
                let _ = speech_state.try_update(|s| s.recording = false);
                let _ = ui.try_update(|u| u.push_notice(MIC_ERROR_NOTICE));
            },
        );
        if started {
            speech_state.update(|s| s.recording = true);
        } else {
            ui.update(|u| u.push_notice(MIC_ERROR_NOTICE));
        }
    };

    let on_toggle_mic = move |_| {
        if speech_state.get_untracked().recording {
            stop_recording();
        } else {
            start_recording();
        }
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            on_send.run(());
        }
    };

    view! {
        <div class="chat-input">
            <input
                class="chat-input__field"
                type="text"
                placeholder="Type your message..."
                prop:value=move || input.get()
                on:input=move |ev| input.set(event_target_value(&ev))
                on:keydown=on_keydown
            />
            <button
                class="chat-input__mic"
                class:chat-input__mic--recording=move || speech_state.get().recording
                title=move || {
                    if speech_state.get().recording {
                        "Stoppa inspelning"
                    } else {
                        "Starta röstinspelning"
                    }
                }
                disabled=move || !speech_state.get().can_record()
                on:click=on_toggle_mic
            >
                {move || if speech_state.get().recording { "🎙" } else { "🎤" }}
            </button>
            <button
                class="chat-input__send"
                disabled=move || input.get().trim().is_empty()
                on:click=move |_| on_send.run(())
            >
                "Send"
            </button>
        </div>
    }
}
