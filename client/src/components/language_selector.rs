//! Language picker shared by the translate tab and the inline per-message
//! offer.

use leptos::prelude::*;

use crate::state::chat::ChatState;
use crate::state::ui::UiState;
use crate::util::language::LANGUAGES;
use crate::util::time::now_ms;

/// Grid of language buttons. Picking a language updates the session
/// language and appends the canned notice to the chat.
#[component]
pub fn LanguageSelector() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let chat = expect_context::<RwSignal<ChatState>>();

    view! {
        <div class="language-selector">
            {LANGUAGES
                .iter()
                .map(|lang| {
                    let code = lang.code;
                    view! {
                        <button
                            class="language-selector__option"
                            class:language-selector__option--active=move || ui.get().language == code
                            on:click=move |_| {
                                if ui.get_untracked().language == code {
                                    return;
                                }
                                ui.update(|u| u.language = code.to_owned());
                                chat.update(|c| c.push_language_notice(code, now_ms()));
                            }
                        >
                            {lang.name}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
