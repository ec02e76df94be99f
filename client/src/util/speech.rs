//! Browser speech bindings: recognition (speech-to-text) and synthesis.
//!
//! DESIGN
//! ======
//! The Web Speech API is vendor-prefixed in Chromium, so the recognition
//! constructor is resolved through `Reflect` against both names. One
//! recognition session is live at a time; its instance and callbacks are
//! parked in a thread-local slot until stopped. Requires a browser
//! environment — SSR paths report [`Capability::Unknown`] and no-op.

use crate::state::speech::Capability;
#[cfg(feature = "hydrate")]
use crate::util::language;

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;
#[cfg(feature = "hydrate")]
use wasm_bindgen::closure::Closure;
#[cfg(feature = "hydrate")]
use web_sys::{SpeechRecognition, SpeechRecognitionEvent};

#[cfg(feature = "hydrate")]
struct ActiveRecognition {
    recognition: SpeechRecognition,
    _on_result: Closure<dyn FnMut(SpeechRecognitionEvent)>,
    _on_error: Closure<dyn FnMut(web_sys::Event)>,
}

#[cfg(feature = "hydrate")]
thread_local! {
    static ACTIVE: RefCell<Option<ActiveRecognition>> = const { RefCell::new(None) };
}

#[cfg(feature = "hydrate")]
fn recognition_constructor() -> Option<js_sys::Function> {
    let window = web_sys::window()?;
    for name in ["SpeechRecognition", "webkitSpeechRecognition"] {
        if let Ok(ctor) = js_sys::Reflect::get(&window, &wasm_bindgen::JsValue::from_str(name)) {
            if let Some(func) = ctor.dyn_ref::<js_sys::Function>() {
                return Some(func.clone());
            }
        }
    }
    None
}

/// Probe speech-recognition support once at mount.
#[must_use]
pub fn probe_recognition() -> Capability {
    #[cfg(feature = "hydrate")]
    {
        if recognition_constructor().is_some() {
            Capability::Available
        } else {
            Capability::Unavailable
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Capability::Unknown
    }
}

/// Probe speech-synthesis support once at mount.
#[must_use]
pub fn probe_synthesis() -> Capability {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.speech_synthesis().ok())
            .map_or(Capability::Unavailable, |_| Capability::Available)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Capability::Unknown
    }
}

/// Start continuous microphone capture with interim results.
///
/// `on_transcript` receives the full transcript so far on every result
/// event; `on_error` fires on permission or device failure. Returns
/// whether capture actually started.
pub fn start_recognition(
    on_transcript: impl Fn(String) + 'static,
    on_error: impl Fn() + 'static,
) -> bool {
    #[cfg(feature = "hydrate")]
    {
        stop_recognition();
        let Some(ctor) = recognition_constructor() else {
            return false;
        };
        let Ok(instance) = js_sys::Reflect::construct(&ctor, &js_sys::Array::new()) else {
            return false;
        };
        let recognition: SpeechRecognition = instance.unchecked_into();
        recognition.set_continuous(true);
        recognition.set_interim_results(true);
        recognition.set_lang(language::RECOGNITION_LOCALE);

        let on_result =
            Closure::<dyn FnMut(SpeechRecognitionEvent)>::new(move |event: SpeechRecognitionEvent| {
                let results = event.results();
                let mut transcript = String::new();
                for index in 0..results.length() {
                    if let Some(alternative) = results.get(index).and_then(|result| result.get(0)) {
                        transcript.push_str(&alternative.transcript());
                    }
                }
                on_transcript(transcript);
            });
        recognition.set_onresult(Some(on_result.as_ref().unchecked_ref()));

        let on_err = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
            on_error();
        });
        recognition.set_onerror(Some(on_err.as_ref().unchecked_ref()));

        if recognition.start().is_err() {
            return false;
        }
        ACTIVE.with(|slot| {
            *slot.borrow_mut() = Some(ActiveRecognition {
                recognition,
                _on_result: on_result,
                _on_error: on_err,
            });
        });
        true
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (&on_transcript, &on_error);
        false
    }
}

/// Stop the live capture session, if any.
pub fn stop_recognition() {
    #[cfg(feature = "hydrate")]
    {
        ACTIVE.with(|slot| {
            if let Some(active) = slot.borrow_mut().take() {
                active.recognition.stop();
            }
        });
    }
}

/// Speak `text` aloud in the locale mapped from `lang_code`. Returns
/// whether playback was queued.
pub fn speak(text: &str, lang_code: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(synth) = web_sys::window().and_then(|w| w.speech_synthesis().ok()) else {
            return false;
        };
        let Ok(utterance) = web_sys::SpeechSynthesisUtterance::new_with_text(text) else {
            return false;
        };
        utterance.set_lang(language::speech_locale(lang_code));
        synth.speak(&utterance);
        true
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (text, lang_code);
        false
    }
}
