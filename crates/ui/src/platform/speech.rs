use dioxus::document::eval;
use services::{NarrationError, Narrator, Utterance};

/// Speaks through the webview's `window.speechSynthesis`.
///
/// `speak` cannot observe the host from inside the script; call
/// `speech_supported` once to find out whether anything will be heard.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebSpeechNarrator;

impl Narrator for WebSpeechNarrator {
    fn speak(&self, utterance: &Utterance) -> Result<(), NarrationError> {
        let script = speak_script(utterance)?;
        let _ = eval(&script);
        Ok(())
    }

    fn cancel_all(&self) {
        let _ = eval(CANCEL_SCRIPT);
    }
}

const SUPPORT_SCRIPT: &str = r#"
    return typeof window.speechSynthesis !== "undefined"
        && typeof SpeechSynthesisUtterance !== "undefined";
"#;

/// Whether the webview exposes the Web Speech API.
///
/// Reads false when the script cannot run at all.
pub async fn speech_supported() -> bool {
    eval(SUPPORT_SCRIPT).join::<bool>().await.unwrap_or(false)
}

const CANCEL_SCRIPT: &str =
    "if (window.speechSynthesis) { window.speechSynthesis.cancel(); }";

fn speak_script(utterance: &Utterance) -> Result<String, NarrationError> {
    let text = js_string(&utterance.text)?;
    let lang = js_string(&utterance.voice.lang)?;
    let rate = utterance.voice.rate;
    let pitch = utterance.voice.pitch;
    Ok(format!(
        r#"(function() {{
                const synth = window.speechSynthesis;
                if (!synth || typeof SpeechSynthesisUtterance === "undefined") {{
                    return;
                }}
                const utter = new SpeechSynthesisUtterance({text});
                utter.lang = {lang};
                utter.rate = {rate};
                utter.pitch = {pitch};
                synth.speak(utter);
            }})();"#
    ))
}

fn js_string(raw: &str) -> Result<String, NarrationError> {
    serde_json::to_string(raw).map_err(|err| NarrationError::Unavailable(err.to_string()))
}
