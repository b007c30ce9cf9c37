use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use services::{AudioCue, AudioCueEvent, AudioError};

/// Audio cue played through the webview's Web Audio API.
///
/// `play` only queues the event; the view that dispatched the intent drains
/// the queue and evaluates [`cue_script`] for each event, since scripts can
/// only be evaluated from inside the Dioxus runtime.
#[derive(Clone, Default)]
pub struct WebAudioCue {
    pending: Arc<Mutex<VecDeque<AudioCueEvent>>>,
}

impl WebAudioCue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Take every queued event, oldest first.
    #[must_use]
    pub fn drain(&self) -> Vec<AudioCueEvent> {
        match self.pending.lock() {
            Ok(mut queue) => queue.drain(..).collect(),
            Err(_) => Vec::new(),
        }
    }
}

impl AudioCue for WebAudioCue {
    fn play(&self, event: AudioCueEvent) -> Result<(), AudioError> {
        let mut queue = self.pending.lock().map_err(|_| AudioError::Unavailable)?;
        queue.push_back(event);
        Ok(())
    }
}

const C5: f32 = 523.25;
const E5: f32 = 659.25;
const G5: f32 = 783.99;

/// An eighth note at 120 bpm.
const EIGHTH_SECS: f32 = 0.25;
const QUARTER_SECS: f32 = 0.5;

fn notes_for(event: AudioCueEvent) -> (&'static [f32], f32) {
    match event {
        AudioCueEvent::Correct => (&[C5], EIGHTH_SECS),
        AudioCueEvent::Win => (&[C5, E5, G5], QUARTER_SECS),
    }
}

/// Script that plays `event` as sine tones with a short attack/decay envelope.
#[must_use]
pub fn cue_script(event: AudioCueEvent) -> String {
    let (notes, hold) = notes_for(event);
    let freqs = notes
        .iter()
        .map(|hz| format!("{hz:.2}"))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        r#"(function() {{
                    const Ctx = window.AudioContext || window.webkitAudioContext;
                    if (!Ctx) return;
                    const ctx = window.__bursonAudio || (window.__bursonAudio = new Ctx());
                    if (ctx.state === "suspended") ctx.resume();
                    const start = ctx.currentTime;
                    const hold = {hold};
                    const peak = 0.3 / {count};
                    [{freqs}].forEach((freq) => {{
                        const osc = ctx.createOscillator();
                        const gain = ctx.createGain();
                        osc.type = "sine";
                        osc.frequency.value = freq;
                        gain.gain.setValueAtTime(0, start);
                        gain.gain.linearRampToValueAtTime(peak, start + 0.05);
                        gain.gain.linearRampToValueAtTime(peak * 0.1, start + 0.25);
                        gain.gain.setValueAtTime(peak * 0.1, start + hold);
                        gain.gain.linearRampToValueAtTime(0, start + hold + 0.5);
                        osc.connect(gain);
                        gain.connect(ctx.destination);
                        osc.start(start);
                        osc.stop(start + hold + 0.55);
                    }});
                }})();"#,
        hold = hold,
        count = notes.len(),
        freqs = freqs,
    )
}
