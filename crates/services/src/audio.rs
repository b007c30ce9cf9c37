use crate::error::AudioError;

/// Events the core announces to the audio collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCueEvent {
    Correct,
    Win,
}

/// Fire-and-forget sound output.
///
/// Implementations report failures through `AudioError`; callers never let a
/// failure reach a state transition.
pub trait AudioCue: Send + Sync {
    /// # Errors
    ///
    /// Returns `AudioError` if the cue could not be played.
    fn play(&self, event: AudioCueEvent) -> Result<(), AudioError>;
}

/// Audio cue that plays nothing (`--mute`, tests).
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentCue;

impl AudioCue for SilentCue {
    fn play(&self, _event: AudioCueEvent) -> Result<(), AudioError> {
        Ok(())
    }
}

/// Plays `event` and swallows any failure after logging it.
pub(crate) fn play_isolated(cue: &dyn AudioCue, event: AudioCueEvent) {
    if let Err(err) = cue.play(event) {
        tracing::warn!(?event, error = %err, "audio cue failed");
    }
}
