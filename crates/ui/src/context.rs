use std::sync::Arc;

use services::{AudioCue, GameServices, SavedGameService, SessionController, SilentCue};

use crate::audio::WebAudioCue;

pub trait UiApp: Send + Sync {
    fn game_services(&self) -> GameServices;
    fn audio_enabled(&self) -> bool;
}

#[derive(Clone)]
pub struct AppContext {
    services: GameServices,
    audio: WebAudioCue,
    audio_enabled: bool,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            services: app.game_services(),
            audio: WebAudioCue::new(),
            audio_enabled: app.audio_enabled(),
        }
    }

    #[must_use]
    pub fn saved_games(&self) -> Arc<SavedGameService> {
        self.services.saved_games()
    }

    /// Queue the views drain after each intent. Stays empty when muted.
    #[must_use]
    pub fn audio(&self) -> &WebAudioCue {
        &self.audio
    }

    #[must_use]
    pub fn new_session(&self) -> SessionController {
        let cue: Arc<dyn AudioCue> = if self.audio_enabled {
            Arc::new(self.audio.clone())
        } else {
            Arc::new(SilentCue)
        };
        self.services.new_session(cue)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
