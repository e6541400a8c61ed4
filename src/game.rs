//! Game controller
//!
//! Owns the simulation state plus everything around it: pending input,
//! settings, best score, storage and audio. The platform layer feeds it key
//! names and frame steps and draws the scene it returns.

use crate::audio::{AudioManager, SoundCue};
use crate::best_score::BestScore;
use crate::consts::MAX_FRAME_STEP;
use crate::input::{KeyAction, KeyState};
use crate::persistence::KeyValueStore;
use crate::renderer::Scene;
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, TickInput, tick};

/// Game instance holding all state
pub struct Game<S: KeyValueStore> {
    pub state: GameState,
    pub input: TickInput,
    pub keys: KeyState,
    pub settings: Settings,
    pub best: BestScore,
    store: S,
    audio: AudioManager,
}

impl<S: KeyValueStore> Game<S> {
    pub fn new(store: S, seed: u64) -> Self {
        let settings = Settings::load(&store);
        let best = BestScore::load(&store);
        let audio = AudioManager::new(&settings);
        let state = GameState::start(settings.boundaries(), settings.muted, best.value, seed);
        log::info!(
            "Game initialized with seed {seed} on a {}x{} grid",
            state.boundaries.width,
            state.boundaries.height
        );

        Self {
            state,
            input: TickInput::default(),
            keys: KeyState::default(),
            settings,
            best,
            store,
            audio,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn audio(&self) -> &AudioManager {
        &self.audio
    }

    /// Apply a key press or release. Restart is returned to the caller,
    /// which owns the frame loop and must cancel it before restarting.
    pub fn handle_key(&mut self, key: &str, down: bool) -> KeyAction {
        self.keys.track(key, down);
        if !down {
            return KeyAction::None;
        }

        // First gesture unlocks audio in browsers
        self.audio.start_music();

        let action = KeyAction::from_key(key);
        match action {
            KeyAction::Move(direction) => {
                if !self.input.directions.push(direction) {
                    log::debug!("Ignored {direction}: axis already queued");
                }
            }
            KeyAction::TogglePause => self.input.pause = true,
            KeyAction::ToggleMute => self.input.mute = true,
            KeyAction::Restart | KeyAction::None => {}
        }
        action
    }

    /// Pause if running (tab hidden, window blurred)
    pub fn auto_pause(&mut self) {
        if self.settings.pause_on_blur && self.state.is_playing() && !self.state.paused {
            self.input.pause = true;
            log::info!("Auto-paused");
        }
    }

    /// Run one frame of `dt` seconds
    pub fn frame(&mut self, dt: f32) {
        let dt = dt.clamp(0.0, MAX_FRAME_STEP);
        let was_playing = self.state.is_playing();
        let was_muted = self.state.muted;

        tick(&mut self.state, &mut self.input, dt);

        if self.state.muted != was_muted {
            self.set_muted(self.state.muted);
        }

        for event in self.state.drain_events() {
            if let GameEvent::FruitEaten { .. } = event {
                self.audio.play(SoundCue::Eat);
            }
        }

        if was_playing && self.state.is_lost() {
            self.finish_run();
        }
    }

    /// Start a brand-new run, keeping the best score and mute preference
    pub fn restart(&mut self, seed: u64) {
        self.state = GameState::start(
            self.settings.boundaries(),
            self.state.muted,
            self.best.value,
            seed,
        );
        self.input = TickInput::default();
        self.keys.release_all();
        log::info!("Game restarted with seed {seed}");
    }

    pub fn scene(&self) -> Scene {
        Scene::build(&self.state, self.settings.cell_scale as f32)
    }

    fn set_muted(&mut self, muted: bool) {
        self.audio.set_muted(muted);
        self.settings.muted = muted;
        if let Err(e) = self.settings.save(&mut self.store) {
            log::warn!("Could not save settings: {e}");
        }
    }

    fn finish_run(&mut self) {
        let score = self.state.score;
        if self.best.record(score) {
            self.state.best_score = score;
            log::info!("New best score: {score}");
            if let Err(e) = self.best.save(&mut self.store) {
                log::warn!("Could not save best score: {e}");
            }
        }
    }
}
