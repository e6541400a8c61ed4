//! Audio cues
//!
//! Two cues: a looping background song and an eating effect. Playback goes
//! through `HtmlAudioElement` on web; native builds only log.
//! Playback failures are logged and never reach the game loop.

use crate::settings::Settings;

/// Sound cue types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    /// Background song, loops forever
    Background,
    /// Snake ate a fruit, restarts from the beginning on each trigger
    Eat,
}

impl SoundCue {
    pub fn src(&self) -> &'static str {
        match self {
            SoundCue::Background => "./audio/background.mp3",
            SoundCue::Eat => "./audio/eating.mp3",
        }
    }
}

/// Audio manager for the game
pub struct AudioManager {
    #[cfg(target_arch = "wasm32")]
    clips: Option<web::Clips>,
    muted: bool,
    sfx_volume: f32,
    music_volume: f32,
    music_requested: bool,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new(&Settings::default())
    }
}

impl AudioManager {
    pub fn new(settings: &Settings) -> Self {
        Self {
            #[cfg(target_arch = "wasm32")]
            clips: web::Clips::load(),
            muted: settings.muted,
            sfx_volume: (settings.master_volume * settings.sfx_volume).clamp(0.0, 1.0),
            music_volume: (settings.master_volume * settings.music_volume).clamp(0.0, 1.0),
            music_requested: false,
        }
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Whether the background song should currently be audible
    pub fn music_playing(&self) -> bool {
        self.music_requested && !self.muted
    }

    /// Mute/unmute all audio. The background song pauses while muted.
    pub fn set_muted(&mut self, muted: bool) {
        if self.muted == muted {
            return;
        }
        self.muted = muted;
        if self.music_requested {
            if muted {
                self.backend_pause_music();
            } else {
                self.backend_play(SoundCue::Background);
            }
        }
    }

    /// Start the background loop (browsers need a user gesture first)
    pub fn start_music(&mut self) {
        if self.music_requested {
            return;
        }
        self.music_requested = true;
        self.play(SoundCue::Background);
    }

    pub fn stop_music(&mut self) {
        self.music_requested = false;
        self.backend_pause_music();
    }

    /// Play a cue unless muted. Returns whether playback was requested.
    pub fn play(&self, cue: SoundCue) -> bool {
        let volume = match cue {
            SoundCue::Background => self.music_volume,
            SoundCue::Eat => self.sfx_volume,
        };
        if self.muted || volume <= 0.0 {
            return false;
        }
        self.backend_play(cue);
        true
    }

    #[cfg(target_arch = "wasm32")]
    fn backend_play(&self, cue: SoundCue) {
        if let Some(clips) = &self.clips {
            let volume = match cue {
                SoundCue::Background => self.music_volume,
                SoundCue::Eat => self.sfx_volume,
            };
            clips.play(cue, volume);
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn backend_pause_music(&self) {
        if let Some(clips) = &self.clips {
            clips.pause_background();
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn backend_play(&self, cue: SoundCue) {
        log::debug!("Play {:?} ({})", cue, cue.src());
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn backend_pause_music(&self) {
        log::debug!("Pause background music");
    }
}

#[cfg(target_arch = "wasm32")]
mod web {
    use web_sys::HtmlAudioElement;

    use super::SoundCue;

    pub struct Clips {
        background: HtmlAudioElement,
        eat: HtmlAudioElement,
    }

    impl Clips {
        pub fn load() -> Option<Self> {
            let background = HtmlAudioElement::new_with_src(SoundCue::Background.src()).ok();
            let eat = HtmlAudioElement::new_with_src(SoundCue::Eat.src()).ok();
            match (background, eat) {
                (Some(background), Some(eat)) => {
                    background.set_loop(true);
                    Some(Self { background, eat })
                }
                _ => {
                    log::warn!("Failed to create audio elements - audio disabled");
                    None
                }
            }
        }

        pub fn play(&self, cue: SoundCue, volume: f32) {
            let clip = match cue {
                SoundCue::Background => &self.background,
                SoundCue::Eat => {
                    // Rewind so rapid eats each get the full effect
                    self.eat.set_current_time(0.0);
                    &self.eat
                }
            };
            clip.set_volume(volume as f64);
            if let Err(e) = clip.play() {
                log::warn!("Could not play {cue:?}: {e:?}");
            }
        }

        pub fn pause_background(&self) {
            if let Err(e) = self.background.pause() {
                log::warn!("Could not pause music: {e:?}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_muted_suppresses_cues() {
        let settings = Settings {
            muted: true,
            ..Default::default()
        };
        let audio = AudioManager::new(&settings);
        assert!(!audio.play(SoundCue::Eat));
        assert!(!audio.play(SoundCue::Background));
    }

    #[test]
    fn test_unmuted_plays_cues() {
        let audio = AudioManager::default();
        assert!(audio.play(SoundCue::Eat));
    }

    #[test]
    fn test_zero_volume_suppresses_effect() {
        let settings = Settings {
            sfx_volume: 0.0,
            ..Default::default()
        };
        let audio = AudioManager::new(&settings);
        assert!(!audio.play(SoundCue::Eat));
        assert!(audio.play(SoundCue::Background));
    }

    #[test]
    fn test_music_follows_mute() {
        let mut audio = AudioManager::default();
        assert!(!audio.music_playing());
        audio.start_music();
        assert!(audio.music_playing());
        audio.set_muted(true);
        assert!(!audio.music_playing());
        audio.set_muted(false);
        assert!(audio.music_playing());
        audio.stop_music();
        assert!(!audio.music_playing());
    }
}
