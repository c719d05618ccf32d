//! Sound effect triggers
//!
//! The round fires effects and forgets them. [`AudioManager`] is the native
//! sink: it applies volume and mute, then hands the trigger to the log since
//! there is no output device in headless runs.

use serde::{Deserialize, Serialize};

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoundEffect {
    /// Ball hits a peg
    PegHit,
    /// Ball launched
    Launch,
    /// Ball dropped through the floor
    BallReturned,
    /// Win threshold reached
    Win,
    /// Out of balls
    Lose,
}

/// Anything that can play a sound effect
///
/// Playback failures are the sink's problem; callers never hear about them.
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect);
}

/// Volume preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }
}

/// Audio manager for the game
#[derive(Debug, Clone)]
pub struct AudioManager {
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
    played: u64,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new(&AudioSettings::default())
    }
}

impl AudioManager {
    pub fn new(settings: &AudioSettings) -> Self {
        let mut manager = Self {
            master_volume: 0.0,
            sfx_volume: 0.0,
            muted: settings.muted,
            played: 0,
        };
        manager.set_master_volume(settings.master_volume);
        manager.set_sfx_volume(settings.sfx_volume);
        manager
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Number of effects actually played (audible) so far
    pub fn played(&self) -> u64 {
        self.played
    }
}

impl AudioSink for AudioManager {
    fn play(&mut self, effect: SoundEffect) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        self.played += 1;
        log::debug!("sfx {:?} at volume {:.2}", effect, vol);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volume_is_clamped() {
        let mut audio = AudioManager::default();
        audio.set_master_volume(3.0);
        audio.set_sfx_volume(-1.0);
        assert_eq!(audio.effective_volume(), 0.0);
        audio.set_sfx_volume(0.5);
        assert_eq!(audio.effective_volume(), 0.5);
    }

    #[test]
    fn test_muted_drops_triggers() {
        let mut audio = AudioManager::new(&AudioSettings {
            muted: true,
            ..Default::default()
        });
        audio.play(SoundEffect::PegHit);
        assert_eq!(audio.played(), 0);

        audio.set_muted(false);
        audio.play(SoundEffect::PegHit);
        audio.play(SoundEffect::Win);
        assert_eq!(audio.played(), 2);
    }

    #[test]
    fn test_settings_from_partial_json() {
        let settings: AudioSettings = serde_json::from_str(r#"{ "muted": true }"#).unwrap();
        assert!(settings.muted);
        assert_eq!(settings.master_volume, 0.8);
    }
}
