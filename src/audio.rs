//! Audio gateway
//!
//! The simulation only asks for a mute toggle and reads the muted flag back.
//! Sound cues are described as simple tones; a backend plays them if one is
//! attached, otherwise every cue is silently dropped.

use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    Jump,
    DoubleJump,
    Ability,
    Coin,
    SpeedUp,
    GameOver,
    HighScore,
}

/// Oscillator waveform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Square,
    Triangle,
}

/// A single synthesized tone
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub start_hz: f32,
    pub end_hz: f32,
    pub seconds: f32,
    pub waveform: Waveform,
    pub gain: f32,
}

impl SoundEffect {
    /// Cue for a game event, if the event has one
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::Jumped => Some(SoundEffect::Jump),
            GameEvent::DoubleJumped => Some(SoundEffect::DoubleJump),
            GameEvent::AbilityActivated { .. } => Some(SoundEffect::Ability),
            GameEvent::CoinCollected { .. } => Some(SoundEffect::Coin),
            GameEvent::SpeedIncreased { .. } => Some(SoundEffect::SpeedUp),
            GameEvent::GameOver { .. } => Some(SoundEffect::GameOver),
            GameEvent::NewBest { .. } => Some(SoundEffect::HighScore),
            _ => None,
        }
    }

    pub fn tone(self) -> Tone {
        let (start_hz, end_hz, seconds, waveform, gain) = match self {
            SoundEffect::Jump => (220.0, 440.0, 0.12, Waveform::Square, 0.3),
            SoundEffect::DoubleJump => (440.0, 880.0, 0.12, Waveform::Square, 0.3),
            SoundEffect::Ability => (330.0, 660.0, 0.3, Waveform::Triangle, 0.5),
            SoundEffect::Coin => (990.0, 1320.0, 0.08, Waveform::Sine, 0.4),
            SoundEffect::SpeedUp => (400.0, 600.0, 0.2, Waveform::Triangle, 0.3),
            SoundEffect::GameOver => (300.0, 80.0, 0.8, Waveform::Sine, 0.6),
            SoundEffect::HighScore => (523.0, 1046.0, 0.6, Waveform::Triangle, 0.5),
        };
        Tone {
            start_hz,
            end_hz,
            seconds,
            waveform,
            gain,
        }
    }
}

/// Something that can actually emit a tone
pub trait AudioBackend {
    fn play_tone(&mut self, tone: &Tone, volume: f32);
    fn set_music_paused(&mut self, paused: bool);
}

/// The audio surface the run controller talks to
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect);
    /// Flip the mute flag and return the new value
    fn toggle_mute(&mut self) -> bool;
    fn is_muted(&self) -> bool;
}

/// Audio manager for the game
pub struct AudioManager {
    backend: Option<Box<dyn AudioBackend>>,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
    /// Cues handed to the backend since startup
    played: u64,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::silent(false)
    }
}

impl AudioManager {
    /// Manager without a backend: cues are dropped, the mute flag still works
    pub fn silent(muted: bool) -> Self {
        Self {
            backend: None,
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted,
            played: 0,
        }
    }

    pub fn with_backend(backend: Box<dyn AudioBackend>, muted: bool) -> Self {
        let mut manager = Self::silent(muted);
        manager.backend = Some(backend);
        if let Some(backend) = manager.backend.as_mut() {
            backend.set_music_paused(muted);
        }
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

    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

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
        let Some(backend) = self.backend.as_mut() else {
            log::trace!("No audio backend, dropping {:?}", effect);
            return;
        };
        backend.play_tone(&effect.tone(), vol);
        self.played += 1;
    }

    fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        if let Some(backend) = self.backend.as_mut() {
            backend.set_music_paused(self.muted);
        }
        log::info!("Audio {}", if self.muted { "muted" } else { "unmuted" });
        self.muted
    }

    fn is_muted(&self) -> bool {
        self.muted
    }
}
