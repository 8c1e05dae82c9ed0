//! Sound cues derived from simulation events
//!
//! The simulation never plays audio; the host maps events to cues and plays
//! its own assets.

use serde::Serialize;

use crate::settings::Settings;
use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SoundEffect {
    /// Jump impulse
    Flap,
    /// Actor died
    Death,
    /// New best score
    NewBest,
}

impl SoundEffect {
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::Jumped => Some(SoundEffect::Flap),
            GameEvent::Died { .. } => Some(SoundEffect::Death),
            GameEvent::BestScoreAchieved { .. } => Some(SoundEffect::NewBest),
            _ => None,
        }
    }

    /// Base volume before settings are applied
    pub fn default_volume(&self) -> f32 {
        match self {
            SoundEffect::Flap => 0.5,
            SoundEffect::Death => 0.7,
            SoundEffect::NewBest => 0.6,
        }
    }

    /// Asset name the host should play
    pub fn name(&self) -> &'static str {
        match self {
            SoundEffect::Flap => "fly",
            SoundEffect::Death => "death",
            SoundEffect::NewBest => "check",
        }
    }
}

/// A cue ready to play
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SoundCue {
    pub effect: SoundEffect,
    pub volume: f32,
}

/// Translate events into cues, dropping everything when muted
pub fn cues_for(events: &[GameEvent], settings: &Settings) -> Vec<SoundCue> {
    let scale = settings.effective_volume();
    if scale <= 0.0 {
        return Vec::new();
    }
    events
        .iter()
        .filter_map(SoundEffect::for_event)
        .map(|effect| SoundCue {
            effect,
            volume: effect.default_volume() * scale,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_mapping() {
        assert_eq!(SoundEffect::for_event(&GameEvent::Jumped), Some(SoundEffect::Flap));
        assert_eq!(
            SoundEffect::for_event(&GameEvent::Died { score: 3 }),
            Some(SoundEffect::Death)
        );
        assert_eq!(SoundEffect::for_event(&GameEvent::Paused), None);
    }

    #[test]
    fn test_cues_scaled_by_settings() {
        let events = [
            GameEvent::Started,
            GameEvent::Jumped,
            GameEvent::BestScoreAchieved { best: 2 },
        ];
        let settings = Settings {
            sfx_volume: 0.5,
            ..Settings::default()
        };
        let cues = cues_for(&events, &settings);
        assert_eq!(cues.len(), 2);
        assert_eq!(cues[0].effect, SoundEffect::Flap);
        assert!((cues[0].volume - 0.25).abs() < 1e-6);
        assert!((cues[1].volume - 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_muted_produces_nothing() {
        let settings = Settings {
            muted: true,
            ..Settings::default()
        };
        assert!(cues_for(&[GameEvent::Jumped], &settings).is_empty());
    }
}
