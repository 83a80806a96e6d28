//! Audio system
//!
//! Procedurally generated sound effects - no external files needed!
//! Tones are synthesized once at startup and replayed through rodio.

use rodio::{buffer::SamplesBuffer, OutputStream, OutputStreamHandle, Sink};

use crate::sim::GameEvent;

const SAMPLE_RATE: u32 = 44_100;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Ball hits paddle
    PaddleHit,
    /// Ball hits wall or ceiling
    WallHit,
    /// Brick destroyed
    BrickHit,
}

/// Audio manager for the game
pub struct AudioManager {
    /// None when no output device is available; the game runs silent.
    output: Option<(OutputStream, OutputStreamHandle)>,
    paddle_tone: Vec<f32>,
    wall_tone: Vec<f32>,
    brick_tone: Vec<f32>,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioManager {
    pub fn new() -> Self {
        let output = match OutputStream::try_default() {
            Ok(pair) => Some(pair),
            Err(err) => {
                log::warn!("Failed to open audio output - audio disabled: {err}");
                None
            }
        };
        Self {
            output,
            // Paddle hit - short noise thwack
            paddle_tone: noise_burst(0.05, 0.4),
            // Wall hit - brief ping
            wall_tone: sine_tone(440.0, 0.025, 0.35),
            // Brick break - higher ping
            brick_tone: sine_tone(880.0, 0.05, 0.4),
        }
    }

    /// Map a sim event to the effect it should trigger, if any
    pub fn cue_for(event: GameEvent) -> Option<SoundEffect> {
        match event {
            GameEvent::PaddleBounce => Some(SoundEffect::PaddleHit),
            GameEvent::WallBounce => Some(SoundEffect::WallHit),
            GameEvent::BrickBroken => Some(SoundEffect::BrickHit),
            GameEvent::BallLost | GameEvent::GameOver => None,
        }
    }

    /// Play a sound effect
    pub fn play(&self, effect: SoundEffect) {
        let Some((_, handle)) = &self.output else {
            return;
        };
        let samples = match effect {
            SoundEffect::PaddleHit => &self.paddle_tone,
            SoundEffect::WallHit => &self.wall_tone,
            SoundEffect::BrickHit => &self.brick_tone,
        };
        if let Ok(sink) = Sink::try_new(handle) {
            sink.append(SamplesBuffer::new(1, SAMPLE_RATE, samples.clone()));
            sink.detach();
        }
    }
}

/// Sine wave with a linear fade-out so it doesn't click
fn sine_tone(freq: f32, duration: f32, gain: f32) -> Vec<f32> {
    let total = (SAMPLE_RATE as f32 * duration) as usize;
    (0..total)
        .map(|i| {
            let t = i as f32 / SAMPLE_RATE as f32;
            let fade = 1.0 - i as f32 / total as f32;
            (t * freq * std::f32::consts::TAU).sin() * gain * fade
        })
        .collect()
}

/// Short white-noise burst for the paddle thwack
fn noise_burst(duration: f32, gain: f32) -> Vec<f32> {
    let total = (SAMPLE_RATE as f32 * duration) as usize;
    let mut lcg: u32 = 0x2545_f491;
    (0..total)
        .map(|i| {
            lcg = lcg.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            let noise = (lcg >> 8) as f32 / (1u32 << 24) as f32 * 2.0 - 1.0;
            let fade = 1.0 - i as f32 / total as f32;
            noise * gain * fade
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone_length_matches_duration() {
        let samples = sine_tone(440.0, 0.5, 0.5);
        assert_eq!(samples.len(), 22_050);
    }

    #[test]
    fn test_tone_stays_within_gain() {
        for s in sine_tone(220.0, 0.1, 0.5) {
            assert!(s.abs() <= 0.5);
        }
        for s in noise_burst(0.1, 0.4) {
            assert!(s.abs() <= 0.4);
        }
    }

    #[test]
    fn test_tone_fades_out() {
        let samples = sine_tone(440.0, 0.1, 0.5);
        let tail_peak = samples[samples.len() - 50..]
            .iter()
            .fold(0.0f32, |m, s| m.max(s.abs()));
        assert!(tail_peak < 0.02);
    }

    #[test]
    fn test_event_cues() {
        assert_eq!(
            AudioManager::cue_for(GameEvent::PaddleBounce),
            Some(SoundEffect::PaddleHit)
        );
        assert_eq!(
            AudioManager::cue_for(GameEvent::WallBounce),
            Some(SoundEffect::WallHit)
        );
        assert_eq!(
            AudioManager::cue_for(GameEvent::BrickBroken),
            Some(SoundEffect::BrickHit)
        );
        assert_eq!(AudioManager::cue_for(GameEvent::BallLost), None);
        assert_eq!(AudioManager::cue_for(GameEvent::GameOver), None);
    }
}
