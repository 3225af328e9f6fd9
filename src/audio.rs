//! Audio system using Web Audio API
//!
//! Three procedurally generated square-wave beeps - no sound files needed.

use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

/// Feedback tones
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Acknowledgement (ledger reset)
    Neutral,
    /// Winning spin
    Win,
    /// Losing spin or rejected bet
    Lose,
}

impl Tone {
    fn frequency(&self) -> f32 {
        match self {
            Tone::Neutral => 880.0,
            Tone::Win => 1320.0,
            Tone::Lose => 220.0,
        }
    }
}

/// Audio manager for the game
pub struct AudioManager {
    ctx: Option<AudioContext>,
    volume: f32,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioManager {
    pub fn new() -> Self {
        // May fail outside a secure context
        let ctx = AudioContext::new().ok();
        if ctx.is_none() {
            log::warn!("Failed to create AudioContext - audio disabled");
        }
        Self { ctx, volume: 0.2 }
    }

    /// Set output volume (0.0 - 1.0); the beep peaks at volume * 0.2.
    pub fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0) * 0.2;
    }

    /// Play one feedback beep: a short square wave with a fast
    /// attack/decay envelope.
    pub fn play(&self, tone: Tone) {
        if self.volume <= 0.0 {
            return;
        }
        let Some(ctx) = &self.ctx else { return };

        // Browsers suspend the context until a user gesture
        if ctx.state() == web_sys::AudioContextState::Suspended {
            let _ = ctx.resume();
        }

        let Some((osc, gain)) = self.create_osc(ctx, tone.frequency()) else {
            return;
        };
        let t = ctx.current_time();

        gain.gain().set_value_at_time(0.0001, t).ok();
        gain.gain()
            .exponential_ramp_to_value_at_time(self.volume, t + 0.01)
            .ok();
        gain.gain()
            .exponential_ramp_to_value_at_time(0.001, t + 0.12)
            .ok();

        osc.start().ok();
        osc.stop_with_when(t + 0.14).ok();
    }

    fn create_osc(&self, ctx: &AudioContext, freq: f32) -> Option<(OscillatorNode, GainNode)> {
        let osc = ctx.create_oscillator().ok()?;
        let gain = ctx.create_gain().ok()?;

        osc.set_type(OscillatorType::Square);
        osc.frequency().set_value(freq);
        osc.connect_with_audio_node(&gain).ok()?;
        gain.connect_with_audio_node(&ctx.destination()).ok()?;

        Some((osc, gain))
    }
}
