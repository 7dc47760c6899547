//! Timed power-up effects
//!
//! Power-up items grant the player temporary stat boosts. Each active boost
//! is tracked as an `ActiveEffect` with a remaining-time accumulator that is
//! decremented by the delta time passed into the player's update — never by
//! wall-clock polling — so effect expiry lands on a deterministic frame
//! boundary.
//!
//! Reverting a buff must restore the pre-buff value exactly even when
//! different buffs overlap. Each effect therefore stores the additive delta
//! it applied, and expiry subtracts that delta back out. Deltas compose in
//! any order, so an attack boost and a mega boost can expire in either order
//! without drift. At most one effect per kind is active at a time: picking
//! up the same kind again refreshes the timer without touching the delta.

use sdl2::pixels::Color;

/// The kinds of timed buffs an item can grant.
///
/// Instant effects (healing) never enter the active-effect list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EffectKind {
    /// Flat attack bonus
    AttackBoost,
    /// Run-speed multiplier (consumed by the background scroller)
    SpeedBoost,
    /// Doubled attack plus invulnerability
    Mega,
}

impl EffectKind {
    /// Short label for the HUD buff row.
    pub fn label(&self) -> &'static str {
        match self {
            EffectKind::AttackBoost => "ATK",
            EffectKind::SpeedBoost => "SPD",
            EffectKind::Mega => "MEGA",
        }
    }

    /// Indicator color for the HUD buff row.
    pub fn color(&self) -> Color {
        match self {
            EffectKind::AttackBoost => Color::RGB(241, 196, 15),
            EffectKind::SpeedBoost => Color::RGB(52, 152, 219),
            EffectKind::Mega => Color::RGB(155, 89, 182),
        }
    }
}

/// One live timed buff on the player.
#[derive(Debug, Clone)]
pub struct ActiveEffect {
    pub kind: EffectKind,
    /// Time left before the effect reverts, in milliseconds
    pub remaining_ms: f32,
    /// The additive amount this effect applied to its target stat;
    /// subtracted back out on expiry
    pub delta: f32,
}

impl ActiveEffect {
    pub fn new(kind: EffectKind, duration_ms: f32, delta: f32) -> Self {
        ActiveEffect {
            kind,
            remaining_ms: duration_ms,
            delta,
        }
    }

    /// Counts down by `dt` milliseconds. Returns true once expired.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.remaining_ms -= dt;
        self.remaining_ms <= 0.0
    }
}
