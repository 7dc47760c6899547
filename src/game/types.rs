// Shared enums and helper structs used throughout the game

use crate::effect::EffectKind;
use sdl2::pixels::Color;

/// One simulation frame at the reference 60 fps rate, in milliseconds.
///
/// Movement constants are tuned in pixels-per-frame; updates scale them by
/// `dt / FRAME_MS` so the simulation stays frame-rate independent while the
/// tuning numbers keep their meaning.
pub const FRAME_MS: f32 = 1000.0 / 60.0;

/// Playfield dimensions, supplied by the driver (the core never queries the
/// window itself).
#[derive(Debug, Clone, Copy)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Playfield {
    pub fn new(width: f32, height: f32) -> Self {
        Playfield { width, height }
    }

    /// The y coordinate an entity of the given height stands at: the running
    /// lane sits 100 px above the bottom edge.
    pub fn ground_line(&self, entity_height: f32) -> f32 {
        self.height - entity_height - 100.0
    }
}

/// Session state machine.
///
/// `Start` waits for an explicit begin signal. `LevelUp` freezes the
/// simulation while an upgrade selection is pending. `GameOver` is terminal
/// and only leaves via restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Start,
    Playing,
    LevelUp,
    GameOver,
}

/// Read-only snapshot of the session for the display layer.
///
/// The HUD renders from this; it never mutates game state.
#[derive(Debug, Clone)]
pub struct HudSnapshot {
    pub score: u32,
    pub hp: f32,
    pub max_hp: f32,
    pub level: u32,
    pub attack: f32,
    pub active_effects: Vec<EffectKind>,
}

/// Floating text instance for pickup/level-up feedback.
///
/// Rises and fades over its lifetime; advanced by the world update, rendered
/// by `ui::floating_text`.
pub struct FloatingTextInstance {
    pub x: f32,
    pub y: f32,
    pub text: String,
    pub color: Color,
    pub age_ms: f32,
    pub lifetime_ms: f32,
}

impl FloatingTextInstance {
    pub fn new(x: f32, y: f32, text: String, color: Color) -> Self {
        FloatingTextInstance {
            x,
            y,
            text,
            color,
            age_ms: 0.0,
            lifetime_ms: 1200.0,
        }
    }

    /// Remaining-life fraction, 1.0 fresh to 0.0 expired.
    pub fn alpha(&self) -> f32 {
        (1.0 - self.age_ms / self.lifetime_ms).clamp(0.0, 1.0)
    }
}
