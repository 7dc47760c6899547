//! Delta-time driven animation counters and sheet configuration
//!
//! Entities own a `FrameCycle`: a plain frame counter advanced by elapsed
//! milliseconds. It carries no texture and has no gameplay effect, which
//! keeps entity structs testable without a rendering context.
//!
//! Sprite-sheet geometry (frame size, count, cadence) is described by
//! `SheetConfig`, loadable from `assets/config/animations.json`. A missing or
//! malformed file falls back to compiled-in defaults so the simulation never
//! depends on asset availability.

use serde::{Deserialize, Serialize};

/// A looping animation frame counter.
///
/// Advances one frame each time the accumulated elapsed time crosses the
/// frame interval, wrapping at `frame_count`. Purely cosmetic state.
#[derive(Debug, Clone)]
pub struct FrameCycle {
    frame: usize,
    frame_count: usize,
    interval_ms: f32,
    timer_ms: f32,
}

impl FrameCycle {
    pub fn new(frame_count: usize, interval_ms: f32) -> Self {
        FrameCycle {
            frame: 0,
            frame_count: frame_count.max(1),
            interval_ms: interval_ms.max(1.0),
            timer_ms: 0.0,
        }
    }

    /// Advances the counter by `dt` milliseconds.
    pub fn advance(&mut self, dt: f32) {
        self.timer_ms += dt;
        while self.timer_ms >= self.interval_ms {
            self.timer_ms -= self.interval_ms;
            self.frame = (self.frame + 1) % self.frame_count;
        }
    }

    /// Current frame index in `0..frame_count`.
    pub fn frame(&self) -> usize {
        self.frame
    }

    /// Back to frame zero, as when a session restarts.
    pub fn reset(&mut self) {
        self.frame = 0;
        self.timer_ms = 0.0;
    }
}

/// Geometry and cadence of one sprite sheet.
///
/// The renderer uses this to cut source rectangles out of a texture; the
/// entity's `FrameCycle` index is taken modulo `frame_count` so a sheet with
/// fewer frames than expected still renders.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SheetConfig {
    pub frame_width: u32,
    pub frame_height: u32,
    pub frame_count: usize,
}

impl SheetConfig {
    pub fn new(frame_width: u32, frame_height: u32, frame_count: usize) -> Self {
        SheetConfig {
            frame_width,
            frame_height,
            frame_count: frame_count.max(1),
        }
    }
}

/// Sheet configuration for every drawable entity kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationSettings {
    pub player: SheetConfig,
    pub carrot: SheetConfig,
    pub broccoli: SheetConfig,
    pub boss: SheetConfig,
    pub item: SheetConfig,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        AnimationSettings {
            player: SheetConfig::new(64, 64, 9),
            carrot: SheetConfig::new(48, 48, 5),
            broccoli: SheetConfig::new(48, 48, 5),
            boss: SheetConfig::new(96, 96, 7),
            item: SheetConfig::new(32, 32, 5),
        }
    }
}

impl AnimationSettings {
    pub fn load_from_file(path: &str) -> Result<Self, String> {
        let content = std::fs::read_to_string(path).map_err(|e| e.to_string())?;
        serde_json::from_str(&content).map_err(|e| e.to_string())
    }

    /// Loads the settings file, falling back to defaults when it is missing
    /// or malformed. The fallback is reported, not fatal.
    pub fn load_or_default(path: &str) -> Self {
        match Self::load_from_file(path) {
            Ok(settings) => settings,
            Err(e) => {
                println!("animation config '{path}' unavailable ({e}), using defaults");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_cycle_advances_on_interval() {
        let mut cycle = FrameCycle::new(4, 100.0);

        cycle.advance(99.0);
        assert_eq!(cycle.frame(), 0);
        cycle.advance(1.0);
        assert_eq!(cycle.frame(), 1);
    }

    #[test]
    fn test_frame_cycle_wraps() {
        let mut cycle = FrameCycle::new(3, 50.0);

        cycle.advance(150.0); // Three intervals in one tick
        assert_eq!(cycle.frame(), 0);
        cycle.advance(50.0);
        assert_eq!(cycle.frame(), 1);
    }

    #[test]
    fn test_frame_cycle_carries_remainder() {
        let mut cycle = FrameCycle::new(10, 100.0);

        cycle.advance(250.0);
        assert_eq!(cycle.frame(), 2);
        cycle.advance(50.0); // 50 carried + 50 new = one more frame
        assert_eq!(cycle.frame(), 3);
    }

    #[test]
    fn test_zero_frame_count_clamped() {
        let cycle = FrameCycle::new(0, 100.0);
        assert_eq!(cycle.frame(), 0); // No panic, one-frame cycle
    }

    #[test]
    fn test_settings_fall_back_to_defaults() {
        let settings = AnimationSettings::load_or_default("/nonexistent/animations.json");
        assert_eq!(settings.player.frame_count, 9);
        assert_eq!(settings.boss.frame_width, 96);
    }

    #[test]
    fn test_settings_round_trip() {
        let settings = AnimationSettings::default();
        let json = serde_json::to_string(&settings).unwrap();
        let parsed: AnimationSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.item.frame_count, settings.item.frame_count);
    }
}
