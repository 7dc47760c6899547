//! Enemy spawn timing and difficulty policy
//!
//! The spawner is a pure policy object: it owns no entities, only a
//! randomized deadline inside a `[min, max]` window and the difficulty
//! bonuses handed to enemies created after the last level-up. The window
//! narrows with an exponential decay toward fixed floors as the player
//! levels, so late-game pressure has a bound.

use crate::enemy::{DifficultyParams, EnemyKind};
use rand::Rng;

const BASE_MIN_MS: f32 = 2000.0;
const BASE_MAX_MS: f32 = 4000.0;
/// Fastest the window is ever allowed to get
const MIN_FLOOR_MS: f32 = 500.0;
const MAX_FLOOR_MS: f32 = 1500.0;
/// Window shrink factor per level above 1
const DECAY: f32 = 0.9;

pub struct EnemySpawner {
    min_spawn_ms: f32,
    max_spawn_ms: f32,
    timer_ms: f32,
    next_spawn_ms: f32,
    params: DifficultyParams,
}

impl EnemySpawner {
    pub fn new() -> Self {
        Self::with_window(BASE_MIN_MS, BASE_MAX_MS)
    }

    /// Builds a spawner with an explicit window. With `min == max` the
    /// deadline is deterministic, which the tests rely on.
    pub fn with_window(min_spawn_ms: f32, max_spawn_ms: f32) -> Self {
        let mut spawner = EnemySpawner {
            min_spawn_ms,
            max_spawn_ms,
            timer_ms: 0.0,
            next_spawn_ms: 0.0,
            params: DifficultyParams::none(),
        };
        spawner.next_spawn_ms = spawner.draw_deadline();
        spawner
    }

    /// Accumulates elapsed time. Returns true exactly once when the current
    /// deadline is reached, then resets and draws a fresh deadline.
    pub fn update(&mut self, dt: f32) -> bool {
        self.timer_ms += dt;
        if self.timer_ms >= self.next_spawn_ms {
            self.timer_ms = 0.0;
            self.next_spawn_ms = self.draw_deadline();
            return true;
        }
        false
    }

    /// Retunes the window and the per-enemy bonuses for the given player
    /// level. Only affects enemies spawned afterwards.
    pub fn adjust_difficulty(&mut self, level: u32) {
        let scale = DECAY.powi(level.saturating_sub(1) as i32);
        self.min_spawn_ms = (BASE_MIN_MS * scale).max(MIN_FLOOR_MS);
        self.max_spawn_ms = (BASE_MAX_MS * scale).max(MAX_FLOOR_MS);
        self.params = DifficultyParams::for_level(level);
    }

    /// The difficulty bonuses enemies spawned now should be built with.
    pub fn params(&self) -> DifficultyParams {
        self.params
    }

    /// Draws a random enemy kind, uniform over the closed set.
    pub fn random_kind(&self) -> EnemyKind {
        if rand::thread_rng().gen_bool(0.5) {
            EnemyKind::Carrot
        } else {
            EnemyKind::Broccoli
        }
    }

    fn draw_deadline(&self) -> f32 {
        if self.max_spawn_ms > self.min_spawn_ms {
            rand::thread_rng().gen_range(self.min_spawn_ms..self.max_spawn_ms)
        } else {
            self.min_spawn_ms
        }
    }
}

impl Default for EnemySpawner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_exactly_once_per_deadline() {
        let mut spawner = EnemySpawner::with_window(1000.0, 1000.0);

        assert!(!spawner.update(999.0));
        assert!(spawner.update(1.0));
        // Deadline consumed; a fresh window starts from zero
        assert!(!spawner.update(999.0));
        assert!(spawner.update(1.0));
    }

    #[test]
    fn test_oversized_tick_fires_once() {
        let mut spawner = EnemySpawner::with_window(1000.0, 1000.0);

        // A delta spanning several windows still yields a single signal
        assert!(spawner.update(5000.0));
        assert!(!spawner.update(0.0));
    }

    #[test]
    fn test_deadline_stays_inside_window() {
        let spawner = EnemySpawner::new();
        assert!(spawner.next_spawn_ms >= BASE_MIN_MS);
        assert!(spawner.next_spawn_ms <= BASE_MAX_MS);
    }

    #[test]
    fn test_difficulty_narrows_window_toward_floors() {
        let mut spawner = EnemySpawner::new();

        spawner.adjust_difficulty(2);
        assert!(spawner.min_spawn_ms < BASE_MIN_MS);
        assert!(spawner.max_spawn_ms < BASE_MAX_MS);

        spawner.adjust_difficulty(50);
        assert_eq!(spawner.min_spawn_ms, MIN_FLOOR_MS);
        assert_eq!(spawner.max_spawn_ms, MAX_FLOOR_MS);
    }

    #[test]
    fn test_difficulty_updates_enemy_params() {
        let mut spawner = EnemySpawner::new();
        assert_eq!(spawner.params().hp_bonus, 0.0);

        spawner.adjust_difficulty(4);
        assert_eq!(spawner.params().hp_bonus, 15.0);
        assert_eq!(spawner.params().damage_bonus, 6.0);
    }
}
