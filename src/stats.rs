//! Health and combat stats
//!
//! This module provides the health/stat layer shared by the player, enemies
//! and the boss:
//! - Health management with damage and healing, floored at 0 and capped at max
//! - The player's stat block (attack, level, run speed)
//! - `DamageResult` so callers can react to fatal hits without re-reading hp
//!
//! # Design Philosophy
//!
//! All stat values are f32 to support fractional multipliers (1.5x speed,
//! phase-scaled boss damage) and percentage-based health bars without
//! rounding drift.
//!
//! # Rust Learning Notes
//!
//! This module demonstrates:
//! - **NewType Pattern**: `Health` wraps two floats behind an API that
//!   preserves its invariants (0 <= current <= max)
//! - **Return structs over booleans**: `DamageResult` carries everything a
//!   caller might need from one damage application

/// Represents an entity's health points.
///
/// Current health is tracked separately from max health to enable damage,
/// capped healing and percentage-based checks.
///
/// # Example
///
/// ```rust
/// let mut health = Health::new(100.0);
/// health.take_damage(30.0);
/// assert_eq!(health.current(), 70.0);
/// assert_eq!(health.fraction(), 0.7);
/// ```
#[derive(Debug, Clone)]
pub struct Health {
    current: f32,
    max: f32,
}

impl Health {
    /// Creates a new Health instance at full health.
    pub fn new(max: f32) -> Self {
        Health { current: max, max }
    }

    pub fn current(&self) -> f32 {
        self.current
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    /// Returns health as a fraction (0.0 to 1.0). Used by health bars and
    /// the boss phase thresholds.
    pub fn fraction(&self) -> f32 {
        if self.max <= 0.0 {
            0.0
        } else {
            self.current / self.max
        }
    }

    pub fn is_alive(&self) -> bool {
        self.current > 0.0
    }

    /// Applies damage, flooring current health at 0.
    ///
    /// Returns a `DamageResult` with the damage actually dealt (never more
    /// than the health that was left) and whether the hit was fatal.
    pub fn take_damage(&mut self, amount: f32) -> DamageResult {
        let old = self.current;
        self.current = (self.current - amount).max(0.0);

        DamageResult {
            damage_dealt: old - self.current,
            is_fatal: self.current <= 0.0,
        }
    }

    /// Heals, capped at max health. Returns the amount actually restored.
    pub fn heal(&mut self, amount: f32) -> f32 {
        let old = self.current;
        self.current = (self.current + amount).min(self.max);
        self.current - old
    }

    /// Raises max health and fully restores current health.
    ///
    /// This is the HP level-up semantic: the upgrade is also a free heal.
    pub fn raise_max(&mut self, amount: f32) {
        self.max += amount;
        self.current = self.max;
    }
}

/// Result of a damage application.
#[derive(Debug, Clone)]
pub struct DamageResult {
    /// Damage actually dealt (less than requested if the target had less hp)
    #[allow(dead_code)] // Reserved for damage-number display
    pub damage_dealt: f32,
    /// Whether this hit reduced health to zero
    pub is_fatal: bool,
}

/// The player's stat block.
///
/// `run_speed` is a scalar multiplier consumed externally by the background
/// scroller — the runner's x position is fixed, the world moves instead.
#[derive(Debug, Clone)]
pub struct Stats {
    pub health: Health,
    pub attack: f32,
    pub level: u32,
    pub run_speed: f32,
}

impl Stats {
    /// Starting stats for a fresh session.
    pub fn new() -> Self {
        Stats {
            health: Health::new(100.0),
            attack: 10.0,
            level: 1,
            run_speed: 1.0,
        }
    }
}

impl Default for Stats {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_damage() {
        let mut health = Health::new(100.0);
        let result = health.take_damage(30.0);

        assert_eq!(result.damage_dealt, 30.0);
        assert_eq!(health.current(), 70.0);
        assert!(!result.is_fatal);
    }

    #[test]
    fn test_health_fatal_damage_floors_at_zero() {
        let mut health = Health::new(100.0);
        let result = health.take_damage(150.0);

        assert_eq!(result.damage_dealt, 100.0);
        assert_eq!(health.current(), 0.0);
        assert!(result.is_fatal);
    }

    #[test]
    fn test_health_overheal_caps() {
        let mut health = Health::new(100.0);
        health.take_damage(50.0);

        let healed = health.heal(100.0);
        assert_eq!(healed, 50.0); // Only what was missing
        assert_eq!(health.current(), 100.0);
    }

    #[test]
    fn test_health_fraction() {
        let mut health = Health::new(100.0);
        health.take_damage(25.0);

        assert_eq!(health.fraction(), 0.75);
    }

    #[test]
    fn test_raise_max_fully_heals() {
        let mut health = Health::new(100.0);
        health.take_damage(80.0);
        health.raise_max(20.0);

        assert_eq!(health.max(), 120.0);
        assert_eq!(health.current(), 120.0);
    }

    #[test]
    fn test_starting_stats() {
        let stats = Stats::new();
        assert_eq!(stats.health.max(), 100.0);
        assert_eq!(stats.attack, 10.0);
        assert_eq!(stats.level, 1);
        assert_eq!(stats.run_speed, 1.0);
    }
}
