use crate::animation::FrameCycle;
use crate::animation::SheetConfig;
use crate::collision::{Collidable, CollisionLayer, Hitbox};
use crate::effect::{ActiveEffect, EffectKind};
use crate::game::{FRAME_MS, Playfield};
use crate::sprite;
use crate::stats::Stats;
use sdl2::pixels::Color;
use sdl2::render::{Canvas, Texture};
use sdl2::video::Window;

const PLAYER_WIDTH: f32 = 64.0;
const PLAYER_HEIGHT: f32 = 64.0;
/// Fixed x offset of the running lane
const LANE_X: f32 = 100.0;
/// Gravity in px per frame^2 at the reference frame rate
const GRAVITY: f32 = 0.5;
/// Jump launch impulse in px per frame (negative = upward)
const JUMP_IMPULSE: f32 = -12.0;
/// Post-hit invulnerability window
const INVULNERABILITY_MS: f32 = 1000.0;

/// The two upgrade choices offered by the level-up menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpgradeStat {
    /// +20 max hp with a full heal
    Hp,
    /// +5 attack
    Attack,
}

/// The runner character.
///
/// The x position is fixed at the lane offset; only y varies, driven by jump
/// physics against the ground line. Horizontal motion is an illusion the
/// background scroller produces from `stats.run_speed`.
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub grounded: bool,
    pub stats: Stats,
    velocity_y: f32,
    ground_level: f32,
    invulnerable_ms: f32,
    effects: Vec<ActiveEffect>,
    pub anim: FrameCycle,
}

impl Player {
    pub fn new(playfield: Playfield) -> Self {
        let ground_level = playfield.ground_line(PLAYER_HEIGHT);
        Player {
            x: LANE_X,
            y: ground_level,
            width: PLAYER_WIDTH,
            height: PLAYER_HEIGHT,
            grounded: true,
            stats: Stats::new(),
            velocity_y: 0.0,
            ground_level,
            invulnerable_ms: 0.0,
            effects: Vec::new(),
            anim: FrameCycle::new(9, FRAME_MS),
        }
    }

    /// Launches a jump. Only valid while grounded; airborne calls are ignored.
    pub fn jump(&mut self) {
        if self.grounded {
            self.velocity_y = JUMP_IMPULSE;
            self.grounded = false;
        }
    }

    /// Advances physics, the animation counter, the invulnerability window
    /// and timed-effect expiry by `dt` milliseconds.
    pub fn update(&mut self, dt: f32) {
        let step = dt / FRAME_MS;

        if !self.grounded {
            self.velocity_y += GRAVITY * step;
            self.y += self.velocity_y * step;

            // Ground clamp: landing zeroes vertical velocity. Only falling
            // players land, so a zero-dt tick right after a jump cannot
            // re-ground the launch before it moves
            if self.velocity_y >= 0.0 && self.y >= self.ground_level {
                self.y = self.ground_level;
                self.velocity_y = 0.0;
                self.grounded = true;
            }
        }

        self.anim.advance(dt);
        self.invulnerable_ms = (self.invulnerable_ms - dt).max(0.0);
        self.expire_effects(dt);
    }

    /// Applies incoming damage unless an invulnerability window (post-hit or
    /// mega buff) is active. Returns whether the damage was applied.
    pub fn take_damage(&mut self, amount: f32) -> bool {
        if self.is_invulnerable() {
            return false;
        }

        self.stats.health.take_damage(amount);
        self.invulnerable_ms = INVULNERABILITY_MS;
        true
    }

    pub fn heal(&mut self, amount: f32) -> f32 {
        self.stats.health.heal(amount)
    }

    pub fn is_invulnerable(&self) -> bool {
        self.invulnerable_ms > 0.0 || self.has_effect(EffectKind::Mega)
    }

    /// Applies the chosen level-up upgrade and increments the level.
    pub fn level_up(&mut self, stat: UpgradeStat) {
        self.stats.level += 1;
        match stat {
            UpgradeStat::Hp => self.stats.health.raise_max(20.0),
            UpgradeStat::Attack => self.stats.attack += 5.0,
        }
    }

    /// Installs a flat attack bonus for `duration_ms`. Picking the boost up
    /// again refreshes the timer without stacking the bonus.
    pub fn apply_attack_boost(&mut self, amount: f32, duration_ms: f32) {
        if self.refresh_effect(EffectKind::AttackBoost, duration_ms) {
            return;
        }
        self.stats.attack += amount;
        self.effects
            .push(ActiveEffect::new(EffectKind::AttackBoost, duration_ms, amount));
    }

    /// Installs a run-speed multiplier for `duration_ms`.
    pub fn apply_speed_boost(&mut self, factor: f32, duration_ms: f32) {
        if self.refresh_effect(EffectKind::SpeedBoost, duration_ms) {
            return;
        }
        let delta = self.stats.run_speed * (factor - 1.0);
        self.stats.run_speed += delta;
        self.effects
            .push(ActiveEffect::new(EffectKind::SpeedBoost, duration_ms, delta));
    }

    /// Installs the mega buff: attack multiplied by `factor` plus
    /// invulnerability, for `duration_ms`.
    pub fn apply_mega(&mut self, factor: f32, duration_ms: f32) {
        if self.refresh_effect(EffectKind::Mega, duration_ms) {
            return;
        }
        let delta = self.stats.attack * (factor - 1.0);
        self.stats.attack += delta;
        self.effects
            .push(ActiveEffect::new(EffectKind::Mega, duration_ms, delta));
    }

    pub fn has_effect(&self, kind: EffectKind) -> bool {
        self.effects.iter().any(|e| e.kind == kind)
    }

    pub fn active_effect_kinds(&self) -> Vec<EffectKind> {
        self.effects.iter().map(|e| e.kind).collect()
    }

    /// Resets the player to initial stats for a new session. The instance is
    /// reused, never destroyed.
    pub fn reset(&mut self) {
        self.stats = Stats::new();
        self.y = self.ground_level;
        self.velocity_y = 0.0;
        self.grounded = true;
        self.invulnerable_ms = 0.0;
        self.effects.clear();
        self.anim.reset();
    }

    /// If an effect of `kind` is live, refreshes its countdown and reports
    /// true. The stored delta is untouched so expiry can't double-revert.
    fn refresh_effect(&mut self, kind: EffectKind, duration_ms: f32) -> bool {
        if let Some(effect) = self.effects.iter_mut().find(|e| e.kind == kind) {
            effect.remaining_ms = duration_ms;
            return true;
        }
        false
    }

    /// Counts down effect timers and reverts any that expired, subtracting
    /// each effect's stored delta from the stat it boosted.
    fn expire_effects(&mut self, dt: f32) {
        let mut expired: Vec<(EffectKind, f32)> = Vec::new();
        self.effects.retain_mut(|effect| {
            if effect.tick(dt) {
                expired.push((effect.kind, effect.delta));
                false
            } else {
                true
            }
        });

        for (kind, delta) in expired {
            match kind {
                EffectKind::AttackBoost | EffectKind::Mega => self.stats.attack -= delta,
                EffectKind::SpeedBoost => self.stats.run_speed -= delta,
            }
        }
    }

    pub fn render(
        &self,
        canvas: &mut Canvas<Window>,
        texture: Option<&mut Texture>,
        sheet: &SheetConfig,
    ) -> Result<(), String> {
        sprite::draw_frame(
            canvas,
            texture,
            sheet,
            self.anim.frame(),
            self.x,
            self.y,
            self.width,
            self.height,
            Color::RGB(231, 76, 60),
            255,
        )
    }
}

impl Collidable for Player {
    fn hitbox(&self) -> Hitbox {
        // Inset from the sprite so near misses feel fair
        Hitbox::new(
            self.x + 10.0,
            self.y + 5.0,
            self.width - 20.0,
            self.height - 10.0,
        )
    }

    fn layer(&self) -> CollisionLayer {
        CollisionLayer::Player
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_player() -> Player {
        Player::new(Playfield::new(800.0, 600.0))
    }

    #[test]
    fn test_jump_only_when_grounded() {
        let mut player = test_player();

        player.jump();
        assert!(!player.grounded);
        let vy_after_first = player.velocity_y;

        player.update(16.0);
        player.jump(); // Airborne: ignored
        assert!(player.velocity_y > vy_after_first); // Gravity kept pulling
    }

    #[test]
    fn test_zero_dt_update_keeps_fresh_jump_airborne() {
        let mut player = test_player();

        player.jump();
        player.update(0.0); // dt = 0 is a legal tick
        assert!(!player.grounded);

        player.update(FRAME_MS);
        assert!(player.y < player.ground_level); // Launch impulse survived
    }

    #[test]
    fn test_jump_returns_to_ground() {
        let mut player = test_player();
        let ground = player.y;

        player.jump();
        player.update(100.0);
        assert!(player.y < ground); // Above ground mid-jump

        // Integrate well past the apex; must land exactly on the ground line
        for _ in 0..120 {
            player.update(FRAME_MS);
        }
        assert_eq!(player.y, ground);
        assert!(player.grounded);
    }

    #[test]
    fn test_damage_starts_invulnerability_window() {
        let mut player = test_player();

        assert!(player.take_damage(30.0));
        assert_eq!(player.stats.health.current(), 70.0);

        // Second hit inside the window is absorbed
        assert!(!player.take_damage(30.0));
        assert_eq!(player.stats.health.current(), 70.0);

        // Window expires after 1000 ms of simulated time
        player.update(1000.0);
        assert!(player.take_damage(30.0));
        assert_eq!(player.stats.health.current(), 40.0);
    }

    #[test]
    fn test_hp_never_below_zero() {
        let mut player = test_player();
        player.take_damage(500.0);
        assert_eq!(player.stats.health.current(), 0.0);
    }

    #[test]
    fn test_heal_caps_at_max() {
        let mut player = test_player();
        player.take_damage(30.0);
        player.heal(100.0);
        assert_eq!(player.stats.health.current(), 100.0);
    }

    #[test]
    fn test_level_up_hp_fully_heals() {
        let mut player = test_player();
        player.take_damage(50.0);
        player.level_up(UpgradeStat::Hp);

        assert_eq!(player.stats.level, 2);
        assert_eq!(player.stats.health.max(), 120.0);
        assert_eq!(player.stats.health.current(), 120.0);
    }

    #[test]
    fn test_level_up_attack() {
        let mut player = test_player();
        player.level_up(UpgradeStat::Attack);

        assert_eq!(player.stats.level, 2);
        assert_eq!(player.stats.attack, 15.0);
    }

    #[test]
    fn test_attack_boost_reverts_exactly() {
        let mut player = test_player();
        player.apply_attack_boost(5.0, 1000.0);
        assert_eq!(player.stats.attack, 15.0);
        assert!(player.has_effect(EffectKind::AttackBoost));

        player.update(1000.0);
        assert_eq!(player.stats.attack, 10.0);
        assert!(!player.has_effect(EffectKind::AttackBoost));
    }

    #[test]
    fn test_repeat_pickup_refreshes_without_stacking() {
        let mut player = test_player();
        player.apply_attack_boost(5.0, 1000.0);
        player.update(600.0);
        player.apply_attack_boost(5.0, 1000.0); // Refresh, no second +5
        assert_eq!(player.stats.attack, 15.0);

        player.update(600.0); // Old deadline passed, refreshed one hasn't
        assert_eq!(player.stats.attack, 15.0);
        player.update(400.0);
        assert_eq!(player.stats.attack, 10.0); // Reverted exactly once
    }

    #[test]
    fn test_overlapping_buffs_revert_in_any_order() {
        let mut player = test_player();
        player.apply_attack_boost(5.0, 2000.0); // attack 15
        player.apply_mega(2.0, 1000.0); // attack 30, delta 15

        player.update(1000.0); // Mega expires first
        assert_eq!(player.stats.attack, 15.0);
        player.update(1000.0);
        assert_eq!(player.stats.attack, 10.0);
    }

    #[test]
    fn test_mega_grants_invulnerability() {
        let mut player = test_player();
        player.apply_mega(2.0, 1000.0);

        assert!(!player.take_damage(30.0));
        assert_eq!(player.stats.health.current(), 100.0);

        player.update(1000.0);
        assert!(player.take_damage(30.0));
    }

    #[test]
    fn test_speed_boost_scales_run_speed() {
        let mut player = test_player();
        player.apply_speed_boost(1.5, 500.0);
        assert_eq!(player.stats.run_speed, 1.5);

        player.update(500.0);
        assert_eq!(player.stats.run_speed, 1.0);
    }

    #[test]
    fn test_reset_restores_initial_stats() {
        let mut player = test_player();
        player.level_up(UpgradeStat::Attack);
        player.apply_speed_boost(1.5, 5000.0);
        player.take_damage(80.0);
        player.jump();

        player.reset();
        assert_eq!(player.stats.level, 1);
        assert_eq!(player.stats.attack, 10.0);
        assert_eq!(player.stats.run_speed, 1.0);
        assert_eq!(player.stats.health.current(), 100.0);
        assert!(player.grounded);
        assert!(!player.is_invulnerable());
        assert!(player.active_effect_kinds().is_empty());
    }
}
