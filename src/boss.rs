use crate::animation::{FrameCycle, SheetConfig};
use crate::collision::{Collidable, CollisionLayer, Hitbox};
use crate::game::{FRAME_MS, Playfield};
use crate::sprite;
use crate::stats::Health;
use sdl2::pixels::Color;
use sdl2::render::{Canvas, Texture};
use sdl2::video::Window;

const BOSS_WIDTH: f32 = 96.0;
const BOSS_HEIGHT: f32 = 96.0;
const BASE_SPEED: f32 = 3.0;
/// Sine oscillation parameters (amplitude px, frequency rad/ms)
const BASE_AMPLITUDE: f32 = 50.0;
const BASE_FREQUENCY: f32 = 0.02;
/// Charge rush parameters
const BASE_CHARGE_SPEED: f32 = 12.0;
const CHARGE_DURATION_MS: f32 = 1000.0;
/// Time between attack initiations
const BASE_ATTACK_COOLDOWN_MS: f32 = 3000.0;
/// Invulnerability granted on each phase transition
const PHASE_INVULNERABILITY_MS: f32 = 1000.0;
/// Movement suspension after taking a hit
const STUN_MS: f32 = 200.0;

/// The boss alternates between two movement modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BossMovement {
    /// Vertical sine plus slow horizontal drift, clamped to the right half
    Oscillating,
    /// Timed horizontal rush toward the player side
    Charging,
}

/// The periodic boss.
///
/// Stats scale with the player's level at spawn time. The fight moves
/// through phases 1-3 as hp falls past the 60% and 30% thresholds; each
/// transition grants a brief invulnerability window and permanently scales
/// the boss upward. Phase never decreases within a fight.
pub struct Boss {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub damage: f32,
    pub points: u32,
    health: Health,
    phase: u8,
    movement: BossMovement,
    speed: f32,
    amplitude: f32,
    frequency: f32,
    charge_speed: f32,
    attack_cooldown_ms: f32,
    time_ms: f32,
    last_attack_ms: f32,
    charge_started_ms: f32,
    invulnerable_ms: f32,
    stun_ms: f32,
    origin_y: f32,
    playfield: Playfield,
    anim: FrameCycle,
}

impl Boss {
    pub fn new(playfield: Playfield, player_level: u32) -> Self {
        let level = player_level as f32;
        let y = playfield.height - BOSS_HEIGHT - 50.0;
        Boss {
            x: playfield.width - BOSS_WIDTH - 50.0,
            y,
            width: BOSS_WIDTH,
            height: BOSS_HEIGHT,
            damage: 20.0 + level * 5.0,
            points: 50 + player_level * 10,
            health: Health::new(100.0 + level * 50.0),
            phase: 1,
            movement: BossMovement::Oscillating,
            speed: BASE_SPEED,
            amplitude: BASE_AMPLITUDE,
            frequency: BASE_FREQUENCY,
            charge_speed: BASE_CHARGE_SPEED,
            attack_cooldown_ms: BASE_ATTACK_COOLDOWN_MS,
            time_ms: 0.0,
            last_attack_ms: 0.0,
            charge_started_ms: 0.0,
            invulnerable_ms: 0.0,
            stun_ms: 0.0,
            origin_y: y,
            playfield,
            anim: FrameCycle::new(7, 1000.0 / 30.0),
        }
    }

    /// Advances timers, phase checks, movement and attack initiation.
    ///
    /// The player position is part of the contract so future attack patterns
    /// can aim; the charge currently always rushes the player side.
    pub fn update(&mut self, dt: f32, _player_x: f32, _player_y: f32) {
        self.time_ms += dt;
        self.anim.advance(dt);
        self.invulnerable_ms = (self.invulnerable_ms - dt).max(0.0);
        self.stun_ms = (self.stun_ms - dt).max(0.0);

        // Phase checks run even through a stun so a threshold crossed by the
        // stunning hit is never delayed
        self.check_phase_transition();

        if self.stun_ms > 0.0 {
            return;
        }

        match self.movement {
            BossMovement::Charging => self.update_charge(dt),
            BossMovement::Oscillating => self.update_oscillation(dt),
        }

        if self.time_ms - self.last_attack_ms >= self.attack_cooldown_ms {
            self.initiate_attack();
        }
    }

    fn update_oscillation(&mut self, dt: f32) {
        let step = dt / FRAME_MS;

        self.y = self.origin_y + (self.time_ms * self.frequency).sin() * self.amplitude;
        self.x += (self.time_ms * 0.001).sin() * self.speed * 0.5 * step;

        // Stay in the right half of the playfield
        self.x = self.x.clamp(
            self.playfield.width / 2.0,
            self.playfield.width - self.width - 20.0,
        );
        self.y = self
            .y
            .clamp(50.0, self.playfield.height - self.height - 50.0);
    }

    fn update_charge(&mut self, dt: f32) {
        if self.time_ms - self.charge_started_ms >= CHARGE_DURATION_MS {
            self.movement = BossMovement::Oscillating;
            return;
        }

        self.x -= self.charge_speed * (dt / FRAME_MS);

        // Overran the left boundary: reset to the home position
        if self.x <= 0.0 {
            self.x = self.playfield.width - self.width - 50.0;
            self.movement = BossMovement::Oscillating;
        }
    }

    /// The attack's only observable effect is entering the charge movement
    /// with the current phase-scaled speed.
    fn initiate_attack(&mut self) {
        self.last_attack_ms = self.time_ms;
        self.charge_started_ms = self.time_ms;
        self.movement = BossMovement::Charging;
    }

    fn check_phase_transition(&mut self) {
        let fraction = self.health.fraction();

        // Transitions apply in sequence so a single hit that crosses both
        // thresholds still stacks both sets of buffs
        if fraction <= 0.6 && self.phase < 2 {
            self.phase = 2;
            self.enter_phase(2);
        }
        if fraction <= 0.3 && self.phase < 3 {
            self.phase = 3;
            self.enter_phase(3);
        }
    }

    /// Phase buffs are multiplicative and cumulative: phase 3 stacks on top
    /// of whatever phase 2 already applied.
    fn enter_phase(&mut self, phase: u8) {
        self.invulnerable_ms = PHASE_INVULNERABILITY_MS;

        match phase {
            2 => {
                self.speed *= 1.3;
                self.frequency *= 1.5;
                self.charge_speed *= 1.5;
            }
            3 => {
                self.speed *= 1.5;
                self.damage *= 1.3;
                self.amplitude *= 1.5;
                self.charge_speed *= 1.5;
                self.attack_cooldown_ms *= 0.7;
            }
            _ => {}
        }
    }

    /// Absorbed during an invulnerability window; otherwise subtracts hp,
    /// stuns briefly, and reports whether hp reached zero.
    pub fn take_damage(&mut self, amount: f32) -> bool {
        if self.invulnerable_ms > 0.0 {
            return false;
        }

        let result = self.health.take_damage(amount);
        self.stun_ms = STUN_MS;
        result.is_fatal
    }

    pub fn phase(&self) -> u8 {
        self.phase
    }

    pub fn health_fraction(&self) -> f32 {
        self.health.fraction()
    }

    pub fn is_invulnerable(&self) -> bool {
        self.invulnerable_ms > 0.0
    }

    #[cfg(test)]
    fn hp(&self) -> f32 {
        self.health.current()
    }

    pub fn render(
        &self,
        canvas: &mut Canvas<Window>,
        texture: Option<&mut Texture>,
        sheet: &SheetConfig,
    ) -> Result<(), String> {
        // Transition invulnerability reads as a translucent flash
        let alpha = if self.is_invulnerable() { 150 } else { 255 };
        sprite::draw_frame(
            canvas,
            texture,
            sheet,
            self.anim.frame(),
            self.x,
            self.y,
            self.width,
            self.height,
            Color::RGB(142, 68, 173),
            alpha,
        )
    }
}

impl Collidable for Boss {
    fn hitbox(&self) -> Hitbox {
        Hitbox::new(
            self.x + 10.0,
            self.y + 10.0,
            self.width - 20.0,
            self.height - 20.0,
        )
    }

    fn layer(&self) -> CollisionLayer {
        CollisionLayer::Boss
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boss_at_level_1() -> Boss {
        // Level 1: 150 max hp, so the 60%/30% thresholds sit at 90 and 45
        Boss::new(Playfield::new(800.0, 600.0), 1)
    }

    #[test]
    fn test_phase_two_at_sixty_percent() {
        let mut boss = boss_at_level_1();
        assert_eq!(boss.phase(), 1);

        boss.take_damage(60.0); // hp 90 = 60%
        boss.update(FRAME_MS, 100.0, 400.0);
        assert_eq!(boss.phase(), 2);
    }

    #[test]
    fn test_phase_three_at_thirty_percent() {
        let mut boss = boss_at_level_1();

        boss.take_damage(60.0);
        boss.update(FRAME_MS, 100.0, 400.0);
        boss.update(2000.0, 100.0, 400.0); // Clear the transition window

        boss.take_damage(45.0); // hp 45 = 30%
        boss.update(FRAME_MS, 100.0, 400.0);
        assert_eq!(boss.phase(), 3);
    }

    #[test]
    fn test_single_hit_can_cross_both_thresholds() {
        let mut boss = boss_at_level_1();

        boss.take_damage(105.0); // hp 45, straight past both thresholds
        boss.update(FRAME_MS, 100.0, 400.0);

        assert_eq!(boss.phase(), 3);
        // Both phases' speed buffs stacked multiplicatively
        assert!((boss.speed - BASE_SPEED * 1.3 * 1.5).abs() < 1e-4);
    }

    #[test]
    fn test_phase_is_monotonic() {
        let mut boss = boss_at_level_1();
        let mut last_phase = boss.phase();

        for i in 0..60 {
            if i % 7 == 0 {
                boss.take_damage(4.0);
            }
            boss.update(50.0, 100.0, 400.0);
            assert!(boss.phase() >= last_phase);
            last_phase = boss.phase();
        }
    }

    #[test]
    fn test_transition_grants_invulnerability() {
        let mut boss = boss_at_level_1();

        boss.take_damage(60.0);
        boss.update(FRAME_MS, 100.0, 400.0);
        assert!(boss.is_invulnerable());

        let hp = boss.hp();
        assert!(!boss.take_damage(30.0)); // Absorbed
        assert_eq!(boss.hp(), hp);

        boss.update(1500.0, 100.0, 400.0);
        assert!(!boss.is_invulnerable());
        assert!(boss.take_damage(30.0) == false && boss.hp() < hp);
    }

    #[test]
    fn test_stun_suspends_movement() {
        let mut boss = boss_at_level_1();
        boss.take_damage(5.0);

        let (x, y) = (boss.x, boss.y);
        boss.update(100.0, 100.0, 400.0); // Still inside the 200 ms stun
        assert_eq!((boss.x, boss.y), (x, y));

        boss.update(200.0, 100.0, 400.0); // Stun over, oscillation resumes
        assert!(boss.y != y || boss.x != x);
    }

    #[test]
    fn test_attack_enters_charge_on_cooldown() {
        let mut boss = boss_at_level_1();

        boss.update(2999.0, 100.0, 400.0);
        assert_eq!(boss.movement, BossMovement::Oscillating);

        boss.update(2.0, 100.0, 400.0);
        assert_eq!(boss.movement, BossMovement::Charging);

        // Charging rushes left much faster than the drift
        let x = boss.x;
        boss.update(FRAME_MS, 100.0, 400.0);
        assert!(boss.x < x - 10.0);
    }

    #[test]
    fn test_charge_ends_after_duration() {
        let mut boss = boss_at_level_1();

        boss.update(3001.0, 100.0, 400.0); // Initiates the charge
        boss.update(500.0, 100.0, 400.0);
        assert_eq!(boss.movement, BossMovement::Charging);

        boss.update(600.0, 100.0, 400.0); // Past the 1000 ms duration
        assert_eq!(boss.movement, BossMovement::Oscillating);
    }

    #[test]
    fn test_defeat_reported_once_hp_reaches_zero() {
        let mut boss = boss_at_level_1();

        boss.take_damage(105.0);
        boss.update(FRAME_MS, 100.0, 400.0);
        boss.update(2000.0, 100.0, 400.0); // Clear phase invulnerability

        assert!(boss.take_damage(500.0));
    }

    #[test]
    fn test_stats_scale_with_player_level() {
        let pf = Playfield::new(800.0, 600.0);
        let low = Boss::new(pf, 1);
        let high = Boss::new(pf, 3);

        assert_eq!(low.health.max(), 150.0);
        assert_eq!(high.health.max(), 250.0);
        assert_eq!(high.damage, 35.0);
        assert_eq!(high.points, 80);
    }
}
