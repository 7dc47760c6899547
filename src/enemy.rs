use crate::animation::{FrameCycle, SheetConfig};
use crate::collision::{Collidable, CollisionLayer, Hitbox};
use crate::game::{FRAME_MS, Playfield};
use crate::sprite;
use crate::stats::Health;
use sdl2::pixels::Color;
use sdl2::render::{Canvas, Texture};
use sdl2::video::Window;

const ENEMY_WIDTH: f32 = 48.0;
const ENEMY_HEIGHT: f32 = 48.0;
/// Vertical oscillation speed in px per frame
const OSC_SPEED: f32 = 2.0;
/// Distance travelled before the oscillation reverses
const OSC_RANGE: f32 = 50.0;
/// Enemies may climb at most this far above their ground line
const OSC_CEILING: f32 = 100.0;
/// Chance that a defeated enemy drops an item
pub const DROP_CHANCE: f64 = 0.2;

/// The closed set of regular enemy types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyKind {
    Carrot,
    Broccoli,
}

impl EnemyKind {
    /// Base stats per kind: (speed px/frame, hp, contact damage, points).
    /// Carrots are fast and fragile, broccoli slow and tough.
    fn base_stats(&self) -> (f32, f32, f32, u32) {
        match self {
            EnemyKind::Carrot => (7.2, 20.0, 8.0, 100),
            EnemyKind::Broccoli => (3.2, 48.0, 12.0, 150),
        }
    }

    fn fallback_color(&self) -> Color {
        match self {
            EnemyKind::Carrot => Color::RGB(230, 126, 34),
            EnemyKind::Broccoli => Color::RGB(39, 174, 96),
        }
    }
}

/// Difficulty scaling applied to an enemy at construction time.
///
/// The spawner recomputes these when the player levels up; enemies already
/// on screen are never retroactively altered.
#[derive(Debug, Clone, Copy)]
pub struct DifficultyParams {
    pub hp_bonus: f32,
    pub damage_bonus: f32,
    pub speed_bonus: f32,
}

impl DifficultyParams {
    pub fn none() -> Self {
        DifficultyParams {
            hp_bonus: 0.0,
            damage_bonus: 0.0,
            speed_bonus: 0.0,
        }
    }

    /// Additive bonuses per player level above 1.
    pub fn for_level(level: u32) -> Self {
        let steps = level.saturating_sub(1) as f32;
        DifficultyParams {
            hp_bonus: 5.0 * steps,
            damage_bonus: 2.0 * steps,
            speed_bonus: 0.5 * steps,
        }
    }
}

#[derive(Debug, Clone)]
struct Oscillation {
    direction: f32,
    travelled: f32,
}

/// A regular scrolling enemy.
///
/// Moves left at constant speed, optionally oscillates vertically within a
/// bounded band, and reports its own defeat and off-screen retirement.
pub struct Enemy {
    pub kind: EnemyKind,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub damage: f32,
    pub points: u32,
    health: Health,
    speed: f32,
    ground_level: f32,
    oscillation: Option<Oscillation>,
    defeated: bool,
    anim: FrameCycle,
}

impl Enemy {
    /// Spawns an enemy at the right edge of the playfield with kind base
    /// stats plus the current difficulty bonuses.
    pub fn new(playfield: Playfield, kind: EnemyKind, params: DifficultyParams) -> Self {
        let (speed, hp, damage, points) = kind.base_stats();
        Self::with_stats(
            playfield,
            kind,
            hp + params.hp_bonus,
            damage + params.damage_bonus,
            speed + params.speed_bonus,
            points,
        )
    }

    /// Spawns an enemy with explicit stats.
    pub fn with_stats(
        playfield: Playfield,
        kind: EnemyKind,
        hp: f32,
        damage: f32,
        speed: f32,
        points: u32,
    ) -> Self {
        let ground_level = playfield.ground_line(ENEMY_HEIGHT);
        Enemy {
            kind,
            x: playfield.width,
            y: ground_level,
            width: ENEMY_WIDTH,
            height: ENEMY_HEIGHT,
            damage,
            points,
            health: Health::new(hp),
            speed,
            ground_level,
            oscillation: None,
            defeated: false,
            anim: FrameCycle::new(5, 1000.0 / 30.0),
        }
    }

    /// Turns on the bounded vertical bobbing some spawns get.
    pub fn enable_oscillation(&mut self) {
        self.oscillation = Some(Oscillation {
            direction: 1.0,
            travelled: 0.0,
        });
    }

    /// Starts the enemy above its ground line (elevated spawn variant).
    pub fn elevate(&mut self, offset: f32) {
        self.y -= offset.min(OSC_CEILING);
    }

    pub fn update(&mut self, dt: f32) {
        let step = dt / FRAME_MS;

        self.x -= self.speed * step;

        if let Some(osc) = &mut self.oscillation {
            self.y += OSC_SPEED * osc.direction * step;
            osc.travelled += OSC_SPEED * step;
            if osc.travelled >= OSC_RANGE {
                osc.direction = -osc.direction;
                osc.travelled = 0.0;
            }
        }

        // Oscillation and elevated spawns stay inside the vertical band
        self.y = self
            .y
            .clamp(self.ground_level - OSC_CEILING, self.ground_level);

        self.anim.advance(dt);
    }

    /// Subtracts hp and reports defeat. The defeat signal fires exactly once
    /// no matter how much further damage arrives.
    pub fn take_damage(&mut self, amount: f32) -> bool {
        if self.defeated {
            return false;
        }

        if self.health.take_damage(amount).is_fatal {
            self.defeated = true;
            return true;
        }
        false
    }

    /// True once the enemy has fully scrolled past the left boundary. This
    /// is the retirement signal, independent of combat.
    pub fn is_offscreen(&self) -> bool {
        self.x + self.width < 0.0
    }

    pub fn health_fraction(&self) -> f32 {
        self.health.fraction()
    }

    #[cfg(test)]
    pub fn hp(&self) -> f32 {
        self.health.current()
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
            self.kind.fallback_color(),
            255,
        )
    }
}

impl Collidable for Enemy {
    fn hitbox(&self) -> Hitbox {
        Hitbox::new(
            self.x + 5.0,
            self.y + 5.0,
            self.width - 10.0,
            self.height - 10.0,
        )
    }

    fn layer(&self) -> CollisionLayer {
        CollisionLayer::Enemy
    }
}
