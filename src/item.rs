use crate::animation::{FrameCycle, SheetConfig};
use crate::collision::{Collidable, CollisionLayer, Hitbox};
use crate::game::{FRAME_MS, Playfield};
use crate::player::Player;
use crate::sprite;
use rand::Rng;
use sdl2::pixels::Color;
use sdl2::render::{Canvas, Texture};
use sdl2::video::Window;

const ITEM_WIDTH: f32 = 32.0;
const ITEM_HEIGHT: f32 = 32.0;
/// Items disappear after this long on the field
const LIFETIME_MS: f32 = 7000.0;
/// Fade-out occupies the final portion of the lifetime
const FADE_MS: f32 = 1000.0;

const HP_HEAL_AMOUNT: f32 = 30.0;
const ATTACK_BOOST_AMOUNT: f32 = 5.0;
const ATTACK_BOOST_MS: f32 = 10_000.0;
const SPEED_BOOST_FACTOR: f32 = 1.5;
const SPEED_BOOST_MS: f32 = 5000.0;
const MEGA_FACTOR: f32 = 2.0;
const MEGA_MS: f32 = 8000.0;

/// Pickup varieties, drawn from a weighted table on drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Hp,
    Attack,
    Speed,
    Mega,
}

impl ItemKind {
    /// Weighted draw: hp 40%, attack 30%, speed 20%, mega 10%.
    pub fn weighted_random<R: Rng>(rng: &mut R) -> ItemKind {
        let roll: f64 = rng.gen_range(0.0..1.0);
        if roll < 0.4 {
            ItemKind::Hp
        } else if roll < 0.7 {
            ItemKind::Attack
        } else if roll < 0.9 {
            ItemKind::Speed
        } else {
            ItemKind::Mega
        }
    }

    fn fallback_color(&self) -> Color {
        match self {
            ItemKind::Hp => Color::RGB(46, 204, 113),
            ItemKind::Attack => Color::RGB(230, 126, 34),
            ItemKind::Speed => Color::RGB(52, 152, 219),
            ItemKind::Mega => Color::RGB(241, 196, 15),
        }
    }
}

/// A dropped pickup.
///
/// Falls gently, bobs on a sine while settled, and expires after a fixed
/// lifetime with a fade over the final second.
pub struct Item {
    pub kind: ItemKind,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    age_ms: f32,
    playfield: Playfield,
    anim: FrameCycle,
}

impl Item {
    pub fn new(kind: ItemKind, x: f32, y: f32, playfield: Playfield) -> Self {
        Item {
            kind,
            x,
            y,
            width: ITEM_WIDTH,
            height: ITEM_HEIGHT,
            age_ms: 0.0,
            playfield,
            anim: FrameCycle::new(5, 1000.0 / 15.0),
        }
    }

    pub fn update(&mut self, dt: f32) {
        let step = dt / FRAME_MS;
        self.age_ms += dt;
        self.anim.advance(dt);

        // Gentle fall plus a bob once settled
        self.y += 2.0 * step;
        self.y += (self.age_ms * 0.1).sin() * 4.0 * step;

        let floor = self.playfield.height - self.height - 50.0;
        if self.y > floor {
            self.y = floor;
        }
    }

    pub fn is_expired(&self) -> bool {
        self.age_ms >= LIFETIME_MS
    }

    /// 255 while fresh, ramping to 0 over the final fade window.
    pub fn alpha(&self) -> u8 {
        let remaining = LIFETIME_MS - self.age_ms;
        if remaining >= FADE_MS {
            255
        } else {
            ((remaining / FADE_MS).max(0.0) * 255.0) as u8
        }
    }

    /// Applies this item's effect to the player and returns the pickup
    /// message for the floating-text feedback.
    pub fn apply_effect(&self, player: &mut Player) -> &'static str {
        match self.kind {
            ItemKind::Hp => {
                player.heal(HP_HEAL_AMOUNT);
                "+30 HP"
            }
            ItemKind::Attack => {
                player.apply_attack_boost(ATTACK_BOOST_AMOUNT, ATTACK_BOOST_MS);
                "ATTACK UP!"
            }
            ItemKind::Speed => {
                player.apply_speed_boost(SPEED_BOOST_FACTOR, SPEED_BOOST_MS);
                "SPEED UP!"
            }
            ItemKind::Mega => {
                player.apply_mega(MEGA_FACTOR, MEGA_MS);
                "MEGA MODE!"
            }
        }
    }

    pub fn message_color(&self) -> Color {
        self.kind.fallback_color()
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
            self.alpha(),
        )
    }
}

impl Collidable for Item {
    fn hitbox(&self) -> Hitbox {
        Hitbox::new(self.x, self.y, self.width, self.height)
    }

    fn layer(&self) -> CollisionLayer {
        CollisionLayer::Item
    }
}
