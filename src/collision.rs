/// Collision detection for Veggie Rush
///
/// This module provides the AABB (Axis-Aligned Bounding Box) hit-testing used
/// by every entity in the game. All entities share one hitbox shape: a
/// floating-point rectangle, usually slightly inset from the sprite so near
/// misses feel fair.
///
/// # Architecture
///
/// - `Hitbox`: the uniform f32 rectangle every entity reports
/// - `Collidable` trait: implemented by entities that participate in hit-tests
/// - `CollisionLayer`: enum categorizing entities for filtering
/// - Free functions: pure, stateless intersection tests
///
/// Collision resolution order affects gameplay fairness, so every function in
/// here is pure and deterministic: same inputs, same answer, no side effects.
/// A malformed hitbox (non-finite coordinates or negative extents) is treated
/// as "no collision" and logged rather than failing the frame.

/// The uniform hitbox shape used by every entity.
///
/// Invariant: `width` and `height` are non-negative. A hitbox that violates
/// this (or carries NaN/infinite fields) is *invalid*; all tests involving an
/// invalid hitbox return their negative result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hitbox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Hitbox {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Hitbox {
            x,
            y,
            width,
            height,
        }
    }

    /// Checks that all fields are finite numbers and extents are non-negative.
    pub fn is_valid(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width >= 0.0
            && self.height >= 0.0
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// Categories of collidable objects.
///
/// Used to describe what an entity is when iterating mixed collections.
/// Filtering rules (e.g. items never collide with enemies) live in the
/// orchestrator, which only ever tests the pairs it cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollisionLayer {
    /// The runner character
    Player,
    /// Regular scrolling enemies (carrots, broccoli)
    Enemy,
    /// The periodic boss
    Boss,
    /// Dropped power-up items
    Item,
}

/// Trait for entities that participate in collision detection.
///
/// Each entity reports its own hitbox (matching its on-screen position, with
/// any sprite inset already applied) and the layer it belongs to.
pub trait Collidable {
    /// Returns the axis-aligned bounding box for this entity.
    fn hitbox(&self) -> Hitbox;

    /// Returns the collision layer this entity belongs to.
    #[allow(dead_code)] // Reserved for mixed-collection collision filtering
    fn layer(&self) -> CollisionLayer;
}

/// Checks if two hitboxes overlap with non-zero area on both axes.
///
/// Standard separating-axis test: the boxes intersect iff they overlap
/// strictly on X and on Y. Edge-touching rectangles do NOT intersect.
///
/// Invalid hitboxes yield `false` (logged), never a panic: a bad frame of
/// physics must not take the session down.
pub fn intersects(a: &Hitbox, b: &Hitbox) -> bool {
    if !a.is_valid() || !b.is_valid() {
        eprintln!("collision: invalid hitbox in intersection test ({a:?} vs {b:?})");
        return false;
    }

    a.x < b.x + b.width && a.x + a.width > b.x && a.y < b.y + b.height && a.y + a.height > b.y
}

/// Inclusive point-in-rectangle test.
///
/// Points exactly on the boundary count as inside.
#[allow(dead_code)] // Pointer-driven menu hit-testing; kept with the other pure tests
pub fn contains_point(x: f32, y: f32, rect: &Hitbox) -> bool {
    if !rect.is_valid() {
        eprintln!("collision: invalid hitbox in point test ({rect:?})");
        return false;
    }

    x >= rect.x && x <= rect.x + rect.width && y >= rect.y && y <= rect.y + rect.height
}

/// Computes the overlap magnitude on each axis between two hitboxes.
///
/// Calculated from center distance minus combined half-extents; positive on
/// an axis means the boxes overlap there. Diagnostic helper for push-out
/// experiments; core gameplay resolution only needs `intersects`.
///
/// Invalid input yields `(0.0, 0.0)`.
#[allow(dead_code)] // Diagnostic helper, exercised by tests
pub fn penetration_depth(a: &Hitbox, b: &Hitbox) -> (f32, f32) {
    if !a.is_valid() || !b.is_valid() {
        return (0.0, 0.0);
    }

    let half_widths = (a.width + b.width) / 2.0;
    let half_heights = (a.height + b.height) / 2.0;
    let (ax, ay) = a.center();
    let (bx, by) = b.center();

    (half_widths - (ax - bx).abs(), half_heights - (ay - by).abs())
}
