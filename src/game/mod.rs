// Game module - session orchestration and shared state types
//
// This module contains:
// - world.rs: GameWorld struct, the per-frame update cycle and collision
//   resolution, and the session state machine
// - types.rs: shared enums and helper structs (GameState, Playfield,
//   HudSnapshot, FloatingTextInstance)

pub mod types;
pub mod world;

pub use types::*;
pub use world::GameWorld;
