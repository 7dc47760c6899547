//! Screen-Space HUD Components
//!
//! Stateless rendering components drawn above the game world. Everything here
//! renders from read-only snapshots with SDL2 primitives; no component holds
//! game state or textures, so the HUD works without the asset pack.
//!
//! # Available Components
//!
//! - [`HealthBar`] - Player and boss health bars
//! - [`BuffDisplay`] - Active effect indicators
//! - `floating_text` - Pickup and level-up feedback text

pub mod buff_display;
pub mod floating_text;
pub mod health_bar;

pub use buff_display::BuffDisplay;
pub use health_bar::{HealthBar, HealthBarStyle};
