//! Menu and Screen Components
//!
//! Full-screen overlays that sit above the game: the level-up upgrade menu
//! and the game-over screen. Both render procedurally with the bitmap font.

pub mod game_over;
pub mod level_up_menu;

pub use game_over::GameOverScreen;
pub use level_up_menu::LevelUpMenu;
