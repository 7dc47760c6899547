//! Game Over Screen
//!
//! Darkens the view and shows the final score once the player's hp reaches
//! zero. The session only leaves this screen via an explicit restart.

use crate::text;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Configuration for game over screen appearance
#[derive(Debug, Clone)]
pub struct GameOverStyle {
    pub overlay_alpha: u8,
    pub title_color: Color,
    pub score_color: Color,
    pub instruction_color: Color,
}

impl Default for GameOverStyle {
    fn default() -> Self {
        GameOverStyle {
            overlay_alpha: 210,
            title_color: Color::RGB(255, 50, 50),
            score_color: Color::RGB(255, 255, 100),
            instruction_color: Color::RGB(150, 150, 160),
        }
    }
}

pub struct GameOverScreen {
    style: GameOverStyle,
}

impl GameOverScreen {
    pub fn new() -> Self {
        GameOverScreen {
            style: GameOverStyle::default(),
        }
    }

    pub fn render(
        &self,
        canvas: &mut Canvas<Window>,
        screen_width: u32,
        screen_height: u32,
        final_score: u32,
    ) -> Result<(), String> {
        canvas.set_draw_color(Color::RGBA(0, 0, 0, self.style.overlay_alpha));
        canvas.fill_rect(Rect::new(0, 0, screen_width, screen_height))?;

        let center_x = screen_width as i32 / 2;
        let center_y = screen_height as i32 / 2;

        text::draw_text_centered(
            canvas,
            "GAME OVER",
            center_x,
            center_y - 80,
            self.style.title_color,
            5,
        )?;

        let score_line = format!("FINAL SCORE: {}", final_score);
        text::draw_text_centered(
            canvas,
            &score_line,
            center_x,
            center_y,
            self.style.score_color,
            3,
        )?;

        text::draw_text_centered(
            canvas,
            "PRESS R TO RESTART",
            center_x,
            center_y + 60,
            self.style.instruction_color,
            2,
        )
    }
}

impl Default for GameOverScreen {
    fn default() -> Self {
        Self::new()
    }
}
