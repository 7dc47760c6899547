//! Active effect indicators
//!
//! Shows one colored swatch per active effect with its short label, in a
//! fixed screen position. Icons are procedural so no sprite sheet is needed.

use crate::effect::EffectKind;
use crate::text;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Configuration for buff display placement
#[derive(Debug, Clone)]
pub struct BuffDisplayStyle {
    pub x: i32,
    pub y: i32,
    pub swatch_size: u32,
    pub spacing: i32,
}

impl Default for BuffDisplayStyle {
    fn default() -> Self {
        BuffDisplayStyle {
            x: 10,
            y: 64,
            swatch_size: 14,
            spacing: 6,
        }
    }
}

/// Screen-space display of the player's active effects.
pub struct BuffDisplay {
    style: BuffDisplayStyle,
}

impl BuffDisplay {
    pub fn new() -> Self {
        BuffDisplay {
            style: BuffDisplayStyle::default(),
        }
    }

    pub fn render(
        &self,
        canvas: &mut Canvas<Window>,
        active: &[EffectKind],
    ) -> Result<(), String> {
        let row_height = self.style.swatch_size as i32 + self.style.spacing;

        for (i, kind) in active.iter().enumerate() {
            let y = self.style.y + i as i32 * row_height;

            canvas.set_draw_color(kind.color());
            canvas.fill_rect(Rect::new(
                self.style.x,
                y,
                self.style.swatch_size,
                self.style.swatch_size,
            ))?;

            text::draw_text(
                canvas,
                kind.label(),
                self.style.x + self.style.swatch_size as i32 + 6,
                y + 2,
                kind.color(),
                2,
            )?;
        }

        Ok(())
    }
}

impl Default for BuffDisplay {
    fn default() -> Self {
        Self::new()
    }
}
