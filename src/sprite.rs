//! Frame drawing shared by every animated entity.
//!
//! Entities hold only a `FrameCycle` counter; the canvas work lives here so
//! the simulation stays free of SDL state. When a texture failed to load the
//! entity is drawn as a flat-colored rectangle instead, which keeps the game
//! playable without the asset pack.

use crate::animation::SheetConfig;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, Texture};
use sdl2::video::Window;

/// Draws one frame of a horizontal sprite sheet at the given position,
/// falling back to a solid rectangle when no texture is available.
#[allow(clippy::too_many_arguments)]
pub fn draw_frame(
    canvas: &mut Canvas<Window>,
    texture: Option<&mut Texture>,
    sheet: &SheetConfig,
    frame: usize,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    fallback: Color,
    alpha: u8,
) -> Result<(), String> {
    let dest = Rect::new(x as i32, y as i32, width as u32, height as u32);

    match texture {
        Some(texture) => {
            let frame = frame % sheet.frame_count.max(1);
            let src = Rect::new(
                (frame as u32 * sheet.frame_width) as i32,
                0,
                sheet.frame_width,
                sheet.frame_height,
            );
            texture.set_alpha_mod(alpha);
            canvas.copy(texture, src, dest)
        }
        None => {
            let Color { r, g, b, .. } = fallback;
            canvas.set_draw_color(Color::RGBA(r, g, b, alpha));
            canvas.fill_rect(dest)
        }
    }
}
