//! Floating feedback text
//!
//! Renders the world's floating text instances (pickup messages, level-up
//! banners). Instances rise and fade; their aging is driven by the world
//! update, this module only draws.

use crate::game::FloatingTextInstance;
use crate::text;
use sdl2::pixels::Color;
use sdl2::render::Canvas;
use sdl2::video::Window;

pub fn render(
    canvas: &mut Canvas<Window>,
    instances: &[FloatingTextInstance],
) -> Result<(), String> {
    for instance in instances {
        let alpha = (instance.alpha() * 255.0) as u8;
        let Color { r, g, b, .. } = instance.color;

        text::draw_text_centered(
            canvas,
            &instance.text,
            instance.x as i32,
            instance.y as i32,
            Color::RGBA(r, g, b, alpha),
            2,
        )?;
    }
    Ok(())
}
