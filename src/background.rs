use crate::game::{FRAME_MS, Playfield};
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, Texture};
use sdl2::video::Window;

/// Scroll speeds in px per reference frame, back to front.
const LAYER_SPEEDS: [f32; 3] = [1.0, 2.0, 3.0];
/// Procedural sky/hills/ground bands drawn when textures are missing.
const LAYER_COLORS: [Color; 3] = [
    Color::RGB(135, 206, 235),
    Color::RGB(34, 139, 87),
    Color::RGB(101, 67, 33),
];

/// Endless horizontally scrolling backdrop.
///
/// Each layer scrolls at its own speed, scaled by the player's current run
/// speed so buffs visibly change the pace of the world. Layers wrap by
/// drawing two tiles side by side.
pub struct Parallax {
    offsets: [f32; 3],
    playfield: Playfield,
}

impl Parallax {
    pub fn new(playfield: Playfield) -> Self {
        Parallax {
            offsets: [0.0; 3],
            playfield,
        }
    }

    pub fn update(&mut self, dt: f32, run_speed: f32) {
        let step = dt / FRAME_MS;
        let width = self.playfield.width;

        for (offset, speed) in self.offsets.iter_mut().zip(LAYER_SPEEDS) {
            *offset += speed * run_speed * step;
            if *offset >= width {
                *offset -= width;
            }
        }
    }

    #[cfg(test)]
    pub fn offset(&self, layer: usize) -> f32 {
        self.offsets[layer]
    }

    pub fn render(
        &self,
        canvas: &mut Canvas<Window>,
        textures: &mut [Option<Texture>; 3],
    ) -> Result<(), String> {
        let w = self.playfield.width as i32;
        let h = self.playfield.height as u32;

        for (layer, texture) in textures.iter_mut().enumerate() {
            let x = -(self.offsets[layer] as i32);

            match texture {
                Some(texture) => {
                    canvas.copy(&*texture, None, Rect::new(x, 0, w as u32, h))?;
                    canvas.copy(&*texture, None, Rect::new(x + w, 0, w as u32, h))?;
                }
                None => {
                    // Stacked color bands, one per layer depth
                    let band_h = h / 3;
                    let band_y = (layer as u32 * band_h) as i32;
                    canvas.set_draw_color(LAYER_COLORS[layer]);
                    canvas.fill_rect(Rect::new(0, band_y, w as u32, band_h))?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layers_scroll_at_distinct_speeds() {
        let mut parallax = Parallax::new(Playfield::new(800.0, 600.0));

        parallax.update(FRAME_MS * 10.0, 1.0);
        assert!(parallax.offset(0) < parallax.offset(1));
        assert!(parallax.offset(1) < parallax.offset(2));
    }

    #[test]
    fn test_offsets_wrap_at_playfield_width() {
        let mut parallax = Parallax::new(Playfield::new(800.0, 600.0));

        for _ in 0..2000 {
            parallax.update(FRAME_MS, 2.0);
            for layer in 0..3 {
                assert!(parallax.offset(layer) < 800.0);
            }
        }
    }

    #[test]
    fn test_run_speed_scales_scroll() {
        let mut slow = Parallax::new(Playfield::new(800.0, 600.0));
        let mut fast = Parallax::new(Playfield::new(800.0, 600.0));

        slow.update(FRAME_MS, 1.0);
        fast.update(FRAME_MS, 1.5);
        assert!(fast.offset(2) > slow.offset(2));
    }
}
