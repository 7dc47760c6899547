//! Health bar components for the player HUD and the boss fight
//!
//! Bars are stateless: create one with a style, then call `render()` each
//! frame with the current health fraction.

use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Fill colors for boss phases 1-3: green, then yellow, then red as the
/// fight escalates.
const PHASE_COLORS: [Color; 3] = [
    Color::RGB(39, 174, 96),
    Color::RGB(241, 196, 15),
    Color::RGB(231, 76, 60),
];

/// Configuration for health bar appearance
#[derive(Debug, Clone)]
pub struct HealthBarStyle {
    pub width: u32,
    pub height: u32,
    pub background_color: Color,
    pub fill_color: Color,
    /// Fill color used below the low-health threshold
    pub low_color: Color,
    pub border_color: Color,
}

impl Default for HealthBarStyle {
    fn default() -> Self {
        HealthBarStyle {
            width: 180,
            height: 14,
            background_color: Color::RGB(50, 50, 50),
            fill_color: Color::RGB(0, 200, 0),
            low_color: Color::RGB(200, 0, 0),
            border_color: Color::RGB(0, 0, 0),
        }
    }
}

/// A screen-space health bar.
pub struct HealthBar {
    style: HealthBarStyle,
}

impl HealthBar {
    pub fn new() -> Self {
        HealthBar {
            style: HealthBarStyle::default(),
        }
    }

    pub fn with_style(style: HealthBarStyle) -> Self {
        HealthBar { style }
    }

    /// Draws the bar with its top-left corner at (x, y). The fill switches
    /// to the low-health color below 30%.
    pub fn render(
        &self,
        canvas: &mut Canvas<Window>,
        x: i32,
        y: i32,
        fraction: f32,
    ) -> Result<(), String> {
        let fraction = fraction.clamp(0.0, 1.0);
        let frame = Rect::new(x, y, self.style.width, self.style.height);

        canvas.set_draw_color(self.style.background_color);
        canvas.fill_rect(frame)?;

        let fill_width = (self.style.width as f32 * fraction) as u32;
        if fill_width > 0 {
            let color = if fraction < 0.3 {
                self.style.low_color
            } else {
                self.style.fill_color
            };
            canvas.set_draw_color(color);
            canvas.fill_rect(Rect::new(x, y, fill_width, self.style.height))?;
        }

        canvas.set_draw_color(self.style.border_color);
        canvas.draw_rect(frame)
    }

    /// Draws the boss bar centered at the top of the screen. The fill color
    /// tracks the current phase and one pip per phase is lit beneath it.
    pub fn render_boss(
        &self,
        canvas: &mut Canvas<Window>,
        screen_width: u32,
        fraction: f32,
        phase: u8,
    ) -> Result<(), String> {
        let fraction = fraction.clamp(0.0, 1.0);
        let x = (screen_width as i32 - self.style.width as i32) / 2;
        let y = 20;
        let frame = Rect::new(x, y, self.style.width, self.style.height);

        canvas.set_draw_color(self.style.background_color);
        canvas.fill_rect(frame)?;

        let fill_width = (self.style.width as f32 * fraction) as u32;
        if fill_width > 0 {
            let phase_index = (phase.clamp(1, 3) - 1) as usize;
            canvas.set_draw_color(PHASE_COLORS[phase_index]);
            canvas.fill_rect(Rect::new(x, y, fill_width, self.style.height))?;
        }

        canvas.set_draw_color(self.style.border_color);
        canvas.draw_rect(frame)?;

        // Phase pips under the bar
        for pip in 0..3u8 {
            let pip_rect = Rect::new(x + pip as i32 * 14, y + self.style.height as i32 + 4, 10, 4);
            if pip < phase {
                canvas.set_draw_color(PHASE_COLORS[pip as usize]);
                canvas.fill_rect(pip_rect)?;
            } else {
                canvas.set_draw_color(self.style.background_color);
                canvas.fill_rect(pip_rect)?;
            }
        }

        Ok(())
    }
}

impl Default for HealthBar {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_style() {
        let style = HealthBarStyle::default();
        assert_eq!(style.width, 180);
        assert_eq!(style.height, 14);
    }

    #[test]
    fn test_phase_colors_escalate_toward_red() {
        assert_eq!(PHASE_COLORS[0], Color::RGB(39, 174, 96));
        assert_eq!(PHASE_COLORS[1], Color::RGB(241, 196, 15));
        assert_eq!(PHASE_COLORS[2], Color::RGB(231, 76, 60));
    }
}
