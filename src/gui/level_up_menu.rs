//! Level-Up Upgrade Menu
//!
//! Shown when the kill counter fills. The simulation freezes while the menu
//! is open; the player picks one of two permanent upgrades and play resumes.
//! Cards slide in with a short ease-out so the pause reads as deliberate.

use crate::player::UpgradeStat;
use crate::text;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

const ANIMATION_MS: f32 = 500.0;
const CARD_WIDTH: u32 = 220;
const CARD_HEIGHT: u32 = 120;

/// Configuration for menu appearance
#[derive(Debug, Clone)]
pub struct LevelUpMenuStyle {
    pub overlay_alpha: u8,
    pub title_color: Color,
    pub card_color: Color,
    pub selected_border: Color,
    pub text_color: Color,
}

impl Default for LevelUpMenuStyle {
    fn default() -> Self {
        LevelUpMenuStyle {
            overlay_alpha: 180,
            title_color: Color::RGB(255, 215, 0),
            card_color: Color::RGB(40, 44, 52),
            selected_border: Color::RGB(255, 215, 0),
            text_color: Color::RGB(230, 230, 230),
        }
    }
}

const OPTIONS: [(UpgradeStat, &str, &str); 2] = [
    (UpgradeStat::Hp, "MAX HP", "+20 MAX HP"),
    (UpgradeStat::Attack, "ATTACK", "+5 ATTACK"),
];

/// The upgrade selection menu.
///
/// `confirm` hands out the chosen upgrade at most once per `show`, so a held
/// confirm key cannot double-apply an upgrade.
pub struct LevelUpMenu {
    selected: usize,
    anim_ms: f32,
    confirmed: bool,
    style: LevelUpMenuStyle,
}

impl LevelUpMenu {
    pub fn new() -> Self {
        LevelUpMenu {
            selected: 0,
            anim_ms: 0.0,
            confirmed: false,
            style: LevelUpMenuStyle::default(),
        }
    }

    /// Resets selection and rearms `confirm` for a fresh level-up.
    pub fn show(&mut self) {
        self.selected = 0;
        self.anim_ms = 0.0;
        self.confirmed = false;
    }

    pub fn update(&mut self, dt: f32) {
        self.anim_ms = (self.anim_ms + dt).min(ANIMATION_MS);
    }

    /// Ease-out cubic, 0.0 at open to 1.0 settled.
    fn progress(&self) -> f32 {
        let p = (self.anim_ms / ANIMATION_MS).clamp(0.0, 1.0);
        1.0 - (1.0 - p).powi(3)
    }

    pub fn select_prev(&mut self) {
        self.selected = (self.selected + OPTIONS.len() - 1) % OPTIONS.len();
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % OPTIONS.len();
    }

    /// Directly selects an option; false when the index is out of range.
    pub fn select(&mut self, index: usize) -> bool {
        if index < OPTIONS.len() {
            self.selected = index;
            true
        } else {
            false
        }
    }

    /// Returns the chosen upgrade the first time it is called after `show`,
    /// `None` on repeats.
    pub fn confirm(&mut self) -> Option<UpgradeStat> {
        if self.confirmed {
            return None;
        }
        self.confirmed = true;
        Some(OPTIONS[self.selected].0)
    }

    pub fn render(
        &self,
        canvas: &mut Canvas<Window>,
        screen_width: u32,
        screen_height: u32,
    ) -> Result<(), String> {
        let progress = self.progress();

        canvas.set_draw_color(Color::RGBA(0, 0, 0, self.style.overlay_alpha));
        canvas.fill_rect(Rect::new(0, 0, screen_width, screen_height))?;

        let center_x = screen_width as i32 / 2;
        text::draw_text_centered(
            canvas,
            "LEVEL UP!",
            center_x,
            80,
            self.style.title_color,
            4,
        )?;

        // Cards slide up from below as the menu opens
        let settle_y = screen_height as i32 / 2 - CARD_HEIGHT as i32 / 2;
        let card_y = settle_y + ((1.0 - progress) * 60.0) as i32;
        let gap = 40;
        let total = CARD_WIDTH as i32 * 2 + gap;
        let first_x = center_x - total / 2;

        for (i, (_, title, detail)) in OPTIONS.iter().enumerate() {
            let card_x = first_x + i as i32 * (CARD_WIDTH as i32 + gap);
            let card = Rect::new(card_x, card_y, CARD_WIDTH, CARD_HEIGHT);

            canvas.set_draw_color(self.style.card_color);
            canvas.fill_rect(card)?;

            if i == self.selected {
                canvas.set_draw_color(self.style.selected_border);
                canvas.draw_rect(card)?;
                canvas.draw_rect(Rect::new(
                    card_x - 1,
                    card_y - 1,
                    CARD_WIDTH + 2,
                    CARD_HEIGHT + 2,
                ))?;
            }

            let card_center = card_x + CARD_WIDTH as i32 / 2;
            text::draw_text_centered(
                canvas,
                title,
                card_center,
                card_y + 28,
                self.style.text_color,
                3,
            )?;
            text::draw_text_centered(
                canvas,
                detail,
                card_center,
                card_y + 72,
                self.style.text_color,
                2,
            )?;
        }

        text::draw_text_centered(
            canvas,
            "ARROWS SELECT - ENTER CONFIRM",
            center_x,
            card_y + CARD_HEIGHT as i32 + 50,
            self.style.text_color,
            2,
        )
    }
}

impl Default for LevelUpMenu {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirm_fires_once_per_show() {
        let mut menu = LevelUpMenu::new();
        menu.show();

        assert_eq!(menu.confirm(), Some(UpgradeStat::Hp));
        assert_eq!(menu.confirm(), None);

        menu.show();
        menu.select_next();
        assert_eq!(menu.confirm(), Some(UpgradeStat::Attack));
    }

    #[test]
    fn test_selection_wraps() {
        let mut menu = LevelUpMenu::new();
        menu.show();

        menu.select_prev();
        assert_eq!(menu.confirm(), Some(UpgradeStat::Attack));

        menu.show();
        menu.select_next();
        menu.select_next();
        assert_eq!(menu.confirm(), Some(UpgradeStat::Hp));
    }

    #[test]
    fn test_invalid_direct_selection_rejected() {
        let mut menu = LevelUpMenu::new();
        menu.show();

        assert!(menu.select(1));
        assert!(!menu.select(5));
        // Selection unchanged by the rejected index
        assert_eq!(menu.confirm(), Some(UpgradeStat::Attack));
    }

    #[test]
    fn test_open_animation_settles() {
        let mut menu = LevelUpMenu::new();
        menu.show();
        assert_eq!(menu.progress(), 0.0);

        menu.update(250.0);
        let mid = menu.progress();
        assert!(mid > 0.0 && mid < 1.0);

        menu.update(1000.0);
        assert!((menu.progress() - 1.0).abs() < 1e-6);
    }
}
