//! Scene Rendering
//!
//! Owns texture loading and the painter-order draw of one frame. Texture
//! loading is tolerant: a missing asset logs a warning and the entity falls
//! back to its procedural color, so the game runs without the asset pack.

use crate::animation::AnimationSettings;
use crate::enemy::EnemyKind;
use crate::game::{GameState, GameWorld};
use crate::gui::GameOverScreen;
use crate::text;
use crate::ui::{self, BuffDisplay, HealthBar, HealthBarStyle};
use sdl2::image::LoadTexture;
use sdl2::pixels::Color;
use sdl2::render::{Canvas, Texture, TextureCreator};
use sdl2::video::{Window, WindowContext};

const SKY_COLOR: Color = Color::RGB(135, 206, 235);

/// Every texture the scene uses. Any slot may be `None` after a failed load.
pub struct GameTextures<'a> {
    pub player: Option<Texture<'a>>,
    pub carrot: Option<Texture<'a>>,
    pub broccoli: Option<Texture<'a>>,
    pub boss: Option<Texture<'a>>,
    pub item: Option<Texture<'a>>,
    pub backgrounds: [Option<Texture<'a>>; 3],
}

impl<'a> GameTextures<'a> {
    pub fn load(creator: &'a TextureCreator<WindowContext>) -> Self {
        GameTextures {
            player: load_optional(creator, "assets/sprites/player.png"),
            carrot: load_optional(creator, "assets/sprites/carrot.png"),
            broccoli: load_optional(creator, "assets/sprites/broccoli.png"),
            boss: load_optional(creator, "assets/sprites/boss.png"),
            item: load_optional(creator, "assets/sprites/items.png"),
            backgrounds: [
                load_optional(creator, "assets/backgrounds/sky.png"),
                load_optional(creator, "assets/backgrounds/hills.png"),
                load_optional(creator, "assets/backgrounds/ground.png"),
            ],
        }
    }
}

fn load_optional<'a>(
    creator: &'a TextureCreator<WindowContext>,
    path: &str,
) -> Option<Texture<'a>> {
    match creator.load_texture(path) {
        Ok(texture) => Some(texture),
        Err(e) => {
            eprintln!("Texture {} unavailable ({}), using fallback", path, e);
            None
        }
    }
}

/// Stateless HUD components, created once and reused every frame.
pub struct Renderer {
    player_bar: HealthBar,
    enemy_bar: HealthBar,
    boss_bar: HealthBar,
    buffs: BuffDisplay,
    game_over: GameOverScreen,
}

impl Renderer {
    pub fn new() -> Self {
        Renderer {
            player_bar: HealthBar::new(),
            enemy_bar: HealthBar::with_style(HealthBarStyle {
                width: 40,
                height: 5,
                ..Default::default()
            }),
            boss_bar: HealthBar::with_style(HealthBarStyle {
                width: 300,
                height: 16,
                ..Default::default()
            }),
            buffs: BuffDisplay::new(),
            game_over: GameOverScreen::new(),
        }
    }

    /// Draws one complete frame back to front.
    pub fn render(
        &self,
        canvas: &mut Canvas<Window>,
        world: &GameWorld,
        textures: &mut GameTextures,
        settings: &AnimationSettings,
    ) -> Result<(), String> {
        let screen_w = world.playfield.width as u32;
        let screen_h = world.playfield.height as u32;

        canvas.set_draw_color(SKY_COLOR);
        canvas.clear();
        world.parallax.render(canvas, &mut textures.backgrounds)?;

        for item in &world.items {
            item.render(canvas, textures.item.as_mut(), &settings.item)?;
        }

        for enemy in &world.enemies {
            let (texture, sheet) = match enemy.kind {
                EnemyKind::Carrot => (textures.carrot.as_mut(), &settings.carrot),
                EnemyKind::Broccoli => (textures.broccoli.as_mut(), &settings.broccoli),
            };
            enemy.render(canvas, texture, sheet)?;

            // Small bar above damaged enemies only
            let fraction = enemy.health_fraction();
            if fraction < 1.0 {
                self.enemy_bar.render(
                    canvas,
                    (enemy.x + enemy.width / 2.0) as i32 - 20,
                    enemy.y as i32 - 10,
                    fraction,
                )?;
            }
        }

        if let Some(boss) = &world.boss {
            boss.render(canvas, textures.boss.as_mut(), &settings.boss)?;
            self.boss_bar
                .render_boss(canvas, screen_w, boss.health_fraction(), boss.phase())?;
        }

        world
            .player
            .render(canvas, textures.player.as_mut(), &settings.player)?;

        ui::floating_text::render(canvas, &world.floating_texts)?;
        self.render_hud(canvas, world)?;

        match world.state() {
            GameState::Start => self.render_start_screen(canvas, screen_w, screen_h)?,
            GameState::LevelUp => world.level_up_menu.render(canvas, screen_w, screen_h)?,
            GameState::GameOver => {
                self.game_over
                    .render(canvas, screen_w, screen_h, world.score())?
            }
            GameState::Playing => {}
        }

        canvas.present();
        Ok(())
    }

    fn render_hud(&self, canvas: &mut Canvas<Window>, world: &GameWorld) -> Result<(), String> {
        let hud = world.hud();

        self.player_bar
            .render(canvas, 10, 10, hud.hp / hud.max_hp.max(1.0))?;

        let hp_line = format!("{:.0}/{:.0}", hud.hp, hud.max_hp);
        text::draw_text(canvas, &hp_line, 200, 12, Color::RGB(255, 255, 255), 2)?;

        let status = format!("SCORE: {}  LEVEL: {}  ATK: {:.0}", hud.score, hud.level, hud.attack);
        text::draw_text(canvas, &status, 10, 36, Color::RGB(255, 255, 255), 2)?;

        self.buffs.render(canvas, &hud.active_effects)
    }

    fn render_start_screen(
        &self,
        canvas: &mut Canvas<Window>,
        screen_w: u32,
        screen_h: u32,
    ) -> Result<(), String> {
        let center_x = screen_w as i32 / 2;
        let center_y = screen_h as i32 / 2;

        text::draw_text_centered(
            canvas,
            "VEGGIE RUSH",
            center_x,
            center_y - 90,
            Color::RGB(255, 215, 0),
            6,
        )?;
        text::draw_text_centered(
            canvas,
            "PRESS ENTER TO START",
            center_x,
            center_y + 10,
            Color::RGB(255, 255, 255),
            3,
        )?;
        text::draw_text_centered(
            canvas,
            "SPACE TO JUMP - RUN INTO ENEMIES TO FIGHT",
            center_x,
            center_y + 60,
            Color::RGB(180, 180, 190),
            2,
        )
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
