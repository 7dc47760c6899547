mod animation;
mod background;
mod boss;
mod collision;
mod effect;
mod enemy;
mod game;
mod gui;
mod item;
mod player;
mod render;
mod spawner;
mod sprite;
mod stats;
mod text;
mod ui;

use crate::animation::AnimationSettings;
use crate::game::{GameState, GameWorld, Playfield};
use crate::render::{GameTextures, Renderer};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use std::time::Instant;

const SCREEN_WIDTH: u32 = 800;
const SCREEN_HEIGHT: u32 = 600;

/// Large dt values (window dragged, debugger pause) would teleport entities
/// through each other, so a frame is never longer than this.
const MAX_FRAME_MS: f32 = 100.0;

fn main() -> Result<(), String> {
    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;

    let window = video_subsystem
        .window("Veggie Rush", SCREEN_WIDTH, SCREEN_HEIGHT)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
    canvas.set_blend_mode(sdl2::render::BlendMode::Blend);

    let texture_creator = canvas.texture_creator();
    let mut textures = GameTextures::load(&texture_creator);
    let settings = AnimationSettings::load_or_default("assets/config/animations.json");

    let mut event_pump = sdl_context.event_pump()?;
    let playfield = Playfield::new(SCREEN_WIDTH as f32, SCREEN_HEIGHT as f32);
    let mut world = GameWorld::new(playfield);
    let renderer = Renderer::new();

    println!("=== Veggie Rush ===");
    println!("Enter  - Start / confirm upgrade");
    println!("Space  - Jump");
    println!("Arrows - Select upgrade");
    println!("1 / 2  - Pick upgrade directly");
    println!("R      - Restart after game over");

    let mut last_frame = Instant::now();

    'running: loop {
        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => break 'running,
                Event::KeyDown {
                    keycode: Some(Keycode::Space),
                    repeat: false,
                    ..
                } => world.jump(),
                Event::KeyDown {
                    keycode: Some(Keycode::Return),
                    ..
                } => match world.state() {
                    GameState::Start => world.start(),
                    GameState::LevelUp => world.confirm_upgrade(),
                    _ => {}
                },
                Event::KeyDown {
                    keycode: Some(Keycode::Left),
                    ..
                } => world.menu_select_prev(),
                Event::KeyDown {
                    keycode: Some(Keycode::Right),
                    ..
                } => world.menu_select_next(),
                Event::KeyDown {
                    keycode: Some(Keycode::Num1),
                    ..
                } => world.choose_upgrade_by_index(0),
                Event::KeyDown {
                    keycode: Some(Keycode::Num2),
                    ..
                } => world.choose_upgrade_by_index(1),
                Event::KeyDown {
                    keycode: Some(Keycode::R),
                    ..
                } => {
                    if world.state() == GameState::GameOver {
                        world.restart();
                    }
                }
                _ => {}
            }
        }

        let now = Instant::now();
        let dt = (now.duration_since(last_frame).as_secs_f32() * 1000.0).min(MAX_FRAME_MS);
        last_frame = now;

        world.update(dt);

        if let Err(e) = renderer.render(&mut canvas, &world, &mut textures, &settings) {
            eprintln!("Frame failed ({}), restarting session", e);
            world.restart();
        }

        std::thread::sleep(std::time::Duration::new(0, 1_000_000_000u32 / 60));
    }

    Ok(())
}
