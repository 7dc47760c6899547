//! Game world: owns every entity and drives one update tick.
//!
//! The world is the single authority for collision resolution and scoring.
//! Entities never reach into each other; cross-entity consequences (damage,
//! drops, score, state transitions) are applied here.

use crate::background::Parallax;
use crate::boss::Boss;
use crate::collision::{self, Collidable};
use crate::enemy::{self, Enemy};
use crate::game::types::{FloatingTextInstance, GameState, HudSnapshot, Playfield};
use crate::gui::LevelUpMenu;
use crate::item::{Item, ItemKind};
use crate::player::{Player, UpgradeStat};
use crate::spawner::EnemySpawner;
use rand::Rng;
use sdl2::pixels::Color;

/// Kills needed to trigger a level-up (and the boss that follows).
const KILLS_PER_LEVEL: u32 = 10;
/// Pause between closing the level-up menu and the boss appearing.
const BOSS_SPAWN_DELAY_MS: f32 = 2000.0;
/// Chance a spawn starts above the ground line.
const ELEVATED_SPAWN_CHANCE: f64 = 0.3;
const ELEVATED_OFFSET_MIN: f32 = 50.0;
const ELEVATED_OFFSET_MAX: f32 = 100.0;
/// Chance a spawn bobs vertically.
const OSCILLATION_CHANCE: f64 = 0.5;
/// Floating text rise rate in px per ms.
const TEXT_RISE_PER_MS: f32 = 0.03;

pub struct GameWorld {
    pub playfield: Playfield,
    state: GameState,
    score: u32,
    enemies_defeated: u32,
    /// False from the moment a level-up is earned until that level's boss
    /// dies. Gates both regular spawning and the next level-up.
    boss_defeated: bool,
    boss_spawn_timer_ms: f32,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub items: Vec<Item>,
    pub boss: Option<Boss>,
    spawner: EnemySpawner,
    pub parallax: Parallax,
    pub floating_texts: Vec<FloatingTextInstance>,
    pub level_up_menu: LevelUpMenu,
}

impl GameWorld {
    pub fn new(playfield: Playfield) -> Self {
        GameWorld {
            playfield,
            state: GameState::Start,
            score: 0,
            enemies_defeated: 0,
            boss_defeated: true,
            boss_spawn_timer_ms: 0.0,
            player: Player::new(playfield),
            enemies: Vec::new(),
            items: Vec::new(),
            boss: None,
            spawner: EnemySpawner::new(),
            parallax: Parallax::new(playfield),
            floating_texts: Vec::new(),
            level_up_menu: LevelUpMenu::new(),
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Leaves the start screen. Ignored in any other state.
    pub fn start(&mut self) {
        if self.state == GameState::Start {
            self.state = GameState::Playing;
        }
    }

    /// Rebuilds the session from scratch and goes straight to playing.
    pub fn restart(&mut self) {
        self.player.reset();
        self.enemies.clear();
        self.items.clear();
        self.boss = None;
        self.spawner = EnemySpawner::new();
        self.parallax = Parallax::new(self.playfield);
        self.floating_texts.clear();
        self.score = 0;
        self.enemies_defeated = 0;
        self.boss_defeated = true;
        self.boss_spawn_timer_ms = 0.0;
        self.state = GameState::Playing;
    }

    pub fn jump(&mut self) {
        if self.state == GameState::Playing {
            self.player.jump();
        }
    }

    pub fn update(&mut self, dt: f32) {
        match self.state {
            GameState::Playing => self.update_playing(dt),
            GameState::LevelUp => self.level_up_menu.update(dt),
            GameState::Start | GameState::GameOver => {}
        }
    }

    fn update_playing(&mut self, dt: f32) {
        self.parallax.update(dt, self.player.stats.run_speed);
        self.player.update(dt);

        // Regular spawning pauses from the level-up until the boss is down
        if self.boss.is_none() && self.boss_defeated && self.spawner.update(dt) {
            self.spawn_enemy();
        }

        for enemy in &mut self.enemies {
            enemy.update(dt);
        }
        self.enemies.retain(|e| !e.is_offscreen());

        for item in &mut self.items {
            item.update(dt);
        }
        self.items.retain(|i| !i.is_expired());

        if let Some(boss) = &mut self.boss {
            let player_box = self.player.hitbox();
            let (px, py) = player_box.center();
            boss.update(dt, px, py);
        } else if !self.boss_defeated && self.enemies.is_empty() {
            // The entrance delay runs only while the field is clear, so
            // stragglers scrolling off never eat into the grace period
            self.boss_spawn_timer_ms = (self.boss_spawn_timer_ms - dt).max(0.0);
            if self.boss_spawn_timer_ms <= 0.0 {
                self.boss = Some(Boss::new(self.playfield, self.player.stats.level));
            }
        }

        self.resolve_collisions();

        for text in &mut self.floating_texts {
            text.age_ms += dt;
            text.y -= TEXT_RISE_PER_MS * dt;
        }
        self.floating_texts.retain(|t| t.age_ms < t.lifetime_ms);

        self.check_game_over();
    }

    fn spawn_enemy(&mut self) {
        let mut rng = rand::thread_rng();
        let kind = self.spawner.random_kind();
        let mut enemy = Enemy::new(self.playfield, kind, self.spawner.params());

        if rng.gen_bool(ELEVATED_SPAWN_CHANCE) {
            enemy.elevate(rng.gen_range(ELEVATED_OFFSET_MIN..ELEVATED_OFFSET_MAX));
        }
        if rng.gen_bool(OSCILLATION_CHANCE) {
            enemy.enable_oscillation();
        }
        self.enemies.push(enemy);
    }

    /// The one place contact damage, pickups, and defeats are applied.
    fn resolve_collisions(&mut self) {
        let attack = self.player.stats.attack;

        // Player vs enemies: contact damages both sides
        let mut defeated = Vec::new();
        for (i, enemy) in self.enemies.iter_mut().enumerate() {
            if collision::intersects(&self.player.hitbox(), &enemy.hitbox()) {
                self.player.take_damage(enemy.damage);
                if enemy.take_damage(attack) {
                    defeated.push(i);
                }
            }
        }
        for &i in defeated.iter().rev() {
            let enemy = self.enemies.remove(i);
            self.on_enemy_defeated(&enemy);
        }

        // Player vs boss
        let mut boss_down = false;
        if let Some(boss) = &mut self.boss {
            if collision::intersects(&self.player.hitbox(), &boss.hitbox()) {
                self.player.take_damage(boss.damage);
                boss_down = boss.take_damage(attack);
            }
        }
        if boss_down {
            if let Some(boss) = self.boss.take() {
                self.on_boss_defeated(&boss);
            }
        }

        // Player vs items: pickup applies the effect and emits feedback text
        let player = &mut self.player;
        let texts = &mut self.floating_texts;
        self.items.retain(|item| {
            if collision::intersects(&player.hitbox(), &item.hitbox()) {
                let message = item.apply_effect(player);
                texts.push(FloatingTextInstance::new(
                    item.x + item.width / 2.0,
                    item.y,
                    message.to_string(),
                    item.message_color(),
                ));
                false
            } else {
                true
            }
        });
    }

    fn on_enemy_defeated(&mut self, enemy: &Enemy) {
        self.score += enemy.points;
        self.enemies_defeated += 1;

        let mut rng = rand::thread_rng();
        if rng.gen_bool(enemy::DROP_CHANCE) {
            let kind = ItemKind::weighted_random(&mut rng);
            self.items.push(Item::new(
                kind,
                enemy.x,
                enemy.y + enemy.height / 2.0,
                self.playfield,
            ));
        }

        self.check_level_up();
    }

    fn on_boss_defeated(&mut self, boss: &Boss) {
        self.score += boss.points * self.player.stats.level;
        self.boss_defeated = true;

        // Celebration drop: a fan of items near the center of the field
        let mut rng = rand::thread_rng();
        let count = rng.gen_range(3..=5);
        for i in 0..count {
            let kind = ItemKind::weighted_random(&mut rng);
            let x = self.playfield.width / 2.0 + (i as f32 - count as f32 / 2.0) * 50.0;
            self.items
                .push(Item::new(kind, x, self.playfield.height - 150.0, self.playfield));
        }

        self.floating_texts.push(FloatingTextInstance::new(
            self.playfield.width / 2.0,
            self.playfield.height / 3.0,
            "BOSS DEFEATED!".to_string(),
            Color::RGB(255, 215, 0),
        ));

        // Kills banked while the boss was up may already earn the next level
        self.check_level_up();
    }

    fn check_level_up(&mut self) {
        if self.enemies_defeated >= KILLS_PER_LEVEL && self.boss_defeated {
            self.enemies_defeated = 0;
            self.boss_defeated = false;
            self.boss_spawn_timer_ms = BOSS_SPAWN_DELAY_MS;
            self.state = GameState::LevelUp;
            self.level_up_menu.show();
        }
    }

    fn check_game_over(&mut self) {
        if !self.player.stats.health.is_alive() {
            self.state = GameState::GameOver;
        }
    }

    pub fn menu_select_prev(&mut self) {
        if self.state == GameState::LevelUp {
            self.level_up_menu.select_prev();
        }
    }

    pub fn menu_select_next(&mut self) {
        if self.state == GameState::LevelUp {
            self.level_up_menu.select_next();
        }
    }

    /// Confirms the highlighted upgrade and resumes play.
    pub fn confirm_upgrade(&mut self) {
        if self.state != GameState::LevelUp {
            return;
        }
        if let Some(stat) = self.level_up_menu.confirm() {
            self.apply_upgrade(stat);
        }
    }

    /// Direct selection path (number keys). Out-of-range indices are logged
    /// and ignored rather than closing the menu.
    pub fn choose_upgrade_by_index(&mut self, index: usize) {
        if self.state != GameState::LevelUp {
            return;
        }
        if !self.level_up_menu.select(index) {
            eprintln!("Ignoring invalid upgrade selection: {}", index);
            return;
        }
        if let Some(stat) = self.level_up_menu.confirm() {
            self.apply_upgrade(stat);
        }
    }

    fn apply_upgrade(&mut self, stat: UpgradeStat) {
        self.player.level_up(stat);
        self.spawner.adjust_difficulty(self.player.stats.level);

        let (px, py) = self.player.hitbox().center();
        self.floating_texts.push(FloatingTextInstance::new(
            px,
            py - 40.0,
            format!("LEVEL {}", self.player.stats.level),
            Color::RGB(255, 215, 0),
        ));

        self.state = GameState::Playing;
    }

    /// Read-only snapshot for the HUD.
    pub fn hud(&self) -> HudSnapshot {
        HudSnapshot {
            score: self.score,
            hp: self.player.stats.health.current(),
            max_hp: self.player.stats.health.max(),
            level: self.player.stats.level,
            attack: self.player.stats.attack,
            active_effects: self.player.active_effect_kinds(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enemy::EnemyKind;

    fn playing_world() -> GameWorld {
        let mut world = GameWorld::new(Playfield::new(800.0, 600.0));
        world.start();
        world
    }

    /// A one-hp, zero-damage enemy parked on top of the player.
    fn touching_enemy(world: &GameWorld) -> Enemy {
        let mut enemy = Enemy::with_stats(
            world.playfield,
            EnemyKind::Carrot,
            1.0,
            0.0,
            0.0,
            100,
        );
        enemy.x = world.player.x;
        enemy.y = world.player.y;
        enemy
    }

    #[test]
    fn test_start_leaves_start_state_once() {
        let mut world = GameWorld::new(Playfield::new(800.0, 600.0));
        assert_eq!(world.state(), GameState::Start);

        world.update(100.0); // No simulation before start
        assert_eq!(world.player.stats.health.current(), 100.0);

        world.start();
        assert_eq!(world.state(), GameState::Playing);
    }

    #[test]
    fn test_jump_only_while_playing() {
        let mut world = GameWorld::new(Playfield::new(800.0, 600.0));

        world.jump();
        assert!(world.player.grounded);

        world.start();
        world.jump();
        assert!(!world.player.grounded);
    }

    #[test]
    fn test_defeating_enemy_scores_points() {
        let mut world = playing_world();
        world.enemies.push(touching_enemy(&world));

        world.resolve_collisions();
        assert_eq!(world.score(), 100);
        assert!(world.enemies.is_empty());
    }

    #[test]
    fn test_tenth_kill_opens_level_up_menu() {
        let mut world = playing_world();

        for _ in 0..9 {
            world.enemies.push(touching_enemy(&world));
            world.resolve_collisions();
            assert_eq!(world.state(), GameState::Playing);
        }

        world.enemies.push(touching_enemy(&world));
        world.resolve_collisions();
        assert_eq!(world.state(), GameState::LevelUp);
        assert_eq!(world.enemies_defeated, 0); // Counter banked into the level
    }

    #[test]
    fn test_upgrade_confirm_resumes_play_and_levels() {
        let mut world = playing_world();
        for _ in 0..10 {
            world.enemies.push(touching_enemy(&world));
            world.resolve_collisions();
        }
        assert_eq!(world.state(), GameState::LevelUp);

        world.confirm_upgrade();
        assert_eq!(world.state(), GameState::Playing);
        assert_eq!(world.player.stats.level, 2);
    }

    #[test]
    fn test_invalid_upgrade_index_keeps_menu_open() {
        let mut world = playing_world();
        for _ in 0..10 {
            world.enemies.push(touching_enemy(&world));
            world.resolve_collisions();
        }

        world.choose_upgrade_by_index(7);
        assert_eq!(world.state(), GameState::LevelUp);

        world.choose_upgrade_by_index(1);
        assert_eq!(world.state(), GameState::Playing);
        assert_eq!(world.player.stats.attack, 15.0);
    }

    #[test]
    fn test_boss_spawns_after_delay_on_empty_field() {
        let mut world = playing_world();
        for _ in 0..10 {
            world.enemies.push(touching_enemy(&world));
            world.resolve_collisions();
        }
        world.confirm_upgrade();

        world.update(1000.0);
        assert!(world.boss.is_none());

        world.update(1100.0);
        assert!(world.boss.is_some());
    }

    #[test]
    fn test_boss_delay_waits_for_field_to_clear() {
        let mut world = playing_world();
        for _ in 0..10 {
            world.enemies.push(touching_enemy(&world));
            world.resolve_collisions();
        }
        world.confirm_upgrade();

        // A straggler far from the player keeps the field occupied
        let mut straggler = touching_enemy(&world);
        straggler.x = 700.0;
        world.enemies.push(straggler);

        // Well past the 2000 ms delay, but the field never emptied
        world.update(3000.0);
        assert!(world.boss.is_none());

        // Once clear, the full grace period must still elapse
        world.enemies.clear();
        world.update(1000.0);
        assert!(world.boss.is_none());

        world.update(1100.0);
        assert!(world.boss.is_some());
    }

    #[test]
    fn test_no_regular_spawns_while_boss_pending() {
        let mut world = playing_world();
        for _ in 0..10 {
            world.enemies.push(touching_enemy(&world));
            world.resolve_collisions();
        }
        world.confirm_upgrade();

        // Well past every possible spawn deadline
        for _ in 0..10 {
            world.update(900.0);
        }
        assert!(world.enemies.is_empty());
    }

    #[test]
    fn test_boss_defeat_restores_spawning_cycle() {
        let mut world = playing_world();
        for _ in 0..10 {
            world.enemies.push(touching_enemy(&world));
            world.resolve_collisions();
        }
        world.confirm_upgrade();
        world.update(2100.0);
        assert!(world.boss.is_some());

        // Flatten the boss in one resolved contact
        if let Some(boss) = &mut world.boss {
            boss.x = world.player.x;
            boss.y = world.player.y;
        }
        world.player.stats.attack = 10_000.0;
        world.resolve_collisions();

        assert!(world.boss.is_none());
        assert!(world.boss_defeated);
        // Celebration drop landed
        assert!(world.items.len() >= 3);
    }

    #[test]
    fn test_player_death_ends_game() {
        let mut world = playing_world();

        let mut enemy = touching_enemy(&world);
        enemy.damage = 10_000.0;
        world.enemies.push(enemy);

        world.update(1.0);
        assert_eq!(world.state(), GameState::GameOver);

        world.update(1000.0); // Terminal: nothing advances
        assert_eq!(world.state(), GameState::GameOver);
    }

    #[test]
    fn test_restart_rebuilds_session() {
        let mut world = playing_world();
        world.enemies.push(touching_enemy(&world));
        world.resolve_collisions();
        assert!(world.score() > 0);

        let mut killer = touching_enemy(&world);
        killer.damage = 10_000.0;
        world.enemies.push(killer);
        world.update(1.0);
        assert_eq!(world.state(), GameState::GameOver);

        world.restart();
        assert_eq!(world.state(), GameState::Playing);
        assert_eq!(world.score(), 0);
        assert_eq!(world.player.stats.health.current(), 100.0);
        assert!(world.enemies.is_empty() && world.boss.is_none());
    }

    #[test]
    fn test_item_pickup_emits_feedback_text() {
        let mut world = playing_world();
        let (px, py) = world.player.hitbox().center();
        world
            .items
            .push(Item::new(ItemKind::Hp, px, py, world.playfield));

        world.player.take_damage(50.0);
        world.resolve_collisions();

        assert!(world.items.is_empty());
        assert_eq!(world.floating_texts.len(), 1);
        assert_eq!(world.floating_texts[0].text, "+30 HP");
        assert_eq!(world.player.stats.health.current(), 80.0);
    }
}
