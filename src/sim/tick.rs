//! Fixed timestep simulation tick
//!
//! One call advances a session by exactly one tick. Input is a snapshot polled
//! by the caller beforehand; nothing here blocks or reads the clock.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::bodies_collide;
use super::events::GameEvent;
use super::explosion::ExplosionSize;
use super::projectile::Side;
use super::state::{EndReason, GameState, SessionPhase};
use crate::consts::*;
use crate::highscores::ScoreLedger;

/// Input snapshot for a single tick (deterministic)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TickInput {
    /// Arrow keys / WASD
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    /// Spacebar
    pub fire: bool,
    /// Backspace (leave to menu)
    pub exit: bool,
    /// P key or pause button (toggles)
    pub pause: bool,
    /// Play button on the pause menu
    pub resume: bool,
    /// Audio and display toggles; consumed by the host, not the simulation
    pub mute: bool,
    pub volume_up: bool,
    pub volume_down: bool,
    pub fullscreen: bool,
    /// Pointer position in screen space, if known
    pub pointer: Option<Vec2>,
    /// Left mouse button
    pub primary: bool,
    /// Right mouse button
    pub secondary: bool,
}

/// Advance the session by one fixed timestep.
///
/// Finished runs are appended to `ledger` exactly once, on the tick that ends
/// them.
pub fn tick(state: &mut GameState, input: &TickInput, ledger: &mut ScoreLedger) {
    state.fx.events.clear();

    match state.phase {
        SessionPhase::Ended { .. } => {
            state.linger_ticks = state.linger_ticks.saturating_sub(1);
            return;
        }
        SessionPhase::Paused => {
            if input.exit {
                state.end(EndReason::Quit, ledger);
                return;
            }
            if input.pause || input.resume {
                state.phase = SessionPhase::Running;
                state.fx.emit(GameEvent::Resumed);
                log::debug!("Resumed at tick {}", state.time_ticks);
            } else {
                return;
            }
        }
        SessionPhase::Running => {
            if input.pause {
                state.phase = SessionPhase::Paused;
                state.fx.emit(GameEvent::Paused);
                log::debug!("Paused at tick {}", state.time_ticks);
                return;
            }
        }
    }

    state.time_ticks += 1;

    // Boss banner: the world waits
    if state.hold_ticks > 0 {
        state.hold_ticks -= 1;
        return;
    }

    // 1. Health and lives
    if state.lives == 0 {
        state.end(EndReason::Defeated, ledger);
        return;
    }
    if state.player.ship.health <= 0 {
        state.lives -= 1;
        state.fx.emit(GameEvent::LifeLost);
        if state.lives == 0 {
            state.end(EndReason::Defeated, ledger);
            return;
        }
        state.player.refill_health();
        log::debug!("Life lost, {} remaining", state.lives);
    }

    // 2. Boss entry and victory
    if state.player.level == BOSS_LEVEL && state.boss_entry_pending {
        state.boss_entry_pending = false;
        state.fx.emit(GameEvent::BossIncoming);
        log::info!("Boss level reached");
        if state.config.boss_entry_hold_ticks > 0 {
            state.hold_ticks = state.config.boss_entry_hold_ticks;
            return;
        }
    } else if state.player.level > BOSS_LEVEL {
        state.end(EndReason::Won, ledger);
        return;
    }

    // 3. Next wave
    if state.enemies.is_empty() {
        state.spawn_wave();
    }

    // 4. Player
    let screen = state.screen();
    state
        .player
        .advance(input, &state.sprites, screen, &mut state.fx);
    if !state.player.alive {
        state.end(EndReason::Quit, ledger);
        return;
    }

    // 5. Enemies
    advance_enemies(state);

    // 6. Player bolts
    state.player.resolve_laser_hits(
        &mut state.enemies,
        &state.sprites,
        -state.config.laser_speed,
        screen.y,
        &mut state.fx,
    );

    // 7. Explosions
    state.fx.advance_explosions();
}

/// Move every enemy, let it shoot, and resolve rams and escapes
fn advance_enemies(state: &mut GameState) {
    let screen_height = state.config.screen_height;
    let fire_roll = 2 * state.config.tick_rate;

    let mut i = 0;
    while i < state.enemies.len() {
        let enemy = &mut state.enemies[i];
        enemy.descend(state.config.enemy_speed);
        enemy.resolve_laser_hits(
            &mut state.player,
            &state.sprites,
            state.config.laser_speed,
            screen_height,
            &mut state.fx,
        );

        if state.rng.random_range(0..fire_roll) == 1 && enemy.fire() {
            state.fx.emit(GameEvent::Fired(Side::Enemy));
        }

        if bodies_collide(&state.sprites, &*enemy, &state.player) {
            let player = &mut state.player;
            player.score += KILL_SCORE;
            player.kills += 1;

            if enemy.tier().is_boss() {
                player.ship.health -= BOSS_RAM_DAMAGE;
                if player.boss.strike_ram() {
                    state.fx.explode(player.ship.pos, ExplosionSize::Boss);
                    state.fx.emit(GameEvent::BossDefeated);
                    log::info!("Boss destroyed by ramming");
                    state.enemies.remove(i);
                    continue;
                }
                state.fx.explode(player.ship.pos, ExplosionSize::Normal);
            } else {
                player.ship.health -= RAM_DAMAGE;
                state.fx.explode(enemy.ship.pos, ExplosionSize::Normal);
                state.enemies.remove(i);
                continue;
            }
        } else if enemy.has_escaped(&state.sprites, screen_height) {
            state.lives = state.lives.saturating_sub(1);
            state.fx.emit(GameEvent::LifeLost);
            log::debug!("{:?} slipped past, {} lives left", enemy.tier(), state.lives);
            state.enemies.remove(i);
            continue;
        }

        i += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::enemy::{Enemy, Tier};
    use crate::sim::player::ControlMode;
    use crate::sim::ship::Ship;
    use crate::sim::sprite::{SpriteKind, SpriteSet};
    use crate::sim::state::SessionConfig;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn quick_config() -> SessionConfig {
        SessionConfig {
            boss_entry_hold_ticks: 0,
            end_linger_ticks: 0,
            ..Default::default()
        }
    }

    fn session(seed: u64) -> GameState {
        GameState::with_config(seed, ControlMode::Keyboard, quick_config(), SpriteSet::default())
    }

    fn pause() -> TickInput {
        TickInput {
            pause: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_first_tick_spawns_level_one() {
        let mut ledger = ScoreLedger::new();
        let mut state = session(12345);
        tick(&mut state, &TickInput::default(), &mut ledger);

        assert_eq!(state.player.level, 1);
        assert_eq!(state.enemies.len(), 4);
        assert!(state.events().contains(&GameEvent::LevelStarted(1)));
        assert_eq!(state.phase, SessionPhase::Running);
    }

    #[test]
    fn test_wave_growth() {
        let mut ledger = ScoreLedger::new();
        let mut state = session(5);
        let mut counts = Vec::new();
        for _ in 0..4 {
            state.enemies.clear();
            tick(&mut state, &TickInput::default(), &mut ledger);
            counts.push(state.enemies.len());
        }
        assert_eq!(counts, vec![4, 8, 12, 16]);
        assert_eq!(state.player.level, 4);
    }

    #[test]
    fn test_life_lost_refills_health() {
        let mut ledger = ScoreLedger::new();
        let mut state = session(9);
        state.player.ship.health = 0;
        tick(&mut state, &TickInput::default(), &mut ledger);

        assert_eq!(state.lives, STARTING_LIVES - 1);
        assert_eq!(state.player.ship.health, state.player.max_health);
        assert_eq!(state.phase, SessionPhase::Running);
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_last_life_ends_run() {
        let mut ledger = ScoreLedger::new();
        let mut state = session(9);
        state.lives = 1;
        state.player.ship.health = 0;
        tick(&mut state, &TickInput::default(), &mut ledger);

        assert_eq!(state.phase, SessionPhase::Ended { won: false });
        assert_eq!(ledger.len(), 1);
        assert!(!ledger.records()[0].won);

        // Terminal: further ticks record nothing
        for _ in 0..10 {
            tick(&mut state, &TickInput::default(), &mut ledger);
        }
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_win_after_boss_level() {
        let mut ledger = ScoreLedger::new();
        let mut state = session(3);
        state.player.level = BOSS_LEVEL + 1;
        state.player.score = 4200;
        tick(&mut state, &TickInput::default(), &mut ledger);

        assert_eq!(state.phase, SessionPhase::Ended { won: true });
        assert_eq!(ledger.len(), 1);
        let record = ledger.records()[0];
        assert!(record.won);
        assert_eq!(record.level, BOSS_LEVEL + 1);
        assert_eq!(record.score, 4200);
    }

    #[test]
    fn test_boss_entry_holds_world() {
        let mut ledger = ScoreLedger::new();
        let config = SessionConfig {
            boss_entry_hold_ticks: 3,
            ..quick_config()
        };
        let mut state = GameState::with_config(3, ControlMode::Keyboard, config, SpriteSet::default());
        state.player.level = BOSS_LEVEL;
        state.enemies.push(Enemy::new(Vec2::new(300.0, -400.0), Tier::Boss));

        tick(&mut state, &TickInput::default(), &mut ledger);
        assert!(state.events().contains(&GameEvent::BossIncoming));
        assert_eq!(state.hold_ticks, 3);

        for _ in 0..3 {
            tick(&mut state, &TickInput::default(), &mut ledger);
            assert_eq!(state.enemies[0].ship.pos.y, -400.0);
        }
        assert_eq!(state.hold_ticks, 0);

        // Banner shown once; the boss moves again
        tick(&mut state, &TickInput::default(), &mut ledger);
        assert_eq!(state.enemies[0].ship.pos.y, -399.0);
        assert!(!state.events().contains(&GameEvent::BossIncoming));
    }

    #[test]
    fn test_pause_freezes_world() {
        let mut ledger = ScoreLedger::new();
        let mut state = session(77);
        tick(&mut state, &TickInput::default(), &mut ledger);

        tick(&mut state, &pause(), &mut ledger);
        assert_eq!(state.phase, SessionPhase::Paused);
        let frozen = state.clone();

        let busy = TickInput {
            left: true,
            fire: true,
            ..Default::default()
        };
        for _ in 0..20 {
            tick(&mut state, &busy, &mut ledger);
        }
        assert_eq!(state.enemies, frozen.enemies);
        assert_eq!(state.player, frozen.player);
        assert_eq!(state.time_ticks, frozen.time_ticks);

        tick(&mut state, &pause(), &mut ledger);
        assert_eq!(state.phase, SessionPhase::Running);
        assert!(state.events().contains(&GameEvent::Resumed));
        assert_eq!(state.time_ticks, frozen.time_ticks + 1);
    }

    #[test]
    fn test_resume_button() {
        let mut ledger = ScoreLedger::new();
        let mut state = session(77);
        tick(&mut state, &pause(), &mut ledger);
        let resume = TickInput {
            resume: true,
            ..Default::default()
        };
        tick(&mut state, &resume, &mut ledger);
        assert_eq!(state.phase, SessionPhase::Running);
    }

    #[test]
    fn test_exit_from_pause_records_once() {
        let mut ledger = ScoreLedger::new();
        let mut state = session(77);
        tick(&mut state, &TickInput::default(), &mut ledger);
        tick(&mut state, &pause(), &mut ledger);

        let exit = TickInput {
            exit: true,
            ..Default::default()
        };
        tick(&mut state, &exit, &mut ledger);
        assert_eq!(state.phase, SessionPhase::Ended { won: false });
        assert!(state.is_finished());
        assert!(state.events().contains(&GameEvent::ReturnedToMenu));
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.records()[0].level, 1);
    }

    #[test]
    fn test_self_exit_while_running() {
        let mut ledger = ScoreLedger::new();
        let mut state = session(77);
        let exit = TickInput {
            exit: true,
            ..Default::default()
        };
        tick(&mut state, &exit, &mut ledger);
        assert_eq!(state.end_reason, Some(EndReason::Quit));
        assert!(!state.player.alive);
        // Exits before scoring anything are still recorded
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_ram_regular_enemy() {
        let mut ledger = ScoreLedger::new();
        let mut state = session(1);
        let at = state.player.ship.pos;
        state.enemies.push(Enemy::new(at - Vec2::new(0.0, 1.0), Tier::Hard));

        tick(&mut state, &TickInput::default(), &mut ledger);

        assert!(state.enemies.is_empty());
        assert_eq!(state.player.score, KILL_SCORE);
        assert_eq!(state.player.kills, 1);
        assert_eq!(state.player.ship.health, PLAYER_MAX_HEALTH - RAM_DAMAGE);
        assert_eq!(state.fx.explosions.len(), 1);
    }

    #[test]
    fn test_ram_boss() {
        let mut ledger = ScoreLedger::new();
        let mut state = session(1);
        state.player.level = BOSS_LEVEL;
        state.boss_entry_pending = false;
        let at = state.player.ship.pos;
        state.enemies.push(Enemy::new(at - Vec2::new(0.0, 1.0), Tier::Boss));

        tick(&mut state, &TickInput::default(), &mut ledger);

        assert_eq!(state.enemies.len(), 1);
        assert_eq!(state.player.ship.health, PLAYER_MAX_HEALTH - BOSS_RAM_DAMAGE);
        assert_eq!(state.player.boss.ram, BOSS_HEALTH - BOSS_RAM_STEP);
        assert_eq!(state.player.score, KILL_SCORE);

        // Next tick turns the depleted hull into a lost life
        tick(&mut state, &TickInput::default(), &mut ledger);
        assert_eq!(state.lives, STARTING_LIVES - 1);
    }

    #[test]
    fn test_escape_costs_a_life() {
        let mut ledger = ScoreLedger::new();
        let mut state = session(1);
        let sprites = SpriteSet::default();
        let half = sprites.height(Tier::Easy.ship_sprite()) / 2.0;
        // Far from the player horizontally, one step from the bottom edge
        state.enemies.push(Enemy::new(Vec2::new(60.0, SCREEN_HEIGHT - half), Tier::Easy));
        state.enemies.push(Enemy::new(Vec2::new(600.0, -800.0), Tier::Easy));

        tick(&mut state, &TickInput::default(), &mut ledger);

        assert_eq!(state.lives, STARTING_LIVES - 1);
        assert_eq!(state.enemies.len(), 1);
        assert_eq!(state.player.ship.health, PLAYER_MAX_HEALTH);
    }

    #[test]
    fn test_determinism() {
        let mut ledger1 = ScoreLedger::new();
        let mut ledger2 = ScoreLedger::new();
        let mut state1 = session(99999);
        let mut state2 = session(99999);

        let inputs = [
            TickInput {
                fire: true,
                left: true,
                ..Default::default()
            },
            TickInput {
                up: true,
                ..Default::default()
            },
            TickInput::default(),
        ];

        for step in 0..2000 {
            let input = &inputs[step % inputs.len()];
            tick(&mut state1, input, &mut ledger1);
            tick(&mut state2, input, &mut ledger2);
        }

        assert_eq!(state1, state2);
        assert_eq!(ledger1, ledger2);
    }

    #[test]
    fn test_boss_falls_to_repeated_rams() {
        let mut ledger = ScoreLedger::new();
        let mut state = session(1);
        state.player.level = BOSS_LEVEL;
        state.boss_entry_pending = false;
        let at = state.player.ship.pos;
        state.enemies.push(Enemy::new(at, Tier::Boss));

        let rams = BOSS_HEALTH / BOSS_RAM_STEP;
        for ram in 1..=rams {
            // Keep the hulls overlapping and the player alive between rams
            state.enemies[0].ship.pos = at - Vec2::new(0.0, state.config.enemy_speed);
            state.player.refill_health();
            tick(&mut state, &TickInput::default(), &mut ledger);

            if ram < rams {
                assert_eq!(state.enemies.len(), 1, "boss fell early at ram {}", ram);
                assert!(!state.events().contains(&GameEvent::BossDefeated));
            }
        }

        assert!(state.enemies.is_empty());
        assert!(state.events().contains(&GameEvent::BossDefeated));
        let last = state.fx.explosions.last().map(|e| (e.size, e.pos));
        assert_eq!(last, Some((ExplosionSize::Boss, state.player.ship.pos)));
        assert_eq!(state.player.score, rams as u64 * KILL_SCORE);
        assert_eq!(state.player.kills, rams as u32);
        assert_eq!(state.player.boss.ram, BOSS_HEALTH);
        assert_eq!(state.lives, STARTING_LIVES);
    }

    #[test]
    fn test_enemy_fire_roll() {
        let seed = 4242;
        let ticks = 3000;
        let config = SessionConfig {
            enemy_speed: 0.0,
            ..quick_config()
        };
        let mut state =
            GameState::with_config(seed, ControlMode::Keyboard, config, SpriteSet::default());
        let mut ledger = ScoreLedger::new();
        // Far from the player's column so no bolt ever lands
        state.enemies.push(Enemy::new(Vec2::new(100.0, 100.0), Tier::Easy));
        state.enemies.push(Enemy::new(Vec2::new(600.0, -1000.0), Tier::Easy));

        // Replay the session's RNG: one roll per enemy per tick, in list order
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut gun = Ship::new(Vec2::ZERO, 100, SpriteKind::EasyShip, SpriteKind::RedLaser);
        let roll_range = 2 * state.config.tick_rate;
        let mut expected = 0;
        let mut fired = 0;
        for _ in 0..ticks {
            gun.update_cooldown();
            if rng.random_range(0..roll_range) == 1 && gun.fire(Side::Enemy) {
                expected += 1;
            }
            let _hidden_roll = rng.random_range(0..roll_range);

            tick(&mut state, &TickInput::default(), &mut ledger);
            fired += state
                .events()
                .iter()
                .filter(|e| **e == GameEvent::Fired(Side::Enemy))
                .count();
        }

        assert!(expected > 0);
        assert_eq!(fired, expected);
        assert_eq!(state.enemies.len(), 2);
        assert!(state.enemies[1].ship.projectiles.is_empty());
        assert_eq!(state.player.ship.health, PLAYER_MAX_HEALTH);
    }
}
