//! Pure game-logic functions.
//!
//! Every public function takes immutable references to the current state and
//! the `Config` and returns brand-new values. The only side effect is logging.

use log::{debug, info, trace};

use crate::config::Config;
use crate::entities::{Body, Enemy, Game, GameState, Level, Platform, Player};
use crate::input::TickInput;

// ── Constructors ─────────────────────────────────────────────────────────────

/// The state the program boots into: the standard level behind the menu.
pub fn init_game(cfg: &Config) -> Game {
    Game {
        level: Level::standard(cfg),
        player: Player::spawn(cfg),
        state: GameState::Menu,
    }
}

/// Discard the level and player and start playing a fresh copy.
pub fn reset(cfg: &Config) -> Game {
    info!("resetting level");
    Game {
        state: GameState::Playing,
        ..init_game(cfg)
    }
}

// ── Screen transitions (pure) ────────────────────────────────────────────────

/// Confirm: leave the menu. Ignored on every other screen.
pub fn start_game(game: &Game) -> Game {
    if game.state != GameState::Menu {
        return game.clone();
    }
    info!("starting game");
    Game {
        state: GameState::Playing,
        ..game.clone()
    }
}

/// Restart: only meaningful once the game has ended.
pub fn restart(game: &Game, cfg: &Config) -> Game {
    match game.state {
        GameState::GameOver | GameState::Win => reset(cfg),
        GameState::Menu | GameState::Playing => game.clone(),
    }
}

// ── Shared body physics ──────────────────────────────────────────────────────

pub fn apply_gravity(body: &Body, cfg: &Config) -> Body {
    Body {
        vy: body.vy + cfg.gravity,
        ..body.clone()
    }
}

/// Push an already-moved body out of every platform it overlaps, in platform
/// order. With `bounce`, each contact also reverses vx.
fn clamp_horizontal(mut body: Body, platforms: &[Platform], bounce: bool) -> Body {
    for platform in platforms {
        if !body.rect.overlaps(&platform.rect) {
            continue;
        }
        if body.vx > 0.0 {
            body.rect.set_right(platform.rect.left());
        } else if body.vx < 0.0 {
            body.rect.set_left(platform.rect.right());
        }
        if bounce {
            body.vx = -body.vx;
        }
    }
    body
}

/// Apply vy, then land on or bump against platforms. Recomputes `on_ground`.
fn move_vertical(mut body: Body, platforms: &[Platform]) -> Body {
    body.rect.y += body.vy;
    body.on_ground = false;
    for platform in platforms {
        if !body.rect.overlaps(&platform.rect) {
            continue;
        }
        if body.vy > 0.0 {
            body.rect.set_bottom(platform.rect.top());
            body.vy = 0.0;
            body.on_ground = true;
        } else if body.vy < 0.0 {
            body.rect.set_top(platform.rect.bottom());
            body.vy = 0.0;
        }
    }
    body
}

// ── Player ───────────────────────────────────────────────────────────────────

/// Turn the held keys into velocity. Jumping requires standing on something.
pub fn handle_input(player: &Player, input: &TickInput, cfg: &Config) -> Player {
    let mut body = player.body.clone();
    body.vx = 0.0;
    if input.left {
        body.vx = -cfg.player_speed;
    }
    if input.right {
        body.vx = cfg.player_speed;
    }
    if input.jump && body.on_ground {
        body.vy = cfg.jump_strength;
        body.on_ground = false;
    }
    Player {
        body,
        ..player.clone()
    }
}

/// Lose one health point unless still invincible from the previous hit.
pub fn take_damage(player: &Player, cfg: &Config) -> Player {
    if player.invincibility > 0 {
        return player.clone();
    }
    let health = player.health.saturating_sub(1);
    debug!("player hit, health {} -> {}", player.health, health);
    Player {
        health,
        invincibility: cfg.invincibility_ticks,
        ..player.clone()
    }
}

/// One tick of player movement: timer, gravity, then x and y passes.
pub fn update_player(player: &Player, platforms: &[Platform], cfg: &Config) -> Player {
    let mut body = apply_gravity(&player.body, cfg);

    body.rect.x += body.vx;
    let body = clamp_horizontal(body, platforms, false);
    let body = move_vertical(body, platforms);

    Player {
        body,
        invincibility: player.invincibility.saturating_sub(1),
        ..player.clone()
    }
}

// ── Enemies ──────────────────────────────────────────────────────────────────

/// One tick of patrol: reflect at the patrol edges, then off platform sides.
pub fn update_enemy(enemy: &Enemy, platforms: &[Platform], cfg: &Config) -> Enemy {
    let mut body = apply_gravity(&enemy.body, cfg);

    body.rect.x += body.vx;
    if body.rect.left() < enemy.patrol_min || body.rect.right() > enemy.patrol_max {
        body.vx = -body.vx;
        trace!("enemy turned at x={}", body.rect.x);
    }
    let body = clamp_horizontal(body, platforms, true);
    let body = move_vertical(body, platforms);

    Enemy {
        body,
        ..enemy.clone()
    }
}

// ── Collision: player ↔ enemies ──────────────────────────────────────────────

/// Resolve every contact in enemy order. A falling player that only grazes
/// the enemy top stomps it; any other contact hurts and knocks the player
/// away from the enemy's centre.
///
/// Returns the updated player and the surviving enemies. Removals are
/// collected by index and applied after the scan.
pub fn resolve_enemy_collisions(
    player: &Player,
    enemies: &[Enemy],
    cfg: &Config,
) -> (Player, Vec<Enemy>) {
    let mut player = player.clone();
    let mut defeated: Vec<usize> = Vec::new();

    for (i, enemy) in enemies.iter().enumerate() {
        if !player.body.rect.overlaps(&enemy.body.rect) {
            continue;
        }

        let penetration = player.body.rect.bottom() - enemy.body.rect.top();
        if player.body.vy > 0.0 && penetration < cfg.stomp_tolerance {
            defeated.push(i);
            player.body.vy = cfg.stomp_bounce();
            player.score += cfg.stomp_score;
            debug!("enemy {} stomped, score {}", i, player.score);
        } else {
            let push = if player.body.rect.center_x() < enemy.body.rect.center_x() {
                -cfg.knockback
            } else {
                cfg.knockback
            };
            player = take_damage(&player, cfg);
            player.body.rect.x += push;
        }
    }

    let survivors = enemies
        .iter()
        .enumerate()
        .filter(|(i, _)| !defeated.contains(i))
        .map(|(_, e)| e.clone())
        .collect();

    (player, survivors)
}

// ── Win / lose ───────────────────────────────────────────────────────────────

/// Screen to show after this tick. Reaching the goal beats losing on the
/// same tick.
pub fn outcome(player: &Player, level: &Level, cfg: &Config) -> GameState {
    let mut state = GameState::Playing;
    if player.health == 0 || player.body.rect.top() > cfg.screen_height {
        state = GameState::GameOver;
    }
    if player.body.rect.overlaps(&level.goal) {
        state = GameState::Win;
    }
    state
}

// ── Per-frame tick ───────────────────────────────────────────────────────────

/// Advance the simulation by one tick. Screens other than `Playing` are
/// frozen and come back unchanged.
pub fn tick(game: &Game, input: &TickInput, cfg: &Config) -> Game {
    if game.state != GameState::Playing {
        return game.clone();
    }
    let platforms = &game.level.platforms;

    // ── 1. Player ────────────────────────────────────────────────────────────
    let player = handle_input(&game.player, input, cfg);
    let player = update_player(&player, platforms, cfg);

    // ── 2. Enemies ───────────────────────────────────────────────────────────
    let enemies: Vec<Enemy> = game
        .level
        .enemies
        .iter()
        .map(|e| update_enemy(e, platforms, cfg))
        .collect();

    // ── 3. Contacts ──────────────────────────────────────────────────────────
    let (player, enemies) = resolve_enemy_collisions(&player, &enemies, cfg);

    // ── 4. Status ────────────────────────────────────────────────────────────
    let level = Level {
        platforms: platforms.clone(),
        enemies,
        goal: game.level.goal,
    };
    let state = outcome(&player, &level, cfg);
    match state {
        GameState::GameOver => info!("game over, score {}", player.score),
        GameState::Win => info!("level cleared, score {}", player.score),
        GameState::Menu | GameState::Playing => {}
    }

    Game {
        level,
        player,
        state,
    }
}
