//! Tuning constants for one run of the game.
//!
//! Nothing in the simulation reads a global; every function that needs a
//! constant takes a `&Config`.

use std::time::Duration;

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    // ── World ────────────────────────────────────────────────────────────────
    pub screen_width: f32,
    pub screen_height: f32,
    pub fps: u32,

    // ── Physics ──────────────────────────────────────────────────────────────
    /// Added to vy every tick. No terminal velocity.
    pub gravity: f32,
    pub player_speed: f32,
    /// Negative: up is -y.
    pub jump_strength: f32,

    // ── Player ───────────────────────────────────────────────────────────────
    pub max_health: u32,
    /// Ticks of damage immunity after a hit.
    pub invincibility_ticks: u32,
    pub player_spawn: (f32, f32),
    pub player_size: (f32, f32),

    // ── Enemies ──────────────────────────────────────────────────────────────
    pub enemy_speed: f32,
    pub enemy_size: (f32, f32),

    // ── Player ↔ enemy contact ───────────────────────────────────────────────
    /// A falling player whose bottom is less than this far below the enemy
    /// top stomps it instead of getting hurt.
    pub stomp_tolerance: f32,
    /// Fraction of `jump_strength` applied as the rebound after a stomp.
    pub stomp_bounce_factor: f32,
    pub stomp_score: u32,
    pub knockback: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            screen_width: 960.0,
            screen_height: 540.0,
            fps: 60,

            gravity: 0.8,
            player_speed: 5.0,
            jump_strength: -15.0,

            max_health: 3,
            invincibility_ticks: 60,
            player_spawn: (60.0, 300.0),
            player_size: (40.0, 50.0),

            enemy_speed: 2.0,
            enemy_size: (40.0, 40.0),

            stomp_tolerance: 18.0,
            stomp_bounce_factor: 0.6,
            stomp_score: 100,
            knockback: 25.0,
        }
    }
}

impl Config {
    /// Length of one tick.
    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs(1) / self.fps.max(1)
    }

    /// Vertical velocity given to the player after a stomp.
    pub fn stomp_bounce(&self) -> f32 {
        self.jump_strength * self.stomp_bounce_factor
    }
}
