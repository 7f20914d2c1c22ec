//! All game entity types: pure data, no simulation.
//!
//! Constructors and geometry accessors live here; everything that advances
//! the world lives in `compute`.

use crate::config::Config;

// ── Geometry ──────────────────────────────────────────────────────────────────

/// Axis-aligned rectangle in world units. `y` grows downward.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        debug_assert!(width > 0.0 && height > 0.0, "rect must have a positive size");
        Self { x, y, width, height }
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    pub fn set_left(&mut self, left: f32) {
        self.x = left;
    }

    pub fn set_right(&mut self, right: f32) {
        self.x = right - self.width;
    }

    pub fn set_top(&mut self, top: f32) {
        self.y = top;
    }

    pub fn set_bottom(&mut self, bottom: f32) {
        self.y = bottom - self.height;
    }

    /// Strict overlap: rectangles that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

/// 24-bit draw colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

pub const PLATFORM_COLOR: Rgb = Rgb(90, 64, 40);

// ── Bodies ────────────────────────────────────────────────────────────────────

/// State shared by every moving body.
#[derive(Clone, Debug, PartialEq)]
pub struct Body {
    pub rect: Rect,
    pub vx: f32,
    pub vy: f32,
    /// Set by the vertical collision pass of the current tick only.
    pub on_ground: bool,
}

impl Body {
    pub fn at(x: f32, y: f32, (width, height): (f32, f32)) -> Self {
        Self {
            rect: Rect::new(x, y, width, height),
            vx: 0.0,
            vy: 0.0,
            on_ground: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub body: Body,
    pub health: u32,
    /// Remaining ticks during which damage is ignored.
    pub invincibility: u32,
    pub score: u32,
}

impl Player {
    /// A fresh player at the configured spawn point.
    pub fn spawn(cfg: &Config) -> Self {
        let (x, y) = cfg.player_spawn;
        Self {
            body: Body::at(x, y, cfg.player_size),
            health: cfg.max_health,
            invincibility: 0,
            score: 0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub body: Body,
    /// The body's left edge reflects off `patrol_min`, its right edge off
    /// `patrol_max`.
    pub patrol_min: f32,
    pub patrol_max: f32,
}

impl Enemy {
    /// A patrolling enemy that starts moving right.
    pub fn new(x: f32, y: f32, patrol_min: f32, patrol_max: f32, cfg: &Config) -> Self {
        let mut body = Body::at(x, y, cfg.enemy_size);
        body.vx = cfg.enemy_speed;
        Self { body, patrol_min, patrol_max }
    }
}

// ── Level ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Platform {
    pub rect: Rect,
    pub color: Rgb,
}

impl Platform {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            rect: Rect::new(x, y, width, height),
            color: PLATFORM_COLOR,
        }
    }
}

/// One playthrough's geometry. Platforms are fixed and in collision order;
/// enemies only ever shrink.
#[derive(Clone, Debug, PartialEq)]
pub struct Level {
    pub platforms: Vec<Platform>,
    pub enemies: Vec<Enemy>,
    pub goal: Rect,
}

impl Level {
    /// The hardcoded layout every game starts from.
    pub fn standard(cfg: &Config) -> Self {
        Self {
            platforms: vec![
                Platform::new(0.0, 500.0, 960.0, 40.0),
                Platform::new(120.0, 420.0, 180.0, 20.0),
                Platform::new(380.0, 350.0, 180.0, 20.0),
                Platform::new(650.0, 280.0, 200.0, 20.0),
                Platform::new(760.0, 430.0, 140.0, 20.0),
            ],
            enemies: vec![
                Enemy::new(180.0, 380.0, 120.0, 300.0, cfg),
                Enemy::new(430.0, 310.0, 380.0, 560.0, cfg),
                Enemy::new(700.0, 240.0, 650.0, 850.0, cfg),
            ],
            goal: Rect::new(900.0, 220.0, 30.0, 280.0),
        }
    }
}

// ── Master game state ─────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameState {
    Menu,
    Playing,
    GameOver,
    Win,
}

/// Everything the frame loop owns. Cloneable so the pure update functions
/// can return a new copy without mutating the original.
#[derive(Clone, Debug, PartialEq)]
pub struct Game {
    pub level: Level,
    pub player: Player,
    pub state: GameState,
}
