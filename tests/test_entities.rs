use platformer::config::Config;
use platformer::entities::*;

// ── Rect ──────────────────────────────────────────────────────────────────────

#[test]
fn rect_edges() {
    let r = Rect::new(10.0, 20.0, 40.0, 50.0);
    assert_eq!(r.left(), 10.0);
    assert_eq!(r.right(), 50.0);
    assert_eq!(r.top(), 20.0);
    assert_eq!(r.bottom(), 70.0);
    assert_eq!(r.center_x(), 30.0);
}

#[test]
fn rect_setters_keep_size() {
    let mut r = Rect::new(0.0, 0.0, 40.0, 50.0);
    r.set_right(100.0);
    assert_eq!(r.x, 60.0);
    r.set_bottom(500.0);
    assert_eq!(r.y, 450.0);
    r.set_left(5.0);
    r.set_top(6.0);
    assert_eq!((r.x, r.y, r.width, r.height), (5.0, 6.0, 40.0, 50.0));
}

#[test]
fn rect_overlap_is_strict() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    // Sharing an edge is not an overlap
    assert!(!a.overlaps(&Rect::new(10.0, 0.0, 10.0, 10.0)));
    assert!(!a.overlaps(&Rect::new(0.0, 10.0, 10.0, 10.0)));
    // Any positive intersection is
    assert!(a.overlaps(&Rect::new(9.5, 9.5, 10.0, 10.0)));
    assert!(a.overlaps(&Rect::new(2.0, 2.0, 1.0, 1.0)));
    // Symmetric
    let b = Rect::new(-5.0, 5.0, 6.0, 20.0);
    assert_eq!(a.overlaps(&b), b.overlaps(&a));
}

// ── Constructors ──────────────────────────────────────────────────────────────

#[test]
fn player_spawn_defaults() {
    let cfg = Config::default();
    let p = Player::spawn(&cfg);
    assert_eq!(p.body.rect, Rect::new(60.0, 300.0, 40.0, 50.0));
    assert_eq!(p.health, 3);
    assert_eq!(p.invincibility, 0);
    assert_eq!(p.score, 0);
    assert_eq!((p.body.vx, p.body.vy), (0.0, 0.0));
    assert!(!p.body.on_ground);
}

#[test]
fn enemy_starts_moving_right() {
    let cfg = Config::default();
    let e = Enemy::new(180.0, 380.0, 120.0, 300.0, &cfg);
    assert_eq!(e.body.vx, 2.0);
    assert_eq!(e.body.rect, Rect::new(180.0, 380.0, 40.0, 40.0));
    assert_eq!((e.patrol_min, e.patrol_max), (120.0, 300.0));
}

#[test]
fn standard_level_layout() {
    let cfg = Config::default();
    let level = Level::standard(&cfg);

    let platforms: Vec<Rect> = level.platforms.iter().map(|p| p.rect).collect();
    assert_eq!(
        platforms,
        vec![
            Rect::new(0.0, 500.0, 960.0, 40.0),
            Rect::new(120.0, 420.0, 180.0, 20.0),
            Rect::new(380.0, 350.0, 180.0, 20.0),
            Rect::new(650.0, 280.0, 200.0, 20.0),
            Rect::new(760.0, 430.0, 140.0, 20.0),
        ]
    );
    assert!(level.platforms.iter().all(|p| p.color == PLATFORM_COLOR));

    assert_eq!(
        level.enemies,
        vec![
            Enemy::new(180.0, 380.0, 120.0, 300.0, &cfg),
            Enemy::new(430.0, 310.0, 380.0, 560.0, &cfg),
            Enemy::new(700.0, 240.0, 650.0, 850.0, &cfg),
        ]
    );
    assert_eq!(level.goal, Rect::new(900.0, 220.0, 30.0, 280.0));
}

#[test]
fn standard_enemies_rest_on_their_platforms() {
    let cfg = Config::default();
    let level = Level::standard(&cfg);
    // Each enemy starts touching (not overlapping) the platform under it
    for (enemy, platform) in level.enemies.iter().zip(&level.platforms[1..4]) {
        assert_eq!(enemy.body.rect.bottom(), platform.rect.top());
        assert_eq!(enemy.patrol_min, platform.rect.left());
        assert_eq!(enemy.patrol_max, platform.rect.right());
    }
}

#[test]
fn standard_level_is_identical_every_time() {
    let cfg = Config::default();
    assert_eq!(Level::standard(&cfg), Level::standard(&cfg));
}

#[test]
fn game_clone_is_independent() {
    let cfg = Config::default();
    let original = Game {
        level: Level::standard(&cfg),
        player: Player::spawn(&cfg),
        state: GameState::Playing,
    };
    let mut cloned = original.clone();

    // Mutating the clone must not affect the original
    cloned.player.body.rect.x = 99.0;
    cloned.player.score = 999;
    cloned.level.enemies.clear();

    assert_eq!(original.player.body.rect.x, 60.0);
    assert_eq!(original.player.score, 0);
    assert_eq!(original.level.enemies.len(), 3);
}
