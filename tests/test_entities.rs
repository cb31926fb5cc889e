use grid_invaders::constants::*;
use grid_invaders::entities::*;

#[test]
fn level_is_ceiling_of_exp_over_five() {
    assert_eq!(level_for(0), 0);
    assert_eq!(level_for(1), 1);
    assert_eq!(level_for(5), 1);
    assert_eq!(level_for(6), 2);
    assert_eq!(level_for(10), 2);
    assert_eq!(level_for(11), 3);
}

#[test]
fn player_starts_at_level_one() {
    let p = Player::new(20, 19);
    assert_eq!(p.exp, 1);
    assert_eq!(p.x_velocity, 0);
    assert_eq!(p.level(), 1);
}

#[test]
fn player_level_tracks_exp_without_caching() {
    let mut p = Player::new(0, 0);
    assert_eq!(p.level(), 1);
    p.exp = 6;
    assert_eq!(p.level(), 2);
    p.exp = 16;
    assert_eq!(p.level(), 4);
}

#[test]
fn enemy_defaults() {
    let e = Enemy::new(4, 7);
    assert_eq!((e.x, e.y), (4, 7));
    assert_eq!(e.health, ENEMY_HEALTH);
    assert_eq!(e.defense, ENEMY_DEFENSE);
    assert_eq!(e.direction, 1);
    assert!(!e.dead);
}

#[test]
fn glyph_characters() {
    assert_eq!(Glyph::Player.as_char(), 'A');
    assert_eq!(Glyph::Enemy.as_char(), 'M');
    assert_eq!(Glyph::Bullet.as_char(), '|');
    assert_eq!(Glyph::Hit.as_char(), 'm');
    assert_eq!(Glyph::Empty.as_char(), ' ');
}

#[test]
fn erase_is_an_empty_draw() {
    assert_eq!(
        RenderCommand::erase(3, 4),
        RenderCommand::draw(3, 4, Glyph::Empty)
    );
}

#[test]
fn world_state_clone_is_independent() {
    let original = WorldState {
        player: Player::new(20, 19),
        enemies: Vec::new(),
        bullets: Vec::new(),
        score: 0,
        status: GameStatus::Playing,
        enemy_move_counter: 0,
        width: 40,
        height: 20,
    };
    let mut cloned = original.clone();

    cloned.player.x = 99;
    cloned.score = 999;
    cloned.enemies.push(Enemy::new(5, 5));

    assert_eq!(original.player.x, 20);
    assert_eq!(original.score, 0);
    assert!(original.enemies.is_empty());
}
