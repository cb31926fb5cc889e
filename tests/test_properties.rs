use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use grid_invaders::compute::movement::{move_bullets, move_player, wrap_x};
use grid_invaders::compute::{init_state, tick};
use grid_invaders::entities::{level_for, Bullet, Key};

fn any_key() -> impl Strategy<Value = Key> {
    prop_oneof![
        Just(Key::Left),
        Just(Key::Right),
        Just(Key::Fire),
        Just(Key::Quit),
        Just(Key::Other),
    ]
}

proptest! {
    #[test]
    fn level_is_ceiling_division(exp in 0u32..100_000) {
        let expected = (exp as f64 / 5.0).ceil() as u32;
        prop_assert_eq!(level_for(exp), expected);
    }

    #[test]
    fn level_never_decreases(exp in 0u32..100_000, gain in 0u32..100) {
        prop_assert!(level_for(exp + gain) >= level_for(exp));
    }

    #[test]
    fn wrap_stays_on_grid(width in 1u16..200, x_frac in 0.0f64..1.0, velocity in -1i32..=1) {
        let x = (x_frac * width as f64) as i32;
        let wrapped = wrap_x(x, velocity, width);
        prop_assert!((0..width as i32).contains(&wrapped));
    }

    #[test]
    fn player_stays_on_grid(x in 0i32..40, velocity in -1i32..=1, ticks in 1usize..100) {
        let mut s = init_state(40, 20);
        s.player.x = x;
        for _ in 0..ticks {
            s.player.x_velocity = velocity;
            s = move_player(&s, &mut Vec::new());
            prop_assert!((0..40).contains(&s.player.x));
        }
    }

    #[test]
    fn bullet_climbs_until_it_leaves_the_top(x in 0i32..40, y in 0i32..20) {
        let mut s = init_state(40, 20);
        s.enemies.clear();
        s.bullets.push(Bullet { x, y });
        for step in 1..=y {
            s = move_bullets(&s, &mut Vec::new());
            prop_assert_eq!(s.bullets.len(), 1);
            prop_assert_eq!(s.bullets[0].y, y - step);
        }
        s = move_bullets(&s, &mut Vec::new());
        prop_assert!(s.bullets.is_empty());
    }

    #[test]
    fn score_and_exp_never_decrease(
        seed in any::<u64>(),
        script in prop::collection::vec(prop::collection::vec(any_key(), 0..4), 1..300)
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut s = init_state(40, 20);
        for keys in &script {
            let next = tick(&s, keys, &mut rng).state;
            prop_assert!(next.score >= s.score);
            prop_assert!(next.player.exp >= s.player.exp);
            s = next;
        }
    }
}
