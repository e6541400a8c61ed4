//! Randomized checks of the movement rules

use grid_snake::sim::{Axis, Boundaries, Direction, DirectionQueue, GameState};
use proptest::prelude::*;

fn direction() -> impl Strategy<Value = Direction> {
    prop::sample::select(Direction::ALL.to_vec())
}

/// Frames of up to a tenth of a second, each optionally preceded by a key press
fn frames() -> impl Strategy<Value = Vec<(Option<Direction>, f32)>> {
    prop::collection::vec((prop::option::of(direction()), 0.001f32..0.1), 1..200)
}

fn is_lane_center(v: f32) -> bool {
    (v - (v.floor() + 0.5)).abs() < 1e-4
}

proptest! {
    #[test]
    fn head_stays_on_a_lane(seed in any::<u64>(), frames in frames()) {
        let mut state = GameState::start(Boundaries::new(30, 30), true, 0, seed);
        let mut pending = DirectionQueue::default();
        for (key, dt) in frames {
            if let Some(d) = key {
                pending.push(d);
            }
            state.update(dt, &mut pending);
            let p = state.snake.head.position;
            match state.snake.direction().axis() {
                Axis::Horizontal => prop_assert!(is_lane_center(p.y), "y = {}", p.y),
                Axis::Vertical => prop_assert!(is_lane_center(p.x), "x = {}", p.x),
            }
        }
    }

    #[test]
    fn tail_never_exceeds_its_length(seed in any::<u64>(), frames in frames()) {
        let mut state = GameState::start(Boundaries::new(12, 12), true, 0, seed);
        let mut pending = DirectionQueue::default();
        let mut last_length = state.snake.tail_length;
        for (key, dt) in frames {
            if let Some(d) = key {
                pending.push(d);
            }
            state.update(dt, &mut pending);
            prop_assert!(state.snake.tail.len() <= state.snake.tail_length);
            prop_assert!(state.snake.tail_length >= last_length);
            last_length = state.snake.tail_length;
        }
    }

    #[test]
    fn empty_queue_keeps_heading(seed in any::<u64>(), steps in 1usize..30) {
        let mut state = GameState::start(Boundaries::new(40, 20), true, 0, seed);
        let mut pending = DirectionQueue::default();
        for _ in 0..steps {
            state.update(1.0 / 60.0, &mut pending);
            prop_assert_eq!(state.snake.direction(), Direction::Right);
        }
    }

    #[test]
    fn queue_holds_one_direction_per_axis(keys in prop::collection::vec(direction(), 0..20)) {
        let mut q = DirectionQueue::default();
        for d in keys {
            q.push(d);
        }
        prop_assert!(q.len() <= 2);
        let queued: Vec<_> = q.iter().collect();
        if let [a, b] = queued[..] {
            prop_assert_ne!(a.axis(), b.axis());
        }
    }

    #[test]
    fn fruit_never_spawns_on_the_snake(seed in any::<u64>()) {
        let state = GameState::start(Boundaries::new(8, 8), true, 0, seed);
        let fruit = state.fruit.as_ref().map(|f| f.cell());
        prop_assert!(fruit.is_some());
        prop_assert!(!state.snake.occupies(fruit.unwrap_or_default()));
        prop_assert!(state.boundaries.contains(fruit.unwrap_or_default()));
    }
}

#[test]
fn same_seed_same_run() {
    let run = |seed| {
        let mut state = GameState::start(Boundaries::default(), true, 0, seed);
        let mut pending = DirectionQueue::default();
        for i in 0..300 {
            if i % 37 == 0 {
                pending.push(if (i / 37) % 2 == 0 { Direction::Down } else { Direction::Right });
            }
            state.update(1.0 / 60.0, &mut pending);
        }
        (state.score, state.snake.head.position, state.fruit.map(|f| f.cell()), state.status)
    };
    assert_eq!(run(99), run(99));
}
