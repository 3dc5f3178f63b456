use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use grid_snake::config::{GridSize, SCORE_INCREMENT};
use grid_snake::game::{DeathReason, GameStatus, Simulation, SimulationConfig};
use grid_snake::input::Direction;
use grid_snake::snake::{Position, Snake};

#[test]
fn stepwise_food_collection_and_wall_collision() {
    let mut sim = Simulation::from_parts(
        GridSize {
            width: 6,
            height: 4,
        },
        Snake::new(Position { x: 1, y: 1 }),
        Position { x: 2, y: 1 },
        Direction::Right,
        StdRng::seed_from_u64(42),
    );

    let result = sim.step().expect("step succeeds");
    assert!(result.ate_food);
    assert_eq!(sim.status(), GameStatus::Running);
    assert_eq!(sim.score(), SCORE_INCREMENT);
    let snapshot = sim.snapshot();
    assert_eq!(snapshot.positions.len(), 2);
    assert_eq!(snapshot.positions[0], Position { x: 2, y: 1 });
    assert!(!snapshot.positions.contains(&snapshot.food));

    sim.set_direction(Direction::Up);
    sim.step().expect("step succeeds");
    assert_eq!(sim.status(), GameStatus::Running);
    assert_eq!(sim.snapshot().positions[0], Position { x: 2, y: 0 });

    let result = sim.step().expect("step succeeds");
    assert!(result.game_over);
    assert_eq!(sim.status(), GameStatus::GameOver);
    assert_eq!(sim.death_reason(), Some(DeathReason::WallCollision));
    assert!(!sim.snapshot().alive);
}

#[test]
fn three_ticks_on_the_default_board() {
    // Food parked off row 7 so nothing is eaten on the way.
    let mut sim = Simulation::from_parts(
        GridSize::square(15),
        Snake::new(Position { x: 7, y: 7 }),
        Position { x: 0, y: 0 },
        Direction::Right,
        StdRng::seed_from_u64(8),
    );

    for _ in 0..3 {
        sim.step().expect("step succeeds");
    }

    let snapshot = sim.snapshot();
    assert_eq!(snapshot.positions, vec![Position { x: 10, y: 7 }]);
    assert!(snapshot.alive);
}

#[test]
fn random_play_never_breaks_board_invariants() {
    let grid = GridSize::square(8);
    let mut steering = StdRng::seed_from_u64(2024);

    for seed in 0..40 {
        let mut sim = Simulation::new_with_seed(SimulationConfig::centered(grid), seed)
            .expect("valid config");
        let mut last_score = 0;
        let mut last_len = 1;

        for _ in 0..400 {
            let direction = Direction::ALL[steering.gen_range(0..Direction::ALL.len())];
            sim.set_direction(direction);

            let result = match sim.step() {
                Ok(result) => result,
                Err(_) => break,
            };
            let snapshot = sim.snapshot();

            assert!(!snapshot.positions.is_empty());
            assert!(snapshot.positions.len() <= grid.total_cells());

            if result.game_over {
                assert!(!snapshot.alive);
                break;
            }

            assert!(snapshot.positions[0].is_within_bounds(grid));
            assert!(!snapshot.positions.contains(&snapshot.food));

            let mut unique = snapshot.positions.clone();
            unique.sort_by_key(|p| (p.x, p.y));
            unique.dedup();
            assert_eq!(unique.len(), snapshot.positions.len());

            if result.ate_food {
                assert_eq!(snapshot.positions.len(), last_len + 1);
                assert_eq!(snapshot.score, last_score + SCORE_INCREMENT);
            } else {
                assert_eq!(snapshot.positions.len(), last_len);
                assert_eq!(snapshot.score, last_score);
            }
            last_len = snapshot.positions.len();
            last_score = snapshot.score;
        }
    }
}
