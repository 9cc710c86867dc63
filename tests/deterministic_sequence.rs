use retro_snake::config::Settings;
use retro_snake::food::Food;
use retro_snake::game::{DeathReason, Game, RunState};
use retro_snake::geometry::Cell;
use retro_snake::input::{Direction, GameInput};

fn seeded_game(seed: u64) -> Game {
    let settings = Settings {
        seed: Some(seed),
        ..Settings::default()
    };
    Game::from_settings(&settings).expect("default settings are valid")
}

#[test]
fn eat_turn_and_hit_the_top_wall() {
    let mut game = seeded_game(42);
    game.food = Food::new(Cell::new(8, 9));

    game.update();
    assert_eq!(game.snake.head(), Cell::new(7, 9));
    assert_eq!(game.score, 0);

    game.update();
    assert_eq!(game.score, 1);
    assert_eq!(game.snake.len(), 3);
    assert!(!game.snake.occupies(game.food.position));

    game.food = Food::new(Cell::new(0, 24));
    game.apply_input(GameInput::Direction(Direction::Up));
    game.update();
    assert_eq!(game.snake.head(), Cell::new(8, 8));
    assert_eq!(game.snake.len(), 4);

    for _ in 0..8 {
        game.update();
    }
    assert_eq!(game.snake.head(), Cell::new(8, 0));
    assert_eq!(game.run_state, RunState::Running);

    game.update();
    assert_eq!(game.run_state, RunState::Stopped);
    assert_eq!(game.death_reason, Some(DeathReason::WallCollision));
    assert_eq!(game.score, 0);
    assert_eq!(game.snake.head(), Cell::new(6, 9));
    assert_eq!(game.snake.len(), 3);

    game.update();
    assert_eq!(game.snake.head(), Cell::new(6, 9));

    game.apply_input(GameInput::Direction(Direction::Down));
    assert_eq!(game.run_state, RunState::Running);
    game.update();
    assert_eq!(game.snake.head(), Cell::new(6, 10));
}

#[test]
fn same_seed_places_food_identically() {
    let mut first = seeded_game(7);
    let mut second = seeded_game(7);
    assert_eq!(first.food, second.food);

    for game in [&mut first, &mut second] {
        game.food = Food::new(Cell::new(7, 9));
        game.update();
    }

    assert_eq!(first.food, second.food);
}

#[test]
fn boxed_in_turns_end_on_the_body() {
    let mut game = seeded_game(3);
    game.food = Food::new(Cell::new(7, 9));
    game.update();

    for cell in [Cell::new(8, 9), Cell::new(9, 9)] {
        game.food = Food::new(cell);
        game.update();
    }
    assert_eq!(game.snake.len(), 5);

    game.food = Food::new(Cell::new(24, 24));
    game.apply_input(GameInput::Direction(Direction::Down));
    game.update();
    game.apply_input(GameInput::Direction(Direction::Left));
    game.update();
    assert_eq!(game.run_state, RunState::Running);

    game.apply_input(GameInput::Direction(Direction::Up));
    game.update();

    assert_eq!(game.run_state, RunState::Stopped);
    assert_eq!(game.death_reason, Some(DeathReason::SelfCollision));
}
