use super::{
    action::Direction,
    config::GameConfig,
    rng::{GameRng, RngSource},
    state::{Cell, GameState, Phase, Snake},
};

/// What happened during one tick, for the loop to act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickReport {
    /// The head landed on the item this tick
    pub ate_item: bool,
    /// The snake bit itself this tick
    pub collided: bool,
    /// Score at the end of the tick. On a collision in the silent-reset
    /// variant this is the final score of the run that just ended, captured
    /// before the in-place reset.
    pub score: u32,
}

/// The game engine: owns the tick policy and the randomness source.
pub struct GameEngine {
    config: GameConfig,
    rng: Box<dyn RngSource>,
}

impl GameEngine {
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, Box::new(GameRng::from_entropy()))
    }

    /// Engine with an injected randomness source (seeded runs, tests).
    pub fn with_rng(config: GameConfig, rng: Box<dyn RngSource>) -> Self {
        Self { config, rng }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// A fresh run: length-1 snake at the grid center, random direction,
    /// random item, score zero.
    pub fn new_game(&mut self) -> GameState {
        let snake = Snake::new(self.center_cell(), self.rng.random_direction());
        let item = self.rng.random_cell(&self.config);
        GameState::new(snake, item)
    }

    /// Advance one tick: apply the drained direction requests in arrival
    /// order, move the head one cell with wraparound, then resolve
    /// self-collision or item pickup. A tick while on the game-over screen
    /// changes nothing.
    pub fn tick(&mut self, state: &mut GameState, inputs: &[Direction]) -> TickReport {
        if !state.is_running() {
            return TickReport {
                ate_item: false,
                collided: false,
                score: state.score,
            };
        }

        for &requested in inputs {
            state.snake.set_direction(requested);
        }

        let next = state
            .snake
            .next_head(self.config.width, self.config.height, self.config.cell_size);

        if state.snake.bites(next) {
            let final_score = state.score;
            state.ticks += 1;

            if self.config.game_over_screen {
                state.phase = Phase::GameOver;
            } else {
                *state = self.new_game();
            }

            return TickReport {
                ate_item: false,
                collided: true,
                score: final_score,
            };
        }

        state.snake.push_head(next);

        let ate_item = next == state.item;
        if ate_item {
            state.snake.grow(1);
            state.score += self.config.item_reward;
            state.item = self.rng.random_cell(&self.config);
        }

        state.ticks += 1;

        TickReport {
            ate_item,
            collided: false,
            score: state.score,
        }
    }

    fn center_cell(&self) -> Cell {
        Cell::new(
            self.config.cols() / 2 * self.config.cell_size,
            self.config.rows() / 2 * self.config.cell_size,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::rng::ScriptedRng;

    fn classic_engine(directions: Vec<Direction>, cells: Vec<Cell>) -> GameEngine {
        GameEngine::with_rng(
            GameConfig::classic(),
            Box::new(ScriptedRng::new(directions, cells)),
        )
    }

    fn deluxe_engine(directions: Vec<Direction>, cells: Vec<Cell>) -> GameEngine {
        GameEngine::with_rng(
            GameConfig::deluxe(),
            Box::new(ScriptedRng::new(directions, cells)),
        )
    }

    #[test]
    fn test_new_game_starts_at_center() {
        let mut engine = classic_engine(vec![Direction::Right], vec![Cell::new(0, 0)]);
        let state = engine.new_game();

        assert_eq!(state.snake.body, vec![Cell::new(450, 350)]);
        assert_eq!(state.snake.direction, Direction::Right);
        assert_eq!(state.snake.target_len, 1);
        assert_eq!(state.item, Cell::new(0, 0));
        assert_eq!(state.score, 0);
        assert_eq!(state.ticks, 0);
        assert_eq!(state.phase, Phase::Running);
    }

    #[test]
    fn test_one_tick_moves_one_cell() {
        let mut engine = classic_engine(vec![Direction::Right], vec![Cell::new(0, 0)]);
        let mut state = engine.new_game();

        let report = engine.tick(&mut state, &[]);

        assert!(!report.collided);
        assert!(!report.ate_item);
        assert_eq!(state.snake.body, vec![Cell::new(475, 350)]);
        assert_eq!(state.ticks, 1);
    }

    #[test]
    fn test_item_pickup_grows_scores_and_respawns() {
        let mut engine = deluxe_engine(
            vec![Direction::Right],
            vec![Cell::new(0, 0), Cell::new(250, 250)],
        );
        let mut state = engine.new_game();
        // Deluxe grid centers at (500, 400); put the item one step ahead.
        assert_eq!(state.snake.head(), Cell::new(500, 400));
        state.item = Cell::new(525, 400);

        let report = engine.tick(&mut state, &[]);

        assert!(report.ate_item);
        assert_eq!(report.score, 10);
        assert_eq!(state.score, 10);
        assert_eq!(state.snake.target_len, 2);
        // Growth is deferred truncation: the body catches up next tick.
        assert_eq!(state.snake.len(), 1);
        assert_eq!(state.item, Cell::new(250, 250));

        engine.tick(&mut state, &[]);
        assert_eq!(state.snake.len(), 2);
    }

    #[test]
    fn test_head_wraps_around_the_right_edge() {
        let mut engine = classic_engine(vec![Direction::Right], vec![Cell::new(0, 675)]);
        let mut state = engine.new_game();
        state.snake.body = vec![Cell::new(875, 350)];

        engine.tick(&mut state, &[]);

        assert_eq!(state.snake.head(), Cell::new(0, 350));
    }

    #[test]
    fn test_inputs_apply_in_arrival_order() {
        let mut engine = classic_engine(vec![Direction::Right], vec![Cell::new(0, 0)]);
        let mut state = engine.new_game();

        // Right -> Up is allowed, then Up -> Left is allowed.
        engine.tick(&mut state, &[Direction::Up, Direction::Left]);
        assert_eq!(state.snake.direction, Direction::Left);
    }

    #[test]
    fn test_reversal_request_is_a_no_op() {
        let mut engine = classic_engine(vec![Direction::Right], vec![Cell::new(0, 0)]);
        let mut state = engine.new_game();
        let head = state.snake.head();

        engine.tick(&mut state, &[Direction::Left]);

        assert_eq!(state.snake.direction, Direction::Right);
        assert_eq!(state.snake.head(), Cell::new(head.x + 25, head.y));
    }

    /// A length-5 snake curled so the next head lands on body[3].
    fn curled_snake() -> Snake {
        let mut snake = Snake::new(Cell::new(100, 100), Direction::Down);
        snake.target_len = 5;
        snake.body = vec![
            Cell::new(100, 100),
            Cell::new(125, 100),
            Cell::new(125, 125),
            Cell::new(100, 125),
            Cell::new(75, 125),
        ];
        snake
    }

    #[test]
    fn test_self_collision_enters_game_over_in_deluxe() {
        let mut engine = deluxe_engine(vec![Direction::Right], vec![Cell::new(0, 0)]);
        let mut state = engine.new_game();
        state.snake = curled_snake();
        state.score = 40;

        let report = engine.tick(&mut state, &[]);

        assert!(report.collided);
        assert_eq!(report.score, 40);
        assert_eq!(state.phase, Phase::GameOver);
        // The body is left as it was for the game-over screen.
        assert_eq!(state.snake.len(), 5);
    }

    #[test]
    fn test_self_collision_silently_resets_in_classic() {
        // The reset consumes a second direction and item from the source.
        let mut engine = classic_engine(
            vec![Direction::Right, Direction::Up],
            vec![Cell::new(0, 0), Cell::new(200, 200)],
        );
        let mut state = engine.new_game();
        state.snake = curled_snake();
        state.score = 3;

        let report = engine.tick(&mut state, &[]);

        assert!(report.collided);
        assert_eq!(report.score, 3);
        assert_eq!(state.phase, Phase::Running);
        assert_eq!(state.snake.body, vec![Cell::new(450, 350)]);
        assert_eq!(state.snake.direction, Direction::Up);
        assert_eq!(state.item, Cell::new(200, 200));
        assert_eq!(state.score, 0);
        assert_eq!(state.ticks, 0);
    }

    #[test]
    fn test_tick_is_a_no_op_on_game_over_screen() {
        let mut engine = deluxe_engine(vec![Direction::Right], vec![Cell::new(0, 0)]);
        let mut state = engine.new_game();
        state.phase = Phase::GameOver;
        let before = state.clone();

        let report = engine.tick(&mut state, &[Direction::Up]);

        assert!(!report.collided);
        assert!(!report.ate_item);
        assert_eq!(state, before);
    }

    #[test]
    fn test_item_may_respawn_under_the_body() {
        // The respawn draw is unconditional, so a cell the snake occupies
        // is accepted as-is.
        let mut engine = deluxe_engine(
            vec![Direction::Right],
            vec![Cell::new(0, 0), Cell::new(500, 400)],
        );
        let mut state = engine.new_game();
        state.snake.grow(3);
        state.item = Cell::new(525, 400);

        engine.tick(&mut state, &[]);

        assert_eq!(state.item, Cell::new(500, 400));
        // (500, 400) is still a body cell after the next tick.
        engine.tick(&mut state, &[]);
        assert!(state.snake.body.contains(&state.item));
    }

    #[test]
    fn test_body_never_exceeds_target_or_tick_count() {
        let mut engine = deluxe_engine(
            vec![Direction::Right],
            vec![
                Cell::new(0, 0),
                Cell::new(25, 0),
                Cell::new(50, 0),
                Cell::new(75, 0),
                Cell::new(100, 0),
                Cell::new(125, 0),
            ],
        );
        let mut state = engine.new_game();

        for tick in 0..20 {
            // Feed the snake every few ticks by moving the item in front.
            if tick % 4 == 0 {
                let next = state.snake.next_head(1000, 800, 25);
                state.item = next;
            }
            engine.tick(&mut state, &[]);
            assert!(state.snake.len() <= state.snake.target_len);
            assert!(state.snake.len() <= state.ticks as usize + 1);
        }
    }
}
