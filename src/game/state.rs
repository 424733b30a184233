use super::action::Direction;

/// One grid-aligned square of the play field, addressed by the pixel
/// coordinate of its top-left corner. Both coordinates are multiples of the
/// cell size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// One direction-step of `step` pixels, without wrapping.
    pub fn stepped(&self, direction: Direction, step: i32) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx * step,
            y: self.y + dy * step,
        }
    }

    /// Reduce both coordinates into the field (toroidal topology: leaving
    /// one edge re-enters the opposite edge).
    pub fn wrapped(&self, width: i32, height: i32) -> Self {
        Self {
            x: self.x.rem_euclid(width),
            y: self.y.rem_euclid(height),
        }
    }
}

/// The player-controlled snake.
///
/// `target_len` is the length the body is growing toward; it may exceed the
/// body size for one tick after a pickup, since growth is just truncation
/// deferred by one cell.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body cells, head at index 0
    pub body: Vec<Cell>,
    /// Current travel direction
    pub direction: Direction,
    /// Length the body is growing toward
    pub target_len: usize,
}

impl Snake {
    /// A fresh length-1 snake at `head` heading `direction`.
    pub fn new(head: Cell, direction: Direction) -> Self {
        Self {
            body: vec![head],
            direction,
            target_len: 1,
        }
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Request a turn. A request for the exact reverse of the current
    /// direction is silently ignored (it would be an instant self-collision).
    pub fn set_direction(&mut self, requested: Direction) {
        if !self.direction.is_opposite(requested) {
            self.direction = requested;
        }
    }

    /// The cell the head will occupy after this tick's move.
    pub fn next_head(&self, width: i32, height: i32, step: i32) -> Cell {
        self.head().stepped(self.direction, step).wrapped(width, height)
    }

    /// Whether moving the head onto `cell` bites the body. Only segments at
    /// index >= 2 count: index 0 is the head itself and index 1 vacates on
    /// this move.
    pub fn bites(&self, cell: Cell) -> bool {
        self.body.len() > 2 && self.body[2..].contains(&cell)
    }

    /// Prepend the new head and truncate the body to the target length.
    pub fn push_head(&mut self, cell: Cell) {
        self.body.insert(0, cell);
        self.body.truncate(self.target_len);
    }

    /// Raise the target length; the body catches up on later ticks.
    pub fn grow(&mut self, by: usize) {
        self.target_len += by;
    }
}

/// Whether the game is accepting moves or waiting on the game-over screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    GameOver,
}

/// Complete game state for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub item: Cell,
    pub score: u32,
    pub ticks: u32,
    pub phase: Phase,
}

impl GameState {
    pub fn new(snake: Snake, item: Cell) -> Self {
        Self {
            snake,
            item,
            score: 0,
            ticks: 0,
            phase: Phase::Running,
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }
}
