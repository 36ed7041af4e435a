use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::config::{FOOD_SCORE, HEIGHT, WIDTH};
use crate::geometry::{Direction, Point};
use crate::snake::Snake;

/// Everything one game of snake needs. Only the game loop mutates it.
pub struct GameState {
    width: i32,
    height: i32,
    snake: Snake,
    food: Point,
    direction: Direction,
    score: u32,
    game_over: bool,
    rng: StdRng,
}

impl GameState {
    pub fn new() -> Self {
        Self::with_rng(WIDTH, HEIGHT, StdRng::from_entropy())
    }

    /// A fresh game on a `width`×`height` board, drawing food positions from `rng`.
    ///
    /// The board must have at least two cells, otherwise there is nowhere to put food.
    pub fn with_rng(width: i32, height: i32, rng: StdRng) -> Self {
        let center = Point::new(width / 2, height / 2);
        let mut state = GameState {
            width,
            height,
            snake: Snake::new(center),
            food: center,
            direction: Direction::Right,
            score: 0,
            game_over: false,
            rng,
        };
        state.reset();
        state
    }

    /// Starts over: one segment in the middle of the board, heading right.
    pub fn reset(&mut self) {
        self.snake = Snake::new(Point::new(self.width / 2, self.height / 2));
        self.direction = Direction::Right;
        self.score = 0;
        self.game_over = false;
        self.spawn_food();
        info!(food = ?self.food, "new game");
    }

    /// Puts the food on a random cell the snake doesn't occupy.
    ///
    /// Resamples until it finds a free cell, so it never returns on a full board.
    /// The board is far larger than any snake reached in normal play.
    pub fn spawn_food(&mut self) {
        loop {
            let candidate = Point::new(
                self.rng.gen_range(0..self.width),
                self.rng.gen_range(0..self.height),
            );
            if !self.snake.contains(&candidate) {
                self.food = candidate;
                return;
            }
        }
    }

    /// Turns the snake, unless that would reverse it onto itself.
    pub fn set_direction(&mut self, direction: Direction) {
        if direction == self.direction.opposite() {
            return;
        }
        if direction != self.direction {
            debug!(from = ?self.direction, to = ?direction, "turn");
        }
        self.direction = direction;
    }

    /// Moves the snake one cell, eating, growing or crashing as it goes.
    pub fn advance(&mut self) {
        if self.game_over {
            return;
        }

        let new_head = self.direction.step(self.snake.head());

        if !self.in_bounds(new_head) {
            self.crash(new_head, "wall");
            return;
        }
        if self.snake.contains(&new_head) {
            self.crash(new_head, "body");
            return;
        }

        self.snake.push_head(new_head);

        if new_head == self.food {
            self.score += FOOD_SCORE;
            self.spawn_food();
            debug!(score = self.score, length = self.snake.len(), next_food = ?self.food, "ate food");
        } else {
            self.snake.drop_tail();
        }
    }

    pub fn in_bounds(&self, pos: Point) -> bool {
        (0..self.width).contains(&pos.x) && (0..self.height).contains(&pos.y)
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn head(&self) -> Point {
        self.snake.head()
    }

    pub fn len(&self) -> usize {
        self.snake.len()
    }

    pub fn food(&self) -> Point {
        self.food
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    fn crash(&mut self, at: Point, obstacle: &'static str) {
        self.game_over = true;
        info!(?at, obstacle, score = self.score, length = self.snake.len(), "game over");
    }
}
