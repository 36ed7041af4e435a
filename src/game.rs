use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::time::{Duration, Instant};

use tracing::{info, trace};

use crate::error::{Error, Result};
use crate::input::Command;
use crate::render::Render;
use crate::state::GameState;

#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Drives a game: the only place the state gets mutated.
///
/// Each iteration handles exactly one event, either a command from the input
/// channel or a tick. Ticks advance the snake and redraw; commands never redraw.
pub struct GameLoop<R: Render> {
    state: GameState,
    renderer: R,
    commands: Receiver<Command>,
    tick_interval: Duration,
}

impl<R: Render> GameLoop<R> {
    pub fn new(state: GameState, renderer: R, commands: Receiver<Command>, tick_interval: Duration) -> Self {
        GameLoop { state, renderer, commands, tick_interval }
    }

    /// Runs until a quit command arrives. Fails if the terminal does, or if
    /// the input channel closes.
    pub fn run(&mut self) -> Result<()> {
        self.renderer.render(&self.state)?;
        let mut next_tick = Instant::now() + self.tick_interval;

        loop {
            let timeout = next_tick.saturating_duration_since(Instant::now());

            match self.commands.recv_timeout(timeout) {
                Ok(command) => {
                    if self.apply(command) == Flow::Quit {
                        info!(score = self.state.score(), length = self.state.len(), "quit");
                        return Ok(());
                    }
                }
                Err(RecvTimeoutError::Timeout) => {
                    self.tick()?;

                    // Fixed deadlines, but don't try to catch up after a stall.
                    let now = Instant::now();
                    next_tick += self.tick_interval;
                    if next_tick < now {
                        next_tick = now + self.tick_interval;
                    }
                }
                Err(RecvTimeoutError::Disconnected) => return Err(Error::InputClosed),
            }
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    fn tick(&mut self) -> Result<()> {
        self.state.advance();
        trace!(head = ?self.state.head(), score = self.state.score(), "tick");
        self.renderer.render(&self.state)
    }

    fn apply(&mut self, command: Command) -> Flow {
        match command {
            Command::Turn(direction) => self.state.set_direction(direction),
            Command::Restart => {
                if self.state.is_game_over() {
                    self.state.reset();
                }
            }
            Command::Quit => return Flow::Quit,
        }
        Flow::Continue
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc::{self, Sender};

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::config::{HEIGHT, WIDTH};
    use crate::geometry::{Direction::*, Point};

    #[derive(Default)]
    struct Recorder {
        frames: Vec<(Point, bool)>,
        quit_after: Option<(usize, Sender<Command>)>,
    }

    impl Render for Recorder {
        fn render(&mut self, state: &GameState) -> Result<()> {
            self.frames.push((state.head(), state.is_game_over()));
            if let Some((limit, tx)) = &self.quit_after {
                if self.frames.len() == *limit {
                    let _ = tx.send(Command::Quit);
                }
            }
            Ok(())
        }
    }

    fn game(width: i32, height: i32, renderer: Recorder, rx: Receiver<Command>, tick: Duration) -> GameLoop<Recorder> {
        GameLoop::new(GameState::with_rng(width, height, StdRng::seed_from_u64(42)), renderer, rx, tick)
    }

    #[test]
    fn commands_apply_without_rendering() {
        let (tx, rx) = mpsc::channel();
        let mut game = game(WIDTH, HEIGHT, Recorder::default(), rx, Duration::from_secs(3600));

        tx.send(Command::Turn(Up)).unwrap();
        tx.send(Command::Turn(Down)).unwrap();
        tx.send(Command::Restart).unwrap();
        tx.send(Command::Quit).unwrap();
        tx.send(Command::Turn(Left)).unwrap();

        game.run().unwrap();

        assert_eq!(game.state().direction(), Up);
        assert!(!game.state().is_game_over());
        // Only the initial frame; nothing after quit was handled.
        assert_eq!(game.renderer.frames.len(), 1);
    }

    #[test]
    fn each_tick_advances_then_renders() {
        let (tx, rx) = mpsc::channel();
        let recorder = Recorder { frames: vec![], quit_after: Some((3, tx.clone())) };
        let mut game = game(WIDTH, HEIGHT, recorder, rx, Duration::from_millis(1));

        game.run().unwrap();

        let heads: Vec<i32> = game.renderer.frames.iter().map(|(head, _)| head.x).collect();
        assert_eq!(heads, vec![20, 21, 22]);
        assert_eq!(game.state().head().y, 10);
        drop(tx);
    }

    #[test]
    fn restart_only_after_game_over() {
        let (_tx, rx) = mpsc::channel();
        // A 2x1 board: heading right from the middle crashes on the first tick.
        let mut game = game(2, 1, Recorder::default(), rx, Duration::from_secs(3600));

        assert_eq!(game.apply(Command::Restart), Flow::Continue);
        assert!(!game.state().is_game_over());

        game.tick().unwrap();
        assert!(game.state().is_game_over());
        assert_eq!(game.renderer.frames, vec![(Point::new(1, 0), true)]);

        game.tick().unwrap();
        assert_eq!(game.state().head(), Point::new(1, 0));

        assert_eq!(game.apply(Command::Restart), Flow::Continue);
        assert!(!game.state().is_game_over());
        assert_eq!(game.state().score(), 0);
        assert_eq!(game.state().food(), Point::new(0, 0));

        assert_eq!(game.apply(Command::Quit), Flow::Quit);
    }

    #[test]
    fn closed_input_is_an_error() {
        let (tx, rx) = mpsc::channel();
        drop(tx);
        let mut game = game(WIDTH, HEIGHT, Recorder::default(), rx, Duration::from_secs(3600));

        assert!(matches!(game.run(), Err(Error::InputClosed)));
    }
}
