use std::io;
use std::sync::mpsc::Sender;
use std::thread::{self, JoinHandle};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::{debug, error};

use crate::geometry::Direction::{self, *};

/// What a key press asks the game to do.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Command {
    Turn(Direction),
    Restart,
    Quit,
}

/// Starts the thread that reads keys from the terminal and forwards commands.
///
/// The thread stops when the terminal can't be read or the receiving end is gone.
pub fn spawn_reader(tx: Sender<Command>) -> io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("input".to_string())
        .spawn(move || pump(event::read, &tx))
}

/// Forwards every recognised key from `next_event` to `tx`, in order.
pub fn pump<F>(mut next_event: F, tx: &Sender<Command>)
where
    F: FnMut() -> io::Result<Event>,
{
    loop {
        let event = match next_event() {
            Ok(event) => event,
            Err(err) => {
                error!(%err, "failed to read terminal input");
                return;
            }
        };

        let command = match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => decode(&key),
            _ => None,
        };

        if let Some(command) = command {
            if tx.send(command).is_err() {
                debug!("game loop is gone, input reader stopping");
                return;
            }
        }
    }
}

pub fn decode(key: &KeyEvent) -> Option<Command> {
    match key {
        // Raw mode swallows SIGINT, so Ctrl+C has to be handled here.
        KeyEvent { code: KeyCode::Char('c'), modifiers, .. } if modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Command::Quit)
        }
        KeyEvent { code, .. } => match code {
            KeyCode::Char(ch) => decode_char(*ch),
            KeyCode::Up => Some(Command::Turn(Up)),
            KeyCode::Down => Some(Command::Turn(Down)),
            KeyCode::Left => Some(Command::Turn(Left)),
            KeyCode::Right => Some(Command::Turn(Right)),
            _ => None,
        },
    }
}

pub fn decode_char(ch: char) -> Option<Command> {
    match ch.to_ascii_lowercase() {
        'w' => Some(Command::Turn(Up)),
        's' => Some(Command::Turn(Down)),
        'a' => Some(Command::Turn(Left)),
        'd' => Some(Command::Turn(Right)),
        'r' => Some(Command::Restart),
        'q' => Some(Command::Quit),
        _ => None,
    }
}
