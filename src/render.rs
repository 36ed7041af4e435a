use crate::config::{BODY_CHAR, EMPTY_CHAR, FOOD_CHAR, HEAD_CHAR};
use crate::error::Result;
use crate::state::GameState;

const CONTROLS_LINE: &str = "Controls: W=Up, S=Down, A=Left, D=Right, R=Restart, Q=Quit";
const GAME_OVER_LINE: &str = "GAME OVER! Press Q to quit or R to restart";

/// Something that can show a game state. Must not change it.
pub trait Render {
    fn render(&mut self, state: &GameState) -> Result<()>;
}

/// Lays out a full frame: the bordered board followed by the status lines.
///
/// Each cell is two columns wide so the board looks roughly square.
pub fn compose_frame(state: &GameState) -> Vec<String> {
    let (width, height) = (state.width() as usize, state.height() as usize);
    let mut grid = vec![vec![EMPTY_CHAR; width]; height];

    let mut put = |x: i32, y: i32, ch: char| {
        if let Some(cell) = grid.get_mut(y as usize).and_then(|row| row.get_mut(x as usize)) {
            *cell = ch;
        }
    };

    let food = state.food();
    put(food.x, food.y, FOOD_CHAR);
    for (i, pos) in state.snake().segments().enumerate() {
        put(pos.x, pos.y, if i == 0 { HEAD_CHAR } else { BODY_CHAR });
    }

    let rule = "─".repeat(width * 2);
    let mut lines = Vec::with_capacity(height + 6);

    lines.push(format!("┌{}┐", rule));
    for row in &grid {
        let mut line = String::with_capacity(width * 2 + 2);
        line.push('│');
        for &cell in row {
            line.push(cell);
            line.push(' ');
        }
        line.push('│');
        lines.push(line);
    }
    lines.push(format!("└{}┘", rule));

    lines.push(String::new());
    lines.push(format!("Score: {} | Length: {}", state.score(), state.len()));
    lines.push(CONTROLS_LINE.to_string());

    if state.is_game_over() {
        lines.push(String::new());
        lines.push(GAME_OVER_LINE.to_string());
    }

    lines
}
