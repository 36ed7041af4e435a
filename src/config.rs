use std::time::Duration;

// Board size in cells. Fixed at compile time.
pub const WIDTH: i32 = 40;
pub const HEIGHT: i32 = 20;

pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

pub const FOOD_SCORE: u32 = 10;

pub const HEAD_CHAR: char = '█';
pub const BODY_CHAR: char = '▓';
pub const FOOD_CHAR: char = '●';
pub const EMPTY_CHAR: char = ' ';
