use std::io;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Reading from or writing to the terminal failed.
    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),

    /// The input reader stopped, so no more commands can arrive.
    #[error("input stream closed")]
    InputClosed,
}

pub type Result<T> = std::result::Result<T, Error>;
