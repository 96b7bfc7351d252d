// src/error.rs
use std::{io, num::ParseFloatError, path::PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read `{}`: {source}", path.display())]
    ReadInput { path: PathBuf, source: io::Error },

    #[error("failed to write `{}`: {source}", path.display())]
    WriteOutput { path: PathBuf, source: io::Error },

    #[error("row {row}: win value {text:?} is not a number: {source}")]
    ParseWin {
        row: usize,
        text: String,
        source: ParseFloatError,
    },

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T = (), E = Error> = std::result::Result<T, E>;
