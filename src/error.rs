use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("File I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("File {} holds no formula", .0.display())]
    EmptyFile(PathBuf),
    #[error("Invalid literal {0:?}")]
    InvalidLiteral(String),
    #[error("Line holds no literals and reads as the empty clause")]
    BlankClause,
}

pub type Result<T> = std::result::Result<T, Error>;
