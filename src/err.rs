use std::error;
use std::fmt;
use std::io;

use forth_stack as stack;

#[derive(Debug)]
pub enum Error {
    Stack(stack::Error),
    UnknownWord(String),
    // A word failed during eval; pos is the word's index in the source.
    Word { pos: usize, word: String, err: Box<Error> },
    Json(serde_json::Error),
    IO(io::Error),
}

impl Error {
    /// Name of the innermost failure, unwrapping positioned word errors.
    pub fn name(&self) -> &'static str {
        match self {
            Error::Stack(e) => e.name(),
            Error::UnknownWord(_) => "UnknownWord",
            Error::Word { err, .. } => err.name(),
            Error::Json(_) => "Json",
            Error::IO(_) => "IO",
        }
    }
}

impl error::Error for Error {}
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Stack(e) => write!(f, "{}", e),
            Error::UnknownWord(w) => write!(f, "UnknownWord {:?}", w),
            Error::Word { pos, word, err } => write!(f, "word {} {:?}: {}", pos, word, err),
            Error::Json(e) => write!(f, "{}", e),
            Error::IO(e) => write!(f, "{:?}", e),
        }
    }
}

impl From<stack::Error> for Error {
    fn from(error: stack::Error) -> Self {
        Error::Stack(error)
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::Json(error)
    }
}

impl From<io::Error> for Error {
    fn from(error: io::Error) -> Self {
        Error::IO(error)
    }
}
