use std::error;
use std::fmt;

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Error {
    EmptyStack,
    CapacityExceeded,
    InsufficientElements,
    InvalidCapacity(i64),
}

impl Error {
    /// Variant name without payload, used to match expected failures in fixtures.
    pub fn name(&self) -> &'static str {
        match self {
            Error::EmptyStack => "EmptyStack",
            Error::CapacityExceeded => "CapacityExceeded",
            Error::InsufficientElements => "InsufficientElements",
            Error::InvalidCapacity(_) => "InvalidCapacity",
        }
    }
}

impl error::Error for Error {}
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::EmptyStack => write!(f, "EmptyStack"),
            Error::CapacityExceeded => write!(f, "CapacityExceeded"),
            Error::InsufficientElements => write!(f, "InsufficientElements"),
            Error::InvalidCapacity(n) => write!(f, "InvalidCapacity {}", n),
        }
    }
}
