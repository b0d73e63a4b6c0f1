mod err;
pub use err::Error;

mod stack;
pub use stack::{Cell, IntStack};
