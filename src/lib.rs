mod err;
mod interpreter;
pub mod opcodes;

pub use err::Error;
pub use forth_stack as stack;
pub use forth_stack::{Cell, IntStack};
pub use interpreter::{Interpreter, InterpreterConf};
pub use opcodes::OpCode;
