use std::fmt::{Display, Formatter, Result};
use std::str::FromStr;

use crate::err::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OpCode {
    DUP,
    SWAP,
    OVER,
    ROT,
    DROP,
    TWODROP,
    TWODUP,
    TWOSWAP,
    TWOOVER,
    ADD,
}

pub const ALL: [OpCode; 10] = [
    OpCode::DUP,
    OpCode::SWAP,
    OpCode::OVER,
    OpCode::ROT,
    OpCode::DROP,
    OpCode::TWODROP,
    OpCode::TWODUP,
    OpCode::TWOSWAP,
    OpCode::TWOOVER,
    OpCode::ADD,
];

impl OpCode {
    pub fn name(self) -> &'static str {
        match self {
            OpCode::DUP => "dup",
            OpCode::SWAP => "swap",
            OpCode::OVER => "over",
            OpCode::ROT => "rot",
            OpCode::DROP => "drop",
            OpCode::TWODROP => "2drop",
            OpCode::TWODUP => "2dup",
            OpCode::TWOSWAP => "2swap",
            OpCode::TWOOVER => "2over",
            OpCode::ADD => "add",
        }
    }

    /// Number of elements the word needs on the stack.
    pub fn stack_require(self) -> usize {
        match self {
            OpCode::DUP | OpCode::DROP => 1,
            OpCode::SWAP | OpCode::OVER | OpCode::TWODROP | OpCode::TWODUP | OpCode::ADD => 2,
            OpCode::ROT => 3,
            OpCode::TWOSWAP | OpCode::TWOOVER => 4,
        }
    }

    /// Number of elements the word leaves in place of the required ones.
    pub fn stack_returns(self) -> usize {
        match self {
            OpCode::DROP | OpCode::TWODROP => 0,
            OpCode::ADD => 1,
            OpCode::DUP | OpCode::SWAP => 2,
            OpCode::OVER | OpCode::ROT => 3,
            OpCode::TWODUP | OpCode::TWOSWAP => 4,
            OpCode::TWOOVER => 6,
        }
    }
}

impl Display for OpCode {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for OpCode {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s == "+" {
            return Ok(OpCode::ADD);
        }
        ALL.iter()
            .copied()
            .find(|op| op.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownWord(s.to_string()))
    }
}
