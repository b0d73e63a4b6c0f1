use forth_stack::{Cell, IntStack};
use log::debug;

use crate::err::Error;
use crate::opcodes::OpCode;

#[derive(Clone, Debug)]
pub struct InterpreterConf {
    pub stack_limit: usize,
}

impl Default for InterpreterConf {
    fn default() -> Self {
        InterpreterConf { stack_limit: 1024 }
    }
}

/// Interpreter evaluates whitespace separated words against a single stack.
/// Integer literals are pushed, everything else must name an `OpCode`.
pub struct Interpreter {
    pub cfg: InterpreterConf,
    stack: IntStack,
}

impl Interpreter {
    pub fn new(cfg: InterpreterConf) -> Self {
        let stack = IntStack::with_capacity(cfg.stack_limit);
        Interpreter { cfg, stack }
    }

    /// Run against an existing stack. The stack's capacity becomes the limit.
    pub fn from_stack(stack: IntStack) -> Self {
        let cfg = InterpreterConf {
            stack_limit: stack.capacity(),
        };
        Interpreter { cfg, stack }
    }

    pub fn stack(&self) -> &IntStack {
        &self.stack
    }

    pub fn into_stack(self) -> IntStack {
        self.stack
    }

    /// Evaluate `source` word by word. Stops at the first failing word; words
    /// before it keep their effect, the failing one leaves the stack as it was.
    pub fn eval(&mut self, source: &str) -> Result<(), Error> {
        for (pos, word) in words(source).into_iter().enumerate() {
            self.trace(word, pos);
            self.step(word).map_err(|err| Error::Word {
                pos,
                word: word.to_string(),
                err: Box::new(err),
            })?;
        }
        debug!("");
        Ok(())
    }

    pub fn execute(&mut self, op: OpCode) -> Result<(), Error> {
        let size = self.stack.size();
        match op {
            OpCode::DUP => self.stack.dup()?,
            OpCode::SWAP => self.stack.swap()?,
            OpCode::OVER => self.stack.over()?,
            OpCode::ROT => self.stack.rot()?,
            OpCode::DROP => self.stack.drop_top()?,
            OpCode::TWODROP => self.stack.two_drop()?,
            OpCode::TWODUP => self.stack.two_dup()?,
            OpCode::TWOSWAP => self.stack.two_swap()?,
            OpCode::TWOOVER => self.stack.two_over()?,
            OpCode::ADD => self.stack.add()?,
        }
        debug_assert_eq!(self.stack.size() + op.stack_require(), size + op.stack_returns());
        Ok(())
    }

    fn step(&mut self, word: &str) -> Result<(), Error> {
        if let Ok(n) = word.parse::<Cell>() {
            self.stack.push(n)?;
            return Ok(());
        }
        let op = word.parse::<OpCode>()?;
        self.execute(op)
    }

    /// Function trace outputs the word about to run and the stack under it.
    fn trace(&self, word: &str, pos: usize) {
        debug!("[OP] {} pos={}", word, pos);
        debug!("[STACK] size={} capacity={}", self.stack.size(), self.stack.capacity());
        for (i, v) in self.stack.iter().enumerate() {
            debug!("[{}] {}", i, v);
        }
    }
}

// Split source into words, skipping `\` line comments and `( ... )` comments.
fn words(source: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut in_paren = false;
    for line in source.lines() {
        for token in line.split_whitespace() {
            if in_paren {
                if token.ends_with(')') {
                    in_paren = false;
                }
                continue;
            }
            match token {
                "\\" => break,
                "(" => in_paren = true,
                _ => out.push(token),
            }
        }
    }
    out
}
