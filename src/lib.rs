#[macro_use]
extern crate failure_derive;

mod arithmetic;
mod builtins;
mod eval;
pub mod errors;
mod file;
pub mod log;
pub mod parser;
mod reader;
pub mod values;

use failure::Error;

pub use crate::parser::Node;
pub use crate::values::Value;

/// parse a line with the grammar and read the tree into a `Value`.
/// malformed numbers become Error values, malformed lines are an `Err`.
pub fn parse_and_read(line: &str) -> Result<Value, Error> {
    let tree = parser::parse(line)?;
    Ok(reader::read(&tree))
}

/// reduce a `Value` as far as it goes
pub fn evaluate(value: Value) -> Value {
    eval::eval(value)
}

/// render a `Value` as text
pub fn render(value: &Value) -> String {
    value.to_string()
}

/// names of every builtin function, in table order
pub fn builtin_names() -> Vec<&'static str> {
    builtins::BUILTINS.iter().map(|(name, _)| *name).collect()
}

#[derive(Debug, Clone, Default)]
pub struct Interpreter {
    /// log the syntax tree and read value of every line
    pub debug: bool,
}

impl Interpreter {
    /// create a new Interpreter
    pub fn new(debug: bool) -> Interpreter {
        Interpreter { debug }
    }

    /// evaluate a string as lispy code
    pub fn run<S: AsRef<str>>(&self, code: S) -> Result<Value, Error> {
        let tree = parser::parse(code.as_ref())?;
        if self.debug {
            log::debug(format!("syntax tree:\n{}", tree));
        }

        let value = reader::read(&tree);
        if self.debug {
            log::debug(format!("read: {:?}", value));
        }

        Ok(eval::eval(value))
    }
}

// }}}
