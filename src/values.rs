use itertools::join;
use std::fmt;

use crate::errors::EvalError;

/// representation of lispy's data types
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(i64),
    Error(String),
    Symbol(String),
    /// an evaluable list: `(op a b ...)`
    Expression(Vec<Value>),
    /// a quoted list: `{a b ...}`, never evaluated on its own
    Literal(Vec<Value>),
}

/// the two flavours of list a `Value` can be retagged between
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ListKind {
    Expression,
    Literal,
}

use self::Value::*;

impl Value {
    pub fn number(n: i64) -> Value {
        Number(n)
    }

    pub fn error<S: Into<String>>(msg: S) -> Value {
        Error(msg.into())
    }

    pub fn symbol<S: Into<String>>(name: S) -> Value {
        Symbol(name.into())
    }

    /// an empty `()`
    pub fn expression() -> Value {
        Expression(Vec::new())
    }

    /// an empty `{}`
    pub fn literal() -> Value {
        Literal(Vec::new())
    }

    /// append a child to the end of a list
    pub fn push(&mut self, child: Value) -> Result<(), EvalError> {
        match self {
            Expression(cells) | Literal(cells) => {
                cells.push(child);
                Ok(())
            }
            _ => Err(EvalError::NotAList(self.get_type())),
        }
    }

    /// switch a list between `()` and `{}`, keeping its children as they are
    pub fn retag(self, kind: ListKind) -> Result<Value, EvalError> {
        let cells = match self {
            Expression(cells) | Literal(cells) => cells,
            other => return Err(EvalError::NotAList(other.get_type())),
        };

        Ok(match kind {
            ListKind::Expression => Expression(cells),
            ListKind::Literal    => Literal(cells),
        })
    }

    pub fn is_error(&self) -> bool {
        match self {
            Error(_) => true,
            _        => false,
        }
    }

    pub fn is_literal(&self) -> bool {
        match self {
            Literal(_) => true,
            _          => false,
        }
    }

    /// get the human-friendly type of a `Value`
    pub fn get_type(&self) -> String {
        match self {
            Number(_)     => "Number",
            Error(_)      => "Error",
            Symbol(_)     => "Symbol",
            Expression(_) => "Expression",
            Literal(_)    => "Literal",
        }.to_owned()
    }
}

impl From<EvalError> for Value {
    fn from(err: EvalError) -> Value {
        Error(err.to_string())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Number(n)         => write!(f, "{}", n),
            Error(msg)        => write!(f, "Error: {}", msg),
            Symbol(s)         => write!(f, "{}", s),
            Expression(cells) => write!(f, "({})", join(cells, " ")),
            Literal(cells)    => write!(f, "{{{}}}", join(cells, " ")),
        }
    }
}

// }}}
