use failure::Fail;

/// a line the grammar rejects. these never become `Value`s; the line is
/// thrown away before it reaches the reader.
#[derive(Debug, Fail)]
pub enum ParseError {
    #[fail(display = "encountered erroneous '{}'", _0)]
    ErroneousToken(String),

    #[fail(display = "'{}' closed by '{}'", open, close)]
    MismatchedBrackets { open: char, close: char },

    #[fail(display = "unclosed '{}'", _0)]
    Unclosed(char),
}

/// everything that can go wrong while reading or evaluating a line
#[derive(Debug, Clone, PartialEq, Fail)]
pub enum EvalError {
    #[fail(display = "invalid_number")]
    InvalidNumber,

    #[fail(display = "Function '{}' passed too {} arguments!", name, amount)]
    WrongArity { name: String, amount: &'static str },

    #[fail(display = "Function '{}' passed incorrect type!", _0)]
    WrongType(String),

    #[fail(display = "Function '{}' passed {{}}!", _0)]
    EmptyList(String),

    #[fail(display = "Division By Zero!")]
    DivisionByZero,

    #[fail(display = "S-expression Does not start with symbol!")]
    NotASymbol,

    #[fail(display = "Unknown Function!")]
    UnknownFunction,

    #[fail(display = "Cannot operate on non-number!")]
    NonNumericOperand,

    #[fail(display = "unrecognised syntax node '{}'", _0)]
    UnknownNode(String),

    #[fail(display = "cannot use a {} as a list", _0)]
    NotAList(String),
}

impl EvalError {
    /// build a `WrongArity` from what a builtin expected and what it got
    pub fn arity(name: &str, expected: usize, got: usize) -> EvalError {
        EvalError::WrongArity {
            name: name.to_owned(),
            amount: if got > expected { "many" } else { "few" },
        }
    }
}

// }}}
