use crate::arithmetic::math;
use crate::errors::EvalError;
use crate::eval;
use crate::values::{ListKind, Value::{self, *}};

pub type Builtin = fn(Vec<Value>) -> Result<Value, EvalError>;

pub const BUILTINS: &[(&str, Builtin)] = &[
    ("+",       add),
    ("-",       sub),
    ("*",       mul),
    ("/",       div),
    ("list",    list),
    ("head",    head),
    ("tail",    tail),
    ("join",    join),
    ("eval",    eval),
];

/// run the builtin called `name` on already-evaluated arguments. a failed
/// check comes back as an Error value, with every argument dropped.
pub fn call(name: &str, args: Vec<Value>) -> Value {
    let func = match BUILTINS.iter().find(|(builtin, _)| *builtin == name) {
        Some((_, func)) => func,
        None => return EvalError::UnknownFunction.into(),
    };

    match func(args) {
        Ok(value) => value,
        Err(err) => err.into(),
    }
}

// {{{ helpful macros
/// return from a function if the Vec $args doesn't contain $num elements
macro_rules! check_num_args {
    ($args: ident, $num: expr, $name: expr) => {{
        if $args.len() != $num {
            Err(EvalError::arity($name, $num, $args.len()))
        } else {
            Ok(())
        }
    }}
}

/// take the cells out of a Literal, or fail with a type error naming $proc
macro_rules! extract_literal {
    ($value: expr, $proc: expr) => {{
        match $value {
            Literal(cells) => Ok(cells),
            _ => Err(EvalError::WrongType($proc.to_owned())),
        }
    }}
}
// }}}

/// the single Literal argument of head/tail, which must not be empty
fn single_literal(name: &str, mut args: Vec<Value>) -> Result<Vec<Value>, EvalError> {
    check_num_args!(args, 1, name)?;

    let cells = extract_literal!(args.remove(0), name)?;
    if cells.is_empty() {
        return Err(EvalError::EmptyList(name.to_owned()));
    }
    Ok(cells)
}

// {{{ math
pub fn add(args: Vec<Value>) -> Result<Value, EvalError> {
    math("+", args)
}

pub fn sub(args: Vec<Value>) -> Result<Value, EvalError> {
    math("-", args)
}

pub fn mul(args: Vec<Value>) -> Result<Value, EvalError> {
    math("*", args)
}

pub fn div(args: Vec<Value>) -> Result<Value, EvalError> {
    math("/", args)
}
// }}}

// {{{ lists
/// quote the arguments
/// usage: (list <expr> <expr> ...)
pub fn list(args: Vec<Value>) -> Result<Value, EvalError> {
    Expression(args).retag(ListKind::Literal)
}

/// a Literal holding only the first element of a list
/// usage: (head <literal>)
pub fn head(args: Vec<Value>) -> Result<Value, EvalError> {
    let mut cells = single_literal("head", args)?;
    cells.truncate(1);
    Ok(Literal(cells))
}

/// a list without its first element
/// usage: (tail <literal>)
pub fn tail(args: Vec<Value>) -> Result<Value, EvalError> {
    let mut cells = single_literal("tail", args)?;
    cells.remove(0);
    Ok(Literal(cells))
}

/// concatenate lists, in order
/// usage: (join <literal> <literal> ...)
pub fn join(args: Vec<Value>) -> Result<Value, EvalError> {
    if !args.iter().all(Value::is_literal) {
        return Err(EvalError::WrongType("join".to_owned()));
    }

    let mut joined = Vec::new();
    for arg in args {
        joined.append(&mut extract_literal!(arg, "join")?);
    }
    Ok(Literal(joined))
}

/// evaluate a quoted list as an expression
/// usage: (eval <literal>)
pub fn eval(mut args: Vec<Value>) -> Result<Value, EvalError> {
    check_num_args!(args, 1, "eval")?;

    let quoted = args.remove(0);
    if !quoted.is_literal() {
        return Err(EvalError::WrongType("eval".to_owned()));
    }
    Ok(eval::eval(quoted.retag(ListKind::Expression)?))
}
// }}}

// }}}
