use crate::builtins;
use crate::errors::EvalError;
use crate::values::Value::{self, *};

/// evaluate a structured lispy expression. everything but an Expression
/// evaluates to itself.
pub fn eval(value: Value) -> Value {
    match value {
        Expression(cells) => eval_expression(cells),
        _ => value,
    }
}

/// evaluate the children of an Expression left to right, then reduce it
fn eval_expression(cells: Vec<Value>) -> Value {
    let mut cells = eval_list(cells);

    // the first error wins, everything else is dropped with the list
    if let Some(idx) = cells.iter().position(Value::is_error) {
        return cells.swap_remove(idx);
    }

    match cells.len() {
        0 => Expression(cells),
        1 => cells.remove(0),
        _ => match cells.remove(0) {
            Symbol(name) => builtins::call(&name, cells),
            _ => EvalError::NotASymbol.into(),
        },
    }
}

/// evaluate every Value in a Vec
pub fn eval_list(cells: Vec<Value>) -> Vec<Value> {
    cells.into_iter().map(eval).collect()
}

// }}}
