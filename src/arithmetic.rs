use crate::errors::EvalError;
use crate::values::Value::{self, *};

/// fold a list of numbers left-to-right with `op`, starting from the first.
/// a lone argument to `-` is negated. integers wrap on overflow.
pub fn math(op: &str, args: Vec<Value>) -> Result<Value, EvalError> {
    let mut nums: Vec<i64> = Vec::with_capacity(args.len());
    for arg in args {
        match arg {
            Number(n) => nums.push(n),
            _ => return Err(EvalError::NonNumericOperand),
        }
    }

    let mut nums = nums.into_iter();
    let init = match nums.next() {
        Some(n) => n,
        None => return Err(EvalError::arity(op, 1, 0)),
    };

    if op == "-" && nums.len() == 0 {
        return Ok(Number(init.wrapping_neg()));
    }

    nums.try_fold(init, |acc, n| apply(op, acc, n)).map(Number)
}

fn apply(op: &str, x: i64, y: i64) -> Result<i64, EvalError> {
    match op {
        "+" => Ok(x.wrapping_add(y)),
        "-" => Ok(x.wrapping_sub(y)),
        "*" => Ok(x.wrapping_mul(y)),
        "/" if y == 0 => Err(EvalError::DivisionByZero),
        "/" => Ok(x.wrapping_div(y)),
        _ => Err(EvalError::UnknownFunction),
    }
}

// {{{ tests
#[cfg(test)]
mod tests {
    use super::*;

    fn nums(ns: &[i64]) -> Vec<Value> {
        ns.iter().cloned().map(Number).collect()
    }

    #[test]
    fn folds_left() {
        assert_eq!(math("+", nums(&[1, 2, 3, 4])), Ok(Number(10)));
        assert_eq!(math("-", nums(&[10, 3, 2])), Ok(Number(5)));
        assert_eq!(math("*", nums(&[2, 3, 4])), Ok(Number(24)));
        assert_eq!(math("/", nums(&[100, 5, 2])), Ok(Number(10)));
    }

    #[test]
    fn unary() {
        assert_eq!(math("-", nums(&[7])), Ok(Number(-7)));
        assert_eq!(math("+", nums(&[7])), Ok(Number(7)));
        assert_eq!(math("/", nums(&[7])), Ok(Number(7)));
    }

    #[test]
    fn truncates_toward_zero() {
        assert_eq!(math("/", nums(&[-7, 2])), Ok(Number(-3)));
        assert_eq!(math("/", nums(&[7, -2])), Ok(Number(-3)));
    }

    #[test]
    fn division_by_zero_anywhere() {
        assert_eq!(math("/", nums(&[10, 0])), Err(EvalError::DivisionByZero));
        assert_eq!(math("/", nums(&[10, 2, 0, 5])), Err(EvalError::DivisionByZero));
        assert_eq!(math("/", nums(&[0, 5])), Ok(Number(0)));
    }

    #[test]
    fn non_numbers() {
        let args = vec![Number(1), Literal(vec![Number(2), Number(3)])];
        assert_eq!(math("+", args), Err(EvalError::NonNumericOperand));
    }

    #[test]
    fn wraps() {
        assert_eq!(math("+", nums(&[i64::max_value(), 1])), Ok(Number(i64::min_value())));
        assert_eq!(math("/", nums(&[i64::min_value(), -1])), Ok(Number(i64::min_value())));
    }
}
// }}}
