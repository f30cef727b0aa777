use crate::types::{EvalError, Int, Value};

/// Reduce a value to a `Number` or an `Error`.
///
/// Reduction consumes its input and builds new values; nothing is mutated in
/// place. Errors travel as data, so this function is total: every value,
/// however malformed, reduces to something printable.
pub fn eval(value: Value) -> Value {
    match value {
        Value::Sexpr(children) => eval_sexpr(children),
        // A bare symbol only makes sense in operator position, where
        // eval_sexpr inspects it before it ever reaches us.
        Value::Symbol(_) => Value::error(EvalError::BadOperator),
        reduced => reduced,
    }
}

/// Child reduction inside an s-expression. Unlike [`eval`], a symbol passes
/// through untouched so the operator position can be checked afterwards.
fn eval_child(value: Value) -> Value {
    match value {
        Value::Sexpr(children) => eval_sexpr(children),
        other => other,
    }
}

fn eval_sexpr(children: Vec<Value>) -> Value {
    log::trace!("eval sexpr of {} children", children.len());
    if children.len() == 1 {
        // Parenthesized atom collapses to its content.
        let only = children.into_iter().next().unwrap();
        return eval(only);
    }
    if children.is_empty() {
        return Value::error(EvalError::BadOperator);
    }

    // Reduce every child left to right; the first error wins outright.
    let mut reduced = Vec::with_capacity(children.len());
    for child in children {
        match eval_child(child) {
            err @ Value::Error(_) => return err,
            value => reduced.push(value),
        }
    }

    let mut operands = reduced.into_iter();
    let op = match operands.next() {
        Some(Value::Symbol(name)) => name,
        _ => return Value::error(EvalError::BadOperator),
    };

    // Fold pairwise: acc starts at the first operand. At least one operand
    // exists since the list had two or more children. The seed must already
    // be a number, or an operator token would escape as the final result.
    let mut acc = match operands.next().unwrap() {
        number @ Value::Number(_) => number,
        _ => return Value::error(EvalError::BadOperator),
    };
    for operand in operands {
        acc = match apply(&op, acc, operand) {
            Ok(value) => value,
            Err(err) => return Value::error(err),
        };
    }
    log::trace!("({} ...) reduced to {}", op, acc);
    acc
}

fn apply(op: &str, x: Value, y: Value) -> Result<Value, EvalError> {
    let (x, y) = match (x, y) {
        (Value::Number(x), Value::Number(y)) => (x, y),
        // An operator token (or unreduced list) standing in for a number.
        _ => return Err(EvalError::BadOperator),
    };
    let n: Int = match op {
        "+" => x.wrapping_add(y),
        "-" => x.wrapping_sub(y),
        "*" => x.wrapping_mul(y),
        "/" if y == 0 => return Err(EvalError::DivisionByZero),
        "/" => x.wrapping_div(y),
        _ => return Err(EvalError::BadOperator),
    };
    Ok(Value::number(n))
}
