use std::fmt;

pub type Int = i64;

/// Evaluation failures, carried inside a [`Value::Error`] rather than thrown.
/// Once produced, an error is absorbing: it propagates out of every enclosing
/// reduction unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalError {
    /// A number literal failed to parse (overflow, or digits the grammar
    /// should have rejected).
    InvalidNumber,
    /// Right operand of `/` evaluated to zero.
    DivisionByZero,
    /// The operator position held a non-symbol or an unknown symbol, or an
    /// operator token survived into operand position.
    BadOperator,
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            EvalError::InvalidNumber => "invalid number",
            EvalError::DivisionByZero => "division by zero",
            EvalError::BadOperator => "bad operator as value",
        };
        write!(f, "{}", msg)
    }
}

/// A lisp value: the result type and the intermediate type of evaluation.
///
/// A `Sexpr` exclusively owns its children; the whole tree is single-owner
/// and acyclic, so destruction is the derived recursive drop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Number(Int),
    Error(EvalError),
    Symbol(String),
    Sexpr(Vec<Value>),
}

impl Value {
    pub fn number(n: Int) -> Self {
        Value::Number(n)
    }

    pub fn error(err: EvalError) -> Self {
        Value::Error(err)
    }

    pub fn symbol(name: &str) -> Self {
        Value::Symbol(String::from(name))
    }

    pub fn empty_sexpr() -> Self {
        Value::Sexpr(Vec::new())
    }

    /// Append `child` to a `Sexpr`, preserving insertion order.
    ///
    /// Panics on a non-`Sexpr` receiver: that is a programming error in the
    /// caller, not a condition the language surfaces to the user.
    pub fn push_child(&mut self, child: Value) {
        match self {
            Value::Sexpr(children) => children.push(child),
            other => panic!("push_child on non-sexpr value {:?}", other),
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_child_preserves_order() {
        let mut parent = Value::empty_sexpr();
        parent.push_child(Value::symbol("+"));
        parent.push_child(Value::number(1));
        parent.push_child(Value::number(2));
        assert_eq!(
            parent,
            Value::Sexpr(vec![
                Value::symbol("+"),
                Value::number(1),
                Value::number(2)
            ])
        );
    }

    #[test]
    #[should_panic]
    fn push_child_rejects_atoms() {
        let mut number = Value::number(3);
        number.push_child(Value::number(4));
    }

    #[test]
    fn error_messages() {
        assert_eq!(EvalError::InvalidNumber.to_string(), "invalid number");
        assert_eq!(EvalError::DivisionByZero.to_string(), "division by zero");
        assert_eq!(EvalError::BadOperator.to_string(), "bad operator as value");
    }
}
