use crate::types::Value;
use itertools::Itertools;
use std::fmt;

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::Error(err) => write!(f, "{}", err),
            Value::Symbol(name) => write!(f, "{}", name),
            Value::Sexpr(children) => {
                write!(f, "({})", children.iter().map(|c| c.to_string()).join(" "))
            }
        }
    }
}

/// Render a value to text. A pure projection: never fails, never takes
/// ownership.
pub fn pr_str(value: &Value) -> String {
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse;
    use crate::reader::read;
    use crate::types::EvalError;

    #[test]
    fn print_atoms() {
        assert_eq!(pr_str(&Value::number(42)), "42");
        assert_eq!(pr_str(&Value::number(-7)), "-7");
        assert_eq!(pr_str(&Value::symbol("*")), "*");
        assert_eq!(
            pr_str(&Value::error(EvalError::DivisionByZero)),
            "division by zero"
        );
    }

    #[test]
    fn print_sexpr() {
        let sexpr = Value::Sexpr(vec![
            Value::symbol("+"),
            Value::number(1),
            Value::Sexpr(vec![Value::symbol("*"), Value::number(2), Value::number(3)]),
        ]);
        assert_eq!(pr_str(&sexpr), "(+ 1 (* 2 3))");
    }

    #[test]
    fn print_read_round_trips_an_atom() {
        let root = parse("42").unwrap();
        assert_eq!(pr_str(&read(&root.children[0])), "42");
    }
}
