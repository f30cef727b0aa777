use crate::parse::{Node, NodeKind};
use crate::types::{EvalError, Value};

/// Convert a syntax-tree node into a [`Value`] tree.
///
/// The number leaf is the one validated conversion: the grammar promises
/// digits, but not that they fit in an integer. Everything else is
/// structurally trusted.
pub fn read(node: &Node) -> Value {
    match node.kind {
        NodeKind::Number => read_number(&node.contents),
        NodeKind::Symbol => Value::symbol(&node.contents),
        NodeKind::Root | NodeKind::Sexpr => read_sexpr(node),
        // Punctuation is elided by its parent and never read directly.
        NodeKind::Punct => unreachable!("punctuation node {:?} escaped the grammar", node),
    }
}

fn read_number(contents: &str) -> Value {
    match contents.parse() {
        Ok(n) => Value::number(n),
        Err(_) => Value::error(EvalError::InvalidNumber),
    }
}

fn read_sexpr(node: &Node) -> Value {
    let mut sexpr = Value::empty_sexpr();
    for child in &node.children {
        if child.kind == NodeKind::Punct {
            continue;
        }
        sexpr.push_child(read(child));
    }
    sexpr
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse;

    fn read_line(line: &str) -> Value {
        read(&parse(line).unwrap())
    }

    #[test]
    fn read_number_leaf() {
        let node = Node {
            kind: NodeKind::Number,
            contents: String::from("42"),
            children: Vec::new(),
        };
        assert_eq!(read(&node), Value::number(42));
    }

    #[test]
    fn read_overflowing_literal() {
        let node = Node {
            kind: NodeKind::Number,
            contents: String::from("99999999999999999999"),
            children: Vec::new(),
        };
        assert_eq!(read(&node), Value::error(EvalError::InvalidNumber));
    }

    #[test]
    fn read_elides_punctuation() {
        assert_eq!(
            read_line("(+ 1 2)"),
            Value::Sexpr(vec![Value::Sexpr(vec![
                Value::symbol("+"),
                Value::number(1),
                Value::number(2),
            ])])
        );
    }

    #[test]
    fn read_preserves_child_order() {
        assert_eq!(
            read_line("(- 10 1 2 3)"),
            Value::Sexpr(vec![Value::Sexpr(vec![
                Value::symbol("-"),
                Value::number(10),
                Value::number(1),
                Value::number(2),
                Value::number(3),
            ])])
        );
    }

    #[test]
    fn read_nested_sexpr() {
        assert_eq!(
            read_line("(* (+ 1 2) 3)"),
            Value::Sexpr(vec![Value::Sexpr(vec![
                Value::symbol("*"),
                Value::Sexpr(vec![
                    Value::symbol("+"),
                    Value::number(1),
                    Value::number(2),
                ]),
                Value::number(3),
            ])])
        );
    }
}
