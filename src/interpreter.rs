use crate::parse::Node;
use crate::types::Value;
use crate::{evaluator, parse, printer, reader};

/// Read a syntax tree and reduce it to a `Number` or `Error` value.
pub fn read_and_eval(root: &Node) -> Value {
    evaluator::eval(reader::read(root))
}

/// Render a value to text.
pub fn render(value: &Value) -> String {
    printer::pr_str(value)
}

/// One read-eval-print step for the shell. Parse failures are rendered here,
/// on the grammar side of the boundary; the core only ever sees a tree.
pub fn rep(line: &str) -> String {
    match parse::parse(line) {
        Ok(root) => {
            let result = read_and_eval(&root);
            log::debug!("{} => {}", line, result);
            render(&result)
        }
        Err(e) => e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::rep;

    #[test]
    fn rep_evaluates_a_line() {
        assert_eq!(rep("(+ 1 2 3)"), "6");
    }

    #[test]
    fn rep_reports_evaluation_errors() {
        assert_eq!(rep("(/ 10 0)"), "division by zero");
        assert_eq!(rep("(5 1 2)"), "bad operator as value");
    }

    #[test]
    fn rep_reports_parse_errors() {
        assert_eq!(rep("(+ 1 2"), "parse error: expected ')'");
    }
}
