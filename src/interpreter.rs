use std::io::{BufRead, Write};

use crate::config::Limits;
use crate::cursor::{Cursor, is_space};
use crate::error::Result;
use crate::evaluator::eval_expr;
use crate::reader::ScriptLines;
use crate::variables::{VarName, VariableTable};

/// How a single line is handled. Lines are classified independently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// Blank or `#` comment.
    NoOp,
    Print,
    Assignment(VarName),
    /// Anything else. Silently skipped.
    Ignored,
}

/// Classifies the line at `cursor`, leaving it at the start of the expression
/// for `Print` and `Assignment`.
pub fn classify(cursor: &mut Cursor) -> Statement {
    cursor.skip_whitespace();
    if cursor.is_at_end() || cursor.peek() == b'#' {
        return Statement::NoOp;
    }

    if cursor.starts_with(b"print") && is_space(cursor.peek_at(5)) {
        cursor.advance_by(5);
        return Statement::Print;
    }

    let name = VarName::scan(cursor);
    cursor.skip_whitespace();
    if cursor.peek() == b'=' {
        cursor.advance();
        Statement::Assignment(name)
    } else {
        Statement::Ignored
    }
}

pub struct Interpreter {
    variables: VariableTable,
    limits: Limits,
}

impl Interpreter {
    pub fn new() -> Self {
        Self::with_limits(Limits::default())
    }

    pub fn with_limits(limits: Limits) -> Self {
        Interpreter {
            variables: VariableTable::with_capacity(limits.max_vars),
            limits,
        }
    }

    /// Executes one raw line, including its newline if it had one.
    pub fn handle_line<W: Write>(&mut self, line: &[u8], out: &mut W) -> std::io::Result<()> {
        let mut cursor = Cursor::new(line);
        let statement = classify(&mut cursor);
        tracing::trace!(?statement, "dispatch");

        match statement {
            Statement::NoOp | Statement::Ignored => {}
            Statement::Print => {
                let value = eval_expr(&mut cursor, &mut self.variables);
                writeln!(out, "{value}")?;
            }
            Statement::Assignment(name) => {
                // Right-hand side first: it may claim the last free slot.
                let value = eval_expr(&mut cursor, &mut self.variables);
                match self.variables.resolve(&name) {
                    Some(slot) => self.variables.write(slot, value),
                    None => tracing::debug!(%name, value, "assignment dropped"),
                }
            }
        }

        Ok(())
    }

    /// Runs a whole script, returning the number of lines dispatched.
    pub fn run<R: BufRead, W: Write>(&mut self, script: R, out: &mut W) -> Result<usize> {
        let mut count = 0;
        for line in ScriptLines::with_max_len(script, self.limits.max_line_len) {
            self.handle_line(&line?, out)?;
            count += 1;
        }
        tracing::info!(lines = count, variables = self.variables.len(), "script finished");
        Ok(count)
    }

    pub fn get_variables(&self) -> &VariableTable {
        &self.variables
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify_str(line: &str) -> Statement {
        classify(&mut Cursor::new(line.as_bytes()))
    }

    fn run_lines(interp: &mut Interpreter, lines: &[&str]) -> String {
        let mut out = Vec::new();
        for line in lines {
            interp.handle_line(line.as_bytes(), &mut out).unwrap();
        }
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_classify_noop() {
        assert_eq!(classify_str(""), Statement::NoOp);
        assert_eq!(classify_str("   \t\n"), Statement::NoOp);
        assert_eq!(classify_str("  # note"), Statement::NoOp);
    }

    #[test]
    fn test_classify_print() {
        assert_eq!(classify_str("print 1"), Statement::Print);
        assert_eq!(classify_str("print\t1"), Statement::Print);
        assert_eq!(classify_str("print\n"), Statement::Print);
    }

    #[test]
    fn test_classify_print_needs_whitespace() {
        assert_eq!(classify_str("print"), Statement::Ignored);
        assert_eq!(classify_str("printx"), Statement::Ignored);
        assert_eq!(
            classify_str("printx = 1"),
            Statement::Assignment(VarName::new("printx").unwrap())
        );
    }

    #[test]
    fn test_classify_assignment() {
        assert_eq!(
            classify_str("  total= 3"),
            Statement::Assignment(VarName::new("total").unwrap())
        );
        assert_eq!(
            classify_str("= 3"),
            Statement::Assignment(VarName::new("").unwrap())
        );
    }

    #[test]
    fn test_classify_ignored() {
        assert_eq!(classify_str("x"), Statement::Ignored);
        assert_eq!(classify_str("x + 1"), Statement::Ignored);
        assert_eq!(classify_str("x1 = 2"), Statement::Ignored);
        assert_eq!(classify_str("42"), Statement::Ignored);
    }

    #[test]
    fn test_assign_then_print() {
        let mut interp = Interpreter::new();
        let out = run_lines(&mut interp, &["a = 3\n", "print a\n"]);
        assert_eq!(out, "3\n");
        assert_eq!(interp.get_variables().get("a"), Some(3));
    }

    #[test]
    fn test_bare_print_line_prints_zero() {
        let mut interp = Interpreter::new();
        assert_eq!(run_lines(&mut interp, &["print\n"]), "0\n");
        assert_eq!(run_lines(&mut interp, &["print"]), "");
    }

    #[test]
    fn test_ignored_line_changes_nothing() {
        let mut interp = Interpreter::new();
        let out = run_lines(&mut interp, &["x\n", "x 5\n"]);
        assert_eq!(out, "");
        assert!(interp.get_variables().is_empty());
    }

    #[test]
    fn test_rhs_resolves_before_target() {
        let mut interp = Interpreter::with_limits(Limits {
            max_vars: 1,
            ..Limits::default()
        });
        run_lines(&mut interp, &["a = b + 4\n"]);
        assert_eq!(interp.get_variables().get("b"), Some(0));
        assert_eq!(interp.get_variables().get("a"), None);
    }

    #[test]
    fn test_huge_variable_limit() {
        let mut interp = Interpreter::with_limits(Limits {
            max_vars: usize::MAX,
            max_line_len: 255,
        });
        let out = run_lines(&mut interp, &["a = 6\n", "print a\n"]);
        assert_eq!(out, "6\n");
        assert_eq!(interp.get_variables().capacity(), usize::MAX);
    }

    #[test]
    fn test_run_counts_lines() {
        let mut interp = Interpreter::new();
        let mut out = Vec::new();
        let count = interp
            .run(&b"a = 1\n# c\n\nprint a + 1\n"[..], &mut out)
            .unwrap();
        assert_eq!(count, 4);
        assert_eq!(out, b"2\n");
    }

    #[test]
    fn test_run_splits_long_lines() {
        let mut interp = Interpreter::with_limits(Limits {
            max_line_len: 8,
            ..Limits::default()
        });
        let mut out = Vec::new();
        // Splits into "print 1 " and "print 2\n".
        interp.run(&b"print 1 print 2\n"[..], &mut out).unwrap();
        assert_eq!(out, b"1\n2\n");
    }
}
