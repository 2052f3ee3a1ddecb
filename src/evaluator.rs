//! Expression evaluation straight off the line bytes.
//!
//! ```text
//! expr := term (('+' | '-') term)*
//! term := identifier | integer-literal
//! ```
//!
//! Arithmetic is `i32` and wraps on overflow, both while accumulating digits
//! and when adding or subtracting.

use crate::cursor::{Cursor, is_digit, is_letter};
use crate::variables::{VarName, VariableTable};

/// What sits at the cursor where a term is expected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Term {
    Number(i32),
    Identifier(VarName),
    /// Nothing usable. The cursor was not moved.
    Unparsed,
}

pub fn scan_term(cursor: &mut Cursor) -> Term {
    cursor.skip_whitespace();
    let ch = cursor.peek();
    if is_letter(ch) {
        Term::Identifier(VarName::scan(cursor))
    } else if is_digit(ch) {
        Term::Number(scan_number(cursor))
    } else {
        Term::Unparsed
    }
}

fn scan_number(cursor: &mut Cursor) -> i32 {
    let mut value: i32 = 0;
    while is_digit(cursor.peek()) {
        let digit = i32::from(cursor.peek() - b'0');
        value = value.wrapping_mul(10).wrapping_add(digit);
        cursor.advance();
    }
    value
}

/// Reads one term and collapses it to a value. Identifiers are resolved
/// (and so created); a full table or an unparsed term gives 0.
pub fn eval_term(cursor: &mut Cursor, variables: &mut VariableTable) -> i32 {
    match scan_term(cursor) {
        Term::Number(value) => value,
        Term::Identifier(name) => variables
            .resolve(&name)
            .map_or(0, |slot| variables.read(slot)),
        Term::Unparsed => 0,
    }
}

/// Evaluates a left-associative `+`/`-` chain. The cursor is left just past
/// the last consumed byte, which need not be the end of the line.
pub fn eval_expr(cursor: &mut Cursor, variables: &mut VariableTable) -> i32 {
    let mut value = eval_term(cursor, variables);
    cursor.skip_whitespace();

    while matches!(cursor.peek(), b'+' | b'-') {
        let op = cursor.peek();
        cursor.advance();
        let rhs = eval_term(cursor, variables);
        value = match op {
            b'+' => value.wrapping_add(rhs),
            _ => value.wrapping_sub(rhs),
        };
        cursor.skip_whitespace();
    }

    value
}
