mod config;
mod cursor;
mod error;
mod evaluator;
mod interpreter;
mod reader;
mod variables;

pub use config::{Limits, MAX_LINE_LEN};
pub use cursor::Cursor;
pub use error::{Error, Result};
pub use evaluator::{Term, eval_expr, eval_term, scan_term};
pub use interpreter::{Interpreter, Statement, classify};
pub use reader::ScriptLines;
pub use variables::{MAX_NAME_LEN, MAX_VARS, NameError, Slot, VarName, VariableTable};

/// Runs `program` in a fresh interpreter and returns everything it printed.
pub fn execute(program: &str) -> Result<String> {
    let mut output = Vec::new();
    Interpreter::new().run(program.as_bytes(), &mut output)?;
    Ok(String::from_utf8_lossy(&output).into_owned())
}
