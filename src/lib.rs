pub mod cmdline;
pub mod evaluator;
pub mod interpreter;
pub mod parse;
pub mod printer;
pub mod reader;

#[macro_use]
extern crate lazy_static;

mod tokens;
mod types;

pub use types::{EvalError, Value};
