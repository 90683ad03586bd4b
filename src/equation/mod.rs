//! Equation parsing and validation split into submodules

pub mod alphabet;
mod ast;
mod errors;
mod eval;
mod parse;

pub use ast::Equation;
pub use errors::{EquationError, FormatError, MathError};
