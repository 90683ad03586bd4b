mod core;
mod fills;

pub use self::core::EquationSolver;

#[cfg(test)]
mod tests;
