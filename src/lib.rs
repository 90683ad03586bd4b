//! Mathdle - A library for solving numeric equation guessing puzzles
//!
//! This library validates 8-character arithmetic equations and enumerates every
//! valid completion of a partially revealed puzzle template, honoring banned
//! characters, required characters, and per-cell exclusions.

pub mod equation;
pub mod solver;
pub mod template;

// Re-export the main public API
pub use equation::{Equation, EquationError, FormatError, MathError};
pub use solver::EquationSolver;
pub use template::Template;

/// Parse and validate a candidate as a playable 8-character equation
///
/// The candidate must be exactly eight characters of digits, `+-*/`, and one
/// `=`, and both sides must evaluate to the same value under strict
/// left-to-right arithmetic.
///
/// # Arguments
///
/// * `candidate` - The equation text to check
///
/// # Errors
///
/// Returns [`EquationError::Format`] when the candidate breaks a grammar rule
/// and [`EquationError::Math`] when it is well formed but does not balance,
/// divides by zero, or cannot be evaluated.
///
/// # Examples
///
/// ```
/// use mathdle::parse_and_validate;
///
/// match parse_and_validate("73-61=12") {
///     Ok(equation) => println!("Valid: {}", equation),
///     Err(e) => println!("Rejected: {}", e),
/// }
/// ```
pub fn parse_and_validate(candidate: &str) -> Result<Equation, EquationError> {
    Equation::parse(candidate)
}

/// Find every valid equation that completes the template
///
/// This is a convenience function that creates a solver from the constraint
/// characters and returns the solutions as plain strings, ordered by the
/// fills walked in alphabet order.
///
/// # Arguments
///
/// * `template` - The guess line, with `_` for empty spots and bracket groups
///   such as `[27]` for spots with banned characters
/// * `blacklist` - Characters that cannot enter any empty spot
/// * `whitelist` - Characters that must appear in the filled spots
///
/// # Errors
///
/// Returns an error when the template does not normalize to exactly eight
/// cells.
///
/// # Examples
///
/// ```
/// use mathdle::solve;
///
/// match solve("73-6_=1_", "7", "1") {
///     Ok(solutions) => assert!(solutions.contains(&"73-61=12".to_string())),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub fn solve(template: &str, blacklist: &str, whitelist: &str) -> Result<Vec<String>, FormatError> {
    let solver = EquationSolver::new(blacklist, whitelist);
    let solutions = solver.solve(template)?;
    Ok(solutions
        .into_iter()
        .map(|equation| equation.to_string())
        .collect())
}
