// Character classes shared by the equation grammar and the solver.

/// Number of characters in every playable equation.
pub const EQUATION_LENGTH: usize = 8;

/// Every character an equation may contain, in enumeration order.
pub const ALPHABET: &str = "0123456789+-*/=";

pub const EQUAL_SIGN: char = '=';

/// The four arithmetic operator characters.
pub fn is_operator(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/')
}

pub fn is_valid(c: char) -> bool {
    c.is_ascii_digit() || is_operator(c) || c == EQUAL_SIGN
}
