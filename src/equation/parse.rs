use log::debug;

use crate::equation::alphabet::{self, EQUAL_SIGN, EQUATION_LENGTH};
use crate::equation::ast::Equation;
use crate::equation::errors::{EquationError, FormatError, MathError};
use crate::equation::eval::{self, EvalFailure};

impl Equation {
    /// Parses and validates `candidate` as a playable equation.
    ///
    /// Grammar checks run first, in a fixed order so that the first violation
    /// decides the error. A candidate that survives them is evaluated side by
    /// side (strict left-to-right arithmetic) and must balance exactly.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError`] for grammar violations and [`MathError`] when
    /// a well-formed candidate does not balance, divides by zero, or holds a
    /// number the evaluator cannot parse.
    pub fn parse(candidate: &str) -> Result<Self, EquationError> {
        check_grammar(candidate)?;
        check_arithmetic(candidate)?;
        Ok(Self {
            text: candidate.to_string(),
        })
    }
}

fn check_grammar(candidate: &str) -> Result<(), FormatError> {
    let chars: Vec<char> = candidate.chars().collect();

    if chars.len() != EQUATION_LENGTH {
        return Err(FormatError::BadLength {
            len: chars.len(),
            candidate: candidate.to_string(),
        });
    }

    let found: Vec<char> = chars
        .iter()
        .copied()
        .filter(|&c| !alphabet::is_valid(c))
        .collect();
    if !found.is_empty() {
        return Err(FormatError::InvalidCharacters {
            found,
            candidate: candidate.to_string(),
        });
    }

    match chars.iter().filter(|&&c| c == EQUAL_SIGN).count() {
        0 => {
            return Err(FormatError::MissingEqualSign {
                candidate: candidate.to_string(),
            });
        }
        1 => {}
        _ => {
            return Err(FormatError::TooManyEqualSigns {
                candidate: candidate.to_string(),
            });
        }
    }

    if !chars[0].is_ascii_digit() {
        return Err(FormatError::NonDigitStart {
            candidate: candidate.to_string(),
        });
    }
    if chars[0] == '0' {
        return Err(FormatError::ZeroStart {
            candidate: candidate.to_string(),
        });
    }

    // A lone "0" is a legal number token; "01" or "00" is not.
    for token in candidate.split(|c: char| !c.is_ascii_digit()) {
        if token.len() > 1 && token.starts_with('0') {
            return Err(FormatError::LeadingZero {
                candidate: candidate.to_string(),
            });
        }
    }

    if !chars[EQUATION_LENGTH - 1].is_ascii_digit() {
        return Err(FormatError::NonDigitEnd {
            candidate: candidate.to_string(),
        });
    }

    if !chars.iter().any(|&c| alphabet::is_operator(c)) {
        return Err(FormatError::NoOperator {
            candidate: candidate.to_string(),
        });
    }

    if chars
        .windows(2)
        .any(|pair| !pair[0].is_ascii_digit() && !pair[1].is_ascii_digit())
    {
        return Err(FormatError::AdjacentOperators {
            candidate: candidate.to_string(),
        });
    }

    let Some((_, right)) = candidate.split_once(EQUAL_SIGN) else {
        return Err(FormatError::MissingEqualSign {
            candidate: candidate.to_string(),
        });
    };
    if right.chars().any(alphabet::is_operator) {
        return Err(FormatError::OperatorOnRightSide {
            candidate: candidate.to_string(),
        });
    }

    Ok(())
}

fn check_arithmetic(candidate: &str) -> Result<(), MathError> {
    let Some((left, right)) = candidate.split_once(EQUAL_SIGN) else {
        return Err(MathError::Unevaluable {
            candidate: candidate.to_string(),
        });
    };

    let left_value = eval::evaluate(left).map_err(|failure| math_error(failure, candidate))?;
    let right_value = eval::evaluate(right).map_err(|failure| math_error(failure, candidate))?;

    if left_value != right_value {
        debug!("equation does not balance: '{}'", candidate);
        return Err(MathError::NotEqual {
            candidate: candidate.to_string(),
        });
    }
    Ok(())
}

fn math_error(failure: EvalFailure, candidate: &str) -> MathError {
    match failure {
        EvalFailure::DivisionByZero => MathError::DivisionByZero {
            candidate: candidate.to_string(),
        },
        EvalFailure::BadNumber(_) => MathError::Unevaluable {
            candidate: candidate.to_string(),
        },
    }
}
