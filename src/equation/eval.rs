use log::debug;
use thiserror::Error;

/// Why a side of an equation could not be evaluated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub(crate) enum EvalFailure {
    #[error("division by zero")]
    DivisionByZero,
    #[error("invalid number token: {0}")]
    BadNumber(String),
}

#[derive(Debug, Clone, Copy)]
enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

impl Op {
    fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Op::Add),
            '-' => Some(Op::Sub),
            '*' => Some(Op::Mul),
            '/' => Some(Op::Div),
            _ => None,
        }
    }
}

/// Exact value of an expression, kept as a ratio of integers.
///
/// Division multiplies the denominator instead of rounding, so comparing two
/// values is exact. The denominator is always positive: it starts at 1 and
/// only ever absorbs non-zero divisors.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Value {
    numer: i64,
    denom: i64,
}

impl Value {
    fn from_integer(n: i64) -> Self {
        Self { numer: n, denom: 1 }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        i128::from(self.numer) * i128::from(other.denom)
            == i128::from(other.numer) * i128::from(self.denom)
    }
}

fn parse_number(token: &str) -> Result<i64, EvalFailure> {
    if token.len() > 1 && token.starts_with('0') {
        debug!("rejecting number with leading zero: '{}'", token);
        return Err(EvalFailure::BadNumber(token.to_string()));
    }
    token
        .parse::<i64>()
        .map_err(|_| EvalFailure::BadNumber(token.to_string()))
}

/// Evaluates `expr` strictly left to right, with no operator precedence:
/// `"1+2*4"` is `(1+2)*4`, not `1+(2*4)`.
///
/// # Errors
///
/// Returns an error when a division by zero is attempted or when a number
/// token cannot be parsed (empty, leading zero, or not a number at all).
pub(crate) fn evaluate(expr: &str) -> Result<Value, EvalFailure> {
    let mut numbers = Vec::new();
    let mut operators = Vec::new();
    let mut start = 0;
    for (index, c) in expr.char_indices() {
        if let Some(op) = Op::from_char(c) {
            numbers.push(parse_number(&expr[start..index])?);
            operators.push(op);
            start = index + c.len_utf8();
        }
    }
    numbers.push(parse_number(&expr[start..])?);

    let (&first, rest) = numbers
        .split_first()
        .ok_or_else(|| EvalFailure::BadNumber(expr.to_string()))?;
    let mut value = Value::from_integer(first);
    for (&op, &number) in operators.iter().zip(rest) {
        match op {
            Op::Add => value.numer += number * value.denom,
            Op::Sub => value.numer -= number * value.denom,
            Op::Mul => value.numer *= number,
            Op::Div => {
                if number == 0 {
                    debug!("division by zero in '{}'", expr);
                    return Err(EvalFailure::DivisionByZero);
                }
                value.denom *= number;
            }
        }
    }
    Ok(value)
}
