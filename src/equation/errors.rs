use thiserror::Error;

/// Grammar violations in a candidate equation or puzzle template.
///
/// Each variant carries the offending text so the message can stand alone.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("equation must have exactly 8 characters: len={len} candidate={candidate}")]
    BadLength { len: usize, candidate: String },
    #[error("equation contains invalid characters {found:?}: {candidate}")]
    InvalidCharacters { found: Vec<char>, candidate: String },
    #[error("equation does not contain an equal sign: {candidate}")]
    MissingEqualSign { candidate: String },
    #[error("equation contains too many equal signs: {candidate}")]
    TooManyEqualSigns { candidate: String },
    #[error("equation must start with a number: {candidate}")]
    NonDigitStart { candidate: String },
    #[error("equation cannot start with a zero: {candidate}")]
    ZeroStart { candidate: String },
    #[error("number token has a leading zero: {candidate}")]
    LeadingZero { candidate: String },
    #[error("equation must end with a number: {candidate}")]
    NonDigitEnd { candidate: String },
    #[error("equation does not contain any operators: {candidate}")]
    NoOperator { candidate: String },
    #[error("equation cannot have adjacent operators: {candidate}")]
    AdjacentOperators { candidate: String },
    #[error("equation has operators right of the equal sign: {candidate}")]
    OperatorOnRightSide { candidate: String },
    #[error("template must normalize to exactly 8 cells: len={len} template={template}")]
    TemplateLength { len: usize, template: String },
}

/// Arithmetic failures in a grammatically valid equation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MathError {
    #[error("equation sides are not equal: {candidate}")]
    NotEqual { candidate: String },
    #[error("equation divides by zero: {candidate}")]
    DivisionByZero { candidate: String },
    #[error("equation cannot be evaluated: {candidate}")]
    Unevaluable { candidate: String },
}

/// Any reason a candidate equation can be rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EquationError {
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error(transparent)]
    Math(#[from] MathError),
}
