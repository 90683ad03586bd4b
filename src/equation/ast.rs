use std::fmt;

/// A fully validated arithmetic equation.
///
/// Values of this type only come out of [`Equation::parse`], so holding one
/// is proof that the text is a well-formed, arithmetically true equation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Equation {
    pub(crate) text: String,
}

impl Equation {
    /// The validated equation text.
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
