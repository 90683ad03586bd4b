//! Puzzle template parsing split into submodules

mod extract;

pub use extract::{Template, WILDCARD};
