use std::collections::HashSet;
use std::fmt;

use log::debug;

use crate::equation::FormatError;
use crate::equation::alphabet::EQUATION_LENGTH;

/// Marks a cell the solver is free to fill.
pub const WILDCARD: char = '_';

#[derive(Debug, Clone, PartialEq, Eq)]
enum Slot {
    Fixed(char),
    Open,
    Excluding(HashSet<char>),
}

/// A puzzle template: eight cells, each either fixed or open.
///
/// The raw form is the visible guess line. `_` leaves a cell open, and a
/// bracket group such as `[27]` leaves a cell open while banning the listed
/// characters from that one cell. Everything else fixes the cell to that
/// character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    slots: [Slot; EQUATION_LENGTH],
}

impl Template {
    /// Parses the raw template text into its eight cells.
    ///
    /// The first `]` closes a bracket group, so `[` and `]` cannot themselves
    /// be excluded. A group with no closing `]` swallows the rest of the text
    /// and the length check reports the shortfall.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::TemplateLength`] when the template does not
    /// normalize to exactly eight cells.
    pub fn parse(raw: &str) -> Result<Self, FormatError> {
        let mut slots = Vec::new();
        let mut chars = raw.chars();
        while let Some(c) = chars.next() {
            if c == WILDCARD {
                slots.push(Slot::Open);
            } else if c == '[' {
                let mut excluded = HashSet::new();
                let mut closed = false;
                for inner in chars.by_ref() {
                    if inner == ']' {
                        closed = true;
                        break;
                    }
                    excluded.insert(inner);
                }
                if closed {
                    slots.push(Slot::Excluding(excluded));
                }
            } else {
                slots.push(Slot::Fixed(c));
            }
        }

        let len = slots.len();
        let slots: [Slot; EQUATION_LENGTH] =
            slots.try_into().map_err(|_| FormatError::TemplateLength {
                len,
                template: raw.to_string(),
            })?;
        let template = Self { slots };
        debug!("parsed template '{}' as '{}'", raw, template);
        Ok(template)
    }

    /// Positions of the open cells, left to right.
    pub fn open_positions(&self) -> Vec<usize> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| !matches!(slot, Slot::Fixed(_)))
            .map(|(position, _)| position)
            .collect()
    }

    /// The characters banned from the open cell at `position`, if any.
    pub fn excluded(&self, position: usize) -> Option<&HashSet<char>> {
        match self.slots.get(position) {
            Some(Slot::Excluding(excluded)) => Some(excluded),
            _ => None,
        }
    }

    /// Whether `fill` is banned from the cell at `position`.
    pub fn excludes(&self, position: usize, fill: char) -> bool {
        self.excluded(position)
            .is_some_and(|excluded| excluded.contains(&fill))
    }

    /// Writes `fills` into the open cells, left to right.
    pub fn render(&self, fills: &[char]) -> String {
        let mut fills = fills.iter();
        self.slots
            .iter()
            .map(|slot| match slot {
                Slot::Fixed(c) => *c,
                Slot::Open | Slot::Excluding(_) => fills.next().copied().unwrap_or(WILDCARD),
            })
            .collect()
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for slot in &self.slots {
            match slot {
                Slot::Fixed(c) => write!(f, "{}", c)?,
                Slot::Open | Slot::Excluding(_) => write!(f, "{}", WILDCARD)?,
            }
        }
        Ok(())
    }
}
