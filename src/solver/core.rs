use log::{debug, info, warn};
use rayon::prelude::*;

use crate::equation::{Equation, FormatError};
use crate::solver::fills;
use crate::template::Template;

/// Main solver for completing equation templates under player constraints
pub struct EquationSolver {
    blacklist: Vec<char>,
    whitelist: Vec<char>,
}

impl EquationSolver {
    /// Create a new solver from the player's constraint characters
    pub fn new(blacklist: &str, whitelist: &str) -> Self {
        Self {
            blacklist: blacklist.chars().collect(),
            whitelist: whitelist.chars().collect(),
        }
    }

    /// Find every valid equation that completes the template, ordered by the
    /// fills walked in alphabet order.
    ///
    /// Blacklisted characters never enter an open cell, and every solution
    /// must use each whitelisted character in at least one open cell. Fixed
    /// cells are kept as given either way.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::TemplateLength`] when the template does not
    /// normalize to exactly eight cells.
    pub fn solve(&self, template: &str) -> Result<Vec<Equation>, FormatError> {
        let template = Template::parse(template)?;
        let open = template.open_positions();

        if open.is_empty() {
            debug!(
                "template '{}' has no open cells, validating directly",
                template
            );
            return Ok(Equation::parse(&template.to_string())
                .ok()
                .into_iter()
                .collect());
        }

        let pool = fills::fill_pool(&self.blacklist);
        if self.whitelist.iter().any(|c| !pool.contains(c)) {
            warn!("a whitelisted character cannot enter any open cell, no solutions");
            return Ok(Vec::new());
        }

        let total = (pool.len() as u64).pow(open.len() as u32);
        info!(
            "searching {} fills across {} open cells with a pool of {}",
            total,
            open.len(),
            pool.len()
        );

        let solutions: Vec<Equation> = (0..total)
            .into_par_iter()
            .filter_map(|rank| {
                let fill = fills::decode_fill(rank, &pool, open.len());
                if self.whitelist.iter().any(|c| !fill.contains(c)) {
                    return None;
                }
                if open
                    .iter()
                    .zip(&fill)
                    .any(|(&position, &c)| template.excludes(position, c))
                {
                    return None;
                }
                let equation = Equation::parse(&template.render(&fill)).ok()?;
                debug!("accepted solution '{}'", equation);
                Some(equation)
            })
            .collect();

        info!("found {} solutions for '{}'", solutions.len(), template);
        Ok(solutions)
    }
}

impl Default for EquationSolver {
    fn default() -> Self {
        Self::new("", "")
    }
}
