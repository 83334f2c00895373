use super::CostFunction;

/// A cost function that scores equal symbols with zero and everything else with one.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct LevenshteinCostFunction;

/// The [`LevenshteinCostFunction`].
pub const LEVENSHTEIN: LevenshteinCostFunction = LevenshteinCostFunction;

impl CostFunction for LevenshteinCostFunction {
    fn cost(&self, left: &str, right: &str) -> f64 {
        if left == right {
            0.0
        } else {
            1.0
        }
    }

    fn min_cost(&self) -> f64 {
        1.0
    }

    fn max_cost(&self) -> f64 {
        1.0
    }
}
