pub mod levenshtein_cost_function;
pub mod phonetic_cost_function;

/// The symbol representing an alignment gap, the middle dot `U+00B7`.
pub const GAP: &str = "\u{00B7}";

/// The cost of comparing two symbols in an alignment.
///
/// Symbols are strings, since some phonemes consist of multiple characters.
/// Two symbols are equal if their strings are equal.
pub trait CostFunction {
    /// The cost between `left` and `right`.
    ///
    /// This is zero if `left == right`, and otherwise at most `max_cost()`.
    /// It is at least `min_cost()` unless one of the symbols is a [`GAP`],
    /// whose cost is fixed by the implementation.
    fn cost(&self, left: &str, right: &str) -> f64;

    /// The minimum cost between two distinct symbols that are not gaps.
    /// Never exceeds `max_cost()`.
    fn min_cost(&self) -> f64;

    /// The maximum cost between two distinct symbols.
    fn max_cost(&self) -> f64;
}

impl<T: CostFunction + ?Sized> CostFunction for &T {
    fn cost(&self, left: &str, right: &str) -> f64 {
        (**self).cost(left, right)
    }

    fn min_cost(&self) -> f64 {
        (**self).min_cost()
    }

    fn max_cost(&self) -> f64 {
        (**self).max_cost()
    }
}

#[cfg(test)]
mod tests {
    use super::{
        levenshtein_cost_function::LevenshteinCostFunction,
        phonetic_cost_function::PhoneticCostFunction, CostFunction, GAP,
    };

    #[test]
    fn gap_is_middle_dot() {
        assert_eq!(GAP, "·");
        assert_eq!(GAP.chars().count(), 1);
    }

    #[test]
    fn dynamic_dispatch() {
        let cost_functions: [&dyn CostFunction; 2] =
            [&LevenshteinCostFunction, PhoneticCostFunction::en_gb()];

        for cost_function in cost_functions {
            assert_eq!(cost_function.cost("t", "t"), 0.0);
            assert_eq!(cost_function.cost("t", "x"), 1.0);
            assert_eq!(cost_function.max_cost(), 1.0);
            assert!(cost_function.min_cost() > 0.0);
            assert!(cost_function.min_cost() <= cost_function.max_cost());
        }
    }
}
