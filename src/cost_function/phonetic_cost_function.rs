use std::sync::LazyLock;

use anyhow::Result;
use log::info;

use super::{CostFunction, GAP};
use crate::phoneme::{en_gb, pairwise_cost_table::PairwiseCostTable, PhonemeTable};

/// The cost of aligning any phoneme with a [`GAP`].
pub const GAP_COST: f64 = 0.25;

/// The cost of two distinct symbols if at least one of them is not a known phoneme.
pub const MAX_COST: f64 = 1.0;

static EN_GB: LazyLock<PhoneticCostFunction> = LazyLock::new(|| {
    PhoneticCostFunction::new(en_gb::phoneme_table())
        .expect("the British English inventory has finite distances")
});

/// A cost function based on the phonetic distance between phonemes written in the International Phonetic Alphabet.
///
/// Costs are evaluated as follows:
///  * equal symbols cost zero,
///  * a [`GAP`] against anything else costs [`GAP_COST`],
///  * a pair where one symbol is not a known phoneme costs [`MAX_COST`],
///  * any other pair costs its entry in the [`PairwiseCostTable`], capped at [`MAX_COST`].
///
/// For inputs that are not phonemes it hence behaves like the [`LevenshteinCostFunction`](super::levenshtein_cost_function::LevenshteinCostFunction).
#[derive(Debug, Clone)]
pub struct PhoneticCostFunction {
    phonemes: PhonemeTable,
    cost_table: PairwiseCostTable,
}

impl PhoneticCostFunction {
    pub fn new(phonemes: PhonemeTable) -> Result<Self> {
        let cost_table = PairwiseCostTable::from_phoneme_table(&phonemes)?;
        info!(
            "Phonetic cost function over {} phonemes with minimum cost {}",
            phonemes.len(),
            cost_table.min_cost()
        );

        Ok(Self {
            phonemes,
            cost_table,
        })
    }

    /// The phonetic cost function for British English.
    ///
    /// It is built on first access and shared afterwards.
    pub fn en_gb() -> &'static Self {
        &EN_GB
    }

    pub fn phonemes(&self) -> &PhonemeTable {
        &self.phonemes
    }

    pub fn cost_table(&self) -> &PairwiseCostTable {
        &self.cost_table
    }
}

impl CostFunction for PhoneticCostFunction {
    fn cost(&self, left: &str, right: &str) -> f64 {
        if left == right {
            return 0.0;
        }

        if left == GAP || right == GAP {
            return GAP_COST;
        }

        let (Some(from), Some(to)) = (self.phonemes.index(left), self.phonemes.index(right)) else {
            return MAX_COST;
        };

        // Distinct symbols have distinct indices, so the entry exists.
        self.cost_table
            .cost(from, to)
            .map_or(MAX_COST, |cost| cost.min(MAX_COST))
    }

    /// The minimum table cost, capped at [`MAX_COST`] like the costs themselves.
    fn min_cost(&self) -> f64 {
        self.cost_table.min_cost().min(MAX_COST)
    }

    fn max_cost(&self) -> f64 {
        MAX_COST
    }
}
