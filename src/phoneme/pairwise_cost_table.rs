use std::io::Write;

use anyhow::{ensure, Context, Result};
use csv::WriterBuilder;
use log::{debug, info, trace};

use super::PhonemeTable;

/// The squared euclidean distances between all distinct pairs of phonemes of a [`PhonemeTable`].
///
/// Phonemes are addressed by their index in the phoneme table.
/// Both orderings of each pair are stored, self-pairs are not.
#[derive(Debug, Clone, PartialEq)]
pub struct PairwiseCostTable {
    size: usize,
    table: Vec<Option<f64>>,
    min_cost: f64,
}

impl PairwiseCostTable {
    /// Fails if the distance between two phonemes is not finite.
    pub fn from_phoneme_table(phonemes: &PhonemeTable) -> Result<Self> {
        let size = phonemes.len();
        info!("Building pairwise cost table for {size} phonemes");

        let mut table = vec![None; size * size];
        let mut min_cost = f64::INFINITY;
        let mut min_pair = (0, 0);

        for (from, (from_symbol, from_features)) in phonemes.iter().enumerate() {
            for (to, (to_symbol, to_features)) in phonemes.iter().enumerate().skip(from + 1) {
                let cost = from_features.squared_distance(to_features);
                trace!("{from_symbol} {to_symbol}: {cost}");
                ensure!(
                    cost.is_finite(),
                    "Distance between phonemes {from_symbol:?} and {to_symbol:?} is not finite"
                );

                table[from * size + to] = Some(cost);
                table[to * size + from] = Some(cost);

                if cost < min_cost {
                    min_cost = cost;
                    min_pair = (from, to);
                }
            }
        }

        // A phoneme table holds at least two phonemes, so at least one finite pair was visited.
        debug_assert!(min_cost.is_finite());
        debug!(
            "Minimum cost {min_cost} between {} and {}",
            phonemes.symbol(min_pair.0),
            phonemes.symbol(min_pair.1)
        );

        Ok(Self {
            size,
            table,
            min_cost,
        })
    }

    /// Returns the cost between the phonemes at indices `from` and `to`.
    ///
    /// Returns `None` if `from == to`, since self-pairs are not stored.
    pub fn cost(&self, from: usize, to: usize) -> Option<f64> {
        assert!(
            from < self.size && to < self.size,
            "Phoneme index out of bounds: ({from}, {to}) with {} phonemes",
            self.size
        );
        self.table[from * self.size + to]
    }

    /// The minimum cost over all distinct pairs.
    pub fn min_cost(&self) -> f64 {
        self.min_cost
    }

    /// The maximum cost over all distinct pairs.
    pub fn max_cost(&self) -> f64 {
        self.table.iter().flatten().copied().fold(0.0, f64::max)
    }

    /// The amount of phonemes this table was built for.
    pub fn size(&self) -> usize {
        self.size
    }

    /// The amount of stored entries, which is `size * (size - 1)`.
    pub fn len(&self) -> usize {
        self.table.iter().filter(|cost| cost.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Writes the table as square CSV matrix.
    ///
    /// The first row contains an empty cell followed by all symbols,
    /// and each further row contains a symbol followed by its costs.
    /// Self-pairs are written as zero.
    pub fn write_csv(&self, phonemes: &PhonemeTable, writer: impl Write) -> Result<()> {
        ensure!(
            phonemes.len() == self.size,
            "Phoneme table with {} phonemes does not match the cost table of {} phonemes",
            phonemes.len(),
            self.size
        );

        let mut writer = WriterBuilder::new().has_headers(false).from_writer(writer);

        writer
            .write_record(std::iter::once("").chain(phonemes.symbols()))
            .with_context(|| "Error writing CSV header")?;

        for (from, from_symbol) in phonemes.symbols().enumerate() {
            let costs = (0..self.size).map(|to| self.cost(from, to).unwrap_or(0.0).to_string());
            writer
                .write_record(std::iter::once(from_symbol.to_string()).chain(costs))
                .with_context(|| format!("Error writing CSV row for {from_symbol}"))?;
        }

        writer.flush().with_context(|| "Error flushing CSV writer")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::PairwiseCostTable;
    use crate::phoneme::{en_gb, FeatureVector, PhonemeTable, FEATURE_DIMENSIONS};

    fn small_table() -> PhonemeTable {
        PhonemeTable::new([
            ("a", FeatureVector::new([0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0])),
            ("b", FeatureVector::new([1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0])),
            ("c", FeatureVector::new([0.0, 0.5, 0.0, 0.0, 0.0, 0.0, 0.5])),
        ])
        .unwrap()
    }

    #[test]
    fn small() {
        let phonemes = small_table();
        let table = PairwiseCostTable::from_phoneme_table(&phonemes).unwrap();

        assert_eq!(table.size(), 3);
        assert_eq!(table.len(), 6);
        assert_eq!(table.cost(0, 0), None);
        assert_eq!(table.cost(0, 1), Some(1.0));
        assert_eq!(table.cost(0, 2), Some(0.5));
        assert_eq!(table.cost(1, 2), Some(1.5));
        assert_eq!(table.cost(2, 1), Some(1.5));
        assert_eq!(table.min_cost(), 0.5);
        assert_eq!(table.max_cost(), 1.5);
    }

    #[test]
    fn en_gb_is_symmetric_and_complete() {
        let phonemes = en_gb::phoneme_table();
        let table = PairwiseCostTable::from_phoneme_table(&phonemes).unwrap();
        let size = phonemes.len();

        assert_eq!(table.len(), size * (size - 1));

        let mut min_cost = f64::INFINITY;
        for from in 0..size {
            assert_eq!(table.cost(from, from), None);

            for to in 0..size {
                if from == to {
                    continue;
                }

                let cost = table.cost(from, to).unwrap();
                assert_eq!(Some(cost), table.cost(to, from));
                assert!(cost > 0.0, "{} {}", phonemes.symbol(from), phonemes.symbol(to));
                min_cost = min_cost.min(cost);
            }
        }

        assert_eq!(table.min_cost(), min_cost);
    }

    #[test]
    fn en_gb_min_cost_is_vowel_length() {
        let phonemes = en_gb::phoneme_table();
        let table = PairwiseCostTable::from_phoneme_table(&phonemes).unwrap();
        let i = phonemes.index("i").unwrap();
        let long_i = phonemes.index("iː").unwrap();

        // Length is the lightest dimension.
        assert_eq!(table.cost(i, long_i), Some(0.01 * 0.01));
        assert_eq!(table.min_cost(), 0.01 * 0.01);
    }

    #[test]
    fn raw_costs_can_exceed_one() {
        let phonemes = en_gb::phoneme_table();
        let table = PairwiseCostTable::from_phoneme_table(&phonemes).unwrap();
        let b = phonemes.index("b").unwrap();
        let h = phonemes.index("h").unwrap();

        assert!(table.cost(b, h).unwrap() > 1.0);
        assert!(table.max_cost() > 1.0);
    }

    #[test]
    fn deterministic() {
        let phonemes = en_gb::phoneme_table();
        let first = PairwiseCostTable::from_phoneme_table(&phonemes).unwrap();
        let second = PairwiseCostTable::from_phoneme_table(&en_gb::phoneme_table()).unwrap();

        assert_eq!(first.min_cost().to_bits(), second.min_cost().to_bits());
        for from in 0..phonemes.len() {
            for to in 0..phonemes.len() {
                assert_eq!(
                    first.cost(from, to).map(f64::to_bits),
                    second.cost(from, to).map(f64::to_bits)
                );
            }
        }
    }

    #[test]
    fn csv_export() {
        let phonemes = small_table();
        let table = PairwiseCostTable::from_phoneme_table(&phonemes).unwrap();
        let mut output = Vec::new();
        table.write_csv(&phonemes, &mut output).unwrap();

        let output = String::from_utf8(output).unwrap();
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines, [",a,b,c", "a,0,1,0.5", "b,1,0,1.5", "c,0.5,1.5,0"]);
    }

    #[test]
    fn overflowing_distance() {
        let mut far = [0.0; FEATURE_DIMENSIONS];
        far[0] = 1e200;
        let mut other_far = [0.0; FEATURE_DIMENSIONS];
        other_far[0] = -1e200;
        let phonemes = PhonemeTable::new([
            ("a", FeatureVector::new(far)),
            ("b", FeatureVector::new(other_far)),
        ])
        .unwrap();

        assert!(PairwiseCostTable::from_phoneme_table(&phonemes).is_err());
    }

    #[test]
    fn csv_export_of_mismatching_phoneme_table() {
        let table = PairwiseCostTable::from_phoneme_table(&small_table()).unwrap();
        let mut output = Vec::new();

        assert!(table
            .write_csv(&en_gb::phoneme_table(), &mut output)
            .is_err());
    }
}
