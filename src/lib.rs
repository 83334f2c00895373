//! Cost functions for comparing two symbols during sequence alignment.
//!
//! Besides the plain [`LevenshteinCostFunction`], this provides the [`PhoneticCostFunction`],
//! which scores pairs of phonemes in the International Phonetic Alphabet by their articulatory distance.

pub mod cost_function;
pub mod phoneme;

pub use cost_function::{
    levenshtein_cost_function::{LevenshteinCostFunction, LEVENSHTEIN},
    phonetic_cost_function::PhoneticCostFunction,
    CostFunction, GAP,
};
