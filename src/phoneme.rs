use std::{collections::BTreeMap, io::Read, path::Path};

use anyhow::{anyhow, ensure, Context, Result};
use csv::ReaderBuilder;
use log::info;

pub mod en_gb;
pub mod pairwise_cost_table;

/// The amount of articulatory dimensions in a [`FeatureVector`].
pub const FEATURE_DIMENSIONS: usize = 7;

// Weights of the dimensions. Place is not weighted and spans [0, 1].
pub const OBSTRUCTION_WEIGHT: f64 = 0.68;
pub const LENGTH_WEIGHT: f64 = 0.01;
pub const NASALITY_WEIGHT: f64 = 0.65;
pub const ROUNDEDNESS_WEIGHT: f64 = 0.45;
pub const VOICE_WEIGHT: f64 = 0.10;
pub const LATERALITY_WEIGHT: f64 = 0.50;

/// The weight of the onset quality of a diphthong.
/// The offset quality is weighted with `1 - DIPHTHONG_ONSET_WEIGHT`.
pub const DIPHTHONG_ONSET_WEIGHT: f64 = 0.8;

// Place of articulation.
// Labial, labiodental and dental are bunched closer together,
// and the palatal-velar range is subdivided into five points to host vowels.
pub const LABIAL: f64 = 1.0;
pub const LABIODENTAL: f64 = 0.885;
pub const DENTAL: f64 = 0.750;
pub const ALVEOLAR: f64 = 0.571;
pub const POSTALVEOLAR: f64 = 0.428;
pub const PALATAL_VELAR_1: f64 = 0.285;
pub const PALATAL_VELAR_2: f64 = 0.249;
pub const PALATAL_VELAR_3: f64 = 0.213;
pub const PALATAL_VELAR_4: f64 = 0.177;
pub const PALATAL_VELAR_5: f64 = 0.142;
pub const GLOTTAL: f64 = 0.0;

// Obstruction. The last consonant interval is divided into seven vowel heights,
// which places approximants closer to vowels than equal spacing would.
pub const STOP: f64 = 1.0 * OBSTRUCTION_WEIGHT;
pub const AFFRICATE: f64 = 0.8 * OBSTRUCTION_WEIGHT;
pub const FRICATIVE: f64 = 0.6 * OBSTRUCTION_WEIGHT;
pub const APPROXIMANT: f64 = 0.4 * OBSTRUCTION_WEIGHT;
pub const HEIGHT_1: f64 = 0.2 * OBSTRUCTION_WEIGHT;
pub const HEIGHT_2: f64 = 0.166 * OBSTRUCTION_WEIGHT;
pub const HEIGHT_3: f64 = 0.133 * OBSTRUCTION_WEIGHT;
pub const HEIGHT_4: f64 = 0.1 * OBSTRUCTION_WEIGHT;
pub const HEIGHT_5: f64 = 0.066 * OBSTRUCTION_WEIGHT;
pub const HEIGHT_6: f64 = 0.033 * OBSTRUCTION_WEIGHT;
pub const HEIGHT_7: f64 = 0.0;

pub const LONG: f64 = 1.0 * LENGTH_WEIGHT;
pub const SHORT: f64 = 0.0;

pub const NASAL: f64 = 1.0 * NASALITY_WEIGHT;
pub const ORAL: f64 = 0.0;

pub const ROUNDED: f64 = 1.0 * ROUNDEDNESS_WEIGHT;
pub const MID: f64 = 0.5 * ROUNDEDNESS_WEIGHT;
pub const UNROUNDED: f64 = 0.0;

pub const VOICED: f64 = 1.0 * VOICE_WEIGHT;
pub const VOICELESS: f64 = 0.0;

pub const LATERAL: f64 = 1.0 * LATERALITY_WEIGHT;
pub const CENTRAL: f64 = 0.0;

/// The weighted articulatory features of a phoneme.
///
/// The dimensions are, in order: place, obstruction, length, nasality, roundedness, voice and laterality.
/// Each dimension is scaled by its weight already, so the plain squared euclidean distance between two vectors is their phonetic distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector {
    features: [f64; FEATURE_DIMENSIONS],
}

impl FeatureVector {
    pub const fn new(features: [f64; FEATURE_DIMENSIONS]) -> Self {
        Self { features }
    }

    /// Interpolates between the onset and offset qualities of a diphthong.
    pub fn blend(onset: f64, offset: f64) -> f64 {
        onset * DIPHTHONG_ONSET_WEIGHT + offset * (1.0 - DIPHTHONG_ONSET_WEIGHT)
    }

    pub fn features(&self) -> &[f64; FEATURE_DIMENSIONS] {
        &self.features
    }

    /// The sum of squared differences between the components of `self` and `other`.
    pub fn squared_distance(&self, other: &Self) -> f64 {
        self.features
            .iter()
            .zip(&other.features)
            .map(|(a, b)| (a - b) * (a - b))
            .sum()
    }
}

/// An immutable mapping from phoneme symbols to their feature vectors.
///
/// Phonemes are indexed in the order they were given.
#[derive(Debug, Clone)]
pub struct PhonemeTable {
    symbols: Vec<String>,
    feature_vectors: Vec<FeatureVector>,
    symbol_to_index: BTreeMap<String, usize>,
}

impl PhonemeTable {
    pub fn new<Symbol: Into<String>>(
        phonemes: impl IntoIterator<Item = (Symbol, FeatureVector)>,
    ) -> Result<Self> {
        let mut symbols = Vec::new();
        let mut feature_vectors = Vec::new();
        let mut symbol_to_index = BTreeMap::new();

        for (symbol, feature_vector) in phonemes {
            let symbol = symbol.into();
            ensure!(!symbol.is_empty(), "Phoneme symbols must not be empty");
            ensure!(
                feature_vector.features.iter().all(|feature| feature.is_finite()),
                "Features of phoneme {symbol:?} must be finite, but are {:?}",
                feature_vector.features
            );

            let index = symbols.len();
            ensure!(
                symbol_to_index.insert(symbol.clone(), index).is_none(),
                "Phoneme {symbol:?} is given twice"
            );
            symbols.push(symbol);
            feature_vectors.push(feature_vector);
        }

        ensure!(
            symbols.len() >= 2,
            "A phoneme table needs at least two phonemes, but got {}",
            symbols.len()
        );

        Ok(Self {
            symbols,
            feature_vectors,
            symbol_to_index,
        })
    }

    /// Reads a phoneme table from a CSV file.
    ///
    /// See [`Self::from_csv_reader`] for the format.
    pub fn from_csv_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!("Reading phoneme CSV file {path:?}");

        let reader = ReaderBuilder::new()
            .has_headers(true)
            .from_path(path)
            .with_context(|| format!("Error opening CSV file {path:?}"))?;
        Self::from_csv(reader).with_context(|| format!("Error loading phoneme file {path:?}"))
    }

    /// Reads a phoneme table in CSV format.
    ///
    /// The first row is a header and is ignored.
    /// Every further row contains a symbol followed by its [`FEATURE_DIMENSIONS`] weighted features.
    pub fn from_csv_reader(reader: impl Read) -> Result<Self> {
        Self::from_csv(ReaderBuilder::new().has_headers(true).from_reader(reader))
    }

    fn from_csv<R: Read>(mut reader: csv::Reader<R>) -> Result<Self> {
        let mut phonemes = Vec::new();

        for (row, record) in reader.records().enumerate() {
            // Row numbers are one-based and the header occupies the first row.
            let row = row + 2;
            let record = record.with_context(|| format!("Error reading CSV row {row}"))?;
            ensure!(
                record.len() == FEATURE_DIMENSIONS + 1,
                "Row {row} must contain a symbol and {FEATURE_DIMENSIONS} features, but has {} columns",
                record.len()
            );

            let mut columns = record.iter();
            let symbol = columns
                .next()
                .ok_or_else(|| anyhow!("Row {row} is empty"))?
                .trim()
                .to_string();

            let mut features = [0.0; FEATURE_DIMENSIONS];
            for (feature, column) in features.iter_mut().zip(columns) {
                let column = column.trim();
                *feature = column.parse().with_context(|| {
                    format!("Error parsing '{column}' as f64 in row {row}")
                })?;
            }

            phonemes.push((symbol, FeatureVector::new(features)));
        }

        Self::new(phonemes)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn index(&self, symbol: &str) -> Option<usize> {
        self.symbol_to_index.get(symbol).copied()
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.symbol_to_index.contains_key(symbol)
    }

    /// Returns `None` if the symbol is not a known phoneme.
    pub fn feature_vector(&self, symbol: &str) -> Option<&FeatureVector> {
        self.index(symbol).map(|index| &self.feature_vectors[index])
    }

    pub fn symbol(&self, index: usize) -> &str {
        &self.symbols[index]
    }

    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.symbols.iter().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FeatureVector)> {
        self.symbols
            .iter()
            .map(String::as_str)
            .zip(&self.feature_vectors)
    }
}
