//! The phoneme inventory of British English.

use super::{
    FeatureVector, PhonemeTable, AFFRICATE, ALVEOLAR, APPROXIMANT, CENTRAL, DENTAL,
    FEATURE_DIMENSIONS, FRICATIVE, GLOTTAL, HEIGHT_1, HEIGHT_2, HEIGHT_3, HEIGHT_4, HEIGHT_6,
    HEIGHT_7, LABIAL, LABIODENTAL, LATERAL, LONG, MID, NASAL, ORAL, PALATAL_VELAR_1,
    PALATAL_VELAR_2, PALATAL_VELAR_3, PALATAL_VELAR_4, PALATAL_VELAR_5, POSTALVEOLAR, ROUNDED,
    SHORT, STOP, UNROUNDED, VOICED, VOICELESS,
};

fn phoneme(
    symbol: &'static str,
    features: [f64; FEATURE_DIMENSIONS],
) -> (&'static str, FeatureVector) {
    (symbol, FeatureVector::new(features))
}

/// The diphthong between `onset` and `offset`, given as (place, height) pairs.
fn diphthong(
    symbol: &'static str,
    (onset_place, onset_height): (f64, f64),
    (offset_place, offset_height): (f64, f64),
    roundedness: f64,
) -> (&'static str, FeatureVector) {
    phoneme(
        symbol,
        [
            FeatureVector::blend(onset_place, offset_place),
            FeatureVector::blend(onset_height, offset_height),
            LONG,
            ORAL,
            roundedness,
            VOICED,
            CENTRAL,
        ],
    )
}

pub fn phonemes() -> Vec<(&'static str, FeatureVector)> {
    vec![
        // Vowels
        phoneme("ɑː", [PALATAL_VELAR_4, HEIGHT_7, LONG, ORAL, UNROUNDED, VOICED, CENTRAL]),
        phoneme("æ", [PALATAL_VELAR_2, HEIGHT_6, SHORT, ORAL, UNROUNDED, VOICED, CENTRAL]),
        phoneme("ɐ", [PALATAL_VELAR_3, HEIGHT_6, SHORT, ORAL, UNROUNDED, VOICED, CENTRAL]),
        phoneme("ɔː", [PALATAL_VELAR_5, HEIGHT_3, LONG, ORAL, MID, VOICED, CENTRAL]),
        diphthong("aʊ", (PALATAL_VELAR_1, HEIGHT_6), (PALATAL_VELAR_4, HEIGHT_2), MID),
        phoneme("ə", [PALATAL_VELAR_3, HEIGHT_4, SHORT, ORAL, UNROUNDED, VOICED, CENTRAL]),
        diphthong("aɪ", (PALATAL_VELAR_1, HEIGHT_6), (PALATAL_VELAR_1, HEIGHT_2), UNROUNDED),
        diphthong("ɛə", (PALATAL_VELAR_1, HEIGHT_4), (PALATAL_VELAR_3, HEIGHT_4), UNROUNDED),
        phoneme("ɛ", [PALATAL_VELAR_2, HEIGHT_4, SHORT, ORAL, UNROUNDED, VOICED, CENTRAL]),
        phoneme("ɜː", [PALATAL_VELAR_3, HEIGHT_4, LONG, ORAL, UNROUNDED, VOICED, CENTRAL]),
        diphthong("eɪ", (PALATAL_VELAR_1, HEIGHT_4), (PALATAL_VELAR_2, HEIGHT_2), UNROUNDED),
        diphthong("ɪə", (PALATAL_VELAR_2, HEIGHT_2), (PALATAL_VELAR_3, HEIGHT_4), UNROUNDED),
        phoneme("ɪ", [PALATAL_VELAR_2, HEIGHT_2, SHORT, ORAL, UNROUNDED, VOICED, CENTRAL]),
        phoneme("iː", [PALATAL_VELAR_1, HEIGHT_1, LONG, ORAL, UNROUNDED, VOICED, CENTRAL]),
        phoneme("i", [PALATAL_VELAR_1, HEIGHT_1, SHORT, ORAL, UNROUNDED, VOICED, CENTRAL]),
        phoneme("ɒ", [PALATAL_VELAR_5, HEIGHT_6, SHORT, ORAL, MID, VOICED, CENTRAL]),
        diphthong("əʊ", (PALATAL_VELAR_3, HEIGHT_4), (PALATAL_VELAR_4, HEIGHT_2), MID),
        diphthong("ɔɪ", (PALATAL_VELAR_5, HEIGHT_3), (PALATAL_VELAR_2, HEIGHT_2), MID),
        diphthong("ʊə", (PALATAL_VELAR_4, HEIGHT_2), (PALATAL_VELAR_3, HEIGHT_4), MID),
        phoneme("ʊ", [PALATAL_VELAR_4, HEIGHT_2, SHORT, ORAL, MID, VOICED, CENTRAL]),
        phoneme("uː", [PALATAL_VELAR_4, HEIGHT_1, LONG, ORAL, MID, VOICED, CENTRAL]),
        // Consonants
        phoneme("b", [LABIAL, STOP, SHORT, ORAL, ROUNDED, VOICED, CENTRAL]),
        phoneme("tʃ", [POSTALVEOLAR, AFFRICATE, SHORT, ORAL, UNROUNDED, VOICELESS, CENTRAL]),
        phoneme("d", [ALVEOLAR, STOP, SHORT, ORAL, UNROUNDED, VOICED, CENTRAL]),
        phoneme("ð", [DENTAL, FRICATIVE, SHORT, ORAL, UNROUNDED, VOICED, CENTRAL]),
        phoneme("f", [LABIODENTAL, FRICATIVE, SHORT, ORAL, UNROUNDED, VOICELESS, CENTRAL]),
        phoneme("g", [PALATAL_VELAR_5, STOP, SHORT, ORAL, UNROUNDED, VOICED, CENTRAL]),
        phoneme("h", [GLOTTAL, FRICATIVE, SHORT, ORAL, UNROUNDED, VOICELESS, CENTRAL]),
        phoneme("dʒ", [POSTALVEOLAR, AFFRICATE, SHORT, ORAL, UNROUNDED, VOICED, CENTRAL]),
        phoneme("k", [PALATAL_VELAR_5, STOP, SHORT, ORAL, UNROUNDED, VOICELESS, CENTRAL]),
        phoneme("l", [ALVEOLAR, APPROXIMANT, SHORT, ORAL, ROUNDED, VOICED, LATERAL]),
        phoneme("m", [LABIAL, STOP, SHORT, NASAL, ROUNDED, VOICED, CENTRAL]),
        phoneme("n", [ALVEOLAR, STOP, SHORT, NASAL, UNROUNDED, VOICED, CENTRAL]),
        phoneme("ŋ", [PALATAL_VELAR_5, STOP, SHORT, NASAL, UNROUNDED, VOICED, CENTRAL]),
        phoneme("p", [LABIAL, STOP, SHORT, ORAL, ROUNDED, VOICELESS, CENTRAL]),
        phoneme("ɹ", [POSTALVEOLAR, APPROXIMANT, SHORT, ORAL, ROUNDED, VOICED, CENTRAL]),
        phoneme("s", [ALVEOLAR, FRICATIVE, SHORT, ORAL, UNROUNDED, VOICELESS, CENTRAL]),
        phoneme("ʃ", [POSTALVEOLAR, FRICATIVE, SHORT, ORAL, UNROUNDED, VOICELESS, CENTRAL]),
        phoneme("t", [ALVEOLAR, STOP, SHORT, ORAL, UNROUNDED, VOICELESS, CENTRAL]),
        phoneme("θ", [DENTAL, FRICATIVE, SHORT, ORAL, UNROUNDED, VOICELESS, CENTRAL]),
        phoneme("v", [LABIODENTAL, FRICATIVE, SHORT, ORAL, ROUNDED, VOICED, CENTRAL]),
        phoneme("w", [PALATAL_VELAR_5, APPROXIMANT, SHORT, ORAL, ROUNDED, VOICED, CENTRAL]),
        phoneme("j", [PALATAL_VELAR_1, APPROXIMANT, SHORT, ORAL, UNROUNDED, VOICED, CENTRAL]),
        phoneme("z", [ALVEOLAR, FRICATIVE, SHORT, ORAL, UNROUNDED, VOICED, CENTRAL]),
        phoneme("ʒ", [POSTALVEOLAR, FRICATIVE, SHORT, ORAL, UNROUNDED, VOICED, CENTRAL]),
    ]
}

pub fn phoneme_table() -> PhonemeTable {
    PhonemeTable::new(phonemes()).expect("the British English inventory has unique symbols")
}
