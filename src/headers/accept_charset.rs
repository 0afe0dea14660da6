//! `Accept-Charset` header generation

use super::{
    calculate_num_choices, finish, random_quality_values, synthesize, LengthOptions, Variant,
};
use crate::catalog::{self, Family, Subset};
use crate::quality::QualityValue;
use rand::Rng;

/// Charsets every realistic `Accept-Charset` carries, unweighted
pub const CHARSET_BASELINE: &[&str] = &["utf-8", "ascii"];

/// Generate an `Accept-Charset` value that always accepts `utf-8` and `ascii`.
///
/// The length options bound the random supplement drawn on top of the baseline, and the
/// supplement never repeats a baseline charset.
pub fn generate_realistic_accept_charset<R: Rng + ?Sized>(
    rng: &mut R,
    options: &LengthOptions,
) -> String {
    let supplement: Vec<&str> = catalog::tokens(Family::Charset, Subset::Common)
        .iter()
        .copied()
        .filter(|charset| !CHARSET_BASELINE.contains(charset))
        .collect();
    let count = calculate_num_choices(rng, supplement.len(), options);

    let mut values: Vec<QualityValue> =
        CHARSET_BASELINE.iter().map(|c| QualityValue::new(*c)).collect();
    values.extend(random_quality_values(
        rng,
        &supplement,
        count,
        Variant::Realistic.quality_range(),
    ));

    finish(rng, Family::Charset, values).to_string()
}

/// Generate an `Accept-Charset` value from the full charset registry
pub fn generate_accept_charset<R: Rng + ?Sized>(rng: &mut R, options: &LengthOptions) -> String {
    synthesize(rng, Family::Charset, Variant::Full, options).to_string()
}
