//! `Accept-Language` header generation

use super::{synthesize, LengthOptions, Variant};
use crate::catalog::Family;
use rand::Rng;

/// Generate an `Accept-Language` value from widely used locales
pub fn generate_realistic_accept_language<R: Rng + ?Sized>(
    rng: &mut R,
    options: &LengthOptions,
) -> String {
    synthesize(rng, Family::Language, Variant::Realistic, options).to_string()
}

/// Generate an `Accept-Language` value from the full language tag catalog
pub fn generate_accept_language<R: Rng + ?Sized>(rng: &mut R, options: &LengthOptions) -> String {
    synthesize(rng, Family::Language, Variant::Full, options).to_string()
}
