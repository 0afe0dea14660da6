//! `Accept` header generation

use super::{synthesize, LengthOptions, Variant};
use crate::catalog::Family;
use rand::Rng;

/// Generate an `Accept` value from common media types with high-confidence weights
pub fn generate_realistic_accept<R: Rng + ?Sized>(rng: &mut R, options: &LengthOptions) -> String {
    synthesize(rng, Family::Mime, Variant::Realistic, options).to_string()
}

/// Generate an `Accept` value from the full media type catalog
pub fn generate_accept<R: Rng + ?Sized>(rng: &mut R, options: &LengthOptions) -> String {
    synthesize(rng, Family::Mime, Variant::Full, options).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headers::tests::assert_well_formed;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generate_accept() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..20 {
            let header = generate_accept(&mut rng, &LengthOptions::between(1, 10));
            assert_well_formed(&header, "*/*");
            assert!(header.ends_with("*/*; q=0.1"));
        }
    }

    #[test]
    fn test_generate_realistic_accept_fixed() {
        let mut rng = StdRng::seed_from_u64(12);
        let header = generate_realistic_accept(&mut rng, &LengthOptions::fixed(5));
        assert_eq!(header.split(", ").count(), 6);
    }
}
