//! `Accept-Encoding` header generation

use super::{synthesize, LengthOptions, Variant};
use crate::catalog::Family;
use rand::Rng;

/// Generate an `Accept-Encoding` value from the codings browsers actually send
pub fn generate_realistic_accept_encoding<R: Rng + ?Sized>(
    rng: &mut R,
    options: &LengthOptions,
) -> String {
    synthesize(rng, Family::Encoding, Variant::Realistic, options).to_string()
}

/// Generate an `Accept-Encoding` value from every registered content coding
pub fn generate_accept_encoding<R: Rng + ?Sized>(rng: &mut R, options: &LengthOptions) -> String {
    synthesize(rng, Family::Encoding, Variant::Full, options).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headers::tests::assert_well_formed;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generate_accept_encoding() {
        let mut rng = StdRng::seed_from_u64(21);
        for _ in 0..20 {
            let header = generate_accept_encoding(&mut rng, &LengthOptions::default());
            assert_well_formed(&header, "*");
        }
    }

    #[test]
    fn test_full_catalog_oversized_fixed_len() {
        let mut rng = StdRng::seed_from_u64(22);
        let header = generate_accept_encoding(&mut rng, &LengthOptions::fixed(1000));
        // 13 codings plus the wildcard
        assert_eq!(header.split(", ").count(), 14);
    }
}
