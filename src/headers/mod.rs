//! Content-negotiation header synthesis
//!
//! Every header family follows the same recipe: draw a random-sized subset of the
//! family's catalog, weight roughly half of the picks, band-sort them, then append the
//! family wildcard with `q=0.1` so it is always the least preferred entry.

mod accept;
mod accept_charset;
mod accept_encoding;
mod accept_language;
mod set;

pub use accept::{generate_accept, generate_realistic_accept};
pub use accept_charset::{
    generate_accept_charset, generate_realistic_accept_charset, CHARSET_BASELINE,
};
pub use accept_encoding::{generate_accept_encoding, generate_realistic_accept_encoding};
pub use accept_language::{generate_accept_language, generate_realistic_accept_language};
pub use set::{generate_header_set, HeaderSet};

use crate::catalog::{self, Family, Subset};
use crate::quality::{sort_qualities, HeaderValueList, QualityValue};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Weight given to the trailing wildcard entry
pub const WILDCARD_QUALITY: f64 = 0.1;

/// How many catalog entries a header should carry
///
/// `fixed_len` wins when present. Otherwise the count is drawn uniformly from
/// `[min_len, max_len]`, where `max_len` defaults to the catalog size. All bounds are
/// clamped to the catalog size; a `min_len` above the effective maximum collapses to it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LengthOptions {
    pub fixed_len: Option<usize>,
    pub max_len: Option<usize>,
    pub min_len: usize,
}

impl LengthOptions {
    /// Exactly `len` entries
    pub fn fixed(len: usize) -> Self {
        Self {
            fixed_len: Some(len),
            ..Default::default()
        }
    }

    /// Between `min_len` and `max_len` entries, inclusive
    pub fn between(min_len: usize, max_len: usize) -> Self {
        Self {
            fixed_len: None,
            max_len: Some(max_len),
            min_len,
        }
    }
}

/// Which catalog and weight range a synthesizer draws from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Common tokens weighted within `[0.7, 1.0]`
    Realistic,
    /// Every catalog token weighted within `[0.0, 1.0]`
    Full,
}

impl Variant {
    pub fn subset(&self) -> Subset {
        match self {
            Variant::Realistic => Subset::Common,
            Variant::Full => Subset::All,
        }
    }

    /// Inclusive bounds for drawn weights
    pub fn quality_range(&self) -> (f64, f64) {
        match self {
            Variant::Realistic => (0.7, 1.0),
            Variant::Full => (0.0, 1.0),
        }
    }
}

/// Resolve how many entries to draw from a list of `list_len` tokens
pub fn calculate_num_choices<R: Rng + ?Sized>(
    rng: &mut R,
    list_len: usize,
    options: &LengthOptions,
) -> usize {
    if let Some(fixed) = options.fixed_len {
        return fixed.min(list_len);
    }

    let max_len = options.max_len.unwrap_or(list_len).min(list_len);
    let min_len = if options.min_len > max_len {
        debug!(
            min_len = options.min_len,
            max_len, "min_len exceeds max_len, clamping"
        );
        max_len
    } else {
        options.min_len
    };

    rng.gen_range(min_len..=max_len)
}

/// Pair a token with a weight from `range` half of the time
pub(crate) fn random_quality<R: Rng + ?Sized>(
    rng: &mut R,
    name: &str,
    (low, high): (f64, f64),
) -> QualityValue {
    if rng.gen_bool(0.5) {
        QualityValue::with_quality(name, rng.gen_range(low..=high))
    } else {
        QualityValue::new(name)
    }
}

/// Draw `count` distinct tokens and weight each of them independently
pub(crate) fn random_quality_values<R: Rng + ?Sized>(
    rng: &mut R,
    tokens: &[&str],
    count: usize,
    range: (f64, f64),
) -> Vec<QualityValue> {
    let chosen: Vec<&str> = tokens.choose_multiple(rng, count).copied().collect();
    chosen
        .into_iter()
        .map(|token| random_quality(rng, token, range))
        .collect()
}

/// Band-sort `values` and close the list with the family wildcard
pub(crate) fn finish<R: Rng + ?Sized>(
    rng: &mut R,
    family: Family,
    values: Vec<QualityValue>,
) -> HeaderValueList {
    let mut list: HeaderValueList = sort_qualities(rng, values).into();
    list.push(QualityValue::with_quality(family.wildcard(), WILDCARD_QUALITY));
    list
}

/// Synthesize one header value for `family` using the plain catalog recipe
pub fn synthesize<R: Rng + ?Sized>(
    rng: &mut R,
    family: Family,
    variant: Variant,
    options: &LengthOptions,
) -> HeaderValueList {
    let tokens = catalog::tokens(family, variant.subset());
    let count = calculate_num_choices(rng, tokens.len(), options);
    debug!(%family, ?variant, count, "synthesizing header");

    let values = random_quality_values(rng, tokens, count, variant.quality_range());
    finish(rng, family, values)
}

/// Synthesize a header value for any family, including family-specific baselines
pub fn generate_header<R: Rng + ?Sized>(
    rng: &mut R,
    family: Family,
    variant: Variant,
    options: &LengthOptions,
) -> String {
    match (family, variant) {
        (Family::Mime, Variant::Realistic) => generate_realistic_accept(rng, options),
        (Family::Mime, Variant::Full) => generate_accept(rng, options),
        (Family::Charset, Variant::Realistic) => generate_realistic_accept_charset(rng, options),
        (Family::Charset, Variant::Full) => generate_accept_charset(rng, options),
        (Family::Encoding, Variant::Realistic) => generate_realistic_accept_encoding(rng, options),
        (Family::Encoding, Variant::Full) => generate_accept_encoding(rng, options),
        (Family::Language, Variant::Realistic) => generate_realistic_accept_language(rng, options),
        (Family::Language, Variant::Full) => generate_accept_language(rng, options),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use regex::Regex;

    /// Check the rendered grammar and the band/wildcard invariants of a header value
    pub(crate) fn assert_well_formed(header: &str, wildcard: &str) {
        let entry = Regex::new(r"^[^,; ]+(; q=(0\.[0-9]|1\.0))?$").unwrap();
        let entries: Vec<&str> = header.split(", ").collect();
        for e in &entries {
            assert!(entry.is_match(e), "malformed entry {:?} in {:?}", e, header);
        }

        let parsed = HeaderValueList::parse(header).into_inner();
        let (last, rest) = parsed.split_last().unwrap();
        assert_eq!(last.name(), wildcard);
        assert_eq!(last.tenths(), Some(1));
        assert!(rest.iter().all(|v| v.name() != wildcard), "wildcard repeated in {:?}", header);

        let mut previous = u8::MAX;
        for value in rest {
            let key = value.tenths().unwrap_or(u8::MAX);
            assert!(key <= previous, "band order violated in {:?}", header);
            previous = key;
        }
    }

    #[test]
    fn test_fixed_len_is_clamped() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(calculate_num_choices(&mut rng, 5, &LengthOptions::fixed(3)), 3);
        assert_eq!(calculate_num_choices(&mut rng, 5, &LengthOptions::fixed(50)), 5);
    }

    #[test]
    fn test_random_len_within_bounds() {
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..200 {
            let n = calculate_num_choices(&mut rng, 10, &LengthOptions::between(2, 4));
            assert!((2..=4).contains(&n));

            let n = calculate_num_choices(&mut rng, 10, &LengthOptions::default());
            assert!(n <= 10);

            let n = calculate_num_choices(&mut rng, 3, &LengthOptions::between(1, 30));
            assert!((1..=3).contains(&n));
        }
    }

    #[test]
    fn test_min_above_max_collapses() {
        let mut rng = StdRng::seed_from_u64(3);
        let options = LengthOptions::between(8, 4);
        assert_eq!(calculate_num_choices(&mut rng, 10, &options), 4);
    }

    #[test]
    fn test_encoding_fixed_len_scenario() {
        let mut rng = StdRng::seed_from_u64(4);
        let catalog = catalog::tokens(Family::Encoding, Subset::Common);

        for _ in 0..50 {
            let options = LengthOptions::fixed(3);
            let header = generate_header(&mut rng, Family::Encoding, Variant::Realistic, &options);
            assert_well_formed(&header, "*");

            let parsed = HeaderValueList::parse(&header).into_inner();
            assert_eq!(parsed.len(), 4);
            for value in &parsed[..3] {
                assert!(catalog.contains(&value.name()));
            }
        }
    }

    #[test]
    fn test_all_families_well_formed() {
        let mut rng = StdRng::seed_from_u64(5);
        for family in Family::ALL {
            for variant in [Variant::Realistic, Variant::Full] {
                for _ in 0..25 {
                    let header =
                        generate_header(&mut rng, family, variant, &LengthOptions::default());
                    assert_well_formed(&header, family.wildcard());
                }
            }
        }
    }

    #[test]
    fn test_realistic_weights_in_range() {
        let mut rng = StdRng::seed_from_u64(6);
        for _ in 0..50 {
            let options = LengthOptions::default();
            let list = synthesize(&mut rng, Family::Mime, Variant::Realistic, &options);
            let values = list.into_inner();
            for value in &values[..values.len() - 1] {
                if let Some(t) = value.tenths() {
                    assert!((7..=10).contains(&t));
                }
            }
        }
    }

    #[test]
    fn test_empty_selection_is_only_wildcard() {
        let mut rng = StdRng::seed_from_u64(7);
        let options = LengthOptions::fixed(0);
        let header = generate_header(&mut rng, Family::Mime, Variant::Full, &options);
        assert_eq!(header, "*/*; q=0.1");
    }

    #[test]
    fn test_seeded_output_is_reproducible() {
        let options = LengthOptions::between(2, 8);
        let mut first = StdRng::seed_from_u64(9);
        let mut second = StdRng::seed_from_u64(9);
        let a = generate_header(&mut first, Family::Language, Variant::Full, &options);
        let b = generate_header(&mut second, Family::Language, Variant::Full, &options);
        assert_eq!(a, b);
    }
}
