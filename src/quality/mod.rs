//! Quality values for content-negotiation headers
//!
//! A header value is a list of tokens, each optionally weighted with a `q` value
//! in `[0.0, 1.0]`. Rendering always uses exactly one decimal digit, and the band
//! sorter groups entries by that rounded value.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Band key for entries without an explicit weight. Ranks above every numeric band.
const UNWEIGHTED_BAND: u8 = u8::MAX;

/// A weight outside `[0.0, 1.0]`
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("quality must be within [0.0, 1.0], got {0}")]
pub struct InvalidQuality(pub f64);

/// A header token with an optional preference weight in `[0.0, 1.0]`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QualityValue {
    name: String,
    quality: Option<f64>,
}

impl QualityValue {
    /// Create an unweighted entry
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quality: None,
        }
    }

    /// Create a weighted entry, clamping the weight into `[0.0, 1.0]`. NaN becomes `0.0`.
    pub fn with_quality(name: impl Into<String>, quality: f64) -> Self {
        let quality = if quality.is_nan() {
            0.0
        } else {
            quality.clamp(0.0, 1.0)
        };
        Self {
            name: name.into(),
            quality: Some(quality),
        }
    }

    /// Create an entry, rejecting weights outside `[0.0, 1.0]`
    pub fn try_new(name: impl Into<String>, quality: Option<f64>) -> Result<Self, InvalidQuality> {
        match quality {
            Some(q) if !(0.0..=1.0).contains(&q) => Err(InvalidQuality(q)),
            quality => Ok(Self {
                name: name.into(),
                quality,
            }),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quality(&self) -> Option<f64> {
        self.quality
    }

    /// Weight rounded to one decimal and expressed in tenths (`0.7` => `7`)
    pub fn tenths(&self) -> Option<u8> {
        self.quality.map(|q| (q * 10.0).round() as u8)
    }
}

impl<'de> Deserialize<'de> for QualityValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Raw {
            name: String,
            #[serde(default)]
            quality: Option<f64>,
        }

        let raw = Raw::deserialize(deserializer)?;
        QualityValue::try_new(raw.name, raw.quality).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for QualityValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.tenths() {
            Some(t) => write!(f, "{}; q={}.{}", self.name, t / 10, t % 10),
            None => f.write_str(&self.name),
        }
    }
}

/// Ordered entries of a single header value
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HeaderValueList(Vec<QualityValue>);

impl HeaderValueList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, value: QualityValue) {
        self.0.push(value);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, QualityValue> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<QualityValue> {
        self.0
    }

    /// Parse a rendered header value such as `"gzip, br; q=0.8, *; q=0.1"`.
    ///
    /// Malformed weights are dropped rather than rejected, leaving the token unweighted.
    pub fn parse(header: &str) -> Self {
        let entries = header
            .split(',')
            .filter_map(|part| {
                let mut parts = part.trim().split(';');
                let name = parts.next()?.trim();
                if name.is_empty() {
                    return None;
                }

                let quality = parts.next().and_then(|q| {
                    q.trim()
                        .strip_prefix("q=")
                        .and_then(|v| v.parse::<f64>().ok())
                });

                Some(match quality {
                    Some(q) => QualityValue::with_quality(name, q),
                    None => QualityValue::new(name),
                })
            })
            .collect();

        Self(entries)
    }
}

impl From<Vec<QualityValue>> for HeaderValueList {
    fn from(values: Vec<QualityValue>) -> Self {
        Self(values)
    }
}

impl FromIterator<QualityValue> for HeaderValueList {
    fn from_iter<I: IntoIterator<Item = QualityValue>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a HeaderValueList {
    type Item = &'a QualityValue;
    type IntoIter = std::slice::Iter<'a, QualityValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for HeaderValueList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", value)?;
        }
        Ok(())
    }
}

/// Order entries by descending rounded weight, shuffling within each band.
///
/// Unweighted entries form the highest band. The result is a permutation of the input.
pub fn sort_qualities<R: Rng + ?Sized>(
    rng: &mut R,
    values: Vec<QualityValue>,
) -> Vec<QualityValue> {
    let mut bands: BTreeMap<u8, Vec<QualityValue>> = BTreeMap::new();
    for value in values {
        let key = value.tenths().unwrap_or(UNWEIGHTED_BAND);
        bands.entry(key).or_default().push(value);
    }

    let mut sorted = Vec::new();
    for (_, mut band) in bands.into_iter().rev() {
        band.shuffle(rng);
        sorted.extend(band);
    }
    sorted
}
