//! Version synthesis
//!
//! A [`VersionSpec`] is an ordered list of parts, each either a literal, a half-open
//! numeric range, or a set of alternative parts picked by a discriminator computed from
//! the components resolved so far. Every browser and engine version in this crate goes
//! through [`VersionSpec::resolve_with`].

use rand::seq::SliceRandom;
use rand::Rng;

/// One component of a version specification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionPart {
    /// Literal value
    Fixed(u32),
    /// Uniform draw from `lo..hi` (upper bound excluded)
    Range(u32, u32),
    /// One of several parts, selected by the discriminator
    Alternatives(Vec<VersionPart>),
}

impl VersionPart {
    fn resolve<R, F>(&self, rng: &mut R, resolved: &[u32], discriminate: &F) -> u32
    where
        R: Rng + ?Sized,
        F: Fn(&[u32]) -> usize,
    {
        match self {
            VersionPart::Fixed(value) => *value,
            VersionPart::Range(lo, hi) if lo < hi => rng.gen_range(*lo..*hi),
            VersionPart::Range(lo, _) => *lo,
            VersionPart::Alternatives(alternatives) => {
                let index = discriminate(resolved);
                match alternatives.get(index).or_else(|| alternatives.last()) {
                    Some(part) => part.resolve(rng, resolved, discriminate),
                    None => 0,
                }
            }
        }
    }

    /// Largest value this part can produce
    pub fn max(&self) -> u32 {
        match self {
            VersionPart::Fixed(value) => *value,
            VersionPart::Range(lo, hi) => hi.saturating_sub(1).max(*lo),
            VersionPart::Alternatives(alternatives) => {
                alternatives.iter().map(VersionPart::max).max().unwrap_or(0)
            }
        }
    }
}

/// Ordered parts describing a family of versions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionSpec(Vec<VersionPart>);

impl VersionSpec {
    pub fn new(parts: Vec<VersionPart>) -> Self {
        Self(parts)
    }

    pub fn parts(&self) -> &[VersionPart] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Resolve every part, taking the first alternative wherever there is a choice
    pub fn resolve<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<u32> {
        self.resolve_with(rng, first_alternative)
    }

    /// Resolve parts left to right.
    ///
    /// `discriminate` receives the components resolved so far and returns the index of
    /// the alternative to use for the current part.
    pub fn resolve_with<R, F>(&self, rng: &mut R, discriminate: F) -> Vec<u32>
    where
        R: Rng + ?Sized,
        F: Fn(&[u32]) -> usize,
    {
        let mut resolved = Vec::with_capacity(self.0.len());
        for part in &self.0 {
            let value = part.resolve(rng, &resolved, &discriminate);
            resolved.push(value);
        }
        resolved
    }
}

impl From<Vec<VersionPart>> for VersionSpec {
    fn from(parts: Vec<VersionPart>) -> Self {
        Self(parts)
    }
}

fn first_alternative(_: &[u32]) -> usize {
    0
}

/// Join components with dots, e.g. `[605, 1, 15]` => `"605.1.15"`
pub fn render_dotted(parts: &[u32]) -> String {
    parts
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(".")
}

/// Pack a `[year, month, day]` triple into `YYYYMMDD`
pub fn render_calendar(parts: &[u32]) -> String {
    parts
        .iter()
        .enumerate()
        .map(|(i, p)| if i == 0 { format!("{:04}", p) } else { format!("{:02}", p) })
        .collect()
}

/// Resolve a spec into a dotted version.
///
/// With `drop_last_zero`, a trailing `0` component is omitted half of the time.
pub fn simple_version<R: Rng + ?Sized>(
    rng: &mut R,
    spec: &VersionSpec,
    drop_last_zero: bool,
) -> String {
    let mut parts = spec.resolve(rng);
    if drop_last_zero && parts.len() > 1 && parts.last() == Some(&0) && rng.gen_bool(0.5) {
        parts.pop();
    }
    render_dotted(&parts)
}

/// Pick one spec out of a family and resolve it as a dotted version
pub fn pick_version<R: Rng + ?Sized>(
    rng: &mut R,
    family: &[VersionSpec],
    drop_last_zero: bool,
) -> String {
    match family.choose(rng) {
        Some(spec) => simple_version(rng, spec, drop_last_zero),
        None => String::new(),
    }
}

/// Day-range alternative for a partially resolved `[year, month, ..]` date.
///
/// Index 0 covers 31-day months, 1 covers 30-day months, 2 is February in a leap
/// year and 3 is February otherwise. Leap years are every fourth year, with no
/// century exception.
pub fn day_alternative(resolved: &[u32]) -> usize {
    let year = resolved.first().copied().unwrap_or(0);
    let month = resolved.get(1).copied().unwrap_or(1);

    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 0,
        4 | 6 | 9 | 11 => 1,
        _ if year % 4 == 0 => 2,
        _ => 3,
    }
}

/// Resolve a `[year, month, day alternatives]` spec into `YYYYMMDD`
pub fn calendar_version<R: Rng + ?Sized>(rng: &mut R, spec: &VersionSpec) -> String {
    render_calendar(&spec.resolve_with(rng, day_alternative))
}

/// Resolve components left to right, stopping after each one with even odds.
///
/// At least one component is always produced.
pub fn chained_version<R: Rng + ?Sized>(rng: &mut R, spec: &VersionSpec) -> Vec<u32> {
    let mut version = Vec::with_capacity(spec.len());
    for part in spec.parts() {
        let value = part.resolve(rng, &version, &first_alternative);
        version.push(value);
        if rng.gen_bool(0.5) {
            break;
        }
    }
    version
}

/// Derive a version that never sorts below `current`.
///
/// Components are walked left to right. Until one actually changes, each is redrawn
/// between its current value and the part maximum. From the first change on, every
/// following component is drawn from its full range, and after each such draw the
/// version is cut short with even odds. Components of `current` beyond `spec` are kept
/// only while nothing has changed.
pub fn roll_forward<R: Rng + ?Sized>(
    rng: &mut R,
    current: &[u32],
    spec: &VersionSpec,
) -> Vec<u32> {
    let mut version = Vec::with_capacity(current.len().max(spec.len()));
    let mut diverged = false;

    for (i, part) in spec.parts().iter().enumerate() {
        if diverged {
            let value = part.resolve(rng, &version, &first_alternative);
            version.push(value);
            if rng.gen_bool(0.5) {
                return version;
            }
            continue;
        }

        let Some(&existing) = current.get(i) else {
            return version;
        };
        let max = part.max();
        let value = if existing < max {
            rng.gen_range(existing..=max)
        } else {
            existing
        };
        diverged = value != existing;
        version.push(value);
    }

    if !diverged {
        version.extend(current.iter().skip(spec.len()));
    }
    version
}
