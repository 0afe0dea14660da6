//! Generator handle
//!
//! [`Generator`] owns the random source every operation draws from. Keep one per
//! worker thread, or share one behind a `Mutex`; seeding it makes output reproducible.

use crate::catalog::Family;
use crate::config::HeaderSettings;
use crate::headers::{self, HeaderSet, LengthOptions, Variant};
use crate::quality::{self, QualityValue};
use crate::user_agent::{self, UserAgent, UserAgentOptions};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Debug, Clone)]
pub struct Generator<R = StdRng> {
    rng: R,
}

impl Generator<StdRng> {
    /// Deterministic generator: equal seeds give byte-identical output
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl Default for Generator<StdRng> {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl<R: Rng> Generator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    pub fn into_inner(self) -> R {
        self.rng
    }

    /// Band-sort quality values with this generator's shuffles
    pub fn sort_qualities(&mut self, values: Vec<QualityValue>) -> Vec<QualityValue> {
        quality::sort_qualities(&mut self.rng, values)
    }

    pub fn header(&mut self, family: Family, variant: Variant, options: &LengthOptions) -> String {
        headers::generate_header(&mut self.rng, family, variant, options)
    }

    pub fn accept(&mut self, variant: Variant, options: &LengthOptions) -> String {
        self.header(Family::Mime, variant, options)
    }

    pub fn accept_charset(&mut self, variant: Variant, options: &LengthOptions) -> String {
        self.header(Family::Charset, variant, options)
    }

    pub fn accept_encoding(&mut self, variant: Variant, options: &LengthOptions) -> String {
        self.header(Family::Encoding, variant, options)
    }

    pub fn accept_language(&mut self, variant: Variant, options: &LengthOptions) -> String {
        self.header(Family::Language, variant, options)
    }

    pub fn user_agent(&mut self, options: &UserAgentOptions) -> user_agent::Result<String> {
        user_agent::generate_user_agent(&mut self.rng, options)
    }

    /// Like [`Generator::user_agent`], keeping the platform, engine and browser chosen
    pub fn user_agent_parts(
        &mut self,
        options: &UserAgentOptions,
    ) -> user_agent::Result<UserAgent> {
        user_agent::generate_user_agent_parts(&mut self.rng, options)
    }

    pub fn header_set(
        &mut self,
        headers: &HeaderSettings,
        ua_options: &UserAgentOptions,
    ) -> user_agent::Result<HeaderSet> {
        headers::generate_header_set(&mut self.rng, headers, ua_options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user_agent::{Browser, UserAgentError};
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::sync::Mutex;

    #[test]
    fn test_seeded_generators_agree() {
        let mut a = Generator::seeded(11);
        let mut b = Generator::seeded(11);
        let options = LengthOptions::default();
        let ua = UserAgentOptions::default();

        for family in Family::ALL {
            assert_eq!(
                a.header(family, Variant::Full, &options),
                b.header(family, Variant::Full, &options)
            );
        }
        assert_eq!(a.user_agent(&ua).unwrap(), b.user_agent(&ua).unwrap());
        assert_eq!(
            a.header_set(&HeaderSettings::default(), &ua).unwrap(),
            b.header_set(&HeaderSettings::default(), &ua).unwrap()
        );
    }

    #[test]
    fn test_family_shortcuts() {
        let mut generator = Generator::seeded(12);
        let fixed = LengthOptions::fixed(2);
        let accept = generator.accept(Variant::Realistic, &fixed);
        assert!(accept.ends_with("*/*; q=0.1"));
        assert_eq!(accept.split(", ").count(), 3);

        let encoding = generator.accept_encoding(Variant::Full, &fixed);
        assert!(encoding.ends_with(", *; q=0.1"));

        let language = generator.accept_language(Variant::Realistic, &LengthOptions::fixed(0));
        assert_eq!(language, "*; q=0.1");

        let charset = generator.accept_charset(Variant::Realistic, &LengthOptions::fixed(0));
        assert!(charset.contains("utf-8"));
    }

    #[test]
    fn test_user_agent_parts() {
        let mut generator = Generator::seeded(13);
        let options = UserAgentOptions {
            engine: Some("Gecko".to_string()),
            ..Default::default()
        };
        let ua = generator.user_agent_parts(&options).unwrap();
        assert_eq!(ua.browser, Browser::Firefox);

        let bad = UserAgentOptions {
            browser: Some("Netscape".to_string()),
            ..Default::default()
        };
        assert_eq!(
            generator.user_agent(&bad),
            Err(UserAgentError::UnsupportedBrowser("Netscape".to_string()))
        );
    }

    #[test]
    fn test_custom_rng() {
        let mut generator = Generator::new(StepRng::new(0, 1));
        let sorted = generator.sort_qualities(vec![
            QualityValue::with_quality("low", 0.2),
            QualityValue::new("plain"),
        ]);
        assert_eq!(sorted[0].name(), "plain");
        assert_eq!(sorted[1].name(), "low");
    }

    #[test]
    fn test_rng_access_keeps_stream() {
        let mut reference = StdRng::seed_from_u64(15);
        let mut generator = Generator::seeded(15);

        let first: u64 = generator.rng_mut().gen();
        assert_eq!(first, reference.gen::<u64>());

        let mut rng = generator.into_inner();
        assert_eq!(rng.gen::<u64>(), reference.gen::<u64>());
    }

    #[test]
    fn test_shared_behind_mutex() {
        let shared = Mutex::new(Generator::seeded(14));
        std::thread::scope(|scope| {
            let joins: Vec<_> = (0..4)
                .map(|_| {
                    scope.spawn(|| {
                        let mut generator = shared.lock().unwrap();
                        generator.user_agent(&UserAgentOptions::default()).unwrap()
                    })
                })
                .collect();
            for join in joins {
                assert!(join.join().unwrap().starts_with("Mozilla/5.0"));
            }
        });
    }
}
