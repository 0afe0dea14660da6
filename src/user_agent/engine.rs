//! Engine selection and engine fragments

use super::data::{APPLE_WEBKIT_VERSION, GECKO_VERSION};
use super::error::Result;
use super::pick;
use super::types::{Engine, Platform};
use super::version::{calendar_version, render_dotted};
use rand::Rng;
use tracing::debug;

/// Use the requested engine, or pick one the platform allows
pub fn select_engine<R: Rng + ?Sized>(
    rng: &mut R,
    requested: Option<Engine>,
    platform: Option<Platform>,
) -> Engine {
    if let Some(engine) = requested {
        return engine;
    }

    match platform {
        Some(platform) => pick(rng, platform.engines()),
        None => pick(rng, &Engine::ALL),
    }
}

/// e.g. `AppleWebKit/537.36.1 (KHTML, like Gecko)`
pub fn apple_webkit_fragment<R: Rng + ?Sized>(rng: &mut R) -> String {
    let version = APPLE_WEBKIT_VERSION.resolve(rng);
    format!("AppleWebKit/{} (KHTML, like Gecko)", render_dotted(&version))
}

/// e.g. `Gecko/20190207`
pub fn gecko_fragment<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("Gecko/{}", calendar_version(rng, &GECKO_VERSION))
}

/// Render the engine fragment. Blink still reports itself as AppleWebKit.
pub fn engine_fragment<R: Rng + ?Sized>(rng: &mut R, engine: Engine) -> String {
    match engine {
        Engine::AppleWebKit | Engine::Blink => apple_webkit_fragment(rng),
        Engine::Gecko => gecko_fragment(rng),
    }
}

/// Select an engine by name (or at random within the platform's engines) and render it
pub fn generate_engine_fragment<R: Rng + ?Sized>(
    rng: &mut R,
    requested: Option<&str>,
    platform: Option<Platform>,
) -> Result<(String, Engine)> {
    let requested = requested.map(str::parse::<Engine>).transpose()?;
    let engine = select_engine(rng, requested, platform);
    debug!(%engine, ?platform, "selected engine");

    Ok((engine_fragment(rng, engine), engine))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user_agent::UserAgentError;
    use chrono::NaiveDate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use regex::Regex;

    #[test]
    fn test_ios_forces_apple_webkit() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..50 {
            let (_, engine) =
                generate_engine_fragment(&mut rng, None, Some(Platform::Ios)).unwrap();
            assert_eq!(engine, Engine::AppleWebKit);
        }
    }

    #[test]
    fn test_unconstrained_engine_varies() {
        let mut rng = StdRng::seed_from_u64(2);
        let engines: std::collections::HashSet<_> = (0..100)
            .map(|_| select_engine(&mut rng, None, Some(Platform::Linux)))
            .collect();
        assert_eq!(engines.len(), 3);
    }

    #[test]
    fn test_apple_webkit_fragment() {
        let re = Regex::new(r"^AppleWebKit/\d+\.\d+\.\d+ \(KHTML, like Gecko\)$").unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..20 {
            let fragment = engine_fragment(&mut rng, Engine::Blink);
            assert!(re.is_match(&fragment), "unexpected fragment {:?}", fragment);
        }
    }

    #[test]
    fn test_gecko_dates_are_calendar_valid() {
        let mut rng = StdRng::seed_from_u64(4);
        for _ in 0..1000 {
            let fragment = gecko_fragment(&mut rng);
            let date = fragment.strip_prefix("Gecko/").unwrap();
            assert_eq!(date.len(), 8);

            let year: i32 = date[..4].parse().unwrap();
            let month: u32 = date[4..6].parse().unwrap();
            let day: u32 = date[6..].parse().unwrap();
            assert!((2015..2024).contains(&year));
            assert!(
                NaiveDate::from_ymd_opt(year, month, day).is_some(),
                "invalid gecko date {}",
                date
            );
        }
    }

    #[test]
    fn test_unsupported_engine() {
        let mut rng = StdRng::seed_from_u64(5);
        let err = generate_engine_fragment(&mut rng, Some("Trident"), None).unwrap_err();
        assert_eq!(err, UserAgentError::UnsupportedEngine("Trident".to_string()));
    }
}
