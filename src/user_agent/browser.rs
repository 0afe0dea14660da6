//! Browser selection and browser fragments

use super::data::{
    APPLE_WEBKIT_VERSION, CHROME_VERSIONS, EDGE_VERSIONS, FIREFOX_VERSIONS, OPERA_VERSIONS,
    SAFARI_VERSION, YANDEX_VERSIONS,
};
use super::error::Result;
use super::pick;
use super::types::{Browser, Engine};
use super::version::{chained_version, pick_version, render_dotted, roll_forward, VersionSpec};
use once_cell::sync::Lazy;
use rand::Rng;
use regex::Regex;
use tracing::debug;

static WEBKIT_VERSION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"AppleWebKit/(\d+(?:\.\d+)*)").expect("valid AppleWebKit pattern"));

/// Numeric AppleWebKit version embedded in an engine fragment, if any
pub fn webkit_version(engine_fragment: &str) -> Option<Vec<u32>> {
    let captures = WEBKIT_VERSION.captures(engine_fragment)?;
    captures[1].split('.').map(|part| part.parse().ok()).collect()
}

/// Use the requested browser, or pick one built on the engine
pub fn select_browser<R: Rng + ?Sized>(
    rng: &mut R,
    requested: Option<Browser>,
    engine: Option<Engine>,
) -> Browser {
    if let Some(browser) = requested {
        return browser;
    }

    match engine {
        Some(engine) => pick(rng, engine.browsers()),
        None => pick(rng, &Browser::ALL),
    }
}

pub fn chrome_fragment<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("Chrome/{}", pick_version(rng, &CHROME_VERSIONS, false))
}

/// Firefox versions may drop a trailing `.0`
pub fn firefox_fragment<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("Firefox/{}", pick_version(rng, &FIREFOX_VERSIONS, true))
}

/// Safari token correlated with the AppleWebKit version of `engine_fragment`.
///
/// With a parsable AppleWebKit version the Safari version is rolled forward from it,
/// otherwise an independent, possibly shortened, AppleWebKit-shaped version is drawn.
pub fn safari_fragment<R: Rng + ?Sized>(rng: &mut R, engine_fragment: Option<&str>) -> String {
    let version = match engine_fragment.and_then(webkit_version) {
        Some(current) => roll_forward(rng, &current, &SAFARI_VERSION),
        None => chained_version(rng, &APPLE_WEBKIT_VERSION),
    };
    format!("Safari/{}", render_dotted(&version))
}

fn vendor_versions(browser: Browser) -> Option<&'static [VersionSpec]> {
    match browser {
        Browser::Opera => Some(OPERA_VERSIONS.as_slice()),
        Browser::Edge => Some(EDGE_VERSIONS.as_slice()),
        Browser::Yandex => Some(YANDEX_VERSIONS.as_slice()),
        Browser::Chrome | Browser::Firefox | Browser::Safari => None,
    }
}

/// Vendor token of a Chromium fork, e.g. `Edg/120.0.2350.91`
pub fn vendor_fragment<R: Rng + ?Sized>(rng: &mut R, browser: Browser) -> Option<String> {
    let token = browser.vendor_token()?;
    let versions = vendor_versions(browser)?;
    Some(format!("{}/{}", token, pick_version(rng, versions, false)))
}

/// Render the browser fragment.
///
/// Chromium browsers render `Chrome/<v> [<Vendor>/<v>] Safari/<v>`; the Safari token of
/// any browser is correlated with `engine_fragment`.
pub fn browser_fragment<R: Rng + ?Sized>(
    rng: &mut R,
    browser: Browser,
    engine_fragment: Option<&str>,
) -> String {
    match browser {
        Browser::Firefox => firefox_fragment(rng),
        Browser::Safari => safari_fragment(rng, engine_fragment),
        Browser::Chrome | Browser::Opera | Browser::Edge | Browser::Yandex => {
            let mut tokens = vec![chrome_fragment(rng)];
            tokens.extend(vendor_fragment(rng, browser));
            tokens.push(safari_fragment(rng, engine_fragment));
            tokens.join(" ")
        }
    }
}

/// Select a browser by name (or at random within the engine's browsers) and render it
pub fn generate_browser_fragment<R: Rng + ?Sized>(
    rng: &mut R,
    requested: Option<&str>,
    engine: Option<Engine>,
    engine_fragment: Option<&str>,
) -> Result<(String, Browser)> {
    let requested = requested.map(str::parse::<Browser>).transpose()?;
    let browser = select_browser(rng, requested, engine);
    debug!(%browser, ?engine, "selected browser");

    Ok((browser_fragment(rng, browser, engine_fragment), browser))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user_agent::UserAgentError;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use regex::Regex;

    const ENGINE: &str = "AppleWebKit/605.1.15 (KHTML, like Gecko)";

    fn safari_digits(fragment: &str) -> Vec<u32> {
        let version = fragment.rsplit("Safari/").next().unwrap();
        version.split('.').map(|p| p.parse().unwrap()).collect()
    }

    #[test]
    fn test_webkit_version() {
        assert_eq!(webkit_version(ENGINE), Some(vec![605, 1, 15]));
        assert_eq!(webkit_version("Gecko/20190101"), None);
        assert_eq!(webkit_version("AppleWebKit/99999999999.1"), None);
    }

    #[test]
    fn test_safari_rolls_forward_from_engine() {
        let mut rng = StdRng::seed_from_u64(1);
        let original = [605, 1, 15];
        for _ in 0..100 {
            let (fragment, browser) =
                generate_browser_fragment(&mut rng, Some("Safari"), None, Some(ENGINE)).unwrap();
            assert_eq!(browser, Browser::Safari);

            let digits = safari_digits(&fragment);
            match digits.iter().zip(original.iter()).position(|(a, b)| a != b) {
                Some(i) => {
                    assert_eq!(digits[..i], original[..i]);
                    assert!(digits[i] > original[i], "{} went backwards", fragment);
                }
                None => assert_eq!(digits, original),
            }
        }
    }

    #[test]
    fn test_safari_tail_can_be_shortened() {
        let mut rng = StdRng::seed_from_u64(8);
        let lengths: Vec<usize> = (0..200)
            .map(|_| safari_digits(&safari_fragment(&mut rng, Some(ENGINE))).len())
            .collect();
        assert!(lengths.iter().any(|&len| len < 3));
        assert!(lengths.iter().any(|&len| len == 3));
    }

    #[test]
    fn test_safari_without_engine_falls_back() {
        let mut rng = StdRng::seed_from_u64(2);
        for fragment_source in [None, Some("Gecko/20190101")] {
            for _ in 0..50 {
                let fragment = safari_fragment(&mut rng, fragment_source);
                let digits = safari_digits(&fragment);
                assert!((1..=3).contains(&digits.len()));
                assert!((500..615).contains(&digits[0]));
            }
        }
    }

    #[test]
    fn test_gecko_yields_firefox() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            let (fragment, browser) =
                generate_browser_fragment(&mut rng, None, Some(Engine::Gecko), None).unwrap();
            assert_eq!(browser, Browser::Firefox);
            assert!(fragment.starts_with("Firefox/"));
        }
    }

    #[test]
    fn test_chromium_fragments() {
        let mut rng = StdRng::seed_from_u64(4);
        let cases = [
            (Browser::Chrome, r"^Chrome/\d+\.0\.\d+\.\d+ Safari/[\d.]+$"),
            (Browser::Opera, r"^Chrome/\d+\.0\.\d+\.\d+ Opera/\d+\.0\.\d+\.\d+ Safari/[\d.]+$"),
            (Browser::Edge, r"^Chrome/\d+\.0\.\d+\.\d+ Edg/\d+\.0\.\d+\.\d+ Safari/[\d.]+$"),
            (Browser::Yandex, r"^Chrome/\d+\.0\.\d+\.\d+ YaBrowser/\d+\.\d+\.\d+ Safari/[\d.]+$"),
        ];
        for (browser, pattern) in cases {
            let re = Regex::new(pattern).unwrap();
            for _ in 0..20 {
                let fragment = browser_fragment(&mut rng, browser, Some(ENGINE));
                assert!(re.is_match(&fragment), "unexpected fragment {:?}", fragment);
            }
        }
    }

    #[test]
    fn test_chrome_build_tracks_major() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..50 {
            let fragment = chrome_fragment(&mut rng);
            let version = fragment.strip_prefix("Chrome/").unwrap();
            let parts: Vec<u32> = version.split('.').map(|p| p.parse().unwrap()).collect();
            let build = 2200 + 50 * (parts[0] - 40);
            assert!((40..133).contains(&parts[0]));
            assert!((build..build + 50).contains(&parts[2]));
            assert!(parts[3] < 225);
        }
    }

    #[test]
    fn test_firefox_versions() {
        let mut rng = StdRng::seed_from_u64(6);
        for _ in 0..50 {
            let fragment = firefox_fragment(&mut rng);
            let parts: Vec<&str> = fragment.strip_prefix("Firefox/").unwrap().split('.').collect();
            assert!((2..=3).contains(&parts.len()));
            assert_eq!(parts[1], "0");
        }
    }

    #[test]
    fn test_unsupported_browser() {
        let mut rng = StdRng::seed_from_u64(7);
        let err = generate_browser_fragment(&mut rng, Some("Netscape"), None, None).unwrap_err();
        assert_eq!(err, UserAgentError::UnsupportedBrowser("Netscape".to_string()));
    }
}
