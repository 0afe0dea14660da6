//! A full set of request headers for one outbound request

use super::generate_header;
use crate::catalog::Family;
use crate::config::HeaderSettings;
use crate::user_agent::{self, UserAgentOptions};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Generated header values, ready to attach to a request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderSet {
    #[serde(rename = "Accept")]
    pub accept: String,
    #[serde(rename = "Accept-Charset")]
    pub accept_charset: String,
    #[serde(rename = "Accept-Encoding")]
    pub accept_encoding: String,
    #[serde(rename = "Accept-Language")]
    pub accept_language: String,
    #[serde(rename = "User-Agent")]
    pub user_agent: String,
}

impl HeaderSet {
    /// `(header-name, value)` pairs in a stable order
    pub fn pairs(&self) -> [(&'static str, &str); 5] {
        [
            (Family::Mime.header_name(), self.accept.as_str()),
            (Family::Charset.header_name(), self.accept_charset.as_str()),
            (Family::Encoding.header_name(), self.accept_encoding.as_str()),
            (Family::Language.header_name(), self.accept_language.as_str()),
            ("User-Agent", self.user_agent.as_str()),
        ]
    }
}

impl fmt::Display for HeaderSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, value) in self.pairs() {
            writeln!(f, "{}: {}", name, value)?;
        }
        Ok(())
    }
}

/// Generate every content-negotiation header plus a user agent
pub fn generate_header_set<R: Rng + ?Sized>(
    rng: &mut R,
    headers: &HeaderSettings,
    ua_options: &UserAgentOptions,
) -> user_agent::Result<HeaderSet> {
    // Validate before drawing anything
    let request = ua_options.parse()?;
    let variant = headers.variant();
    let header = |rng: &mut R, family: Family| {
        generate_header(rng, family, variant, headers.lengths(family))
    };

    let accept = header(rng, Family::Mime);
    let accept_charset = header(rng, Family::Charset);
    let accept_encoding = header(rng, Family::Encoding);
    let accept_language = header(rng, Family::Language);
    let user_agent = user_agent::assemble_user_agent(rng, request).to_string();

    Ok(HeaderSet {
        accept,
        accept_charset,
        accept_encoding,
        accept_language,
        user_agent,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headers::tests::assert_well_formed;
    use crate::user_agent::UserAgentError;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_header_set_is_well_formed() {
        let mut rng = StdRng::seed_from_u64(1);
        for realistic in [true, false] {
            let settings = HeaderSettings {
                realistic,
                ..Default::default()
            };
            let set =
                generate_header_set(&mut rng, &settings, &UserAgentOptions::default()).unwrap();
            assert_well_formed(&set.accept, "*/*");
            assert_well_formed(&set.accept_charset, "*");
            assert_well_formed(&set.accept_encoding, "*");
            assert_well_formed(&set.accept_language, "*");
            assert!(set.user_agent.starts_with("Mozilla/5.0 ("));
        }
    }

    #[test]
    fn test_pairs_and_display() {
        let mut rng = StdRng::seed_from_u64(2);
        let set = generate_header_set(
            &mut rng,
            &HeaderSettings::default(),
            &UserAgentOptions::default(),
        )
        .unwrap();

        let names: Vec<&str> = set.pairs().iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            vec![
                "Accept",
                "Accept-Charset",
                "Accept-Encoding",
                "Accept-Language",
                "User-Agent"
            ]
        );

        let rendered = set.to_string();
        assert_eq!(rendered.lines().count(), 5);
        assert!(rendered.contains(&format!("User-Agent: {}\n", set.user_agent)));
    }

    #[test]
    fn test_json_uses_header_names() {
        let mut rng = StdRng::seed_from_u64(3);
        let set = generate_header_set(
            &mut rng,
            &HeaderSettings::default(),
            &UserAgentOptions::default(),
        )
        .unwrap();

        let json = serde_json::to_value(&set).unwrap();
        assert_eq!(json["Accept-Encoding"], set.accept_encoding.as_str());
        assert_eq!(json["User-Agent"], set.user_agent.as_str());

        let back: HeaderSet = serde_json::from_value(json).unwrap();
        assert_eq!(back, set);
    }

    #[test]
    fn test_unsupported_user_agent_option() {
        let mut rng = StdRng::seed_from_u64(4);
        let options = UserAgentOptions {
            platform: Some("BeOS".to_string()),
            ..Default::default()
        };
        let err = generate_header_set(&mut rng, &HeaderSettings::default(), &options).unwrap_err();
        assert_eq!(err, UserAgentError::UnsupportedPlatform("BeOS".to_string()));
    }

    #[test]
    fn test_seeded_sets_match() {
        let settings = HeaderSettings::default();
        let options = UserAgentOptions::default();
        let a = generate_header_set(&mut StdRng::seed_from_u64(5), &settings, &options).unwrap();
        let b = generate_header_set(&mut StdRng::seed_from_u64(5), &settings, &options).unwrap();
        assert_eq!(a, b);
    }
}
