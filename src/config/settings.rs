//! Settings structures for headergen-rs configuration

use crate::catalog::Family;
use crate::headers::{LengthOptions, Variant};
use crate::user_agent::UserAgentOptions;
use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use tracing::warn;

/// Main settings structure matching headergen.yml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub headers: HeaderSettings,
    pub user_agent: UserAgentOptions,
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: Settings = serde_yaml::from_str(&content)?;
        Ok(settings)
    }

    /// Merge with environment variables (HEADERGEN_* prefix)
    pub fn merge_env(&mut self) {
        self.merge_vars(|key| std::env::var(key).ok());
    }

    /// Apply overrides from any variable source. Unparsable numbers are ignored.
    pub fn merge_vars<F>(&mut self, var: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = var("HEADERGEN_DEBUG") {
            self.general.debug = val.parse().unwrap_or(false);
        }
        if let Some(val) = var("HEADERGEN_SEED") {
            if let Ok(seed) = val.parse() {
                self.general.seed = Some(seed);
            }
        }
        if let Some(val) = var("HEADERGEN_COUNT") {
            if let Ok(count) = val.parse() {
                self.general.count = count;
            }
        }
        if let Some(val) = var("HEADERGEN_FORMAT") {
            match val.parse() {
                Ok(format) => self.general.format = format,
                Err(e) => warn!("ignoring HEADERGEN_FORMAT: {}", e),
            }
        }
        if let Some(val) = var("HEADERGEN_REALISTIC") {
            self.headers.realistic = val.parse().unwrap_or(true);
        }
        if let Some(val) = var("HEADERGEN_PLATFORM") {
            self.user_agent.platform = Some(val);
        }
        if let Some(val) = var("HEADERGEN_ENGINE") {
            self.user_agent.engine = Some(val);
        }
        if let Some(val) = var("HEADERGEN_BROWSER") {
            self.user_agent.browser = Some(val);
        }
    }

    /// Reject settings that can never produce output
    pub fn validate(&self) -> Result<()> {
        if self.general.count == 0 {
            bail!("general.count must be at least 1");
        }
        self.user_agent.parse()?;

        for family in Family::ALL {
            let lengths = self.headers.lengths(family);
            if let Some(max_len) = lengths.max_len {
                if lengths.fixed_len.is_none() && lengths.min_len > max_len {
                    warn!(
                        "{}: min_len {} exceeds max_len {}, max_len will be used",
                        family.header_name(),
                        lengths.min_len,
                        max_len
                    );
                }
            }
        }
        Ok(())
    }
}

/// General settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    pub debug: bool,
    /// Header sets printed per run
    pub count: usize,
    /// Fixed seed for reproducible output
    pub seed: Option<u64>,
    pub format: OutputFormat,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            debug: false,
            count: 1,
            seed: None,
            format: OutputFormat::Text,
        }
    }
}

/// How generated header sets are printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => bail!("unknown output format: {}", other),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

/// Content-negotiation header settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderSettings {
    /// Draw from common tokens with high weights instead of the full catalogs
    pub realistic: bool,
    pub accept: LengthOptions,
    pub accept_charset: LengthOptions,
    pub accept_encoding: LengthOptions,
    pub accept_language: LengthOptions,
}

impl Default for HeaderSettings {
    fn default() -> Self {
        Self {
            realistic: true,
            accept: LengthOptions::default(),
            accept_charset: LengthOptions::default(),
            accept_encoding: LengthOptions::default(),
            accept_language: LengthOptions::default(),
        }
    }
}

impl HeaderSettings {
    /// Length options for one header family
    pub fn lengths(&self, family: Family) -> &LengthOptions {
        match family {
            Family::Mime => &self.accept,
            Family::Charset => &self.accept_charset,
            Family::Encoding => &self.accept_encoding,
            Family::Language => &self.accept_language,
        }
    }

    pub fn variant(&self) -> Variant {
        if self.realistic {
            Variant::Realistic
        } else {
            Variant::Full
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert!(!settings.general.debug);
        assert_eq!(settings.general.count, 1);
        assert_eq!(settings.general.format, OutputFormat::Text);
        assert!(settings.headers.realistic);
        assert_eq!(settings.headers.variant(), Variant::Realistic);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_parse_yaml() {
        let yaml = r#"
general:
  count: 3
  seed: 99
  format: json
headers:
  realistic: false
  accept_encoding:
    fixed_len: 3
  accept_language:
    min_len: 2
    max_len: 5
user_agent:
  platform: Windows
"#;
        let settings: Settings = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(settings.general.count, 3);
        assert_eq!(settings.general.seed, Some(99));
        assert_eq!(settings.general.format, OutputFormat::Json);
        assert_eq!(settings.headers.variant(), Variant::Full);
        assert_eq!(settings.headers.lengths(Family::Encoding), &LengthOptions::fixed(3));
        assert_eq!(settings.headers.lengths(Family::Language), &LengthOptions::between(2, 5));
        assert_eq!(settings.headers.lengths(Family::Mime), &LengthOptions::default());
        assert_eq!(settings.user_agent.platform.as_deref(), Some("Windows"));
    }

    #[test]
    fn test_merge_vars() {
        let vars: HashMap<&str, &str> = [
            ("HEADERGEN_DEBUG", "true"),
            ("HEADERGEN_SEED", "7"),
            ("HEADERGEN_COUNT", "not a number"),
            ("HEADERGEN_FORMAT", "JSON"),
            ("HEADERGEN_REALISTIC", "false"),
            ("HEADERGEN_BROWSER", "Firefox"),
        ]
        .into_iter()
        .collect();

        let mut settings = Settings::default();
        settings.merge_vars(|key| vars.get(key).map(|v| v.to_string()));

        assert!(settings.general.debug);
        assert_eq!(settings.general.seed, Some(7));
        assert_eq!(settings.general.count, 1);
        assert_eq!(settings.general.format, OutputFormat::Json);
        assert!(!settings.headers.realistic);
        assert_eq!(settings.user_agent.browser.as_deref(), Some("Firefox"));
        assert_eq!(settings.user_agent.platform, None);
    }

    #[test]
    fn test_validate_rejects_bad_settings() {
        let mut settings = Settings::default();
        settings.general.count = 0;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.user_agent.engine = Some("Trident".to_string());
        let err = settings.validate().unwrap_err();
        assert_eq!(err.to_string(), "unsupported engine: Trident");
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!(" Json ".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("xml".parse::<OutputFormat>().is_err());
    }
}
