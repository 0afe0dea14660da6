//! Platform, engine and browser enumerations and their compatibility tables

use super::error::UserAgentError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Operating system reported in the platform fragment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    Windows,
    Macintosh,
    Linux,
    Android,
    #[serde(rename = "IOS")]
    Ios,
}

/// Rendering engine reported after the platform fragment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Engine {
    AppleWebKit,
    Gecko,
    Blink,
}

/// Browser reported in the trailing fragment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Browser {
    Chrome,
    Firefox,
    Safari,
    Opera,
    Edge,
    Yandex,
}

/// Engines a platform may report. Platforms not listed accept every engine.
const PLATFORM_ENGINES: &[(Platform, &[Engine])] = &[(Platform::Ios, &[Engine::AppleWebKit])];

/// Browsers built on each engine
const ENGINE_BROWSERS: &[(Engine, &[Browser])] = &[
    (Engine::AppleWebKit, &[Browser::Safari]),
    (
        Engine::Blink,
        &[Browser::Chrome, Browser::Opera, Browser::Edge, Browser::Yandex],
    ),
    (Engine::Gecko, &[Browser::Firefox]),
];

impl Platform {
    pub const ALL: [Platform; 5] = [
        Platform::Windows,
        Platform::Macintosh,
        Platform::Linux,
        Platform::Android,
        Platform::Ios,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Windows => "Windows",
            Platform::Macintosh => "Macintosh",
            Platform::Linux => "Linux",
            Platform::Android => "Android",
            Platform::Ios => "IOS",
        }
    }

    /// Engines this platform may be paired with
    pub fn engines(&self) -> &'static [Engine] {
        PLATFORM_ENGINES
            .iter()
            .find(|(platform, _)| platform == self)
            .map(|(_, engines)| *engines)
            .unwrap_or(&Engine::ALL)
    }
}

impl Engine {
    pub const ALL: [Engine; 3] = [Engine::AppleWebKit, Engine::Gecko, Engine::Blink];

    pub fn as_str(&self) -> &'static str {
        match self {
            Engine::AppleWebKit => "AppleWebKit",
            Engine::Gecko => "Gecko",
            Engine::Blink => "Blink",
        }
    }

    /// Browsers built on this engine
    pub fn browsers(&self) -> &'static [Browser] {
        ENGINE_BROWSERS
            .iter()
            .find(|(engine, _)| engine == self)
            .map(|(_, browsers)| *browsers)
            .unwrap_or(&Browser::ALL)
    }
}

impl Browser {
    pub const ALL: [Browser; 6] = [
        Browser::Chrome,
        Browser::Firefox,
        Browser::Safari,
        Browser::Opera,
        Browser::Edge,
        Browser::Yandex,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Browser::Chrome => "Chrome",
            Browser::Firefox => "Firefox",
            Browser::Safari => "Safari",
            Browser::Opera => "Opera",
            Browser::Edge => "Edge",
            Browser::Yandex => "Yandex",
        }
    }

    /// Vendor token inserted between the Chrome and Safari tokens of Chromium forks
    pub fn vendor_token(&self) -> Option<&'static str> {
        match self {
            Browser::Opera => Some("Opera"),
            Browser::Edge => Some("Edg"),
            Browser::Yandex => Some("YaBrowser"),
            Browser::Chrome | Browser::Firefox | Browser::Safari => None,
        }
    }

    /// Whether the fragment carries the `Chrome/... Safari/...` pair
    pub fn is_chromium(&self) -> bool {
        matches!(
            self,
            Browser::Chrome | Browser::Opera | Browser::Edge | Browser::Yandex
        )
    }
}

fn parse_named<T: Copy>(
    value: &str,
    all: &[T],
    name: impl Fn(&T) -> &'static str,
) -> Option<T> {
    let value = value.trim();
    all.iter()
        .find(|candidate| name(*candidate).eq_ignore_ascii_case(value))
        .copied()
}

impl FromStr for Platform {
    type Err = UserAgentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_named(s, &Platform::ALL, Platform::as_str)
            .ok_or_else(|| UserAgentError::UnsupportedPlatform(s.to_string()))
    }
}

impl FromStr for Engine {
    type Err = UserAgentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_named(s, &Engine::ALL, Engine::as_str)
            .ok_or_else(|| UserAgentError::UnsupportedEngine(s.to_string()))
    }
}

impl FromStr for Browser {
    type Err = UserAgentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_named(s, &Browser::ALL, Browser::as_str)
            .ok_or_else(|| UserAgentError::UnsupportedBrowser(s.to_string()))
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Browser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
