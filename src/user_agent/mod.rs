//! User agent generation
//!
//! A user agent is assembled in stages: platform, then an engine the platform allows,
//! then a browser built on that engine. Each stage hands its choice to the next so the
//! final string stays internally consistent.

mod browser;
mod data;
mod engine;
mod error;
mod platform;
mod types;
mod version;

pub use browser::{browser_fragment, generate_browser_fragment, select_browser, webkit_version};
pub use engine::{engine_fragment, generate_engine_fragment, select_engine};
pub use error::{Result, UserAgentError};
pub use platform::{generate_platform_fragment, platform_fragment, select_platform};
pub use types::{Browser, Engine, Platform};
pub use version::{VersionPart, VersionSpec};

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Leading product token of every generated user agent
pub const MOZILLA_TOKEN: &str = "Mozilla/5.0";

/// Uniform pick from a non-empty static table
pub(crate) fn pick<R: Rng + ?Sized, T: Copy>(rng: &mut R, items: &[T]) -> T {
    items[rng.gen_range(0..items.len())]
}

/// Caller-facing user agent options, as names
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserAgentOptions {
    pub platform: Option<String>,
    pub engine: Option<String>,
    pub browser: Option<String>,
}

impl UserAgentOptions {
    /// Resolve the names, failing on the first unsupported one
    pub fn parse(&self) -> Result<UserAgentRequest> {
        Ok(UserAgentRequest {
            platform: self.platform.as_deref().map(str::parse::<Platform>).transpose()?,
            engine: self.engine.as_deref().map(str::parse::<Engine>).transpose()?,
            browser: self.browser.as_deref().map(str::parse::<Browser>).transpose()?,
        })
    }
}

/// Typed stage choices. `None` leaves the stage to random selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UserAgentRequest {
    pub platform: Option<Platform>,
    pub engine: Option<Engine>,
    pub browser: Option<Browser>,
}

/// A generated user agent with the choice made at every stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserAgent {
    pub platform: Platform,
    pub engine: Engine,
    pub browser: Browser,
    pub platform_fragment: String,
    pub engine_fragment: String,
    pub browser_fragment: String,
}

impl fmt::Display for UserAgent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) {} {}",
            MOZILLA_TOKEN, self.platform_fragment, self.engine_fragment, self.browser_fragment
        )
    }
}

/// Run the platform, engine and browser stages for an already validated request
pub fn assemble_user_agent<R: Rng + ?Sized>(rng: &mut R, request: UserAgentRequest) -> UserAgent {
    let platform = select_platform(rng, request.platform);
    let platform_fragment = platform_fragment(rng, platform);

    let engine = select_engine(rng, request.engine, Some(platform));
    let engine_fragment = engine_fragment(rng, engine);

    let browser = select_browser(rng, request.browser, Some(engine));
    let browser_fragment = browser_fragment(rng, browser, Some(&engine_fragment));

    debug!(%platform, %engine, %browser, "assembled user agent");

    UserAgent {
        platform,
        engine,
        browser,
        platform_fragment,
        engine_fragment,
        browser_fragment,
    }
}

/// Generate a user agent and keep the per-stage choices
pub fn generate_user_agent_parts<R: Rng + ?Sized>(
    rng: &mut R,
    options: &UserAgentOptions,
) -> Result<UserAgent> {
    let request = options.parse()?;
    Ok(assemble_user_agent(rng, request))
}

/// Generate a random but consistent user agent string
pub fn generate_user_agent<R: Rng + ?Sized>(
    rng: &mut R,
    options: &UserAgentOptions,
) -> Result<String> {
    generate_user_agent_parts(rng, options).map(|ua| ua.to_string())
}
