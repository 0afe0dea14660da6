//! headergen-rs: randomized, grammar-valid HTTP request headers
//!
//! Generates Accept, Accept-Charset, Accept-Encoding and Accept-Language values from
//! static token catalogs, and consistent browser User-Agent strings where the platform
//! constrains the engine and the engine constrains the browser.

pub mod catalog;
pub mod config;
pub mod generator;
pub mod headers;
pub mod quality;
pub mod user_agent;

pub use config::Settings;
pub use generator::Generator;
pub use headers::{HeaderSet, LengthOptions, Variant};
pub use quality::{HeaderValueList, QualityValue};
pub use user_agent::{Browser, Engine, Platform, UserAgent, UserAgentError, UserAgentOptions};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
