//! Platform selection and platform fragments

use super::data::{
    ANDROID_DEVICES, ANDROID_VERSIONS, IOS_DEVICES, IOS_VERSIONS, LINUX_ARCHITECTURES,
    LINUX_DISTRIBUTIONS, MAC_CPUS, MAC_OS_APPLE_SILICON_VERSIONS, MAC_OS_INTEL_VERSIONS,
    WINDOWS_ARCHITECTURES, WINDOWS_VERSIONS,
};
use super::error::Result;
use super::pick;
use super::types::Platform;
use rand::Rng;
use tracing::debug;

/// Use the requested platform, or pick one uniformly
pub fn select_platform<R: Rng + ?Sized>(rng: &mut R, requested: Option<Platform>) -> Platform {
    match requested {
        Some(platform) => platform,
        None => pick(rng, &Platform::ALL),
    }
}

/// e.g. `Windows NT 10.0; Win64; x64`
pub fn windows_fragment<R: Rng + ?Sized>(rng: &mut R) -> String {
    let version = pick(rng, WINDOWS_VERSIONS);
    let architecture = pick(rng, WINDOWS_ARCHITECTURES);
    format!("Windows {}; {}", version, architecture)
}

/// e.g. `Macintosh; Intel Mac OS X 10_15_7`
pub fn mac_fragment<R: Rng + ?Sized>(rng: &mut R) -> String {
    let cpu = pick(rng, MAC_CPUS);
    let versions = if cpu == "Intel" {
        MAC_OS_INTEL_VERSIONS
    } else {
        MAC_OS_APPLE_SILICON_VERSIONS
    };
    format!("Macintosh; {} Mac OS X {}", cpu, pick(rng, versions))
}

/// e.g. `X11; Ubuntu; Linux x86_64`, with the `X11` and distribution segments optional
pub fn linux_fragment<R: Rng + ?Sized>(rng: &mut R) -> String {
    let prefix = pick(rng, &[Some("X11"), None]);
    let distribution = pick(rng, LINUX_DISTRIBUTIONS);
    let kernel = format!("Linux {}", pick(rng, LINUX_ARCHITECTURES));

    [prefix, distribution, Some(kernel.as_str())]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join("; ")
}

/// e.g. `Linux; Android 13; Pixel 7` or `Android 12; Mobile; Samsung Galaxy S22`
pub fn android_fragment<R: Rng + ?Sized>(rng: &mut R) -> String {
    let layout = pick(rng, &[Some("Linux"), Some("Mobile"), None]);
    let version = pick(rng, ANDROID_VERSIONS);
    let device = pick(rng, ANDROID_DEVICES);

    format!(
        "{}Android {}{}; {}",
        if layout == Some("Linux") { "Linux; " } else { "" },
        version,
        if layout == Some("Mobile") { "; Mobile" } else { "" },
        device
    )
}

/// e.g. `iPhone; CPU iPhone OS 17_5 like Mac OS X`
pub fn ios_fragment<R: Rng + ?Sized>(rng: &mut R) -> String {
    let version = pick(rng, IOS_VERSIONS);
    let (device, prefix) = pick(rng, IOS_DEVICES);
    format!("{}; {} {} like Mac OS X", device, prefix, version)
}

/// Render the parenthesised platform fragment for `platform`
pub fn platform_fragment<R: Rng + ?Sized>(rng: &mut R, platform: Platform) -> String {
    match platform {
        Platform::Windows => windows_fragment(rng),
        Platform::Macintosh => mac_fragment(rng),
        Platform::Linux => linux_fragment(rng),
        Platform::Android => android_fragment(rng),
        Platform::Ios => ios_fragment(rng),
    }
}

/// Select a platform by name (or at random) and render its fragment
pub fn generate_platform_fragment<R: Rng + ?Sized>(
    rng: &mut R,
    requested: Option<&str>,
) -> Result<(String, Platform)> {
    let requested = requested.map(str::parse::<Platform>).transpose()?;
    let platform = select_platform(rng, requested);
    debug!(%platform, "selected platform");

    Ok((platform_fragment(rng, platform), platform))
}
