//! headergen-rs: prints randomized request header sets
//!
//! This is the main entry point for the application.

use anyhow::{Context, Result};
use clap::Parser;
use headergen_rs::{
    config::{self, OutputFormat, Settings},
    Generator,
};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

const ENVIRONMENT_HELP: &str = "\
ENVIRONMENT VARIABLES:
    HEADERGEN_SETTINGS_PATH  Path to headergen.yml
    HEADERGEN_DEBUG          Enable debug logging (true/false)
    HEADERGEN_SEED           Seed for reproducible output
    HEADERGEN_COUNT          Number of header sets to print
    HEADERGEN_FORMAT         Output format (text/json)
    HEADERGEN_REALISTIC      Use common tokens only (true/false)
    HEADERGEN_PLATFORM       Force a platform (Windows, Macintosh, Linux, Android, IOS)
    HEADERGEN_ENGINE         Force an engine (AppleWebKit, Gecko, Blink)
    HEADERGEN_BROWSER        Force a browser (Chrome, Firefox, Safari, Opera, Edge, Yandex)";

/// Randomized Accept-* and User-Agent request headers
#[derive(Debug, Parser)]
#[command(name = "headergen-rs")]
#[command(version, about, long_about = None, after_help = ENVIRONMENT_HELP)]
struct Args {
    /// Path to configuration file
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Number of header sets to print
    #[arg(short = 'n', long)]
    count: Option<usize>,

    /// Seed for reproducible output
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print one JSON object per header set
    #[arg(long)]
    json: bool,
}

impl Args {
    /// Command-line values win over the settings file and environment
    fn apply(&self, settings: &mut Settings) {
        if let Some(count) = self.count {
            settings.general.count = count;
        }
        if let Some(seed) = self.seed {
            settings.general.seed = Some(seed);
        }
        if self.json {
            settings.general.format = OutputFormat::Json;
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration
    let mut settings = load_settings(args.config.as_deref())?;
    args.apply(&mut settings);

    // Initialize logging
    let level = if settings.general.debug {
        Level::DEBUG
    } else {
        Level::INFO
    };
    FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    info!("Starting headergen-rs v{}", headergen_rs::VERSION);

    settings.validate()?;
    config::init(settings)?;
    let settings = config::get();

    let mut generator = match settings.general.seed {
        Some(seed) => {
            info!("Using seed {}", seed);
            Generator::seeded(seed)
        }
        None => Generator::from_entropy(),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for i in 0..settings.general.count {
        let set = generator.header_set(&settings.headers, &settings.user_agent)?;
        debug!("Generated header set {}", i + 1);

        match settings.general.format {
            OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(&set)?)?,
            OutputFormat::Text => {
                if i > 0 {
                    writeln!(out)?;
                }
                write!(out, "{}", set)?;
            }
        }
    }
    out.flush()?;

    Ok(())
}

/// Load settings from file or use defaults
fn load_settings(explicit: Option<&Path>) -> Result<Settings> {
    let path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => config::find_settings_file(),
    };

    let mut settings = match path {
        Some(path) => Settings::from_file(&path)
            .with_context(|| format!("failed to load settings from {}", path.display()))?,
        None => Settings::default(),
    };
    settings.merge_env();
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_run_args() {
        let argv = ["headergen-rs", "-n", "3", "--seed", "42", "--json", "-c", "x.yml"];
        let args = Args::try_parse_from(argv).unwrap();
        assert_eq!(args.count, Some(3));
        assert_eq!(args.seed, Some(42));
        assert!(args.json);
        assert_eq!(args.config, Some(PathBuf::from("x.yml")));
    }

    #[test]
    fn test_parse_attached_values() {
        let args = Args::try_parse_from(["headergen-rs", "--count=3", "-s7"]).unwrap();
        assert_eq!(args.count, Some(3));
        assert_eq!(args.seed, Some(7));
        assert!(!args.json);
        assert_eq!(args.config, None);
    }

    #[test]
    fn test_parse_flags_and_errors() {
        let kind = |argv: &[&str]| Args::try_parse_from(argv).unwrap_err().kind();
        assert_eq!(kind(&["headergen-rs", "--help"]), ErrorKind::DisplayHelp);
        assert_eq!(kind(&["headergen-rs", "-V"]), ErrorKind::DisplayVersion);
        assert!(Args::try_parse_from(["headergen-rs", "-n"]).is_err());
        assert_eq!(kind(&["headergen-rs", "-n", "many"]), ErrorKind::ValueValidation);
        assert_eq!(kind(&["headergen-rs", "--verbose"]), ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_args_override_settings() {
        let args = Args::try_parse_from(["headergen-rs", "-n", "4", "--json"]).unwrap();
        let mut settings = Settings::default();
        settings.general.seed = Some(1);
        args.apply(&mut settings);
        assert_eq!(settings.general.count, 4);
        assert_eq!(settings.general.seed, Some(1));
        assert_eq!(settings.general.format, OutputFormat::Json);
    }
}
