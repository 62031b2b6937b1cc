//! Info command — show package, config, and VERSION file information.

use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use snapver_core::config::{self, Config};
use snapver_core::store::VersionStore;
use snapver_core::version::VersionString;

/// Arguments for the `info` subcommand.
#[derive(Args, Debug, Default)]
pub struct InfoArgs {
    // No subcommand-specific arguments; uses global --json flag
}

#[derive(Serialize)]
struct PackageInfo {
    name: &'static str,
    version: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    description: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    repository: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    license: &'static str,
}

impl PackageInfo {
    const fn new() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            description: env!("CARGO_PKG_DESCRIPTION"),
            repository: env!("CARGO_PKG_REPOSITORY"),
            license: env!("CARGO_PKG_LICENSE"),
        }
    }
}

#[derive(Serialize)]
struct ConfigInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    config_file: Option<String>,
    log_level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    log_dir: Option<String>,
}

impl ConfigInfo {
    fn from_config(config: &Config, cwd: &camino::Utf8Path) -> Self {
        Self {
            config_file: config::find_project_config(cwd).map(|p| p.to_string()),
            log_level: config.log_level.as_str().to_string(),
            log_dir: config.log_dir.as_ref().map(|p| p.to_string()),
        }
    }
}

/// State of the version file, if it exists and parses.
#[derive(Serialize)]
struct VersionFileInfo {
    path: String,
    exists: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    raw: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    parsed: Option<VersionString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    candidate: Option<String>,
}

impl VersionFileInfo {
    fn from_store(store: &VersionStore) -> Self {
        let raw = store.read_line().ok();
        let parsed = raw.as_deref().and_then(|line| VersionString::parse(line).ok());
        let candidate = parsed
            .filter(|v| v.snapshot)
            .map(|v| v.version.to_string());
        Self {
            path: store.path().to_string(),
            exists: raw.is_some(),
            raw,
            parsed,
            candidate,
        }
    }
}

#[derive(Serialize)]
struct FullInfo {
    #[serde(flatten)]
    package: PackageInfo,
    config: ConfigInfo,
    version_file: VersionFileInfo,
}

/// Print package information.
///
/// # Arguments
/// * `global_json` - Global `--json` flag from CLI
/// * `config` - Loaded configuration
/// * `cwd` - Current working directory for config discovery and file lookup
#[instrument(name = "cmd_info", skip_all, fields(json_output))]
pub fn cmd_info(
    _args: InfoArgs,
    global_json: bool,
    config: &Config,
    cwd: &camino::Utf8Path,
) -> anyhow::Result<()> {
    debug!(json_output = global_json, "executing info command");

    let store = VersionStore::resolve(cwd, config);
    let full_info = FullInfo {
        package: PackageInfo::new(),
        config: ConfigInfo::from_config(config, cwd),
        version_file: VersionFileInfo::from_store(&store),
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&full_info)?);
    } else {
        println!(
            "{} {}",
            full_info.package.name.bold(),
            full_info.package.version.green()
        );
        if !full_info.package.description.is_empty() {
            println!("{}", full_info.package.description);
        }
        if !full_info.package.license.is_empty() {
            println!("{}: {}", "License".dimmed(), full_info.package.license);
        }
        if !full_info.package.repository.is_empty() {
            println!(
                "{}: {}",
                "Repository".dimmed(),
                full_info.package.repository.cyan()
            );
        }

        // Configuration section
        println!();
        println!("{}", "Configuration".bold().underline());
        if let Some(ref path) = full_info.config.config_file {
            println!("{}: {}", "Config file".dimmed(), path.cyan());
        } else {
            println!("{}: {}", "Config file".dimmed(), "none loaded".yellow());
        }
        println!("{}: {}", "Log level".dimmed(), full_info.config.log_level);
        if let Some(ref dir) = full_info.config.log_dir {
            println!("{}: {}", "Log directory".dimmed(), dir);
        }

        // Version file section
        println!();
        println!("{}", "Version File".bold().underline());
        println!("{}: {}", "Path".dimmed(), full_info.version_file.path.cyan());
        match (&full_info.version_file.raw, &full_info.version_file.parsed) {
            (Some(raw), Some(parsed)) => {
                println!("{}: {}", "Current".dimmed(), raw.green());
                let form = if parsed.snapshot {
                    "snapshot (in development)"
                } else {
                    "release"
                };
                println!("{}: {}", "Form".dimmed(), form);
                if let Some(ref candidate) = full_info.version_file.candidate {
                    println!("{}: {}", "Release candidate".dimmed(), candidate.cyan());
                }
            }
            (Some(raw), None) => {
                println!("{}: {}", "Current".dimmed(), raw);
                println!(
                    "  {} {}",
                    "○".yellow(),
                    "content matches neither X.Y.Z nor X.Y.Z-SNAPSHOT".yellow()
                );
            }
            _ => {
                println!("  {} {}", "○".yellow(), "no version file found".yellow());
            }
        }
    }

    Ok(())
}
