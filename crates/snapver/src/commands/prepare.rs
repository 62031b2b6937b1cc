//! Prepare command — thin CLI layer over `snapver_core::advance`.

use anyhow::Context;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use snapver_core::advance;
use snapver_core::config::Config;
use snapver_core::store::VersionStore;

/// Arguments for the `prepare` subcommand.
#[derive(Args, Debug)]
pub struct PrepareArgs {
    /// The version that was just released (e.g., "1.2.3")
    #[arg(value_name = "RELEASED_VERSION")]
    pub released: String,

    /// Run without making changes (show what would happen)
    #[arg(long)]
    pub dry_run: bool,
}

/// Execute the prepare command.
#[instrument(name = "cmd_prepare", skip_all, fields(json_output))]
pub fn cmd_prepare(
    args: PrepareArgs,
    global_json: bool,
    config: &Config,
    cwd: &camino::Utf8Path,
) -> anyhow::Result<()> {
    debug!(json_output = global_json, "executing prepare command");

    // Compute first; malformed input must fail before any write
    let next = advance::next_development(&args.released)
        .context("cannot compute next development version")?;
    let store = VersionStore::resolve(cwd, config);

    if global_json {
        let payload = serde_json::json!({
            "released": args.released.trim(),
            "next": next.to_string(),
            "file": store.path().as_str(),
            "dry_run": args.dry_run,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        println!(
            "{}: {} → {}",
            "Next development version".bold(),
            args.released.trim().dimmed(),
            next.to_string().green().bold()
        );
        println!("{}: {}", "File".dimmed(), store.path());
    }

    if args.dry_run {
        if !global_json {
            println!();
            println!("{}", "Dry run — no changes made.".yellow());
        }
        return Ok(());
    }

    store
        .write_line(&next.to_string())
        .context("failed to update version file")?;

    if !global_json {
        println!(
            "  {} {} written to {}",
            "✓".green(),
            next.to_string().green().bold(),
            store.path().cyan()
        );
    }

    Ok(())
}
