//! Release command — thin CLI layer over `snapver_core::promote`.

use anyhow::Context;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use snapver_core::config::Config;
use snapver_core::promote::{self, PromoteError};
use snapver_core::store::VersionStore;

use crate::prompt::StdPrompter;

/// Arguments for the `release` subcommand.
#[derive(Args, Debug)]
pub struct ReleaseArgs {
    /// Set the release version explicitly instead of prompting (e.g., "1.2.3")
    #[arg(long, value_name = "VERSION")]
    pub version: Option<String>,

    /// Accept a downgrade without asking for confirmation
    #[arg(short, long)]
    pub yes: bool,

    /// Run without making changes (show what would happen)
    #[arg(long)]
    pub dry_run: bool,
}

/// Execute the release command.
#[instrument(name = "cmd_release", skip_all, fields(json_output))]
pub fn cmd_release(
    args: ReleaseArgs,
    global_json: bool,
    config: &Config,
    cwd: &camino::Utf8Path,
) -> anyhow::Result<()> {
    debug!(json_output = global_json, "executing release command");

    let store = VersionStore::resolve(cwd, config);
    let dev_line = store.read_line().context("cannot read version file")?;

    // All decisions happen in core; the file is written only once a version
    // has been finalized, so failed runs leave it untouched.
    let mut prompter = StdPrompter::new();
    let chosen = match promote::run_promotion(
        &dev_line,
        args.version.as_deref(),
        args.yes,
        &mut prompter,
    ) {
        Ok(version) => version,
        Err(PromoteError::Aborted) => {
            if !global_json {
                println!("{}", "Aborted.".yellow());
            }
            anyhow::bail!("release aborted by operator");
        }
        Err(err) => return Err(err).context("release promotion failed"),
    };

    if global_json {
        let payload = serde_json::json!({
            "previous": dev_line,
            "released": chosen.to_string(),
            "file": store.path().as_str(),
            "dry_run": args.dry_run,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        println!(
            "{}: {} → {}",
            "Release".bold(),
            dev_line.dimmed(),
            chosen.to_string().green().bold()
        );
    }

    if args.dry_run {
        if !global_json {
            println!();
            println!("{}", "Dry run — no changes made.".yellow());
        }
        return Ok(());
    }

    store
        .write_line(&chosen.to_string())
        .context("failed to update version file")?;

    if !global_json {
        println!(
            "  {} {} written to {}",
            "✓".green(),
            chosen.to_string().green().bold(),
            store.path().cyan()
        );
    }

    Ok(())
}
