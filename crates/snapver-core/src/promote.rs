//! Release promotion decisions.
//!
//! All promotion logic lives here. The CLI is purely a prompt/display layer:
//! it supplies operator input through [`PromptSource`] and writes the chosen
//! version afterwards, so no failure path can leave a partial write behind.
//!
//! The flow, from the current `VERSION` line to a chosen release version:
//!
//! 1. The line must be snapshot form; its triple is the *candidate*.
//! 2. The operator may override the candidate. Empty input keeps it.
//! 3. A non-empty override must be release form.
//! 4. An override strictly lower than the candidate is a downgrade and
//!    needs an explicit `y` before it is accepted.

use std::io;

use thiserror::Error;
use tracing::{debug, instrument, warn};

use crate::version::{Version, VersionError, VersionResult};

/// Errors from the promotion flow.
#[derive(Error, Debug)]
pub enum PromoteError {
    /// A version string failed validation.
    #[error(transparent)]
    Format(#[from] VersionError),

    /// The operator declined the downgrade confirmation. A deliberate
    /// outcome, not a bug; surfaced as a nonzero exit.
    #[error("release aborted by operator")]
    Aborted,

    /// Reading operator input failed.
    #[error("prompt failed: {0}")]
    Io(#[from] io::Error),
}

/// Operator input capability.
///
/// `ask` presents a prompt and returns one line of operator text. The CLI
/// implements this over stdout/stdin; tests substitute a scripted source.
pub trait PromptSource {
    /// Present `prompt` and return the operator's response line.
    fn ask(&mut self, prompt: &str) -> io::Result<String>;
}

/// How an override input resolves against the candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverrideDecision {
    /// Empty input: release the candidate as-is.
    UseCandidate,
    /// A valid override at or above the candidate.
    UseOverride(Version),
    /// A valid override below the candidate; needs confirmation.
    NeedsConfirmation {
        /// The lower version the operator asked for.
        requested: Version,
        /// The current development triple it falls short of.
        candidate: Version,
    },
}

/// Derive the candidate release version from the current `VERSION` line.
///
/// The line must be snapshot form; the candidate is its triple with the
/// suffix stripped.
pub fn candidate_from(dev_line: &str) -> VersionResult<Version> {
    Version::parse_snapshot(dev_line)
}

/// Resolve operator input against the candidate.
pub fn evaluate_override(candidate: Version, input: &str) -> VersionResult<OverrideDecision> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(OverrideDecision::UseCandidate);
    }

    let requested = Version::parse_release(trimmed)?;
    if requested < candidate {
        Ok(OverrideDecision::NeedsConfirmation {
            requested,
            candidate,
        })
    } else {
        Ok(OverrideDecision::UseOverride(requested))
    }
}

/// Whether a confirmation response counts as yes: trimmed `y` or `Y` only.
pub fn is_affirmative(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case("y")
}

/// Run the full promotion flow and return the chosen release version.
///
/// `override_input` short-circuits the first prompt (the CLI's `--version`
/// flag); `assume_yes` accepts a downgrade without asking (`--yes`). The
/// caller writes the result; nothing is persisted here.
#[instrument(skip(prompter))]
pub fn run_promotion<P: PromptSource>(
    dev_line: &str,
    override_input: Option<&str>,
    assume_yes: bool,
    prompter: &mut P,
) -> Result<Version, PromoteError> {
    let candidate = candidate_from(dev_line)?;
    debug!(%candidate, "derived candidate release version");

    let input = match override_input {
        Some(value) => value.to_string(),
        None => prompter.ask(&format!("Please specify release version [{candidate}]: "))?,
    };

    match evaluate_override(candidate, &input)? {
        OverrideDecision::UseCandidate => Ok(candidate),
        OverrideDecision::UseOverride(requested) => Ok(requested),
        OverrideDecision::NeedsConfirmation {
            requested,
            candidate,
        } => {
            warn!(%requested, %candidate, "requested version is a downgrade");
            if assume_yes {
                return Ok(requested);
            }
            let answer = prompter.ask(&format!(
                "Requested version {requested} is lower than current development version {candidate}. \n\
                 Do you really want to continue? [y/N]: "
            ))?;
            if is_affirmative(&answer) {
                Ok(requested)
            } else {
                Err(PromoteError::Aborted)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Scripted prompt source: pops pre-baked answers in order.
    struct Scripted {
        answers: Vec<String>,
    }

    impl Scripted {
        fn new<const N: usize>(answers: [&str; N]) -> Self {
            Self {
                answers: answers.iter().rev().map(ToString::to_string).collect(),
            }
        }
    }

    impl PromptSource for Scripted {
        fn ask(&mut self, _prompt: &str) -> io::Result<String> {
            self.answers
                .pop()
                .ok_or_else(|| io::Error::other("script exhausted"))
        }
    }

    #[test]
    fn candidate_strips_snapshot_suffix() {
        assert_eq!(
            candidate_from("2.0.0-SNAPSHOT").unwrap(),
            Version::new(2, 0, 0)
        );
    }

    #[test]
    fn candidate_requires_snapshot_form() {
        assert!(candidate_from("2.0.0").is_err());
        assert!(candidate_from("garbage").is_err());
    }

    #[test]
    fn empty_override_keeps_candidate() {
        let candidate = Version::new(1, 2, 3);
        assert_eq!(
            evaluate_override(candidate, "").unwrap(),
            OverrideDecision::UseCandidate
        );
        assert_eq!(
            evaluate_override(candidate, "   \n").unwrap(),
            OverrideDecision::UseCandidate
        );
    }

    #[test]
    fn higher_override_is_accepted() {
        let candidate = Version::new(1, 2, 3);
        assert_eq!(
            evaluate_override(candidate, "2.0.0").unwrap(),
            OverrideDecision::UseOverride(Version::new(2, 0, 0))
        );
    }

    #[test]
    fn equal_override_is_not_a_downgrade() {
        let candidate = Version::new(1, 2, 3);
        assert_eq!(
            evaluate_override(candidate, "1.2.3").unwrap(),
            OverrideDecision::UseOverride(candidate)
        );
    }

    #[test]
    fn lower_override_needs_confirmation() {
        let candidate = Version::new(2, 0, 0);
        assert_eq!(
            evaluate_override(candidate, "1.9.9").unwrap(),
            OverrideDecision::NeedsConfirmation {
                requested: Version::new(1, 9, 9),
                candidate,
            }
        );
    }

    #[test]
    fn malformed_override_is_a_format_error() {
        let candidate = Version::new(1, 2, 3);
        assert!(evaluate_override(candidate, "1.2").is_err());
        assert!(evaluate_override(candidate, "1.2.3-SNAPSHOT").is_err());
    }

    #[test]
    fn affirmative_is_y_only() {
        assert!(is_affirmative("y"));
        assert!(is_affirmative("Y"));
        assert!(is_affirmative("  y  "));
        assert!(!is_affirmative(""));
        assert!(!is_affirmative("yes"));
        assert!(!is_affirmative("n"));
        assert!(!is_affirmative("why"));
    }

    #[test]
    fn promotion_with_empty_input_releases_candidate() {
        let mut prompter = Scripted::new([""]);
        let chosen = run_promotion("0.5.0-SNAPSHOT", None, false, &mut prompter).unwrap();
        assert_eq!(chosen, Version::new(0, 5, 0));
    }

    #[test]
    fn promotion_with_valid_override() {
        let mut prompter = Scripted::new(["3.0.0"]);
        let chosen = run_promotion("2.4.1-SNAPSHOT", None, false, &mut prompter).unwrap();
        assert_eq!(chosen, Version::new(3, 0, 0));
    }

    #[test]
    fn promotion_rejects_non_snapshot_file() {
        let mut prompter = Scripted::new([]);
        let err = run_promotion("2.4.1", None, false, &mut prompter).unwrap_err();
        assert!(matches!(err, PromoteError::Format(_)));
    }

    #[test]
    fn promotion_rejects_malformed_override() {
        let mut prompter = Scripted::new(["not-a-version"]);
        let err = run_promotion("1.0.0-SNAPSHOT", None, false, &mut prompter).unwrap_err();
        assert!(matches!(err, PromoteError::Format(_)));
    }

    #[test]
    fn downgrade_declined_aborts() {
        let mut prompter = Scripted::new(["1.9.9", "n"]);
        let err = run_promotion("2.0.0-SNAPSHOT", None, false, &mut prompter).unwrap_err();
        assert!(matches!(err, PromoteError::Aborted));
    }

    #[test]
    fn downgrade_declined_by_empty_answer() {
        let mut prompter = Scripted::new(["1.9.9", ""]);
        let err = run_promotion("2.0.0-SNAPSHOT", None, false, &mut prompter).unwrap_err();
        assert!(matches!(err, PromoteError::Aborted));
    }

    #[test]
    fn downgrade_confirmed_proceeds() {
        let mut prompter = Scripted::new(["1.9.9", "y"]);
        let chosen = run_promotion("2.0.0-SNAPSHOT", None, false, &mut prompter).unwrap();
        assert_eq!(chosen, Version::new(1, 9, 9));

        let mut prompter = Scripted::new(["1.9.9", "Y"]);
        let chosen = run_promotion("2.0.0-SNAPSHOT", None, false, &mut prompter).unwrap();
        assert_eq!(chosen, Version::new(1, 9, 9));
    }

    #[test]
    fn flag_override_skips_first_prompt() {
        let mut prompter = Scripted::new([]);
        let chosen = run_promotion("1.0.0-SNAPSHOT", Some("1.0.0"), false, &mut prompter).unwrap();
        assert_eq!(chosen, Version::new(1, 0, 0));
    }

    #[test]
    fn assume_yes_accepts_downgrade_without_prompt() {
        let mut prompter = Scripted::new([]);
        let chosen =
            run_promotion("2.0.0-SNAPSHOT", Some("1.9.9"), true, &mut prompter).unwrap();
        assert_eq!(chosen, Version::new(1, 9, 9));
    }
}
