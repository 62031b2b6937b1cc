//! Version parsing, validation, and formatting.
//!
//! The `VERSION` file holds exactly one of two encodings:
//!
//! - release form: `X.Y.Z`
//! - snapshot form: `X.Y.Z-SNAPSHOT`
//!
//! where X/Y/Z are runs of ASCII digits (the main, feature, and fix
//! components). Whitespace around the whole string is tolerated; anything
//! inside it is not. The suffix is a fixed, case-sensitive literal in the
//! Maven snapshot convention, not semver, so `-snapshot` and pre-release
//! tags of any other shape are format errors.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// The literal suffix marking an in-development version.
pub const SNAPSHOT_SUFFIX: &str = "-SNAPSHOT";

/// Errors from version parsing and validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    /// Input does not match the release encoding.
    #[error("'{0}' does not match the format X.Y.Z")]
    InvalidRelease(String),

    /// Input does not match the snapshot encoding.
    #[error("'{0}' does not match the format X.Y.Z-SNAPSHOT")]
    InvalidSnapshot(String),

    /// Input matches neither encoding.
    #[error("'{0}' does not match the format X.Y.Z or X.Y.Z-SNAPSHOT")]
    InvalidVersion(String),
}

/// Result alias for version operations.
pub type VersionResult<T> = Result<T, VersionError>;

/// A fully specified version triple.
///
/// Ordering is lexicographic by `main`, then `feature`, then `fix`. The
/// field order here is load-bearing for the derived `Ord`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Version {
    /// Main (breaking) component.
    pub main: u64,
    /// Feature component.
    pub feature: u64,
    /// Fix component.
    pub fix: u64,
}

impl Version {
    /// Create a version from its components.
    pub const fn new(main: u64, feature: u64, fix: u64) -> Self {
        Self { main, feature, fix }
    }

    /// Parse a release-form version (`X.Y.Z`).
    ///
    /// The whole input is trimmed first. Components may carry leading zeros
    /// and are compared by decimal value, so `01.2.3` parses equal to
    /// `1.2.3`.
    pub fn parse_release(input: &str) -> VersionResult<Self> {
        let trimmed = input.trim();
        parse_triple(trimmed).ok_or_else(|| VersionError::InvalidRelease(trimmed.to_string()))
    }

    /// Parse a snapshot-form version (`X.Y.Z-SNAPSHOT`), returning the
    /// underlying triple.
    pub fn parse_snapshot(input: &str) -> VersionResult<Self> {
        let trimmed = input.trim();
        trimmed
            .strip_suffix(SNAPSHOT_SUFFIX)
            .and_then(parse_triple)
            .ok_or_else(|| VersionError::InvalidSnapshot(trimmed.to_string()))
    }

    /// The next development version: fix incremented, main/feature unchanged.
    pub const fn next_development(self) -> Self {
        Self::new(self.main, self.feature, self.fix + 1)
    }

    /// This version in release form.
    pub const fn as_release(self) -> VersionString {
        VersionString {
            version: self,
            snapshot: false,
        }
    }

    /// This version in snapshot form.
    pub const fn as_snapshot(self) -> VersionString {
        VersionString {
            version: self,
            snapshot: true,
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.main, self.feature, self.fix)
    }
}

/// A version together with its textual encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VersionString {
    /// The numeric triple.
    pub version: Version,
    /// Whether this is the snapshot form.
    pub snapshot: bool,
}

impl VersionString {
    /// Parse either encoding, detecting the snapshot suffix.
    pub fn parse(input: &str) -> VersionResult<Self> {
        let trimmed = input.trim();
        match trimmed.strip_suffix(SNAPSHOT_SUFFIX) {
            Some(body) => parse_triple(body).map(Version::as_snapshot),
            None => parse_triple(trimmed).map(Version::as_release),
        }
        .ok_or_else(|| VersionError::InvalidVersion(trimmed.to_string()))
    }
}

impl fmt::Display for VersionString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.snapshot {
            write!(f, "{}{SNAPSHOT_SUFFIX}", self.version)
        } else {
            self.version.fmt(f)
        }
    }
}

/// Parse exactly three dot-separated digit runs. No trimming here; callers
/// decide the whitespace policy.
fn parse_triple(s: &str) -> Option<Version> {
    let mut parts = s.split('.');
    let main = parse_component(parts.next()?)?;
    let feature = parse_component(parts.next()?)?;
    let fix = parse_component(parts.next()?)?;
    if parts.next().is_some() {
        return None;
    }
    Some(Version::new(main, feature, fix))
}

/// A component is a non-empty run of ASCII digits: no signs, no whitespace,
/// no underscores. `u64::from_str` alone would accept a leading `+`.
fn parse_component(s: &str) -> Option<u64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
