//! Next development version after a release.
//!
//! After cutting release `X.Y.Z`, development continues on
//! `X.Y.{Z+1}-SNAPSHOT`. Malformed input is a format error, never a panic.

use tracing::{debug, instrument};

use crate::version::{Version, VersionResult, VersionString};

/// Compute the next development (snapshot) version from a released version.
///
/// Accepts release form only (`"1.2.3"`, outer whitespace tolerated) and
/// returns the snapshot form with the fix component incremented.
#[instrument]
pub fn next_development(release_input: &str) -> VersionResult<VersionString> {
    let released = Version::parse_release(release_input)?;
    let next = released.next_development().as_snapshot();
    debug!(%released, %next, "computed next development version");
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advances_fix_component() {
        assert_eq!(next_development("1.2.3").unwrap().to_string(), "1.2.4-SNAPSHOT");
        assert_eq!(next_development("0.0.0").unwrap().to_string(), "0.0.1-SNAPSHOT");
        assert_eq!(next_development("4.0.9").unwrap().to_string(), "4.0.10-SNAPSHOT");
    }

    #[test]
    fn tolerates_outer_whitespace() {
        assert_eq!(next_development(" 2.1.0 ").unwrap().to_string(), "2.1.1-SNAPSHOT");
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(next_development("1.2").is_err());
        assert!(next_development("1.2.x").is_err());
        assert!(next_development("1.2.3-SNAPSHOT").is_err());
        assert!(next_development("").is_err());
    }
}
