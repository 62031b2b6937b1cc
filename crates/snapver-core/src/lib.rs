//! Core library for snapver.
//!
//! This crate provides the version-string logic behind the `snapver` CLI:
//! parsing and validating the two `VERSION`-file encodings, computing the
//! next development (snapshot) version, and driving the release-promotion
//! state machine. All decisions happen here; terminal I/O stays in the CLI
//! crate behind the [`promote::PromptSource`] capability.
//!
//! # Modules
//!
//! - [`advance`] - Next development version after a release
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//! - [`promote`] - Release promotion decisions
//! - [`store`] - The one-line `VERSION` file
//! - [`version`] - Version parsing, validation, and formatting
//!
//! # Quick Start
//!
//! ```
//! use snapver_core::version::Version;
//!
//! let released = Version::parse_release("1.2.3").expect("valid release version");
//! assert_eq!(released.next_development().to_string(), "1.2.4");
//! ```
#![deny(unsafe_code)]

pub mod advance;

pub mod config;

pub mod error;

pub mod promote;

pub mod store;

pub mod version;

pub use config::{Config, ConfigLoader, LogLevel};

pub use error::{ConfigError, ConfigResult};

pub use version::{Version, VersionError, VersionString};
