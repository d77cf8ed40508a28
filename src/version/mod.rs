//! Release-tag parsing and ordering
//!
//! Two deliberately different comparison paths live here:
//!
//! - [`semver`]: strict parsing, used for validation and latest-version
//!   resolution; rejects anything outside the semver grammar.
//! - [`loose`]: a tolerant total order over arbitrary tag strings, used for
//!   version listings where malformed tags must still sort somewhere.
//!
//! # Modules
//!
//! - [`error`]: the strict parser's error type
//! - [`loose`]: the loose comparison key, `Tagged` seam, and stable sort
//! - [`semver`]: strict tag parsing and latest-tag resolution
//! - [`types`]: record types crossing the CLI boundary

pub mod error;
pub mod loose;
pub mod semver;
pub mod types;
