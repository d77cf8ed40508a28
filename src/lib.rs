//! tagver: parse and order package release tags.

pub mod version;
