//! Runtime configuration for the demo binaries (JSON via serde).

pub mod scan;
