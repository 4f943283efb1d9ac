//! Configuration module for the expense tracker
//!
//! The tracker has no user settings: the only configuration is where its
//! files live.

pub mod paths;

pub use paths::TrackerPaths;
