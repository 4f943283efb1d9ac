//! Console interface for the expense tracker

pub mod shell;

pub use shell::Shell;
