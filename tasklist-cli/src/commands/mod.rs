//! Command implementations for tasklist CLI

pub mod serve;

pub use serve::run_serve;
