//! Command implementations for the sleeper-watch CLI

pub mod questionable;
pub mod serve;
