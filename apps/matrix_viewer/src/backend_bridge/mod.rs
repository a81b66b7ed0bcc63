//! Worker-thread bridge for the outbound request issued on mount.

pub mod commands;
pub mod runtime;
