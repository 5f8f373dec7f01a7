//! CLI subcommands.

pub mod dev;
pub mod entries;
pub mod flatten;
pub mod init;
pub mod serve;
