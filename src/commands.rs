//! CLI subcommands

pub mod bench;
pub mod repl;
pub mod serve;
