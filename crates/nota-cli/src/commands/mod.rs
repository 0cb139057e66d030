//! CLI subcommands.

pub mod due;
pub mod scan;
