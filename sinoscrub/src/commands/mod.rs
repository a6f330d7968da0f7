// sinoscrub/src/commands/mod.rs
//! Command runners for the sinoscrub CLI.

pub mod scrub;
