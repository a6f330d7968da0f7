// sinoscrub/src/lib.rs
//! # sinoscrub CLI
//!
//! This crate provides the command-line interface for the sinoscrub engine:
//! argument parsing, input resolution, logger bootstrap, and the diff/debug
//! rendering of scrub results. All matching and replacement logic lives in
//! `sinoscrub-core`.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;
