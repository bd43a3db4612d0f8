//! ESCALATION headless runner.
//!
//! This crate wires the session host to a command line: it loads the
//! difficulty config, drives a seeded scripted session, and reports the
//! resulting snapshot.

pub mod cli;
pub mod runner;

pub use escalation_core as core;
