//! Core types and definitions for ESCALATION.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, difficulty config, snapshots, events, and constants.
//! It has no dependency on the ECS or any runtime framework.

pub mod components;
pub mod config;
pub mod constants;
pub mod error;
pub mod events;
pub mod state;
pub mod types;
