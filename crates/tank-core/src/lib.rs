//! Core types and definitions for the tank battle simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! geometry, configuration, input, state snapshots, events and constants.
//! It has no dependency on any renderer or runtime framework.

pub mod campaign;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod input;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
