//! # Ecclesia
//!
//! Church visitor registry: bootstrap, command layer and CLI on top of the
//! `ec-core` / `ec-app` / `ec-infra` crates.

pub mod adapters;
pub mod bootstrap;
pub mod cli;
pub mod commands;
