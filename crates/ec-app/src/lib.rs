//! Ecclesia Application Orchestration Layer
//!
//! This crate contains the use cases and the stateful visitor list session
//! that screens bind to.

pub mod deps;
pub mod usecases;

pub use deps::AppDeps;
