//! # Myxo Core
//!
//! The simulation engine for Myxo, a trail-network formation model: a
//! population of simple agents deposits into and follows a decaying
//! pheromone field while foraging for depletable food sources.
//!
//! The crate contains the deterministic per-tick logic:
//! - Trail field storage, diffusion, and evaporation
//! - Food source lifecycle (spawn, bounded consumption, depletion)
//! - The per-agent sense → steer → move → deposit → consume cycle
//! - Snapshots and aggregate statistics for external renderers
//!
//! All randomness is threaded through a caller-supplied [`rand::Rng`], so
//! a seeded generator yields a reproducible run.

/// Agent spawning and the per-tick update cycle
pub mod agent;
/// Configuration management for simulation parameters
pub mod config;
/// The pheromone trail field
pub mod field;
/// Food source registry and lifecycle
pub mod food;
/// Read-only views for rendering and analytics collaborators
pub mod snapshot;
/// Aggregate statistics and bounded history
pub mod stats;
/// The pure steering decision
pub mod steering;
