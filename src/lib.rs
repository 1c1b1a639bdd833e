//! Myxo: emergent trail-network formation by foraging agents.
//!
//! The simulation engine lives in `myxo_core` and `myxo_data`; this
//! library re-exports them under `model` and adds the [`model::world`]
//! orchestrator that drives one tick at a time.

pub mod model;
