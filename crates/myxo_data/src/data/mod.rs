//! Core data structures for the Myxo simulation.

pub mod agent;
pub mod food;

pub use agent::{Agent, AgentStatus, Position};
pub use food::FoodSource;
