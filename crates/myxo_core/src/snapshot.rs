//! Read-only views of the world for rendering and analytics
//! collaborators. Nothing here feeds back into the simulation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use myxo_data::{AgentStatus, FoodSource};

use crate::stats::SimStats;

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct AgentSnapshot {
    pub id: Uuid,
    pub x: f64,
    pub y: f64,
    pub heading: f64,
    pub energy: f64,
    pub max_energy: f64,
    pub satiation_timer: u32,
    pub status: AgentStatus,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct FieldSnapshot {
    pub cols: usize,
    pub rows: usize,
    pub resolution: f64,
    /// Row-major concentrations.
    pub cells: Vec<f32>,
    /// Concentrations before the most recent advance, for renderers
    /// that clear cells which just faded below their draw threshold.
    pub previous: Vec<f32>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct WorldSnapshot {
    pub tick: u64,
    pub width: f64,
    pub height: f64,
    pub agents: Vec<AgentSnapshot>,
    pub food: Vec<FoodSource>,
    pub field: FieldSnapshot,
    pub stats: SimStats,
}
