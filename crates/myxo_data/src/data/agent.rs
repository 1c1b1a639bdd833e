use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// World position of an agent or food source, in continuous units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn distance_to(&self, other: &Position) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Presentation classification of an agent, derived from energy and the
/// satiation countdown. Snapshot consumers read this; the steering logic
/// works from the raw fields and never stores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgentStatus {
    Foraging,
    Hungry,
    Critical,
    SatiatedMild,
    SatiatedStrong,
}

/// A single foraging agent.
///
/// Agents own only their kinematic and physiological state. Everything
/// they know about the world flows through the trail field and the food
/// registry; there are no agent-to-agent references.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agent {
    pub id: Uuid,
    pub position: Position,
    /// Heading in radians. Not kept normalized; it is only ever consumed
    /// through sin/cos and wrap-aware interpolation.
    pub heading: f64,
    pub energy: f64,
    /// Post-feeding countdown in ticks. Raised by consumption events,
    /// decremented once per tick, never lowered otherwise.
    pub satiation_timer: u32,
}
