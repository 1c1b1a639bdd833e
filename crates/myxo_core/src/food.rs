//! Food source registry: spawn, bounded consumption, and removal on
//! depletion.

use rand::Rng;
use uuid::Uuid;

use myxo_data::{FoodSource, Position};

use crate::config::AppConfig;

/// Result of a consumption request against one source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Consumed {
    /// Amount actually taken; never exceeds the request or the source.
    pub amount: f64,
    /// The bite emptied the source, which has been removed.
    pub depleted: bool,
}

/// Owns every active food source.
///
/// Lookups scan in registration order and the first source inside the
/// radius wins. This is a deliberate tie-break, not an oversight:
/// nearest-source selection would reshape the emergent network.
#[derive(Debug, Clone, Default)]
pub struct FoodRegistry {
    sources: Vec<FoodSource>,
}

impl FoodRegistry {
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
        }
    }

    pub fn sources(&self) -> &[FoodSource] {
        &self.sources
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    pub fn total_amount(&self) -> f64 {
        self.sources.iter().map(|s| s.amount).sum()
    }

    /// Adds a source iff the point lies strictly inside the simulated
    /// area and the registry is below the manual cap (the automatic cap
    /// plus a slack for pointer-placed sources). Rejections are silent.
    pub fn try_spawn<R: Rng>(
        &mut self,
        position: Position,
        initial_amount: f64,
        rng: &mut R,
        config: &AppConfig,
    ) -> bool {
        let cap = config.food.max_sources + config.food.manual_spawn_slack;
        if self.sources.len() >= cap {
            return false;
        }
        if position.x <= 0.0
            || position.x >= config.world.width
            || position.y <= 0.0
            || position.y >= config.world.height
        {
            return false;
        }
        let id = Uuid::from_u128(rng.gen());
        self.sources
            .push(FoodSource::new(id, position, initial_amount));
        tracing::debug!(x = position.x, y = position.y, "food source spawned");
        true
    }

    /// Invoked by the orchestrator on the spawn interval: one source at
    /// a uniformly random point inside the spawn margin, only while
    /// below the automatic cap.
    pub fn periodic_spawn<R: Rng>(&mut self, rng: &mut R, config: &AppConfig) -> bool {
        if self.sources.len() >= config.food.max_sources {
            return false;
        }
        let margin = config.food.spawn_margin;
        let position = Position {
            x: rng.gen_range(config.world.width * margin..config.world.width * (1.0 - margin)),
            y: rng.gen_range(config.world.height * margin..config.world.height * (1.0 - margin)),
        };
        self.try_spawn(position, config.food.initial_amount, rng, config)
    }

    /// Index of the first source within `radius`, in registration order.
    pub fn find_within(&self, position: &Position, radius: f64) -> Option<usize> {
        self.sources
            .iter()
            .position(|s| s.position.distance_to(position) < radius)
    }

    /// Consumes up to `requested` from the source at `index`.
    ///
    /// Removal on depletion happens inside this call, so no caller ever
    /// observes a source with a non-positive amount.
    pub fn consume(&mut self, index: usize, requested: f64) -> Consumed {
        let source = &mut self.sources[index];
        let amount = requested.min(source.amount);
        source.amount -= amount;
        let depleted = source.amount <= 0.0;
        if depleted {
            let gone = self.sources.remove(index);
            tracing::debug!(id = %gone.id, "food source depleted");
        }
        Consumed { amount, depleted }
    }
}
