//! Aggregate statistics sampled from the live world, plus a bounded
//! history ring for external graphing collaborators.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use myxo_data::{Agent, FoodSource};

use crate::config::AppConfig;
use crate::field::TrailField;

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct SimStats {
    pub tick: u64,
    pub live_agents: usize,
    pub avg_energy: f64,
    pub hungry_agents: usize,
    pub satiated_agents: usize,
    pub food_sources: usize,
    pub total_food: f64,
    pub active_trail_cells: usize,
}

pub fn collect_stats(
    tick: u64,
    agents: &[Agent],
    food: &[FoodSource],
    field: &TrailField,
    config: &AppConfig,
) -> SimStats {
    let low_threshold = config.energy.low_threshold();
    let mut total_energy = 0.0;
    let mut hungry_agents = 0;
    let mut satiated_agents = 0;
    for agent in agents {
        total_energy += agent.energy;
        if agent.satiation_timer == 0 && agent.energy < low_threshold {
            hungry_agents += 1;
        }
        if agent.satiation_timer > 0 {
            satiated_agents += 1;
        }
    }
    // An extinct population is a valid steady state.
    let avg_energy = if agents.is_empty() {
        0.0
    } else {
        total_energy / agents.len() as f64
    };

    SimStats {
        tick,
        live_agents: agents.len(),
        avg_energy,
        hungry_agents,
        satiated_agents,
        food_sources: food.len(),
        total_food: food.iter().map(|f| f.amount).sum(),
        active_trail_cells: field.active_cells(config.stats.active_trail_threshold),
    }
}

/// Bounded ring of recent samples, oldest first.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct StatsHistory {
    samples: VecDeque<SimStats>,
    capacity: usize,
}

impl StatsHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, sample: SimStats) {
        if self.capacity == 0 {
            return;
        }
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(sample);
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn latest(&self) -> Option<&SimStats> {
        self.samples.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SimStats> {
        self.samples.iter()
    }
}
