//! Agent spawning and the per-tick sense → steer → move → deposit →
//! consume cycle.

use rand::Rng;
use std::f64::consts::{PI, TAU};
use uuid::Uuid;

use myxo_data::{Agent, AgentStatus, Position};

use crate::config::AppConfig;
use crate::field::TrailField;
use crate::food::FoodRegistry;
use crate::steering::{self, Mood, SensorSamples};

/// Outcome of one agent tick, as seen by the orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentFate {
    Alive,
    /// Energy reached zero this tick; the orchestrator drops the agent.
    Died,
}

pub fn spawn_agent<R: Rng>(rng: &mut R, config: &AppConfig) -> Agent {
    Agent {
        id: Uuid::from_u128(rng.gen()),
        position: Position {
            x: rng.gen_range(0.0..config.world.width),
            y: rng.gen_range(0.0..config.world.height),
        },
        heading: rng.gen_range(0.0..TAU),
        energy: config.energy.initial_energy,
        satiation_timer: 0,
    }
}

/// Presentation status for snapshots. Has no effect on behavior; in
/// particular the critical threshold exists only for this classification.
pub fn agent_status(agent: &Agent, config: &AppConfig) -> AgentStatus {
    if agent.satiation_timer > 0 {
        if agent.satiation_timer as f64 > config.food.satiation_on_finish as f64 * 0.75 {
            AgentStatus::SatiatedStrong
        } else {
            AgentStatus::SatiatedMild
        }
    } else if agent.energy <= config.energy.critical_threshold() {
        AgentStatus::Critical
    } else if agent.energy < config.energy.low_threshold() {
        AgentStatus::Hungry
    } else {
        AgentStatus::Foraging
    }
}

/// Advances one agent by one tick against the already-advanced field.
///
/// Deposits and consumption land directly in the shared state, so later
/// agents in the same pass observe them. An agent whose energy hits zero
/// dies before moving, depositing, or consuming.
pub fn update_agent<R: Rng>(
    agent: &mut Agent,
    field: &mut TrailField,
    food: &mut FoodRegistry,
    config: &AppConfig,
    rng: &mut R,
) -> AgentFate {
    if agent.satiation_timer > 0 {
        agent.satiation_timer -= 1;
    }
    agent.energy = (agent.energy - config.energy.decay_per_tick).max(0.0);
    if agent.energy <= 0.0 {
        return AgentFate::Died;
    }

    sense_and_steer(agent, field, food, config, rng);

    agent.position.x += agent.heading.cos() * config.agent.move_speed;
    agent.position.y += agent.heading.sin() * config.agent.move_speed;

    field.deposit(
        agent.position.x,
        agent.position.y,
        config.agent.deposit_strength,
    );
    consume(agent, field, food, config, rng);
    wrap(agent, config, rng);

    AgentFate::Alive
}

fn sense_and_steer<R: Rng>(
    agent: &mut Agent,
    field: &TrailField,
    food: &FoodRegistry,
    config: &AppConfig,
    rng: &mut R,
) {
    let offset = config.agent.sensor_offset;
    let spread = config.agent.sensor_angle_spread;
    let probe = |angle: f64| Position {
        x: agent.position.x + angle.cos() * offset,
        y: agent.position.y + angle.sin() * offset,
    };

    let mood = steering::mood(agent.energy, agent.satiation_timer, config);
    let hungry = mood == Mood::Hungry;
    let samples = SensorSamples {
        forward: stimulus_at(&probe(agent.heading), field, food, hungry, agent, config),
        left: stimulus_at(
            &probe(agent.heading - spread),
            field,
            food,
            hungry,
            agent,
            config,
        ),
        right: stimulus_at(
            &probe(agent.heading + spread),
            field,
            food,
            hungry,
            agent,
            config,
        ),
    };

    let delta = steering::desired_turn(mood, samples, config, rng);
    agent.heading = steering::lerp_angle(
        agent.heading,
        agent.heading + delta,
        config.agent.steer_blend,
    );
}

/// Scalar attractiveness at a probe point: the trail term plus a
/// distance-weighted pull from every source inside the perception radius.
fn stimulus_at(
    point: &Position,
    field: &TrailField,
    food: &FoodRegistry,
    hungry: bool,
    agent: &Agent,
    config: &AppConfig,
) -> f64 {
    let mut stimulus = f64::from(field.query(point.x, point.y)) * config.agent.trail_weight;
    if hungry {
        stimulus *= config.agent.hungry_trail_discount;
    }

    let radius = config.food.perception_radius;
    let satiation_factor = satiation_attraction_factor(agent.satiation_timer, config);
    for source in food.sources() {
        let d = source.position.distance_to(point);
        if d < radius {
            // Inverse-square-like falloff: 1 at the probe, vanishing
            // toward the perception radius.
            let falloff = 1.0 / (d * d / (radius * 0.5) + 1.0);
            stimulus += falloff
                * config.food.attraction_multiplier
                * 100.0
                * source.remaining_fraction()
                * satiation_factor;
        }
    }
    stimulus
}

/// Linearly decays from 1 at timer zero to a 0.1 floor as the timer
/// approaches the post-feeding peak.
fn satiation_attraction_factor(satiation_timer: u32, config: &AppConfig) -> f64 {
    let peak = config.food.satiation_on_finish as f64;
    if peak <= 0.0 {
        return 1.0;
    }
    let t = (satiation_timer as f64 / peak).clamp(0.0, 1.0);
    1.0 - 0.9 * t
}

fn consume<R: Rng>(
    agent: &mut Agent,
    field: &mut TrailField,
    food: &mut FoodRegistry,
    config: &AppConfig,
    rng: &mut R,
) {
    let Some(index) = food.find_within(&agent.position, config.food.consume_radius) else {
        return;
    };

    let outcome = food.consume(index, config.food.consumption_rate);
    agent.energy = (agent.energy + outcome.amount * config.energy.gain_per_food_unit)
        .min(config.energy.max_energy);

    let base = config.agent.deposit_strength;
    field.deposit(agent.position.x, agent.position.y, base * 0.5);

    if outcome.depleted {
        field.deposit(
            agent.position.x,
            agent.position.y,
            base + config.food.depletion_deposit_boost,
        );
        agent.satiation_timer = config.food.satiation_on_finish;
        // Turn back along the trail just laid down, with some scatter.
        agent.heading += PI + rng.gen_range(-PI / 2.5..PI / 2.5);
    } else {
        let floor = (config.food.satiation_time as f64 * 0.2) as u32;
        if agent.satiation_timer < floor {
            agent.satiation_timer = floor;
        }
    }
}

fn wrap<R: Rng>(agent: &mut Agent, config: &AppConfig, rng: &mut R) {
    let jitter = config.agent.wrap_jitter;
    if agent.position.x < 0.0 || agent.position.x >= config.world.width {
        agent.position.x = wrap_coord(agent.position.x, config.world.width);
        agent.heading += rng.gen_range(-jitter..jitter);
    }
    if agent.position.y < 0.0 || agent.position.y >= config.world.height {
        agent.position.y = wrap_coord(agent.position.y, config.world.height);
        agent.heading += rng.gen_range(-jitter..jitter);
    }
}

fn wrap_coord(value: f64, limit: f64) -> f64 {
    // rem_euclid can round to exactly `limit` for tiny negative inputs;
    // the position invariant is the half-open [0, limit).
    let wrapped = value.rem_euclid(limit);
    if wrapped >= limit {
        0.0
    } else {
        wrapped
    }
}
