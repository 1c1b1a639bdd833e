//! Configuration management for simulation parameters.
//!
//! Strongly-typed configuration structures that map to the `config.toml`
//! file. Every tunable of the simulation lives here; defaults reproduce
//! the reference parameter set.
//!
//! ## Configuration Hierarchy
//!
//! 1. Default values (hardcoded in `Default` impls)
//! 2. `config.toml` file (overrides defaults)
//!
//! ## Example `config.toml`
//!
//! ```toml
//! [world]
//! width = 800.0
//! height = 600.0
//! agent_count = 1000
//! seed = 42
//!
//! [field]
//! evaporation_rate = 0.994
//! diffusion_rate = 0.12
//!
//! [food]
//! spawn_interval = 350
//! max_sources = 10
//! ```

use serde::{Deserialize, Serialize};

/// World-level simulation configuration: the simulated area, the initial
/// population, and the random seed.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct WorldConfig {
    pub width: f64,
    pub height: f64,
    pub agent_count: usize,
    pub initial_food_sources: usize,
    pub seed: Option<u64>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            agent_count: 1000,
            initial_food_sources: 3,
            seed: None,
        }
    }
}

/// Trail field storage and per-tick decay.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct FieldConfig {
    /// Side length of one grid cell, in world units.
    pub resolution: f64,
    /// Fraction of a cell blended with its neighbor mean each tick.
    pub diffusion_rate: f32,
    /// Multiplicative decay applied to every cell each tick.
    pub evaporation_rate: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            resolution: 10.0,
            diffusion_rate: 0.12,
            evaporation_rate: 0.994,
        }
    }
}

/// Sensing, steering, and motion parameters shared by every agent.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct AgentConfig {
    /// Angle between the forward probe and each side probe, in radians.
    pub sensor_angle_spread: f64,
    /// Distance from the agent to each probe point.
    pub sensor_offset: f64,
    pub turn_speed: f64,
    pub random_wobble: f64,
    /// Fraction of the desired heading change applied per tick.
    pub steer_blend: f64,
    /// Converts raw trail concentration into steering stimulus.
    pub trail_weight: f64,
    pub move_speed: f64,
    pub deposit_strength: f32,
    /// Heading perturbation applied per wrapped axis.
    pub wrap_jitter: f64,
    /// Sub-unity factor on the trail term while hungry.
    pub hungry_trail_discount: f64,
    pub hungry_wobble_multiplier: f64,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            sensor_angle_spread: std::f64::consts::PI / 5.0,
            sensor_offset: 10.0,
            turn_speed: 0.33,
            random_wobble: 0.6,
            steer_blend: 0.7,
            trail_weight: 2.5,
            move_speed: 0.8,
            deposit_strength: 12.0,
            wrap_jitter: 0.3,
            hungry_trail_discount: 0.1,
            hungry_wobble_multiplier: 3.0,
        }
    }
}

/// Agent energy budget and hunger thresholds.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct EnergyConfig {
    pub initial_energy: f64,
    pub max_energy: f64,
    pub decay_per_tick: f64,
    pub gain_per_food_unit: f64,
    /// Below this fraction of the initial energy an agent is hungry.
    pub low_threshold_ratio: f64,
    /// Below this fraction an agent is critically hungry. Presentation
    /// only; has no effect on steering.
    pub critical_threshold_ratio: f64,
}

impl EnergyConfig {
    pub fn low_threshold(&self) -> f64 {
        self.initial_energy * self.low_threshold_ratio
    }

    pub fn critical_threshold(&self) -> f64 {
        self.initial_energy * self.critical_threshold_ratio
    }
}

impl Default for EnergyConfig {
    fn default() -> Self {
        Self {
            initial_energy: 1200.0,
            max_energy: 1200.0,
            decay_per_tick: 0.15,
            gain_per_food_unit: 200.0,
            low_threshold_ratio: 0.3,
            critical_threshold_ratio: 0.1,
        }
    }
}

/// Food source lifecycle and attraction parameters.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct FoodConfig {
    pub initial_amount: f64,
    /// Amount an agent eats per tick while in range.
    pub consumption_rate: f64,
    pub attraction_multiplier: f64,
    /// Sources inside this radius of a probe contribute stimulus.
    pub perception_radius: f64,
    /// Sources inside this radius of an agent can be eaten from.
    pub consume_radius: f64,
    /// General satiation reference, in ticks.
    pub satiation_time: u32,
    /// Satiation granted when an agent finishes a source, in ticks.
    pub satiation_on_finish: u32,
    /// Ticks between automatic spawn attempts.
    pub spawn_interval: u64,
    /// Cap for automatic spawning.
    pub max_sources: usize,
    /// Extra headroom above `max_sources` for pointer-placed sources.
    pub manual_spawn_slack: usize,
    /// Fraction of each axis kept clear when placing spawned sources.
    pub spawn_margin: f64,
    /// Extra trail deposited when a source is finished.
    pub depletion_deposit_boost: f32,
}

impl Default for FoodConfig {
    fn default() -> Self {
        Self {
            initial_amount: 100.0,
            consumption_rate: 0.009,
            attraction_multiplier: 2.0,
            perception_radius: 60.0,
            consume_radius: 6.0,
            satiation_time: 50,
            satiation_on_finish: 250,
            spawn_interval: 350,
            max_sources: 10,
            manual_spawn_slack: 3,
            spawn_margin: 0.1,
            depletion_deposit_boost: 100.0,
        }
    }
}

/// Statistics sampling.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct StatsConfig {
    /// Ticks between samples pushed into the history ring.
    pub sample_interval: u64,
    /// Number of samples the history ring retains.
    pub history_length: usize,
    /// Concentration above which a cell counts as an active trail cell.
    pub active_trail_threshold: f32,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            sample_interval: 10,
            history_length: 150,
            active_trail_threshold: 1.0,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    pub world: WorldConfig,
    pub field: FieldConfig,
    pub agent: AgentConfig,
    pub energy: EnergyConfig,
    pub food: FoodConfig,
    pub stats: StatsConfig,
}

impl AppConfig {
    /// Validates all configuration parameters.
    ///
    /// Returns `Ok(())` if all parameters are valid, or `Err` with a
    /// description of the first validation failure.
    pub fn validate(&self) -> anyhow::Result<()> {
        // World validation
        anyhow::ensure!(self.world.width > 0.0, "World width must be positive");
        anyhow::ensure!(self.world.height > 0.0, "World height must be positive");
        anyhow::ensure!(
            self.world.width <= 100_000.0 && self.world.height <= 100_000.0,
            "World dimensions too large (max 100000)"
        );
        anyhow::ensure!(
            self.world.agent_count <= 1_000_000,
            "Agent count too large (max 1000000)"
        );

        // Field validation
        anyhow::ensure!(
            self.field.resolution > 0.0,
            "Field resolution must be positive"
        );
        anyhow::ensure!(
            self.field.resolution <= self.world.width && self.field.resolution <= self.world.height,
            "Field resolution must not exceed the world dimensions"
        );
        anyhow::ensure!(
            (0.0..=1.0).contains(&self.field.diffusion_rate),
            "Diffusion rate must be in [0.0, 1.0]"
        );
        anyhow::ensure!(
            self.field.evaporation_rate > 0.0 && self.field.evaporation_rate <= 1.0,
            "Evaporation rate must be in (0.0, 1.0]"
        );

        // Agent validation
        anyhow::ensure!(self.agent.turn_speed > 0.0, "Turn speed must be positive");
        anyhow::ensure!(
            self.agent.random_wobble > 0.0,
            "Random wobble must be positive"
        );
        anyhow::ensure!(
            (0.0..=1.0).contains(&self.agent.steer_blend),
            "Steer blend must be in [0.0, 1.0]"
        );
        anyhow::ensure!(self.agent.move_speed > 0.0, "Move speed must be positive");
        anyhow::ensure!(
            self.agent.sensor_offset > 0.0,
            "Sensor offset must be positive"
        );
        anyhow::ensure!(
            self.agent.deposit_strength >= 0.0,
            "Deposit strength must be non-negative"
        );
        anyhow::ensure!(self.agent.wrap_jitter > 0.0, "Wrap jitter must be positive");
        anyhow::ensure!(
            (0.0..=1.0).contains(&self.agent.hungry_trail_discount),
            "Hungry trail discount must be in [0.0, 1.0]"
        );
        anyhow::ensure!(
            self.agent.hungry_wobble_multiplier >= 1.0,
            "Hungry wobble multiplier must be at least 1.0"
        );

        // Energy validation
        anyhow::ensure!(
            self.energy.initial_energy > 0.0,
            "Initial energy must be positive"
        );
        anyhow::ensure!(
            self.energy.max_energy >= self.energy.initial_energy,
            "Max energy must be at least the initial energy"
        );
        anyhow::ensure!(
            self.energy.decay_per_tick > 0.0,
            "Energy decay must be positive"
        );
        anyhow::ensure!(
            self.energy.gain_per_food_unit >= 0.0,
            "Energy gain per food unit must be non-negative"
        );
        anyhow::ensure!(
            (0.0..=1.0).contains(&self.energy.low_threshold_ratio),
            "Low energy threshold ratio must be in [0.0, 1.0]"
        );
        anyhow::ensure!(
            (0.0..=1.0).contains(&self.energy.critical_threshold_ratio),
            "Critical energy threshold ratio must be in [0.0, 1.0]"
        );
        anyhow::ensure!(
            self.energy.critical_threshold_ratio <= self.energy.low_threshold_ratio,
            "Critical threshold must not exceed the low threshold"
        );

        // Food validation
        anyhow::ensure!(
            self.food.initial_amount > 0.0,
            "Initial food amount must be positive"
        );
        anyhow::ensure!(
            self.food.consumption_rate > 0.0,
            "Consumption rate must be positive"
        );
        anyhow::ensure!(
            self.food.attraction_multiplier >= 0.0,
            "Attraction multiplier must be non-negative"
        );
        anyhow::ensure!(
            self.food.perception_radius > 0.0,
            "Perception radius must be positive"
        );
        anyhow::ensure!(
            self.food.consume_radius > 0.0
                && self.food.consume_radius <= self.food.perception_radius,
            "Consume radius must be positive and within the perception radius"
        );
        anyhow::ensure!(
            self.food.spawn_interval > 0,
            "Spawn interval must be positive"
        );
        anyhow::ensure!(
            self.food.max_sources <= 10_000,
            "Max food sources too large (max 10000)"
        );
        anyhow::ensure!(
            (0.0..0.5).contains(&self.food.spawn_margin),
            "Spawn margin must be in [0.0, 0.5)"
        );
        anyhow::ensure!(
            self.food.depletion_deposit_boost >= 0.0,
            "Depletion deposit boost must be non-negative"
        );

        // Stats validation
        anyhow::ensure!(
            self.stats.sample_interval > 0,
            "Stats sample interval must be positive"
        );
        anyhow::ensure!(
            self.stats.history_length > 0,
            "Stats history length must be positive"
        );

        Ok(())
    }

    /// Loads and validates configuration from `config.toml` content.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    #[must_use]
    pub fn fingerprint(&self) -> String {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(format!("{:?}", self.world).as_bytes());
        hasher.update(format!("{:?}", self.field).as_bytes());
        hasher.update(format!("{:?}", self.agent).as_bytes());
        hasher.update(format!("{:?}", self.energy).as_bytes());
        hasher.update(format!("{:?}", self.food).as_bytes());
        hex::encode(hasher.finalize())
    }
}
