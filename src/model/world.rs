//! The orchestrator: owns the trail field, the food registry, and the
//! live-agent collection, and drives the simulation one tick at a time.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use myxo_core::agent::{self, AgentFate};
use myxo_core::config::AppConfig;
use myxo_core::field::TrailField;
use myxo_core::food::FoodRegistry;
use myxo_core::snapshot::{AgentSnapshot, FieldSnapshot, WorldSnapshot};
use myxo_core::stats::{self, SimStats, StatsHistory};
use myxo_data::{Agent, Position};

pub struct World {
    pub tick: u64,
    pub field: TrailField,
    pub food: FoodRegistry,
    pub agents: Vec<Agent>,
    pub stats: SimStats,
    pub history: StatsHistory,
    pub config: AppConfig,
    pub rng: ChaCha8Rng,
}

impl World {
    pub fn new(config: AppConfig) -> anyhow::Result<Self> {
        config.validate()?;

        let mut rng = if let Some(seed) = config.world.seed {
            ChaCha8Rng::seed_from_u64(seed)
        } else {
            ChaCha8Rng::from_entropy()
        };

        let field = TrailField::new(
            config.world.width,
            config.world.height,
            config.field.resolution,
            config.field.diffusion_rate,
            config.field.evaporation_rate,
        );

        let mut food = FoodRegistry::new();
        for _ in 0..config.world.initial_food_sources {
            food.periodic_spawn(&mut rng, &config);
        }

        let agents: Vec<Agent> = (0..config.world.agent_count)
            .map(|_| agent::spawn_agent(&mut rng, &config))
            .collect();

        tracing::info!(
            agents = agents.len(),
            food_sources = food.len(),
            cols = field.cols(),
            rows = field.rows(),
            fingerprint = %config.fingerprint(),
            "world initialized"
        );

        let history = StatsHistory::new(config.stats.history_length);
        let mut world = Self {
            tick: 0,
            field,
            food,
            agents,
            stats: SimStats::default(),
            history,
            config,
            rng,
        };
        world.stats = world.collect_stats();
        Ok(world)
    }

    /// Advances the simulation by one tick.
    ///
    /// Order matters: the field diffuses and evaporates first, so every
    /// agent senses the already-advanced field; agents then run one at a
    /// time in a fixed order, each one's deposits and consumption
    /// immediately visible to the next; dead agents drop out without
    /// disturbing the pass; finally the periodic food spawn and the
    /// stats sample run on their own intervals.
    pub fn update(&mut self) {
        self.tick += 1;
        self.field.advance();

        let config = &self.config;
        let field = &mut self.field;
        let food = &mut self.food;
        let rng = &mut self.rng;
        self.agents.retain_mut(|agent| {
            agent::update_agent(agent, field, food, config, rng) == AgentFate::Alive
        });

        if self.tick % self.config.food.spawn_interval == 0 {
            self.food.periodic_spawn(&mut self.rng, &self.config);
        }

        if self.tick % self.config.stats.sample_interval == 0 {
            self.refresh_stats();
        }
    }

    /// Requests a food source at an externally supplied point (pointer
    /// input). Same bounds and cap rules as automatic spawning, plus the
    /// manual slack.
    pub fn place_food(&mut self, x: f64, y: f64) -> bool {
        let initial_amount = self.config.food.initial_amount;
        self.food
            .try_spawn(Position { x, y }, initial_amount, &mut self.rng, &self.config)
    }

    /// Recomputes the aggregate stats and records them in the history.
    pub fn refresh_stats(&mut self) {
        self.stats = self.collect_stats();
        self.history.push(self.stats.clone());
    }

    fn collect_stats(&self) -> SimStats {
        stats::collect_stats(
            self.tick,
            &self.agents,
            self.food.sources(),
            &self.field,
            &self.config,
        )
    }

    /// Read-only view of the whole world for rendering collaborators.
    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot {
            tick: self.tick,
            width: self.config.world.width,
            height: self.config.world.height,
            agents: self
                .agents
                .iter()
                .map(|a| AgentSnapshot {
                    id: a.id,
                    x: a.position.x,
                    y: a.position.y,
                    heading: a.heading,
                    energy: a.energy,
                    max_energy: self.config.energy.max_energy,
                    satiation_timer: a.satiation_timer,
                    status: agent::agent_status(a, &self.config),
                })
                .collect(),
            food: self.food.sources().to_vec(),
            field: FieldSnapshot {
                cols: self.field.cols(),
                rows: self.field.rows(),
                resolution: self.field.resolution(),
                cells: self.field.cells().to_vec(),
                previous: self.field.previous().to_vec(),
            },
            stats: self.stats.clone(),
        }
    }
}
