use myxo_lib::model::agent;
use myxo_lib::model::config::AppConfig;
use myxo_lib::model::state::Position;
use myxo_lib::model::world::World;

/// Builder for deterministic test worlds: starts empty and seeded, with
/// agents and food placed explicitly.
#[allow(dead_code)]
pub struct WorldBuilder {
    config: AppConfig,
    agents: Vec<(f64, f64, f64)>,
    food: Vec<(f64, f64)>,
}

#[allow(dead_code)]
impl WorldBuilder {
    pub fn new() -> Self {
        let mut config = AppConfig::default();
        config.world.agent_count = 0;
        config.world.initial_food_sources = 0;
        config.world.seed = Some(7);
        Self {
            config,
            agents: Vec::new(),
            food: Vec::new(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.world.seed = Some(seed);
        self
    }

    pub fn with_config<F>(mut self, modifier: F) -> Self
    where
        F: FnOnce(&mut AppConfig),
    {
        modifier(&mut self.config);
        self
    }

    /// Queues an agent at an exact position and heading.
    pub fn with_agent_at(mut self, x: f64, y: f64, heading: f64) -> Self {
        self.agents.push((x, y, heading));
        self
    }

    /// Queues a food source through the same path pointer input uses.
    pub fn with_food_at(mut self, x: f64, y: f64) -> Self {
        self.food.push((x, y));
        self
    }

    pub fn build(self) -> World {
        let mut world = World::new(self.config).expect("test world should build");
        for (x, y) in self.food {
            assert!(world.place_food(x, y), "builder food must be placeable");
        }
        for (x, y, heading) in self.agents {
            let mut agent = agent::spawn_agent(&mut world.rng, &world.config);
            agent.position = Position { x, y };
            agent.heading = heading;
            world.agents.push(agent);
        }
        world
    }
}
