mod common;

use common::WorldBuilder;

#[test]
fn test_exhausted_agent_dies_before_acting() {
    let mut world = WorldBuilder::new()
        .with_agent_at(100.0, 100.0, 0.0)
        .build();
    world.agents[0].energy = world.config.energy.decay_per_tick;

    let position_before = world.agents[0].position;
    world.update();

    assert!(world.agents.is_empty(), "agent must be removed this tick");
    // Death precedes movement and deposit: the field never saw it.
    assert_eq!(world.field.total_concentration(), 0.0);
    assert_eq!(world.field.query(position_before.x, position_before.y), 0.0);
}

#[test]
fn test_death_does_not_disturb_the_pass() {
    let mut world = WorldBuilder::new()
        .with_agent_at(100.0, 100.0, 0.0)
        .with_agent_at(200.0, 200.0, 1.0)
        .with_agent_at(300.0, 300.0, 2.0)
        .build();
    let surviving: Vec<_> = [world.agents[0].id, world.agents[2].id].to_vec();
    world.agents[1].energy = world.config.energy.decay_per_tick;

    world.update();

    assert_eq!(world.agents.len(), 2);
    let ids: Vec<_> = world.agents.iter().map(|a| a.id).collect();
    assert_eq!(ids, surviving, "iteration order must be preserved");
}

#[test]
fn test_energy_stays_in_range_over_time() {
    let mut world = WorldBuilder::new()
        .with_config(|c| c.world.agent_count = 30)
        .with_food_at(400.0, 300.0)
        .build();

    for _ in 0..300 {
        world.update();
        for agent in &world.agents {
            assert!(agent.energy >= 0.0);
            assert!(agent.energy <= world.config.energy.max_energy);
        }
    }
}

#[test]
fn test_wrap_keeps_positions_half_open() {
    // An agent heading straight at the right edge must re-enter near the
    // left edge on the same tick.
    let mut world = WorldBuilder::new()
        .with_agent_at(199.9, 75.0, 0.0)
        .with_config(|c| {
            c.world.width = 200.0;
            c.world.height = 150.0;
        })
        .build();

    world.update();

    let agent = &world.agents[0];
    assert!(agent.position.x >= 0.0 && agent.position.x < 1.0, "x = {}", agent.position.x);
    assert!(agent.position.y >= 0.0 && agent.position.y < 150.0);
}

#[test]
fn test_positions_stay_in_bounds_long_run() {
    let mut world = WorldBuilder::new()
        .with_config(|c| {
            c.world.width = 120.0;
            c.world.height = 90.0;
            c.world.agent_count = 25;
        })
        .with_seed(31)
        .build();

    for _ in 0..500 {
        world.update();
        for agent in &world.agents {
            assert!(agent.position.x >= 0.0 && agent.position.x < 120.0);
            assert!(agent.position.y >= 0.0 && agent.position.y < 90.0);
        }
    }
}
