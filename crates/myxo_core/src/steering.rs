//! The per-tick steering decision, kept free of field and registry
//! access so the branchy state logic tests on plain numbers.

use rand::Rng;
use std::f64::consts::{PI, TAU};

use crate::config::AppConfig;

/// Behavioral mode for one tick, derived from energy and the satiation
/// countdown. Never stored on the agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mood {
    /// Fresh off a depleted source; ignores stimuli and roams widely.
    SatiatedStrong,
    /// Tail end of the post-feeding window; narrower roaming.
    SatiatedMild,
    /// Low energy and not satiated; trusts trails less and wobbles more.
    Hungry,
    Normal,
}

/// Stimulus values at the three sensor probes.
#[derive(Debug, Clone, Copy)]
pub struct SensorSamples {
    pub forward: f64,
    pub left: f64,
    pub right: f64,
}

pub fn mood(energy: f64, satiation_timer: u32, config: &AppConfig) -> Mood {
    let timer = satiation_timer as f64;
    if timer > config.food.satiation_on_finish as f64 * 0.75 {
        Mood::SatiatedStrong
    } else if timer > config.food.satiation_time as f64 * 0.5 {
        Mood::SatiatedMild
    } else if satiation_timer == 0 && energy < config.energy.low_threshold() {
        Mood::Hungry
    } else {
        Mood::Normal
    }
}

/// Desired heading change for this tick, before blending.
///
/// Satiated agents ignore the samples entirely. Hungry and normal agents
/// keep their heading when the forward sample is the strict maximum above
/// an epsilon, otherwise turn toward the stronger side, otherwise fall
/// back to a random offset. Every branch adds a bounded wobble on top,
/// tripled while hungry.
pub fn desired_turn<R: Rng>(
    mood: Mood,
    samples: SensorSamples,
    config: &AppConfig,
    rng: &mut R,
) -> f64 {
    let turn = config.agent.turn_speed;
    let mut wobble = config.agent.random_wobble;
    let SensorSamples {
        forward,
        left,
        right,
    } = samples;

    let mut delta = match mood {
        Mood::SatiatedStrong => rng.gen_range(-turn * 1.8..turn * 1.8),
        Mood::SatiatedMild => rng.gen_range(-turn * 1.2..turn * 1.2),
        Mood::Hungry => {
            wobble *= config.agent.hungry_wobble_multiplier;
            if forward > left && forward > right && forward > 0.01 {
                0.0
            } else if left > right && left > 0.01 {
                -turn
            } else if right > left && right > 0.01 {
                turn
            } else {
                rng.gen_range(-turn * 1.2..turn * 1.2)
            }
        }
        Mood::Normal => {
            if forward > left && forward > right && forward > 0.1 {
                0.0
            } else if left > right {
                -turn
            } else if right > left {
                turn
            } else {
                rng.gen_range(-turn..turn) * 0.5
            }
        }
    };
    delta += rng.gen_range(-wobble..wobble);
    delta
}

/// Wrap-aware angular interpolation: blends along the shortest path
/// between the headings, never the long way around a full turn.
pub fn lerp_angle(from: f64, to: f64, amount: f64) -> f64 {
    let mut difference = to - from;
    while difference < -PI {
        difference += TAU;
    }
    while difference > PI {
        difference -= TAU;
    }
    from + difference * amount
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn config() -> AppConfig {
        AppConfig::default()
    }

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(99)
    }

    #[test]
    fn test_mood_thresholds() {
        let config = config();
        // satiation_on_finish 250 -> strong above 187.5
        assert_eq!(mood(1000.0, 200, &config), Mood::SatiatedStrong);
        assert_eq!(mood(1000.0, 187, &config), Mood::SatiatedMild);
        // satiation_time 50 -> mild above 25
        assert_eq!(mood(1000.0, 26, &config), Mood::SatiatedMild);
        // A short residual timer suppresses hunger even at low energy.
        assert_eq!(mood(100.0, 10, &config), Mood::Normal);
        // low threshold = 360
        assert_eq!(mood(100.0, 0, &config), Mood::Hungry);
        assert_eq!(mood(360.0, 0, &config), Mood::Normal);
        assert_eq!(mood(1000.0, 0, &config), Mood::Normal);
    }

    #[test]
    fn test_forward_maximum_keeps_heading() {
        let config = config();
        let samples = SensorSamples {
            forward: 5.0,
            left: 1.0,
            right: 1.0,
        };
        let mut rng = rng();
        for _ in 0..100 {
            let delta = desired_turn(Mood::Normal, samples, &config, &mut rng);
            assert!(delta.abs() <= config.agent.random_wobble);
        }
    }

    #[test]
    fn test_stronger_side_wins() {
        let config = config();
        let mut rng = rng();
        let left_heavy = SensorSamples {
            forward: 0.5,
            left: 3.0,
            right: 1.0,
        };
        for _ in 0..100 {
            let delta = desired_turn(Mood::Normal, left_heavy, &config, &mut rng);
            assert!(delta < -config.agent.turn_speed + config.agent.random_wobble);
        }
        let right_heavy = SensorSamples {
            forward: 0.5,
            left: 1.0,
            right: 3.0,
        };
        for _ in 0..100 {
            let delta = desired_turn(Mood::Normal, right_heavy, &config, &mut rng);
            assert!(delta > config.agent.turn_speed - config.agent.random_wobble);
        }
    }

    #[test]
    fn test_hungry_ignores_sub_epsilon_trails() {
        // All samples below the hungry epsilon: the decision falls back
        // to a random offset bounded by the widened wobble.
        let config = config();
        let samples = SensorSamples {
            forward: 0.005,
            left: 0.002,
            right: 0.009,
        };
        let mut rng = rng();
        let bound = config.agent.turn_speed * 1.2
            + config.agent.random_wobble * config.agent.hungry_wobble_multiplier;
        for _ in 0..100 {
            let delta = desired_turn(Mood::Hungry, samples, &config, &mut rng);
            assert!(delta.abs() <= bound);
        }
    }

    #[test]
    fn test_satiated_ignores_samples() {
        let config = config();
        let samples = SensorSamples {
            forward: 0.0,
            left: 1000.0,
            right: 0.0,
        };
        let mut rng = rng();
        let bound = config.agent.turn_speed * 1.8 + config.agent.random_wobble;
        for _ in 0..100 {
            let delta = desired_turn(Mood::SatiatedStrong, samples, &config, &mut rng);
            assert!(delta.abs() <= bound, "satiated turn should stay bounded");
        }
    }

    #[test]
    fn test_lerp_angle_shortest_path() {
        // Interpolating across the 0/2pi seam must go through the seam,
        // not the long way around.
        let result = lerp_angle(0.1, TAU - 0.1, 0.5);
        assert!((result - 0.0).abs() < 1e-9, "got {result}");

        let plain = lerp_angle(1.0, 2.0, 0.5);
        assert!((plain - 1.5).abs() < 1e-9);

        let full = lerp_angle(0.3, 5.0, 1.0);
        // 5.0 - 0.3 > pi, so the blend target is 5.0 - 2pi.
        assert!((full - (5.0 - TAU)).abs() < 1e-9);
    }
}
