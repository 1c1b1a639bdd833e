use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::agent::Position;

/// A depletable food source.
///
/// `amount` only ever decreases; `initial_amount` is fixed at spawn and
/// normalizes the remaining strength for stimulus and rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodSource {
    pub id: Uuid,
    pub position: Position,
    pub amount: f64,
    pub initial_amount: f64,
}

impl FoodSource {
    pub fn new(id: Uuid, position: Position, initial_amount: f64) -> Self {
        Self {
            id,
            position,
            amount: initial_amount,
            initial_amount,
        }
    }

    /// Fraction of the source still remaining, in `[0, 1]`.
    pub fn remaining_fraction(&self) -> f64 {
        if self.initial_amount > 0.0 {
            (self.amount / self.initial_amount).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remaining_fraction_full_and_empty() {
        let mut source = FoodSource::new(
            Uuid::nil(),
            Position { x: 1.0, y: 2.0 },
            100.0,
        );
        assert_eq!(source.remaining_fraction(), 1.0);
        source.amount = 25.0;
        assert_eq!(source.remaining_fraction(), 0.25);
        source.amount = 0.0;
        assert_eq!(source.remaining_fraction(), 0.0);
    }
}
