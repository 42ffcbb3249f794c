//! Resources - the colony's raw material counters

use serde::{Deserialize, Serialize};

/// Stone and wood in storage
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Resources {
    pub stone: u32,
    pub wood: u32,
}

/// Amount of each raw material a recipe or construction needs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceCost {
    pub stone: u32,
    pub wood: u32,
}

impl ResourceCost {
    pub fn stone(stone: u32) -> Self {
        Self { stone, wood: 0 }
    }

    pub fn is_free(&self) -> bool {
        self.stone == 0 && self.wood == 0
    }
}

impl std::fmt::Display for ResourceCost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.stone, self.wood) {
            (0, 0) => write!(f, "free"),
            (s, 0) => write!(f, "{} stone", s),
            (0, w) => write!(f, "{} wood", w),
            (s, w) => write!(f, "{} stone, {} wood", s, w),
        }
    }
}

impl Resources {
    pub fn new(stone: u32, wood: u32) -> Self {
        Self { stone, wood }
    }

    /// Check if there is enough of every material in `cost`
    pub fn can_afford(&self, cost: &ResourceCost) -> bool {
        self.stone >= cost.stone && self.wood >= cost.wood
    }

    /// Deduct `cost`, returns false (and leaves counters untouched) if short
    pub fn consume(&mut self, cost: &ResourceCost) -> bool {
        if !self.can_afford(cost) {
            return false;
        }
        self.stone -= cost.stone;
        self.wood -= cost.wood;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_can_afford() {
        let resources = Resources::new(3, 1);
        assert!(resources.can_afford(&ResourceCost { stone: 3, wood: 1 }));
        assert!(resources.can_afford(&ResourceCost::default()));
        assert!(!resources.can_afford(&ResourceCost { stone: 4, wood: 0 }));
        assert!(!resources.can_afford(&ResourceCost { stone: 0, wood: 2 }));
    }

    #[test]
    fn test_consume_is_all_or_nothing() {
        let mut resources = Resources::new(5, 0);

        assert!(!resources.consume(&ResourceCost { stone: 2, wood: 1 }));
        assert_eq!(resources, Resources::new(5, 0));

        assert!(resources.consume(&ResourceCost::stone(5)));
        assert_eq!(resources, Resources::new(0, 0));
    }

    #[test]
    fn test_cost_display() {
        assert_eq!(ResourceCost { stone: 3, wood: 1 }.to_string(), "3 stone, 1 wood");
        assert_eq!(ResourceCost::stone(5).to_string(), "5 stone");
        assert_eq!(ResourceCost::default().to_string(), "free");
    }
}
