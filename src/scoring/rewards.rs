//! Community store catalog.

use crate::core::{Error, Result};
use serde::{Deserialize, Serialize};

/// An item citizens can redeem points for.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardItem {
    pub name: String,
    /// Cost in points
    pub cost: u32,
}

impl RewardItem {
    pub fn new(name: &str, cost: u32) -> Self {
        Self {
            name: name.to_string(),
            cost,
        }
    }
}

/// Redeemable items.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RewardCatalog {
    items: Vec<RewardItem>,
}

impl RewardCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard community store.
    pub fn community_store() -> Self {
        let mut catalog = Self::new();
        for (name, cost) in [
            ("Biscuit Packet", 20),
            ("Juice Box", 25),
            ("Soap Bar", 30),
            ("Bread Loaf", 40),
            ("Detergent (500g)", 50),
            ("Milk Packet (1L)", 60),
            ("Cooking Oil (1L)", 120),
            ("Rice Packet (1kg)", 150),
        ] {
            catalog.add(RewardItem::new(name, cost));
        }
        catalog
    }

    /// Add an item.
    pub fn add(&mut self, item: RewardItem) {
        self.items.push(item);
    }

    /// All items.
    pub fn items(&self) -> &[RewardItem] {
        &self.items
    }

    /// Find an item by name.
    pub fn find(&self, name: &str) -> Result<&RewardItem> {
        self.items
            .iter()
            .find(|item| item.name == name)
            .ok_or_else(|| Error::RewardNotFound(name.to_string()))
    }

    /// Items affordable with `points`.
    pub fn affordable(&self, points: u32) -> impl Iterator<Item = &RewardItem> {
        self.items.iter().filter(move |item| item.cost <= points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_community_store() {
        let catalog = RewardCatalog::community_store();
        assert_eq!(catalog.items().len(), 8);
        assert_eq!(catalog.find("Soap Bar").unwrap().cost, 30);
        assert!(matches!(catalog.find("Gold Bar"), Err(Error::RewardNotFound(_))));
    }

    #[test]
    fn test_affordable() {
        let catalog = RewardCatalog::community_store();
        assert_eq!(catalog.affordable(19).count(), 0);
        assert_eq!(catalog.affordable(30).count(), 3);
    }
}
