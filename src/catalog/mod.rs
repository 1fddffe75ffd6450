use std::collections::BTreeMap;

use crate::error::{PlannerError, Result};
use crate::models::{FoodItem, MealSlot};

const BUILTIN_CATALOG: &str = include_str!("../../data/thai_catalog.json");

/// Read-only food catalog partitioned by meal slot.
///
/// Built once at startup and shared by reference; nothing mutates it after
/// construction.
#[derive(Debug, Clone)]
pub struct Catalog {
    slots: BTreeMap<MealSlot, Vec<FoodItem>>,
}

impl Catalog {
    /// Build a catalog, dropping invalid entries.
    ///
    /// A catalog with no usable items at all is a configuration error.
    pub fn new(slots: BTreeMap<MealSlot, Vec<FoodItem>>) -> Result<Self> {
        let slots: BTreeMap<MealSlot, Vec<FoodItem>> = slots
            .into_iter()
            .map(|(slot, items)| {
                let kept: Vec<FoodItem> = items
                    .into_iter()
                    .filter(|item| {
                        let ok = item.is_valid();
                        if !ok {
                            tracing::warn!(slot = %slot, item = %item.debug_string(), "dropping invalid catalog item");
                        }
                        ok
                    })
                    .collect();
                (slot, kept)
            })
            .collect();

        if slots.values().all(|items| items.is_empty()) {
            return Err(PlannerError::CatalogUnavailable(
                "catalog contains no food items".to_string(),
            ));
        }

        Ok(Self { slots })
    }

    /// The Thai catalog shipped with the crate.
    pub fn builtin() -> Result<Self> {
        let slots: BTreeMap<MealSlot, Vec<FoodItem>> = serde_json::from_str(BUILTIN_CATALOG)
            .map_err(|e| PlannerError::CatalogUnavailable(format!("built-in catalog: {}", e)))?;
        Self::new(slots)
    }

    /// Items for a slot in catalog order (empty if the slot is missing).
    pub fn items(&self, slot: MealSlot) -> &[FoodItem] {
        self.slots.get(&slot).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Total number of items.
    pub fn len(&self) -> usize {
        self.slots.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, calories: u32) -> FoodItem {
        FoodItem {
            name: name.to_string(),
            portion: "1 bowl".to_string(),
            calories,
            protein: 5.0,
            carbs: 10.0,
            fat: 2.0,
            tags: Vec::new(),
        }
    }

    #[test]
    fn test_builtin_catalog_covers_all_slots() {
        let catalog = Catalog::builtin().unwrap();
        for slot in MealSlot::ALL {
            assert!(!catalog.items(slot).is_empty(), "{} is empty", slot);
        }
    }

    #[test]
    fn test_empty_catalog_is_unavailable() {
        let result = Catalog::new(BTreeMap::new());
        assert!(matches!(result, Err(PlannerError::CatalogUnavailable(_))));
    }

    #[test]
    fn test_missing_slot_is_empty() {
        let mut slots = BTreeMap::new();
        slots.insert(MealSlot::Lunch, vec![item("Pad Thai", 400)]);
        let catalog = Catalog::new(slots).unwrap();

        assert!(catalog.items(MealSlot::Snacks).is_empty());
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_invalid_items_dropped() {
        let mut bad = item("Broken", 100);
        bad.protein = -3.0;

        let mut slots = BTreeMap::new();
        slots.insert(MealSlot::Dinner, vec![item("Larb", 300), bad]);
        let catalog = Catalog::new(slots).unwrap();

        assert_eq!(catalog.items(MealSlot::Dinner).len(), 1);
        assert_eq!(catalog.items(MealSlot::Dinner)[0].name, "Larb");
    }
}
