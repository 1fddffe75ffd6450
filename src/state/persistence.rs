use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::catalog::Catalog;
use crate::error::{PlannerError, Result};
use crate::models::{DailyPlan, FoodItem, MealSlot, WeightLog};

/// One row of a CSV catalog. `tags` is a `;`-separated list.
#[derive(Debug, Deserialize)]
struct CatalogRow {
    slot: MealSlot,
    name: String,
    #[serde(default)]
    portion: String,
    calories: u32,
    #[serde(default)]
    protein: f64,
    #[serde(default)]
    carbs: f64,
    #[serde(default)]
    fat: f64,
    #[serde(default)]
    tags: String,
}

impl CatalogRow {
    fn into_slot_item(self) -> (MealSlot, FoodItem) {
        let tags = self
            .tags
            .split(';')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect();

        (
            self.slot,
            FoodItem {
                name: self.name,
                portion: self.portion,
                calories: self.calories,
                protein: self.protein,
                carbs: self.carbs,
                fat: self.fat,
                tags,
            },
        )
    }
}

/// Deduplicate by lowercase name, keeping catalog order.
///
/// A later duplicate replaces the earlier entry in place.
fn dedup_items(items: Vec<FoodItem>) -> Vec<FoodItem> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut out: Vec<FoodItem> = Vec::with_capacity(items.len());

    for item in items {
        match index.get(&item.key()) {
            Some(&pos) => out[pos] = item,
            None => {
                index.insert(item.key(), out.len());
                out.push(item);
            }
        }
    }

    out
}

fn build_catalog(slots: BTreeMap<MealSlot, Vec<FoodItem>>) -> Result<Catalog> {
    let slots = slots
        .into_iter()
        .map(|(slot, items)| (slot, dedup_items(items)))
        .collect();
    Catalog::new(slots)
}

/// Load a catalog from a JSON object keyed by slot name.
pub fn load_catalog_json<P: AsRef<Path>>(path: P) -> Result<Catalog> {
    let content = fs::read_to_string(path)?;
    let slots: BTreeMap<MealSlot, Vec<FoodItem>> = serde_json::from_str(&content)?;
    build_catalog(slots)
}

/// Load a catalog from CSV with a `slot` column.
pub fn load_catalog_csv<P: AsRef<Path>>(path: P) -> Result<Catalog> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut slots: BTreeMap<MealSlot, Vec<FoodItem>> = BTreeMap::new();

    for row in reader.deserialize::<CatalogRow>() {
        let (slot, item) = row?.into_slot_item();
        slots.entry(slot).or_default().push(item);
    }

    build_catalog(slots)
}

/// Load a catalog, choosing the format by file extension.
///
/// A missing file is a configuration error, not an IO hiccup.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(PlannerError::CatalogUnavailable(format!(
            "catalog file not found: {}",
            path.display()
        )));
    }

    let is_csv = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);

    let catalog = if is_csv {
        load_catalog_csv(path)?
    } else {
        load_catalog_json(path)?
    };

    tracing::info!(path = %path.display(), items = catalog.len(), "loaded food catalog");
    Ok(catalog)
}

/// Load a saved daily plan.
pub fn load_daily_plan<P: AsRef<Path>>(path: P) -> Result<DailyPlan> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Save a daily plan as pretty JSON.
pub fn save_daily_plan<P: AsRef<Path>>(path: P, plan: &DailyPlan) -> Result<()> {
    let json = serde_json::to_string_pretty(plan)?;
    fs::write(path, json)?;
    Ok(())
}

/// Load weigh-ins from a `date,weight` CSV.
pub fn load_weight_logs<P: AsRef<Path>>(path: P) -> Result<Vec<WeightLog>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut logs = Vec::new();
    for record in reader.deserialize::<WeightLog>() {
        logs.push(record?);
    }
    Ok(logs)
}
