//! Lenient decoding of plan-service items.
//!
//! Language models emit numbers as `350`, `350.0` or `"350"`. All three are
//! accepted; calories are rounded to whole kcal once they are known to be
//! finite and non-negative.

use serde::de::{self, Deserializer};
use serde::Deserialize;

use crate::models::FoodItem;

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberLike {
    Number(f64),
    Text(String),
}

fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberLike::deserialize(deserializer)? {
        NumberLike::Number(value) => Ok(value),
        NumberLike::Text(text) => text
            .trim()
            .parse()
            .map_err(|_| de::Error::custom(format!("expected a number, got '{}'", text))),
    }
}

/// Whole kcal from any accepted number form.
pub(crate) fn lenient_calories<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = lenient_f64(deserializer)?;
    to_calories(value).map_err(de::Error::custom)
}

fn to_calories(value: f64) -> Result<u32, String> {
    if !value.is_finite() || value < 0.0 {
        return Err(format!("calories must be a non-negative number, got {}", value));
    }
    Ok(value.round() as u32)
}

#[derive(Deserialize)]
struct RemoteItem {
    name: String,
    #[serde(default)]
    portion: String,
    #[serde(deserialize_with = "lenient_f64")]
    calories: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    protein: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    carbs: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    fat: f64,
    #[serde(default)]
    tags: Vec<String>,
}

impl RemoteItem {
    fn into_food_item(self) -> Result<FoodItem, String> {
        let calories = to_calories(self.calories).map_err(|e| format!("{}: {}", self.name, e))?;
        Ok(FoodItem {
            name: self.name,
            portion: self.portion,
            calories,
            protein: self.protein,
            carbs: self.carbs,
            fat: self.fat,
            tags: self.tags,
        })
    }
}

/// One slot's items, each decoded leniently.
pub(crate) fn lenient_items<'de, D>(deserializer: D) -> Result<Vec<FoodItem>, D::Error>
where
    D: Deserializer<'de>,
{
    Vec::<RemoteItem>::deserialize(deserializer)?
        .into_iter()
        .map(|item| item.into_food_item().map_err(de::Error::custom))
        .collect()
}
