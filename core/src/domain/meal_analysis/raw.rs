//! Loose, explicitly optional view of whatever JSON the model produced.
//!
//! Lifting never fails: missing keys, nulls and wrongly-shaped values all end up as
//! [`Loose::Absent`] or [`Loose::Composite`], and non-array sequences become empty.
//! Older payload shapes (`food_name`, `total_calories`, `rating`) and camelCase keys are
//! folded into the same records.

use serde_json::{Map, Value};

use crate::domain::meal_analysis::coercion::limits;

type Object = Map<String, Value>;

/// A scalar leaf as found in the payload.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Loose {
    #[default]
    Absent,
    Number(f64),
    Text(String),
    Flag(bool),
    /// An object or array where a scalar was expected.
    Composite,
}

impl From<Option<&Value>> for Loose {
    fn from(value: Option<&Value>) -> Self {
        match value {
            None | Some(Value::Null) => Loose::Absent,
            Some(Value::Bool(flag)) => Loose::Flag(*flag),
            Some(Value::Number(number)) => number.as_f64().map_or(Loose::Absent, Loose::Number),
            Some(Value::String(text)) => Loose::Text(text.clone()),
            Some(Value::Array(_)) | Some(Value::Object(_)) => Loose::Composite,
        }
    }
}

impl Loose {
    /// Numeric reading of the leaf. Blank text reads as 0, unparsable text as `None`.
    pub fn to_number(&self) -> Option<f64> {
        match self {
            Loose::Number(number) => Some(*number),
            Loose::Flag(flag) => Some(if *flag { 1.0 } else { 0.0 }),
            Loose::Text(text) => {
                let text = text.trim();
                if text.is_empty() {
                    Some(0.0)
                } else {
                    text.parse::<f64>().ok()
                }
            }
            Loose::Absent | Loose::Composite => None,
        }
    }

    pub fn to_text(&self) -> Option<String> {
        match self {
            Loose::Text(text) => Some(text.clone()),
            Loose::Number(number) => Some(number.to_string()),
            Loose::Flag(flag) => Some(flag.to_string()),
            Loose::Absent | Loose::Composite => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawMealAnalysis {
    pub detected_dish: RawDetectedDish,
    pub items: Vec<RawFoodItem>,
    pub total: RawTotals,
    pub confidence: Loose,
    pub balance: RawBalance,
    pub suggestions: Vec<RawSuggestion>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawDetectedDish {
    pub name: Loose,
    pub cuisine: Loose,
    pub confidence: Loose,
    pub alternatives: Vec<Loose>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawFoodItem {
    pub name: Loose,
    pub portion: Loose,
    pub grams: Loose,
    pub kcal: Loose,
    pub protein_g: Loose,
    pub carbs_g: Loose,
    pub fat_g: Loose,
    pub confidence: Loose,
    pub why: Loose,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawTotals {
    pub kcal: Loose,
    pub protein_g: Loose,
    pub carbs_g: Loose,
    pub fat_g: Loose,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawBalance {
    pub score: Loose,
    pub verdict: Loose,
    pub summary: Loose,
    pub improve: Vec<Loose>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawSuggestion {
    pub goal: Loose,
    pub add: Loose,
    pub replace: Loose,
    pub why: Loose,
}

/// First non-null value among `keys`.
fn field<'a>(object: Option<&'a Object>, keys: &[&str]) -> Option<&'a Value> {
    let object = object?;
    keys.iter()
        .filter_map(|key| object.get(*key))
        .find(|value| !value.is_null())
}

fn leaf(object: Option<&Object>, keys: &[&str]) -> Loose {
    Loose::from(field(object, keys))
}

fn nested<'a>(object: Option<&'a Object>, keys: &[&str]) -> Option<&'a Object> {
    field(object, keys).and_then(Value::as_object)
}

fn sequence<'a>(object: Option<&'a Object>, keys: &[&str], cap: usize) -> Vec<&'a Value> {
    field(object, keys)
        .and_then(Value::as_array)
        .map(|values| values.iter().take(cap).collect())
        .unwrap_or_default()
}

fn leaf_sequence(object: Option<&Object>, keys: &[&str], cap: usize) -> Vec<Loose> {
    sequence(object, keys, cap)
        .into_iter()
        .map(|value| Loose::from(Some(value)))
        .collect()
}

impl RawMealAnalysis {
    pub fn from_value(value: &Value) -> Self {
        let root = value.as_object();
        let dish = nested(root, &["detected_dish", "detectedDish", "dish"]);
        let total = nested(root, &["total", "totals"]);
        let balance = nested(root, &["balance"]);
        let rating = nested(root, &["rating"]);

        let detected_dish = RawDetectedDish {
            name: Loose::from(
                field(dish, &["name"]).or_else(|| field(root, &["food_name", "foodName"])),
            ),
            cuisine: leaf(dish, &["cuisine"]),
            confidence: leaf(dish, &["confidence"]),
            alternatives: leaf_sequence(dish, &["alternatives"], limits::MAX_ALTERNATIVES),
        };

        let total = RawTotals {
            kcal: Loose::from(
                field(total, &["kcal", "calories"])
                    .or_else(|| field(root, &["total_calories", "totalCalories"])),
            ),
            protein_g: leaf(total, &["protein_g", "proteinG", "protein"]),
            carbs_g: leaf(total, &["carbs_g", "carbsG", "carbs"]),
            fat_g: leaf(total, &["fat_g", "fatG", "fat"]),
        };

        let balance = RawBalance {
            score: Loose::from(field(balance, &["score"]).or_else(|| field(rating, &["score"]))),
            verdict: Loose::from(
                field(balance, &["verdict"]).or_else(|| field(rating, &["label"])),
            ),
            summary: leaf(balance, &["summary"]),
            improve: leaf_sequence(balance, &["improve"], limits::MAX_IMPROVE),
        };

        Self {
            detected_dish,
            items: sequence(root, &["items", "foods"], limits::MAX_ITEMS)
                .into_iter()
                .map(RawFoodItem::from_value)
                .collect(),
            total,
            confidence: leaf(root, &["confidence"]),
            balance,
            suggestions: sequence(root, &["suggestions"], limits::MAX_SUGGESTIONS)
                .into_iter()
                .map(RawSuggestion::from_value)
                .collect(),
        }
    }
}

impl RawFoodItem {
    pub fn from_value(value: &Value) -> Self {
        let item = value.as_object();
        Self {
            name: leaf(item, &["name", "food_name", "foodName"]),
            portion: leaf(item, &["portion", "serving"]),
            grams: leaf(item, &["grams", "weight_g", "weightG"]),
            kcal: leaf(item, &["kcal", "calories"]),
            protein_g: leaf(item, &["protein_g", "proteinG", "protein"]),
            carbs_g: leaf(item, &["carbs_g", "carbsG", "carbs"]),
            fat_g: leaf(item, &["fat_g", "fatG", "fat"]),
            confidence: leaf(item, &["confidence"]),
            why: leaf(item, &["why", "reason"]),
        }
    }
}

impl RawSuggestion {
    pub fn from_value(value: &Value) -> Self {
        let suggestion = value.as_object();
        Self {
            goal: leaf(suggestion, &["goal"]),
            add: leaf(suggestion, &["add"]),
            replace: leaf(suggestion, &["replace"]),
            why: leaf(suggestion, &["why", "reason"]),
        }
    }
}
