use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Canonical nutrition estimate returned to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MealAnalysisResult {
    pub detected_dish: DetectedDish,
    pub items: Vec<FoodItem>,
    pub total: NutritionTotals,
    pub confidence: f64,
    pub balance: BalanceRating,
    pub suggestions: Vec<Suggestion>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DetectedDish {
    pub name: String,
    pub cuisine: String,
    pub confidence: f64,
    pub alternatives: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FoodItem {
    pub name: String,
    pub portion: String,
    pub grams: f64,
    pub kcal: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
    pub confidence: f64,
    pub why: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, ToSchema)]
pub struct NutritionTotals {
    pub kcal: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BalanceRating {
    pub score: f64,
    pub verdict: String,
    pub summary: String,
    pub improve: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Suggestion {
    pub goal: String,
    pub add: String,
    pub replace: String,
    pub why: String,
}

impl NutritionTotals {
    pub fn sum_of(items: &[FoodItem]) -> Self {
        items.iter().fold(Self::default(), |acc, item| Self {
            kcal: acc.kcal + item.kcal,
            protein_g: acc.protein_g + item.protein_g,
            carbs_g: acc.carbs_g + item.carbs_g,
            fat_g: acc.fat_g + item.fat_g,
        })
    }
}
