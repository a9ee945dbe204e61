use serde_json::Value;

use crate::domain::meal_analysis::{
    coercion::{NumericRange, clamp_number, coerce_string, coerce_string_list, limits},
    entities::{
        BalanceRating, DetectedDish, FoodItem, MealAnalysisResult, NutritionTotals, Suggestion,
    },
    raw::{Loose, RawBalance, RawFoodItem, RawMealAnalysis, RawSuggestion, RawTotals},
    value_objects::TotalReconciliation,
};

const DEFAULT_DISH_NAME: &str = "Unknown dish";
const DEFAULT_CUISINE: &str = "Unknown";
const DEFAULT_ITEM_NAME: &str = "Unknown item";
const DEFAULT_PORTION: &str = "1 serving";
const DEFAULT_ITEM_WHY: &str = "Estimated from the photo";
const DEFAULT_VERDICT: &str = "Needs improvement";
const DEFAULT_SUMMARY: &str = "No summary available";
const DEFAULT_GOAL: &str = "Better balance";
const DEFAULT_ADD: &str = "A portion of vegetables";
const DEFAULT_REPLACE: &str = "Nothing";
const DEFAULT_SUGGESTION_WHY: &str = "Improves the overall balance of the meal";

/// Turns untrusted model output into a fully populated [`MealAnalysisResult`].
///
/// Every numeric leaf is finite and clamped, every string is non-empty and every
/// sequence is capped. Normalizing an already normalized result returns it unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResponseNormalizer {
    reconciliation: TotalReconciliation,
}

impl ResponseNormalizer {
    pub fn new(reconciliation: TotalReconciliation) -> Self {
        Self { reconciliation }
    }

    pub fn normalize(&self, raw: &Value) -> MealAnalysisResult {
        self.normalize_raw(&RawMealAnalysis::from_value(raw))
    }

    pub fn normalize_raw(&self, raw: &RawMealAnalysis) -> MealAnalysisResult {
        let confidence = clamp_number(&raw.confidence, limits::CONFIDENCE, 0.0);

        let detected_dish = DetectedDish {
            name: coerce_string(&raw.detected_dish.name, DEFAULT_DISH_NAME),
            cuisine: coerce_string(&raw.detected_dish.cuisine, DEFAULT_CUISINE),
            confidence: clamp_number(&raw.detected_dish.confidence, limits::CONFIDENCE, confidence),
            alternatives: coerce_string_list(&raw.detected_dish.alternatives),
        };

        let items: Vec<FoodItem> = raw.items.iter().map(normalize_item).collect();
        let total = self.reconcile_total(&raw.total, &items);

        MealAnalysisResult {
            detected_dish,
            items,
            total,
            confidence,
            balance: normalize_balance(&raw.balance),
            suggestions: raw.suggestions.iter().map(normalize_suggestion).collect(),
        }
    }

    fn reconcile_total(&self, raw: &RawTotals, items: &[FoodItem]) -> NutritionTotals {
        let computed = NutritionTotals::sum_of(items);

        NutritionTotals {
            kcal: self.pick_total(&raw.kcal, computed.kcal, limits::TOTAL_KCAL),
            protein_g: self.pick_total(&raw.protein_g, computed.protein_g, limits::TOTAL_PROTEIN_G),
            carbs_g: self.pick_total(&raw.carbs_g, computed.carbs_g, limits::TOTAL_CARBS_G),
            fat_g: self.pick_total(&raw.fat_g, computed.fat_g, limits::TOTAL_FAT_G),
        }
    }

    fn pick_total(&self, upstream: &Loose, computed: f64, range: NumericRange) -> f64 {
        let upstream = upstream.to_number().filter(|value| value.is_finite());

        let chosen = match (self.reconciliation, upstream) {
            (_, None) => computed,
            (TotalReconciliation::ZeroMeansMissing, Some(value)) if value == 0.0 => computed,
            (_, Some(value)) => value,
        };

        range.clamp(chosen)
    }
}

fn normalize_item(raw: &RawFoodItem) -> FoodItem {
    FoodItem {
        name: coerce_string(&raw.name, DEFAULT_ITEM_NAME),
        portion: coerce_string(&raw.portion, DEFAULT_PORTION),
        grams: clamp_number(&raw.grams, limits::ITEM_GRAMS, 0.0),
        kcal: clamp_number(&raw.kcal, limits::ITEM_KCAL, 0.0),
        protein_g: clamp_number(&raw.protein_g, limits::ITEM_PROTEIN_G, 0.0),
        carbs_g: clamp_number(&raw.carbs_g, limits::ITEM_CARBS_G, 0.0),
        fat_g: clamp_number(&raw.fat_g, limits::ITEM_FAT_G, 0.0),
        confidence: clamp_number(&raw.confidence, limits::CONFIDENCE, 0.0),
        why: coerce_string(&raw.why, DEFAULT_ITEM_WHY),
    }
}

fn normalize_balance(raw: &RawBalance) -> BalanceRating {
    BalanceRating {
        score: clamp_number(&raw.score, limits::BALANCE_SCORE, 0.0),
        verdict: coerce_string(&raw.verdict, DEFAULT_VERDICT),
        summary: coerce_string(&raw.summary, DEFAULT_SUMMARY),
        improve: coerce_string_list(&raw.improve),
    }
}

fn normalize_suggestion(raw: &RawSuggestion) -> Suggestion {
    Suggestion {
        goal: coerce_string(&raw.goal, DEFAULT_GOAL),
        add: coerce_string(&raw.add, DEFAULT_ADD),
        replace: coerce_string(&raw.replace, DEFAULT_REPLACE),
        why: coerce_string(&raw.why, DEFAULT_SUGGESTION_WHY),
    }
}
