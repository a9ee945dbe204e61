use crate::domain::meal_analysis::raw::Loose;

/// Closed numeric interval a normalized field must fall into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericRange {
    pub min: f64,
    pub max: f64,
}

impl NumericRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn clamp(&self, value: f64) -> f64 {
        // `+ 0.0` folds -0.0 into 0.0
        value.clamp(self.min, self.max) + 0.0
    }

    #[cfg(test)]
    pub fn contains(&self, value: f64) -> bool {
        value.is_finite() && value >= self.min && value <= self.max
    }
}

pub mod limits {
    use super::NumericRange;

    pub const CONFIDENCE: NumericRange = NumericRange::new(0.0, 1.0);

    pub const ITEM_GRAMS: NumericRange = NumericRange::new(0.0, 3000.0);
    pub const ITEM_KCAL: NumericRange = NumericRange::new(0.0, 6000.0);
    pub const ITEM_PROTEIN_G: NumericRange = NumericRange::new(0.0, 400.0);
    pub const ITEM_CARBS_G: NumericRange = NumericRange::new(0.0, 600.0);
    pub const ITEM_FAT_G: NumericRange = NumericRange::new(0.0, 300.0);

    pub const TOTAL_KCAL: NumericRange = NumericRange::new(0.0, 8000.0);
    pub const TOTAL_PROTEIN_G: NumericRange = NumericRange::new(0.0, 500.0);
    pub const TOTAL_CARBS_G: NumericRange = NumericRange::new(0.0, 900.0);
    pub const TOTAL_FAT_G: NumericRange = NumericRange::new(0.0, 400.0);

    pub const BALANCE_SCORE: NumericRange = NumericRange::new(0.0, 100.0);

    pub const MAX_ALTERNATIVES: usize = 4;
    pub const MAX_ITEMS: usize = 12;
    pub const MAX_IMPROVE: usize = 5;
    pub const MAX_SUGGESTIONS: usize = 6;
}

/// Numeric conversion, then clamp into `range`. Anything that does not yield a finite number
/// becomes `fallback` untouched.
pub fn clamp_number(value: &Loose, range: NumericRange, fallback: f64) -> f64 {
    match value.to_number() {
        Some(number) if number.is_finite() => range.clamp(number),
        _ => fallback,
    }
}

/// Stringify and trim; blank or non-scalar values become `fallback`.
pub fn coerce_string(value: &Loose, fallback: &str) -> String {
    value
        .to_text()
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

/// Stringify and trim every entry, dropping the blank ones.
pub fn coerce_string_list(values: &[Loose]) -> Vec<String> {
    values
        .iter()
        .filter_map(Loose::to_text)
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const RANGE: NumericRange = NumericRange::new(0.0, 10.0);

    #[test]
    fn test_clamp_number_in_range() {
        assert_eq!(clamp_number(&Loose::Number(4.5), RANGE, 0.0), 4.5);
    }

    #[test]
    fn test_clamp_number_bounds() {
        assert_eq!(clamp_number(&Loose::Number(-3.0), RANGE, 7.0), 0.0);
        assert_eq!(clamp_number(&Loose::Number(99.0), RANGE, 7.0), 10.0);
    }

    #[test]
    fn test_clamp_number_numeric_text() {
        assert_eq!(clamp_number(&Loose::Text(" 8 ".into()), RANGE, 0.0), 8.0);
        assert_eq!(clamp_number(&Loose::Text("".into()), RANGE, 5.0), 0.0);
        assert_eq!(clamp_number(&Loose::Text("8 kcal".into()), RANGE, 5.0), 5.0);
    }

    #[test]
    fn test_clamp_number_non_finite_uses_fallback() {
        assert_eq!(clamp_number(&Loose::Text("NaN".into()), RANGE, 3.0), 3.0);
        assert_eq!(clamp_number(&Loose::Text("inf".into()), RANGE, 3.0), 3.0);
        assert_eq!(clamp_number(&Loose::Absent, RANGE, 3.0), 3.0);
        assert_eq!(clamp_number(&Loose::Composite, RANGE, 3.0), 3.0);
    }

    #[test]
    fn test_clamp_number_flags() {
        assert_eq!(clamp_number(&Loose::Flag(true), RANGE, 0.0), 1.0);
        assert_eq!(clamp_number(&Loose::Flag(false), RANGE, 9.0), 0.0);
    }

    #[test]
    fn test_clamp_folds_negative_zero() {
        let value = clamp_number(&Loose::Number(-0.0), RANGE, 1.0);
        assert!(value.is_sign_positive());
    }

    #[test]
    fn test_coerce_string() {
        assert_eq!(coerce_string(&Loose::Text("  rice ".into()), "x"), "rice");
        assert_eq!(coerce_string(&Loose::Text("   ".into()), "x"), "x");
        assert_eq!(coerce_string(&Loose::Number(150.0), "x"), "150");
        assert_eq!(coerce_string(&Loose::Composite, "x"), "x");
    }

    #[test]
    fn test_coerce_string_list_drops_blanks() {
        let values = vec![
            Loose::Text(" a ".into()),
            Loose::Text("".into()),
            Loose::Absent,
            Loose::Number(2.5),
        ];
        assert_eq!(coerce_string_list(&values), vec!["a", "2.5"]);
    }
}
