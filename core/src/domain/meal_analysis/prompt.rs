/// Instruction sent alongside the photo. The model is also forced into JSON mode, the
/// shape below is what the normalizer expects.
pub fn meal_analysis_prompt() -> String {
    r#"
Analyze this meal photo and return JSON ONLY with:
{
  "detected_dish": {"name":"string","cuisine":"string","confidence":number,"alternatives":["string"]},
  "items":[{"name":"string","portion":"string","grams":number,"kcal":number,"protein_g":number,"carbs_g":number,"fat_g":number,"confidence":number,"why":"string"}],
  "total":{"kcal":number,"protein_g":number,"carbs_g":number,"fat_g":number},
  "confidence":number,
  "balance":{"score":number,"verdict":"string","summary":"string","improve":["string"]},
  "suggestions":[{"goal":"string","add":"string","replace":"string","why":"string"}]
}
Rules:
- Provide best estimates even if unsure.
- Every confidence is 0.0 to 1.0.
- balance.score is 0 to 100.
- At most 12 items, 4 alternatives, 5 improve entries and 6 suggestions.
- Suggestions should cover goals such as "More protein", "More fiber" and "Fewer calories".
- No extra text outside JSON.
"#
    .trim()
    .to_string()
}
