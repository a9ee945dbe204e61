use serde::{Deserialize, Serialize};

/// How the upstream `total` block is reconciled with the sum of the items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TotalReconciliation {
    /// Upstream totals of exactly 0 count as missing and are replaced by the item sum.
    #[default]
    ZeroMeansMissing,
    /// Only absent or non-numeric upstream totals are replaced; an explicit 0 is kept.
    AbsentOnly,
}

/// Base64 photo as received from the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealImage(String);

impl MealImage {
    pub fn new(base64: impl Into<String>) -> Self {
        Self(base64.into().trim().to_string())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Callers sometimes send a full data URL instead of bare base64; forward those as-is.
    pub fn data_url(&self) -> String {
        if self.0.starts_with("data:") {
            self.0.clone()
        } else {
            format!("data:image/jpeg;base64,{}", self.0)
        }
    }
}

#[derive(Debug, Clone)]
pub struct AnalyzeMealInput {
    pub image: MealImage,
}

/// What came back from the vision model: the raw HTTP body and the first choice's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisionCompletion {
    pub raw_body: String,
    pub content: Option<String>,
}
