use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    SpendingPattern,
    BudgetAlert,
    Suggestion,
    Prediction,
}

// Declaration order gives Low < Medium < High.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn color(&self) -> &'static str {
        match self {
            Priority::Low => "#10b981",
            Priority::Medium => "#f59e0b",
            Priority::High => "#ef4444",
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct FinancialInsight {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: InsightKind,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub actionable: bool,
    pub data: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_colors_and_order() {
        assert_eq!(Priority::Low.color(), "#10b981");
        assert_eq!(Priority::Medium.color(), "#f59e0b");
        assert_eq!(Priority::High.color(), "#ef4444");
        assert!(Priority::High > Priority::Medium && Priority::Medium > Priority::Low);
    }
}
