use super::expense::ExpenseCategory;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BudgetPeriod {
    Monthly,
    Weekly,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub id: String,
    pub category: ExpenseCategory,
    pub amount: f64,
    pub spent: f64,
    pub period: BudgetPeriod,
    /// Percentage of `amount` at which the budget starts alerting
    pub alert_threshold: f64,
}

impl Budget {
    /// Spent as a percentage of the budget, capped at 100.
    ///
    /// A budget with no positive amount is fully used as soon as anything is spent.
    pub fn progress(&self) -> f64 {
        if self.amount <= 0.0 {
            return if self.spent > 0.0 { 100.0 } else { 0.0 };
        }
        (self.spent / self.amount * 100.0).min(100.0)
    }

    pub fn is_over_budget(&self) -> bool {
        self.spent > self.amount
    }

    pub fn should_alert(&self) -> bool {
        self.progress() >= self.alert_threshold
    }

    pub fn remaining(&self) -> f64 {
        (self.amount - self.spent).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn budget(amount: f64, spent: f64, alert_threshold: f64) -> Budget {
        Budget {
            id: "b1".to_string(),
            category: ExpenseCategory::Food,
            amount,
            spent,
            period: BudgetPeriod::Monthly,
            alert_threshold,
        }
    }

    #[test]
    fn progress_is_capped_at_one_hundred() {
        assert_eq!(budget(200.0, 50.0, 80.0).progress(), 25.0);
        assert_eq!(budget(200.0, 500.0, 80.0).progress(), 100.0);
    }

    #[test]
    fn alert_fires_at_threshold() {
        assert!(!budget(100.0, 79.0, 80.0).should_alert());
        assert!(budget(100.0, 80.0, 80.0).should_alert());
    }

    #[test]
    fn over_budget_is_strict() {
        assert!(!budget(100.0, 100.0, 80.0).is_over_budget());
        assert!(budget(100.0, 100.5, 80.0).is_over_budget());
        assert_eq!(budget(100.0, 100.5, 80.0).remaining(), 0.0);
    }

    #[test]
    fn zero_amount_budget() {
        assert_eq!(budget(0.0, 0.0, 80.0).progress(), 0.0);
        assert_eq!(budget(0.0, 1.0, 80.0).progress(), 100.0);
    }
}
