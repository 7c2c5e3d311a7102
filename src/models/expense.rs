use super::participant::SplitStrategy;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseCategory {
    Food,
    Transport,
    Entertainment,
    Bills,
    Shopping,
    Health,
    Travel,
    Education,
    Other,
}

impl ExpenseCategory {
    pub const ALL: [ExpenseCategory; 9] = [
        ExpenseCategory::Food,
        ExpenseCategory::Transport,
        ExpenseCategory::Entertainment,
        ExpenseCategory::Bills,
        ExpenseCategory::Shopping,
        ExpenseCategory::Health,
        ExpenseCategory::Travel,
        ExpenseCategory::Education,
        ExpenseCategory::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ExpenseCategory::Food => "Food",
            ExpenseCategory::Transport => "Transport",
            ExpenseCategory::Entertainment => "Entertainment",
            ExpenseCategory::Bills => "Bills",
            ExpenseCategory::Shopping => "Shopping",
            ExpenseCategory::Health => "Health",
            ExpenseCategory::Travel => "Travel",
            ExpenseCategory::Education => "Education",
            ExpenseCategory::Other => "Other",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            ExpenseCategory::Food => "#14b8a6",
            ExpenseCategory::Transport => "#3b82f6",
            ExpenseCategory::Entertainment => "#a855f7",
            ExpenseCategory::Bills => "#f59e0b",
            ExpenseCategory::Shopping => "#ec4899",
            ExpenseCategory::Health => "#10b981",
            ExpenseCategory::Travel => "#06b6d4",
            ExpenseCategory::Education => "#8b5cf6",
            ExpenseCategory::Other => "#6b7280",
        }
    }
}

impl std::fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One member's owed portion of a shared expense.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantShare {
    pub member_id: String,
    pub amount: f64,
    pub settled: bool,
}

impl ParticipantShare {
    pub fn new(member_id: impl Into<String>, amount: f64) -> Self {
        Self {
            member_id: member_id.into(),
            amount,
            settled: false,
        }
    }
}

/// The subset of an expense the balance calculation needs.
///
/// `participants[].amount` is expected to sum to `amount`, but nothing here
/// enforces it.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GroupExpense {
    pub payer_id: String,
    pub amount: f64,
    pub participants: Vec<ParticipantShare>,
}

impl GroupExpense {
    pub fn new(payer_id: impl Into<String>, amount: f64, participants: Vec<ParticipantShare>) -> Self {
        Self {
            payer_id: payer_id.into(),
            amount,
            participants,
        }
    }

    pub fn is_fully_settled(&self) -> bool {
        self.participants.iter().all(|p| p.settled)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    pub title: String,
    pub amount: f64,
    pub category: ExpenseCategory,
    pub date: NaiveDate,
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub receipt: Option<String>,
    /// The user who paid
    pub user_id: String,
    pub group_id: Option<String>,
    pub split_type: Option<SplitStrategy>,
    #[serde(default)]
    pub participants: Vec<ParticipantShare>,
}

impl Expense {
    pub fn is_shared(&self) -> bool {
        !self.participants.is_empty()
    }

    /// Balance view of this expense, with the paying user as payer.
    /// Personal expenses (no participants) have no balance effect.
    pub fn as_group_expense(&self) -> Option<GroupExpense> {
        if !self.is_shared() {
            return None;
        }
        Some(GroupExpense {
            payer_id: self.user_id.clone(),
            amount: self.amount,
            participants: self.participants.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_category_has_distinct_label_and_color() {
        let labels: HashSet<&str> = ExpenseCategory::ALL.iter().map(|c| c.label()).collect();
        let colors: HashSet<&str> = ExpenseCategory::ALL.iter().map(|c| c.color()).collect();

        assert_eq!(labels.len(), ExpenseCategory::ALL.len());
        assert_eq!(colors.len(), ExpenseCategory::ALL.len());
        assert_eq!(ExpenseCategory::Bills.color(), "#f59e0b");
        assert_eq!(ExpenseCategory::Other.to_string(), "Other");
    }
}
