use super::expense::{Expense, GroupExpense};
use super::member::Member;
use crate::balance::BalanceCalculator;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub members: Vec<Member>,
    pub expenses: Vec<Expense>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub color: String,
}

impl Group {
    pub fn member(&self, member_id: &str) -> Option<&Member> {
        self.members.iter().find(|m| m.id == member_id)
    }

    pub fn is_member(&self, member_id: &str) -> bool {
        self.member(member_id).is_some()
    }

    /// First member id that appears more than once, if any.
    pub fn duplicate_member_id(&self) -> Option<&str> {
        let mut seen = HashSet::new();
        self.members
            .iter()
            .map(|m| m.id.as_str())
            .find(|id| !seen.insert(*id))
    }

    pub fn group_expenses(&self) -> Vec<GroupExpense> {
        self.expenses
            .iter()
            .filter_map(Expense::as_group_expense)
            .collect()
    }

    pub fn total_spent(&self) -> f64 {
        self.expenses.iter().map(|e| e.amount).sum()
    }

    /// Recomputes every cached `Member::balance` from the expense history.
    pub fn refresh_balances(&mut self) {
        let balances = BalanceCalculator::compute_balances(&self.members, &self.group_expenses());
        for member in &mut self.members {
            member.balance = balances.get(&member.id).copied().unwrap_or(0.0);
        }
    }
}
