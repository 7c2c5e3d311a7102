use crate::models::{Expense, ExpenseCategory};
use chrono::NaiveDate;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One labelled value of an aggregated spending series.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ChartData {
    pub name: String,
    pub value: f64,
    pub color: Option<String>,
}

/// Total spent per category, in order of each category's first appearance.
pub fn category_totals(expenses: &[Expense]) -> Vec<ChartData> {
    let mut totals: Vec<(ExpenseCategory, f64)> = Vec::new();
    for expense in expenses {
        match totals.iter_mut().find(|(c, _)| *c == expense.category) {
            Some((_, total)) => *total += expense.amount,
            None => totals.push((expense.category, expense.amount)),
        }
    }
    debug!("Category totals over {} expenses: {:?}", expenses.len(), totals);

    totals
        .into_iter()
        .map(|(category, value)| ChartData {
            name: category.label().to_string(),
            value,
            color: Some(category.color().to_string()),
        })
        .collect()
}

/// Expenses bucketed by calendar day, oldest day first. Each bucket keeps the
/// input order.
pub fn group_by_date(expenses: &[Expense]) -> BTreeMap<NaiveDate, Vec<Expense>> {
    let mut groups: BTreeMap<NaiveDate, Vec<Expense>> = BTreeMap::new();
    for expense in expenses {
        groups.entry(expense.date).or_default().push(expense.clone());
    }
    groups
}

pub fn total_spent(expenses: &[Expense]) -> f64 {
    expenses.iter().map(|e| e.amount).sum()
}

/// Expenses dated within `[from, to]`, both ends inclusive.
pub fn expenses_between(expenses: &[Expense], from: NaiveDate, to: NaiveDate) -> Vec<Expense> {
    expenses
        .iter()
        .filter(|e| e.date >= from && e.date <= to)
        .cloned()
        .collect()
}
