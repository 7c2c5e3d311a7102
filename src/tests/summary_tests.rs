use super::expense;
use crate::models::{Expense, ExpenseCategory};
use crate::summary::{category_totals, expenses_between, group_by_date, total_spent};
use chrono::NaiveDate;

fn sample() -> Vec<Expense> {
    vec![
        expense("1", 4.5, ExpenseCategory::Food, "2024-01-15"),
        expense("2", 25.0, ExpenseCategory::Transport, "2024-01-14"),
        expense("3", 85.0, ExpenseCategory::Food, "2024-01-13"),
        expense("4", 15.5, ExpenseCategory::Entertainment, "2024-01-14"),
    ]
}

#[test]
fn test_category_totals_in_first_seen_order() {
    let totals = category_totals(&sample());

    let names: Vec<&str> = totals.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Food", "Transport", "Entertainment"]);
    assert_eq!(totals[0].value, 89.5);
    assert_eq!(totals[0].color.as_deref(), Some("#14b8a6"));
    assert!(category_totals(&[]).is_empty());
}

#[test]
fn test_group_by_date() {
    let groups = group_by_date(&sample());

    assert_eq!(groups.len(), 3);
    let jan14 = NaiveDate::from_ymd_opt(2024, 1, 14).unwrap();
    let ids: Vec<&str> = groups[&jan14].iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["2", "4"]);
    assert_eq!(
        groups.keys().next().copied(),
        NaiveDate::from_ymd_opt(2024, 1, 13)
    );
}

#[test]
fn test_totals_and_ranges() {
    let expenses = sample();
    assert_eq!(total_spent(&expenses), 130.0);

    let from = NaiveDate::from_ymd_opt(2024, 1, 14).unwrap();
    let to = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
    assert_eq!(expenses_between(&expenses, from, to).len(), 3);
}
