mod balance_tests;
mod config_tests;
mod summary_tests;

use crate::models::{Expense, ExpenseCategory, Member};
use chrono::NaiveDate;

pub fn member(id: &str) -> Member {
    Member::new(id, format!("Member {}", id), format!("{}@example.com", id))
}

pub fn expense(id: &str, amount: f64, category: ExpenseCategory, date: &str) -> Expense {
    Expense {
        id: id.to_string(),
        title: format!("Expense {}", id),
        amount,
        category,
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        description: None,
        tags: Vec::new(),
        receipt: None,
        user_id: "1".to_string(),
        group_id: None,
        split_type: None,
        participants: Vec::new(),
    }
}
