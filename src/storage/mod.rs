use crate::error::ExpenseServiceError;
use crate::models::*;

/// State container the presentation layer injects into [`crate::ExpenseService`].
pub trait Storage {
    fn get_user(&self) -> Option<User>;
    fn set_user(&mut self, user: Option<User>);

    fn create_expense(&mut self, expense: Expense) -> Result<Expense, ExpenseServiceError>;
    fn update_expense(&mut self, expense: Expense) -> Result<Expense, ExpenseServiceError>;
    fn delete_expense(&mut self, expense_id: &str) -> Result<Expense, ExpenseServiceError>;
    fn get_expense(&self, expense_id: &str) -> Option<Expense>;
    fn list_expenses(&self) -> Vec<Expense>;

    fn create_group(&mut self, group: Group) -> Result<Group, ExpenseServiceError>;
    fn update_group(&mut self, group: Group) -> Result<Group, ExpenseServiceError>;
    fn delete_group(&mut self, group_id: &str) -> Result<Group, ExpenseServiceError>;
    fn get_group(&self, group_id: &str) -> Option<Group>;
    fn list_groups(&self) -> Vec<Group>;

    fn set_budgets(&mut self, budgets: Vec<Budget>);
    fn list_budgets(&self) -> Vec<Budget>;

    fn set_insights(&mut self, insights: Vec<FinancialInsight>);
    fn list_insights(&self) -> Vec<FinancialInsight>;
}

pub mod in_memory;
