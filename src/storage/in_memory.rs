use crate::error::ExpenseServiceError;
use crate::models::*;
use crate::storage::Storage;
use log::debug;

/// Vec-backed store. Expenses and groups keep insertion order, like the list
/// views that render them.
#[derive(Default)]
pub struct InMemoryStorage {
    user: Option<User>,
    expenses: Vec<Expense>,
    groups: Vec<Group>,
    budgets: Vec<Budget>,
    insights: Vec<FinancialInsight>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with caller-supplied data.
    pub fn seeded(
        user: Option<User>,
        expenses: Vec<Expense>,
        groups: Vec<Group>,
        budgets: Vec<Budget>,
        insights: Vec<FinancialInsight>,
    ) -> Self {
        debug!(
            "Seeding storage with {} expenses, {} groups, {} budgets, {} insights",
            expenses.len(),
            groups.len(),
            budgets.len(),
            insights.len()
        );
        Self {
            user,
            expenses,
            groups,
            budgets,
            insights,
        }
    }
}

impl Storage for InMemoryStorage {
    fn get_user(&self) -> Option<User> {
        self.user.clone()
    }

    fn set_user(&mut self, user: Option<User>) {
        self.user = user;
    }

    fn create_expense(&mut self, expense: Expense) -> Result<Expense, ExpenseServiceError> {
        if self.expenses.iter().any(|e| e.id == expense.id) {
            return Err(ExpenseServiceError::DuplicateExpense(expense.id));
        }
        self.expenses.push(expense.clone());
        Ok(expense)
    }

    fn update_expense(&mut self, expense: Expense) -> Result<Expense, ExpenseServiceError> {
        let slot = self
            .expenses
            .iter_mut()
            .find(|e| e.id == expense.id)
            .ok_or_else(|| ExpenseServiceError::ExpenseNotFound(expense.id.clone()))?;
        *slot = expense.clone();
        Ok(expense)
    }

    fn delete_expense(&mut self, expense_id: &str) -> Result<Expense, ExpenseServiceError> {
        let index = self
            .expenses
            .iter()
            .position(|e| e.id == expense_id)
            .ok_or_else(|| ExpenseServiceError::ExpenseNotFound(expense_id.to_string()))?;
        Ok(self.expenses.remove(index))
    }

    fn get_expense(&self, expense_id: &str) -> Option<Expense> {
        self.expenses.iter().find(|e| e.id == expense_id).cloned()
    }

    fn list_expenses(&self) -> Vec<Expense> {
        self.expenses.clone()
    }

    fn create_group(&mut self, group: Group) -> Result<Group, ExpenseServiceError> {
        if self.groups.iter().any(|g| g.id == group.id) {
            return Err(ExpenseServiceError::DuplicateGroup(group.id));
        }
        self.groups.push(group.clone());
        Ok(group)
    }

    fn update_group(&mut self, group: Group) -> Result<Group, ExpenseServiceError> {
        let slot = self
            .groups
            .iter_mut()
            .find(|g| g.id == group.id)
            .ok_or_else(|| ExpenseServiceError::GroupNotFound(group.id.clone()))?;
        *slot = group.clone();
        Ok(group)
    }

    fn delete_group(&mut self, group_id: &str) -> Result<Group, ExpenseServiceError> {
        let index = self
            .groups
            .iter()
            .position(|g| g.id == group_id)
            .ok_or_else(|| ExpenseServiceError::GroupNotFound(group_id.to_string()))?;
        Ok(self.groups.remove(index))
    }

    fn get_group(&self, group_id: &str) -> Option<Group> {
        self.groups.iter().find(|g| g.id == group_id).cloned()
    }

    fn list_groups(&self) -> Vec<Group> {
        self.groups.clone()
    }

    fn set_budgets(&mut self, budgets: Vec<Budget>) {
        self.budgets = budgets;
    }

    fn list_budgets(&self) -> Vec<Budget> {
        self.budgets.clone()
    }

    fn set_insights(&mut self, insights: Vec<FinancialInsight>) {
        self.insights = insights;
    }

    fn list_insights(&self) -> Vec<FinancialInsight> {
        self.insights.clone()
    }
}
