use crate::balance::BalanceCalculator;
use crate::constants::DEFAULT_GROUP_COLOR;
use crate::error::ExpenseServiceError;
use crate::logger::AuditLogger;
use crate::models::*;
use crate::split::SplitCalculator;
use crate::storage::Storage;
use crate::summary::{self, ChartData};
use chrono::{NaiveDate, Utc};
use log::{debug, info, warn};
use std::collections::{BTreeMap, HashMap};
use uuid::Uuid;

/// A shared expense to be split among group members.
///
/// `shares` pairs each member id with its strategy-specific input share
/// (ignored for equal splits, money for custom, percent for percentage).
#[derive(Clone, Debug)]
pub struct NewGroupExpense {
    pub title: String,
    pub category: ExpenseCategory,
    pub date: NaiveDate,
    pub payer_id: String,
    pub amount: f64,
    pub strategy: SplitStrategy,
    pub shares: Vec<(String, f64)>,
}

pub struct ExpenseService<'a> {
    pub storage: &'a mut dyn Storage,
    pub audit_logger: &'a mut dyn AuditLogger,
    calculator: SplitCalculator,
}

impl<'a> ExpenseService<'a> {
    pub fn new(storage: &'a mut dyn Storage, audit_logger: &'a mut dyn AuditLogger) -> Self {
        info!("Initializing ExpenseService");
        Self {
            storage,
            audit_logger,
            calculator: SplitCalculator::default(),
        }
    }

    pub fn with_calculator(mut self, calculator: SplitCalculator) -> Self {
        self.calculator = calculator;
        self
    }

    pub fn set_user(&mut self, user: Option<User>) {
        info!("Setting current user: {:?}", user.as_ref().map(|u| &u.id));
        let user_id = user.as_ref().map(|u| u.id.clone());
        self.storage.set_user(user);
        self.audit(AuditAction::SetUser, &serde_json::json!({ "user_id": user_id }));
    }

    // EXPENSES

    /// Stores a new expense. An empty id is replaced by a generated one.
    pub fn add_expense(&mut self, mut expense: Expense) -> Result<Expense, ExpenseServiceError> {
        info!("Adding expense '{}' for amount {}", expense.title, expense.amount);
        Self::check_amount(expense.amount)?;
        if expense.id.is_empty() {
            expense.id = Self::generate_id();
        }

        let created = self.storage.create_expense(expense)?;
        debug!("Expense created with ID: {}", created.id);

        self.audit(
            AuditAction::AddExpense,
            &serde_json::json!({ "expense_id": created.id, "amount": created.amount }),
        );
        Ok(created)
    }

    pub fn update_expense(&mut self, expense: Expense) -> Result<Expense, ExpenseServiceError> {
        info!("Updating expense {}", expense.id);
        Self::check_amount(expense.amount)?;

        let previous = self.storage.get_expense(&expense.id);
        let updated = self.storage.update_expense(expense)?;
        debug!("Expense updated: {:?}", updated);
        self.sync_group_copies(previous.as_ref(), Some(&updated))?;

        self.audit(
            AuditAction::UpdateExpense,
            &serde_json::json!({ "expense_id": updated.id, "amount": updated.amount }),
        );
        Ok(updated)
    }

    pub fn delete_expense(&mut self, expense_id: &str) -> Result<Expense, ExpenseServiceError> {
        info!("Deleting expense {}", expense_id);
        let deleted = self.storage.delete_expense(expense_id)?;
        self.sync_group_copies(Some(&deleted), None)?;

        self.audit(
            AuditAction::DeleteExpense,
            &serde_json::json!({ "expense_id": deleted.id }),
        );
        Ok(deleted)
    }

    // GROUPS

    pub fn create_group(
        &mut self,
        name: String,
        description: Option<String>,
        members: Vec<Member>,
    ) -> Result<Group, ExpenseServiceError> {
        info!("Creating group '{}' with {} members", name, members.len());
        let now = Utc::now();
        let group = Group {
            id: Self::generate_id(),
            name,
            description,
            members,
            expenses: Vec::new(),
            created_at: now,
            updated_at: now,
            color: DEFAULT_GROUP_COLOR.to_string(),
        };
        if let Some(dup) = group.duplicate_member_id() {
            warn!("Duplicate member {} in new group '{}'", dup, group.name);
            return Err(ExpenseServiceError::DuplicateMember(dup.to_string()));
        }

        let created = self.storage.create_group(group)?;
        debug!("Group created with ID: {}", created.id);

        self.audit(
            AuditAction::AddGroup,
            &serde_json::json!({ "group_id": created.id }),
        );
        Ok(created)
    }

    /// Replaces a group, recomputing its cached member balances.
    pub fn update_group(&mut self, mut group: Group) -> Result<Group, ExpenseServiceError> {
        info!("Updating group {}", group.id);
        if let Some(dup) = group.duplicate_member_id() {
            warn!("Duplicate member {} in group {}", dup, group.id);
            return Err(ExpenseServiceError::DuplicateMember(dup.to_string()));
        }
        group.refresh_balances();
        group.updated_at = Utc::now();

        let updated = self.storage.update_group(group)?;
        debug!("Group updated: {}", updated.id);

        self.audit(
            AuditAction::UpdateGroup,
            &serde_json::json!({ "group_id": updated.id }),
        );
        Ok(updated)
    }

    pub fn delete_group(&mut self, group_id: &str) -> Result<Group, ExpenseServiceError> {
        info!("Deleting group {}", group_id);
        let deleted = self.storage.delete_group(group_id)?;

        self.audit(
            AuditAction::DeleteGroup,
            &serde_json::json!({ "group_id": deleted.id }),
        );
        Ok(deleted)
    }

    /// Splits a bill among group members and records it both in the group and
    /// in the expense list. The payer's own share starts out settled.
    pub fn add_group_expense(
        &mut self,
        group_id: &str,
        request: NewGroupExpense,
    ) -> Result<Expense, ExpenseServiceError> {
        info!(
            "Adding {} expense of {} to group {} paid by {}",
            request.strategy, request.amount, group_id, request.payer_id
        );
        let mut group = self.find_group(group_id)?;

        if !group.is_member(&request.payer_id) {
            warn!("Payer {} not in group {}", request.payer_id, group_id);
            return Err(ExpenseServiceError::UnknownMember(request.payer_id));
        }
        if let Some((member_id, _)) = request.shares.iter().find(|(id, _)| !group.is_member(id)) {
            warn!("Member {} in splits not in group {}", member_id, group_id);
            return Err(ExpenseServiceError::UnknownMember(member_id.clone()));
        }

        let participants: Vec<Participant> = request
            .shares
            .iter()
            .map(|(member_id, share)| Participant::new(member_id.clone(), *share))
            .collect();
        let split = self
            .calculator
            .split(request.amount, &participants, request.strategy)?;

        let expense = Expense {
            id: Self::generate_id(),
            title: request.title,
            amount: request.amount,
            category: request.category,
            date: request.date,
            description: None,
            tags: Vec::new(),
            receipt: None,
            user_id: request.payer_id.clone(),
            group_id: Some(group.id.clone()),
            split_type: Some(request.strategy),
            participants: split
                .into_iter()
                .map(|p| ParticipantShare {
                    settled: p.name == request.payer_id,
                    member_id: p.name,
                    amount: p.share,
                })
                .collect(),
        };

        group.expenses.push(expense.clone());
        group.refresh_balances();
        group.updated_at = Utc::now();
        self.storage.update_group(group)?;
        let created = self.storage.create_expense(expense)?;
        debug!("Group expense created with ID: {}", created.id);

        self.audit(
            AuditAction::AddGroupExpense,
            &serde_json::json!({
                "group_id": group_id,
                "expense_id": created.id,
                "amount": created.amount,
            }),
        );
        Ok(created)
    }

    /// Marks one member's share of a group expense as paid. Balances are
    /// unaffected; the flag is informational.
    pub fn settle_share(
        &mut self,
        group_id: &str,
        expense_id: &str,
        member_id: &str,
    ) -> Result<Expense, ExpenseServiceError> {
        info!(
            "Settling share of {} in expense {} of group {}",
            member_id, expense_id, group_id
        );
        let mut group = self.find_group(group_id)?;
        let expense = group
            .expenses
            .iter_mut()
            .find(|e| e.id == expense_id)
            .ok_or_else(|| ExpenseServiceError::ExpenseNotFound(expense_id.to_string()))?;
        let share = expense
            .participants
            .iter_mut()
            .find(|p| p.member_id == member_id)
            .ok_or_else(|| ExpenseServiceError::UnknownMember(member_id.to_string()))?;
        share.settled = true;
        let settled = expense.clone();

        group.updated_at = Utc::now();
        self.storage.update_group(group)?;
        if self.storage.get_expense(expense_id).is_some() {
            self.storage.update_expense(settled.clone())?;
        }

        self.audit(
            AuditAction::SettleShare,
            &serde_json::json!({ "group_id": group_id, "expense_id": expense_id, "member_id": member_id }),
        );
        Ok(settled)
    }

    pub fn group_balances(&self, group_id: &str) -> Result<HashMap<String, f64>, ExpenseServiceError> {
        let group = self.find_group(group_id)?;
        Ok(BalanceCalculator::compute_balances(
            &group.members,
            &group.group_expenses(),
        ))
    }

    // SPLITTING

    pub fn split_bill(
        &self,
        total: f64,
        participants: &[Participant],
        strategy: SplitStrategy,
    ) -> Result<Vec<Participant>, ExpenseServiceError> {
        Ok(self.calculator.split(total, participants, strategy)?)
    }

    // BUDGETS & INSIGHTS

    pub fn set_budgets(&mut self, budgets: Vec<Budget>) {
        info!("Replacing budgets ({} entries)", budgets.len());
        let count = budgets.len();
        self.storage.set_budgets(budgets);
        self.audit(AuditAction::SetBudgets, &serde_json::json!({ "count": count }));
    }

    /// Budgets at or past their alert threshold.
    pub fn budget_alerts(&self) -> Vec<Budget> {
        let alerts: Vec<Budget> = self
            .storage
            .list_budgets()
            .into_iter()
            .filter(Budget::should_alert)
            .collect();
        debug!("{} budget(s) alerting", alerts.len());
        alerts
    }

    pub fn set_insights(&mut self, insights: Vec<FinancialInsight>) {
        info!("Replacing insights ({} entries)", insights.len());
        let count = insights.len();
        self.storage.set_insights(insights);
        self.audit(AuditAction::SetInsights, &serde_json::json!({ "count": count }));
    }

    /// Actionable insights, highest priority first. Equal priorities keep their stored order.
    pub fn actionable_insights(&self) -> Vec<FinancialInsight> {
        let mut insights: Vec<FinancialInsight> = self
            .storage
            .list_insights()
            .into_iter()
            .filter(|i| i.actionable)
            .collect();
        insights.sort_by(|a, b| b.priority.cmp(&a.priority));
        insights
    }

    // SUMMARIES

    pub fn spending_by_category(&self) -> Vec<ChartData> {
        summary::category_totals(&self.storage.list_expenses())
    }

    pub fn expenses_by_date(&self) -> BTreeMap<NaiveDate, Vec<Expense>> {
        summary::group_by_date(&self.storage.list_expenses())
    }

    pub fn total_spent(&self) -> f64 {
        summary::total_spent(&self.storage.list_expenses())
    }

    // UTILITIES

    /// Mirrors a change to a stored expense into the groups holding a copy of
    /// it and recomputes their member balances. `previous` is the stored
    /// version before the change, `current` the version after (`None` once deleted).
    fn sync_group_copies(
        &mut self,
        previous: Option<&Expense>,
        current: Option<&Expense>,
    ) -> Result<(), ExpenseServiceError> {
        let mut group_ids: Vec<&str> = Vec::new();
        for expense in previous.into_iter().chain(current) {
            if let Some(group_id) = expense.group_id.as_deref() {
                if !group_ids.contains(&group_id) {
                    group_ids.push(group_id);
                }
            }
        }

        for group_id in group_ids {
            let Some(mut group) = self.storage.get_group(group_id) else {
                warn!("Expense references missing group {}", group_id);
                continue;
            };
            let expense_id = previous.or(current).map(|e| e.id.as_str()).unwrap_or_default();
            let slot = group.expenses.iter().position(|e| e.id == expense_id);
            let keep = current.filter(|e| e.group_id.as_deref() == Some(group_id));
            match (slot, keep) {
                (Some(index), Some(expense)) => group.expenses[index] = expense.clone(),
                (None, Some(expense)) => group.expenses.push(expense.clone()),
                (Some(index), None) => {
                    group.expenses.remove(index);
                }
                (None, None) => continue,
            }

            group.refresh_balances();
            group.updated_at = Utc::now();
            self.storage.update_group(group)?;
            debug!("Synced expense {} into group {}", expense_id, group_id);
        }
        Ok(())
    }

    fn find_group(&self, group_id: &str) -> Result<Group, ExpenseServiceError> {
        self.storage.get_group(group_id).ok_or_else(|| {
            warn!("Group {} not found", group_id);
            ExpenseServiceError::GroupNotFound(group_id.to_string())
        })
    }

    fn check_amount(amount: f64) -> Result<(), ExpenseServiceError> {
        if !amount.is_finite() || amount <= 0.0 {
            warn!("Rejected expense amount {}", amount);
            return Err(ExpenseServiceError::InvalidAmount(amount));
        }
        Ok(())
    }

    fn audit(&mut self, action: AuditAction, payload: &serde_json::Value) {
        self.audit_logger
            .log(AuditLogEntry::new(action, payload, Utc::now()));
    }

    fn generate_id() -> String {
        let id = Uuid::new_v4().to_string();
        debug!("Generated id: {}", id);
        id
    }
}
