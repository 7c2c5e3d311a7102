pub mod audit;
pub mod budget;
pub mod expense;
pub mod group;
pub mod insight;
pub mod member;
pub mod participant;
pub mod user;

pub use audit::{AuditAction, AuditLogEntry};
pub use budget::{Budget, BudgetPeriod};
pub use expense::{Expense, ExpenseCategory, GroupExpense, ParticipantShare};
pub use group::Group;
pub use insight::{FinancialInsight, InsightKind, Priority};
pub use member::Member;
pub use participant::{Participant, SplitStrategy};
pub use user::{Theme, User, UserPreferences};
