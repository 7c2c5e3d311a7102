pub mod balance;
pub mod config;
pub mod constants;
pub mod error;
pub mod logger;
pub mod models;
pub mod service;
pub mod split;
pub mod storage;
pub mod summary;

pub use balance::BalanceCalculator;
pub use error::{ExpenseServiceError, ValidationError};
pub use logger::in_memory::InMemoryAuditLogger;
pub use service::{ExpenseService, NewGroupExpense};
pub use split::{RemainderPolicy, SplitCalculator};
pub use storage::in_memory::InMemoryStorage;

#[cfg(test)]
mod tests; // Include integration tests
