use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Serialize)]
pub enum ValidationError {
    /// Total is zero, negative or not a finite number
    #[error("Total amount must be a positive number")]
    InvalidTotal,

    /// Fewer than two participants supplied
    #[error("At least two participants are required")]
    InsufficientParticipants,

    /// Custom shares do not add up to the total
    #[error("Custom shares must add up to total amount: expected {expected}, got {actual}")]
    SharesMismatch { expected: f64, actual: f64 },

    /// Converted percentage shares miss the total by more than one cent
    #[error("Percentages must add up to 100%: expected {expected}, got {actual}")]
    PercentagesMismatch { expected: f64, actual: f64 },

    #[error("Participant #{} has no name", .index + 1)]
    EmptyParticipantName { index: usize },

    #[error("Invalid share {share} for participant {name}")]
    InvalidShare { name: String, share: f64 },
}

#[derive(Error, Debug, Serialize)]
pub enum ExpenseServiceError {
    /// Expense with given ID not found
    #[error("Expense {0} not found")]
    ExpenseNotFound(String),

    /// Group with given ID not found
    #[error("Group {0} not found")]
    GroupNotFound(String),

    #[error("Expense {0} already exists")]
    DuplicateExpense(String),

    #[error("Group {0} already exists")]
    DuplicateGroup(String),

    /// Member ids must be unique within a group
    #[error("Member {0} appears more than once in the group")]
    DuplicateMember(String),

    /// Referenced member is not part of the group
    #[error("Member {0} is not a group member")]
    UnknownMember(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(f64),

    /// Split amounts don't add up correctly
    #[error("Invalid split: {0}")]
    InvalidSplit(#[from] ValidationError),
}
