use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Member {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar: Option<String>,
    /// Cached net position, recomputed from the group's expenses.
    /// Positive: the group owes this member. Negative: this member owes the group.
    pub balance: f64,
}

impl Member {
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            avatar: None,
            balance: 0.0,
        }
    }

    pub fn is_creditor(&self) -> bool {
        self.balance > 0.0
    }

    pub fn is_debtor(&self) -> bool {
        self.balance < 0.0
    }
}
