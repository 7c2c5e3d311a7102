use serde::{Deserialize, Serialize};

/// How a bill total is divided among participants.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")] // "equal" / "custom" / "percentage"
pub enum SplitStrategy {
    Equal,
    /// Each participant's share is the exact amount they owe
    Custom,
    /// Each participant's share is a percentage (0-100) of the total
    Percentage,
}

impl std::fmt::Display for SplitStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SplitStrategy::Equal => "equal",
            SplitStrategy::Custom => "custom",
            SplitStrategy::Percentage => "percentage",
        };
        write!(f, "{}", s)
    }
}

/// One person in a bill split. On input `share` is interpreted according to the
/// strategy; on output it always holds money.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Participant {
    pub name: String,
    pub share: f64,
}

impl Participant {
    pub fn new(name: impl Into<String>, share: f64) -> Self {
        Self {
            name: name.into(),
            share,
        }
    }

    /// Participant for an equal split, where the input share is ignored.
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(name, 0.0)
    }
}
