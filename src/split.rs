use crate::constants::{MAX_EXACT_CENTS, MIN_PARTICIPANTS, PERCENTAGE_TOLERANCE};
use crate::error::ValidationError;
use crate::models::{Participant, SplitStrategy};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// What an equal split does with the cents lost to rounding.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RemainderPolicy {
    /// Every participant gets `round(total / n, 2)`; the shares may not add up
    /// to the total (100 / 3 gives 33.33 x 3 = 99.99).
    #[default]
    Drop,
    /// Leftover cents go one each to the first participants, so the shares
    /// add up to the total exactly. Totals too large to count in whole cents
    /// fall back to `Drop`.
    DistributeToFirst,
}

impl FromStr for RemainderPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "drop" => Ok(RemainderPolicy::Drop),
            "distribute" | "distribute_to_first" => Ok(RemainderPolicy::DistributeToFirst),
            other => Err(format!("unknown remainder policy: {}", other)),
        }
    }
}

/// Rounds a money amount to two decimal places.
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Divides a bill total among participants. Stateless apart from the
/// rounding policy chosen at construction.
#[derive(Clone, Copy, Debug, Default)]
pub struct SplitCalculator {
    remainder: RemainderPolicy,
}

impl SplitCalculator {
    pub fn new(remainder: RemainderPolicy) -> Self {
        Self { remainder }
    }

    pub fn from_config(config: &crate::config::Config) -> Self {
        Self::new(config.equal_split_remainder)
    }

    pub fn remainder_policy(&self) -> RemainderPolicy {
        self.remainder
    }

    /// Computes each participant's monetary share of `total`.
    ///
    /// On success the result has one entry per input participant, in input
    /// order, with shares rounded to cents. On failure nothing is produced.
    pub fn split(
        &self,
        total: f64,
        participants: &[Participant],
        strategy: SplitStrategy,
    ) -> Result<Vec<Participant>, ValidationError> {
        debug!(
            "Splitting {} among {} participants ({})",
            total,
            participants.len(),
            strategy
        );
        Self::validate(total, participants, strategy)?;

        let result = match strategy {
            SplitStrategy::Equal => self.split_equal(total, participants),
            SplitStrategy::Custom => Self::split_custom(total, participants)?,
            SplitStrategy::Percentage => Self::split_percentage(total, participants)?,
        };

        debug!("Split result: {:?}", result);
        Ok(result)
    }

    fn validate(
        total: f64,
        participants: &[Participant],
        strategy: SplitStrategy,
    ) -> Result<(), ValidationError> {
        if !total.is_finite() || total <= 0.0 {
            warn!("Rejected split with invalid total {}", total);
            return Err(ValidationError::InvalidTotal);
        }
        if participants.len() < MIN_PARTICIPANTS {
            warn!("Rejected split with {} participant(s)", participants.len());
            return Err(ValidationError::InsufficientParticipants);
        }
        if let Some(index) = participants.iter().position(|p| p.name.trim().is_empty()) {
            warn!("Participant #{} has an empty name", index + 1);
            return Err(ValidationError::EmptyParticipantName { index });
        }

        let share_ok = |share: f64| match strategy {
            SplitStrategy::Equal => true,
            // Custom amounts are taken as typed; only the sum check can reject them.
            SplitStrategy::Custom => share.is_finite(),
            SplitStrategy::Percentage => share.is_finite() && (0.0..=100.0).contains(&share),
        };
        if let Some(p) = participants.iter().find(|p| !share_ok(p.share)) {
            warn!("Participant {} has invalid {} share {}", p.name, strategy, p.share);
            return Err(ValidationError::InvalidShare {
                name: p.name.clone(),
                share: p.share,
            });
        }
        Ok(())
    }

    fn split_equal(&self, total: f64, participants: &[Participant]) -> Vec<Participant> {
        let count = participants.len();
        match self.remainder {
            RemainderPolicy::Drop => {
                let share = round_to_cents(total / count as f64);
                participants
                    .iter()
                    .map(|p| Participant::new(p.name.clone(), share))
                    .collect()
            }
            RemainderPolicy::DistributeToFirst if total * 100.0 > MAX_EXACT_CENTS => {
                warn!(
                    "Total {} is too large to split in whole cents, leaving remainder undistributed",
                    total
                );
                Self::new(RemainderPolicy::Drop).split_equal(total, participants)
            }
            RemainderPolicy::DistributeToFirst => {
                let total_cents = (total * 100.0).round() as i64;
                let base = total_cents / count as i64;
                let leftover = (total_cents % count as i64) as usize;
                participants
                    .iter()
                    .enumerate()
                    .map(|(i, p)| {
                        let cents = if i < leftover { base + 1 } else { base };
                        Participant::new(p.name.clone(), cents as f64 / 100.0)
                    })
                    .collect()
            }
        }
    }

    fn split_custom(total: f64, participants: &[Participant]) -> Result<Vec<Participant>, ValidationError> {
        let sum: f64 = participants.iter().map(|p| p.share).sum();
        // Exact comparison: custom amounts have to reconcile to the cent as typed.
        if sum != total {
            warn!("Custom shares sum {} does not match total {}", sum, total);
            return Err(ValidationError::SharesMismatch {
                expected: total,
                actual: sum,
            });
        }
        Ok(participants
            .iter()
            .map(|p| Participant::new(p.name.clone(), round_to_cents(p.share)))
            .collect())
    }

    fn split_percentage(
        total: f64,
        participants: &[Participant],
    ) -> Result<Vec<Participant>, ValidationError> {
        let split: Vec<Participant> = participants
            .iter()
            .map(|p| Participant::new(p.name.clone(), round_to_cents(total * (p.share / 100.0))))
            .collect();

        let sum: f64 = split.iter().map(|p| p.share).sum();
        if (sum - total).abs() > PERCENTAGE_TOLERANCE {
            warn!("Percentage shares sum {} does not match total {}", sum, total);
            return Err(ValidationError::PercentagesMismatch {
                expected: total,
                actual: sum,
            });
        }
        Ok(split)
    }
}
