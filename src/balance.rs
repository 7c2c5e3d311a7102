use crate::models::{GroupExpense, Member};
use log::{debug, warn};
use std::collections::HashMap;

/// Net per-member positions within a group.
///
/// Positive balance: the member is a net creditor (others owe them).
/// Negative balance: the member is a net debtor.
pub struct BalanceCalculator;

impl BalanceCalculator {
    /// Computes one balance per member id from the group's expenses.
    ///
    /// Every participant share is debited from that participant and every
    /// expense amount is credited to its payer. Ids that are not in `members`
    /// are skipped, so the result always has exactly the member ids as keys.
    /// The `settled` flag does not change balances. Never fails; malformed
    /// expenses (shares not adding up to the amount) just leave the result
    /// off zero-sum, which [`net_total`](Self::net_total) exposes.
    pub fn compute_balances(members: &[Member], expenses: &[GroupExpense]) -> HashMap<String, f64> {
        debug!(
            "Calculating balances for {} members over {} expenses",
            members.len(),
            expenses.len()
        );
        let mut balances: HashMap<String, f64> =
            members.iter().map(|m| (m.id.clone(), 0.0)).collect();

        for expense in expenses {
            for share in &expense.participants {
                match balances.get_mut(&share.member_id) {
                    Some(balance) => *balance -= share.amount,
                    None => warn!("Ignoring share for unknown member {}", share.member_id),
                }
            }
            match balances.get_mut(&expense.payer_id) {
                Some(balance) => *balance += expense.amount,
                None => warn!("Ignoring payment by unknown member {}", expense.payer_id),
            }
        }

        debug!("Balances calculated: {:?}", balances);
        balances
    }

    /// Sum of all balances. Zero (up to float noise) when every expense's
    /// shares add up to its amount and all ids are known.
    pub fn net_total(balances: &HashMap<String, f64>) -> f64 {
        balances.values().sum()
    }
}
