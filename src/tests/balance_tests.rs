use super::{expense, member};
use crate::BalanceCalculator;
use crate::models::{ExpenseCategory, Group, GroupExpense, ParticipantShare};
use chrono::Utc;

fn share(member_id: &str, amount: f64) -> ParticipantShare {
    ParticipantShare::new(member_id, amount)
}

#[test]
fn test_single_expense_balances() {
    let _ = env_logger::try_init();
    let members = vec![member("1"), member("2"), member("3")];
    let expenses = vec![GroupExpense::new(
        "1",
        30.0,
        vec![share("2", 10.0), share("3", 10.0), share("1", 10.0)],
    )];

    let balances = BalanceCalculator::compute_balances(&members, &expenses);

    assert_eq!(balances.len(), 3);
    assert_eq!(balances["1"], 20.0);
    assert_eq!(balances["2"], -10.0);
    assert_eq!(balances["3"], -10.0);
}

#[test]
fn test_members_without_expenses_get_zero() {
    let members = vec![member("1"), member("2"), member("idle")];
    let expenses = vec![GroupExpense::new("1", 50.0, vec![share("1", 25.0), share("2", 25.0)])];

    let balances = BalanceCalculator::compute_balances(&members, &expenses);

    assert_eq!(balances["idle"], 0.0);
    assert_eq!(BalanceCalculator::compute_balances(&members, &[]).values().sum::<f64>(), 0.0);
}

#[test]
fn test_well_formed_expenses_are_zero_sum() {
    let _ = env_logger::try_init();
    let members = vec![member("1"), member("2"), member("3"), member("4")];
    let expenses = vec![
        GroupExpense::new(
            "1",
            85.0,
            vec![share("1", 21.25), share("2", 21.25), share("3", 21.25), share("4", 21.25)],
        ),
        GroupExpense::new("2", 120.0, vec![share("1", 60.0), share("3", 60.0)]),
        GroupExpense::new("4", 33.0, vec![share("2", 11.0), share("3", 11.0), share("4", 11.0)]),
    ];

    let balances = BalanceCalculator::compute_balances(&members, &expenses);

    assert!(BalanceCalculator::net_total(&balances).abs() < 1e-9);
    assert_eq!(balances["1"], 85.0 - 21.25 - 60.0);
    assert_eq!(balances["2"], -21.25 + 120.0 - 11.0);
    assert_eq!(balances["3"], -21.25 - 60.0 - 11.0);
    assert_eq!(balances["4"], -21.25 + 33.0 - 11.0);
}

#[test]
fn test_unknown_member_ids_are_ignored() {
    let _ = env_logger::try_init();
    let members = vec![member("1"), member("2")];
    let expenses = vec![
        GroupExpense::new("1", 30.0, vec![share("1", 10.0), share("2", 10.0), share("ghost", 10.0)]),
        GroupExpense::new("ghost", 40.0, vec![share("1", 20.0), share("2", 20.0)]),
    ];

    let balances = BalanceCalculator::compute_balances(&members, &expenses);

    assert_eq!(balances.len(), 2);
    assert!(!balances.contains_key("ghost"));
    assert_eq!(balances["1"], 30.0 - 10.0 - 20.0);
    assert_eq!(balances["2"], -10.0 - 20.0);
}

#[test]
fn test_mismatched_expense_is_tolerated() {
    let members = vec![member("1"), member("2")];
    // Shares add up to 40, not 50.
    let expenses = vec![GroupExpense::new("1", 50.0, vec![share("1", 20.0), share("2", 20.0)])];

    let balances = BalanceCalculator::compute_balances(&members, &expenses);

    assert_eq!(balances["1"], 30.0);
    assert_eq!(balances["2"], -20.0);
    assert_eq!(BalanceCalculator::net_total(&balances), 10.0);
}

#[test]
fn test_settled_flag_does_not_change_balance() {
    let members = vec![member("1"), member("2")];
    let mut settled = share("2", 15.0);
    settled.settled = true;
    let open = vec![GroupExpense::new("1", 30.0, vec![share("1", 15.0), share("2", 15.0)])];
    let closed = vec![GroupExpense::new("1", 30.0, vec![share("1", 15.0), settled])];

    assert_eq!(
        BalanceCalculator::compute_balances(&members, &open),
        BalanceCalculator::compute_balances(&members, &closed)
    );
    assert!(!open[0].is_fully_settled());
}

#[test]
fn test_group_refresh_balances_uses_shared_expenses_only() {
    let _ = env_logger::try_init();
    let mut dinner = expense("3", 85.0, ExpenseCategory::Food, "2024-01-13");
    dinner.participants = vec![share("1", 21.25), share("2", 21.25), share("3", 21.25), share("4", 21.25)];
    let coffee = expense("1", 4.5, ExpenseCategory::Food, "2024-01-15");
    let now = Utc::now();
    let mut group = Group {
        id: "group1".to_string(),
        name: "Team".to_string(),
        description: None,
        members: vec![member("1"), member("2"), member("3"), member("4")],
        expenses: vec![dinner, coffee],
        created_at: now,
        updated_at: now,
        color: "#14b8a6".to_string(),
    };

    group.refresh_balances();

    assert_eq!(group.total_spent(), 89.5);
    assert_eq!(group.member("1").unwrap().balance, 63.75);
    assert!(group.member("1").unwrap().is_creditor());
    for id in ["2", "3", "4"] {
        assert_eq!(group.member(id).unwrap().balance, -21.25);
        assert!(group.member(id).unwrap().is_debtor());
    }
}
