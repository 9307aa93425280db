#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;
use crate::models::Origin;

fn make_record(id: i64, kind: RecordType, amount: Decimal) -> Record {
    Record {
        id,
        kind,
        amount,
        description: String::new(),
        date: "2024-03-10".into(),
        created_at: "2024-03-10T00:00:00+00:00".into(),
        origin: Origin::Manual,
    }
}

fn make_boss(id: i64, checked: bool) -> Boss {
    let mut boss = Boss::new(id, format!("boss-{id}"), dec!(1000));
    boss.checked = checked;
    boss
}

fn sample_material() -> MaterialSettings {
    MaterialSettings {
        meso_per_run: dec!(500000),
        sol_erda_count: 10,
        sol_erda_price: dec!(50000),
        material_run_count: 3,
    }
}

#[test]
fn test_income_and_expense_sums() {
    let records = vec![
        make_record(1, RecordType::Income, dec!(2000000)),
        make_record(2, RecordType::Expense, dec!(500000)),
        make_record(3, RecordType::Income, dec!(150000)),
        make_record(4, RecordType::Expense, dec!(25000)),
    ];
    assert_eq!(record_income(&records).unwrap(), dec!(2150000));
    assert_eq!(record_expense(&records).unwrap(), dec!(525000));
}

#[test]
fn test_empty_records_sum_to_zero() {
    assert_eq!(record_income(&[]).unwrap(), Decimal::ZERO);
    assert_eq!(record_expense(&[]).unwrap(), Decimal::ZERO);
}

#[test]
fn test_material_projected_income() {
    assert_eq!(material_projected_income(&sample_material()).unwrap(), dec!(3000000));
    assert_eq!(
        material_projected_income(&MaterialSettings::default()).unwrap(),
        Decimal::ZERO
    );
}

#[test]
fn test_boss_completion_counts_checked() {
    let bosses = vec![make_boss(1, true), make_boss(2, false), make_boss(3, true)];
    assert_eq!(
        boss_completion(&bosses),
        BossCompletion {
            completed: 2,
            total: 3
        }
    );
    assert_eq!(
        boss_completion(&[]),
        BossCompletion {
            completed: 0,
            total: 0
        }
    );
}

#[test]
fn test_summary_adds_material_income_to_total() {
    let snapshot = Snapshot {
        month: Some("2024-03".into()),
        records: vec![
            make_record(1, RecordType::Income, dec!(2000000)),
            make_record(2, RecordType::Expense, dec!(500000)),
        ],
        bosses: vec![make_boss(1, true), make_boss(2, false)],
        material: sample_material(),
        goal: GoalBalance {
            goal_amount: dec!(10000000),
            current_amount: dec!(1500000),
        },
    };
    let summary = summarize(&snapshot).unwrap();
    assert_eq!(summary.month.as_deref(), Some("2024-03"));
    assert_eq!(summary.record_income, dec!(2000000));
    assert_eq!(summary.material_income, dec!(3000000));
    assert_eq!(summary.total_income, dec!(5000000));
    assert_eq!(summary.total_expense, dec!(500000));
    assert_eq!(summary.net_profit, dec!(4500000));
    assert_eq!(summary.bosses.completed, 1);
    assert_eq!(summary.bosses.total, 2);
    assert_eq!(summary.goal.ratio_percent, dec!(15));
}

#[test]
fn test_net_profit_can_be_negative() {
    let snapshot = Snapshot {
        month: None,
        records: vec![make_record(1, RecordType::Expense, dec!(700))],
        bosses: Vec::new(),
        material: MaterialSettings::default(),
        goal: GoalBalance::default(),
    };
    assert_eq!(summarize(&snapshot).unwrap().net_profit, dec!(-700));
}

#[test]
fn test_record_sums_out_of_range() {
    let records = vec![
        make_record(1, RecordType::Income, Decimal::MAX),
        make_record(2, RecordType::Income, dec!(1)),
    ];
    assert!(record_income(&records).is_err());
    assert_eq!(record_expense(&records).unwrap(), Decimal::ZERO);
}

#[test]
fn test_summary_out_of_range_is_an_error() {
    let snapshot = Snapshot {
        month: None,
        records: vec![make_record(1, RecordType::Income, Decimal::MAX)],
        bosses: Vec::new(),
        material: sample_material(),
        goal: GoalBalance::default(),
    };
    assert!(summarize(&snapshot).is_err());
}
