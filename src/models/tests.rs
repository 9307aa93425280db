#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;
use crate::error::LedgerError;

// ── RecordType ────────────────────────────────────────────────

#[test]
fn test_record_type_parse() {
    assert_eq!(RecordType::parse("income"), Some(RecordType::Income));
    assert_eq!(RecordType::parse("INCOME"), Some(RecordType::Income));
    assert_eq!(RecordType::parse(" expense "), Some(RecordType::Expense));
    assert_eq!(RecordType::parse("refund"), None);
    assert_eq!(RecordType::parse(""), None);
}

#[test]
fn test_record_type_roundtrip() {
    for t in [RecordType::Income, RecordType::Expense] {
        assert_eq!(RecordType::parse(t.as_str()), Some(t));
    }
}

#[test]
fn test_goal_delta_sign() {
    assert_eq!(RecordType::Income.goal_delta(dec!(1500)), dec!(1500));
    assert_eq!(RecordType::Expense.goal_delta(dec!(1500)), dec!(-1500));
    assert_eq!(RecordType::Expense.goal_delta(Decimal::ZERO), Decimal::ZERO);
}

// ── Origin ────────────────────────────────────────────────────

#[test]
fn test_origin_parts_roundtrip() {
    let all = [
        Origin::Manual,
        Origin::QuickIncome,
        Origin::Content { content_id: 4 },
        Origin::Boss { boss_id: 9 },
    ];
    for origin in all {
        let back = Origin::from_parts(origin.as_str(), origin.ref_id());
        assert_eq!(back, Some(origin), "Roundtrip failed for {}", origin.as_str());
    }
}

#[test]
fn test_origin_requires_ref_for_backlinks() {
    assert_eq!(Origin::from_parts("boss", None), None);
    assert_eq!(Origin::from_parts("content", None), None);
    assert_eq!(Origin::from_parts("ahmae", Some(1)), None);
}

#[test]
fn test_record_serializes_type_and_source() {
    let record = Record {
        id: 3,
        kind: RecordType::Income,
        amount: dec!(2000000),
        description: "[보스] 자쿰".into(),
        date: "2024-03-02".into(),
        created_at: "2024-03-02T10:00:00+00:00".into(),
        origin: Origin::Boss { boss_id: 1 },
    };
    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["type"], "income");
    assert_eq!(json["source"], "boss");
    assert_eq!(json["boss_id"], 1);
    assert_eq!(json["amount"], "2000000");
}

#[test]
fn test_new_record_defaults() {
    let new = NewRecord::new(RecordType::Expense, dec!(10));
    assert_eq!(new.origin, Origin::Manual);
    assert!(new.description.is_empty());
    assert!(new.date.is_none());
}

// ── Validation helpers ────────────────────────────────────────

#[test]
fn test_ensure_non_negative() {
    assert!(ensure_non_negative("amount", dec!(0)).is_ok());
    assert!(ensure_non_negative("amount", dec!(12.5)).is_ok());
    let err = ensure_non_negative("amount", dec!(-1)).unwrap_err();
    assert!(matches!(err, LedgerError::Validation(_)));
}

#[test]
fn test_normalize_date() {
    assert_eq!(normalize_date("2024-03-05").unwrap(), "2024-03-05");
    assert_eq!(normalize_date(" 2024-3-5 ").unwrap(), "2024-03-05");
    assert!(normalize_date("2024-02-30").is_err());
    assert!(normalize_date("03/05/2024").is_err());
}

#[test]
fn test_normalize_month() {
    assert_eq!(normalize_month("2024-03").unwrap(), "2024-03");
    assert_eq!(normalize_month("2024-3").unwrap(), "2024-03");
    assert!(normalize_month("2024-13").is_err());
    assert!(normalize_month("March").is_err());
}

// ── GoalBalance ───────────────────────────────────────────────

#[test]
fn test_ratio_zero_goal() {
    let goal = GoalBalance {
        goal_amount: Decimal::ZERO,
        current_amount: dec!(5000),
    };
    assert_eq!(goal.ratio_percent().unwrap(), Decimal::ZERO);
}

#[test]
fn test_ratio_one_decimal_place() {
    let goal = GoalBalance {
        goal_amount: dec!(3),
        current_amount: dec!(1),
    };
    assert_eq!(goal.ratio_percent().unwrap(), dec!(33.3));

    let goal = GoalBalance {
        goal_amount: dec!(10000000),
        current_amount: dec!(2000000),
    };
    assert_eq!(goal.ratio_percent().unwrap(), dec!(20));
}

#[test]
fn test_ratio_rounds_half_up() {
    // 0.0125 of the goal is 1.25% -> 1.3
    let goal = GoalBalance {
        goal_amount: dec!(10000),
        current_amount: dec!(125),
    };
    assert_eq!(goal.ratio_percent().unwrap(), dec!(1.3));
}

#[test]
fn test_ratio_can_exceed_and_go_negative() {
    let goal = GoalBalance {
        goal_amount: dec!(100),
        current_amount: dec!(250),
    };
    assert_eq!(goal.ratio_percent().unwrap(), dec!(250));
    assert_eq!(goal.capped_ratio().unwrap(), dec!(100));

    let goal = GoalBalance {
        goal_amount: dec!(100),
        current_amount: dec!(-40),
    };
    assert_eq!(goal.ratio_percent().unwrap(), dec!(-40));
}

#[test]
fn test_ratio_out_of_range() {
    let goal = GoalBalance {
        goal_amount: dec!(1),
        current_amount: Decimal::MAX / dec!(100),
    };
    assert!(matches!(goal.ratio_percent(), Err(LedgerError::Validation(_))));
    assert!(goal.status().is_err());
    assert!(goal.capped_ratio().is_err());
}

#[test]
fn test_goal_status_carries_ratio() {
    let goal = GoalBalance {
        goal_amount: dec!(200),
        current_amount: dec!(50),
    };
    let status = goal.status().unwrap();
    assert_eq!(status.goal_amount, dec!(200));
    assert_eq!(status.current_amount, dec!(50));
    assert_eq!(status.ratio_percent, dec!(25));
}

// ── Content / Boss ────────────────────────────────────────────

#[test]
fn test_content_spend_description() {
    let content = Content {
        id: 1,
        name: "주간보스".into(),
        cost: dec!(500000),
        category: None,
    };
    assert_eq!(content.spend_description(), "[메포] 주간보스");
}

#[test]
fn test_boss_new_unchecked() {
    let boss = Boss::new(1, "자쿰".into(), dec!(2000000));
    assert!(!boss.checked);
    assert!(boss.checked_at.is_none());
    assert_eq!(boss.check_description(), "[보스] 자쿰");
    assert_eq!(format!("{boss}"), "자쿰");
}

// ── MaterialSettings ──────────────────────────────────────────

#[test]
fn test_material_projected_income() {
    let settings = MaterialSettings {
        meso_per_run: dec!(500000),
        sol_erda_count: 10,
        sol_erda_price: dec!(50000),
        material_run_count: 3,
    };
    assert_eq!(settings.projected_income().unwrap(), dec!(3000000));
}

#[test]
fn test_material_projected_income_no_runs() {
    let settings = MaterialSettings {
        meso_per_run: dec!(500000),
        sol_erda_count: 10,
        sol_erda_price: dec!(50000),
        material_run_count: 0,
    };
    assert_eq!(settings.projected_income().unwrap(), Decimal::ZERO);
}

#[test]
fn test_material_projected_income_out_of_range() {
    let settings = MaterialSettings {
        meso_per_run: dec!(100000000000000000000),
        sol_erda_count: 0,
        sol_erda_price: Decimal::ZERO,
        material_run_count: 10_000_000_000,
    };
    assert!(matches!(
        settings.projected_income(),
        Err(LedgerError::Validation(_))
    ));

    let settings = MaterialSettings {
        meso_per_run: Decimal::ZERO,
        sol_erda_count: i64::MAX,
        sol_erda_price: Decimal::MAX,
        material_run_count: 1,
    };
    assert!(settings.projected_income().is_err());
}

#[test]
fn test_material_apply_partial() {
    let mut settings = MaterialSettings {
        meso_per_run: dec!(100),
        sol_erda_count: 2,
        sol_erda_price: dec!(30),
        material_run_count: 4,
    };
    settings.apply(&MaterialUpdate {
        sol_erda_price: Some(dec!(45)),
        ..Default::default()
    });
    assert_eq!(settings.meso_per_run, dec!(100));
    assert_eq!(settings.sol_erda_count, 2);
    assert_eq!(settings.sol_erda_price, dec!(45));
    assert_eq!(settings.material_run_count, 4);
}
