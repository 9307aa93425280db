use anyhow::{Context, Result};
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::json;
use std::path::PathBuf;

use crate::db::Database;
use crate::models::*;
use crate::stats;
use crate::util::{format_amount, format_meso, truncate};

/// Every command answers with one JSON document on stdout.
fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(value).context("Failed to serialize response")?
    );
    Ok(())
}

fn current_month() -> String {
    chrono::Local::now().format("%Y-%m").to_string()
}

// ── Goal ──────────────────────────────────────────────────────

pub(super) fn goal(db: &Database) -> Result<()> {
    print_json(&db.get_goal()?.status()?)
}

pub(super) fn goal_set(
    db: &mut Database,
    goal_amount: Option<Decimal>,
    current_amount: Option<Decimal>,
) -> Result<()> {
    let goal = db.update_goal(GoalUpdate {
        goal_amount,
        current_amount,
    })?;
    print_json(&goal.status()?)
}

// ── Material farming ──────────────────────────────────────────

pub(super) fn material(db: &Database) -> Result<()> {
    print_json(&db.get_material_settings()?)
}

pub(super) fn material_set(
    db: &mut Database,
    meso_per_run: Option<Decimal>,
    sol_erda_count: Option<i64>,
    sol_erda_price: Option<Decimal>,
    material_run_count: Option<i64>,
) -> Result<()> {
    let settings = db.update_material_settings(MaterialUpdate {
        meso_per_run,
        sol_erda_count,
        sol_erda_price,
        material_run_count,
    })?;
    print_json(&settings)
}

pub(super) fn material_runs(db: &mut Database, delta: i64) -> Result<()> {
    print_json(&db.adjust_material_runs(delta)?)
}

// ── Records ───────────────────────────────────────────────────

pub(super) fn records(db: &Database, month: Option<&str>) -> Result<()> {
    print_json(&json!({ "records": db.get_records(month)? }))
}

pub(super) fn record_add(
    db: &mut Database,
    kind: &str,
    amount: Decimal,
    description: Option<String>,
    date: Option<String>,
) -> Result<()> {
    let kind = RecordType::parse(kind)
        .ok_or_else(|| anyhow::anyhow!("Unknown record type '{kind}' (use income or expense)"))?;
    let record = db.create_record(
        NewRecord::new(kind, amount)
            .with_description(description.unwrap_or_default())
            .with_date(date),
    )?;
    print_json(&record)
}

pub(super) fn record_rm(db: &mut Database, id: i64) -> Result<()> {
    db.delete_record(id)?;
    print_json(&json!({ "deleted": id }))
}

pub(super) fn quick_income(
    db: &mut Database,
    amount: Decimal,
    description: Option<&str>,
) -> Result<()> {
    print_json(&db.record_quick_income(amount, description)?)
}

// ── Contents ──────────────────────────────────────────────────

pub(super) fn contents(db: &Database) -> Result<()> {
    print_json(&json!({ "contents": db.get_contents()? }))
}

pub(super) fn content_add(
    db: &mut Database,
    name: String,
    cost: Decimal,
    category: Option<String>,
) -> Result<()> {
    let content = db.create_content(NewContent {
        category,
        ..NewContent::new(name, cost)
    })?;
    print_json(&content)
}

pub(super) fn content_rm(db: &mut Database, id: i64) -> Result<()> {
    db.delete_content(id)?;
    print_json(&json!({ "deleted": id }))
}

pub(super) fn spend(db: &mut Database, content_id: i64) -> Result<()> {
    let (record, content) = db.spend_content(content_id)?;
    print_json(&json!({ "record": record, "content": content }))
}

// ── Bosses ────────────────────────────────────────────────────

pub(super) fn bosses(db: &Database) -> Result<()> {
    print_json(&json!({ "bosses": db.get_bosses()? }))
}

pub(super) fn boss_add(db: &mut Database, name: &str, reward: Decimal) -> Result<()> {
    print_json(&db.create_boss(name, reward)?)
}

pub(super) fn boss_rm(db: &mut Database, id: i64) -> Result<()> {
    db.delete_boss(id)?;
    print_json(&json!({ "ok": true }))
}

pub(super) fn boss_order(db: &mut Database, ids: &[i64]) -> Result<()> {
    db.reorder_bosses(ids)?;
    print_json(&json!({ "ok": true }))
}

pub(super) fn boss_check(db: &mut Database, id: i64, reward: Option<Decimal>) -> Result<()> {
    let (boss, record) = db.check_boss(id, reward)?;
    print_json(&json!({ "boss": boss, "record": record }))
}

pub(super) fn boss_reset(db: &mut Database) -> Result<()> {
    print_json(&json!({ "bosses": db.reset_bosses()? }))
}

// ── Reporting ─────────────────────────────────────────────────

pub(super) fn summary(db: &Database, month: Option<String>) -> Result<()> {
    let month = month.unwrap_or_else(current_month);
    let snapshot = db.snapshot(Some(&month))?;
    let summary = stats::summarize(&snapshot)?;

    println!("mesoledger summary: {month}");
    println!("{}", "─".repeat(40));
    println!(
        "  Goal:       {} / {} ({}%)",
        format_amount(summary.goal.current_amount),
        format_amount(summary.goal.goal_amount),
        snapshot.goal.capped_ratio()?
    );
    println!(
        "  Income:     {} (records {}, material {})",
        format_meso(summary.total_income),
        format_meso(summary.record_income),
        format_meso(summary.material_income)
    );
    println!("  Expenses:   {}", format_meso(summary.total_expense));
    println!("  Net:        {}", format_amount(summary.net_profit));
    println!(
        "  Bosses:     {} / {}",
        summary.bosses.completed, summary.bosses.total
    );
    println!("  Runs:       {}", snapshot.material.material_run_count);

    let pending: Vec<String> = snapshot
        .bosses
        .iter()
        .filter(|b| !b.checked)
        .map(|b| b.to_string())
        .collect();
    if !pending.is_empty() {
        println!("  Pending:    {}", pending.join(", "));
    }

    if !snapshot.records.is_empty() {
        println!();
        println!("Records:");
        for r in &snapshot.records {
            println!(
                "  {} {:<8} {:>14}  {}",
                r.date,
                r.kind.as_str(),
                format_amount(r.amount),
                truncate(&r.description, 32)
            );
        }
    }

    Ok(())
}

pub(super) fn export(db: &Database, path: Option<PathBuf>, month: Option<String>) -> Result<()> {
    let output_path = path.unwrap_or_else(|| {
        let label = month.clone().unwrap_or_else(|| "all".into());
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
        PathBuf::from(home).join(format!("mesoledger-records-{label}.csv"))
    });

    let count = db
        .export_to_csv(&output_path, month.as_deref())
        .with_context(|| format!("Failed to export to {}", output_path.display()))?;
    if count == 0 {
        println!("No records to export");
    } else {
        println!("Exported {count} records to {}", output_path.display());
    }
    Ok(())
}
