//! Read-side aggregation over a snapshot of the ledger. Nothing here
//! touches the store; callers re-run it after every mutation.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::{LedgerError, Result};
use crate::models::{Boss, GoalBalance, GoalStatus, MaterialSettings, Record, RecordType};

/// Sheets read together in one transaction.
#[derive(Debug, Clone)]
pub(crate) struct Snapshot {
    /// Month the records were filtered to, if any.
    pub(crate) month: Option<String>,
    pub(crate) records: Vec<Record>,
    pub(crate) bosses: Vec<Boss>,
    pub(crate) material: MaterialSettings,
    pub(crate) goal: GoalBalance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub(crate) struct BossCompletion {
    pub(crate) completed: usize,
    pub(crate) total: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct Summary {
    pub(crate) month: Option<String>,
    pub(crate) record_income: Decimal,
    pub(crate) material_income: Decimal,
    pub(crate) total_income: Decimal,
    pub(crate) total_expense: Decimal,
    pub(crate) net_profit: Decimal,
    pub(crate) bosses: BossCompletion,
    pub(crate) goal: GoalStatus,
}

fn sum_of(records: &[Record], kind: RecordType) -> Result<Decimal> {
    records
        .iter()
        .filter(|r| r.kind == kind)
        .try_fold(Decimal::ZERO, |acc, r| acc.checked_add(r.amount))
        .ok_or_else(|| LedgerError::out_of_range(&format!("{} total", kind.as_str())))
}

pub(crate) fn record_income(records: &[Record]) -> Result<Decimal> {
    sum_of(records, RecordType::Income)
}

pub(crate) fn record_expense(records: &[Record]) -> Result<Decimal> {
    sum_of(records, RecordType::Expense)
}

pub(crate) fn material_projected_income(settings: &MaterialSettings) -> Result<Decimal> {
    settings.projected_income()
}

pub(crate) fn boss_completion(bosses: &[Boss]) -> BossCompletion {
    BossCompletion {
        completed: bosses.iter().filter(|b| b.checked).count(),
        total: bosses.len(),
    }
}

pub(crate) fn summarize(snapshot: &Snapshot) -> Result<Summary> {
    let record_income = record_income(&snapshot.records)?;
    let material_income = material_projected_income(&snapshot.material)?;
    let total_income = record_income
        .checked_add(material_income)
        .ok_or_else(|| LedgerError::out_of_range("total income"))?;
    let total_expense = record_expense(&snapshot.records)?;
    let net_profit = total_income
        .checked_sub(total_expense)
        .ok_or_else(|| LedgerError::out_of_range("net profit"))?;
    Ok(Summary {
        month: snapshot.month.clone(),
        record_income,
        material_income,
        total_income,
        total_expense,
        net_profit,
        bosses: boss_completion(&snapshot.bosses),
        goal: snapshot.goal.status()?,
    })
}

#[cfg(test)]
mod tests;
