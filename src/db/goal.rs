use rusqlite::{params, Connection};
use rust_decimal::Decimal;
use tracing::info;

use super::{decimal_at, Database};
use crate::error::{LedgerError, Result};
use crate::models::{GoalBalance, GoalUpdate};

pub(super) fn read(conn: &Connection) -> Result<GoalBalance> {
    Ok(conn.query_row(
        "SELECT goal_amount, current_amount FROM goal_balance WHERE id = 1",
        [],
        |row| {
            Ok(GoalBalance {
                goal_amount: decimal_at(row, 0)?,
                current_amount: decimal_at(row, 1)?,
            })
        },
    )?)
}

/// Every stored balance must still yield a ratio.
fn store(conn: &Connection, goal: &GoalBalance) -> Result<()> {
    goal.ratio_percent()?;
    conn.execute(
        "UPDATE goal_balance SET goal_amount = ?1, current_amount = ?2 WHERE id = 1",
        params![goal.goal_amount.to_string(), goal.current_amount.to_string()],
    )?;
    Ok(())
}

/// Shift the running balance by `delta`. The result is not clamped: a
/// slice of expenses may outweigh recorded income.
pub(super) fn adjust(conn: &Connection, delta: Decimal) -> Result<GoalBalance> {
    let mut goal = read(conn)?;
    goal.current_amount = goal
        .current_amount
        .checked_add(delta)
        .ok_or_else(|| LedgerError::out_of_range("goal balance"))?;
    store(conn, &goal)?;
    Ok(goal)
}

impl Database {
    pub(crate) fn get_goal(&self) -> Result<GoalBalance> {
        self.read(read)
    }

    /// Manual override of the goal and/or the running balance.
    pub(crate) fn update_goal(&mut self, update: GoalUpdate) -> Result<GoalBalance> {
        if update.goal_amount.is_some_and(|g| g < Decimal::ZERO) {
            return Err(LedgerError::validation("goal_amount must be zero or greater"));
        }
        let goal = self.write(|tx| {
            let mut goal = read(tx)?;
            if let Some(g) = update.goal_amount {
                goal.goal_amount = g;
            }
            if let Some(c) = update.current_amount {
                goal.current_amount = c;
            }
            store(tx, &goal)?;
            Ok(goal)
        })?;
        info!(
            goal = %goal.goal_amount,
            current = %goal.current_amount,
            "goal balance overridden"
        );
        Ok(goal)
    }
}
