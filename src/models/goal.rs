use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::{LedgerError, Result};

/// The savings target and the running balance toward it. Exactly one row
/// exists per store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GoalBalance {
    pub goal_amount: Decimal,
    pub current_amount: Decimal,
}

impl GoalBalance {
    /// Progress toward the goal in percent, rounded to one decimal place.
    /// Zero when no goal is set.
    pub fn ratio_percent(&self) -> Result<Decimal> {
        if self.goal_amount <= Decimal::ZERO {
            return Ok(Decimal::ZERO);
        }
        let rounded = self
            .current_amount
            .checked_mul(Decimal::ONE_THOUSAND)
            .and_then(|per_mille| per_mille.checked_div(self.goal_amount))
            .and_then(|per_mille| per_mille.checked_add(Decimal::new(5, 1)))
            .ok_or_else(|| LedgerError::out_of_range("goal ratio"))?
            .floor();
        Ok((rounded / Decimal::TEN).normalize())
    }

    /// Ratio clamped to 100 for progress displays.
    pub fn capped_ratio(&self) -> Result<Decimal> {
        Ok(self.ratio_percent()?.min(Decimal::ONE_HUNDRED))
    }

    pub fn status(&self) -> Result<GoalStatus> {
        Ok(GoalStatus {
            goal_amount: self.goal_amount,
            current_amount: self.current_amount,
            ratio_percent: self.ratio_percent()?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GoalStatus {
    pub goal_amount: Decimal,
    pub current_amount: Decimal,
    pub ratio_percent: Decimal,
}

/// Partial override; `None` fields keep their stored value.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoalUpdate {
    pub goal_amount: Option<Decimal>,
    pub current_amount: Option<Decimal>,
}
