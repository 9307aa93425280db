use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::{LedgerError, Result};

/// Material-farming rates and run counter. Never written to the records
/// sheet; its projected income is added at aggregation time only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct MaterialSettings {
    pub meso_per_run: Decimal,
    pub sol_erda_count: i64,
    pub sol_erda_price: Decimal,
    pub material_run_count: i64,
}

impl MaterialSettings {
    /// `(meso_per_run + sol_erda_count * sol_erda_price) * material_run_count`
    pub fn projected_income(&self) -> Result<Decimal> {
        Decimal::from(self.sol_erda_count)
            .checked_mul(self.sol_erda_price)
            .and_then(|erda| erda.checked_add(self.meso_per_run))
            .and_then(|per_run| per_run.checked_mul(Decimal::from(self.material_run_count)))
            .ok_or_else(|| LedgerError::out_of_range("projected material income"))
    }

    pub fn apply(&mut self, update: &MaterialUpdate) {
        if let Some(v) = update.meso_per_run {
            self.meso_per_run = v;
        }
        if let Some(v) = update.sol_erda_count {
            self.sol_erda_count = v;
        }
        if let Some(v) = update.sol_erda_price {
            self.sol_erda_price = v;
        }
        if let Some(v) = update.material_run_count {
            self.material_run_count = v;
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialUpdate {
    pub meso_per_run: Option<Decimal>,
    pub sol_erda_count: Option<i64>,
    pub sol_erda_price: Option<Decimal>,
    pub material_run_count: Option<i64>,
}
