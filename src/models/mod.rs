mod boss;
mod content;
mod goal;
mod material;
mod record;

pub use boss::Boss;
pub use content::{Content, NewContent};
pub use goal::{GoalBalance, GoalStatus, GoalUpdate};
pub use material::{MaterialSettings, MaterialUpdate};
pub use record::{NewRecord, Origin, Record, RecordType};

pub(crate) use record::{ensure_non_negative, normalize_date, normalize_month, QUICK_INCOME_DESCRIPTION};

#[cfg(test)]
mod tests;
