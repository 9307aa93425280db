use rust_decimal::Decimal;
use serde::Serialize;

/// Prefix on income records created by checking a boss.
pub(crate) const CHECK_PREFIX: &str = "[보스]";

#[derive(Debug, Clone, Serialize)]
pub struct Boss {
    pub id: i64,
    pub name: String,
    pub reward_amount: Decimal,
    pub checked: bool,
    pub checked_at: Option<String>,
}

impl Boss {
    pub fn new(id: i64, name: String, reward_amount: Decimal) -> Self {
        Self {
            id,
            name,
            reward_amount,
            checked: false,
            checked_at: None,
        }
    }

    pub fn check_description(&self) -> String {
        format!("{CHECK_PREFIX} {}", self.name)
    }
}

impl std::fmt::Display for Boss {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
