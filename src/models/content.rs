use rust_decimal::Decimal;
use serde::Serialize;

/// Prefix on expense records created by spending a catalog item.
pub(crate) const SPEND_PREFIX: &str = "[메포]";

#[derive(Debug, Clone, Serialize)]
pub struct Content {
    pub id: i64,
    pub name: String,
    pub cost: Decimal,
    pub category: Option<String>,
}

impl Content {
    pub fn spend_description(&self) -> String {
        format!("{SPEND_PREFIX} {}", self.name)
    }
}

#[derive(Debug, Clone)]
pub struct NewContent {
    pub name: String,
    pub cost: Decimal,
    pub category: Option<String>,
}

impl NewContent {
    pub fn new(name: impl Into<String>, cost: Decimal) -> Self {
        Self {
            name: name.into(),
            cost,
            category: None,
        }
    }
}
