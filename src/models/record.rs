use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::{LedgerError, Result};

pub(crate) const QUICK_INCOME_DESCRIPTION: &str = "[아매획] 수익";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordType {
    Income,
    Expense,
}

impl RecordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "income" => Some(Self::Income),
            "expense" => Some(Self::Expense),
            _ => None,
        }
    }

    /// Signed effect of a record of this type on the goal balance.
    pub fn goal_delta(&self, amount: Decimal) -> Decimal {
        match self {
            Self::Income => amount,
            Self::Expense => -amount,
        }
    }
}

impl std::fmt::Display for RecordType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Where a record came from. Stored as a `source` tag plus an optional
/// back-reference id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum Origin {
    Manual,
    Content { content_id: i64 },
    Boss { boss_id: i64 },
    QuickIncome,
}

impl Origin {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Manual => "manual",
            Self::Content { .. } => "content",
            Self::Boss { .. } => "boss",
            Self::QuickIncome => "quick_income",
        }
    }

    pub fn ref_id(&self) -> Option<i64> {
        match self {
            Self::Content { content_id } => Some(*content_id),
            Self::Boss { boss_id } => Some(*boss_id),
            Self::Manual | Self::QuickIncome => None,
        }
    }

    pub fn from_parts(source: &str, ref_id: Option<i64>) -> Option<Self> {
        match (source, ref_id) {
            ("manual", _) => Some(Self::Manual),
            ("quick_income", _) => Some(Self::QuickIncome),
            ("content", Some(content_id)) => Some(Self::Content { content_id }),
            ("boss", Some(boss_id)) => Some(Self::Boss { boss_id }),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Record {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: RecordType,
    pub amount: Decimal,
    pub description: String,
    /// Format: "YYYY-MM-DD"
    pub date: String,
    pub created_at: String,
    #[serde(flatten)]
    pub origin: Origin,
}

impl Record {
    pub fn goal_delta(&self) -> Decimal {
        self.kind.goal_delta(self.amount)
    }
}

/// Input for a new ledger entry; id and `created_at` are assigned on insert.
#[derive(Debug, Clone)]
pub struct NewRecord {
    pub kind: RecordType,
    pub amount: Decimal,
    pub description: String,
    /// Defaults to today's local date when `None`.
    pub date: Option<String>,
    pub origin: Origin,
}

impl NewRecord {
    pub fn new(kind: RecordType, amount: Decimal) -> Self {
        Self {
            kind,
            amount,
            description: String::new(),
            date: None,
            origin: Origin::Manual,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_date(mut self, date: Option<String>) -> Self {
        self.date = date;
        self
    }

    pub fn with_origin(mut self, origin: Origin) -> Self {
        self.origin = origin;
        self
    }
}

/// Reject negative money amounts.
pub(crate) fn ensure_non_negative(field: &str, amount: Decimal) -> Result<()> {
    if amount < Decimal::ZERO {
        return Err(LedgerError::validation(format!(
            "{field} must be zero or greater (got {amount})"
        )));
    }
    Ok(())
}

/// Parse a "YYYY-MM-DD" date and return it in canonical form.
pub(crate) fn normalize_date(raw: &str) -> Result<String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map(|d| d.format("%Y-%m-%d").to_string())
        .map_err(|_| LedgerError::validation(format!("Invalid date '{raw}', expected YYYY-MM-DD")))
}

/// Parse a "YYYY-MM" month filter. "2024-3" and "2024-03" both yield "2024-03".
pub(crate) fn normalize_month(raw: &str) -> Result<String> {
    NaiveDate::parse_from_str(&format!("{}-01", raw.trim()), "%Y-%m-%d")
        .map(|d| d.format("%Y-%m").to_string())
        .map_err(|_| LedgerError::validation(format!("Invalid month '{raw}', expected YYYY-MM")))
}
