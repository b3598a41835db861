use crate::statements::category::AccountCategory;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One entry of the append-only, category-tagged transaction log.
///
/// The log is owned upstream; this engine only reads it. Amounts are signed —
/// the ZIS statement splits on the sign, the summary takes absolute values for
/// expenses, the ledger accumulates as-is. `ai_status` is the externally
/// supplied compliance tag from the verification flow and is carried through
/// untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: Uuid,
    pub date: NaiveDate,
    pub description: String,
    pub category: AccountCategory,
    pub amount: Decimal,
    pub ai_status: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    pub fn new(
        date: NaiveDate,
        category: AccountCategory,
        amount: Decimal,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            description: description.into(),
            category,
            amount,
            ai_status: None,
            created_at: Utc::now(),
        }
    }

    pub fn with_ai_status(mut self, status: impl Into<String>) -> Self {
        self.ai_status = Some(status.into());
        self
    }
}
