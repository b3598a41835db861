use crate::statements::transaction::Transaction;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Dashboard totals: a single-pass rollup over the whole transaction log.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryData {
    pub income: Decimal,
    pub expenses: Decimal,
    pub zis: Decimal,
    pub net: Decimal,
    /// Same formula as `net`; surfaced separately because the dashboard shows
    /// it as a cash position, not a result line.
    pub cash: Decimal,
}

/// One pass: income from the two income categories, expenses as absolute
/// amounts from the two expense categories, zis from the ZIS category.
/// Fixed-asset, other-outflow, and unknown categories do not contribute.
pub fn summarize(transactions: &[Transaction]) -> SummaryData {
    let mut summary = SummaryData::default();

    for transaction in transactions {
        if transaction.category.is_income() {
            summary.income += transaction.amount;
        } else if transaction.category.is_expense() {
            summary.expenses += transaction.amount.abs();
        } else if transaction.category.is_zis() {
            summary.zis += transaction.amount;
        }
    }

    summary.net = summary.income - summary.expenses;
    summary.cash = summary.income - summary.expenses;
    summary
}
