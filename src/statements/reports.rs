//! Financial statements derived from the transaction log. All outputs are
//! ephemeral — recomputed on every call, never persisted.

use crate::statements::category::AccountCategory;
use crate::statements::transaction::Transaction;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Opening cash balance of the cash-flow statement.
pub const OPENING_CASH_BALANCE: Decimal = dec!(5000000);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceEntry {
    pub account: String,
    pub amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfitLossEntry {
    pub description: String,
    pub amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashFlowEntry {
    pub description: String,
    pub amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZisEntry {
    pub description: String,
    pub amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceSheet {
    pub assets: Vec<BalanceEntry>,
    pub equity: Vec<BalanceEntry>,
}

/// Per-category amount totals in first-seen order.
fn category_totals(transactions: &[Transaction]) -> Vec<(AccountCategory, Decimal)> {
    let mut totals: Vec<(AccountCategory, Decimal)> = Vec::new();
    for transaction in transactions {
        match totals
            .iter_mut()
            .find(|(category, _)| *category == transaction.category)
        {
            Some((_, total)) => *total += transaction.amount,
            None => totals.push((transaction.category.clone(), transaction.amount)),
        }
    }
    totals
}

fn total_income(transactions: &[Transaction]) -> Decimal {
    transactions
        .iter()
        .filter(|t| t.category.is_income())
        .map(|t| t.amount)
        .sum()
}

fn total_expenses(transactions: &[Transaction]) -> Decimal {
    transactions
        .iter()
        .filter(|t| t.category.is_expense())
        .map(|t| t.amount)
        .sum()
}

/// Balance sheet: cash and fixed assets against capital.
///
/// The "Kas" asset line is total income minus total expenses; the fixed-asset
/// line appears only when fixed-asset transactions exist. Equity carries one
/// line per income category (positive) and per expense category (negated),
/// closed by the synthetic "Modal" capital line.
pub fn balance_sheet(transactions: &[Transaction]) -> BalanceSheet {
    let income = total_income(transactions);
    let expenses = total_expenses(transactions);

    let mut assets = vec![BalanceEntry {
        account: "Kas".to_string(),
        amount: income - expenses,
    }];
    let fixed_assets: Decimal = transactions
        .iter()
        .filter(|t| t.category.is_fixed_asset())
        .map(|t| t.amount)
        .sum();
    if transactions.iter().any(|t| t.category.is_fixed_asset()) {
        assets.push(BalanceEntry {
            account: AccountCategory::AsetTetap.to_string(),
            amount: fixed_assets,
        });
    }

    let mut equity = Vec::new();
    for (category, total) in category_totals(transactions) {
        if category.is_income() {
            equity.push(BalanceEntry {
                account: category.to_string(),
                amount: total,
            });
        } else if category.is_expense() {
            equity.push(BalanceEntry {
                account: category.to_string(),
                amount: -total,
            });
        }
    }
    equity.push(BalanceEntry {
        account: "Modal".to_string(),
        amount: income - expenses,
    });

    BalanceSheet { assets, equity }
}

/// Profit and loss: one line per income category, one negated line per expense
/// category, closed by the synthetic "Laba Bersih" net-income line.
pub fn profit_and_loss(transactions: &[Transaction]) -> Vec<ProfitLossEntry> {
    let mut lines = Vec::new();
    for (category, total) in category_totals(transactions) {
        if category.is_income() {
            lines.push(ProfitLossEntry {
                description: category.to_string(),
                amount: total,
            });
        } else if category.is_expense() {
            lines.push(ProfitLossEntry {
                description: category.to_string(),
                amount: -total,
            });
        }
    }
    lines.push(ProfitLossEntry {
        description: "Laba Bersih".to_string(),
        amount: total_income(transactions) - total_expenses(transactions),
    });
    lines
}

/// Cash flow: four fixed lines over a constant opening balance.
pub fn cash_flow(transactions: &[Transaction]) -> Vec<CashFlowEntry> {
    let receipts = total_income(transactions);
    let disbursements = total_expenses(transactions);
    vec![
        CashFlowEntry {
            description: "Saldo Awal".to_string(),
            amount: OPENING_CASH_BALANCE,
        },
        CashFlowEntry {
            description: "Penerimaan Operasional".to_string(),
            amount: receipts,
        },
        CashFlowEntry {
            description: "Pengeluaran Operasional".to_string(),
            amount: -disbursements,
        },
        CashFlowEntry {
            description: "Saldo Akhir".to_string(),
            amount: OPENING_CASH_BALANCE + receipts - disbursements,
        },
    ]
}

/// ZIS statement: receipts (positive amounts), distributions (negated sum of
/// negative amounts), and the running balance.
///
/// With no ZIS transactions in the log the statement is EMPTY, not zeroed —
/// callers must treat "no ZIS activity" differently from "ZIS balance of 0".
pub fn zis_statement(transactions: &[Transaction]) -> Vec<ZisEntry> {
    let zis: Vec<&Transaction> = transactions.iter().filter(|t| t.category.is_zis()).collect();
    if zis.is_empty() {
        return Vec::new();
    }

    let receipts: Decimal = zis
        .iter()
        .filter(|t| t.amount > Decimal::ZERO)
        .map(|t| t.amount)
        .sum();
    let distribution: Decimal = -zis
        .iter()
        .filter(|t| t.amount < Decimal::ZERO)
        .map(|t| t.amount)
        .sum::<Decimal>();

    vec![
        ZisEntry {
            description: "Penerimaan ZIS".to_string(),
            amount: receipts,
        },
        ZisEntry {
            description: "Penyaluran ZIS".to_string(),
            amount: distribution,
        },
        ZisEntry {
            description: "Saldo ZIS".to_string(),
            amount: receipts - distribution,
        },
    ]
}
