use crate::statements::category::{AccountCategory, EntrySide};
use crate::statements::transaction::Transaction;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Per-account debit/credit/balance rollup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub account: String,
    pub debit: Decimal,
    pub credit: Decimal,
    pub balance: Decimal,
}

/// Maps the flat transaction log into one ledger entry per distinct category
/// present, in first-seen order.
///
/// Credit-side categories (income, ZIS) increase the account balance; every
/// other category decreases it. The balance accumulates over the whole input
/// set — there is no date partitioning.
pub fn derive_ledger(transactions: &[Transaction]) -> Vec<LedgerEntry> {
    let mut accounts: Vec<(AccountCategory, LedgerEntry)> = Vec::new();

    for transaction in transactions {
        let position = accounts
            .iter()
            .position(|(category, _)| *category == transaction.category);
        let index = match position {
            Some(index) => index,
            None => {
                accounts.push((
                    transaction.category.clone(),
                    LedgerEntry {
                        account: transaction.category.to_string(),
                        debit: Decimal::ZERO,
                        credit: Decimal::ZERO,
                        balance: Decimal::ZERO,
                    },
                ));
                accounts.len() - 1
            }
        };

        let entry = &mut accounts[index].1;
        match transaction.category.side() {
            EntrySide::Credit => {
                entry.credit += transaction.amount;
                entry.balance += transaction.amount;
            }
            EntrySide::Debit => {
                entry.debit += transaction.amount;
                entry.balance -= transaction.amount;
            }
        }
    }

    accounts.into_iter().map(|(_, entry)| entry).collect()
}
