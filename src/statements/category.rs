use serde::{Deserialize, Serialize};

/// Which side of the ledger an amount lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntrySide {
    Debit,
    Credit,
}

/// The closed category vocabulary of the transaction log, plus a catch-all
/// for labels outside it.
///
/// This is the one classification table shared by the ledger deriver, the
/// statement builders, and the summary aggregator: income and ZIS categories
/// sit on the credit side, everything else (including unknown labels) on the
/// debit side.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AccountCategory {
    /// "Pendapatan" — primary revenue.
    Pendapatan,
    /// "Pendapatan Lain" — other revenue.
    PendapatanLain,
    /// "Beban Pokok" — cost of goods.
    BebanPokok,
    /// "Beban Operasional" — operating expenses.
    BebanOperasional,
    /// "Aset Tetap" — fixed assets.
    AsetTetap,
    /// "ZIS" — zakat, infaq, sedekah flows.
    Zis,
    /// "Pengeluaran lain" — other outflows.
    PengeluaranLain,
    /// Any label outside the vocabulary. Kept verbatim, classified as a debit.
    Other(String),
}

impl AccountCategory {
    /// The vocabulary in canonical order, without the catch-all.
    pub fn known() -> [AccountCategory; 7] {
        [
            AccountCategory::Pendapatan,
            AccountCategory::PendapatanLain,
            AccountCategory::BebanPokok,
            AccountCategory::BebanOperasional,
            AccountCategory::AsetTetap,
            AccountCategory::Zis,
            AccountCategory::PengeluaranLain,
        ]
    }

    pub fn side(&self) -> EntrySide {
        if self.is_income() || self.is_zis() {
            EntrySide::Credit
        } else {
            EntrySide::Debit
        }
    }

    pub fn is_income(&self) -> bool {
        matches!(
            self,
            AccountCategory::Pendapatan | AccountCategory::PendapatanLain
        )
    }

    pub fn is_expense(&self) -> bool {
        matches!(
            self,
            AccountCategory::BebanPokok | AccountCategory::BebanOperasional
        )
    }

    pub fn is_zis(&self) -> bool {
        matches!(self, AccountCategory::Zis)
    }

    pub fn is_fixed_asset(&self) -> bool {
        matches!(self, AccountCategory::AsetTetap)
    }
}

impl From<&str> for AccountCategory {
    fn from(label: &str) -> Self {
        match label {
            "Pendapatan" => AccountCategory::Pendapatan,
            "Pendapatan Lain" => AccountCategory::PendapatanLain,
            "Beban Pokok" => AccountCategory::BebanPokok,
            "Beban Operasional" => AccountCategory::BebanOperasional,
            "Aset Tetap" => AccountCategory::AsetTetap,
            "ZIS" => AccountCategory::Zis,
            "Pengeluaran lain" => AccountCategory::PengeluaranLain,
            other => AccountCategory::Other(other.to_string()),
        }
    }
}

impl From<String> for AccountCategory {
    fn from(label: String) -> Self {
        label.as_str().into()
    }
}

impl From<AccountCategory> for String {
    fn from(category: AccountCategory) -> Self {
        category.to_string()
    }
}

impl std::fmt::Display for AccountCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            AccountCategory::Pendapatan => "Pendapatan",
            AccountCategory::PendapatanLain => "Pendapatan Lain",
            AccountCategory::BebanPokok => "Beban Pokok",
            AccountCategory::BebanOperasional => "Beban Operasional",
            AccountCategory::AsetTetap => "Aset Tetap",
            AccountCategory::Zis => "ZIS",
            AccountCategory::PengeluaranLain => "Pengeluaran lain",
            AccountCategory::Other(other) => other,
        };
        f.write_str(label)
    }
}
