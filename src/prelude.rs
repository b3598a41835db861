//! Prelude module re-exporting the commonly used surface of the engine.
//!
//! # Usage
//!
//! ```rust
//! use amil::prelude::*;
//! ```

pub use crate::config::ZakatRule;
pub use crate::inputs::IntoMoney;
pub use crate::types::{AmilError, PayMonth};

pub use crate::payroll::calculator::{PayrollAmounts, derive_amounts, net_salary, zakat_due};
pub use crate::payroll::compliance::{ComplianceReport, ZakatSubject, evaluate};
pub use crate::payroll::generator::{GenerationReport, GenerationStatus, MonthlyPayrollGenerator};
pub use crate::payroll::payment::PaymentProcessor;
pub use crate::payroll::record::{
    AllowanceBreakdown, DeductionBreakdown, PaymentStatus, PayrollRecord, record_id,
};
pub use crate::payroll::service::{PayrollPatch, PayrollRecordService};

pub use crate::repository::{
    Employee, EmployeeDirectory, EmployeeProfile, PayrollRecordRepository, ProfileRepository,
    TransactionRepository,
};

pub use crate::statements::category::{AccountCategory, EntrySide};
pub use crate::statements::ledger::{LedgerEntry, derive_ledger};
pub use crate::statements::reports::{
    BalanceSheet, CashFlowEntry, OPENING_CASH_BALANCE, ProfitLossEntry, ZisEntry, balance_sheet,
    cash_flow, profit_and_loss, zis_statement,
};
pub use crate::statements::summary::{SummaryData, summarize};
pub use crate::statements::transaction::Transaction;
