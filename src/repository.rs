//! Collaborator contracts. The engine owns no storage: payroll records,
//! profiles, the employee directory, and the transaction log are all reached
//! through these injected capabilities, so every service can run against a
//! production store or an in-memory double (see [`crate::memory`]).
//!
//! Implementors must provide at least per-document atomic read-modify-write;
//! the engine assumes, but cannot enforce, that two writers on the same key do
//! not interleave.

use crate::payroll::record::{AllowanceBreakdown, DeductionBreakdown, PayrollRecord};
use crate::statements::transaction::Transaction;
use crate::types::{AmilError, PayMonth};
use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Directory row for one employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub role: String,
}

/// Per-employee default compensation template used when generating a month's
/// records. An employee with no `default_basic_salary` is skipped by the
/// generator (no record, no error).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeProfile {
    pub name: String,
    pub role: String,
    pub default_basic_salary: Option<Decimal>,
    pub default_allowances: Option<AllowanceBreakdown>,
    pub default_deductions: Option<DeductionBreakdown>,
}

/// Keyed document store for payroll records.
///
/// Partial updates are expressed as read-modify-write `get` + `put`; the
/// per-document atomicity of that pair is the implementor's contract.
#[async_trait]
pub trait PayrollRecordRepository: Send + Sync {
    async fn get(&self, id: &str) -> Result<Option<PayrollRecord>, AmilError>;
    async fn put(&self, record: &PayrollRecord) -> Result<(), AmilError>;
    async fn list_by_month(&self, month: PayMonth) -> Result<Vec<PayrollRecord>, AmilError>;
}

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn get(&self, employee_id: &str) -> Result<Option<EmployeeProfile>, AmilError>;
}

#[async_trait]
pub trait EmployeeDirectory: Send + Sync {
    async fn list_all(&self) -> Result<Vec<Employee>, AmilError>;
}

/// Read access to the append-only transaction log. This engine never writes
/// transactions; categorization and the compliance tag are supplied upstream.
#[async_trait]
pub trait TransactionRepository: Send + Sync {
    async fn list_all(&self) -> Result<Vec<Transaction>, AmilError>;
}
