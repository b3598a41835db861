use crate::payroll::calculator::PayrollAmounts;
use crate::types::PayMonth;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Monthly allowance buckets. All fields are expected non-negative;
/// `total()` clamps each operand to zero at the edge.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AllowanceBreakdown {
    pub transport: Decimal,
    pub meals: Decimal,
    pub housing: Decimal,
    pub other: Decimal,
}

impl AllowanceBreakdown {
    pub fn total(&self) -> Decimal {
        self.transport.max(Decimal::ZERO)
            + self.meals.max(Decimal::ZERO)
            + self.housing.max(Decimal::ZERO)
            + self.other.max(Decimal::ZERO)
    }
}

/// Monthly deduction buckets (BPJS social insurance, income tax, loan
/// installments, other). Same edge-clamping convention as allowances.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeductionBreakdown {
    pub bpjs: Decimal,
    pub tax: Decimal,
    pub loans: Decimal,
    pub other: Decimal,
}

impl DeductionBreakdown {
    pub fn total(&self) -> Decimal {
        self.bpjs.max(Decimal::ZERO)
            + self.tax.max(Decimal::ZERO)
            + self.loans.max(Decimal::ZERO)
            + self.other.max(Decimal::ZERO)
    }
}

/// Payment lifecycle of a payroll record: Draft -> Pending -> Paid.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
pub enum PaymentStatus {
    #[default]
    Draft,
    Pending,
    Paid,
}

/// The composite key under which a record is stored. There is no surrogate id:
/// `{employee_id}_{month}` IS the record id.
pub fn record_id(employee_id: &str, month: PayMonth) -> String {
    format!("{}_{}", employee_id, month)
}

/// One employee's compensation computation and lifecycle state for one month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollRecord {
    pub id: String,
    pub employee_id: String,
    pub employee_name: String,
    pub position: String,
    pub month: PayMonth,
    pub basic_salary: Decimal,
    pub allowances: AllowanceBreakdown,
    pub deductions: DeductionBreakdown,
    pub total_allowances: Decimal,
    pub total_deductions: Decimal,
    pub zakat: Decimal,
    pub net_salary: Decimal,
    pub status: PaymentStatus,
    pub payment_date: Option<DateTime<Utc>>,
    pub zakat_paid: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PayrollRecord {
    /// basic salary + total allowances; the base the zakat threshold is
    /// checked against.
    pub fn total_income(&self) -> Decimal {
        self.basic_salary + self.total_allowances
    }

    /// Overwrites every derived field from a freshly computed set of amounts.
    pub(crate) fn apply_amounts(&mut self, amounts: PayrollAmounts) {
        self.total_allowances = amounts.total_allowances;
        self.total_deductions = amounts.total_deductions;
        self.zakat = amounts.zakat;
        self.net_salary = amounts.net_salary;
    }
}
