//! Pure payroll arithmetic: allowance/deduction totals, the zakat threshold
//! rule, and net salary. Stateless and safe to call concurrently; nothing in
//! here touches a repository.

use crate::config::ZakatRule;
use crate::payroll::record::{AllowanceBreakdown, DeductionBreakdown};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Every derived monetary field of a payroll record, computed in one place so
/// the single-record service and the monthly generator cannot drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollAmounts {
    pub total_allowances: Decimal,
    pub total_deductions: Decimal,
    pub total_income: Decimal,
    pub zakat: Decimal,
    pub net_salary: Decimal,
}

/// 2.5% of total income when it reaches nisab, zero below it.
///
/// No rounding is applied here; callers that need currency-safe rounding
/// round at presentation time.
pub fn zakat_due(total_income: Decimal, rule: &ZakatRule) -> Decimal {
    if total_income >= rule.nisab() {
        total_income * rule.rate()
    } else {
        Decimal::ZERO
    }
}

/// total income - total deductions - zakat. May be negative; a negative net
/// salary is surfaced to the caller, not silently floored.
pub fn net_salary(total_income: Decimal, total_deductions: Decimal, zakat: Decimal) -> Decimal {
    total_income - total_deductions - zakat
}

/// Derives the full amount set for one record.
pub fn derive_amounts(
    basic_salary: Decimal,
    allowances: &AllowanceBreakdown,
    deductions: &DeductionBreakdown,
    rule: &ZakatRule,
) -> PayrollAmounts {
    let total_allowances = allowances.total();
    let total_deductions = deductions.total();
    let total_income = basic_salary + total_allowances;
    let zakat = zakat_due(total_income, rule);
    PayrollAmounts {
        total_allowances,
        total_deductions,
        total_income,
        zakat,
        net_salary: net_salary(total_income, total_deductions, zakat),
    }
}
