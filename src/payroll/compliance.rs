//! Zakat-compliance rollup across a payroll population.
//!
//! Compliance can only be evaluated once a payroll record exists: entries
//! without one are excluded from every count rather than treated as
//! non-compliant.

use crate::config::ZakatRule;
use crate::payroll::record::PayrollRecord;
use crate::repository::{Employee, EmployeeProfile};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One population entry: an employee, their profile if any, and their payroll
/// record for the month under evaluation, if any.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZakatSubject {
    pub employee: Employee,
    pub profile: Option<EmployeeProfile>,
    pub record: Option<PayrollRecord>,
}

/// An employee whose income reaches nisab but whose record carries no zakat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NonCompliantEntry {
    pub employee_id: String,
    pub employee_name: String,
    pub total_income: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceReport {
    pub total_zakat_collected: Decimal,
    pub employees_above_nisab: usize,
    pub employees_with_zakat_paid: usize,
    pub non_compliant: Vec<NonCompliantEntry>,
}

/// Aggregates the population into compliance statistics.
///
/// An entry with `record.zakat > 0` counts toward the collected total and the
/// paid count whether or not it sits above nisab; an above-nisab entry with
/// zero zakat lands on the non-compliant list.
pub fn evaluate(subjects: &[ZakatSubject], rule: &ZakatRule) -> ComplianceReport {
    let nisab = rule.nisab();
    let mut report = ComplianceReport::default();

    for subject in subjects {
        let Some(record) = &subject.record else {
            continue;
        };

        let should_pay_zakat = record.total_income() >= nisab;
        if should_pay_zakat {
            report.employees_above_nisab += 1;
        }

        if record.zakat > Decimal::ZERO {
            report.total_zakat_collected += record.zakat;
            report.employees_with_zakat_paid += 1;
        } else if should_pay_zakat {
            report.non_compliant.push(NonCompliantEntry {
                employee_id: record.employee_id.clone(),
                employee_name: record.employee_name.clone(),
                total_income: record.total_income(),
            });
        }
    }

    report
}
