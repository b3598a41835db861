use amil::prelude::*;
use chrono::Utc;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn idr_rule() -> ZakatRule {
    // Nisab 102,000,000 IDR.
    ZakatRule::new(dec!(1200000)).unwrap()
}

fn subject(id: &str, name: &str, record: Option<PayrollRecord>) -> ZakatSubject {
    ZakatSubject {
        employee: Employee {
            id: id.into(),
            name: name.into(),
            role: "Staff".into(),
        },
        profile: None,
        record,
    }
}

fn record(employee_id: &str, basic_salary: Decimal, zakat: Decimal) -> PayrollRecord {
    let month: PayMonth = "2025-01".parse().unwrap();
    let now = Utc::now();
    PayrollRecord {
        id: record_id(employee_id, month),
        employee_id: employee_id.into(),
        employee_name: format!("Employee {}", employee_id),
        position: "Staff".into(),
        month,
        basic_salary,
        allowances: AllowanceBreakdown::default(),
        deductions: DeductionBreakdown::default(),
        total_allowances: Decimal::ZERO,
        total_deductions: Decimal::ZERO,
        zakat,
        net_salary: basic_salary - zakat,
        status: PaymentStatus::Pending,
        payment_date: None,
        zakat_paid: false,
        created_at: now,
        updated_at: now,
    }
}

#[test]
fn test_population_rollup() {
    let subjects = vec![
        // Above nisab with zakat withheld: counted collected + paid.
        subject("E1", "Budi", Some(record("E1", dec!(150000000), dec!(3750000)))),
        // Above nisab, zero zakat: non-compliant.
        subject("E2", "Siti", Some(record("E2", dec!(120000000), Decimal::ZERO))),
        // Below nisab, zero zakat: nothing to report.
        subject("E3", "Andi", Some(record("E3", dec!(50000000), Decimal::ZERO))),
        // No payroll record yet: excluded from every count.
        subject("E4", "Rina", None),
    ];

    let report = evaluate(&subjects, &idr_rule());

    assert_eq!(report.total_zakat_collected, dec!(3750000));
    assert_eq!(report.employees_above_nisab, 2);
    assert_eq!(report.employees_with_zakat_paid, 1);
    assert_eq!(report.non_compliant.len(), 1);
    assert_eq!(report.non_compliant[0].employee_id, "E2");
    assert_eq!(report.non_compliant[0].total_income, dec!(120000000));
}

#[test]
fn test_zakat_paid_counts_even_below_nisab() {
    // A record carrying zakat counts toward the paid statistics regardless of
    // the nisab test on its own income.
    let subjects = vec![subject(
        "E5",
        "Dewi",
        Some(record("E5", dec!(50000000), dec!(1250000))),
    )];

    let report = evaluate(&subjects, &idr_rule());
    assert_eq!(report.employees_above_nisab, 0);
    assert_eq!(report.employees_with_zakat_paid, 1);
    assert_eq!(report.total_zakat_collected, dec!(1250000));
    assert!(report.non_compliant.is_empty());
}

#[test]
fn test_empty_population() {
    let report = evaluate(&[], &idr_rule());
    assert_eq!(report.total_zakat_collected, Decimal::ZERO);
    assert_eq!(report.employees_above_nisab, 0);
    assert!(report.non_compliant.is_empty());
}
