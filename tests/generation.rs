use amil::memory::{InMemoryEmployeeDirectory, InMemoryPayrollStore, InMemoryProfileStore};
use amil::prelude::*;
use async_trait::async_trait;
use rust_decimal_macros::dec;
use std::sync::Arc;

fn idr_rule() -> ZakatRule {
    ZakatRule::new(dec!(1200000)).unwrap()
}

async fn population() -> (Arc<InMemoryProfileStore>, Arc<InMemoryEmployeeDirectory>) {
    let profiles = Arc::new(InMemoryProfileStore::new());
    let directory = Arc::new(InMemoryEmployeeDirectory::new());

    // E1 and E2 carry full compensation templates; E3 has a profile without a
    // default salary; E4 has no profile at all.
    directory
        .add(Employee {
            id: "E1".into(),
            name: "Budi Santoso".into(),
            role: "Manager".into(),
        })
        .await;
    directory
        .add(Employee {
            id: "E2".into(),
            name: "Siti Aminah".into(),
            role: "Staff".into(),
        })
        .await;
    directory
        .add(Employee {
            id: "E3".into(),
            name: "Andi Wijaya".into(),
            role: "Intern".into(),
        })
        .await;
    directory
        .add(Employee {
            id: "E4".into(),
            name: "Rina Kurnia".into(),
            role: "Volunteer".into(),
        })
        .await;

    profiles
        .insert(
            "E1",
            EmployeeProfile {
                name: "Budi Santoso".into(),
                role: "Manager".into(),
                default_basic_salary: Some(dec!(150000000)),
                default_allowances: None,
                default_deductions: None,
            },
        )
        .await;
    profiles
        .insert(
            "E2",
            EmployeeProfile {
                name: "Siti Aminah".into(),
                role: "Staff".into(),
                default_basic_salary: Some(dec!(9000000)),
                default_allowances: Some(AllowanceBreakdown {
                    transport: dec!(500000),
                    ..Default::default()
                }),
                default_deductions: None,
            },
        )
        .await;
    profiles
        .insert(
            "E3",
            EmployeeProfile {
                name: "Andi Wijaya".into(),
                role: "Intern".into(),
                default_basic_salary: None,
                default_allowances: None,
                default_deductions: None,
            },
        )
        .await;

    (profiles, directory)
}

#[tokio::test]
async fn test_generate_creates_from_profile_defaults() {
    let store = Arc::new(InMemoryPayrollStore::new());
    let (profiles, directory) = population().await;
    let generator = MonthlyPayrollGenerator::new(
        Arc::clone(&store),
        profiles,
        directory,
        idr_rule(),
    );
    let month: PayMonth = "2025-01".parse().unwrap();

    let report = generator.generate(month).await.unwrap();

    assert!(report.is_clean());
    let mut created = report.created.clone();
    created.sort();
    assert_eq!(created, vec!["E1", "E2"]);
    let mut skipped = report.skipped.clone();
    skipped.sort();
    assert_eq!(skipped, vec!["E3", "E4"]);

    // Created as Draft, promoted to Pending within the same pass.
    assert_eq!(report.records.len(), 2);
    for record in &report.records {
        assert_eq!(record.status, PaymentStatus::Pending);
    }

    let budi = store.get("E1_2025-01").await.unwrap().unwrap();
    assert_eq!(budi.employee_name, "Budi Santoso");
    assert_eq!(budi.position, "Manager");
    // 150,000,000 >= nisab -> zakat due on generation.
    assert_eq!(budi.zakat, dec!(3750000));

    let siti = store.get("E2_2025-01").await.unwrap().unwrap();
    assert_eq!(siti.total_allowances, dec!(500000));
    assert_eq!(siti.total_income(), dec!(9500000));
}

#[tokio::test]
async fn test_generate_is_creation_idempotent() {
    let store = Arc::new(InMemoryPayrollStore::new());
    let (profiles, directory) = population().await;
    let generator = MonthlyPayrollGenerator::new(
        Arc::clone(&store),
        profiles,
        directory,
        idr_rule(),
    );
    let month: PayMonth = "2025-01".parse().unwrap();

    let first = generator.generate(month).await.unwrap();
    assert_eq!(first.created.len(), 2);

    let second = generator.generate(month).await.unwrap();
    assert!(second.created.is_empty());
    assert_eq!(second.records.len(), 2);
    // Still restamped: every record comes back Pending on every call.
    for record in &second.records {
        assert_eq!(record.status, PaymentStatus::Pending);
    }
}

#[tokio::test]
async fn test_generate_resets_paid_records_to_pending() {
    // A record marked Paid is pulled back to Pending by the next generation
    // pass; the stamp does not check the current status first.
    let store = Arc::new(InMemoryPayrollStore::new());
    let (profiles, directory) = population().await;
    let generator = MonthlyPayrollGenerator::new(
        Arc::clone(&store),
        profiles,
        directory,
        idr_rule(),
    );
    let month: PayMonth = "2025-01".parse().unwrap();

    generator.generate(month).await.unwrap();

    let paid = PaymentProcessor::new(Arc::clone(&store))
        .pay("E1_2025-01")
        .await
        .unwrap();
    assert_eq!(paid.status, PaymentStatus::Paid);

    generator.generate(month).await.unwrap();
    let after = store.get("E1_2025-01").await.unwrap().unwrap();
    assert_eq!(after.status, PaymentStatus::Pending);
    // The stamp touches status and updated_at only.
    assert_eq!(after.payment_date, paid.payment_date);
}

#[tokio::test]
async fn test_pay_unknown_record() {
    let store = Arc::new(InMemoryPayrollStore::new());
    let err = PaymentProcessor::new(store).pay("ghost_2025-01").await.unwrap_err();
    assert!(matches!(err, AmilError::NotFound { .. }));
}

#[tokio::test]
async fn test_repay_stamps_a_fresh_payment_date() {
    // Paying an already-Paid record is not rejected; it succeeds again.
    let store = Arc::new(InMemoryPayrollStore::new());
    let service = PayrollRecordService::new(Arc::clone(&store), idr_rule());
    let month: PayMonth = "2025-01".parse().unwrap();
    let record = service
        .upsert("E1", month, PayrollPatch::new().basic_salary(dec!(5000000)))
        .await
        .unwrap();

    let processor = PaymentProcessor::new(Arc::clone(&store));
    let first = processor.pay(&record.id).await.unwrap();
    let second = processor.pay(&record.id).await.unwrap();

    assert_eq!(second.status, PaymentStatus::Paid);
    assert!(second.payment_date.unwrap() >= first.payment_date.unwrap());
}

/// Store double whose writes fail for one employee, leaving the rest of the
/// pass untouched.
struct OutageStore {
    inner: InMemoryPayrollStore,
    failing_id: &'static str,
}

#[async_trait]
impl PayrollRecordRepository for OutageStore {
    async fn get(&self, id: &str) -> Result<Option<PayrollRecord>, AmilError> {
        self.inner.get(id).await
    }

    async fn put(&self, record: &PayrollRecord) -> Result<(), AmilError> {
        if record.employee_id == self.failing_id {
            return Err(AmilError::storage("put", "simulated outage"));
        }
        self.inner.put(record).await
    }

    async fn list_by_month(&self, month: PayMonth) -> Result<Vec<PayrollRecord>, AmilError> {
        self.inner.list_by_month(month).await
    }
}

#[tokio::test]
async fn test_partial_failure_is_reported_not_dropped() {
    let store = Arc::new(OutageStore {
        inner: InMemoryPayrollStore::new(),
        failing_id: "E2",
    });
    let (profiles, directory) = population().await;
    let generator = MonthlyPayrollGenerator::new(
        Arc::clone(&store),
        profiles,
        directory,
        idr_rule(),
    );
    let month: PayMonth = "2025-01".parse().unwrap();

    let report = generator.generate(month).await.unwrap();

    assert_eq!(report.status, GenerationStatus::Partial);
    assert_eq!(report.created, vec!["E1"]);
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].employee_id, "E2");
    assert!(matches!(report.failed[0].error, AmilError::Storage { .. }));
    assert!(report.expect_complete().is_err());
}
