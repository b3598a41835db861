use crate::config::ZakatRule;
use crate::inputs::IntoMoney;
use crate::payroll::calculator::derive_amounts;
use crate::payroll::record::{
    AllowanceBreakdown, DeductionBreakdown, PaymentStatus, PayrollRecord, record_id,
};
use crate::repository::PayrollRecordRepository;
use crate::types::{AmilError, PayMonth};
use chrono::Utc;
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::debug;

/// Typed update command for a payroll record: exactly the fields a caller may
/// patch, nothing merged by duck typing. Absent fields keep the stored value
/// (or the documented default on first creation).
#[derive(Debug, Clone, Default)]
pub struct PayrollPatch {
    pub employee_name: Option<String>,
    pub position: Option<String>,
    pub basic_salary: Option<Decimal>,
    pub allowances: Option<AllowanceBreakdown>,
    pub deductions: Option<DeductionBreakdown>,
    pub zakat_paid: Option<bool>,
}

impl PayrollPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn employee_name(mut self, name: impl Into<String>) -> Self {
        self.employee_name = Some(name.into());
        self
    }

    pub fn position(mut self, position: impl Into<String>) -> Self {
        self.position = Some(position.into());
        self
    }

    pub fn basic_salary(mut self, amount: impl IntoMoney) -> Self {
        if let Ok(amount) = amount.into_money() {
            self.basic_salary = Some(amount);
        }
        self
    }

    pub fn allowances(mut self, allowances: AllowanceBreakdown) -> Self {
        self.allowances = Some(allowances);
        self
    }

    pub fn deductions(mut self, deductions: DeductionBreakdown) -> Self {
        self.deductions = Some(deductions);
        self
    }

    pub fn zakat_paid(mut self, paid: bool) -> Self {
        self.zakat_paid = Some(paid);
        self
    }
}

/// Creates or updates a single employee's payroll record for one month,
/// recomputing every derived field from the merged state.
pub struct PayrollRecordService<R> {
    records: Arc<R>,
    rule: ZakatRule,
}

impl<R: PayrollRecordRepository> PayrollRecordService<R> {
    pub fn new(records: Arc<R>, rule: ZakatRule) -> Self {
        Self { records, rule }
    }

    pub fn rule(&self) -> &ZakatRule {
        &self.rule
    }

    /// One repository read, one write.
    ///
    /// On create the status is forced to `Draft` whatever the caller intended;
    /// on update the payment-sensitive fields (`status`, `payment_date`) are
    /// preserved untouched. `zakat_paid` precedence: patch > stored > false.
    pub async fn upsert(
        &self,
        employee_id: &str,
        month: PayMonth,
        patch: PayrollPatch,
    ) -> Result<PayrollRecord, AmilError> {
        if employee_id.trim().is_empty() {
            return Err(AmilError::validation("employee_id", "must not be empty"));
        }

        let id = record_id(employee_id, month);
        let now = Utc::now();

        let mut record = match self.records.get(&id).await? {
            Some(mut current) => {
                if let Some(name) = patch.employee_name {
                    current.employee_name = name;
                }
                if let Some(position) = patch.position {
                    current.position = position;
                }
                if let Some(salary) = patch.basic_salary {
                    current.basic_salary = salary;
                }
                if let Some(allowances) = patch.allowances {
                    current.allowances = allowances;
                }
                if let Some(deductions) = patch.deductions {
                    current.deductions = deductions;
                }
                if let Some(paid) = patch.zakat_paid {
                    current.zakat_paid = paid;
                }
                current
            }
            None => PayrollRecord {
                id: id.clone(),
                employee_id: employee_id.to_string(),
                employee_name: patch.employee_name.unwrap_or_default(),
                position: patch.position.unwrap_or_default(),
                month,
                basic_salary: patch.basic_salary.unwrap_or(Decimal::ZERO),
                allowances: patch.allowances.unwrap_or_default(),
                deductions: patch.deductions.unwrap_or_default(),
                total_allowances: Decimal::ZERO,
                total_deductions: Decimal::ZERO,
                zakat: Decimal::ZERO,
                net_salary: Decimal::ZERO,
                status: PaymentStatus::Draft,
                payment_date: None,
                zakat_paid: patch.zakat_paid.unwrap_or(false),
                created_at: now,
                updated_at: now,
            },
        };

        let amounts = derive_amounts(
            record.basic_salary,
            &record.allowances,
            &record.deductions,
            &self.rule,
        );
        record.apply_amounts(amounts);
        record.updated_at = now;

        self.records.put(&record).await?;
        debug!(record = %record.id, status = %record.status, net = %record.net_salary, "payroll record stored");
        Ok(record)
    }
}
