use crate::payroll::record::{PaymentStatus, PayrollRecord};
use crate::repository::PayrollRecordRepository;
use crate::types::AmilError;
use chrono::Utc;
use std::sync::Arc;
use tracing::info;

/// Terminal state transition: mark a record `Paid`.
pub struct PaymentProcessor<R> {
    records: Arc<R>,
}

impl<R: PayrollRecordRepository> PaymentProcessor<R> {
    pub fn new(records: Arc<R>) -> Self {
        Self { records }
    }

    /// Sets `status = Paid`, `payment_date = now`, `updated_at = now`.
    ///
    /// There is no precondition on the current status: paying an already-Paid
    /// record succeeds again and stamps a fresh `payment_date`.
    pub async fn pay(&self, record_id: &str) -> Result<PayrollRecord, AmilError> {
        let mut record = self
            .records
            .get(record_id)
            .await?
            .ok_or_else(|| AmilError::not_found("payroll record", record_id))?;

        let now = Utc::now();
        record.status = PaymentStatus::Paid;
        record.payment_date = Some(now);
        record.updated_at = now;
        self.records.put(&record).await?;

        info!(record = %record.id, net = %record.net_salary, "payroll record marked paid");
        Ok(record)
    }
}
