use crate::config::ZakatRule;
use crate::payroll::record::{PaymentStatus, PayrollRecord};
use crate::payroll::service::{PayrollPatch, PayrollRecordService};
use crate::repository::{Employee, EmployeeDirectory, PayrollRecordRepository, ProfileRepository};
use crate::types::{AmilError, PayMonth};
use chrono::Utc;
use futures::future::join_all;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{info, warn};

/// Status of a generation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GenerationStatus {
    /// Every write succeeded.
    Complete,
    /// Some employees failed; the rest of the month's records were written.
    Partial,
    /// Nothing was written.
    Failed,
}

/// A single employee whose record could not be written during the pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationFailure {
    pub employee_id: String,
    pub error: AmilError,
}

/// Outcome of one `generate` call. Per-employee failures are collected here
/// instead of being dropped, so callers can retry only the failures; nothing
/// is rolled back on partial failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationReport {
    pub status: GenerationStatus,
    /// The full, refreshed set of records for the month.
    pub records: Vec<PayrollRecord>,
    /// Employee ids whose record was newly created this pass.
    pub created: Vec<String>,
    /// Employee ids silently skipped: no profile, or no default basic salary.
    pub skipped: Vec<String>,
    pub failed: Vec<GenerationFailure>,
}

impl GenerationReport {
    pub fn is_clean(&self) -> bool {
        self.status == GenerationStatus::Complete
    }

    /// Returns the report if Complete, otherwise an error naming the failures.
    pub fn expect_complete(self) -> Result<Self, AmilError> {
        match self.status {
            GenerationStatus::Complete => Ok(self),
            GenerationStatus::Partial => Err(AmilError::storage(
                "generate",
                format!("{} employee record(s) failed to write", self.failed.len()),
            )),
            GenerationStatus::Failed => {
                Err(AmilError::storage("generate", "generation pass wrote nothing"))
            }
        }
    }
}

enum CreationOutcome {
    Created(String),
    Skipped(String),
    Failed(GenerationFailure),
}

/// Orchestrates [`PayrollRecordService`] across the whole employee population
/// for one month: an unordered concurrent fan-out of independent per-employee
/// writes (each on a distinct key), followed by an unconditional bulk status
/// stamp.
///
/// Creation is idempotent: a re-run with an unchanged population creates zero
/// new records. The status stamp is NOT idempotent — every existing record for
/// the month is reset to `Pending` on every call, including records already
/// marked `Paid`.
pub struct MonthlyPayrollGenerator<R, P, D> {
    records: Arc<R>,
    profiles: Arc<P>,
    directory: Arc<D>,
    service: PayrollRecordService<R>,
}

impl<R, P, D> MonthlyPayrollGenerator<R, P, D>
where
    R: PayrollRecordRepository,
    P: ProfileRepository,
    D: EmployeeDirectory,
{
    pub fn new(records: Arc<R>, profiles: Arc<P>, directory: Arc<D>, rule: ZakatRule) -> Self {
        let service = PayrollRecordService::new(Arc::clone(&records), rule);
        Self {
            records,
            profiles,
            directory,
            service,
        }
    }

    pub async fn generate(&self, month: PayMonth) -> Result<GenerationReport, AmilError> {
        let employees = self.directory.list_all().await?;
        let existing: HashSet<String> = self
            .records
            .list_by_month(month)
            .await?
            .into_iter()
            .map(|record| record.employee_id)
            .collect();

        // Creation pass: one independent task per employee without a record.
        let creations = join_all(
            employees
                .iter()
                .filter(|employee| !existing.contains(&employee.id))
                .map(|employee| self.create_for(employee, month)),
        )
        .await;

        let mut created = Vec::new();
        let mut skipped = Vec::new();
        let mut failed = Vec::new();
        for outcome in creations {
            match outcome {
                CreationOutcome::Created(id) => created.push(id),
                CreationOutcome::Skipped(id) => skipped.push(id),
                CreationOutcome::Failed(failure) => failed.push(failure),
            }
        }

        // Stamping pass: every record of the month goes to Pending with a
        // fresh updated_at, regardless of its current status. A record marked
        // Paid last month-end comes back Pending here.
        let month_records = self.records.list_by_month(month).await?;
        let stamps = join_all(month_records.into_iter().map(|mut record| {
            let records = Arc::clone(&self.records);
            async move {
                record.status = PaymentStatus::Pending;
                record.updated_at = Utc::now();
                match records.put(&record).await {
                    Ok(()) => Ok(record),
                    Err(error) => Err(GenerationFailure {
                        employee_id: record.employee_id.clone(),
                        error,
                    }),
                }
            }
        }))
        .await;

        let mut records = Vec::new();
        for stamp in stamps {
            match stamp {
                Ok(record) => records.push(record),
                Err(failure) => failed.push(failure),
            }
        }

        let status = if failed.is_empty() {
            GenerationStatus::Complete
        } else if records.is_empty() && created.is_empty() {
            GenerationStatus::Failed
        } else {
            GenerationStatus::Partial
        };

        if failed.is_empty() {
            info!(
                %month,
                created = created.len(),
                skipped = skipped.len(),
                total = records.len(),
                "monthly payroll generation finished"
            );
        } else {
            warn!(
                %month,
                created = created.len(),
                skipped = skipped.len(),
                failed = failed.len(),
                "monthly payroll generation finished with failures"
            );
        }

        Ok(GenerationReport {
            status,
            records,
            created,
            skipped,
            failed,
        })
    }

    async fn create_for(&self, employee: &Employee, month: PayMonth) -> CreationOutcome {
        let profile = match self.profiles.get(&employee.id).await {
            Ok(profile) => profile,
            Err(error) => {
                return CreationOutcome::Failed(GenerationFailure {
                    employee_id: employee.id.clone(),
                    error,
                });
            }
        };
        // No profile, or no default basic salary configured: silent skip.
        let Some(profile) = profile else {
            return CreationOutcome::Skipped(employee.id.clone());
        };
        let Some(basic_salary) = profile.default_basic_salary else {
            return CreationOutcome::Skipped(employee.id.clone());
        };

        let patch = PayrollPatch::new()
            .employee_name(profile.name.clone())
            .position(profile.role.clone())
            .basic_salary(basic_salary)
            .allowances(profile.default_allowances.unwrap_or_default())
            .deductions(profile.default_deductions.unwrap_or_default());

        match self.service.upsert(&employee.id, month, patch).await {
            Ok(record) => CreationOutcome::Created(record.employee_id),
            Err(error) => CreationOutcome::Failed(GenerationFailure {
                employee_id: employee.id.clone(),
                error,
            }),
        }
    }
}
