//! In-memory implementations of the repository contracts. Used by the test
//! suite and as reference implementations for adapter authors; per-key writes
//! are atomic under the lock, matching the contract production stores must
//! provide per document.

use crate::payroll::record::PayrollRecord;
use crate::repository::{
    Employee, EmployeeDirectory, EmployeeProfile, PayrollRecordRepository, ProfileRepository,
    TransactionRepository,
};
use crate::statements::transaction::Transaction;
use crate::types::{AmilError, PayMonth};
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
pub struct InMemoryPayrollStore {
    docs: RwLock<BTreeMap<String, PayrollRecord>>,
}

impl InMemoryPayrollStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PayrollRecordRepository for InMemoryPayrollStore {
    async fn get(&self, id: &str) -> Result<Option<PayrollRecord>, AmilError> {
        Ok(self.docs.read().await.get(id).cloned())
    }

    async fn put(&self, record: &PayrollRecord) -> Result<(), AmilError> {
        self.docs
            .write()
            .await
            .insert(record.id.clone(), record.clone());
        Ok(())
    }

    async fn list_by_month(&self, month: PayMonth) -> Result<Vec<PayrollRecord>, AmilError> {
        Ok(self
            .docs
            .read()
            .await
            .values()
            .filter(|record| record.month == month)
            .cloned()
            .collect())
    }
}

#[derive(Debug, Default)]
pub struct InMemoryProfileStore {
    profiles: RwLock<BTreeMap<String, EmployeeProfile>>,
}

impl InMemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, employee_id: impl Into<String>, profile: EmployeeProfile) {
        self.profiles
            .write()
            .await
            .insert(employee_id.into(), profile);
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileStore {
    async fn get(&self, employee_id: &str) -> Result<Option<EmployeeProfile>, AmilError> {
        Ok(self.profiles.read().await.get(employee_id).cloned())
    }
}

#[derive(Debug, Default)]
pub struct InMemoryEmployeeDirectory {
    employees: RwLock<Vec<Employee>>,
}

impl InMemoryEmployeeDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn add(&self, employee: Employee) {
        self.employees.write().await.push(employee);
    }
}

#[async_trait]
impl EmployeeDirectory for InMemoryEmployeeDirectory {
    async fn list_all(&self) -> Result<Vec<Employee>, AmilError> {
        Ok(self.employees.read().await.clone())
    }
}

#[derive(Debug, Default)]
pub struct InMemoryTransactionLog {
    entries: RwLock<Vec<Transaction>>,
}

impl InMemoryTransactionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn append(&self, transaction: Transaction) {
        self.entries.write().await.push(transaction);
    }
}

#[async_trait]
impl TransactionRepository for InMemoryTransactionLog {
    async fn list_all(&self) -> Result<Vec<Transaction>, AmilError> {
        Ok(self.entries.read().await.clone())
    }
}
