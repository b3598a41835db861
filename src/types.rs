use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Crate-wide error taxonomy.
///
/// Every fallible operation in this engine returns `Result<T, AmilError>`;
/// repository failures are converted into `Storage` at the service boundary
/// instead of crossing component boundaries as panics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
pub enum AmilError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },
    #[error("storage failure during {operation}: {reason}")]
    Storage { operation: String, reason: String },
    #[error("{entity} '{id}' not found")]
    NotFound { entity: String, id: String },
}

impl AmilError {
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        AmilError::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn storage(operation: impl Into<String>, reason: impl Into<String>) -> Self {
        AmilError::Storage {
            operation: operation.into(),
            reason: reason.into(),
        }
    }

    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        AmilError::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }
}

/// A payroll period, always rendered as `"YYYY-MM"`.
///
/// This is one half of the composite payroll record key
/// (`{employee_id}_{month}`), so the textual form is load-bearing and
/// validated at parse time rather than wherever the key is assembled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PayMonth {
    year: i32,
    month: u32,
}

impl PayMonth {
    pub fn new(year: i32, month: u32) -> Result<Self, AmilError> {
        if !(1..=9999).contains(&year) {
            return Err(AmilError::validation(
                "month",
                format!("year {} out of range", year),
            ));
        }
        if !(1..=12).contains(&month) {
            return Err(AmilError::validation(
                "month",
                format!("month {} out of range 1-12", month),
            ));
        }
        Ok(PayMonth { year, month })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }
}

impl FromStr for PayMonth {
    type Err = AmilError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || AmilError::validation("month", format!("'{}' is not YYYY-MM", s));
        let (year, month) = s.split_once('-').ok_or_else(malformed)?;
        if year.len() != 4 || month.len() != 2 {
            return Err(malformed());
        }
        let year: i32 = year.parse().map_err(|_| malformed())?;
        let month: u32 = month.parse().map_err(|_| malformed())?;
        PayMonth::new(year, month)
    }
}

impl std::fmt::Display for PayMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl TryFrom<String> for PayMonth {
    type Error = AmilError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PayMonth> for String {
    fn from(value: PayMonth) -> Self {
        value.to_string()
    }
}
