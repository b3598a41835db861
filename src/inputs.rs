use crate::types::AmilError;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Trait for converting various types into `Decimal` for monetary fields.
///
/// Allows callers to pass `i64`, `f64`, `&str`, etc. directly into patch
/// setters and constructors without wrapping everything in `dec!()` or
/// `Decimal::from()`.
pub trait IntoMoney {
    fn into_money(self) -> Result<Decimal, AmilError>;
}

impl IntoMoney for Decimal {
    fn into_money(self) -> Result<Decimal, AmilError> {
        Ok(self)
    }
}

macro_rules! impl_into_money_int {
    ($($t:ty),*) => {
        $(
            impl IntoMoney for $t {
                fn into_money(self) -> Result<Decimal, AmilError> {
                    Ok(Decimal::from(self))
                }
            }
        )*
    };
}

impl_into_money_int!(i32, u32, i64, u64, isize, usize);

macro_rules! impl_into_money_float {
    ($($t:ty),*) => {
        $(
            impl IntoMoney for $t {
                fn into_money(self) -> Result<Decimal, AmilError> {
                    Decimal::from_f64_retain(self as f64)
                        .ok_or_else(|| AmilError::validation("amount", format!("invalid float value: {}", self)))
                }
            }
        )*
    };
}

impl_into_money_float!(f32, f64);

impl IntoMoney for &str {
    fn into_money(self) -> Result<Decimal, AmilError> {
        Decimal::from_str(self)
            .map_err(|e| AmilError::validation("amount", format!("invalid amount string: {}", e)))
    }
}

impl IntoMoney for String {
    fn into_money(self) -> Result<Decimal, AmilError> {
        self.as_str().into_money()
    }
}
