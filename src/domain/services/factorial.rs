//! # Factorial Service
//!
//! 階乗計算サービス

use crate::domain::errors::DomainError;

/// u128 で表現できる最大の入力（34! < 2^128 < 35!）
pub const MAX_FACTORIAL_INPUT: i64 = 34;

/// 階乗計算サービス
pub struct FactorialService;

impl FactorialService {
    /// n! を再帰で計算する
    ///
    /// # Arguments
    ///
    /// * `n` - 入力値（0 以上 `MAX_FACTORIAL_INPUT` 以下）
    ///
    /// # Errors
    ///
    /// * `n < 0` の場合は `DomainError::NegativeFactorial`
    /// * `n > MAX_FACTORIAL_INPUT` の場合は `DomainError::FactorialOverflow`
    pub fn factorial(n: i64) -> Result<u128, DomainError> {
        if n < 0 {
            return Err(DomainError::NegativeFactorial(n));
        }
        if n > MAX_FACTORIAL_INPUT {
            return Err(DomainError::FactorialOverflow(n));
        }

        Ok(Self::factorial_recursive(n as u128))
    }

    // Depth is bounded by MAX_FACTORIAL_INPUT, so the product cannot overflow.
    fn factorial_recursive(n: u128) -> u128 {
        match n {
            0 => 1,
            _ => n * Self::factorial_recursive(n - 1),
        }
    }
}
