//! # Domain Errors
//!
//! ドメイン層のエラー定義

use thiserror::Error;

use crate::domain::services::factorial::MAX_FACTORIAL_INPUT;

/// ドメインエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// 負の数の階乗は定義されない
    #[error("factorial is not defined for negative input: {0}")]
    NegativeFactorial(i64),

    /// 結果が u128 に収まらない
    #[error(
        "factorial of {0} does not fit in 128 bits (max input is {max})",
        max = MAX_FACTORIAL_INPUT
    )]
    FactorialOverflow(i64),
}
