//! # Compute Factorial Use Case
//!
//! 階乗計算ユースケース

use anyhow::Result;
use log::debug;
use std::sync::Arc;

use crate::domain::repositories::output_repository::OutputRepository;
use crate::domain::services::factorial::FactorialService;

/// 階乗計算ユースケース
///
/// n! を計算し、十進表記で出力リポジトリへ書き出す
pub struct ComputeFactorialUseCase<O: OutputRepository> {
    output_repository: Arc<O>,
}

impl<O: OutputRepository> ComputeFactorialUseCase<O> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `output_repository` - 出力リポジトリ
    pub fn new(output_repository: Arc<O>) -> Self {
        Self { output_repository }
    }

    /// 階乗を計算して出力する
    ///
    /// # Arguments
    ///
    /// * `n` - 入力値
    ///
    /// # Returns
    ///
    /// 計算結果
    ///
    /// # Errors
    ///
    /// 入力が範囲外の場合、または出力に失敗した場合にエラーを返す。
    /// 範囲外の場合は何も出力しない。
    pub fn execute(&self, n: i64) -> Result<u128> {
        let value = FactorialService::factorial(n)?;
        debug!("{}! = {}", n, value);
        self.output_repository.write_line(&value.to_string())?;
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::DomainError;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MockOutputRepository {
        lines: Mutex<Vec<String>>,
    }

    impl OutputRepository for MockOutputRepository {
        fn write_line(&self, line: &str) -> Result<()> {
            self.lines.lock().unwrap().push(line.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_compute_factorial_writes_value() {
        let output = Arc::new(MockOutputRepository::default());
        let use_case = ComputeFactorialUseCase::new(output.clone());

        let result = use_case.execute(5);

        assert_eq!(result.unwrap(), 120);
        assert_eq!(*output.lines.lock().unwrap(), vec!["120"]);
    }

    #[test]
    fn test_compute_factorial_zero() {
        let output = Arc::new(MockOutputRepository::default());
        let use_case = ComputeFactorialUseCase::new(output.clone());

        assert_eq!(use_case.execute(0).unwrap(), 1);
        assert_eq!(*output.lines.lock().unwrap(), vec!["1"]);
    }

    #[test]
    fn test_compute_factorial_negative_writes_nothing() {
        let output = Arc::new(MockOutputRepository::default());
        let use_case = ComputeFactorialUseCase::new(output.clone());

        let err = use_case.execute(-2).unwrap_err();

        assert_eq!(
            err.downcast_ref::<DomainError>(),
            Some(&DomainError::NegativeFactorial(-2))
        );
        assert!(output.lines.lock().unwrap().is_empty());
    }

    #[test]
    fn test_compute_factorial_overflow_writes_nothing() {
        let output = Arc::new(MockOutputRepository::default());
        let use_case = ComputeFactorialUseCase::new(output.clone());

        let err = use_case.execute(100).unwrap_err();

        assert_eq!(
            err.downcast_ref::<DomainError>(),
            Some(&DomainError::FactorialOverflow(100))
        );
        assert!(output.lines.lock().unwrap().is_empty());
    }
}
